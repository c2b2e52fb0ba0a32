pub(crate) use rgb::RGBA;

/// The colors a colormap is built from, with their characteristics.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2, in [0, 255]
    pub(crate) typ: PaletteType,
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high. Lightness steps dominate the look of these
    /// schemes, with light colors for low data values to dark colors
    /// for high data values.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data
    /// range.
    Div,
}

/// Opaque color from its 8-bit components.
#[inline]
pub(crate) fn rgb8(r: u8, g: u8, b: u8) -> RGBA<f64> {
    RGBA { r: r as f64, g: g as f64, b: b as f64, a: 255. }
}
