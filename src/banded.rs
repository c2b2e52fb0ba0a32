//! Warps of color functions: the gamma warp and the banded warp
//! emphasizing the boundaries between divisions of \[0, 1\].

use crate::ColorRange;

/// The color function `s ↦ base(s^exponent)`.  An exponent below 1
/// compresses the values toward the high end of `base`.
#[derive(Clone, Debug)]
pub struct Gamma<R> {
    base: R,
    exponent: f64,
}

impl<R> Gamma<R> {
    pub fn new(base: R, exponent: f64) -> Self { Gamma { base, exponent } }
}

impl<Color, R> ColorRange<Color> for Gamma<R>
where R: ColorRange<Color> {
    fn rgb(&self, s: f64) -> Color { self.base.rgb(s.powf(self.exponent)) }
}

/// Branch of [`Banded`] taken by a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// Near a multiple of `1/divisions`: the position is squeezed to
    /// the low end of the base colormap.
    Marker,
    /// Elsewhere: the position is mapped to the high end of the base
    /// colormap.
    Smooth,
}

/// Color function inserting marker bands around each multiple of
/// `1/divisions` of \[0, 1\] while keeping a smooth gradient in
/// between.
///
/// With `ds = 1/divisions`, a position `s` with `|s mod ds| < ds/2`
/// is a [`Band::Marker`] and evaluates `base` at `0.05 + 0.95 offset s`;
/// other positions evaluate it at `offset s + (1 - offset)`.
///
/// The modulo is the floating-point remainder, so positions at exact
/// multiples of `ds` may land on either side of the boundary
/// depending on rounding (e.g., with 15 divisions, `5/15` is
/// [`Band::Smooth`] while `1.` is a [`Band::Marker`]).
#[derive(Clone, Debug)]
pub struct Banded<R> {
    base: R,
    divisions: u32,
    offset: f64,
}

impl<R> Banded<R> {
    pub fn new(base: R, divisions: u32, offset: f64) -> Self {
        Banded { base, divisions, offset }
    }

    /// Return the branch taken by `s`.
    pub fn band(&self, s: f64) -> Band {
        let ds = 1. / self.divisions as f64;
        if (s % ds).abs() < ds / 2. { Band::Marker } else { Band::Smooth }
    }

    /// Return the position at which `base` is evaluated for `s`.
    pub fn position(&self, s: f64) -> f64 {
        match self.band(s) {
            Band::Marker => 0.05 + 0.95 * self.offset * s,
            Band::Smooth => self.offset * s + (1. - self.offset),
        }
    }
}

impl<Color, R> ColorRange<Color> for Banded<R>
where R: ColorRange<Color> {
    fn rgb(&self, s: f64) -> Color { self.base.rgb(self.position(s)) }
}

/// Color function returning the same color everywhere.
#[derive(Clone, Copy, Debug)]
pub struct Constant<Color>(pub Color);

impl<Color: Copy> ColorRange<Color> for Constant<Color> {
    #[inline]
    fn rgb(&self, _: f64) -> Color { self.0 }
}
