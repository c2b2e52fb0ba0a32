//! Matplotlib-style colormaps built from Brewer palettes.
//!
//! A [`Colormap`] is a lookup table of [`N`] colors obtained by linear
//! interpolation of the palette colors, evenly spaced on \[0, 1\].
//! Evaluating it at `x` picks the entry `⌊x N⌋`, the way matplotlib's
//! `Colormap.__call__` does for floats.

use rgb::{RGB, RGBA};
use crate::{ColorRange, Error, palettes::{self, ty::PaletteData}};
pub use crate::palettes::ty::PaletteType;

/// Number of entries in the lookup table of a [`Colormap`].
pub const N: usize = 256;

/// A colormap sampled in a lookup table.  See the [`ColorRange`]
/// trait for evaluation.
#[derive(Clone, Debug)]
pub struct Colormap {
    name: String,
    typ: PaletteType,
    lut: Vec<RGBA<f64>>, // Invariant: length N, components in [0, 1]
}

/// Interpolate `y`, seen as values at evenly spaced points of \[0,
/// 1\], at the `N` evenly spaced points of \[0, 1\].
fn lookup_table(y: &[f64]) -> [f64; N] {
    let m = y.len();
    let dx = 1. / (m - 1) as f64;
    let flast = (N - 1) as f64;
    let x: Vec<f64> = (0 .. m)
        .map(|k| if k == m - 1 { flast } else { k as f64 * dx * flast })
        .collect();
    let dxi = 1. / flast;
    let mut lut = [0.; N];
    lut[0] = y[0];
    lut[N - 1] = y[m - 1];
    for i in 1 .. N - 1 {
        let xi = flast * (i as f64 * dxi);
        // First k with x[k] ≥ xi; x[0] = 0 < xi ≤ x[m-1] so 1 ≤ k < m.
        let k = x.partition_point(|&xk| xk < xi);
        let distance = (xi - x[k - 1]) / (x[k] - x[k - 1]);
        lut[i] = distance * (y[k] - y[k - 1]) + y[k - 1];
    }
    lut.map(|c| c.clamp(0., 1.))
}

impl Colormap {
    fn new(palette: &PaletteData) -> Self {
        let channel = |f: fn(&RGBA<f64>) -> f64| -> [f64; N] {
            let y: Vec<f64> = palette.rgb.iter().map(|c| f(c) / 255.)
                .collect();
            lookup_table(&y)
        };
        let r = channel(|c| c.r);
        let g = channel(|c| c.g);
        let b = channel(|c| c.b);
        let a = channel(|c| c.a);
        let lut = (0 .. N)
            .map(|i| RGBA { r: r[i], g: g[i], b: b[i], a: a[i] })
            .collect();
        Colormap { name: palette.name.to_string(), typ: palette.typ, lut }
    }

    /// Return the colormap named `name` (matplotlib names such as
    /// `"RdPu"` or `"Spectral"`).  A `"_r"` suffix gives the
    /// [reversed][Colormap::reversed] colormap.
    ///
    /// # Example
    ///
    /// ```
    /// use colormap_constant::Colormap;
    /// let cm = Colormap::get("RdPu_r").unwrap();
    /// assert_eq!(cm.name(), "RdPu_r");
    /// ```
    pub fn get(name: &str) -> Result<Self, Error> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let palette = palettes::ALL_PALETTES.iter()
            .find(|p| p.name == base)
            .ok_or_else(|| Error::UnknownColormap(name.to_string()))?;
        let cm = Colormap::new(palette);
        Ok(if reversed { cm.reversed() } else { cm })
    }

    /// The name of the colormap.
    pub fn name(&self) -> &str { &self.name }

    /// Says whether the colormap is `Seq`uential or `Div`ergent.
    pub fn typ(&self) -> PaletteType { self.typ }

    /// Number of entries of the lookup table, always [`N`].
    pub fn len(&self) -> usize { self.lut.len() }

    /// Return the colormap running in the opposite direction.
    /// Reversing twice gives back the original colormap.
    pub fn reversed(&self) -> Self {
        let name = match self.name.strip_suffix("_r") {
            Some(n) => n.to_string(),
            None => format!("{}_r", self.name),
        };
        let lut = self.lut.iter().rev().copied().collect();
        Colormap { name, typ: self.typ, lut }
    }

    /// Returns the color, including its alpha component, at `x`.
    ///
    /// Values below 0 give the first color and values above 1 the
    /// last one.  NaN gives a transparent black.
    pub fn rgba(&self, x: f64) -> RGBA<f64> {
        if x.is_nan() {
            return RGBA { r: 0., g: 0., b: 0., a: 0. }
        }
        if x < 0. { return self.lut[0] }
        let xn = x * N as f64;
        // `as` saturates, so huge `x` also land on the last entry.
        let i = if xn == N as f64 { N - 1 } else { (xn as usize).min(N - 1) };
        self.lut[i]
    }
}

impl ColorRange<RGB<f64>> for Colormap {
    /// Returns the RGB color at `x`, discarding alpha.
    fn rgb(&self, x: f64) -> RGB<f64> {
        let RGBA { r, g, b, .. } = self.rgba(x);
        RGB { r, g, b }
    }
}

/// Names of all known colormaps (reversed variants excluded).
pub fn names() -> impl Iterator<Item = &'static str> {
    palettes::ALL_PALETTES.iter().map(|p| p.name)
}

/// String keyed colormap lookup: returns the function mapping a
/// position in \[0, 1\] to the color of the colormap `name`.
pub fn lookup(name: &str) -> Result<impl ColorRange<RGB<f64>>, Error> {
    Colormap::get(name)
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lookup_table_endpoints() {
        let cm = Colormap::get("RdPu").unwrap();
        assert_eq!(cm.len(), N);
        let first = cm.rgba(0.);
        assert_abs_diff_eq!(first.r, 1.);
        assert_abs_diff_eq!(first.g, 247. / 255.);
        assert_abs_diff_eq!(first.b, 243. / 255.);
        assert_abs_diff_eq!(first.a, 1.);
        let last = cm.rgba(1.);
        assert_abs_diff_eq!(last.r, 73. / 255.);
        assert_abs_diff_eq!(last.g, 0.);
        assert_abs_diff_eq!(last.b, 106. / 255.);
    }

    #[test]
    fn lookup_table_interpolates() {
        let y = [0., 1., 0.5];
        let lut = lookup_table(&y);
        assert_eq!(lut[0], 0.);
        assert_eq!(lut[N - 1], 0.5);
        assert_abs_diff_eq!(lut[51], 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(lut[204], 0.7, epsilon = 1e-12);
        for w in lut[.. 128].windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn indexing_like_matplotlib() {
        let cm = Colormap::get("Greys").unwrap();
        assert_eq!(cm.rgba(1.), cm.lut[N - 1]);
        assert_eq!(cm.rgba(0.999), cm.lut[255]);
        assert_eq!(cm.rgba(0.5), cm.lut[128]);
        assert_eq!(cm.rgba(1. / 256. - 1e-9), cm.lut[0]);
        assert_eq!(cm.rgba(1. / 256.), cm.lut[1]);
        assert_eq!(cm.rgba(-3.), cm.lut[0]);
        assert_eq!(cm.rgba(7.), cm.lut[N - 1]);
        assert_eq!(cm.rgba(f64::INFINITY), cm.lut[N - 1]);
        assert_eq!(cm.rgba(f64::NAN).a, 0.);
    }

    #[test]
    fn channels_in_unit_interval() {
        for name in names() {
            let cm = Colormap::get(name).unwrap();
            for c in &cm.lut {
                for x in [c.r, c.g, c.b, c.a] {
                    assert!((0. ..= 1.).contains(&x), "{name}: {x}");
                }
            }
        }
    }

    #[test]
    fn reversed() {
        let cm = Colormap::get("RdPu").unwrap();
        let r = Colormap::get("RdPu_r").unwrap();
        assert_eq!(r.name(), "RdPu_r");
        assert_eq!(r.rgba(0.), cm.rgba(1.));
        assert_eq!(r.rgba(1.), cm.rgba(0.));
        let rr = r.reversed();
        assert_eq!(rr.name(), "RdPu");
        assert_eq!(rr.lut, cm.lut);
    }

    #[test]
    fn unknown_name() {
        match Colormap::get("NoSuchMap") {
            Err(Error::UnknownColormap(n)) => assert_eq!(n, "NoSuchMap"),
            _ => panic!("NoSuchMap should not exist"),
        }
        assert!(lookup("rdpu").is_err());
        assert!(lookup("Spectral").is_ok());
    }

    #[test]
    fn types() {
        assert_eq!(Colormap::get("RdPu").unwrap().typ(), PaletteType::Seq);
        assert_eq!(Colormap::get("Spectral_r").unwrap().typ(),
                   PaletteType::Div);
    }
}
