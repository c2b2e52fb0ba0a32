//! Colormap constants for C++ programs.
//!
//! A color function ([`ColorRange`]) is sampled at evenly spaced
//! positions of \[0, 1\] and written as a constant declaration:
//!
//! ```text
//! const ValueColorMap CM_HEAT = {
//!     "heat",
//! {{r0,g0,b0},{r1,g1,b1},...,}
//! };
//! ```
//!
//! - [`Colormap`]: matplotlib-style colormaps looked up by name.
//! - [`Gamma`], [`Banded`], [`Constant`]: warps of color functions.
//! - [`generate`], [`ColorMapConstant`]: sampling and output.
//! - [`Config`]: the parameters of one constant.
//!
//! # Example
//!
//! ```
//! use rgb::RGB;
//! use colormap_constant::{Banded, ColorMapConstant};
//! let cmap = Banded::new(|x: f64| RGB { r: x, g: x, b: x }, 15, 0.75);
//! let c = ColorMapConstant::new("heat", cmap, 3).unwrap();
//! assert_eq!(c.to_string().lines().nth(2),
//!            Some("{{0.05,0.05,0.05},{0.625,0.625,0.625},{0.7625,0.7625,0.7625},}"));
//! ```

use std::marker::PhantomData;

mod palettes;
mod error;
pub mod banded;
pub mod colormap;
pub mod config;
pub mod emit;

pub use error::Error;
pub use banded::{Band, Banded, Constant, Gamma};
pub use colormap::{Colormap, PaletteType};
pub use config::Config;
pub use emit::{generate, sample, write_constant, repr_f64,
               ColorMapConstant, Declaration};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// Functions from positions to colors are color ranges.
impl<Color, F> ColorRange<Color> for F
where F: Fn(f64) -> Color {
    #[inline]
    fn rgb(&self, t: f64) -> Color { self(t) }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// The color of the `k`-th point is taken at `k/(n-1)`, exactly `0.`
/// for the first point and `1.` for the last.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize { (self.j + 1).saturating_sub(self.i) }
}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}
