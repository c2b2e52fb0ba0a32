//! Parameters of a generated colormap constant.

use std::io::Write;
use crate::{Error,
            banded::{Banded, Gamma},
            colormap::Colormap,
            emit::{self, ColorMapConstant, Declaration}};

/// Everything needed to produce one colormap constant.  The default
/// is the "heat" colormap: `RdPu` with marker bands at every 1/15.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the constant (upper-cased in the C++ identifier).
    pub name: String,
    /// Name of the base colormap, see [`Colormap::get`].
    pub colormap: String,
    /// Number of samples, at least 2.
    pub n_values: usize,
    /// Number of divisions of \[0, 1\] receiving a marker band.
    pub divisions: u32,
    /// Share of the base colormap used by the banded warp.
    pub offset: f64,
    /// Exponent applied to positions before the base colormap lookup.
    pub gamma: f64,
    pub declaration: Declaration,
}

impl Default for Config {
    fn default() -> Self {
        Config { name: "heat".to_string(),
                 colormap: "RdPu".to_string(),
                 n_values: 500,
                 divisions: 15,
                 offset: 0.75,
                 gamma: 0.8,
                 declaration: Declaration::default() }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() { return Err(Error::EmptyName) }
        if self.n_values < 2 { return Err(Error::TooFewValues(self.n_values)) }
        if self.divisions == 0 { return Err(Error::NoDivisions) }
        Ok(())
    }

    /// The color function sampled by this configuration: the base
    /// colormap behind a gamma warp, itself behind the banded warp.
    pub fn color_fn(&self) -> Result<Banded<Gamma<Colormap>>, Error> {
        let base = Colormap::get(&self.colormap)?;
        Ok(Banded::new(Gamma::new(base, self.gamma),
                       self.divisions, self.offset))
    }

    pub fn constant(&self) -> Result<ColorMapConstant, Error> {
        self.validate()?;
        let c = ColorMapConstant::new(&self.name, self.color_fn()?,
                                      self.n_values)?;
        Ok(c.with_declaration(self.declaration.clone()))
    }

    /// Write the constant declaration to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<(), Error> {
        emit::write_constant(out, &self.constant()?)
    }
}
