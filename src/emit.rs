//! Sampling of color functions and serialization as a C++ constant.

use std::{fmt,
          io::{self, BufWriter, Write}};
use rgb::RGB;
use crate::{ColorRange, Error};

/// Return the colors of `color_fn` at the `n` positions `i/(n-1)`,
/// `i = 0,..., n-1`.  The first position is exactly `0.` and the
/// last exactly `1.`.
pub fn sample<R, Color>(color_fn: R, n: usize) -> Vec<Color>
where R: ColorRange<Color> {
    color_fn.range(0., 1., n).map(|(_, c)| c).collect()
}

/// Format `x` as Python's `repr` does: shortest digits reading back
/// as `x`, always with a decimal point or an exponent, and a two digit
/// signed exponent outside \[1e-4, 1e16).
pub fn repr_f64(x: f64) -> String {
    if x.is_nan() { return "nan".to_string() }
    let s = format!("{x:?}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

/// Header of the generated declaration, `const ValueColorMap` by
/// default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Storage class and cv-qualifiers, e.g. `"static const"`.
    pub qualifier: String,
    /// C++ type of the constant.
    pub type_name: String,
}

impl Declaration {
    pub fn new(qualifier: &str, type_name: &str) -> Self {
        Declaration { qualifier: qualifier.to_string(),
                      type_name: type_name.to_string() }
    }
}

impl Default for Declaration {
    fn default() -> Self { Declaration::new("const", "ValueColorMap") }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.qualifier.is_empty() {
            write!(f, "{}", self.type_name)
        } else {
            write!(f, "{} {}", self.qualifier, self.type_name)
        }
    }
}

/// A named table of colors, printed as
///
/// ```text
/// const ValueColorMap CM_HEAT = {
///     "heat",
/// {{r0,g0,b0},{r1,g1,b1},...,}
/// };
/// ```
#[derive(Clone, Debug)]
pub struct ColorMapConstant {
    name: String,
    colors: Vec<RGB<f64>>, // Invariant: length ≥ 2
    declaration: Declaration,
}

impl ColorMapConstant {
    /// Sample `color_fn` at `n_values` evenly spaced positions of
    /// \[0, 1\] (see [`sample`]).
    pub fn new<R>(name: &str, color_fn: R, n_values: usize)
                  -> Result<Self, Error>
    where R: ColorRange<RGB<f64>> {
        if name.is_empty() { return Err(Error::EmptyName) }
        if n_values < 2 { return Err(Error::TooFewValues(n_values)) }
        Ok(ColorMapConstant { name: name.to_string(),
                              colors: sample(color_fn, n_values),
                              declaration: Declaration::default() })
    }

    /// Use `declaration` as the header of the constant.
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declaration = declaration;
        self
    }

    pub fn name(&self) -> &str { &self.name }

    /// The sampled colors, in order.
    pub fn colors(&self) -> &[RGB<f64>] { &self.colors }

    pub fn declaration(&self) -> &Declaration { &self.declaration }
}

impl fmt::Display for ColorMapConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} CM_{} = {{",
                 self.declaration, self.name.to_uppercase())?;
        writeln!(f, "    \"{}\",", self.name)?;
        write!(f, "{{")?;
        for &RGB { r, g, b } in &self.colors {
            write!(f, "{{{},{},{}}},", repr_f64(r), repr_f64(g), repr_f64(b))?;
        }
        writeln!(f, "}}")?;
        writeln!(f, "}};")
    }
}

/// Write the declaration of `constant` to `out`.
pub fn write_constant(out: &mut impl Write, constant: &ColorMapConstant)
                      -> Result<(), Error> {
    write!(out, "{constant}")?;
    Ok(())
}

/// Print on the standard output the constant named `name` holding
/// `n_values` colors of `color_fn`.
pub fn generate<R>(name: &str, color_fn: R, n_values: usize)
                   -> Result<(), Error>
where R: ColorRange<RGB<f64>> {
    let constant = ColorMapConstant::new(name, color_fn, n_values)?;
    let stdout = io::stdout();
    let mut fh = BufWriter::new(stdout.lock());
    write_constant(&mut fh, &constant)?;
    fh.flush()?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::banded::{Banded, Constant};

    fn gray(x: f64) -> RGB<f64> { RGB { r: x, g: x, b: x } }

    #[test]
    fn repr() {
        assert_eq!(repr_f64(1.), "1.0");
        assert_eq!(repr_f64(0.), "0.0");
        assert_eq!(repr_f64(0.05), "0.05");
        assert_eq!(repr_f64(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(repr_f64(0.0001), "0.0001");
        assert_eq!(repr_f64(1e-5), "1e-05");
        assert_eq!(repr_f64(1.5e-7), "1.5e-07");
        assert_eq!(repr_f64(1e16), "1e+16");
        assert_eq!(repr_f64(1.3877787807814457e-17),
                   "1.3877787807814457e-17");
        assert_eq!(repr_f64(f64::NAN), "nan");
    }

    #[test]
    fn sample_positions() {
        for n in [2, 3, 7, 500] {
            let s: Vec<f64> = sample(|x: f64| x, n);
            assert_eq!(s.len(), n);
            assert_eq!(s[0], 0.);
            assert_eq!(s[n - 1], 1.);
            for (i, &x) in s.iter().enumerate() {
                assert_eq!(x, i as f64 / (n - 1) as f64);
            }
        }
    }

    #[test]
    fn heat_with_gray_gradient() {
        let cmap = Banded::new(gray, 15, 0.75);
        let c = ColorMapConstant::new("heat", cmap, 3).unwrap();
        assert_eq!(c.colors().len(), 3);
        assert_eq!(c.to_string(),
                   "const ValueColorMap CM_HEAT = {\n    \"heat\",\n\
                    {{0.05,0.05,0.05},{0.625,0.625,0.625},\
                    {0.7625,0.7625,0.7625},}\n};\n");
    }

    #[test]
    fn deterministic() {
        let run = || {
            let c = ColorMapConstant::new("heat", Banded::new(gray, 15, 0.75),
                                          101).unwrap();
            let mut buf = Vec::new();
            write_constant(&mut buf, &c).unwrap();
            buf
        };
        let out = run();
        assert_eq!(out, run());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.matches("},").count(), 101);
    }

    #[test]
    fn constant_colormap() {
        let red = RGB { r: 196. / 255., g: 133. / 255., b: 133. / 255. };
        let c = ColorMapConstant::new("const_red", Constant(red), 2).unwrap()
            .with_declaration(Declaration::new("static const", "Colormap"));
        let text = c.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("static const Colormap CM_CONST_RED = {"));
        assert_eq!(lines.next(), Some("    \"const_red\","));
        let r = repr_f64(196. / 255.);
        let g = repr_f64(133. / 255.);
        let entry = format!("{{{r},{g},{g}}},");
        assert_eq!(lines.next(), Some(format!("{{{entry}{entry}}}").as_str()));
        assert_eq!(lines.next(), Some("};"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn invalid() {
        assert!(matches!(ColorMapConstant::new("", gray, 10),
                         Err(Error::EmptyName)));
        assert!(matches!(ColorMapConstant::new("heat", gray, 1),
                         Err(Error::TooFewValues(1))));
        assert!(matches!(ColorMapConstant::new("heat", gray, 0),
                         Err(Error::TooFewValues(0))));
    }

    #[test]
    fn bare_declaration() {
        let d = Declaration::new("", "ValueColorMap");
        assert_eq!(d.to_string(), "ValueColorMap");
        assert_eq!(Declaration::default().to_string(), "const ValueColorMap");
    }
}
