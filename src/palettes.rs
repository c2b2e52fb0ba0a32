// Brewer schemes (9 classes for sequential, 11 for diverging ones)
// from which matplotlib builds the colormaps of the same name.
// See http://colorbrewer2.org/

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
  pub(crate) static ref RDPU: PaletteData = PaletteData {
    name: "RdPu",
    typ: PaletteType::Seq,
    rgb: vec![rgb8(255, 247, 243), rgb8(253, 224, 221), rgb8(252, 197, 192),
              rgb8(250, 159, 181), rgb8(247, 104, 161), rgb8(221, 52, 151),
              rgb8(174, 1, 126), rgb8(122, 1, 119), rgb8(73, 0, 106)],
  };

  pub(crate) static ref PURD: PaletteData = PaletteData {
    name: "PuRd",
    typ: PaletteType::Seq,
    rgb: vec![rgb8(247, 244, 249), rgb8(231, 225, 239), rgb8(212, 185, 218),
              rgb8(201, 148, 199), rgb8(223, 101, 176), rgb8(231, 41, 138),
              rgb8(206, 18, 86), rgb8(152, 0, 67), rgb8(103, 0, 31)],
  };

  pub(crate) static ref YLORRD: PaletteData = PaletteData {
    name: "YlOrRd",
    typ: PaletteType::Seq,
    rgb: vec![rgb8(255, 255, 204), rgb8(255, 237, 160), rgb8(254, 217, 118),
              rgb8(254, 178, 76), rgb8(253, 141, 60), rgb8(252, 78, 42),
              rgb8(227, 26, 28), rgb8(189, 0, 38), rgb8(128, 0, 38)],
  };

  pub(crate) static ref REDS: PaletteData = PaletteData {
    name: "Reds",
    typ: PaletteType::Seq,
    rgb: vec![rgb8(255, 245, 240), rgb8(254, 224, 210), rgb8(252, 187, 161),
              rgb8(252, 146, 114), rgb8(251, 106, 74), rgb8(239, 59, 44),
              rgb8(203, 24, 29), rgb8(165, 15, 21), rgb8(103, 0, 13)],
  };

  pub(crate) static ref ORANGES: PaletteData = PaletteData {
    name: "Oranges",
    typ: PaletteType::Seq,
    rgb: vec![rgb8(255, 245, 235), rgb8(254, 230, 206), rgb8(253, 208, 162),
              rgb8(253, 174, 107), rgb8(253, 141, 60), rgb8(241, 105, 19),
              rgb8(217, 72, 1), rgb8(166, 54, 3), rgb8(127, 39, 4)],
  };

  pub(crate) static ref GREENS: PaletteData = PaletteData {
    name: "Greens",
    typ: PaletteType::Seq,
    rgb: vec![rgb8(247, 252, 245), rgb8(229, 245, 224), rgb8(199, 233, 192),
              rgb8(161, 217, 155), rgb8(116, 196, 118), rgb8(65, 171, 93),
              rgb8(35, 139, 69), rgb8(0, 109, 44), rgb8(0, 68, 27)],
  };

  pub(crate) static ref BLUES: PaletteData = PaletteData {
    name: "Blues",
    typ: PaletteType::Seq,
    rgb: vec![rgb8(247, 251, 255), rgb8(222, 235, 247), rgb8(198, 219, 239),
              rgb8(158, 202, 225), rgb8(107, 174, 214), rgb8(66, 146, 198),
              rgb8(33, 113, 181), rgb8(8, 81, 156), rgb8(8, 48, 107)],
  };

  pub(crate) static ref PURPLES: PaletteData = PaletteData {
    name: "Purples",
    typ: PaletteType::Seq,
    rgb: vec![rgb8(252, 251, 253), rgb8(239, 237, 245), rgb8(218, 218, 235),
              rgb8(188, 189, 220), rgb8(158, 154, 200), rgb8(128, 125, 186),
              rgb8(106, 81, 163), rgb8(84, 39, 143), rgb8(63, 0, 125)],
  };

  pub(crate) static ref GREYS: PaletteData = PaletteData {
    name: "Greys",
    typ: PaletteType::Seq,
    rgb: vec![rgb8(255, 255, 255), rgb8(240, 240, 240), rgb8(217, 217, 217),
              rgb8(189, 189, 189), rgb8(150, 150, 150), rgb8(115, 115, 115),
              rgb8(82, 82, 82), rgb8(37, 37, 37), rgb8(0, 0, 0)],
  };

  pub(crate) static ref RDBU: PaletteData = PaletteData {
    name: "RdBu",
    typ: PaletteType::Div,
    rgb: vec![rgb8(103, 0, 31), rgb8(178, 24, 43), rgb8(214, 96, 77),
              rgb8(244, 165, 130), rgb8(253, 219, 199), rgb8(247, 247, 247),
              rgb8(209, 229, 240), rgb8(146, 197, 222), rgb8(67, 147, 195),
              rgb8(33, 102, 172), rgb8(5, 48, 97)],
  };

  pub(crate) static ref SPECTRAL: PaletteData = PaletteData {
    name: "Spectral",
    typ: PaletteType::Div,
    rgb: vec![rgb8(158, 1, 66), rgb8(213, 62, 79), rgb8(244, 109, 67),
              rgb8(253, 174, 97), rgb8(254, 224, 139), rgb8(255, 255, 191),
              rgb8(230, 245, 152), rgb8(171, 221, 164), rgb8(102, 194, 165),
              rgb8(50, 136, 189), rgb8(94, 79, 162)],
  };
}

lazy_static! {
  pub(crate) static ref ALL_PALETTES: [&'static PaletteData; 11] = [
    &*RDPU, &*PURD, &*YLORRD, &*REDS, &*ORANGES, &*GREENS, &*BLUES,
    &*PURPLES, &*GREYS, &*RDBU, &*SPECTRAL];
}
