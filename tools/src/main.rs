// Print on stdout the C++ declaration of the "heat" colormap, to be
// pasted in the colormap table of the consuming program.

use std::{error::Error,
          io::{self, BufWriter, prelude::*}};
use colormap_constant::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::default();
    let stdout = io::stdout();
    let mut fh = BufWriter::new(stdout.lock());
    config.run(&mut fh)?;
    fh.flush()?;
    Ok(())
}
