//! Bands command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, print_json, Printer};
use crate::raster::Raster;

/// List the bands of a raster image
#[derive(Args, Debug)]
pub struct BandsArgs {
    /// Image file to read
    #[arg(required = true)]
    pub file: PathBuf,
}

pub fn run(args: BandsArgs, printer: &Printer) -> Result<()> {
    let raster = Raster::open(&args.file)?;

    printer.status(
        "Read",
        &format!(
            "{} ({}x{}, {})",
            display_path(&args.file),
            raster.width(),
            raster.height(),
            plural(raster.bands().len(), "band", "bands")
        ),
    );

    print_json(raster.bands())
}
