//! Tile command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::error::{Result, StyleError};
use crate::output::{display_path, print_json, Printer};
use crate::raster::Tile;

/// Describe a map tile and its payload
#[derive(Args, Debug)]
pub struct TileArgs {
    /// Zoom level
    pub z: u32,

    /// Column
    pub x: u32,

    /// Row
    pub y: u32,

    /// Encoded image to attach as the tile payload
    #[arg(long)]
    pub payload: Option<PathBuf>,

    /// Include the base64 view of the payload in the output
    #[arg(long)]
    pub base64: bool,
}

pub fn run(args: TileArgs, printer: &Printer) -> Result<()> {
    let mut tile = Tile::new(args.z, args.x, args.y);

    if !on_grid(args.z, args.x, args.y) {
        printer.warning(
            "Outside",
            &format!("{} is not on the zoom {} grid", tile, args.z),
        );
    }

    if let Some(path) = &args.payload {
        let data = fs::read(path).map_err(|e| StyleError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?;
        printer.status("Attached", &display_path(path));
        tile.set_data(data);
    }

    let image = tile.image()?.map(|img| {
        json!({
            "width": img.width(),
            "height": img.height(),
        })
    });

    let mut out = json!({
        "tile": tile.to_string(),
        "z": tile.z,
        "x": tile.x,
        "y": tile.y,
        "bounds": tile.bounds(),
        "bytes": tile.data().map(<[u8]>::len),
        "image": image,
    });
    if args.base64 {
        out["base64"] = json!(tile.base64());
    }

    print_json(&out)?;
    printer.info("Described", &tile.to_string());

    Ok(())
}

/// Whether column and row lie inside the `2^z` by `2^z` grid.
fn on_grid(z: u32, x: u32, y: u32) -> bool {
    // Every u32 fits from zoom 32 up
    match 1u32.checked_shl(z) {
        Some(extent) => x < extent && y < extent,
        None => true,
    }
}
