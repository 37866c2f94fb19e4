pub mod bands;
pub mod completions;
pub mod rule;
pub mod tile;
pub mod validate;

use clap::{Parser, Subcommand};

/// geostyle - Declarative map symbology to renderable style rules
#[derive(Parser, Debug)]
#[command(name = "geostyle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the rules of a style document and print them as JSON
    Rule(rule::RuleArgs),

    /// Check style documents for errors and suspicious values
    Validate(validate::ValidateArgs),

    /// Describe a map tile and its payload
    Tile(tile::TileArgs),

    /// List the bands of a raster image
    Bands(bands::BandsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
