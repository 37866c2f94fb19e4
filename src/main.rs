use clap::Parser;
use geostyle::cli::{Cli, Commands};
use geostyle::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Rule(args) => geostyle::cli::rule::run(args, &printer)?,
        Commands::Validate(args) => geostyle::cli::validate::run(args, &printer)?,
        Commands::Tile(args) => geostyle::cli::tile::run(args, &printer)?,
        Commands::Bands(args) => geostyle::cli::bands::run(args, &printer)?,
        Commands::Completions(args) => geostyle::cli::completions::run(args)?,
    }

    Ok(())
}
