//! Command-line interface

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod convert;

#[derive(Parser)]
#[command(name = "passport-cli", version, about = "Convert Passport Excel workbooks into deal API JSON")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a Passport workbook to a deal JSON document
    Convert(ConvertArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the Passport workbook (.xlsx or .xlsm)
    pub file: PathBuf,

    /// Write the JSON to this path instead of the default artifact name
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Compact serialization instead of 2-space indentation
    #[arg(long)]
    pub compact: bool,

    /// Print a conversion summary
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert(args) => convert::handle_convert(args),
    }
}
