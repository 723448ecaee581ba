//! passport-cli entry point

mod cli;
mod deal;
mod passport;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli::Cli::parse();
    cli::run(args)
}
