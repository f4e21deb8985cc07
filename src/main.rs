use anyhow::Result;
use clap::Parser;
use macsweep::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
