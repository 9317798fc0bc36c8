use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = goamet_randpass::cli::Cli::parse();
    cli.run()
}
