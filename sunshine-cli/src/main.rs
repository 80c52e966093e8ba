//! Sunshine CLI - Command line tool for the sunshine state of the month.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sunshine-cli",
    version,
    about = "Sunshine state of the month toolkit"
)]
struct Cli {
    /// Path to the sunshine CSV (city,month,lon,lat,sunshine)
    #[arg(short, long, global = true, default_value = "fixtures/sunshine.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: sunshine_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using dataset {}", cli.data.display());
    sunshine_cmd::run(&cli.data, cli.command).await
}
