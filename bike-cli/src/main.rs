//! Bike CLI - Command line tool for the bike rental prediction service.

use bike_core::api::{ServiceConfig, DEFAULT_BASE_URL};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bike-cli",
    version,
    about = "Bike rental demand prediction toolkit"
)]
struct Cli {
    /// Base address of the prediction service
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: bike_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bike_cmd::run(ServiceConfig::new(cli.base_url), cli.command).await
}
