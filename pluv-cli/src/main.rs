//! Pluviometro CLI - stats, tables and month comparisons for rain gauge readings.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pluv-cli",
    version,
    about = "Rain gauge readings toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: pluv_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    pluv_cmd::run(cli.command).await
}
