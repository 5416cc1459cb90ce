//! Cookbook CLI - Command line tool for listing and querying date ranges.

use clap::Parser;
use std::io;

#[derive(Parser)]
#[command(
    name = "cookbook-cli",
    version,
    about = "Inclusive calendar date range toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cookbook_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Running {:?}", cli.command);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cookbook_cmd::run(cli.command, &mut out)
}
