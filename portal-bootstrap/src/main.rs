use std::process::ExitCode;

use clap::Parser;

use portal_infrastructure::CONFIG_ENV;
use portal_interfaces_cli::Command;

#[derive(Parser, Debug)]
#[command(name = "portal")]
#[command(about = "Event registration client for the church portal", long_about = None)]
#[command(version)]
struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var(CONFIG_ENV, config);
    }

    portal_bootstrap::run(args.command).await
}
