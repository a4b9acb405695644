use clap::Parser;
use crate::structs::cli::Cli;
use crate::workers::command_runner::CommandRunner;

mod config;
mod enums;
mod errors;
mod logger;
mod services;
mod structs;
mod workers;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(e) = runner.run_command(cli.command).await {
        log::error!("❌ Audit failed: {}", e);
        std::process::exit(1);
    }
}
