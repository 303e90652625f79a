mod catalog;
mod cli;
mod client;
mod config;
mod playlist;
mod types;
mod writer;

use colored::Colorize;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run_cli().await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
