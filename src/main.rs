mod catalog;
mod cli;
mod config;
mod error;
mod format;
mod matcher;
mod model;
mod pipeline;
mod providers;
mod telemetry;

use anyhow::Result;

use cli::Command;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match cli::parse_args(&args) {
        Command::Help => cli::print_help(),
        Command::Version => cli::print_version(),
        Command::Search(query) => cli::handle_search(&query).await?,
    }

    Ok(())
}
