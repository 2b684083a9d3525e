use anyhow::{Context, Result};
use std::io::Write;

use crate::config;
use crate::pipeline;
use crate::providers;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Help,
    Version,
}

/// Interpret the arguments after the program name.
///
/// Everything that is not a recognised flag is a query word. Words are joined
/// with single spaces; `--` ends flag handling.
pub fn parse_args(args: &[String]) -> Command {
    let mut words: Vec<&str> = Vec::new();
    let mut flags_done = false;

    for arg in args {
        if !flags_done {
            match arg.as_str() {
                "-h" | "--help" => return Command::Help,
                "-V" | "--version" => return Command::Version,
                "--" => {
                    flags_done = true;
                    continue;
                }
                _ => {}
            }
        }
        words.push(arg);
    }

    Command::Search(words.join(" "))
}

/// Fetch, filter and print the result document. Fetch and decode failures are
/// reported inside the document, never as an error.
pub async fn handle_search(query: &str) -> Result<()> {
    let config = config::resolve_config(config::load_config()).with_env();

    let source = providers::create_source(&config);
    tracing::debug!(source = source.name(), query, "searching catalog");
    let feed = source.fetch().await;

    let doc = pipeline::render(query, feed, &config.settings())
        .context("Failed to serialize results")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{doc}").context("Failed to write results")?;
    Ok(())
}

pub fn print_help() {
    println!("evolution — look up evolution proposals\n");
    println!("USAGE:");
    println!("  evolution [query...]   Print matching proposals as JSON");
    println!();
    println!("QUERIES:");
    println!("  (none)                 List every proposal, newest first");
    println!("  <number>               The proposal with that number, e.g. 302");
    println!("  <words>                Proposals containing every word");
    println!();
    println!("CONFIG:");
    println!("  <config dir>/evolution/config.toml  feed_url, feed_path, base_url, icon");
    println!("  EVOLUTION_FEED_URL, EVOLUTION_FEED_PATH override the file");
}

pub fn print_version() {
    println!("evolution {}", env!("CARGO_PKG_VERSION"));
}
