use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jsonselector::config::{Config, QueryMode};
use jsonselector::file::loader::{
    load_input_file, load_input_from_stdin, InputFormat, LoadedInput,
};
use jsonselector::selector::{JsonSelect, JsonSelector};

/// JSONSelector - query JSON documents with a JSONPath subset
#[derive(Parser)]
#[command(name = "jsonselector")]
#[command(version)]
#[command(about = "Query JSON documents with a JSONPath subset", long_about = None)]
struct Cli {
    /// Selector, e.g. "$.items[?(@.kind=='x')].id" or "$.id >= 10"
    selector: String,

    /// JSON file to query (omit to read from stdin); .gz, .jsonl and .ndjson are recognized
    file: Option<String>,

    /// Query mode (default from config: string)
    #[arg(short, long, value_enum)]
    mode: Option<QueryMode>,

    /// Treat the input as JSON Lines, one document per line
    #[arg(short, long)]
    lines: bool,

    /// Tracing filter such as "debug"; takes precedence over RUST_LOG and the config
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(cli_filter: Option<&str>, config_filter: &str) {
    let filter = match cli_filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_filter)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load();
    init_tracing(cli.log_level.as_deref(), &config.log_level);

    let mut input = if let Some(file_path) = &cli.file {
        load_input_file(file_path)?
    } else if io::stdin().is_terminal() {
        bail!("No input: pass a FILE or pipe JSON on stdin");
    } else {
        load_input_from_stdin()?
    };
    if cli.lines {
        input.format = InputFormat::JsonLines;
    }

    let mode = cli.mode.unwrap_or(config.mode);
    let stdout = io::stdout();
    let matched = run_query(&input, &cli.selector, mode, &config, &mut stdout.lock())?;
    debug!(matched, ?mode, "query finished");

    if matched == 0 && config.fail_on_missing {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Runs the selector against every document, writing one line per document.
///
/// Returns how many documents matched.
fn run_query<W: Write>(
    input: &LoadedInput,
    selector: &str,
    mode: QueryMode,
    config: &Config,
    out: &mut W,
) -> Result<usize> {
    let engine = JsonSelector::new();
    let mut matched = 0;

    for document in input.documents() {
        let value = match mode {
            QueryMode::Any => {
                let found = engine.any(document, selector);
                writeln!(out, "{}", found)?;
                if found {
                    matched += 1;
                }
                continue;
            }
            QueryMode::String => engine.first_string(document, selector),
            QueryMode::Int => engine.first_int(document, selector).map(|n| n.to_string()),
        };

        match value {
            Some(text) => {
                matched += 1;
                writeln!(out, "{}", text)?;
            }
            None if !config.missing_placeholder.is_empty() => {
                writeln!(out, "{}", config.missing_placeholder)?;
            }
            None => {}
        }
    }

    Ok(matched)
}
