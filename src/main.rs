use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{cli::Args, config::Config};

mod cli;
mod config;

const USAGE: &str = "Usage:
  kfmt <number>                            Convert bytes to human readable
  <json> | kfmt --json-fields \"a,b\"        Convert specific JSON fields";

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "kfmt=warn",
        1 => "kfmt=debug",
        _ => "kfmt=trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config: Config = args.try_into()?;

    if !config.values.is_empty() {
        let mut stdout = io::stdout().lock();
        for value in &config.values {
            let formatted = config
                .unit_system
                .format_token(value)
                .with_context(|| format!("error converting {value}"))?;
            writeln!(stdout, "{formatted}")?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    }

    let rewriter = config
        .rewriter
        .ok_or_else(|| anyhow!("error: --json-fields is required when processing JSON"))?;

    let mut input = String::new();
    stdin
        .lock()
        .read_to_string(&mut input)
        .context("error reading stdin")?;
    debug!(bytes = input.len(), "read JSON document from stdin");

    let output = rewriter.rewrite(&input);
    io::stdout().lock().write_all(output.as_bytes())?;

    Ok(ExitCode::SUCCESS)
}
