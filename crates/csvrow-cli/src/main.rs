//! csvrow command-line interface.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use csvrow::{write_json_to, Config};
use serde_json::Value as Json;
use tracing::{debug, info};

mod cli;
mod logging;

use crate::cli::Cli;
use crate::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity.tracing_level_filter());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            let yaml = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            Config::from_yaml(&yaml)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => Config::default(),
    };
    let config = cli.apply(config);
    debug!(?config, "effective options");

    let input = read_input(cli)?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_output(BufWriter::new(file), &input, &config)?;
            info!(path = %path.display(), "wrote csv");
        }
        None => write_output(io::stdout().lock(), &input, &config)?,
    }
    Ok(())
}

fn read_input(cli: &Cli) -> Result<Json> {
    let value: Json = match cli.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("invalid JSON in {}", path.display()))?
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            serde_json::from_str(&text).context("invalid JSON on stdin")?
        }
    };
    Ok(value)
}

fn write_output<W: Write>(mut writer: W, input: &Json, config: &Config) -> Result<()> {
    write_json_to(&mut writer, input, &config.table, &config.writer)
        .context("failed to convert input")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}
