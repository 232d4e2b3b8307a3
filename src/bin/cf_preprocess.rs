// file: src/bin/cf_preprocess.rs
// description: extractor entry point, CF xml collection to json records and qrels
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use cf_prep::config::DEFAULT_CONFIG_PATH;
use cf_prep::utils::logging::{format_success, init_logger, level_for};
use cf_prep::{Config, Extractor};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "cf-preprocess")]
#[command(version)]
#[command(about = "Convert the CF collection and its queries from XML to JSON", long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(
        long = "config-path",
        alias = "config_path",
        value_name = "FILE",
        env = "CF_PREP_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    config_path: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    /// Activate verbose mode for detailed output.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, level_for(cli.verbose, "info"));

    info!("Loading configuration from: {}", cli.config_path.display());

    let config =
        Config::load(Some(cli.config_path.as_path())).context("Failed to load configuration")?;
    let output = config.output.clone();

    let stats = Extractor::new(config)
        .verbose(cli.verbose)
        .colored(cli.color)
        .run()
        .context("Extraction failed")?;

    colored::control::set_override(cli.color);
    eprintln!(
        "{}",
        format_success(&format!(
            "{} documents, {} queries ({} judgments) written to {}",
            stats.documents,
            stats.queries,
            stats.judgments,
            output.display()
        ))
    );

    Ok(())
}
