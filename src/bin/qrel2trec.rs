// file: src/bin/qrel2trec.rs
// description: prints the judgments of one query file in TREC qrels format
// reference: application bootstrap

use anyhow::{Context, Result};
use cf_prep::TrecFormatter;
use cf_prep::utils::logging::{init_logger, level_for};
use clap::{ArgAction, Parser};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "qrel2trec")]
#[command(version)]
#[command(about = "Convert QRELs to TREC format", long_about = None)]
struct Cli {
    /// Path to QREL data.
    #[arg(
        long,
        value_name = "FILE",
        env = "CF_PREP_QRELS",
        default_value = "docker/data/qrels/00001.json"
    )]
    qrels: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, level_for(cli.verbose, "warn"));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let count = TrecFormatter::new()
        .write_file(&cli.qrels, &mut out)
        .with_context(|| format!("Failed to convert {}", cli.qrels.display()))?;

    debug!("Wrote {} TREC lines", count);
    Ok(())
}
