// file: src/bin/query_solr.rs
// description: sends one query to a Solr collection and prints the json response
// reference: application bootstrap

use anyhow::Result;
use cf_prep::{PrepError, QueryParams, SolrClient};
use cf_prep::solr::{DEFAULT_COLLECTION, DEFAULT_SOLR_URI};
use cf_prep::utils::logging::{init_logger, level_for};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "query-solr")]
#[command(version)]
#[command(about = "Fetch search results from Solr and output them in JSON format.", long_about = None)]
struct Cli {
    /// Path to the JSON file containing the Solr query input text.
    #[arg(long, value_name = "FILE")]
    query: PathBuf,

    /// Path to the JSON file containing configuration parameters.
    #[arg(long = "query-cfg", alias = "query_cfg", value_name = "FILE")]
    query_cfg: PathBuf,

    /// The URI of the Solr instance.
    #[arg(long, env = "SOLR_URI", default_value = DEFAULT_SOLR_URI)]
    uri: String,

    /// Name of the Solr collection to query.
    #[arg(long, env = "SOLR_COLLECTION", default_value = DEFAULT_COLLECTION)]
    collection: String,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logger(cli.color, level_for(cli.verbose, "warn"));

    // Missing inputs exit quietly with status 1.
    let request = match SolrClient::load_request(&cli.query, &cli.query_cfg) {
        Ok(request) => request,
        Err(e @ PrepError::FileOperation { .. }) => {
            debug!("Could not load query inputs: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, request).await {
        Ok(results) => {
            println!("{}", results);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error querying Solr: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, request: QueryParams) -> Result<String> {
    let client = SolrClient::new(cli.uri.as_str(), cli.collection.as_str())?;
    let results = client.select(&request).await?;
    Ok(serde_json::to_string_pretty(&results)?)
}
