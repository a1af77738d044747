//! Catalogue runner
//!
//! Loads settings from the environment (a `.env` file is honored), runs the
//! pipeline, and writes the catalogue CSV. Any failure terminates the run
//! with a non-zero exit status and a readable message; nothing is retried.

use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tvsubs_core::{CatalogPipeline, RedditResolver, Settings, WikiClient};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run().await {
        Ok(rows) => {
            println!("wrote {rows} shows");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> tvsubs_core::Result<usize> {
    let settings = Settings::from_env()?;
    info!(source = %settings.source_url, "starting catalogue run");

    let client = WikiClient::new(settings.client_config())?;
    let resolver = RedditResolver::new(settings.credentials())?;

    CatalogPipeline::new(client, resolver)
        .run(&settings.output_path)
        .await
}
