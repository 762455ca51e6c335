//! # quay-readme CLI
//!
//! Argument parsing and the top-level procedure of the tool:
//! environment → README → registry, in that order and exactly once.
//!
//! All README and publishing logic lives in [`quay_readme_core`]; this module
//! only wires it together and decides what counts as a failed run.

use crate::client::QuayClient;
use crate::load_config::load_config;
use anyhow::Result;
use clap::Parser;
use quay_readme_core::config::DEFAULT_API_BASE;
use quay_readme_core::publish::publish_description;
use quay_readme_core::readme::load_readme;

/// Publish a README as the description of a Quay image repository.
///
/// Configuration comes from QUAY_API_TOKEN, IMAGE_NAME, REGISTRY_NAMESPACE and README_PATH.
#[derive(Parser, Debug)]
#[clap(
    name = "quay-readme",
    version,
    about = "Publish a README as the description of a Quay image repository"
)]
pub struct Cli {
    /// Base URL of the registry API
    #[clap(long, default_value_t = DEFAULT_API_BASE.to_string())]
    pub api_base: String,

    /// Print the prepared description instead of publishing it
    #[clap(long)]
    pub dry_run: bool,
}

/// CLI entrypoint shared by `main()` and the integration tests.
///
/// Every failure is returned as an error; the user-facing diagnostic has
/// already been printed by the step that failed.
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    let config = load_config()?;
    let url = config.repository.api_url(&cli.api_base);

    let description = match load_readme(&config.readme_path)? {
        Some(description) => description,
        None => anyhow::bail!("README not found at {}", config.readme_path.display()),
    };

    if cli.dry_run {
        tracing::info!(url = %url, "Dry run, skipping publish");
        print!("{description}");
        return Ok(());
    }

    let client = QuayClient::new(config.api_token.as_str());
    publish_description(&client, &url, &description).await?;

    tracing::info!(repository = %config.repository, "Description published");
    println!("Operation successful");
    Ok(())
}
