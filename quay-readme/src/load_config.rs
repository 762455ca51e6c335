/// `load_config` module: reads the process environment into a typed [`PublishConfig`].
///
/// This is the only place the tool touches environment variables; everything
/// downstream receives the values as explicit parameters.
///
/// # Variables
/// - `QUAY_API_TOKEN`: bearer token for the registry API
/// - `IMAGE_NAME`: repository (image) name
/// - `REGISTRY_NAMESPACE`: namespace or organisation owning the repository
/// - `README_PATH`: path of the README to publish
///
/// All four are required. A missing or empty variable is an error naming it.
use anyhow::Result;
use quay_readme_core::config::{PublishConfig, RepositoryRef};
use std::env;
use std::path::PathBuf;
use tracing::{error, info};

pub const QUAY_API_TOKEN: &str = "QUAY_API_TOKEN";
pub const IMAGE_NAME: &str = "IMAGE_NAME";
pub const REGISTRY_NAMESPACE: &str = "REGISTRY_NAMESPACE";
pub const README_PATH: &str = "README_PATH";

fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) => {
            error!(var = name, "Environment variable is empty");
            Err(anyhow::anyhow!("{name} environment variable is empty"))
        }
        Err(e) => {
            error!(error = ?e, var = name, "Environment variable not set");
            Err(anyhow::anyhow!("{name} environment variable not set: {e}"))
        }
    }
}

/// Loads the publish configuration from the environment.
pub fn load_config() -> Result<PublishConfig> {
    let api_token = require_env(QUAY_API_TOKEN)?;
    info!("QUAY_API_TOKEN found in env");
    let image = require_env(IMAGE_NAME)?;
    let namespace = require_env(REGISTRY_NAMESPACE)?;
    let readme_path = PathBuf::from(require_env(README_PATH)?);

    let config = PublishConfig {
        api_token,
        repository: RepositoryRef::new(namespace, image),
        readme_path,
    };
    config.trace_loaded();
    Ok(config)
}
