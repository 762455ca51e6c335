use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Registry host used when no other base URL is configured.
pub const DEFAULT_API_BASE: &str = "https://quay.io";

/// Namespace and image name that identify a repository in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub namespace: String,
    pub image: String,
}

impl RepositoryRef {
    pub fn new(namespace: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            image: image.into(),
        }
    }

    /// Address of the repository resource below `api_base`,
    /// e.g. `https://quay.io/api/v1/repository/<namespace>/<image>`.
    pub fn api_url(&self, api_base: &str) -> String {
        format!(
            "{}/api/v1/repository/{}/{}",
            api_base.trim_end_matches('/'),
            self.namespace,
            self.image
        )
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.image)
    }
}

/// Everything a single publish run needs.
#[derive(Clone)]
pub struct PublishConfig {
    pub api_token: String,
    pub repository: RepositoryRef,
    pub readme_path: PathBuf,
}

impl PublishConfig {
    pub fn trace_loaded(&self) {
        info!(
            namespace = %self.repository.namespace,
            image = %self.repository.image,
            readme_path = %self.readme_path.display(),
            api_token_set = !self.api_token.is_empty(),
            "Loaded PublishConfig"
        );
        debug!(?self, "PublishConfig loaded (full debug)");
    }
}

// The token must never end up in logs.
impl fmt::Debug for PublishConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishConfig")
            .field("api_token", &"<redacted>")
            .field("repository", &self.repository)
            .field("readme_path", &self.readme_path)
            .finish()
    }
}

