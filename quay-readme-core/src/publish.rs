//! Description publishing.
//!
//! [`publish_description`] performs exactly one request through a
//! [`RepositoryApi`]. Only status 200 counts as success; everything else is
//! reported with the message from [`API_ERRORS`] (or [`UNKNOWN_API_ERROR`]).
//! There is no retry.

use thiserror::Error;
use tracing::{error, info};

use crate::contract::{RepositoryApi, TransportError};

/// Human readable messages for the status codes the registry documents.
pub const API_ERRORS: &[(u16, &str)] = &[
    (400, "Bad Request"),
    (401, "Session required"),
    (403, "Unauthorized access"),
    (404, "Not found"),
];

pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

#[derive(Debug, Error)]
pub enum PublishError {
    /// The registry answered with something other than 200.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: &'static str },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Message for a non-200 status.
pub fn api_error_message(status: u16) -> &'static str {
    API_ERRORS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, message)| *message)
        .unwrap_or(UNKNOWN_API_ERROR)
}

/// Publishes `description` to the repository at `url`.
///
/// On failure the diagnostic is printed to stdout before the error is returned.
pub async fn publish_description<A>(
    api: &A,
    url: &str,
    description: &str,
) -> Result<(), PublishError>
where
    A: RepositoryApi + ?Sized,
{
    info!(url, bytes = description.len(), "Publishing repository description");

    let status = match api.put_description(url, description).await {
        Ok(status) => status,
        Err(e) => {
            error!(error = %e, url, "Request did not reach the registry");
            let err = PublishError::from(e);
            println!("{err}");
            return Err(err);
        }
    };

    if status != 200 {
        let message = api_error_message(status);
        error!(status, message, "Registry rejected description update");
        println!("{message}");
        return Err(PublishError::Api { status, message });
    }

    info!(status, "Repository description updated");
    Ok(())
}
