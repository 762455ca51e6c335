//! # contract: seam between the publisher and the registry API
//!
//! [`RepositoryApi`] is the only thing the publisher knows about the network.
//! The CLI crate implements it with a real HTTP client; tests use the
//! `mockall`-generated [`MockRepositoryApi`] exported behind the
//! `test-export-mocks` feature.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// JSON body of a description update: `{"description": "<text>"}`.
#[derive(Debug, Clone, Serialize)]
pub struct DescriptionUpdate<'a> {
    pub description: &'a str,
}

/// The request never produced an HTTP status (connect, DNS, TLS, ...).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Registry operations needed to publish a description.
///
/// Implementors own authentication; callers only pass the resource address.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// Sends one PUT with a [`DescriptionUpdate`] body to `url` and returns the
    /// HTTP status code of the response.
    async fn put_description(&self, url: &str, description: &str)
        -> Result<u16, TransportError>;
}
