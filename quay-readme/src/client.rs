#![doc = "Registry client: the reqwest implementation of the core `RepositoryApi` trait."]
//
//! # Quay client
//!
//! [`QuayClient`] is what the CLI hands to
//! [`quay_readme_core::publish::publish_description`]. It owns the bearer token
//! and turns a description update into one authenticated `PUT`.
//!
//! No retries and no timeout override: a request either yields a status code or
//! a [`TransportError`].

use async_trait::async_trait;
use quay_readme_core::contract::{DescriptionUpdate, RepositoryApi, TransportError};
use reqwest::header::CONTENT_TYPE;

pub struct QuayClient {
    http: reqwest::Client,
    api_token: String,
}

impl QuayClient {
    pub fn new(api_token: impl Into<String>) -> Self {
        let api_token = api_token.into();
        tracing::info!(
            api_token_set = !api_token.is_empty(),
            "Initialized QuayClient"
        );
        QuayClient {
            http: reqwest::Client::new(),
            api_token,
        }
    }
}

#[async_trait]
impl RepositoryApi for QuayClient {
    async fn put_description(
        &self,
        url: &str,
        description: &str,
    ) -> Result<u16, TransportError> {
        tracing::info!(url, "Sending description update");
        let result = self
            .http
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_token)
            .json(&DescriptionUpdate { description })
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::info!(status, url, "Registry responded");
                Ok(status)
            }
            Err(e) => {
                tracing::error!(error = ?e, url, "Failed to send description update");
                Err(TransportError(e.to_string()))
            }
        }
    }
}
