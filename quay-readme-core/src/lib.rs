#![doc = "quay-readme-core: core logic library for quay-readme."]

//! This crate contains the logic for publishing a README as the description of
//! a container image repository: loading the file, balancing dangling Markdown
//! code fences and sending the prepared text through a [`contract::RepositoryApi`].
//!
//! The HTTP client itself lives in the CLI crate; everything here can be driven
//! with the mocks exported behind the `test-export-mocks` feature.

pub mod config;
pub mod contract;
pub mod fence;
pub mod publish;
pub mod readme;
