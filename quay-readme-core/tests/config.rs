use quay_readme_core::config::{PublishConfig, RepositoryRef, DEFAULT_API_BASE};
use std::path::PathBuf;

#[test]
fn api_url_interpolates_namespace_and_image() {
    let repo = RepositoryRef::new("redhat", "ubi9");
    assert_eq!(
        repo.api_url(DEFAULT_API_BASE),
        "https://quay.io/api/v1/repository/redhat/ubi9"
    );
}

#[test]
fn api_url_ignores_trailing_slash_on_base() {
    let repo = RepositoryRef::new("ns", "img");
    assert_eq!(
        repo.api_url("http://127.0.0.1:8080/"),
        "http://127.0.0.1:8080/api/v1/repository/ns/img"
    );
}

#[test]
fn repository_displays_as_namespace_slash_image() {
    assert_eq!(RepositoryRef::new("ns", "img").to_string(), "ns/img");
}

#[test]
fn debug_output_redacts_token() {
    let config = PublishConfig {
        api_token: "super-secret".to_string(),
        repository: RepositoryRef::new("ns", "img"),
        readme_path: PathBuf::from("README.md"),
    };
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("super-secret"), "token leaked: {rendered}");
    assert!(rendered.contains("<redacted>"));
    assert!(rendered.contains("README.md"));
}
