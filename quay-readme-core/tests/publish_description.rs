use quay_readme_core::contract::{DescriptionUpdate, MockRepositoryApi, TransportError};
use quay_readme_core::publish::{api_error_message, publish_description, PublishError};

const URL: &str = "https://quay.io/api/v1/repository/ns/img";

#[tokio::test]
async fn status_200_succeeds() {
    let mut api = MockRepositoryApi::new();
    api.expect_put_description()
        .withf(|url, description| url.ends_with("/ns/img") && description.starts_with("# Title"))
        .times(1)
        .returning(|_, _| Ok(200));

    let result = publish_description(&api, URL, "# Title\n\n<br>\n").await;

    assert!(result.is_ok(), "got: {result:?}");
}

#[tokio::test]
async fn every_other_status_fails_with_mapped_message() {
    let cases: Vec<(u16, &str)> = vec![
        (400, "Bad Request"),
        (401, "Session required"),
        (403, "Unauthorized access"),
        (404, "Not found"),
        (500, "Unknown API error"),
        (503, "Unknown API error"),
        (201, "Unknown API error"),
        (204, "Unknown API error"),
    ];

    for (status, expected) in cases {
        let mut api = MockRepositoryApi::new();
        api.expect_put_description()
            .times(1)
            .returning(move |_, _| Ok(status));

        let err = publish_description(&api, URL, "text")
            .await
            .expect_err("non-200 must fail");

        match err {
            PublishError::Api {
                status: got,
                message,
            } => {
                assert_eq!(got, status);
                assert_eq!(message, expected, "status {status}");
            }
            other => panic!("status {status}: expected API error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn transport_failure_is_reported_not_retried() {
    let mut api = MockRepositoryApi::new();
    api.expect_put_description()
        .times(1)
        .returning(|_, _| Err(TransportError("connection refused".to_string())));

    let err = publish_description(&api, URL, "text").await.unwrap_err();

    assert!(matches!(err, PublishError::Transport(_)));
    assert_eq!(err.to_string(), "Transport error: connection refused");
}

#[test]
fn status_message_table_is_exact() {
    assert_eq!(api_error_message(400), "Bad Request");
    assert_eq!(api_error_message(401), "Session required");
    assert_eq!(api_error_message(403), "Unauthorized access");
    assert_eq!(api_error_message(404), "Not found");
    assert_eq!(api_error_message(418), "Unknown API error");
}

#[test]
fn description_update_serialises_single_field() {
    let body = serde_json::to_value(DescriptionUpdate {
        description: "hello\n<br>\n",
    })
    .unwrap();

    assert_eq!(body, serde_json::json!({ "description": "hello\n<br>\n" }));
}
