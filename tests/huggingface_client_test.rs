//! HuggingFaceClient against a local mock inference server.

use gymia_planner::client::{ClientConfig, ClientError, HuggingFaceClient, ModelClient};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HuggingFaceClient {
    let config = ClientConfig::new("hf_test_token")
        .with_base_url(format!("{}/models", server.uri()))
        .with_model("gpt2");
    HuggingFaceClient::new(config).unwrap()
}

#[tokio::test]
async fn test_returns_generated_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .and(header("authorization", "Bearer hf_test_token"))
        .and(body_partial_json(json!({
            "inputs": "Monte um treino",
            "parameters": {
                "max_length": 1000,
                "do_sample": true,
                "return_full_text": false
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "título: Plano Forte\ndica: Descanse" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .generate_text("Monte um treino")
        .await
        .unwrap();
    assert_eq!(text, "título: Plano Forte\ndica: Descanse");
}

#[tokio::test]
async fn test_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "error": "Model gpt2 is currently loading" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).generate_text("oi").await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 503);
            assert!(body.contains("currently loading"));
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_bodies() {
    for body in [json!([]), json!({ "generated_text": "not an array" }), json!([{ "label": "x" }])] {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let err = client_for(&server).generate_text("oi").await.unwrap_err();
        assert!(
            matches!(err, ClientError::MalformedResponse(_)),
            "body {body} should be malformed, got {err:?}"
        );
    }
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "generated_text": "late" }]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new("hf_test_token")
        .with_base_url(format!("{}/models", server.uri()))
        .with_timeout(Duration::from_millis(50));
    let client = HuggingFaceClient::new(config).unwrap();

    let err = client.generate_text("oi").await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}
