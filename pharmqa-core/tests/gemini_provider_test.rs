use pharmqa_core::{
    AgentConfig, LLMError, LLMProvider, llm::GeminiProvider, llm::factory::create_provider,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/models/gemini-1.5-flash:generateContent";

fn provider(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new(
        "test-key".into(),
        "gemini-1.5-flash".into(),
        server.uri(),
    )
    .unwrap()
}

#[tokio::test]
async fn sends_prompt_as_user_content_with_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "What is ATP?"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Adenosine "}, {"text": "triphosphate"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 5, "candidatesTokenCount": 3, "totalTokenCount": 8}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider(&server).generate("What is ATP?").await.unwrap();

    assert_eq!(response.content, "Adenosine triphosphate");
    assert_eq!(response.model, "gemini-1.5-flash");
    assert_eq!(response.usage.map(|u| u.prompt_tokens), Some(5));
}

#[tokio::test]
async fn temperature_from_config_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_partial_json(json!({"generationConfig": {"temperature": 0.5}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "ok"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = AgentConfig {
        base_url: server.uri(),
        temperature: Some(0.5),
        ..AgentConfig::default()
    };
    let provider = create_provider(&config, "test-key".into()).unwrap();

    assert_eq!(provider.generate("ping").await.unwrap().content, "ok");
}

#[tokio::test]
async fn server_error_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
        .mount(&server)
        .await;

    let err = provider(&server).generate("ping").await.unwrap_err();

    match err {
        LLMError::Provider(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("backend unavailable"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_and_auth_statuses_are_distinguished() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let provider = provider(&server);
    assert_eq!(provider.generate("ping").await.unwrap_err(), LLMError::RateLimit);
    assert!(matches!(
        provider.generate("ping").await.unwrap_err(),
        LLMError::Authentication(_)
    ));
}

#[tokio::test]
async fn blocked_prompt_surfaces_block_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [],
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let err = provider(&server).generate("ping").await.unwrap_err();

    assert_eq!(
        err,
        LLMError::EmptyResponse {
            reason: Some("SAFETY".into())
        }
    );
    let shown = pharmqa_core::QaError::from(err).to_string();
    assert!(shown.contains("SAFETY"), "cause missing from: {shown}");
}

#[tokio::test]
async fn malformed_body_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider(&server).generate("ping").await.unwrap_err();

    assert!(matches!(err, LLMError::Provider(message) if message.contains("parse")));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error_without_key() {
    let provider = GeminiProvider::new(
        "secret-key".into(),
        "gemini-1.5-flash".into(),
        "http://127.0.0.1:1".into(),
    )
    .unwrap();

    let err = provider.generate("ping").await.unwrap_err();

    assert!(matches!(&err, LLMError::Network(_)));
    assert!(!err.to_string().contains("secret-key"));
}
