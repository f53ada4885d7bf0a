//! Remote classifier behaviour against mock provider endpoints.

use std::time::Duration;

use mailsort_classify::{normalize, Category, Classifier, Message, ScoringClassifier, Source};
use mailsort_remote::{create_classifier, RemoteClassifier, RemoteConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRODUCTIVE_TEXT: &str = "Preciso de ajuda urgente com um problema no sistema";

fn openai_config(server: &MockServer) -> RemoteConfig {
    RemoteConfig {
        preferred_provider: "openai".into(),
        openai_api_key: Some("sk-test".into()),
        base_url: Some(server.uri()),
        timeout_secs: 1,
        ..RemoteConfig::default()
    }
}

fn openai_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    }))
}

fn remote(config: &RemoteConfig) -> RemoteClassifier {
    let target = config.resolve_provider().expect("provider resolves");
    RemoteClassifier::new(target, config, ScoringClassifier::default()).unwrap()
}

async fn classify(classifier: &dyn Classifier, raw: &str) -> mailsort_classify::Verdict {
    let normalized = normalize(raw);
    classifier.classify(&Message::new(raw, &normalized)).await
}

#[tokio::test]
async fn remote_label_overrides_keywords() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(openai_reply("Improdutivo"))
        .expect(1)
        .mount(&server)
        .await;

    let classifier = remote(&openai_config(&server));
    let verdict = classify(&classifier, PRODUCTIVE_TEXT).await;

    assert_eq!(verdict.source, Source::Remote);
    assert_eq!(verdict.category, Category::Unproductive);
    // Keyword statistics are still computed.
    assert_eq!(verdict.score.category, Category::Productive);
    assert_eq!(verdict.score.productive_hits, 4);
}

#[tokio::test]
async fn request_is_truncated_and_near_deterministic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(openai_reply("Produtivo"))
        .mount(&server)
        .await;

    let classifier = remote(&openai_config(&server));
    let long_text = "é".repeat(1500);
    classify(&classifier, &long_text).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["messages"][0]["role"], "system");
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert_eq!(user.chars().count(), 1000);
    assert!(body["temperature"].as_f64().unwrap() <= 0.2);
    assert_eq!(body["max_tokens"], 10);
}

#[tokio::test]
async fn unexpected_reply_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(openai_reply("I cannot decide"))
        .mount(&server)
        .await;

    let classifier = remote(&openai_config(&server));
    let verdict = classify(&classifier, PRODUCTIVE_TEXT).await;

    assert_eq!(verdict.source, Source::Fallback);
    assert_eq!(verdict.category, Category::Productive);
}

#[tokio::test]
async fn server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let classifier = remote(&openai_config(&server));
    let verdict = classify(&classifier, "Feliz natal, muito obrigado pelo ano todo").await;

    assert_eq!(verdict.source, Source::Fallback);
    assert_eq!(verdict.category, Category::Unproductive);
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let classifier = remote(&openai_config(&server));
    let verdict = classify(&classifier, PRODUCTIVE_TEXT).await;
    assert_eq!(verdict.source, Source::Fallback);
}

#[tokio::test]
async fn timeout_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(openai_reply("Improdutivo").set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let classifier = remote(&openai_config(&server));
    let started = std::time::Instant::now();
    let verdict = classify(&classifier, PRODUCTIVE_TEXT).await;

    assert_eq!(verdict.source, Source::Fallback);
    assert_eq!(verdict.category, Category::Productive);
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn unreachable_endpoint_falls_back() {
    let config = RemoteConfig {
        preferred_provider: "groq".into(),
        groq_api_key: Some("gsk-test".into()),
        base_url: Some("http://127.0.0.1:9".into()),
        timeout_secs: 1,
        ..RemoteConfig::default()
    };
    let classifier = remote(&config);
    let verdict = classify(&classifier, PRODUCTIVE_TEXT).await;
    assert_eq!(verdict.source, Source::Fallback);
}

#[tokio::test]
async fn anthropic_messages_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(header("x-api-key", "sk-ant"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "Produtivo"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = RemoteConfig {
        anthropic_api_key: Some("sk-ant".into()),
        base_url: Some(server.uri()),
        ..RemoteConfig::default()
    };
    let classifier = remote(&config);
    let verdict = classify(&classifier, "Obrigado pelo retorno, abraços").await;

    assert_eq!(verdict.source, Source::Remote);
    assert_eq!(verdict.category, Category::Productive);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert!(body["system"].as_str().unwrap().contains("Improdutivo"));
}

#[tokio::test]
async fn factory_uses_remote_when_configured() {
    let server = MockServer::start().await;
    let classifier = create_classifier(&openai_config(&server), ScoringClassifier::default());
    assert!(classifier.is_remote());
    assert_eq!(classifier.provider().as_deref(), Some("openai"));
}

#[tokio::test]
async fn without_remote_config_matches_scoring() {
    let scorer = ScoringClassifier::default();
    let classifier = create_classifier(&RemoteConfig::default(), scorer.clone());
    assert!(!classifier.is_remote());
    assert!(classifier.provider().is_none());

    let filler = "palavra ".repeat(30);
    let samples: [&str; 6] = [
        "",
        PRODUCTIVE_TEXT,
        "Feliz natal, muito obrigado pelo ano todo",
        "Erro 500 no sistema, obrigado",
        "bom dia",
        filler.as_str(),
    ];
    for raw in samples {
        let normalized = normalize(raw);
        let verdict = classify(classifier.as_ref(), raw).await;
        let expected = scorer.score(&normalized);
        assert_eq!(verdict.score, expected);
        assert_eq!(verdict.category, expected.category);
        assert_eq!(verdict.source, Source::Fallback);
    }
}
