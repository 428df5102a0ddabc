//! Integration tests for `TranslationClient` using wiremock HTTP mocks.

use tonal_intake::{TranslationClient, UNKNOWN_LANGUAGE};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> TranslationClient {
    TranslationClient::with_base_url(30, base_url).expect("client construction should not fail")
}

#[tokio::test]
async fn translates_with_detected_language() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "data": {
            "translations": [
                { "translatedText": "The food was excellent", "detectedSourceLanguage": "es" }
            ]
        }
    });

    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "q": "La comida estuvo excelente",
            "target": "en",
            "format": "text"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .translate_to_english("La comida estuvo excelente", Some("test-key"))
        .await;

    assert_eq!(result.original_text, "La comida estuvo excelente");
    assert_eq!(result.translated_text, "The food was excellent");
    assert_eq!(result.detected_language, "es");
    assert!((result.confidence - 0.9).abs() < f64::EPSILON);
}

#[tokio::test]
async fn api_error_falls_back_to_original_text() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": { "code": 400, "message": "API key not valid" }
    });

    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.translate_to_english("Bonjour", Some("bad-key")).await;

    assert_eq!(result.translated_text, "Bonjour");
    assert_eq!(result.detected_language, UNKNOWN_LANGUAGE);
    assert!((result.confidence - 0.1).abs() < f64::EPSILON);
}

#[tokio::test]
async fn empty_translation_list_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": { "translations": [] } })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.translate_to_english("Hallo", Some("test-key")).await;

    assert_eq!(result.translated_text, "Hallo");
    assert_eq!(result.detected_language, UNKNOWN_LANGUAGE);
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.translate_to_english("Ciao", Some("test-key")).await;

    assert_eq!(result.translated_text, "Ciao");
    assert_eq!(result.detected_language, UNKNOWN_LANGUAGE);
}

#[tokio::test]
async fn missing_key_skips_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.translate_to_english("Plain english text", None).await;
    assert_eq!(result.detected_language, "en");

    let result = client.translate_to_english("Plain english text", Some("  ")).await;
    assert_eq!(result.detected_language, "en");
}
