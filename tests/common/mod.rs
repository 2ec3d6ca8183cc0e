//! Shared setup for integration tests: a WireMock stand-in for the
//! inference service and an app wired to it.

#![allow(dead_code)]

use std::collections::HashMap;

use summarizer::api::AppState;
use summarizer::core::config::AppConfig;
use wiremock::MockServer;
use wiremock::matchers::{header, method, path};

pub const TEST_TOKEN: &str = "hf_test_token";
pub const TEST_MODEL: &str = "test-org/test-model";
pub const MODEL_PATH: &str = "/models/test-org/test-model";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn config_for(server: &MockServer, timeout_secs: u64) -> AppConfig {
    let vars: HashMap<&str, String> = HashMap::from([
        ("HF_TOKEN", TEST_TOKEN.to_string()),
        ("HF_MODEL", TEST_MODEL.to_string()),
        ("HF_API_BASE", format!("{}/models", server.uri())),
        ("HF_TIMEOUT_SECS", timeout_secs.to_string()),
    ]);
    AppConfig::from_lookup(|key| vars.get(key).cloned()).expect("test config")
}

pub fn state_for(server: &MockServer, timeout_secs: u64) -> AppState {
    AppState::new(&config_for(server, timeout_secs)).expect("test state")
}

/// A mock matching an authenticated POST to the model endpoint.
pub fn inference_mock() -> wiremock::MockBuilder {
    wiremock::Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
}
