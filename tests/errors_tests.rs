use std::error::Error;
use std::io;
use std::sync::{Arc, Mutex};

use axum::response::IntoResponse;
use summarizer::api::ApiError;
use summarizer::errors::SummarizerError;

#[test]
fn test_summarizer_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizerError::Validation("content required".to_string());
    assert_error(&error);
}

#[test]
fn test_summarizer_error_display() {
    let error = SummarizerError::Validation("content required".to_string());
    assert_eq!(format!("{error}"), "content required");

    let error = SummarizerError::Upstream("connection refused".to_string());
    assert_eq!(format!("{error}"), "Request failed: connection refused");

    let error = SummarizerError::Config("HF_TOKEN: not set".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: HF_TOKEN: not set"
    );
}

#[test]
fn test_summarizer_error_status_codes() {
    assert_eq!(SummarizerError::Validation(String::new()).status_code(), 400);
    assert_eq!(SummarizerError::Upstream(String::new()).status_code(), 500);
}

#[test]
fn test_api_error_hides_config_details() {
    let err = ApiError::from(SummarizerError::Config("HF_TOKEN: bad".to_string()));
    let (status, message) = err.status_and_message();
    assert_eq!(status, 500);
    assert_eq!(message, "internal server error");
}

#[test]
fn test_api_error_from_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let api_err: ApiError = json_err.into();
    match api_err {
        ApiError::InvalidBody(ref msg) => assert!(!msg.is_empty()),
        _ => panic!("Unexpected error type"),
    }
    assert_eq!(api_err.status_and_message().0, 400);

    // Compile-time check that reqwest errors convert.
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummarizerError {
        SummarizerError::from(err)
    }
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[test]
fn test_api_error_logs_only_when_responding() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let err = ApiError::from(SummarizerError::Upstream("boom".to_string()));
        let (status, _) = err.status_and_message();
        assert_eq!(status, 500);
        assert_eq!(captured.text(), "");

        let response = err.into_response();
        assert_eq!(response.status().as_u16(), 500);
    });

    assert!(captured.text().contains("boom"), "got {}", captured.text());
}
