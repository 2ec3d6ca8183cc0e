//! AWS Lambda adapter - routes API Gateway / Function URL events onto the
//! same pipeline as the HTTP server.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::error::ApiError;
use super::handler::{health_body, summarize_body};
use super::helpers;
use super::state::AppState;

fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of the event; payload format 2.0 first, then 1.0.
fn event_method(payload: &Value) -> String {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("")
        .to_ascii_uppercase()
}

fn event_path(payload: &Value) -> &str {
    v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .unwrap_or("")
}

fn extract_body(payload: &Value) -> Result<Vec<u8>, ApiError> {
    let Some(body) = v_str(payload, &["body"]) else {
        return Ok(Vec::new());
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if encoded {
        STANDARD
            .decode(body)
            .map_err(|e| ApiError::InvalidBody(format!("bad base64 body: {}", e)))
    } else {
        Ok(body.as_bytes().to_vec())
    }
}

/// Route one gateway event and build the gateway response object.
pub async fn handle_gateway_event(state: &AppState, payload: &Value) -> Value {
    let method = event_method(payload);
    let path = event_path(payload).trim_end_matches('/');
    info!(method = %method, raw_path = %path, "Lambda received request");

    if method == "OPTIONS" {
        return helpers::no_content();
    }

    if path.ends_with("/summarize") {
        if method != "POST" {
            return helpers::err_response(405, "method not allowed");
        }
        let body = match extract_body(payload) {
            Ok(b) => b,
            Err(e) => return helpers::api_error_response(&e),
        };
        return match summarize_body(state, &body).await {
            Ok(result) => helpers::ok_json(&result),
            Err(e) => {
                e.log_failure();
                helpers::api_error_response(&e)
            }
        };
    }

    if path.ends_with("/health") {
        if method != "GET" {
            return helpers::err_response(405, "method not allowed");
        }
        return helpers::ok_json(&health_body(state));
    }

    error!(raw_path = %path, "No route for request");
    helpers::api_error_response(&ApiError::NotFound)
}

/// Lambda entrypoint; the state is built once per cold start.
///
/// # Errors
///
/// Never fails for a well-formed event; request errors are returned as
/// gateway responses with the matching status code.
pub async fn function_handler(state: &AppState, event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(handle_gateway_event(state, &event.payload).await)
}
