//! Response builders for API Gateway style JSON responses.
//!
//! The Lambda adapter answers with `{"statusCode", "headers", "body"}` objects
//! where `body` is a JSON string.

use serde::Serialize;
use serde_json::{Value, json};

use super::error::ApiError;

/// Returns a 200 OK response with the given value serialized as the body.
#[must_use]
pub fn ok_json<T: Serialize>(body: &T) -> Value {
    json_response(200, &serde_json::to_value(body).unwrap_or(Value::Null))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Maps an [`ApiError`] onto the matching error response.
#[must_use]
pub fn api_error_response(error: &ApiError) -> Value {
    let (status, message) = error.status_and_message();
    err_response(status, &message)
}

/// Returns an empty 204 response, used for CORS preflight.
#[must_use]
pub fn no_content() -> Value {
    json!({
        "statusCode": 204,
        "headers": cors_headers(),
        "body": ""
    })
}

fn json_response(status_code: u16, body: &Value) -> Value {
    let mut headers = cors_headers();
    if let Some(map) = headers.as_object_mut() {
        map.insert("Content-Type".to_string(), json!("application/json"));
    }
    json!({
        "statusCode": status_code,
        "headers": headers,
        "body": body.to_string()
    })
}

fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "*",
        "Access-Control-Allow-Headers": "*"
    })
}
