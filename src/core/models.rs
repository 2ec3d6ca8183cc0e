use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound body of `POST /summarize`.
///
/// `content` is kept as a raw JSON value so that a missing, null or
/// non-string value is reported as a validation error instead of a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub content: Option<Value>,
    // Sent by the note-taking front end; not used for summarization.
    #[serde(default)]
    pub title: Option<Value>,
}

impl SummarizeRequest {
    /// Parse a raw request body as JSON regardless of the declared
    /// content type. An empty body or a JSON value that is not an object
    /// yields a request without content.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(body)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn content_str(&self) -> Option<&str> {
        self.content.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: 180,
            min_length: 40,
            do_sample: false,
        }
    }
}

/// Outbound body sent to the inference endpoint.
#[derive(Debug, Serialize)]
pub struct InferencePayload<'a> {
    pub inputs: &'a str,
    pub parameters: GenerationParameters,
}

impl<'a> InferencePayload<'a> {
    #[must_use]
    pub fn new(inputs: &'a str) -> Self {
        Self {
            inputs,
            parameters: GenerationParameters::default(),
        }
    }
}

/// One result object. Only JSON objects are accepted, never arrays.
#[derive(Debug, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct SummaryOutput {
    pub summary_text: Option<String>,
    pub generated_text: Option<String>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
struct OutputFields {
    #[serde(default)]
    summary_text: Option<String>,
    #[serde(default)]
    generated_text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<Map<String, Value>> for SummaryOutput {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: OutputFields = serde_json::from_value(Value::Object(map))?;
        Ok(Self {
            summary_text: fields.summary_text,
            generated_text: fields.generated_text,
            error: fields.error,
        })
    }
}

impl SummaryOutput {
    /// `summary_text` if present and non-empty, else `generated_text`.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.summary_text
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.generated_text.as_deref())
    }
}

/// The inference API answers either with a list of outputs or a single one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InferenceResponse {
    Batch(Vec<SummaryOutput>),
    Single(SummaryOutput),
}

impl InferenceResponse {
    #[must_use]
    pub fn first_output(&self) -> Option<&SummaryOutput> {
        match self {
            InferenceResponse::Batch(outputs) => outputs.first(),
            InferenceResponse::Single(output) => Some(output),
        }
    }

    /// Trimmed summary text, or an empty string for an unrecognized shape.
    #[must_use]
    pub fn summary(&self) -> String {
        self.first_output()
            .and_then(SummaryOutput::text)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }
}
