use tracing::info;

use crate::clients::Summarize;
use crate::core::models::SummaryResult;
use crate::errors::SummarizerError;
use crate::utils::html;

pub const CONTENT_REQUIRED: &str = "content required";

/// Validate, normalize and summarize one note's HTML content.
///
/// Missing or empty content is rejected before any remote call. Markup-only
/// content (e.g. `<p></p>`) is still sent, as an empty string.
pub async fn summarize_content<S>(
    summarizer: &S,
    content: Option<&str>,
) -> Result<SummaryResult, SummarizerError>
where
    S: Summarize + ?Sized,
{
    let content = content
        .filter(|c| !c.is_empty())
        .ok_or_else(|| SummarizerError::Validation(CONTENT_REQUIRED.to_string()))?;

    let stripped = html::strip_html(content);
    let truncated = html::exceeds_limit(&stripped);
    let text = html::truncate_text(stripped, html::MAX_INPUT_CHARS);

    info!(
        content_len = content.len(),
        text_chars = text.chars().count(),
        truncated,
        "Normalized note content"
    );

    let summary = summarizer.summarize(&text).await?;
    Ok(SummaryResult { summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        inputs: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Summarize for Recorder {
        async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
            self.inputs.lock().unwrap().push(text.to_string());
            Ok("summary".to_string())
        }
    }

    #[tokio::test]
    async fn rejects_missing_and_empty_content() {
        let recorder = Recorder::default();

        for content in [None, Some("")] {
            let err = summarize_content(&recorder, content).await.unwrap_err();
            assert!(matches!(err, SummarizerError::Validation(ref m) if m == CONTENT_REQUIRED));
        }
        assert!(recorder.inputs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn forwards_normalized_text() {
        let recorder = Recorder::default();

        let result = summarize_content(&recorder, Some("<p>Hello</p>\n<p>world</p>"))
            .await
            .unwrap();

        assert_eq!(result.summary, "summary");
        assert_eq!(*recorder.inputs.lock().unwrap(), vec!["Hello world".to_string()]);
    }

    #[tokio::test]
    async fn markup_only_content_is_still_sent() {
        let recorder = Recorder::default();

        summarize_content(&recorder, Some("<p></p>")).await.unwrap();

        assert_eq!(*recorder.inputs.lock().unwrap(), vec![String::new()]);
    }
}
