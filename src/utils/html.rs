use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters forwarded to the summarization model.
pub const MAX_INPUT_CHARS: usize = 4000;

/// Appended when the text was cut at [`MAX_INPUT_CHARS`].
pub const TRUNCATION_MARKER: &str = " ...";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("static regex compile"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex compile"));

/// Replace every well-formed `<...>` tag with a space, collapse whitespace
/// runs to a single space and trim the ends.
///
/// Unterminated tags such as `a < b` are left as-is. Entities like `&amp;`
/// are not decoded.
#[must_use]
pub fn strip_html(raw: &str) -> String {
    let without_tags = TAG_RE.replace_all(raw, " ");
    WHITESPACE_RE
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

/// Keep the first `max_chars` characters and append [`TRUNCATION_MARKER`]
/// when the text is longer than that. Counts characters, not bytes.
#[must_use]
pub fn truncate_text(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut cut = text;
            cut.truncate(byte_idx);
            cut.push_str(TRUNCATION_MARKER);
            cut
        }
        None => text,
    }
}

/// HTML to model-ready plain text: [`strip_html`] then [`truncate_text`] at
/// [`MAX_INPUT_CHARS`].
#[must_use]
pub fn normalize(raw: &str) -> String {
    truncate_text(strip_html(raw), MAX_INPUT_CHARS)
}

/// Whether [`normalize`] would cut this text.
#[must_use]
pub fn exceeds_limit(text: &str) -> bool {
    text.chars().nth(MAX_INPUT_CHARS).is_some()
}
