//! Terminal rendering of API payloads
//!
//! Renderers build `String`s so they can be tested without a terminal; the
//! commands decide where to print them.

pub mod json;
pub mod summary;

pub use json::render_json;
pub use summary::render_repo_summary;

use crate::github::Payload;

/// How payloads are written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Emit ANSI color codes
    pub color: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Render any payload: JSON pretty-printed, text verbatim
pub fn render_payload(payload: &Payload, options: OutputOptions) -> String {
    match payload {
        Payload::Json(value) => render_json(value, options.color),
        Payload::Text(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_text_payload_verbatim() {
        let payload = Payload::Text("hello\nworld".to_string());
        assert_eq!(
            render_payload(&payload, OutputOptions::default()),
            "hello\nworld"
        );
    }

    #[test]
    fn test_render_json_payload_plain() {
        let payload = Payload::Json(json!({"login": "octocat"}));
        let rendered = render_payload(&payload, OutputOptions { color: false });
        assert_eq!(rendered, "{\n  \"login\": \"octocat\"\n}");
    }
}
