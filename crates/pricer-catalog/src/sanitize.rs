//! Escaping of caller-supplied text before it reaches logs or payloads.

/// HTML-escape `input`: `&`, `<`, `>`, `"` and `'` become entities and
/// every other character passes through unchanged.
#[must_use]
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
