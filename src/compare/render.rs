//! HTML rendering of aligned transcript segments.

use serde::{Deserialize, Serialize};

use crate::compare::classifier::ErrorCategory;

/// Markup used when rendering a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// HTML element wrapping each segment.
    pub element: String,
    /// CSS class for correctly transcribed segments.
    pub correct_class: String,
    /// CSS class shared by all error segments.
    pub error_class: String,
    /// Appended to the category name to form the per-category class.
    pub category_suffix: String,
    /// Markup inserted after every sentence-ending `". "`.
    pub line_break: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            element: "span".to_string(),
            correct_class: "correct-word".to_string(),
            error_class: "error-word".to_string(),
            category_suffix: "-error".to_string(),
            line_break: "<br>".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrapping element.
    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    /// Set the class of correct segments.
    pub fn correct_class(mut self, class: impl Into<String>) -> Self {
        self.correct_class = class.into();
        self
    }

    /// Set the class shared by error segments.
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Set the line-break markup.
    pub fn line_break(mut self, line_break: impl Into<String>) -> Self {
        self.line_break = line_break.into();
        self
    }

    fn wrap(&self, class: &str, segment: &str) -> String {
        format!(
            "<{tag} class=\"{class}\">{text}</{tag}>",
            tag = self.element,
            text = escape_html(segment)
        )
    }

    /// Render a correctly transcribed segment.
    pub fn correct(&self, segment: &str) -> String {
        self.wrap(&self.correct_class, segment)
    }

    /// Render an erroneous segment with its category class.
    pub fn error(&self, segment: &str, category: ErrorCategory) -> String {
        let class = format!(
            "{} {}{}",
            self.error_class,
            category.as_str(),
            self.category_suffix
        );
        self.wrap(&class, segment)
    }

    /// Join rendered parts with single spaces and break lines after sentences.
    pub fn finish(&self, parts: &[String]) -> String {
        parts
            .join(" ")
            .replace(". ", &format!(".{}", self.line_break))
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for safe HTML embedding.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>Tom & \"Jerry's\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&#x27;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_default_markup() {
        let config = RenderConfig::default();
        assert_eq!(
            config.correct("The cat"),
            "<span class=\"correct-word\">The cat</span>"
        );
        assert_eq!(
            config.error("sit", ErrorCategory::Listening),
            "<span class=\"error-word listening-error\">sit</span>"
        );
    }

    #[test]
    fn test_finish_inserts_line_breaks() {
        let config = RenderConfig::default();
        let parts = vec![config.correct("It rained."), config.correct("We left.")];
        // the space before the second span is not preceded by a period
        assert_eq!(
            config.finish(&parts),
            "<span class=\"correct-word\">It rained.</span> <span class=\"correct-word\">We left.</span>"
        );

        let parts = vec!["one. two".to_string(), "three".to_string()];
        assert_eq!(config.finish(&parts), "one.<br>two three");
    }

    #[test]
    fn test_custom_markup() {
        let config = RenderConfig::new()
            .element("mark")
            .correct_class("ok")
            .error_class("bad")
            .line_break("<br/>");
        assert_eq!(config.correct("x"), "<mark class=\"ok\">x</mark>");
        assert_eq!(
            config.error("y", ErrorCategory::Grammar),
            "<mark class=\"bad grammar-error\">y</mark>"
        );
        assert_eq!(config.finish(&["a. b".to_string()]), "a.<br/>b");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: RenderConfig = serde_json::from_str(r#"{"element": "em"}"#).unwrap();
        assert_eq!(config.element, "em");
        assert_eq!(config.correct_class, "correct-word");
    }
}
