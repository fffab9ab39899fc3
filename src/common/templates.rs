//! Template rendering for manifest files.
//!
//! Manifests may embed credentials with `<%= user %>` style placeholders,
//! which are substituted before the text is parsed as JSON.
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Template related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unresolved template placeholder: {0}")]
    UnresolvedPlaceholder(String),

    #[error("Unsupported template expression: {0}")]
    UnsupportedExpression(String),

    #[error("Evaluation blocks are not supported: <%{0}%>")]
    EvaluationBlock(String),
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<%([=-]?)([\s\S]*?)%>").expect("placeholder pattern is valid")
    })
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
    })
}

/// Template replacement functionality
pub struct TemplateProcessor;

impl TemplateProcessor {
    /// Create a new template processor
    pub fn new() -> Self {
        Self
    }

    /// Render `template`, resolving every placeholder against `variables`.
    ///
    /// `<%= name %>` inserts the value as-is, `<%- name %>` inserts it
    /// HTML-escaped. Plain `<% ... %>` blocks are rejected.
    pub fn process(
        &self,
        template: &str,
        variables: &HashMap<String, String>,
    ) -> Result<String, TemplateError> {
        let mut rendered = String::with_capacity(template.len());
        let mut last = 0;

        for caps in placeholder_pattern().captures_iter(template) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let kind = caps.get(1).map_or("", |m| m.as_str());
            let raw = caps.get(2).map_or("", |m| m.as_str());
            let expression = raw.trim();

            rendered.push_str(&template[last..whole.start()]);
            last = whole.end();

            if kind.is_empty() {
                return Err(TemplateError::EvaluationBlock(raw.to_string()));
            }
            if !identifier_pattern().is_match(expression) {
                return Err(TemplateError::UnsupportedExpression(expression.to_string()));
            }

            let value = variables
                .get(expression)
                .ok_or_else(|| TemplateError::UnresolvedPlaceholder(expression.to_string()))?;

            if kind == "-" {
                rendered.push_str(&escape_html(value));
            } else {
                rendered.push_str(value);
            }
        }

        rendered.push_str(&template[last..]);
        Ok(rendered)
    }
}

impl Default for TemplateProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '`' => escaped.push_str("&#x60;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
