use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde_json::Value;

use super::error::TemplateError;

/// `\{{` escape marker together with the brace pair it guards
static ESCAPED_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\\{\{").unwrap());

/// Expression whose delimiters enclose nothing but whitespace
static EMPTY_EXPR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{\s*\}\}").unwrap());

/// Any delimited expression, non-greedy so adjacent expressions split apart
static EXPR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").unwrap());

/// Well-formed bracket literal inside an expression body
static BRACKET_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]+\]").unwrap());

/// `{{#if <expr>}}` block header
static IF_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{#if\s+(.*?)\}\}").unwrap());

/// General variable expression: a bare or `@`-prefixed name, a `[...]`
/// literal, or a quoted literal, optionally behind an `if ` prefix. Block
/// openers (`#`) and closers (`/`) match none of the branches.
static VAR_EXPR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{\s*((?:if )?(?:@[\w\-./]+|[\w\-.][\w\-./]*|\[[\w ]+\]|"[^"]*"|'[^']*'))\s*\}\}"#)
        .unwrap()
});

/// Scans Handlebars-style template text for the variable names it references.
///
/// Extraction either fully succeeds with the complete set of names or fails
/// with the first syntax problem found; no partial results are returned.
pub struct TemplateVarExtractor {
    debug_mode: bool,
}

impl TemplateVarExtractor {
    pub fn new() -> Self {
        Self { debug_mode: false }
    }

    pub fn with_debug(mut self) -> Self {
        self.debug_mode = true;
        self
    }

    /// Extracts the distinct variable names referenced by `template`, in the
    /// order they are first encountered.
    ///
    /// Escaped expressions (`\{{...}}`) are invisible to both validation and
    /// extraction. Expressions that do not form a recognized shape (stray
    /// single braces, block closers) are ignored rather than reported.
    pub fn extract(&self, template: &str) -> Result<Vec<String>, TemplateError> {
        // Escaped openers are stripped from a working copy up front; their
        // content never reaches the later passes.
        let text = ESCAPED_OPEN_RE.replace_all(template, "");

        if self.debug_mode {
            debug!("scanning template: {}", text);
        }

        validate(&text)?;

        let mut vars: Vec<String> = Vec::new();

        for caps in IF_HEADER_RE.captures_iter(&text) {
            let name = caps[1].trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyVariableName {
                    expression: caps[0].to_string(),
                });
            }
            push_unique(&mut vars, name);
        }

        for caps in VAR_EXPR_RE.captures_iter(&text) {
            let name = canonical_name(&caps[1]);
            if name.is_empty() {
                return Err(TemplateError::EmptyVariableName {
                    expression: caps[0].to_string(),
                });
            }
            push_unique(&mut vars, &name);
        }

        if self.debug_mode {
            debug!("extracted {} variable(s): {:?}", vars.len(), vars);
        }

        Ok(vars)
    }

    /// Extracts variable names from a JSON value expected to carry template
    /// text, as when templates are loaded from stored configuration.
    ///
    /// Anything other than a string fails with [`TemplateError::NotAString`]
    /// naming the JSON type that was found.
    pub fn extract_value(&self, value: &Value) -> Result<Vec<String>, TemplateError> {
        match value {
            Value::String(template) => self.extract(template),
            other => Err(TemplateError::NotAString {
                found: json_type_name(other).to_string(),
            }),
        }
    }
}

impl Default for TemplateVarExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Fail-fast syntax checks, run before any extraction: whitespace-only
/// expressions first, then quote balance, then bracket literals.
fn validate(text: &str) -> Result<(), TemplateError> {
    if let Some(m) = EMPTY_EXPR_RE.find(text) {
        return Err(TemplateError::EmptyVariableName {
            expression: m.as_str().to_string(),
        });
    }

    for caps in EXPR_RE.captures_iter(text) {
        let quotes = caps[1].chars().filter(|c| *c == '"' || *c == '\'').count();
        if quotes % 2 != 0 {
            return Err(TemplateError::UnclosedQuote {
                expression: caps[0].to_string(),
            });
        }
    }

    for caps in EXPR_RE.captures_iter(text) {
        let body = &caps[1];
        if (body.contains('[') || body.contains(']')) && !BRACKET_PAIR_RE.is_match(body) {
            return Err(TemplateError::MalformedBracket {
                expression: caps[0].to_string(),
            });
        }
    }

    Ok(())
}

/// Reduces a matched expression body to its variable name: drops an `if `
/// prefix, a leading `@`, and one layer of `[...]` or quote wrapping.
fn canonical_name(body: &str) -> String {
    let mut name = body.trim();
    if let Some(rest) = name.strip_prefix("if ") {
        name = rest;
    }
    if let Some(rest) = name.strip_prefix('@') {
        name = rest;
    }
    if name.len() >= 2 && name.starts_with('[') && name.ends_with(']') {
        name = &name[1..name.len() - 1];
    } else if name.len() >= 2
        && (name.starts_with('"') && name.ends_with('"')
            || name.starts_with('\'') && name.ends_with('\''))
    {
        name = &name[1..name.len() - 1];
    }
    name.trim().to_string()
}

fn push_unique(vars: &mut Vec<String>, name: &str) {
    if !vars.iter().any(|v| v == name) {
        vars.push(name.to_string());
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
