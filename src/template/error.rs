use serde::{Deserialize, Serialize};

/// Template scanning errors.
///
/// Messages name the offending construct so they can be surfaced verbatim to
/// the template author, e.g. in an editor's validation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum TemplateError {
    #[error("template must be a string, but a {found} value was provided")]
    NotAString { found: String },

    #[error("template expression '{expression}' has an empty variable name")]
    EmptyVariableName { expression: String },

    #[error("template expression '{expression}' contains an unclosed quote")]
    UnclosedQuote { expression: String },

    #[error("template expression '{expression}' contains a malformed bracket literal")]
    MalformedBracket { expression: String },
}
