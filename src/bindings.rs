//! Helpers for checking a template's variable references against the
//! bindings available to it.

use crate::template::{TemplateError, TemplateVarExtractor};
use serde_json::{Map, Value};
use thiserror::Error;

/// An error type for binding validation failures.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("template references undefined variables: {}", .names.join(", "))]
    UnboundVariables { names: Vec<String> },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Returns the variables referenced by `template` that have no binding, in
/// the order they first appear.
///
/// Lookup is by exact name: a dotted path such as `foo.bar` is only
/// considered bound by a key of the same spelling.
pub fn missing_vars(
    template: &str,
    bindings: &Map<String, Value>,
) -> Result<Vec<String>, TemplateError> {
    let vars = TemplateVarExtractor::new().extract(template)?;
    Ok(vars
        .into_iter()
        .filter(|name| !bindings.contains_key(name))
        .collect())
}

/// Validates that every variable referenced by `template` has a binding.
pub fn check_bindings(template: &str, bindings: &Map<String, Value>) -> Result<(), BindingError> {
    let names = missing_vars(template, bindings)?;
    if names.is_empty() {
        Ok(())
    } else {
        Err(BindingError::UnboundVariables { names })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings_of(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_vars_reports_unbound_names() {
        let bindings = bindings_of(serde_json::json!({"name": "Alice"}));
        let missing = missing_vars("{{name}} has {{count}} tasks", &bindings).unwrap();
        assert_eq!(missing, vec!["count"]);
    }

    #[test]
    fn test_check_bindings_accepts_fully_bound_template() {
        let bindings = bindings_of(serde_json::json!({"name": "Alice", "count": 3}));
        assert!(check_bindings("{{name}} has {{count}} tasks", &bindings).is_ok());
    }

    #[test]
    fn test_check_bindings_rejects_unbound_template() {
        let bindings = bindings_of(serde_json::json!({}));
        let err = check_bindings("{{foo}} {{bar}}", &bindings).unwrap_err();
        match err {
            BindingError::UnboundVariables { names } => {
                assert_eq!(names, vec!["foo", "bar"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_template_errors_propagate() {
        let bindings = bindings_of(serde_json::json!({}));
        let err = check_bindings("{{  }}", &bindings).unwrap_err();
        assert!(matches!(
            err,
            BindingError::Template(TemplateError::EmptyVariableName { .. })
        ));
    }
}
