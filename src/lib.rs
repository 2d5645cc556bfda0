//! 'template-vars' - A small analyzer for variable references in
//! Handlebars-style templates.
//!
//! This library answers one narrow question reliably: which variable names
//! does a piece of template text depend on? It validates expression syntax
//! as it scans, so malformed templates surface as descriptive, typed errors
//! instead of silently contributing wrong names. It deliberately stops short
//! of rendering — values are never substituted and block helpers are never
//! evaluated.

pub mod bindings;
pub mod template;

pub use bindings::{BindingError, check_bindings, missing_vars};
pub use template::{TemplateError, TemplateVarExtractor};

/// Extracts the variable names referenced by a Handlebars-style template.
///
/// This function uses a `TemplateVarExtractor` with its default settings to
/// scan the template: `{{name}}` expressions in all their supported shapes
/// (dotted and slashed paths, `@`-prefixed names, bracket and quoted
/// literals) and `{{#if ...}}` block headers. Duplicates collapse to the
/// first occurrence and escaped expressions (`\{{...}}`) are skipped.
///
/// For diagnostic logging during extraction, see the
/// `template::TemplateVarExtractor` struct and its `with_debug` builder.
///
/// # Returns
///
/// A `Result` containing the distinct variable names in first-seen order on
/// success, or a `TemplateError` describing the first syntax problem found.
pub fn extract_used_vars(template: &str) -> Result<Vec<String>, TemplateError> {
    let extractor = TemplateVarExtractor::new();
    extractor.extract(template)
}
