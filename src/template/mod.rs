//! Variable reference extraction for Handlebars-style templates.
//!
//! This module answers one question: which variable names does a template
//! depend on? It performs no rendering and no value substitution — it scans
//! the text, validates expression syntax, and reports the referenced names.
//!
//! # Features
//!
//! - **Name extraction**: bare names, dotted and slashed paths, `@`-prefixed
//!   names, `[bracket]` and quoted literals, `{{#if ...}}` block headers
//! - **Syntax validation**: empty expressions, unbalanced quotes and
//!   malformed bracket literals are reported as typed errors
//! - **Escapes**: `\{{...}}` marks an expression as literal text, invisible
//!   to both validation and extraction
//!
//! # Examples
//!
//! ## Extract the variables a template references
//!
//! ```rust
//! use template_vars::template::TemplateVarExtractor;
//!
//! let extractor = TemplateVarExtractor::new();
//! let vars = extractor
//!     .extract("Hello {{name}}, you have {{count}} new messages.")
//!     .unwrap();
//! assert_eq!(vars, vec!["name", "count"]);
//! ```
//!
//! ## Surface syntax problems to the template author
//!
//! ```rust
//! use template_vars::template::{TemplateError, TemplateVarExtractor};
//!
//! let extractor = TemplateVarExtractor::new();
//! let err = extractor.extract(r#"{{"unterminated}}"#).unwrap_err();
//! assert!(matches!(err, TemplateError::UnclosedQuote { .. }));
//! ```

pub mod error;
pub mod extractor;

pub use self::error::TemplateError;
pub use self::extractor::TemplateVarExtractor;
