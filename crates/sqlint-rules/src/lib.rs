//! # sqlint-rules
//!
//! Example lint rules for sqlint.
//!
//! Each rule is a small evaluator over one kind of syntax-tree node, showing
//! how to plug a rule into the [`sqlint_core::Rule`] contract.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | `Example_GG01` | `forbid-select-wildcard` | Forbids `*` in SELECT clauses |
//! | `Example_GG02` | `camel-case-columns` | Requires CamelCase column names |
//!
//! ## Usage
//!
//! ```ignore
//! use sqlint_core::{Config, Linter};
//! use sqlint_rules::default_registry;
//!
//! let config = Config::default();
//! let rules = default_registry().build(&config, None);
//! let linter = Linter::builder().root("./trees").rules(rules).config(config).build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod camel_case_columns;
mod forbid_select_wildcard;
mod registry;

pub use camel_case_columns::{is_camel_case, CamelCaseColumns};
pub use forbid_select_wildcard::ForbidSelectWildcard;
pub use registry::default_registry;

/// Re-export core types for convenience.
pub use sqlint_core::{Rule, Severity, Violation};
