//! # sqlint
//!
//! Example lint rules for parsed SQL syntax trees.
//!
//! This is the facade crate that re-exports the core framework and the
//! built-in rules.
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use sqlint::{Config, Linter};
//! use sqlint::rules::default_registry;
//!
//! let config = Config::from_file("sqlint.toml".as_ref())?;
//! let rules = default_registry().build(&config, None);
//!
//! let linter = Linter::builder()
//!     .rules(rules)
//!     .config(config)
//!     .build()?;
//!
//! let result = linter.analyze()?;
//! println!("{}", result.summary());
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use sqlint_core::*;

/// Built-in rules and the default registry.
pub mod rules {
    pub use sqlint_rules::*;
}
