//! # sqlint-core
//!
//! Core framework for linting parsed SQL syntax trees.
//!
//! The trees themselves come from an external parser; this crate provides
//! the pieces rules plug into:
//!
//! - [`SyntaxNode`] for the immutable parse tree
//! - [`Rule`] trait for per-node rule evaluators
//! - [`SegmentSeeker`] for crawling a tree by node type
//! - [`RuleRegistry`] for selecting rules by code, name, or group
//! - [`Linter`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use sqlint_core::{Linter, SyntaxNode};
//!
//! let linter = Linter::builder()
//!     .root("./trees")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = linter.analyze()?;
//! println!("{}", result.summary());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod crawler;
mod linter;
mod registry;
mod rule;
mod segment;
mod types;

/// Utility functions for rule implementations.
pub mod utils;

pub use config::{Config, ConfigError, LinterConfig, RuleConfig};
pub use context::RuleContext;
pub use crawler::SegmentSeeker;
pub use linter::{Linter, LinterBuilder, LinterError};
pub use registry::{RuleConstructor, RuleEntry, RuleRegistry};
pub use rule::{Finding, Rule, RuleBox};
pub use segment::{Position, SyntaxNode};
pub use types::{LintResult, Location, Severity, Violation};
