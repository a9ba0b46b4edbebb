//! Default rule registry.

use crate::{CamelCaseColumns, ForbidSelectWildcard};
use sqlint_core::RuleRegistry;

/// Returns a registry holding every built-in rule.
///
/// Includes:
/// - `forbid-select-wildcard` (`Example_GG01`) - Forbids `*` in SELECT
/// - `camel-case-columns` (`Example_GG02`) - Requires CamelCase columns
#[must_use]
pub fn default_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry
        .register(|config| Box::new(ForbidSelectWildcard::from_config(config)))
        .register(|_| Box::new(CamelCaseColumns::new()));
    registry
}
