//! Rule to forbid `*` in SELECT clauses.
//!
//! # Rationale
//!
//! With `SELECT * FROM foo`, columns added to `foo` later flow silently into
//! every consumer. Listing columns (`SELECT a, b, c FROM foo`) keeps what is
//! used explicit.
//!
//! # Configuration
//!
//! - `forbidden_columns`: comma-separated column names (default: empty).
//!   Parsed and kept on the rule but not consulted by the check.

use sqlint_core::utils::split_comma_list;
use sqlint_core::{Finding, Rule, RuleConfig, RuleContext, SegmentSeeker, Severity};
use tracing::debug;

/// Rule code for forbid-select-wildcard.
pub const CODE: &str = "Example_GG01";

/// Rule name for forbid-select-wildcard.
pub const NAME: &str = "forbid-select-wildcard";

const FORBIDDEN_COLUMNS: &str = "forbidden_columns";

/// Forbids a `*` element directly under a SELECT clause.
#[derive(Debug, Clone)]
pub struct ForbidSelectWildcard {
    /// Column names parsed from `forbidden_columns`.
    pub forbidden_columns: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ForbidSelectWildcard {
    fn default() -> Self {
        Self::new()
    }
}

impl ForbidSelectWildcard {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&RuleConfig::default())
    }

    /// Creates the rule from its configuration.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let raw = config.get_raw(FORBIDDEN_COLUMNS).unwrap_or_default();
        let forbidden_columns = split_comma_list(&raw);
        debug!("{CODE}: forbidden_columns = {:?}", forbidden_columns);

        Self {
            forbidden_columns,
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for ForbidSelectWildcard {
    fn code(&self) -> &'static str {
        CODE
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Forbids '*' in SELECT clauses"
    }

    fn config_keywords(&self) -> &'static [&'static str] {
        &[FORBIDDEN_COLUMNS]
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn crawl_behaviour(&self) -> SegmentSeeker {
        SegmentSeeker::new(&["select_clause"])
    }

    fn eval<'a>(&self, ctx: &RuleContext<'a>) -> Option<Finding<'a>> {
        ctx.segment
            .segments
            .iter()
            .find(|seg| seg.raw().to_lowercase() == "*")
            .map(|seg| Finding::new(seg, "'*' is not allowed in SELECT."))
    }
}
