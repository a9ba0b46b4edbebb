//! Rule to require CamelCase column names.
//!
//! Checks each direct child of a column reference. A name passes when its
//! first character is its own upper-case form, it contains at least one
//! character that changes under upper-casing, and it does not start with `_`.

use sqlint_core::{Finding, Rule, RuleContext, SegmentSeeker, Severity};

/// Rule code for camel-case-columns.
pub const CODE: &str = "Example_GG02";

/// Rule name for camel-case-columns.
pub const NAME: &str = "camel-case-columns";

/// Requires column reference parts to be CamelCase.
#[derive(Debug, Clone)]
pub struct CamelCaseColumns {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for CamelCaseColumns {
    fn default() -> Self {
        Self::new()
    }
}

impl CamelCaseColumns {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
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

/// Returns true if `column` is CamelCase.
///
/// An empty name is never CamelCase.
#[must_use]
pub fn is_camel_case(column: &str) -> bool {
    let Some(first) = column.chars().next() else {
        return false;
    };

    let first_letter_capital = first.to_uppercase().eq(std::iter::once(first));
    let all_letters_not_capital = column != column.to_uppercase();
    let underscore_is_not_first = first != '_';

    first_letter_capital && all_letters_not_capital && underscore_is_not_first
}

impl Rule for CamelCaseColumns {
    fn code(&self) -> &'static str {
        CODE
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Requires CamelCase column names"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn crawl_behaviour(&self) -> SegmentSeeker {
        SegmentSeeker::new(&["column_reference"])
    }

    fn eval<'a>(&self, ctx: &RuleContext<'a>) -> Option<Finding<'a>> {
        ctx.segment.segments.iter().find_map(|seg| {
            let col_name = seg.raw();
            (!is_camel_case(&col_name))
                .then(|| Finding::new(seg, format!("{col_name} is not in CamelCase.")))
        })
    }
}
