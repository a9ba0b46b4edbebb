//! Rule trait for defining lint rules.

use crate::context::RuleContext;
use crate::crawler::SegmentSeeker;
use crate::segment::SyntaxNode;
use crate::types::Severity;

/// A single finding returned by a rule evaluation.
///
/// Anchored at the node that triggered it. The linter turns findings into
/// [`Violation`](crate::Violation)s for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding<'a> {
    /// The offending node.
    pub anchor: &'a SyntaxNode,
    /// Human-readable description.
    pub description: String,
}

impl<'a> Finding<'a> {
    /// Creates a new finding.
    #[must_use]
    pub fn new(anchor: &'a SyntaxNode, description: impl Into<String>) -> Self {
        Self {
            anchor,
            description: description.into(),
        }
    }
}

/// A per-node lint rule.
///
/// The linter crawls each tree with the rule's [`SegmentSeeker`] and calls
/// [`Rule::eval`] once per matching node. Evaluation must be a pure function
/// of the context: no state changes, at most one finding.
///
/// # Example
///
/// ```ignore
/// use sqlint_core::{Finding, Rule, RuleContext, SegmentSeeker};
///
/// pub struct NoSelectDistinct;
///
/// impl Rule for NoSelectDistinct {
///     fn code(&self) -> &'static str { "Example_NN01" }
///     fn name(&self) -> &'static str { "no-select-distinct" }
///
///     fn crawl_behaviour(&self) -> SegmentSeeker {
///         SegmentSeeker::new(&["select_clause_modifier"])
///     }
///
///     fn eval<'a>(&self, ctx: &RuleContext<'a>) -> Option<Finding<'a>> {
///         ctx.segment
///             .segments
///             .iter()
///             .find(|seg| seg.raw().eq_ignore_ascii_case("distinct"))
///             .map(|seg| Finding::new(seg, "DISTINCT is not allowed."))
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the unique rule code (e.g., "`Example_GG01`").
    fn code(&self) -> &'static str;

    /// Returns the kebab-case name of this rule (e.g., "forbid-select-wildcard").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the groups this rule belongs to, used for selective enabling.
    fn groups(&self) -> &'static [&'static str] {
        &["all"]
    }

    /// Returns the configuration keys this rule reads at construction.
    fn config_keywords(&self) -> &'static [&'static str] {
        &[]
    }

    /// Returns whether this rule can emit automatic fixes.
    fn is_fix_compatible(&self) -> bool {
        false
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the crawler that selects which nodes this rule sees.
    fn crawl_behaviour(&self) -> SegmentSeeker;

    /// Evaluates one node.
    ///
    /// # Returns
    ///
    /// `None` when the node is clean, otherwise the single finding.
    fn eval<'a>(&self, ctx: &RuleContext<'a>) -> Option<Finding<'a>>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
