//! Core types for lint violations and results.

use crate::segment::SyntaxNode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Location of a finding within a linted tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Tree file path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed, 0 when the parser recorded no position).
    pub line: usize,
    /// Column number (1-indexed, 0 when the parser recorded no position).
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self { file, line, column }
    }

    /// Creates a location from the start position of a node.
    #[must_use]
    pub fn from_node(file: PathBuf, node: &SyntaxNode) -> Self {
        let (line, column) = node
            .start_position()
            .map_or((0, 0), |pos| (pos.line, pos.column));
        Self::new(file, line, column)
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "`Example_GG01`").
    pub code: String,
    /// Rule name (e.g., "forbid-select-wildcard").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Location of the anchor node.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Raw text of the anchor node.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            source: String::new(),
        }
    }

    /// Attaches the raw text of the anchor node.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if !self.source.is_empty() {
            let _ = writeln!(output, "  = found: {}", self.source);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of trees checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |s| self.violations.iter().filter(|v| v.severity == s).count();
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Returns the one-line summary printed after a report.
    #[must_use]
    pub fn summary(&self) -> String {
        let (errors, warnings, infos) = self.count_by_severity();
        format!(
            "Found {} error(s), {} warning(s), {} info(s) in {} file(s)",
            errors, warnings, infos, self.files_checked
        )
    }

    /// Sorts violations by file, then line, then column.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "Example_GG01",
            "forbid-select-wildcard",
            severity,
            Location::new(PathBuf::from("queries/orders.json"), 3, 8),
            "'*' is not allowed in SELECT.",
        )
    }

    #[test]
    fn location_from_positioned_node() {
        let node = SyntaxNode::leaf("star", "*").at(3, 8);
        let loc = Location::from_node(PathBuf::from("q.json"), &node);
        assert_eq!((loc.line, loc.column), (3, 8));
    }

    #[test]
    fn location_from_unpositioned_node_is_zero() {
        let node = SyntaxNode::leaf("star", "*");
        let loc = Location::from_node(PathBuf::from("q.json"), &node);
        assert_eq!((loc.line, loc.column), (0, 0));
    }

    #[test]
    fn violation_format_includes_source() {
        let v = make_violation(Severity::Warning).with_source("*");
        let formatted = v.format();
        assert!(formatted.starts_with("Example_GG01 forbid-select-wildcard at queries/orders.json:3:8"));
        assert!(formatted.contains("warning: '*' is not allowed in SELECT."));
        assert!(formatted.contains("= found: *"));
    }

    #[test]
    fn violation_format_omits_empty_source() {
        let v = make_violation(Severity::Warning);
        assert!(!v.format().contains("found:"));
    }

    #[test]
    fn violation_display_is_compact() {
        let v = make_violation(Severity::Error);
        assert_eq!(
            v.to_string(),
            "queries/orders.json:3:8: error [Example_GG01] '*' is not allowed in SELECT."
        );
    }

    #[test]
    fn has_violations_at_threshold() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
    }

    #[test]
    fn summary_counts_by_severity() {
        let mut result = LintResult::new();
        result.files_checked = 2;
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Warning));
        assert_eq!(result.count_by_severity(), (1, 2, 0));
        assert_eq!(
            result.summary(),
            "Found 1 error(s), 2 warning(s), 0 info(s) in 2 file(s)"
        );
    }

    #[test]
    fn sort_orders_by_file_line_column() {
        let mut result = LintResult::new();
        let mut late = make_violation(Severity::Warning);
        late.location = Location::new(PathBuf::from("b.json"), 1, 1);
        let mut early = make_violation(Severity::Warning);
        early.location = Location::new(PathBuf::from("a.json"), 2, 4);
        let mut earliest = make_violation(Severity::Warning);
        earliest.location = Location::new(PathBuf::from("a.json"), 2, 1);
        result.violations = vec![late, early, earliest];

        result.sort();
        let order: Vec<(String, usize)> = result
            .violations
            .iter()
            .map(|v| (v.location.file.display().to_string(), v.location.column))
            .collect();
        assert_eq!(
            order,
            vec![
                ("a.json".to_string(), 1),
                ("a.json".to_string(), 4),
                ("b.json".to_string(), 1)
            ]
        );
    }
}
