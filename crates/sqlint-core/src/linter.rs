//! Core linter for orchestrating lint execution.

use crate::config::Config;
use crate::rule::{Rule, RuleBox};
use crate::segment::SyntaxNode;
use crate::types::{LintResult, Location, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// File extension of serialized parse trees.
const TREE_EXTENSION: &str = "json";

/// Errors that can occur during linting.
#[derive(Debug, Error)]
pub enum LinterError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error deserializing a parse tree.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the tree that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Directory walk error.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory holding parse trees.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds multiple boxed rules to the linter.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on unreadable parse trees (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the linter.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Linter, LinterError> {
        let config = self.config.unwrap_or_default();

        let root = self.root.unwrap_or_else(|| config.linter.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.linter.exclude.iter().cloned());

        Ok(Linter {
            root,
            rules: self.rules,
            exclude_patterns,
            config,
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main linter that crawls parse trees and dispatches rules.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Discovers, reads, and lints every parse tree under the root.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or if a tree cannot be
    /// parsed and `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, LinterError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} parse trees to lint", files.len());

        for file_path in &files {
            match self.lint_file(file_path) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(LinterError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(LinterError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Reads and lints a single parse tree file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialized.
    pub fn lint_file(&self, path: &Path) -> Result<Vec<Violation>, LinterError> {
        debug!("Linting: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let tree = SyntaxNode::from_json(&content).map_err(|e| LinterError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let relative_path = path
            .strip_prefix(&self.root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Ok(self.lint_tree(&relative_path, &tree))
    }

    /// Lints an in-memory tree and returns violations in crawl order.
    #[must_use]
    pub fn lint_tree(&self, path: &Path, tree: &SyntaxNode) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.code(), rule.name()) {
                debug!("Skipping disabled rule: {}", rule.code());
                continue;
            }

            let severity = self
                .config
                .rule_severity(rule.code(), rule.name())
                .unwrap_or_else(|| rule.default_severity());

            rule.crawl_behaviour().crawl(tree, path, |ctx| {
                if let Some(finding) = rule.eval(ctx) {
                    violations.push(
                        Violation::new(
                            rule.code(),
                            rule.name(),
                            severity,
                            Location::from_node(path.to_path_buf(), finding.anchor),
                            finding.description,
                        )
                        .with_source(finding.anchor.raw()),
                    );
                }
            });
        }

        violations
    }

    /// Discovers all parse tree files to lint.
    fn discover_files(&self) -> Result<Vec<PathBuf>, LinterError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.config.linter.respect_gitignore)
            .git_exclude(self.config.linter.respect_gitignore)
            .require_git(false);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(TREE_EXTENSION)
            {
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    ///
    /// Patterns are matched against the path relative to the root, so
    /// directories above the root never trigger an exclusion.
    fn should_exclude(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        let relative_str = relative.to_string_lossy().replace('\\', "/");
        // Anchor for substring matching so `target/x.json` hits `/target/`
        let anchored = format!("/{relative_str}");

        self.exclude_patterns.iter().any(|pattern| {
            if glob::Pattern::new(pattern).is_ok_and(|p| p.matches(&relative_str)) {
                return true;
            }

            // Also check as substring for patterns like "**/target/**"
            let normalized_pattern = pattern.replace("**", "");
            !normalized_pattern.is_empty()
                && normalized_pattern != "/"
                && anchored.contains(&normalized_pattern)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RuleContext;
    use crate::crawler::SegmentSeeker;
    use crate::rule::Finding;
    use crate::types::Severity;

    struct NoLowercaseKeywords;

    impl Rule for NoLowercaseKeywords {
        fn code(&self) -> &'static str {
            "T01"
        }
        fn name(&self) -> &'static str {
            "no-lowercase-keywords"
        }
        fn crawl_behaviour(&self) -> SegmentSeeker {
            SegmentSeeker::new(&["keyword"])
        }
        fn eval<'a>(&self, ctx: &RuleContext<'a>) -> Option<Finding<'a>> {
            let raw = ctx.segment.raw();
            (raw != raw.to_uppercase()).then(|| Finding::new(ctx.segment, "lowercase keyword"))
        }
    }

    fn tree() -> SyntaxNode {
        SyntaxNode::branch(
            "select_clause",
            vec![
                SyntaxNode::leaf("keyword", "select").at(1, 1),
                SyntaxNode::leaf("keyword", "DISTINCT").at(1, 8),
                SyntaxNode::leaf("keyword", "all").at(1, 17),
            ],
        )
    }

    #[test]
    fn test_builder() {
        let linter = Linter::builder()
            .root(".")
            .exclude("**/target/**")
            .build()
            .expect("Failed to build linter");

        assert!(linter.root().exists());
        assert_eq!(linter.rule_count(), 0);
    }

    #[test]
    fn test_exclude_patterns() {
        let linter = Linter::builder()
            .root("/foo")
            .exclude("**/target/**")
            .exclude("**/fixtures/**")
            .build()
            .expect("Failed to build linter");

        assert!(linter.should_exclude(Path::new("/foo/target/debug/tree.json")));
        assert!(linter.should_exclude(Path::new("/foo/nested/fixtures/tree.json")));
        assert!(!linter.should_exclude(Path::new("/foo/trees/query.json")));
    }

    #[test]
    fn test_exclude_ignores_directories_above_root() {
        let linter = Linter::builder()
            .root("/work/target/trees")
            .exclude("**/target/**")
            .build()
            .expect("Failed to build linter");

        assert!(!linter.should_exclude(Path::new("/work/target/trees/q.json")));
        assert!(linter.should_exclude(Path::new("/work/target/trees/target/q.json")));
    }

    #[test]
    fn test_lint_tree_reports_each_matching_node() {
        let linter = Linter::builder()
            .root(".")
            .rule(NoLowercaseKeywords)
            .build()
            .expect("Failed to build linter");

        let violations = linter.lint_tree(Path::new("q.json"), &tree());
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].location.column, 1);
        assert_eq!(violations[0].source, "select");
        assert_eq!(violations[1].location.column, 17);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_severity_override() {
        let config = Config::parse("[rules.T01]\nseverity = \"info\"\n").expect("valid config");
        let linter = Linter::builder()
            .root(".")
            .config(config)
            .rule(NoLowercaseKeywords)
            .build()
            .expect("Failed to build linter");

        let violations = linter.lint_tree(Path::new("q.json"), &tree());
        assert!(violations.iter().all(|v| v.severity == Severity::Info));
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let config = Config::parse("[rules.no-lowercase-keywords]\nenabled = false\n")
            .expect("valid config");
        let linter = Linter::builder()
            .root(".")
            .config(config)
            .rule(NoLowercaseKeywords)
            .build()
            .expect("Failed to build linter");

        assert!(linter.lint_tree(Path::new("q.json"), &tree()).is_empty());
    }
}
