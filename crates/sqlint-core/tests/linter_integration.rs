//! Integration test: parse trees on disk linted end to end via `Linter`.

use sqlint_core::{
    Config, Finding, Linter, LinterError, Rule, RuleContext, SegmentSeeker, Severity,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Flags any identifier spelled `forbidden`.
struct NoForbiddenIdentifier;

impl Rule for NoForbiddenIdentifier {
    fn code(&self) -> &'static str {
        "T01"
    }
    fn name(&self) -> &'static str {
        "no-forbidden-identifier"
    }
    fn crawl_behaviour(&self) -> SegmentSeeker {
        SegmentSeeker::new(&["column_reference"])
    }
    fn eval<'a>(&self, ctx: &RuleContext<'a>) -> Option<Finding<'a>> {
        ctx.segment
            .segments
            .iter()
            .find(|seg| seg.raw() == "forbidden")
            .map(|seg| Finding::new(seg, "forbidden identifier"))
    }
}

const CLEAN_TREE: &str = r#"{
  "type": "column_reference",
  "segments": [{"type": "naked_identifier", "raw": "allowed", "pos": {"line": 1, "column": 8}}]
}"#;

const DIRTY_TREE: &str = r#"{
  "type": "file",
  "segments": [
    {"type": "column_reference", "segments": [
      {"type": "naked_identifier", "raw": "forbidden", "pos": {"line": 2, "column": 3}}
    ]},
    {"type": "column_reference", "segments": [
      {"type": "naked_identifier", "raw": "forbidden", "pos": {"line": 1, "column": 8}}
    ]}
  ]
}"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(path, content).expect("write fixture");
}

fn linter(root: &Path, config: Config) -> Linter {
    Linter::builder()
        .root(root)
        .config(config)
        .rule(NoForbiddenIdentifier)
        .build()
        .expect("linter should build")
}

#[test]
fn lints_every_tree_and_sorts_violations() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "clean.json", CLEAN_TREE);
    write(tmp.path(), "nested/dirty.json", DIRTY_TREE);
    write(tmp.path(), "notes.txt", "not a tree");

    let result = linter(tmp.path(), Config::default())
        .analyze()
        .expect("analysis should succeed");

    assert_eq!(result.files_checked, 2);
    assert_eq!(result.violations.len(), 2);
    assert_eq!(result.violations[0].location.line, 1);
    assert_eq!(result.violations[1].location.line, 2);
    assert_eq!(
        result.violations[0].location.file,
        Path::new("nested").join("dirty.json")
    );
    assert!(result
        .violations
        .iter()
        .all(|v| v.code == "T01" && v.severity == Severity::Error));
}

#[test]
fn skips_malformed_tree_by_default() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "clean.json", CLEAN_TREE);
    write(tmp.path(), "broken.json", "{ not json");

    let result = linter(tmp.path(), Config::default())
        .analyze()
        .expect("analysis should succeed");

    assert_eq!(result.files_checked, 1);
    assert!(result.violations.is_empty());
}

#[test]
fn fails_on_malformed_tree_when_requested() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "broken.json", "{ not json");

    let linter = Linter::builder()
        .root(tmp.path())
        .rule(NoForbiddenIdentifier)
        .fail_on_parse_error(true)
        .build()
        .expect("linter should build");

    let err = linter.analyze().expect_err("analysis should fail");
    assert!(matches!(err, LinterError::Parse { .. }));
}

#[test]
fn respects_exclude_and_gitignore() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "generated/dirty.json", DIRTY_TREE);
    write(tmp.path(), "ignored/dirty.json", DIRTY_TREE);
    write(tmp.path(), ".gitignore", "ignored/\n");
    write(tmp.path(), "clean.json", CLEAN_TREE);

    let config = Config::parse(
        r#"
[linter]
exclude = ["**/generated/**"]
"#,
    )
    .expect("valid config");

    let result = linter(tmp.path(), config)
        .analyze()
        .expect("analysis should succeed");

    assert_eq!(result.files_checked, 1);
    assert!(result.violations.is_empty());
}

#[test]
fn root_inside_target_directory_is_still_linted() {
    let tmp = TempDir::new().expect("tempdir");
    let root = tmp.path().join("target").join("trees");
    write(&root, "q.json", DIRTY_TREE);
    write(&root, "target/stale.json", DIRTY_TREE);

    let result = linter(&root, Config::default())
        .analyze()
        .expect("analysis should succeed");

    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 2);
    assert!(result
        .violations
        .iter()
        .all(|v| v.location.file == Path::new("q.json")));
}

#[test]
fn linter_table_without_exclude_keeps_default_exclude() {
    let tmp = TempDir::new().expect("tempdir");
    write(tmp.path(), "clean.json", CLEAN_TREE);
    write(tmp.path(), "target/dirty.json", DIRTY_TREE);

    let config = Config::parse(
        r#"
[linter]
respect_gitignore = false
"#,
    )
    .expect("valid config");

    let result = linter(tmp.path(), config)
        .analyze()
        .expect("analysis should succeed");

    assert_eq!(result.files_checked, 1);
    assert!(result.violations.is_empty());
}
