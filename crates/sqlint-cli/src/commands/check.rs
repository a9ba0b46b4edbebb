//! Check command implementation.

use anyhow::{Context, Result};
use sqlint_core::utils::split_comma_list;
use sqlint_core::{Config, Linter};
use sqlint_rules::default_registry;
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: Option<&Path>,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source)?;
    let fail_on = config.fail_on();

    let selectors = rules_filter.as_deref().and_then(parse_selectors);
    let rules = default_registry().build(&config, selectors.as_deref());

    let mut builder = Linter::builder().rules(rules).config(config);
    if let Some(path) = path {
        builder = builder.root(path);
    }
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    let linter = builder.build().context("Failed to build linter")?;

    tracing::info!(
        "Linting {:?} with {} rules",
        linter.root(),
        linter.rule_count()
    );

    let result = linter.analyze().context("Analysis failed")?;

    super::output::print(&result, format)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Splits a `--rules` value into selectors.
///
/// A value with no non-empty entry yields `None` so the configured
/// selectors stay in effect.
fn parse_selectors(filter: &str) -> Option<Vec<String>> {
    let selectors: Vec<String> = split_comma_list(filter)
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if selectors.is_empty() {
        tracing::warn!("--rules {:?} names no rules; using configured rules", filter);
        return None;
    }
    Some(selectors)
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn selectors_are_split_and_trimmed() {
        assert_eq!(
            parse_selectors("Example_GG01, camel-case-columns"),
            Some(vec![
                "Example_GG01".to_string(),
                "camel-case-columns".to_string()
            ])
        );
        assert_eq!(parse_selectors("core,,"), Some(vec!["core".to_string()]));
    }

    #[test]
    fn empty_selectors_fall_back_to_config() {
        assert_eq!(parse_selectors(""), None);
        assert_eq!(parse_selectors(" , "), None);
    }

    #[test]
    fn default_source_yields_default_config() {
        let config = load_config(&ConfigSource::Default).unwrap();
        assert_eq!(config.linter.rules, vec!["all"]);
    }

    #[test]
    fn project_source_is_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sqlint.toml");
        fs::write(&path, "fail_on = \"info\"\n").unwrap();

        let config = load_config(&ConfigSource::Project(path)).unwrap();
        assert_eq!(config.fail_on(), sqlint_core::Severity::Info);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_config(&ConfigSource::Explicit("/nonexistent/sqlint.toml".into()))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
