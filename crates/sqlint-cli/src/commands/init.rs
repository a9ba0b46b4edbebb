//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# sqlint configuration

# Minimum severity that makes `sqlint check` exit non-zero
fail_on = "error"

[linter]
# Directory holding JSON parse trees (default: current directory)
# root = "./trees"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
]

# Respect .gitignore files
respect_gitignore = true

# Rules to run, by code, name, or group
rules = ["all"]
# exclude_rules = ["Example_GG02"]

# Rule configurations, keyed by code or name
# Each rule can be enabled/disabled and have its severity overridden

[rules.Example_GG01]
enabled = true
# severity = "warning"  # Override default severity
forbidden_columns = ""

[rules.Example_GG02]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("sqlint.toml"), force)?;

    println!("Created sqlint.toml");
    println!("\nNext steps:");
    println!("  1. Edit sqlint.toml to configure rules");
    println!("  2. Run: sqlint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.is_rule_enabled("Example_GG01", "forbid-select-wildcard"));
        assert_eq!(config.linter.rules, vec!["all"]);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sqlint.toml");
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
