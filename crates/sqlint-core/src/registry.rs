//! Rule registry keyed by rule code.

use crate::config::{Config, RuleConfig};
use crate::rule::RuleBox;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Constructs a rule from its per-rule configuration.
pub type RuleConstructor = fn(&RuleConfig) -> RuleBox;

/// Metadata and constructor for a registered rule.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    /// Unique rule code.
    pub code: &'static str,
    /// Kebab-case rule name.
    pub name: &'static str,
    /// Brief description.
    pub description: &'static str,
    /// Groups used for selective enabling.
    pub groups: &'static [&'static str],
    /// Configuration keys the rule reads.
    pub config_keywords: &'static [&'static str],
    /// Whether the rule can emit automatic fixes.
    pub is_fix_compatible: bool,
    constructor: RuleConstructor,
}

impl RuleEntry {
    fn from_constructor(constructor: RuleConstructor) -> Self {
        let probe = constructor(&RuleConfig::default());
        Self {
            code: probe.code(),
            name: probe.name(),
            description: probe.description(),
            groups: probe.groups(),
            config_keywords: probe.config_keywords(),
            is_fix_compatible: probe.is_fix_compatible(),
            constructor,
        }
    }

    /// Constructs the rule with the given configuration.
    #[must_use]
    pub fn build(&self, config: &RuleConfig) -> RuleBox {
        for key in config.option_keys() {
            if !self.config_keywords.contains(&key) {
                warn!("Unknown option `{}` for rule {}", key, self.code);
            }
        }
        (self.constructor)(config)
    }

    /// Returns true if the selector names this rule's code, name, or a group.
    #[must_use]
    pub fn matches(&self, selector: &str) -> bool {
        self.code == selector || self.name == selector || self.groups.contains(&selector)
    }
}

/// Registry of available rules.
///
/// # Example
///
/// ```ignore
/// let mut registry = RuleRegistry::new();
/// registry.register(|cfg| Box::new(MyRule::from_config(cfg)));
///
/// let rules = registry.build(&config, None);
/// ```
#[derive(Debug, Default)]
pub struct RuleRegistry {
    entries: BTreeMap<&'static str, RuleEntry>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule constructor.
    ///
    /// A later registration with the same code replaces the earlier one.
    pub fn register(&mut self, constructor: RuleConstructor) -> &mut Self {
        let entry = RuleEntry::from_constructor(constructor);
        if self.entries.contains_key(entry.code) {
            warn!("Rule {} registered twice; keeping the latest", entry.code);
        }
        self.entries.insert(entry.code, entry);
        self
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a rule by code or name.
    #[must_use]
    pub fn get(&self, code_or_name: &str) -> Option<&RuleEntry> {
        self.entries
            .get(code_or_name)
            .or_else(|| self.entries.values().find(|e| e.name == code_or_name))
    }

    /// Returns all entries sorted by code.
    pub fn entries(&self) -> impl Iterator<Item = &RuleEntry> {
        self.entries.values()
    }

    /// Returns entries matching any `include` selector and no `exclude` selector.
    ///
    /// Selectors that match nothing are logged and ignored.
    #[must_use]
    pub fn select<S: AsRef<str>>(&self, include: &[S], exclude: &[S]) -> Vec<&RuleEntry> {
        for selector in include.iter().chain(exclude) {
            let selector = selector.as_ref();
            if !self.entries.values().any(|e| e.matches(selector)) {
                warn!("Unknown rule selector: {}", selector);
            }
        }

        self.entries
            .values()
            .filter(|e| include.iter().any(|s| e.matches(s.as_ref())))
            .filter(|e| !exclude.iter().any(|s| e.matches(s.as_ref())))
            .collect()
    }

    /// Constructs the selected, enabled rules with their configuration.
    ///
    /// `selectors` overrides `config.linter.rules` when given.
    #[must_use]
    pub fn build(&self, config: &Config, selectors: Option<&[String]>) -> Vec<RuleBox> {
        let include = selectors.unwrap_or(&config.linter.rules);
        let default_config = RuleConfig::default();

        self.select(include, config.linter.exclude_rules.as_slice())
            .into_iter()
            .filter(|entry| {
                let enabled = config.is_rule_enabled(entry.code, entry.name);
                if !enabled {
                    debug!("Skipping disabled rule: {}", entry.code);
                }
                enabled
            })
            .map(|entry| {
                let rule_config = config
                    .rule_config(entry.code, entry.name)
                    .unwrap_or(&default_config);
                entry.build(rule_config)
            })
            .collect()
    }
}
