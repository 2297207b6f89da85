//! Category rule set and the rule-based classifier.
//!
//! The rule table is the single source of truth for valid categories: the
//! assembler classifies with it, the external classifier adapter sends its
//! names and tags as the closed label space, and suggestions coming back are
//! validated against it.

pub mod pattern;
mod table;

pub use pattern::Pattern;

use crate::catalog::UNCATEGORIZED;
use std::collections::BTreeSet;

/// One named category with its ordered patterns and descriptive tags.
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryRule {
    pub name: &'static str,
    pub patterns: &'static [Pattern],
    pub tags: &'static [&'static str],
}

impl CategoryRule {
    /// First pattern (in declared order) that matches `id`, if any.
    pub fn matching_pattern(&self, id: &str) -> Option<&'static Pattern> {
        self.patterns.iter().find(|pattern| pattern.matches(id))
    }
}

/// Ordered, immutable list of category rules.
#[derive(Clone, Copy, Debug)]
pub struct RuleSet {
    rules: &'static [CategoryRule],
}

impl RuleSet {
    /// The built-in design-system category table.
    pub fn builtin() -> Self {
        Self::from_static(table::CATEGORY_RULES)
    }

    /// Wrap an arbitrary static table (used by tests and alternate catalogs).
    pub fn from_static(rules: &'static [CategoryRule]) -> Self {
        Self { rules }
    }

    /// Return the first rule, in declared order, owning a pattern that
    /// matches `id`. `None` is a normal outcome and means "Uncategorized".
    pub fn classify(&self, id: &str) -> Option<&'static CategoryRule> {
        self.rules
            .iter()
            .find(|rule| rule.matching_pattern(id).is_some())
    }

    /// Exact, case-sensitive membership test against the closed category set.
    pub fn is_valid_category(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&'static CategoryRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn rules(&self) -> impl Iterator<Item = &'static CategoryRule> {
        self.rules.iter()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &'static str> {
        self.rules.iter().map(|rule| rule.name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Structural checks over the table.
    ///
    /// Returns every problem found rather than stopping at the first one so a
    /// table edit surfaces all of its mistakes at once.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = BTreeSet::new();
        for rule in self.rules {
            if rule.name.trim().is_empty() {
                errors.push("category rule with empty name".to_string());
                continue;
            }
            if !seen.insert(rule.name) {
                errors.push(format!("duplicate category '{}'", rule.name));
            }
            if rule.name == UNCATEGORIZED {
                errors.push(format!("'{UNCATEGORIZED}' is reserved and cannot be a category"));
            }
            if rule.patterns.is_empty() {
                errors.push(format!("category '{}' has no patterns", rule.name));
            }
            if rule.patterns.iter().any(Pattern::is_empty) {
                errors.push(format!("category '{}' has an empty pattern", rule.name));
            }
            if rule.tags.is_empty() {
                errors.push(format!("category '{}' has no tags", rule.name));
            }
        }
        errors
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
