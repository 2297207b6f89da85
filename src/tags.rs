//! Tag synthesis for catalog records.

use crate::naming::tag_tokens;
use crate::rules::CategoryRule;
use std::collections::BTreeSet;

/// Ordered tag list with case-insensitive uniqueness.
///
/// Tags keep their first-insertion order so regenerated catalogs diff
/// cleanly; every stored tag is trimmed and lowercased.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet {
    seen: BTreeSet<String>,
    ordered: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag; returns false for blanks and duplicates.
    pub fn insert(&mut self, tag: &str) -> bool {
        let normalized = tag.trim().to_lowercase();
        if normalized.is_empty() || !self.seen.insert(normalized.clone()) {
            return false;
        }
        self.ordered.push(normalized);
        true
    }

    pub fn extend<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.insert(tag.as_ref());
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.seen.contains(&tag.trim().to_lowercase())
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Derive the tags for one icon.
///
/// Union, in this order, of the extra tags (an external suggestion's tags,
/// empty for rule matches), the resolved category's rule tags, the
/// identifier's name tokens, and the lowercased category name. `rule` is the
/// rule of the category the icon finally resolved to, so this is re-run after
/// an external suggestion is merged.
pub fn synthesize_tags(
    id: &str,
    category: &str,
    rule: Option<&CategoryRule>,
    extra: &[String],
) -> Vec<String> {
    let mut tags = TagSet::new();
    tags.extend(extra);
    if let Some(rule) = rule {
        tags.extend(rule.tags);
    }
    tags.extend(tag_tokens(id));
    tags.insert(category);
    tags.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Pattern, RuleSet};

    static FIXTURE: CategoryRule = CategoryRule {
        name: "Widgets",
        patterns: &[Pattern::Prefix("FOO_")],
        tags: &["a", "b", "c", "foo"],
    };

    #[test]
    fn union_of_rule_tags_name_tokens_and_category() {
        let tags = synthesize_tags("FOO_BAR", FIXTURE.name, Some(&FIXTURE), &[]);
        assert_eq!(tags, vec!["a", "b", "c", "foo", "bar", "widgets"]);
    }

    #[test]
    fn unmatched_icons_get_name_tokens_and_sentinel() {
        let tags = synthesize_tags("UNKNOWN_WIDGET_99", "Uncategorized", None, &[]);
        assert_eq!(tags, vec!["unknown", "widget", "uncategorized"]);
    }

    #[test]
    fn extra_tags_are_normalized_and_deduplicated_case_insensitively() {
        let rules = RuleSet::builtin();
        let rule = rules.get("Interface");
        let extra = vec![" Widget ".to_string(), "UI".to_string(), String::new()];
        let tags = synthesize_tags("UNKNOWN_WIDGET_99", "Interface", rule, &extra);
        assert_eq!(
            tags,
            vec!["widget", "ui", "interface", "action", "interaction", "unknown"]
        );
        let unique: BTreeSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn tag_set_reports_membership_ignoring_case() {
        let mut set = TagSet::new();
        assert!(set.insert("Wallet"));
        assert!(!set.insert("WALLET"));
        assert!(!set.insert("   "));
        assert!(set.contains("wallet"));
        assert_eq!(set.into_vec(), vec!["wallet"]);
    }
}
