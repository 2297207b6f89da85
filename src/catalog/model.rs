//! Serializable catalog records.
//!
//! `IconRecord` is the one contract shared with the browsing UI and the SVG
//! export step; field names are camelCase on disk.

use crate::naming::{display_name, slug};
use crate::rules::CategoryRule;
use crate::tags::synthesize_tags;
use serde::{Deserialize, Serialize};

/// Category placeholder for icons no rule or suggestion could place.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Where the icon's artwork comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSource {
    /// Imported from the third-party icon package.
    Library,
    /// Local SVG asset component.
    Custom,
    #[default]
    Unknown,
}

impl IconSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconSource::Library => "library",
            IconSource::Custom => "custom",
            IconSource::Unknown => "unknown",
        }
    }
}

/// How a record obtained its category. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    /// No rule matched; waiting on (or abandoned by) the external classifier.
    #[default]
    Pending,
    Rule,
    External,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One catalog entry per enumeration identifier.
pub struct IconRecord {
    pub enum_name: String,
    pub display_name: String,
    pub category: String,
    pub tags: Vec<String>,
    pub source: IconSource,
    pub asset_path: String,
    #[serde(skip)]
    pub resolution: Resolution,
}

impl IconRecord {
    /// Build a record from the rule-classification result.
    pub fn classified(id: &str, rule: Option<&'static CategoryRule>, source: IconSource) -> Self {
        let category = rule.map(|rule| rule.name).unwrap_or(UNCATEGORIZED);
        Self {
            enum_name: id.to_string(),
            display_name: display_name(id),
            category: category.to_string(),
            tags: synthesize_tags(id, category, rule, &[]),
            source,
            asset_path: asset_path(category, id),
            resolution: if rule.is_some() {
                Resolution::Rule
            } else {
                Resolution::Pending
            },
        }
    }

    pub fn is_pending(&self) -> bool {
        self.category == UNCATEGORIZED
    }

    /// Move a pending record to `rule`'s category, recomputing the derived
    /// fields. `extra_tags` are the tags that came with the suggestion.
    pub(crate) fn resolve_external(&mut self, rule: &'static CategoryRule, extra_tags: &[String]) {
        self.category = rule.name.to_string();
        self.tags = synthesize_tags(&self.enum_name, rule.name, Some(rule), extra_tags);
        self.asset_path = asset_path(rule.name, &self.enum_name);
        self.resolution = Resolution::External;
    }
}

/// `<slug(category)>/<slug(id)>`, recomputed whenever the category changes.
pub fn asset_path(category: &str, id: &str) -> String {
    format!("{}/{}", slug(category), slug(id))
}
