//! External classification of icons the rule table could not place.
//!
//! The `Classifier` trait is the seam between the catalog and whatever
//! produces suggestions; `CommandClassifier` shells out to a CLI and tests
//! plug in scripted fakes. `ExternalClassifierAdapter` owns one round: build
//! the prompt, make a single call, and filter the response down to
//! suggestions that name a pending icon and a known category. Every failure
//! in the round degrades to "no suggestions"; none of them is fatal.

pub mod command;
pub mod prompt;
pub mod response;

pub use command::CommandClassifier;
pub use prompt::{FALLBACK_CATEGORY, build_prompt};
pub use response::{ExternalSuggestion, ParsedResponse, Rejection, extract_json_array, parse_suggestions};

use crate::rules::RuleSet;
use anyhow::Result;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Something that can answer a classification prompt with free-form text.
pub trait Classifier {
    /// Cheap availability check; `false` skips the round without calling
    /// `complete`.
    fn is_available(&self) -> bool;

    /// Send `prompt` and return the raw response text.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// What happened in the external round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExternalRound {
    /// Every icon was placed by a rule.
    NotNeeded,
    /// No classifier configured.
    Disabled,
    /// A classifier is configured but not installed.
    Unavailable,
    /// The call itself failed (spawn error, timeout, non-zero exit, or a
    /// response with no JSON array in it).
    Failed { requested: usize, reason: String },
    Completed {
        requested: usize,
        suggestions: Vec<ExternalSuggestion>,
        rejected: usize,
    },
}

impl ExternalRound {
    /// Validated suggestions; empty for every outcome but `Completed`.
    pub fn suggestions(&self) -> &[ExternalSuggestion] {
        match self {
            ExternalRound::Completed { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ExternalRound::NotNeeded => "not needed".to_string(),
            ExternalRound::Disabled => "disabled".to_string(),
            ExternalRound::Unavailable => "classifier not installed".to_string(),
            ExternalRound::Failed { requested, reason } => {
                format!("failed for {requested} icons: {reason}")
            }
            ExternalRound::Completed {
                requested,
                suggestions,
                rejected,
            } => format!(
                "{} of {requested} icons suggested, {rejected} suggestions rejected",
                suggestions.len()
            ),
        }
    }
}

/// Runs one batch classification round against a `Classifier`.
pub struct ExternalClassifierAdapter<'a> {
    classifier: Option<&'a dyn Classifier>,
    rules: RuleSet,
}

impl<'a> ExternalClassifierAdapter<'a> {
    pub fn new(classifier: Option<&'a dyn Classifier>, rules: RuleSet) -> Self {
        Self { classifier, rules }
    }

    /// Ask for categories for every `pending` icon in a single call.
    pub fn resolve(&self, pending: &[&str]) -> ExternalRound {
        if pending.is_empty() {
            return ExternalRound::NotNeeded;
        }
        let Some(classifier) = self.classifier else {
            info!(pending = pending.len(), "external classification disabled");
            return ExternalRound::Disabled;
        };
        if !classifier.is_available() {
            warn!(
                pending = pending.len(),
                "external classifier not installed; leaving icons uncategorized"
            );
            return ExternalRound::Unavailable;
        }

        let prompt = build_prompt(&self.rules, pending);
        info!(pending = pending.len(), "requesting external classification");
        let raw = match classifier.complete(&prompt) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("external classification failed: {err:#}");
                return ExternalRound::Failed {
                    requested: pending.len(),
                    reason: format!("{err:#}"),
                };
            }
        };

        let pending_set: BTreeSet<&str> = pending.iter().copied().collect();
        let parsed = parse_suggestions(&raw, &pending_set, &self.rules);
        if !parsed.found_array {
            warn!("external classifier response contained no JSON array");
            return ExternalRound::Failed {
                requested: pending.len(),
                reason: "response contained no JSON array".to_string(),
            };
        }
        for rejection in &parsed.rejected {
            debug!(%rejection, "discarded suggestion");
        }
        if !parsed.rejected.is_empty() {
            warn!(
                rejected = parsed.rejected.len(),
                "discarded invalid external suggestions"
            );
        }
        ExternalRound::Completed {
            requested: pending.len(),
            rejected: parsed.rejected.len(),
            suggestions: parsed.accepted,
        }
    }
}
