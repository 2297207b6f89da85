//! Catalog assembly.
//!
//! Every identifier becomes exactly one record: rule classification first,
//! then a single external round for whatever is left, then the summary. The
//! external round can only move a record out of `Uncategorized` and only into
//! a category the rule set knows.

use super::model::{IconRecord, Resolution};
use super::summary::CatalogSummary;
use crate::classifier::{Classifier, ExternalClassifierAdapter, ExternalRound, ExternalSuggestion};
use crate::rules::RuleSet;
use crate::sources::IconSourceMap;
use tracing::{debug, info, warn};

/// Assembled catalog plus what happened on the way.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// One record per identifier, in enumeration order.
    pub records: Vec<IconRecord>,
    pub external: ExternalRound,
    /// External suggestions actually merged into records.
    pub applied: usize,
    pub summary: CatalogSummary,
}

pub struct CatalogAssembler<'a> {
    rules: RuleSet,
    sources: &'a IconSourceMap,
}

impl<'a> CatalogAssembler<'a> {
    pub fn new(rules: RuleSet, sources: &'a IconSourceMap) -> Self {
        Self { rules, sources }
    }

    /// Rule pass: one record per identifier, unmatched ones left pending.
    pub fn classify_all(&self, identifiers: &[String]) -> Vec<IconRecord> {
        identifiers
            .iter()
            .map(|id| {
                let rule = self.rules.classify(id);
                if rule.is_none() {
                    debug!(icon = %id, "no rule matched");
                }
                IconRecord::classified(id, rule, self.sources.source_of(id))
            })
            .collect()
    }

    /// Identifiers still waiting on a category, in record order.
    pub fn residual_set<'r>(&self, records: &'r [IconRecord]) -> Vec<&'r str> {
        records
            .iter()
            .filter(|record| record.is_pending())
            .map(|record| record.enum_name.as_str())
            .collect()
    }

    /// Merge validated suggestions into pending records. Returns how many
    /// records changed.
    ///
    /// Each suggestion's category is checked against the rule set again here,
    /// so callers cannot bypass the closed category set by handing in
    /// unvalidated suggestions.
    pub fn apply_suggestions(
        &self,
        records: &mut [IconRecord],
        suggestions: &[ExternalSuggestion],
    ) -> usize {
        let mut applied = 0;
        for suggestion in suggestions {
            let Some(rule) = self.rules.get(&suggestion.category) else {
                warn!(icon = %suggestion.enum_name, category = %suggestion.category, "ignoring suggestion with unknown category");
                continue;
            };
            let Some(record) = records
                .iter_mut()
                .find(|record| record.enum_name == suggestion.enum_name && record.is_pending())
            else {
                debug!(icon = %suggestion.enum_name, "suggestion does not match a pending icon");
                continue;
            };
            record.resolve_external(rule, &suggestion.tags);
            debug!(icon = %record.enum_name, category = rule.name, "applied external suggestion");
            applied += 1;
        }
        applied
    }

    /// Full assembly: rule pass, one external round, summary.
    pub fn run(&self, identifiers: &[String], classifier: Option<&dyn Classifier>) -> Catalog {
        let mut records = self.classify_all(identifiers);
        let residual = self.residual_set(&records);
        info!(
            icons = records.len(),
            rule_matched = records.len() - residual.len(),
            residual = residual.len(),
            "rule classification finished"
        );

        let external = ExternalClassifierAdapter::new(classifier, self.rules).resolve(&residual);
        let applied = self.apply_suggestions(&mut records, external.suggestions());
        if applied > 0 {
            info!(applied, "merged external classifications");
        }

        let summary = CatalogSummary::from_records(&records);
        for id in &summary.unresolved {
            warn!(icon = %id, "icon left uncategorized");
        }
        Catalog {
            records,
            external,
            applied,
            summary,
        }
    }
}

/// Count records by how they were resolved.
pub fn resolution_counts(records: &[IconRecord]) -> (usize, usize, usize) {
    records
        .iter()
        .fold((0, 0, 0), |(rule, external, pending), record| match record.resolution {
            Resolution::Rule => (rule + 1, external, pending),
            Resolution::External => (rule, external + 1, pending),
            Resolution::Pending => (rule, external, pending + 1),
        })
}
