use super::model::{IconRecord, UNCATEGORIZED};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Per-category counts plus the icons nothing could place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    /// Sorted by count descending, then category name ascending.
    pub counts: Vec<(String, usize)>,
    /// Identifiers still `Uncategorized`, in enumeration order.
    pub unresolved: Vec<String>,
}

impl CatalogSummary {
    pub fn from_records(records: &[IconRecord]) -> Self {
        let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
        let mut unresolved = Vec::new();
        for record in records {
            *by_category.entry(record.category.as_str()).or_default() += 1;
            if record.category == UNCATEGORIZED {
                unresolved.push(record.enum_name.clone());
            }
        }
        let mut counts: Vec<(String, usize)> = by_category
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self {
            total: records.len(),
            counts,
            unresolved,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn count_for(&self, category: &str) -> usize {
        self.counts
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Operator-facing report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} in {}",
            counted(self.total, "icon", "icons"),
            counted(self.counts.len(), "category", "categories")
        );
        let width = self
            .counts
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, count) in &self.counts {
            let _ = writeln!(out, "  {name:<width$}  {count}");
        }
        if !self.unresolved.is_empty() {
            let _ = writeln!(out, "\n{UNCATEGORIZED} icons ({}):", self.unresolved.len());
            for id in &self.unresolved {
                let _ = writeln!(out, "  - {id}");
            }
        }
        out
    }
}

fn counted(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}
