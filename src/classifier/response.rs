//! Parse-then-validate boundary for classifier responses.
//!
//! Responses are free-form text that should contain a JSON array. Nothing in
//! them is trusted: the array is located by a string-aware bracket scan, each
//! element is deserialized on its own, and every surviving suggestion is
//! checked against the pending icons and the closed category set. Bad entries
//! are dropped one by one; a bad entry never sinks the batch.

use crate::rules::RuleSet;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// One classification proposed by the external service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSuggestion {
    pub enum_name: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Why a suggestion was discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The element did not have the `{enumName, category, tags[]}` shape.
    Malformed { index: usize, detail: String },
    /// The icon is not waiting on external classification.
    NotPending { icon: String },
    /// The category is outside the closed set.
    UnknownCategory { icon: String, category: String },
    /// An earlier suggestion already claimed this icon.
    Duplicate { icon: String },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Malformed { index, detail } => {
                write!(f, "entry {index} is malformed: {detail}")
            }
            Rejection::NotPending { icon } => write!(f, "{icon} is not awaiting classification"),
            Rejection::UnknownCategory { icon, category } => {
                write!(f, "{icon} suggested unknown category '{category}'")
            }
            Rejection::Duplicate { icon } => write!(f, "{icon} was suggested more than once"),
        }
    }
}

/// Outcome of validating one response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedResponse {
    /// `false` when no JSON array could be located at all.
    pub found_array: bool,
    pub accepted: Vec<ExternalSuggestion>,
    pub rejected: Vec<Rejection>,
}

/// Locate, parse and validate suggestions in a raw response.
pub fn parse_suggestions(raw: &str, pending: &BTreeSet<&str>, rules: &RuleSet) -> ParsedResponse {
    let Some(items) = extract_json_array(raw) else {
        return ParsedResponse::default();
    };

    let mut parsed = ParsedResponse {
        found_array: true,
        ..ParsedResponse::default()
    };
    let mut claimed = BTreeSet::new();
    for (index, item) in items.into_iter().enumerate() {
        let suggestion = match serde_json::from_value::<ExternalSuggestion>(item) {
            Ok(suggestion) => suggestion,
            Err(err) => {
                parsed.rejected.push(Rejection::Malformed {
                    index,
                    detail: err.to_string(),
                });
                continue;
            }
        };
        if !pending.contains(suggestion.enum_name.as_str()) {
            parsed.rejected.push(Rejection::NotPending {
                icon: suggestion.enum_name,
            });
            continue;
        }
        if !rules.is_valid_category(&suggestion.category) {
            parsed.rejected.push(Rejection::UnknownCategory {
                icon: suggestion.enum_name,
                category: suggestion.category,
            });
            continue;
        }
        if !claimed.insert(suggestion.enum_name.clone()) {
            parsed.rejected.push(Rejection::Duplicate {
                icon: suggestion.enum_name,
            });
            continue;
        }
        parsed.accepted.push(suggestion);
    }
    parsed
}

/// Find the first bracketed span in `raw` that parses as a JSON array.
///
/// Code fences and surrounding prose are skipped. The first array holding at
/// least one object wins; when none does, the first array of any kind is
/// returned (which then yields no valid suggestions). Spans that do not parse
/// are passed over.
pub fn extract_json_array(raw: &str) -> Option<Vec<Value>> {
    let mut fallback = None;
    for (start, end) in bracket_spans(raw) {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&raw[start..end]) {
            if items.iter().any(Value::is_object) {
                return Some(items);
            }
            if fallback.is_none() {
                fallback = Some(items);
            }
        }
    }
    fallback
}

/// Balanced `[...]` byte ranges in `raw`, ordered by opening position.
///
/// One pass over the text with a stack of open brackets. Brackets inside JSON
/// strings are ignored, but quotes only count once a bracket is open, so a
/// stray `"` in leading prose cannot swallow the reply. Brackets that never
/// close yield no span.
fn bracket_spans(raw: &str) -> Vec<(usize, usize)> {
    let mut open = Vec::new();
    let mut spans = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    for (idx, ch) in raw.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' if !open.is_empty() => in_string = true,
            '[' => open.push(idx),
            ']' => {
                if let Some(start) = open.pop() {
                    spans.push((start, idx + 1));
                }
            }
            _ => {}
        }
    }
    spans.sort_unstable_by_key(|&(start, _)| start);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending<'a>(ids: &[&'a str]) -> BTreeSet<&'a str> {
        ids.iter().copied().collect()
    }

    #[test]
    fn extracts_array_from_fenced_prose() {
        let raw = "Sure! Here you go:\n```json\n[{\"enumName\":\"A\",\"category\":\"AI\",\"tags\":[\"x\"]}]\n```\nLet me know.";
        let items = extract_json_array(raw).expect("array");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn brackets_inside_strings_do_not_confuse_the_scan() {
        let raw = r#"[{"enumName":"A","category":"AI","tags":["[odd]","x]"]}] trailing ]"#;
        let items = extract_json_array(raw).expect("array");
        assert_eq!(items[0]["tags"][0], "[odd]");
    }

    #[test]
    fn footnotes_and_broken_spans_are_skipped() {
        let raw = "See note [1] and [broken. Result: [{\"enumName\":\"A\",\"category\":\"AI\",\"tags\":[]}]";
        let items = extract_json_array(raw).expect("array");
        assert_eq!(items[0]["enumName"], "A");
    }

    #[test]
    fn unclosed_brackets_are_scanned_once() {
        let raw = format!(
            "{}\n[{{\"enumName\":\"A\",\"category\":\"AI\",\"tags\":[]}}]",
            "[".repeat(200_000)
        );
        let started = std::time::Instant::now();
        let items = extract_json_array(&raw).expect("array");
        assert_eq!(items[0]["enumName"], "A");
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn stray_quote_in_prose_is_ignored() {
        let raw = "Icons under 2\" get a UI tag:\n[{\"enumName\":\"A\",\"category\":\"AI\",\"tags\":[\"ui\"]}]";
        let items = extract_json_array(raw).expect("array");
        assert_eq!(items[0]["tags"][0], "ui");
    }

    #[test]
    fn no_array_means_no_suggestions() {
        let rules = RuleSet::builtin();
        let parsed = parse_suggestions("I cannot help with that.", &pending(&["A"]), &rules);
        assert!(!parsed.found_array);
        assert!(parsed.accepted.is_empty());
        assert!(parsed.rejected.is_empty());

        let parsed = parse_suggestions("[{\"enumName\": ", &pending(&["A"]), &rules);
        assert!(!parsed.found_array);
    }

    #[test]
    fn validation_keeps_only_pending_icons_with_known_categories() {
        let rules = RuleSet::builtin();
        let raw = r#"[
            {"enumName":"UNKNOWN_WIDGET_99","category":"Interface","tags":["widget","unknown"]},
            {"enumName":"MYSTERY_ICON","category":"NotARealCategory","tags":["x"]},
            {"enumName":"WALLET_03","category":"Finance","tags":["wallet"]},
            {"enumName":"ODD_ONE","category":"Interface"},
            {"enumName":"ODD_TWO","category":"interface","tags":["lowercase"]},
            {"enumName":"ODD_THREE","category":"Interface","tags":[1, "two"]},
            {"enumName":"UNKNOWN_WIDGET_99","category":"Media","tags":[]},
            "just a string"
        ]"#;
        let parsed = parse_suggestions(
            raw,
            &pending(&["UNKNOWN_WIDGET_99", "MYSTERY_ICON", "ODD_ONE", "ODD_TWO", "ODD_THREE"]),
            &rules,
        );
        assert!(parsed.found_array);
        assert_eq!(
            parsed.accepted,
            vec![ExternalSuggestion {
                enum_name: "UNKNOWN_WIDGET_99".into(),
                category: "Interface".into(),
                tags: vec!["widget".into(), "unknown".into()],
            }]
        );
        assert!(parsed.rejected.contains(&Rejection::UnknownCategory {
            icon: "MYSTERY_ICON".into(),
            category: "NotARealCategory".into(),
        }));
        assert!(parsed.rejected.contains(&Rejection::NotPending {
            icon: "WALLET_03".into()
        }));
        assert!(parsed.rejected.contains(&Rejection::UnknownCategory {
            icon: "ODD_TWO".into(),
            category: "interface".into(),
        }));
        assert!(parsed.rejected.contains(&Rejection::Duplicate {
            icon: "UNKNOWN_WIDGET_99".into()
        }));
        let malformed = parsed
            .rejected
            .iter()
            .filter(|r| matches!(r, Rejection::Malformed { .. }))
            .count();
        // missing tags, non-string tag, bare string
        assert_eq!(malformed, 3);
    }
}
