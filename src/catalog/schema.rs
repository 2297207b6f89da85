//! Self-check for emitted catalogs.
//!
//! The bundled JSON Schema covers record shape; the closed-category and
//! asset-path rules need the rule table, so they are checked here by hand.
//! Problems are collected rather than short-circuited so one run reports all
//! of them.

use super::model::{UNCATEGORIZED, asset_path};
use crate::rules::RuleSet;
use anyhow::{Result, anyhow};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::LazyLock;

/// Bundled copy of `schema/icon_catalog.schema.json`.
pub const CATALOG_SCHEMA_TEXT: &str = include_str!("../../schema/icon_catalog.schema.json");

static CATALOG_SCHEMA: LazyLock<serde_json::Result<Value>> =
    LazyLock::new(|| serde_json::from_str(CATALOG_SCHEMA_TEXT));

/// Parsed bundled schema.
pub fn catalog_schema() -> Result<&'static Value> {
    CATALOG_SCHEMA
        .as_ref()
        .map_err(|err| anyhow!("bundled catalog schema is not valid JSON: {err}"))
}

/// Validate a catalog document, returning every problem found.
///
/// An `Err` means the schema itself could not be compiled; an empty vector
/// means the catalog is valid.
pub fn validate_catalog(catalog: &Value, rules: &RuleSet) -> Result<Vec<String>> {
    let schema = catalog_schema()?;
    let compiled =
        JSONSchema::compile(schema).map_err(|err| anyhow!("compiling catalog schema: {err}"))?;

    let mut problems = Vec::new();
    if let Err(errors) = compiled.validate(catalog) {
        for err in errors {
            problems.push(format!("{}: {err}", err.instance_path));
        }
    }

    let Some(records) = catalog.as_array() else {
        return Ok(problems);
    };
    for (index, record) in records.iter().enumerate() {
        let enum_name = record.get("enumName").and_then(Value::as_str);
        let category = record.get("category").and_then(Value::as_str);
        let (Some(enum_name), Some(category)) = (enum_name, category) else {
            continue;
        };
        if category != UNCATEGORIZED && !rules.is_valid_category(category) {
            problems.push(format!(
                "/{index}: {enum_name} has category '{category}' outside the rule set"
            ));
        }
        let expected = asset_path(category, enum_name);
        match record.get("assetPath").and_then(Value::as_str) {
            Some(actual) if actual == expected => {}
            Some(actual) => problems.push(format!(
                "/{index}: {enum_name} has assetPath '{actual}', expected '{expected}'"
            )),
            None => {}
        }
    }
    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_catalog_has_no_problems() {
        let catalog = json!([
            {
                "enumName": "WALLET_03",
                "displayName": "Wallet 3",
                "category": "Finance",
                "tags": ["payment", "wallet", "finance"],
                "source": "library",
                "assetPath": "finance/wallet-03"
            },
            {
                "enumName": "UNKNOWN_WIDGET_99",
                "displayName": "Unknown Widget 99",
                "category": "Uncategorized",
                "tags": ["unknown", "widget", "uncategorized"],
                "source": "unknown",
                "assetPath": "uncategorized/unknown-widget-99"
            }
        ]);
        let problems = validate_catalog(&catalog, &RuleSet::builtin()).unwrap();
        assert!(problems.is_empty(), "{problems:?}");
    }

    #[test]
    fn reports_shape_category_and_path_problems() {
        let catalog = json!([
            {
                "enumName": "WALLET_03",
                "displayName": "Wallet 3",
                "category": "NotARealCategory",
                "tags": ["wallet"],
                "source": "somewhere",
                "assetPath": "finance/wallet-03"
            },
            {
                "enumName": "ODD",
                "displayName": "Odd",
                "category": "Interface",
                "source": "custom",
                "assetPath": "interface/odd"
            }
        ]);
        let problems = validate_catalog(&catalog, &RuleSet::builtin()).unwrap();
        let joined = problems.join("\n");
        assert!(joined.contains("outside the rule set"), "{joined}");
        assert!(joined.contains("expected 'notarealcategory/wallet-03'"), "{joined}");
        assert!(joined.contains("/0/source"), "{joined}");
        assert!(joined.contains("tags"), "{joined}");
    }
}
