//! One generator run, end to end.
//!
//! Only a missing enumeration stops the run. Every later stage degrades:
//! a missing component source, a failed classifier round, a schema warning
//! or an unwritable version marker are logged and the catalog is still
//! written.

use crate::catalog::{Catalog, CatalogAssembler, validate_catalog, write_catalog};
use crate::classifier::Classifier;
use crate::config::CatalogConfig;
use crate::rules::RuleSet;
use crate::sources::{IconSourceMap, load_enumeration};
use crate::version_check::{read_package_version, record_built_version};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// What a run produced.
#[derive(Debug)]
pub struct PipelineReport {
    pub enumeration_path: PathBuf,
    pub output_path: PathBuf,
    pub catalog: Catalog,
    /// Enumeration identifiers dropped as repeats.
    pub duplicates: Vec<String>,
    /// Icons mapped to the library or a local asset.
    pub mapped_sources: usize,
    /// Custom icons whose asset component file is missing.
    pub missing_assets: Vec<String>,
    /// Problems reported by the post-write self-check.
    pub schema_problems: Vec<String>,
    /// Collaborator version stamped into the marker, if any.
    pub recorded_version: Option<String>,
}

pub fn run_pipeline(
    config: &CatalogConfig,
    rules: RuleSet,
    classifier: Option<&dyn Classifier>,
) -> Result<PipelineReport> {
    let enumeration = load_enumeration(&config.enumeration_candidates())?;
    info!(
        path = %enumeration.path.display(),
        icons = enumeration.identifiers.len(),
        "read icon enumeration"
    );

    let sources = IconSourceMap::load(&config.component_source_path(), &config.components);
    info!(mapped = sources.len(), "mapped icons to sources");

    let catalog = CatalogAssembler::new(rules, &sources).run(&enumeration.identifiers, classifier);

    let missing_assets = missing_custom_assets(config, &sources, &catalog);
    for id in &missing_assets {
        warn!(icon = %id, "custom icon asset file not found");
    }

    let output_path = config.output_path();
    write_catalog(&output_path, &catalog.records)
        .with_context(|| format!("writing catalog to {}", output_path.display()))?;
    info!(path = %output_path.display(), icons = catalog.records.len(), "wrote icon catalog");

    let schema_problems = self_check(&catalog, rules);
    let recorded_version = refresh_version_marker(config);

    Ok(PipelineReport {
        enumeration_path: enumeration.path,
        output_path,
        catalog,
        duplicates: enumeration.duplicates,
        mapped_sources: sources.len(),
        missing_assets,
        schema_problems,
        recorded_version,
    })
}

fn missing_custom_assets(
    config: &CatalogConfig,
    sources: &IconSourceMap,
    catalog: &Catalog,
) -> Vec<String> {
    let assets_root = config.assets_root();
    catalog
        .records
        .iter()
        .filter_map(|record| {
            let file = sources.custom_asset_file(&assets_root, &record.enum_name)?;
            (!file.is_file()).then(|| record.enum_name.clone())
        })
        .collect()
}

fn self_check(catalog: &Catalog, rules: RuleSet) -> Vec<String> {
    let problems = serde_json::to_value(&catalog.records)
        .context("serializing catalog for validation")
        .and_then(|value| validate_catalog(&value, &rules));
    match problems {
        Ok(problems) => {
            for problem in &problems {
                warn!(%problem, "catalog failed self-check");
            }
            problems
        }
        Err(err) => {
            warn!("catalog self-check could not run: {err:#}");
            vec![format!("{err:#}")]
        }
    }
}

fn refresh_version_marker(config: &CatalogConfig) -> Option<String> {
    let version = match read_package_version(&config.package_manifest_path()) {
        Ok(version) => version,
        Err(err) => {
            debug!("collaborator version unavailable: {err:#}");
            return None;
        }
    };
    match record_built_version(&config.last_version_path(), &version) {
        Ok(()) => Some(version),
        Err(err) => {
            warn!("could not record built version: {err:#}");
            None
        }
    }
}
