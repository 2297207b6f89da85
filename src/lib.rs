//! Icon metadata catalog generator.
//!
//! Reads the design-system icon enumeration and icon component, classifies
//! every icon into a closed category set (ordered rule table first, one
//! batched external classifier round for the rest), and writes the catalog
//! consumed by the icon browser and the SVG export step. The binaries under
//! `src/bin` are thin wrappers over `pipeline::run_pipeline` and
//! `version_check`.

use anyhow::Result;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod naming;
pub mod pipeline;
pub mod rules;
pub mod runtime;
pub mod sources;
pub mod tags;
pub mod version_check;

pub use catalog::{
    Catalog, CatalogAssembler, CatalogSummary, IconRecord, IconSource, UNCATEGORIZED,
    validate_catalog, write_catalog,
};
pub use classifier::{
    Classifier, CommandClassifier, ExternalClassifierAdapter, ExternalRound, ExternalSuggestion,
};
pub use config::{CatalogConfig, ClassifierConfig};
pub use pipeline::{PipelineReport, run_pipeline};
pub use rules::{CategoryRule, Pattern, RuleSet};
pub use version_check::VersionCheck;

/// Environment variable naming the project root explicitly.
pub const ENV_ROOT: &str = "ICON_CATALOG_ROOT";

const ROOT_MANIFEST: &str = "Cargo.toml";
const ROOT_SCHEMA: &str = "schema/icon_catalog.schema.json";

/// Returns true when `candidate` looks like the project root.
fn is_project_root(candidate: &Path) -> bool {
    candidate.join(ROOT_MANIFEST).is_file() && candidate.join(ROOT_SCHEMA).is_file()
}

fn project_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_project_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_project_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the project root that owns `public/` and `.last-version`.
///
/// Honors `ICON_CATALOG_ROOT` when it points at a real project, then climbs
/// up from the current executable, then tries the build-time hint, and
/// finally settles for the current directory.
pub fn find_project_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ENV_ROOT) {
        if let Some(root) = project_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("ICON_CATALOG_ROOT_HINT") {
        if let Some(root) = project_root_from_hint(hint) {
            return Ok(root);
        }
    }

    Ok(env::current_dir()?)
}

/// Install the stderr log subscriber used by the binaries.
///
/// `RUST_LOG` overrides the default `info` filter. Repeated calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
