//! Icon-component source scraping.
//!
//! The icon component imports library glyphs (`import { A, B } from
//! 'hugeicons-react'`), imports local asset components (`import Foo from
//! 'assets/icons/Foo'`) and maps each enum member to one imported symbol
//! (`[IconEnum.FOO]: Foo`). Cross-referencing the three yields each
//! identifier's rendering source and, for custom icons, its asset path.

use crate::catalog::IconSource;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Names that drive the component scrape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentSourceSpec {
    /// Package whose named imports count as library icons.
    pub library_package: String,
    /// Enum type referenced in the mapping table.
    pub enum_type: String,
}

impl Default for ComponentSourceSpec {
    fn default() -> Self {
        Self {
            library_package: "hugeicons-react".to_string(),
            enum_type: "IconEnum".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SourceEntry {
    source: IconSource,
    asset: Option<String>,
}

/// Identifier → rendering source lookup. Absent identifiers are `unknown`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconSourceMap {
    entries: BTreeMap<String, SourceEntry>,
}

impl IconSourceMap {
    /// Read and parse the component source.
    ///
    /// A missing or unreadable file is a degraded mode, not an error: the map
    /// comes back empty and every icon falls back to `unknown`.
    pub fn load(path: &Path, spec: &ComponentSourceSpec) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, spec),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "icon component source unavailable; sources default to unknown");
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str, spec: &ComponentSourceSpec) -> Self {
        let library = library_imports(contents, &spec.library_package);
        let custom = custom_imports(contents);

        let mut entries = BTreeMap::new();
        for (enum_name, symbol) in enum_mappings(contents, &spec.enum_type) {
            let entry = if library.contains(&symbol) {
                SourceEntry {
                    source: IconSource::Library,
                    asset: None,
                }
            } else if let Some(asset) = custom.get(&symbol) {
                SourceEntry {
                    source: IconSource::Custom,
                    asset: Some(asset.clone()),
                }
            } else {
                debug!(icon = %enum_name, symbol = %symbol, "mapped symbol has no recognised import");
                continue;
            };
            entries.insert(enum_name, entry);
        }
        Self { entries }
    }

    pub fn source_of(&self, id: &str) -> IconSource {
        self.entries
            .get(id)
            .map(|entry| entry.source)
            .unwrap_or(IconSource::Unknown)
    }

    /// Relative asset path (`icons/Foo`) for custom icons.
    pub fn custom_asset(&self, id: &str) -> Option<&str> {
        self.entries.get(id)?.asset.as_deref()
    }

    /// The asset component file for a custom icon under `assets_root`.
    pub fn custom_asset_file(&self, assets_root: &Path, id: &str) -> Option<PathBuf> {
        self.custom_asset(id)
            .map(|rel| assets_root.join(format!("{rel}.tsx")))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn library_imports(contents: &str, package: &str) -> BTreeSet<String> {
    let pattern = format!(
        r#"import\s*\{{([^}}]+)\}}\s*from\s*['"]{}['"]"#,
        regex::escape(package)
    );
    let Ok(re) = Regex::new(&pattern) else {
        return BTreeSet::new();
    };
    let mut names = BTreeSet::new();
    for caps in re.captures_iter(contents) {
        for item in caps[1].split(',') {
            // `Foo as Bar` binds the local name `Bar`.
            let local = item.split(" as ").last().unwrap_or("").trim();
            if !local.is_empty() {
                names.insert(local.to_string());
            }
        }
    }
    names
}

static CUSTOM_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(\w+)\s+from\s+['"]assets/([^'"]+)['"]"#)
        .expect("custom import pattern compiles")
});

fn custom_imports(contents: &str) -> BTreeMap<String, String> {
    CUSTOM_IMPORT
        .captures_iter(contents)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

fn enum_mappings(contents: &str, enum_type: &str) -> Vec<(String, String)> {
    let pattern = format!(r"\[{}\.(\w+)\]\s*:\s*(\w+)", regex::escape(enum_type));
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };
    re.captures_iter(contents)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}
