//! Rebuild detection: compare the collaborator package version with the
//! version recorded after the last successful catalog build.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Marker value when no build has been recorded.
pub const NO_LAST_VERSION: &str = "none";

#[derive(Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionCheck {
    pub current: String,
    pub last_built: String,
}

impl VersionCheck {
    /// Read both versions. Fails only when the collaborator version is
    /// unreadable; a missing marker reads as `none`.
    pub fn load(manifest: &Path, marker: &Path) -> Result<Self> {
        Ok(Self {
            current: read_package_version(manifest)?,
            last_built: read_last_built(marker),
        })
    }

    pub fn rebuild_needed(&self) -> bool {
        self.current != self.last_built
    }
}

/// `version` field of a `package.json`.
pub fn read_package_version(manifest: &Path) -> Result<String> {
    let text = fs::read_to_string(manifest)
        .with_context(|| format!("reading {}", manifest.display()))?;
    let parsed: PackageManifest = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", manifest.display()))?;
    parsed
        .version
        .map(|version| version.trim().to_string())
        .filter(|version| !version.is_empty())
        .ok_or_else(|| anyhow!("{} has no version field", manifest.display()))
}

/// Trimmed marker contents, or `none` when the marker is absent or empty.
pub fn read_last_built(marker: &Path) -> String {
    fs::read_to_string(marker)
        .ok()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_LAST_VERSION.to_string())
}

pub fn record_built_version(marker: &Path, version: &str) -> Result<()> {
    let dir = marker
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    writeln!(file, "{version}").context("writing version marker")?;
    file.persist(marker)
        .with_context(|| format!("replacing {}", marker.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_marker_means_rebuild() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("package.json");
        fs::write(&manifest, r#"{"name":"@zydon/common","version":"2.4.1"}"#).unwrap();
        let marker = temp.path().join(".last-version");

        let check = VersionCheck::load(&manifest, &marker).unwrap();
        assert_eq!(check.last_built, NO_LAST_VERSION);
        assert!(check.rebuild_needed());

        record_built_version(&marker, "2.4.1").unwrap();
        assert_eq!(fs::read_to_string(&marker).unwrap(), "2.4.1\n");
        let check = VersionCheck::load(&manifest, &marker).unwrap();
        assert!(!check.rebuild_needed());
    }

    #[test]
    fn unreadable_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join(".last-version");
        assert!(VersionCheck::load(&temp.path().join("package.json"), &marker).is_err());

        let manifest = temp.path().join("package.json");
        fs::write(&manifest, r#"{"name":"no-version"}"#).unwrap();
        let err = read_package_version(&manifest).unwrap_err();
        assert!(err.to_string().contains("no version field"));
    }
}
