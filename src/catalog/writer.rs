use super::model::IconRecord;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Pretty-printed JSON array with a trailing newline.
///
/// Records are emitted in the order given and tag lists are already ordered,
/// so the same input always renders to the same bytes.
pub fn render_catalog(records: &[IconRecord]) -> Result<String> {
    let mut text = serde_json::to_string_pretty(records).context("serializing icon catalog")?;
    text.push('\n');
    Ok(text)
}

/// Write the catalog to `path`, replacing any previous file in one step.
///
/// The parent directory is created when missing. Content goes to a temp file
/// beside the target which is then renamed over it, so readers never observe
/// a half-written catalog.
pub fn write_catalog(path: &Path, records: &[IconRecord]) -> Result<()> {
    let text = render_catalog(records)?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("creating output directory {}", parent.display()))?;

    let mut file = NamedTempFile::new_in(parent)
        .with_context(|| format!("creating temp file in {}", parent.display()))?;
    file.write_all(text.as_bytes())
        .context("writing icon catalog")?;
    file.flush().context("flushing icon catalog")?;
    file.persist(path)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}
