//! Source enumeration scraping.
//!
//! The icon enumeration is a self-referential string enum (`NAME = 'NAME'`).
//! Lines are scanned with a small tolerant grammar instead of a full
//! TypeScript parse; anything that does not look like a self-matching pair is
//! simply skipped.

use anyhow::{Result, bail};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Identifiers read from one enumeration file, in file order.
#[derive(Debug, Clone)]
pub struct Enumeration {
    pub path: PathBuf,
    pub identifiers: Vec<String>,
    /// Identifiers that appeared more than once; only the first occurrence
    /// is kept in `identifiers`.
    pub duplicates: Vec<String>,
}

/// Read the first enumeration candidate that exists.
///
/// Candidates are tried in order; a missing file moves on to the next one and
/// running out of candidates is fatal, naming every attempted path.
pub fn load_enumeration(candidates: &[PathBuf]) -> Result<Enumeration> {
    for candidate in candidates {
        match fs::read_to_string(candidate) {
            Ok(contents) => {
                debug!(path = %candidate.display(), "reading icon enumeration");
                return Ok(enumeration_from_str(candidate, &contents));
            }
            Err(err) => {
                debug!(path = %candidate.display(), error = %err, "enumeration candidate unavailable");
            }
        }
    }

    let attempted = candidates
        .iter()
        .map(|path| format!("  - {}", path.display()))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("Could not find the icon enumeration. Tried:\n{attempted}")
}

pub(crate) fn enumeration_from_str(path: &Path, contents: &str) -> Enumeration {
    let mut seen = BTreeSet::new();
    let mut identifiers = Vec::new();
    let mut duplicates = Vec::new();
    for id in parse_enum_identifiers(contents) {
        if seen.insert(id.clone()) {
            identifiers.push(id);
        } else {
            warn!(icon = %id, "duplicate enumeration entry ignored");
            duplicates.push(id);
        }
    }
    Enumeration {
        path: path.to_path_buf(),
        identifiers,
        duplicates,
    }
}

/// Extract every `NAME = "NAME"` / `NAME = 'NAME'` pair, in order.
///
/// Duplicates are preserved here; de-duplication is the loader's job.
pub fn parse_enum_identifiers(contents: &str) -> Vec<String> {
    contents.lines().filter_map(parse_enum_line).collect()
}

fn parse_enum_line(line: &str) -> Option<String> {
    let rest = line.trim_start();
    let name_len = rest
        .find(|c: char| !is_word_char(c))
        .unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    let (name, rest) = rest.split_at(name_len);

    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let mut chars = rest.chars();
    let open = chars.next()?;
    if !is_quote(open) {
        return None;
    }
    let value = chars.as_str().strip_prefix(name)?;
    let close = value.chars().next()?;
    if !is_quote(close) {
        return None;
    }
    Some(name.to_string())
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_self_matching_pairs_in_file_order() {
        let contents = r#"
export enum IconEnum {
  WALLET_03 = 'WALLET_03',
  ARROW_LEFT = "ARROW_LEFT",
    SEARCH_FILE='SEARCH_FILE',
}
"#;
        assert_eq!(
            parse_enum_identifiers(contents),
            vec!["WALLET_03", "ARROW_LEFT", "SEARCH_FILE"]
        );
    }

    #[test]
    fn non_conforming_lines_are_skipped() {
        let contents = r#"
  MISMATCH = 'OTHER',
  PREFIX_ONLY = 'PREFIX',
  LONGER = 'LONGER_STILL',
  NUMBER = 3,
  // COMMENTED = 'COMMENTED'
  = 'EMPTY',
  OK = 'OK'
"#;
        assert_eq!(parse_enum_identifiers(contents), vec!["OK"]);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let contents = "A_ONE = 'A_ONE'\nB_TWO = 'B_TWO'\nA_ONE = \"A_ONE\"\n";
        let parsed = enumeration_from_str(Path::new("icon.ts"), contents);
        assert_eq!(parsed.identifiers, vec!["A_ONE", "B_TWO"]);
        assert_eq!(parsed.duplicates, vec!["A_ONE"]);
    }

    #[test]
    fn loader_falls_back_and_reports_attempted_paths() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("src/types/icon.ts");
        let fallback = temp.path().join("icon.d.ts");
        std::fs::write(&fallback, "X = \"X\"\n").unwrap();

        let loaded = load_enumeration(&[missing.clone(), fallback.clone()]).expect("fallback");
        assert_eq!(loaded.path, fallback);
        assert_eq!(loaded.identifiers, vec!["X"]);

        let err = load_enumeration(&[missing.clone()]).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains(&missing.display().to_string()));
    }
}
