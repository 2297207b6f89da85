//! Identifier normalization.
//!
//! Enumeration identifiers are SCREAMING_SNAKE_CASE tokens (`WALLET_03`). The
//! helpers here derive the three name-based fields of a catalog record: the
//! human display name, the path-safe slug, and the name-derived search tags.
//! All of them are pure and total.

/// Title-case each `_`-separated word and join with spaces.
///
/// A standalone zero-padded single digit (`03`) collapses to `3`; longer
/// numbers and digits embedded in words are left alone.
pub fn display_name(id: &str) -> String {
    id.split('_')
        .map(|word| collapse_padded_digit(&title_case(word)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase slug used for directory and file naming.
///
/// `_` and whitespace become `-`, anything outside `[a-z0-9-]` is dropped and
/// repeated separators collapse. Enumeration identifiers map 1:1 onto
/// `lowercase + '_' -> '-'`; category names such as `Files & Documents`
/// become `files-documents`.
pub fn slug(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        let mapped = match ch {
            '_' | '-' => Some('-'),
            c if c.is_whitespace() => Some('-'),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        };
        match mapped {
            Some('-') if out.ends_with('-') => {}
            Some(c) => out.push(c),
            None => {}
        }
    }
    out
}

/// Search tokens contributed by the identifier itself.
///
/// Words of one character and purely numeric words carry no search value and
/// are dropped (`WALLET_03` yields `["wallet"]`).
pub fn tag_tokens(id: &str) -> Vec<String> {
    id.to_lowercase()
        .split('_')
        .filter(|word| word.chars().count() > 1)
        .filter(|word| !word.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn collapse_padded_digit(word: &str) -> String {
    let bytes = word.as_bytes();
    if bytes.len() == 2 && bytes[0] == b'0' && bytes[1].is_ascii_digit() {
        return word[1..].to_string();
    }
    word.to_string()
}
