/// Anchored, case-sensitive predicate over a raw identifier.
///
/// Patterns operate on the unmodified SCREAMING_SNAKE_CASE form. They cover
/// the shapes the category table needs (whole-name, prefix, suffix and prefix
/// with excluded continuations) without a regex engine in the hot path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// The identifier equals the text exactly.
    Exact(&'static str),
    /// The identifier starts with the text.
    Prefix(&'static str),
    /// The identifier ends with the text.
    Suffix(&'static str),
    /// The identifier starts with the text and the remainder does not start
    /// with any of the listed continuations.
    PrefixExcept(&'static str, &'static [&'static str]),
}

impl Pattern {
    pub fn matches(&self, id: &str) -> bool {
        match self {
            Pattern::Exact(text) => id == *text,
            Pattern::Prefix(text) => id.starts_with(*text),
            Pattern::Suffix(text) => id.ends_with(*text),
            Pattern::PrefixExcept(text, excluded) => match id.strip_prefix(*text) {
                Some(rest) => !excluded.iter().any(|ex| rest.starts_with(*ex)),
                None => false,
            },
        }
    }

    /// Human-readable form used in diagnostics (`^SEARCH_(?!FILE)`).
    pub fn describe(&self) -> String {
        match self {
            Pattern::Exact(text) => format!("^{text}$"),
            Pattern::Prefix(text) => format!("^{text}"),
            Pattern::Suffix(text) => format!("{text}$"),
            Pattern::PrefixExcept(text, excluded) => {
                format!("^{text}(?!{})", excluded.join("|"))
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Pattern::Exact(text) | Pattern::Prefix(text) | Pattern::Suffix(text) => text.is_empty(),
            Pattern::PrefixExcept(text, _) => text.is_empty(),
        }
    }
}
