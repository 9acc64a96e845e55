use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Case-insensitive, whole-word matcher over a fixed set of terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    terms: Vec<String>,
}

impl Lexicon {
    /// Lowercases and deduplicates `terms`, keeping first-seen order.
    ///
    /// Callers validate emptiness; an empty lexicon simply never matches.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !normalized.contains(&term) {
                normalized.push(term);
            }
        }
        Self { terms: normalized }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        self.terms.iter().any(|candidate| *candidate == term)
    }

    /// Counts every term in `lowered`, which must already be lowercase.
    pub fn scan(&self, lowered: &str) -> LexiconHits {
        let mut per_term = BTreeMap::new();
        for term in &self.terms {
            let count = count_whole_word(lowered, term);
            if count > 0 {
                per_term.insert(term.clone(), count);
            }
        }
        LexiconHits { per_term }
    }

    /// True when any term appears in `lowered`.
    pub fn matches_any(&self, lowered: &str) -> bool {
        self.terms
            .iter()
            .any(|term| count_whole_word(lowered, term) > 0)
    }

    /// Byte ranges of every term occurrence in `lowered`.
    pub(crate) fn spans(&self, lowered: &str) -> Vec<(usize, usize)> {
        let mut spans: Vec<(usize, usize)> = self
            .terms
            .iter()
            .flat_map(|term| {
                whole_word_matches(lowered, term).map(move |start| (start, start + term.len()))
            })
            .collect();
        spans.sort_unstable();
        spans
    }
}

/// Term occurrence counts produced by [`Lexicon::scan`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconHits {
    pub per_term: BTreeMap<String, usize>,
}

impl LexiconHits {
    /// Number of different terms that matched at least once.
    pub fn distinct(&self) -> usize {
        self.per_term.len()
    }

    /// Total occurrences across all terms.
    pub fn total(&self) -> usize {
        self.per_term.values().sum()
    }

    pub fn count(&self, term: &str) -> usize {
        self.per_term.get(term).copied().unwrap_or(0)
    }
}

/// Letters, digits, and the joiners that keep compounds like `real-time` whole.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '\''
}

pub(crate) fn count_whole_word(haystack: &str, needle: &str) -> usize {
    whole_word_matches(haystack, needle).count()
}

/// Start offsets of `needle` bounded by non-word characters.
///
/// Not a `\b` regex: terms such as `etc.` or `next.js` end in punctuation, and
/// `-`, `'` and `_` count as word characters here but not for `\b`.
fn whole_word_matches<'a>(
    haystack: &'a str,
    needle: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    let guard_leading = needle.chars().next().is_some_and(char::is_alphanumeric);
    let guard_trailing = needle.chars().next_back().is_some_and(char::is_alphanumeric);

    haystack
        .match_indices(needle)
        .map(|(start, _)| start)
        .filter(move |start| {
            let end = start + needle.len();
            let leading_ok = !guard_leading
                || haystack[..*start]
                    .chars()
                    .next_back()
                    .map_or(true, |c| !is_word_char(c));
            let trailing_ok = !guard_trailing
                || haystack[end..]
                    .chars()
                    .next()
                    .map_or(true, |c| !is_word_char(c));
            leading_ok && trailing_ok
        })
}
