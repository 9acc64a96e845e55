use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::config::JudgingProfile;
use super::domain::{LexiconKind, LinkStatus, Submission, TextField};
use super::lexicon::{is_word_char, LexiconHits};

const STOP_WORDS: &[&str] = &[
    "about", "after", "all", "also", "and", "any", "are", "because", "been", "before", "being",
    "but", "can", "could", "did", "does", "each", "for", "from", "had", "has", "have", "her",
    "his", "how", "into", "its", "just", "more", "most", "not", "now", "only", "other", "our",
    "out", "over", "she", "should", "some", "such", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "those", "through", "too", "under", "very", "was",
    "were", "what", "when", "where", "which", "while", "who", "why", "will", "with", "would",
    "you", "your",
];

/// Named numeric features exposed by a [`SignalVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    WordCount,
    ContentWordCount,
    UniqueWordRatio,
    SentenceCount,
    AverageSentenceLength,
    QuantifiedClaims,
    QuantifiedImpacts,
    LexiconDistinct(LexiconKind),
    LexiconTotal(LexiconKind),
}

/// Which lexicons and structural metrics apply to a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalSet {
    pub lexicons: Vec<LexiconKind>,
    pub quantities: bool,
}

impl SignalSet {
    pub fn full() -> Self {
        Self {
            lexicons: LexiconKind::ALL.to_vec(),
            quantities: true,
        }
    }

    pub fn for_field(field: TextField) -> Self {
        match field {
            TextField::Title => Self {
                lexicons: LexiconKind::ALL
                    .into_iter()
                    .filter(|kind| kind.is_marker())
                    .collect(),
                quantities: false,
            },
            TextField::TechStack => Self {
                lexicons: vec![
                    LexiconKind::Buzzword,
                    LexiconKind::Vagueness,
                    LexiconKind::Overclaim,
                    LexiconKind::Formulaic,
                    LexiconKind::TechnicalDepth,
                    LexiconKind::Scalability,
                    LexiconKind::Extensibility,
                ],
                quantities: false,
            },
            _ => Self::full(),
        }
    }
}

/// Features extracted from one piece of text.
///
/// The default value is the zero vector produced for blank input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalVector {
    pub word_count: usize,
    pub content_word_count: usize,
    /// Distinct content words over all content words.
    pub unique_word_ratio: f64,
    pub sentence_count: usize,
    pub average_sentence_length: f64,
    pub quantified_claims: usize,
    pub quantified_impacts: usize,
    pub lexicon_hits: BTreeMap<LexiconKind, LexiconHits>,
}

impl SignalVector {
    pub fn value(&self, signal: Signal) -> f64 {
        match signal {
            Signal::WordCount => self.word_count as f64,
            Signal::ContentWordCount => self.content_word_count as f64,
            Signal::UniqueWordRatio => self.unique_word_ratio,
            Signal::SentenceCount => self.sentence_count as f64,
            Signal::AverageSentenceLength => self.average_sentence_length,
            Signal::QuantifiedClaims => self.quantified_claims as f64,
            Signal::QuantifiedImpacts => self.quantified_impacts as f64,
            Signal::LexiconDistinct(kind) => self.distinct(kind) as f64,
            Signal::LexiconTotal(kind) => self.total(kind) as f64,
        }
    }

    /// Flat name to value mapping, with lexicon counts as `<lexicon>.distinct` / `<lexicon>.total`.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let mut map = BTreeMap::from([
            ("word_count".to_string(), self.word_count as f64),
            ("content_word_count".to_string(), self.content_word_count as f64),
            ("unique_word_ratio".to_string(), self.unique_word_ratio),
            ("sentence_count".to_string(), self.sentence_count as f64),
            (
                "average_sentence_length".to_string(),
                self.average_sentence_length,
            ),
            ("quantified_claims".to_string(), self.quantified_claims as f64),
            ("quantified_impacts".to_string(), self.quantified_impacts as f64),
        ]);
        for (kind, hits) in &self.lexicon_hits {
            map.insert(format!("{}.distinct", kind.label()), hits.distinct() as f64);
            map.insert(format!("{}.total", kind.label()), hits.total() as f64);
        }
        map
    }

    pub fn distinct(&self, kind: LexiconKind) -> usize {
        self.lexicon_hits.get(&kind).map_or(0, LexiconHits::distinct)
    }

    pub fn total(&self, kind: LexiconKind) -> usize {
        self.lexicon_hits.get(&kind).map_or(0, LexiconHits::total)
    }
}

/// Extracts the signals in `set` from `text`. Blank text yields the zero vector.
pub fn extract(text: &str, set: &SignalSet, profile: &JudgingProfile) -> SignalVector {
    let lowered = text.to_lowercase();
    let tokens = tokenize(&lowered);
    if tokens.is_empty() {
        return SignalVector::default();
    }

    let content: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|token| token.chars().count() > 2 && !STOP_WORDS.contains(token))
        .collect();
    let unique: BTreeSet<&str> = content.iter().copied().collect();
    let unique_word_ratio = if content.is_empty() {
        0.0
    } else {
        unique.len() as f64 / content.len() as f64
    };

    let sentence_count = sentences(&lowered)
        .into_iter()
        .filter(|sentence| !tokenize(sentence).is_empty())
        .count();
    let average_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        tokens.len() as f64 / sentence_count as f64
    };

    let (quantified_claims, quantified_impacts) = if set.quantities {
        (
            profile.quantity_pattern().find_iter(text).count(),
            profile.impact_pattern().find_iter(text).count(),
        )
    } else {
        (0, 0)
    };

    let lexicon_hits = set
        .lexicons
        .iter()
        .map(|kind| (*kind, profile.lexicon(*kind).scan(&lowered)))
        .collect();

    SignalVector {
        word_count: tokens.len(),
        content_word_count: content.len(),
        unique_word_ratio,
        sentence_count,
        average_sentence_length,
        quantified_claims,
        quantified_impacts,
        lexicon_hits,
    }
}

/// Runs of word characters with leading and trailing joiners stripped.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .map(|token| token.trim_matches(|c: char| c == '-' || c == '\'' || c == '_'))
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .collect()
}

/// Splits on line breaks and on `.`, `!` or `?` followed by whitespace or the end of text.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        let boundary = match c {
            '\n' => true,
            '.' | '!' | '?' => chars.peek().map_or(true, |(_, next)| next.is_whitespace()),
            _ => false,
        };
        if boundary {
            let end = index + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// All signals needed to score one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSignals {
    fields: Vec<SignalVector>,
    pub combined: SignalVector,
    /// Solution description and future scope read together.
    pub roadmap: SignalVector,
    pub tech_categories: BTreeSet<String>,
    pub demo: LinkStatus,
    pub repository: LinkStatus,
}

impl SubmissionSignals {
    pub fn extract(submission: &Submission, profile: &JudgingProfile) -> Self {
        let fields = TextField::ALL
            .iter()
            .map(|field| {
                extract(
                    submission.text(*field),
                    &SignalSet::for_field(*field),
                    profile,
                )
            })
            .collect();

        let full = SignalSet::full();
        let combined = extract(&submission.combined_text(), &full, profile);
        let roadmap_text = format!(
            "{}\n{}",
            submission.solution_description, submission.future_scope
        );
        let roadmap = extract(&roadmap_text, &full, profile);

        let stack = submission.tech_stack.to_lowercase();
        let tech_categories = profile
            .tech_categories()
            .iter()
            .filter(|(_, lexicon)| lexicon.matches_any(&stack))
            .map(|(name, _)| name.clone())
            .collect();

        Self {
            fields,
            combined,
            roadmap,
            tech_categories,
            demo: link_status(submission.demo_link(), profile),
            repository: link_status(Some(submission.repository_link.as_str()), profile),
        }
    }

    pub fn field(&self, field: TextField) -> &SignalVector {
        &self.fields[field.index()]
    }

    /// Whether any configured presentation category appears in the tech stack.
    pub fn has_presentation_surface(&self, profile: &JudgingProfile) -> bool {
        profile
            .config()
            .presentation_categories
            .iter()
            .any(|category| self.tech_categories.contains(category))
    }
}

fn link_status(link: Option<&str>, profile: &JudgingProfile) -> LinkStatus {
    match link.map(str::trim).filter(|link| !link.is_empty()) {
        None => LinkStatus::Missing,
        Some(link) if profile.is_well_formed_link(link) => LinkStatus::WellFormed,
        Some(_) => LinkStatus::Malformed,
    }
}
