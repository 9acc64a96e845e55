use serde::{Deserialize, Serialize};

use super::aggregate::round_to_tenth;
use super::config::JudgingProfile;
use super::domain::{LexiconKind, PenaltyCategory, Submission, TextField};
use super::signals::{sentences, SubmissionSignals};

/// Deduction applied for one category of low-substance writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyRecord {
    pub category: PenaltyCategory,
    pub count: usize,
    pub deduction: f64,
}

/// Runs every penalty check; only categories with a non-zero deduction are returned.
pub fn assess(
    submission: &Submission,
    signals: &SubmissionSignals,
    profile: &JudgingProfile,
) -> Vec<PenaltyRecord> {
    [
        buzzwords(signals, profile),
        vagueness(signals, profile),
        overclaims(submission, profile),
        formulaic(signals, profile),
    ]
    .into_iter()
    .flatten()
    .filter(|record| record.deduction > 0.0)
    .collect()
}

fn buzzwords(signals: &SubmissionSignals, profile: &JudgingProfile) -> Option<PenaltyRecord> {
    let thresholds = profile.penalties();
    let count = signals.combined.total(LexiconKind::Buzzword);
    let words = signals.combined.word_count;
    if count == 0 || words == 0 {
        return None;
    }

    let density = count as f64 * 100.0 / words as f64;
    let excess = density - thresholds.buzzword_density_threshold;
    if excess <= 0.0 {
        return None;
    }

    Some(PenaltyRecord {
        category: PenaltyCategory::Buzzword,
        count,
        deduction: round_to_tenth(
            (excess * thresholds.buzzword_points_per_density).min(thresholds.buzzword_cap),
        ),
    })
}

fn vagueness(signals: &SubmissionSignals, profile: &JudgingProfile) -> Option<PenaltyRecord> {
    let thresholds = profile.penalties();
    let (count, excess) = TextField::ALL
        .iter()
        .map(|field| signals.field(*field).total(LexiconKind::Vagueness))
        .fold((0, 0), |(count, excess), markers| {
            (
                count + markers,
                excess + markers.saturating_sub(thresholds.vagueness_free_per_field),
            )
        });
    if excess == 0 {
        return None;
    }

    Some(PenaltyRecord {
        category: PenaltyCategory::Vagueness,
        count,
        deduction: round_to_tenth(
            (excess as f64 * thresholds.vagueness_points_per_marker)
                .min(thresholds.vagueness_cap),
        ),
    })
}

fn overclaims(submission: &Submission, profile: &JudgingProfile) -> Option<PenaltyRecord> {
    let thresholds = profile.penalties();
    let lexicon = profile.lexicon(LexiconKind::Overclaim);
    let text = submission.combined_text().to_lowercase();

    let unsupported: usize = sentences(&text)
        .into_iter()
        .map(|sentence| {
            let spans = lexicon.spans(sentence);
            if spans.is_empty() || is_supported(&blank_spans(sentence, &spans), profile) {
                0
            } else {
                spans.len()
            }
        })
        .sum();
    if unsupported == 0 {
        return None;
    }

    Some(PenaltyRecord {
        category: PenaltyCategory::Overclaim,
        count: unsupported,
        deduction: round_to_tenth(
            (unsupported as f64 * thresholds.overclaim_points_per_claim)
                .min(thresholds.overclaim_cap),
        ),
    })
}

fn formulaic(signals: &SubmissionSignals, profile: &JudgingProfile) -> Option<PenaltyRecord> {
    let thresholds = profile.penalties();
    let count = signals.combined.distinct(LexiconKind::Formulaic);
    if count == 0 || count < thresholds.formulaic_min_phrases {
        return None;
    }

    Some(PenaltyRecord {
        category: PenaltyCategory::FormulaicContent,
        count,
        deduction: thresholds.formulaic_deduction,
    })
}

/// Evidence left in a sentence once the claim phrases themselves are removed.
fn is_supported(remainder: &str, profile: &JudgingProfile) -> bool {
    remainder.chars().any(|c| c.is_ascii_digit())
        || profile.quantity_pattern().is_match(remainder)
        || profile.lexicon(LexiconKind::Evidence).matches_any(remainder)
        || profile.named_technologies().matches_any(remainder)
}

fn blank_spans(sentence: &str, spans: &[(usize, usize)]) -> String {
    let mut blanked = String::with_capacity(sentence.len());
    let mut cursor = 0;
    for &(start, end) in spans {
        if end <= cursor {
            continue;
        }
        let start = start.max(cursor);
        blanked.push_str(&sentence[cursor..start]);
        blanked.push_str(&" ".repeat(end - start));
        cursor = end;
    }
    blanked.push_str(&sentence[cursor..]);
    blanked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_digits_do_not_count_as_evidence() {
        let spans = vec![(4, 17)];
        let blanked = blank_spans("our 100% original app", &spans);
        assert_eq!(blanked, format!("our {} app", " ".repeat(13)));
        assert!(!blanked.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn overlapping_spans_are_blanked_once() {
        let blanked = blank_spans("abcdef", &[(0, 3), (2, 5)]);
        assert_eq!(blanked, "     f");
    }
}
