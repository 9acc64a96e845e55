//! Hackathon submission judging: signal extraction, criterion scoring,
//! penalties, verdicts, feedback and ranking.
//!
//! Every evaluation is a pure function of the submission text and the
//! [`JudgingProfile`] it runs against. The profile is shared read-only; swapping
//! it goes through [`ProfileHandle`] so evaluations in flight keep the snapshot
//! they started with.

pub mod aggregate;
pub mod config;
pub mod criteria;
mod defaults;
pub mod domain;
pub mod feedback;
pub mod leaderboard;
pub mod lexicon;
pub mod penalties;
pub mod router;
pub mod signals;
pub mod verdict;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use aggregate::Totals;
pub use config::{
    ConfigurationError, FeedbackRules, JudgingConfig, JudgingProfile, PenaltyThresholds,
    ProfileHandle, ScoringRules, VerdictBand,
};
pub use criteria::{CriterionResult, Deficiency, Finding, ScoreBand, StrengthSignal};
pub use domain::{
    Criterion, LexiconKind, LinkStatus, PenaltyCategory, Submission, SubmissionId, TextField,
    VerdictTier,
};
pub use feedback::{Feedback, FeedbackGenerator, Strength, StrengthKind, Weakness, WeaknessKind};
pub use leaderboard::{
    Leaderboard, LeaderboardEntry, LeaderboardStatistics, Standings, WinnerExplanation,
    DEFAULT_PODIUM_SIZE,
};
pub use penalties::PenaltyRecord;
pub use router::{judging_router, JudgingState};
pub use signals::{SignalSet, SignalVector, SubmissionSignals};
pub use verdict::VerdictScale;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("invalid submission field `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

/// Submission-level facts the feedback layer reads without re-scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmissionFacts {
    pub word_count: usize,
    pub demo: LinkStatus,
    pub repository: LinkStatus,
}

/// Outcome of one evaluation.
///
/// `feedback` stays `None` until [`FeedbackGenerator::enrich`] runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub title: String,
    pub criteria: Vec<CriterionResult>,
    pub penalties: Vec<PenaltyRecord>,
    pub weighted_score: f64,
    pub total_penalty: f64,
    pub final_score: f64,
    pub verdict: VerdictTier,
    pub facts: SubmissionFacts,
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

impl ScoreResult {
    pub fn criterion(&self, criterion: Criterion) -> Option<&CriterionResult> {
        self.criteria
            .iter()
            .find(|result| result.criterion == criterion)
    }

    pub fn penalty(&self, category: PenaltyCategory) -> Option<&PenaltyRecord> {
        self.penalties
            .iter()
            .find(|record| record.category == category)
    }
}

/// Stateless evaluator bound to one judging profile snapshot.
#[derive(Debug, Clone)]
pub struct Judge {
    profile: Arc<JudgingProfile>,
}

impl Judge {
    pub fn new(profile: Arc<JudgingProfile>) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &JudgingProfile {
        &self.profile
    }

    /// Scores, aggregates and classifies without generating feedback.
    pub fn score(&self, submission: &Submission) -> Result<ScoreResult, EvaluationError> {
        submission.check_preconditions()?;
        let profile = self.profile.as_ref();

        let signals = SubmissionSignals::extract(submission, profile);
        let criteria = criteria::score_criteria(&signals, profile);
        let penalties = penalties::assess(submission, &signals, profile);
        let totals = aggregate::aggregate(&criteria, &penalties, profile.penalties().total_cap);
        let verdict = profile.verdict_scale().classify(totals.final_score);

        debug!(
            title = %submission.title,
            weighted = totals.weighted_score,
            penalty = totals.total_penalty,
            final_score = totals.final_score,
            verdict = verdict.label(),
            "submission scored"
        );
        for result in &criteria {
            debug!(criterion = result.name.as_str(), score = result.score, "criterion scored");
        }
        for record in &penalties {
            debug!(
                category = record.category.label(),
                count = record.count,
                deduction = record.deduction,
                "penalty applied"
            );
        }

        Ok(ScoreResult {
            title: submission.title.clone(),
            criteria,
            penalties,
            weighted_score: totals.weighted_score,
            total_penalty: totals.total_penalty,
            final_score: totals.final_score,
            verdict,
            facts: SubmissionFacts {
                word_count: signals.combined.word_count,
                demo: signals.demo,
                repository: signals.repository,
            },
            feedback: None,
        })
    }

    /// Full evaluation: [`Judge::score`] followed by feedback enrichment.
    pub fn evaluate(&self, submission: &Submission) -> Result<ScoreResult, EvaluationError> {
        let mut result = self.score(submission)?;
        FeedbackGenerator::from_profile(&self.profile).enrich(&mut result);
        Ok(result)
    }
}
