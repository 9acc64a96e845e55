use serde::{Deserialize, Serialize};

use super::config::{FeedbackRules, JudgingProfile};
use super::criteria::{CriterionResult, Deficiency};
use super::domain::{Criterion, LinkStatus, PenaltyCategory, VerdictTier};
use super::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "criterion", rename_all = "snake_case")]
pub enum StrengthKind {
    Outstanding(Criterion),
    Strong(Criterion),
    WorkingDemo,
    CleanSubmission,
    ComprehensiveWriteUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "subject", rename_all = "snake_case")]
pub enum WeaknessKind {
    CriticalGap(Criterion),
    NeedsWork(Criterion),
    Penalty(PenaltyCategory),
    MissingDemo,
    BrokenDemoLink,
}

/// Where a weakness's suggestion text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "key", rename_all = "snake_case")]
pub enum Advice {
    Deficiency(Deficiency),
    Criterion(Criterion),
    Penalty(PenaltyCategory),
}

impl Advice {
    pub const fn text(self) -> &'static str {
        match self {
            Advice::Deficiency(deficiency) => deficiency.suggestion(),
            Advice::Criterion(criterion) => criterion.improvement_hint(),
            Advice::Penalty(category) => category.suggestion(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub kind: StrengthKind,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    pub kind: WeaknessKind,
    pub detail: String,
    pub advice: Advice,
    pub suggestion: String,
}

impl Weakness {
    fn new(kind: WeaknessKind, detail: String, advice: Advice) -> Self {
        Self {
            kind,
            detail,
            advice,
            suggestion: advice.text().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
    pub suggestions: Vec<String>,
    pub narrative: String,
}

/// Turns a scored result into ranked strengths, weaknesses and advice.
///
/// Reads only criterion, penalty, verdict and link data, so repeated runs over
/// the same result produce the same feedback.
#[derive(Debug, Clone)]
pub struct FeedbackGenerator {
    rules: FeedbackRules,
}

impl FeedbackGenerator {
    pub fn new(rules: FeedbackRules) -> Self {
        Self { rules }
    }

    pub fn from_profile(profile: &JudgingProfile) -> Self {
        Self::new(profile.feedback().clone())
    }

    /// Stores freshly generated feedback on `result`, replacing any previous feedback.
    pub fn enrich(&self, result: &mut ScoreResult) {
        let feedback = self.generate(result);
        result.feedback = Some(feedback);
    }

    pub fn generate(&self, result: &ScoreResult) -> Feedback {
        let strengths = self.strengths(result);
        let weaknesses = self.weaknesses(result);
        let suggestions = self.suggestions(result.verdict, &weaknesses);

        Feedback {
            strengths,
            weaknesses,
            suggestions,
            narrative: narrative(result),
        }
    }

    fn strengths(&self, result: &ScoreResult) -> Vec<Strength> {
        let rules = &self.rules;
        let mut ranked: Vec<&CriterionResult> = result
            .criteria
            .iter()
            .filter(|criterion| criterion.score >= rules.strength_threshold)
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut strengths: Vec<Strength> = ranked
            .into_iter()
            .take(rules.max_criterion_items)
            .map(|criterion| {
                let kind = if criterion.score >= rules.outstanding_threshold {
                    StrengthKind::Outstanding(criterion.criterion)
                } else {
                    StrengthKind::Strong(criterion.criterion)
                };
                let evidence = criterion
                    .strengths()
                    .next()
                    .map(|signal| format!(": {}", signal.describe()))
                    .unwrap_or_default();
                Strength {
                    kind,
                    detail: format!("{} scored {:.1}{evidence}", criterion.name, criterion.score),
                }
            })
            .collect();

        if result.facts.demo.is_usable() {
            strengths.push(Strength {
                kind: StrengthKind::WorkingDemo,
                detail: "A demo link is provided for judges to try".to_string(),
            });
        }
        if result.penalties.is_empty() {
            strengths.push(Strength {
                kind: StrengthKind::CleanSubmission,
                detail: "No buzzword, vagueness, overclaim or template deductions".to_string(),
            });
        }
        if result.facts.word_count >= rules.comprehensive_word_count {
            strengths.push(Strength {
                kind: StrengthKind::ComprehensiveWriteUp,
                detail: format!("Thorough write-up of {} words", result.facts.word_count),
            });
        }

        strengths.truncate(rules.max_items);
        strengths
    }

    fn weaknesses(&self, result: &ScoreResult) -> Vec<Weakness> {
        let rules = &self.rules;
        let mut ranked: Vec<&CriterionResult> = result
            .criteria
            .iter()
            .filter(|criterion| criterion.score < rules.weakness_threshold)
            .collect();
        ranked.sort_by(|a, b| a.score.total_cmp(&b.score));

        let mut weaknesses: Vec<Weakness> = ranked
            .into_iter()
            .take(rules.max_criterion_items)
            .map(|criterion| {
                let kind = if criterion.score < rules.critical_threshold {
                    WeaknessKind::CriticalGap(criterion.criterion)
                } else {
                    WeaknessKind::NeedsWork(criterion.criterion)
                };
                let deficiency = criterion.deficiencies().next();
                let advice = deficiency
                    .map(Advice::Deficiency)
                    .unwrap_or(Advice::Criterion(criterion.criterion));
                let reason = deficiency
                    .map(|deficiency| format!(": {}", deficiency.describe()))
                    .unwrap_or_default();
                Weakness::new(
                    kind,
                    format!("{} scored {:.1}{reason}", criterion.name, criterion.score),
                    advice,
                )
            })
            .collect();

        // Demo advice ranks ahead of penalty advice so truncation keeps it.
        match result.facts.demo {
            LinkStatus::Missing => weaknesses.push(Weakness::new(
                WeaknessKind::MissingDemo,
                "No demo link was provided".to_string(),
                Advice::Deficiency(Deficiency::NoDemo),
            )),
            LinkStatus::Malformed => weaknesses.push(Weakness::new(
                WeaknessKind::BrokenDemoLink,
                "The demo link is not a valid URL".to_string(),
                Advice::Deficiency(Deficiency::MalformedDemoLink),
            )),
            LinkStatus::WellFormed => {}
        }

        for record in &result.penalties {
            if record.deduction >= rules.penalty_weakness_threshold {
                weaknesses.push(Weakness::new(
                    WeaknessKind::Penalty(record.category),
                    format!(
                        "{}: {} instance(s), -{:.1} points",
                        record.category.label(),
                        record.count,
                        record.deduction
                    ),
                    Advice::Penalty(record.category),
                ));
            }
        }

        weaknesses.truncate(rules.max_items);
        weaknesses
    }

    fn suggestions(&self, verdict: VerdictTier, weaknesses: &[Weakness]) -> Vec<String> {
        let mut suggestions: Vec<String> = Vec::new();
        for weakness in weaknesses {
            if !suggestions.contains(&weakness.suggestion) {
                suggestions.push(weakness.suggestion.clone());
            }
        }

        let closing = tier_advice(verdict).to_string();
        if !suggestions.contains(&closing) {
            suggestions.push(closing);
        }
        suggestions.truncate(self.rules.max_items);
        suggestions
    }
}

fn tier_advice(verdict: VerdictTier) -> &'static str {
    match verdict {
        VerdictTier::WinnerMaterial => {
            "Rehearse the demo path and keep the pitch as concrete as the write-up."
        }
        VerdictTier::StrongContender => {
            "Polish the weakest criterion; that gap is what separates you from the winners."
        }
        VerdictTier::Average => {
            "Trade adjectives for specifics: numbers, named components, and a live demo."
        }
        VerdictTier::NotReady => {
            "Focus on building a working prototype before presenting."
        }
    }
}

fn tier_sentence(verdict: VerdictTier) -> &'static str {
    match verdict {
        VerdictTier::WinnerMaterial => {
            "A standout submission that pairs a clear problem with real engineering depth."
        }
        VerdictTier::StrongContender => {
            "Solid work overall; with some refinement this could be a serious contender."
        }
        VerdictTier::Average => {
            "The idea is there, but the execution does not yet match the ambition."
        }
        VerdictTier::NotReady => {
            "This submission needs fundamental rethinking before it is ready to compete."
        }
    }
}

fn narrative(result: &ScoreResult) -> String {
    let mut text = format!("{}: {}", result.verdict.label(), tier_sentence(result.verdict));

    let strongest = result
        .criteria
        .iter()
        .reduce(|best, next| if next.score > best.score { next } else { best });
    let weakest = result
        .criteria
        .iter()
        .reduce(|worst, next| if next.score < worst.score { next } else { worst });

    if let (Some(strongest), Some(weakest)) = (strongest, weakest) {
        text.push_str(&format!(
            " Strongest area: {} ({:.1}). Weakest area: {} ({:.1}).",
            strongest.name, strongest.score, weakest.name, weakest.score
        ));
    }
    text
}
