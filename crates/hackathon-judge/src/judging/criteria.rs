use serde::{Deserialize, Serialize};

use super::aggregate::round_to_tenth;
use super::config::{JudgingProfile, ScoringRules};
use super::domain::{Criterion, LexiconKind, LinkStatus, TextField};
use super::signals::SubmissionSignals;

/// Positive evidence that contributed to a sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthSignal {
    ClearDifferentiation,
    QuantifiedNovelty,
    DetailedArchitecture,
    BroadTechStack,
    MeasuredPerformance,
    QuantifiedProblem,
    DefinedAudience,
    ScopedMvp,
    PublicRepository,
    WorkingDemo,
    ScalingPlan,
    ExtensionPoints,
    BusinessModel,
    UxDetail,
    AccessibilityConsidered,
    QuantifiedImpact,
}

impl StrengthSignal {
    pub const fn describe(self) -> &'static str {
        match self {
            StrengthSignal::ClearDifferentiation => "compares itself against existing approaches",
            StrengthSignal::QuantifiedNovelty => "backs the novel angle with a measured result",
            StrengthSignal::DetailedArchitecture => "names concrete architecture and techniques",
            StrengthSignal::BroadTechStack => "uses a stack spanning several layers",
            StrengthSignal::MeasuredPerformance => "quotes measurable technical figures",
            StrengthSignal::QuantifiedProblem => "sizes the problem with numbers",
            StrengthSignal::DefinedAudience => "names a specific audience",
            StrengthSignal::ScopedMvp => "keeps the build scoped to an MVP",
            StrengthSignal::PublicRepository => "links a repository",
            StrengthSignal::WorkingDemo => "links a demo",
            StrengthSignal::ScalingPlan => "describes how the system grows",
            StrengthSignal::ExtensionPoints => "plans integration and extension points",
            StrengthSignal::BusinessModel => "mentions a sustainability model",
            StrengthSignal::UxDetail => "describes interface and design work",
            StrengthSignal::AccessibilityConsidered => "considers accessibility",
            StrengthSignal::QuantifiedImpact => "states a measurable outcome",
        }
    }
}

/// Gaps detected while scoring a criterion, each with targeted advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deficiency {
    GenericInnovation,
    NoDifferentiation,
    ShallowTechnicalDetail,
    NarrowTechStack,
    UnclearProblem,
    UnquantifiedProblem,
    VagueAudience,
    NoDemo,
    MalformedDemoLink,
    AmbitiousScopeWithoutDemo,
    NoScalingPlan,
    NoUxDetail,
    UnquantifiedImpact,
    RepetitiveWording,
}

impl Deficiency {
    pub const fn describe(self) -> &'static str {
        match self {
            Deficiency::GenericInnovation => "the idea is framed in generic terms",
            Deficiency::NoDifferentiation => "no comparison with existing solutions",
            Deficiency::ShallowTechnicalDetail => "little technical detail",
            Deficiency::NarrowTechStack => "the tech stack covers a single layer",
            Deficiency::UnclearProblem => "the problem statement is thin",
            Deficiency::UnquantifiedProblem => "the problem is not sized",
            Deficiency::VagueAudience => "no specific audience is named",
            Deficiency::NoDemo => "no demo link",
            Deficiency::MalformedDemoLink => "the demo link is not a valid URL",
            Deficiency::AmbitiousScopeWithoutDemo => "sweeping scope with nothing to try",
            Deficiency::NoScalingPlan => "no plan for growth",
            Deficiency::NoUxDetail => "no interface or design detail",
            Deficiency::UnquantifiedImpact => "impact is not measured",
            Deficiency::RepetitiveWording => "the write-up repeats itself",
        }
    }

    pub const fn suggestion(self) -> &'static str {
        match self {
            Deficiency::GenericInnovation => {
                "Go beyond 'an app that uses AI': name the specific mechanism that makes it work."
            }
            Deficiency::NoDifferentiation => {
                "Name the closest existing tools and say what you do differently."
            }
            Deficiency::ShallowTechnicalDetail => {
                "Describe the architecture, data model, and the algorithms you implemented."
            }
            Deficiency::NarrowTechStack => {
                "List the full stack, from interface to storage and deployment."
            }
            Deficiency::UnclearProblem => {
                "Expand the problem statement: who is affected, when, and how badly."
            }
            Deficiency::UnquantifiedProblem => {
                "Put numbers on the problem: hours lost, money spent, people affected."
            }
            Deficiency::VagueAudience => "Name the exact users you built this for.",
            Deficiency::NoDemo => {
                "Add a working prototype link so judges can try the project themselves."
            }
            Deficiency::MalformedDemoLink => "Fix the demo link so it opens a working page.",
            Deficiency::AmbitiousScopeWithoutDemo => {
                "Narrow the pitch to what you shipped and link a demo of it."
            }
            Deficiency::NoScalingPlan => {
                "Explain how the architecture handles 10x the users or data."
            }
            Deficiency::NoUxDetail => {
                "Show the user flow with screenshots, wireframes, or usability findings."
            }
            Deficiency::UnquantifiedImpact => {
                "State the expected outcome as a number, such as time saved or errors avoided."
            }
            Deficiency::RepetitiveWording => {
                "Rewrite repeated passages so each section adds new information."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "signal", rename_all = "snake_case")]
pub enum Finding {
    Strength(StrengthSignal),
    Deficiency(Deficiency),
}

/// Rationale band for a single sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Adequate,
    NeedsWork,
}

impl ScoreBand {
    pub fn of(score: f64, rules: &ScoringRules) -> Self {
        if score >= rules.strong_band {
            ScoreBand::Strong
        } else if score >= rules.adequate_band {
            ScoreBand::Adequate
        } else {
            ScoreBand::NeedsWork
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong signal",
            ScoreBand::Adequate => "adequate",
            ScoreBand::NeedsWork => "needs work",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub name: String,
    pub score: f64,
    pub weight: f64,
    pub band: ScoreBand,
    pub rationale: String,
    pub findings: Vec<Finding>,
}

impl CriterionResult {
    pub fn deficiencies(&self) -> impl Iterator<Item = Deficiency> + '_ {
        self.findings.iter().filter_map(|finding| match finding {
            Finding::Deficiency(deficiency) => Some(*deficiency),
            Finding::Strength(_) => None,
        })
    }

    pub fn strengths(&self) -> impl Iterator<Item = StrengthSignal> + '_ {
        self.findings.iter().filter_map(|finding| match finding {
            Finding::Strength(strength) => Some(*strength),
            Finding::Deficiency(_) => None,
        })
    }
}

/// Raw output of a criterion rule before weighting and rationale.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub score: f64,
    pub findings: Vec<Finding>,
}

type CriterionRule = fn(&SubmissionSignals, &JudgingProfile) -> Assessment;

fn rule_for(criterion: Criterion) -> CriterionRule {
    match criterion {
        Criterion::Innovation => innovation,
        Criterion::TechnicalDepth => technical_depth,
        Criterion::ProblemRelevance => problem_relevance,
        Criterion::Feasibility => feasibility,
        Criterion::Scalability => scalability,
        Criterion::Presentation => presentation,
        Criterion::Impact => impact,
    }
}

/// Scores every criterion in [`Criterion::ALL`] order.
pub fn score_criteria(signals: &SubmissionSignals, profile: &JudgingProfile) -> Vec<CriterionResult> {
    Criterion::ALL
        .iter()
        .map(|criterion| score_criterion(*criterion, signals, profile))
        .collect()
}

pub fn score_criterion(
    criterion: Criterion,
    signals: &SubmissionSignals,
    profile: &JudgingProfile,
) -> CriterionResult {
    let mut assessment = rule_for(criterion)(signals, profile);
    apply_repetition_cap(&mut assessment, signals, profile.scoring());

    let band = ScoreBand::of(assessment.score, profile.scoring());
    CriterionResult {
        criterion,
        name: criterion.label().to_string(),
        score: assessment.score,
        weight: profile.weight(criterion),
        band,
        rationale: rationale(criterion, assessment.score, band, &assessment.findings),
        findings: assessment.findings,
    }
}

fn apply_repetition_cap(
    assessment: &mut Assessment,
    signals: &SubmissionSignals,
    rules: &ScoringRules,
) {
    let combined = &signals.combined;
    if combined.content_word_count >= rules.repetition_min_words
        && combined.unique_word_ratio < rules.repetition_floor
    {
        assessment.score = assessment.score.min(rules.repetition_ceiling);
        assessment
            .findings
            .push(Finding::Deficiency(Deficiency::RepetitiveWording));
    }
}

fn rationale(criterion: Criterion, score: f64, band: ScoreBand, findings: &[Finding]) -> String {
    let mut text = format!("{}: {} ({score:.1})", criterion.label(), band.headline());

    let strengths: Vec<&str> = findings
        .iter()
        .filter_map(|finding| match finding {
            Finding::Strength(strength) => Some(strength.describe()),
            Finding::Deficiency(_) => None,
        })
        .collect();
    let gaps: Vec<&str> = findings
        .iter()
        .filter_map(|finding| match finding {
            Finding::Deficiency(deficiency) => Some(deficiency.describe()),
            Finding::Strength(_) => None,
        })
        .collect();

    if !strengths.is_empty() {
        text.push_str(&format!("; {}", strengths.join(", ")));
    }
    if !gaps.is_empty() {
        text.push_str(&format!("; gaps: {}", gaps.join(", ")));
    }
    text
}

/// Accumulates points for one criterion.
struct Tally {
    score: f64,
    ceiling: f64,
    findings: Vec<Finding>,
}

impl Tally {
    fn new(base: f64) -> Self {
        Self {
            score: base,
            ceiling: 100.0,
            findings: Vec::new(),
        }
    }

    /// Adds `points` scaled by how close `value` is to `saturation`.
    fn award(&mut self, points: f64, value: usize, saturation: usize) {
        let ratio = if saturation == 0 {
            1.0
        } else {
            (value as f64 / saturation as f64).min(1.0)
        };
        self.score += points * ratio;
    }

    fn add(&mut self, points: f64) {
        self.score += points;
    }

    fn bonus(&mut self, points: f64, strength: StrengthSignal) {
        self.score += points;
        self.findings.push(Finding::Strength(strength));
    }

    fn note(&mut self, strength: StrengthSignal) {
        self.findings.push(Finding::Strength(strength));
    }

    fn deduct(&mut self, points: f64, deficiency: Deficiency) {
        self.score -= points;
        self.findings.push(Finding::Deficiency(deficiency));
    }

    fn flag(&mut self, deficiency: Deficiency) {
        self.findings.push(Finding::Deficiency(deficiency));
    }

    fn cap(&mut self, ceiling: f64, deficiency: Deficiency) {
        self.ceiling = self.ceiling.min(ceiling);
        self.findings.push(Finding::Deficiency(deficiency));
    }

    fn finish(self) -> Assessment {
        let score = self.score.min(self.ceiling).clamp(0.0, 100.0);
        Assessment {
            score: round_to_tenth(score),
            findings: self.findings,
        }
    }
}

fn innovation(signals: &SubmissionSignals, _profile: &JudgingProfile) -> Assessment {
    let field = signals.field(TextField::InnovationDescription);
    let mut tally = Tally::new(35.0);

    tally.award(25.0, signals.combined.distinct(LexiconKind::Innovation), 3);

    let differentiators = field.distinct(LexiconKind::Differentiator);
    if differentiators == 0 {
        tally.deduct(5.0, Deficiency::NoDifferentiation);
    } else {
        tally.award(15.0, differentiators, 2);
        tally.note(StrengthSignal::ClearDifferentiation);
    }

    tally.award(10.0, field.word_count, 50);

    if field.quantified_claims > 0 {
        tally.bonus(15.0, StrengthSignal::QuantifiedNovelty);
    }

    if signals.combined.total(LexiconKind::GenericInnovation) >= 2 {
        tally.deduct(15.0, Deficiency::GenericInnovation);
    }
    tally.finish()
}

fn technical_depth(signals: &SubmissionSignals, _profile: &JudgingProfile) -> Assessment {
    let combined_terms = signals.combined.distinct(LexiconKind::TechnicalDepth);
    let categories = signals.tech_categories.len();
    let mut tally = Tally::new(30.0);

    tally.award(30.0, combined_terms, 8);
    tally.award(15.0, categories, 4);
    tally.award(
        10.0,
        signals
            .field(TextField::SolutionDescription)
            .distinct(LexiconKind::TechnicalDepth),
        3,
    );
    tally.award(15.0, signals.combined.quantified_claims, 3);

    if combined_terms >= 8 {
        tally.note(StrengthSignal::DetailedArchitecture);
    } else if combined_terms < 3 {
        tally.deduct(10.0, Deficiency::ShallowTechnicalDetail);
    }

    if categories >= 4 {
        tally.note(StrengthSignal::BroadTechStack);
    } else if categories <= 1 {
        tally.deduct(5.0, Deficiency::NarrowTechStack);
    }

    if signals.combined.quantified_claims >= 3 {
        tally.note(StrengthSignal::MeasuredPerformance);
    }
    tally.finish()
}

fn problem_relevance(signals: &SubmissionSignals, _profile: &JudgingProfile) -> Assessment {
    let problem = signals.field(TextField::ProblemStatement);
    let audience = signals
        .field(TextField::TargetUsers)
        .distinct(LexiconKind::Audience);
    let mut tally = Tally::new(30.0);

    tally.award(15.0, problem.word_count, 60);
    tally.award(20.0, problem.distinct(LexiconKind::PainPoint), 3);
    tally.award(15.0, audience, 2);
    tally.award(20.0, problem.quantified_claims, 2);

    if problem.word_count < 20 {
        tally.deduct(10.0, Deficiency::UnclearProblem);
    }
    if problem.quantified_claims == 0 {
        tally.flag(Deficiency::UnquantifiedProblem);
    } else {
        tally.note(StrengthSignal::QuantifiedProblem);
    }
    if audience == 0 {
        tally.deduct(5.0, Deficiency::VagueAudience);
    } else {
        tally.note(StrengthSignal::DefinedAudience);
    }
    tally.finish()
}

fn feasibility(signals: &SubmissionSignals, profile: &JudgingProfile) -> Assessment {
    let rules = profile.scoring();
    let scope = signals
        .field(TextField::SolutionDescription)
        .distinct(LexiconKind::ScopeDiscipline);
    let mut tally = Tally::new(30.0);

    tally.award(25.0, signals.combined.distinct(LexiconKind::Feasibility), 5);
    tally.award(10.0, scope, 1);
    if scope > 0 {
        tally.note(StrengthSignal::ScopedMvp);
    }
    tally.award(5.0, signals.combined.distinct(LexiconKind::Documentation), 1);

    if signals.repository.is_usable() {
        tally.bonus(rules.repository_bonus, StrengthSignal::PublicRepository);
    }

    match signals.demo {
        LinkStatus::WellFormed => tally.bonus(rules.demo_bonus, StrengthSignal::WorkingDemo),
        LinkStatus::Missing => tally.cap(rules.missing_demo_ceiling, Deficiency::NoDemo),
        LinkStatus::Malformed => {
            tally.cap(rules.missing_demo_ceiling, Deficiency::MalformedDemoLink)
        }
    }

    if !signals.demo.is_usable() && signals.combined.distinct(LexiconKind::AmbitiousScope) > 0 {
        tally.deduct(10.0, Deficiency::AmbitiousScopeWithoutDemo);
    }
    tally.finish()
}

fn scalability(signals: &SubmissionSignals, _profile: &JudgingProfile) -> Assessment {
    let scaling_terms = signals.roadmap.distinct(LexiconKind::Scalability);
    let extension_terms = signals.combined.distinct(LexiconKind::Extensibility);
    let mut tally = Tally::new(30.0);

    tally.award(30.0, scaling_terms, 4);
    tally.award(
        10.0,
        signals.field(TextField::FutureScope).word_count,
        50,
    );
    tally.award(15.0, extension_terms, 2);
    tally.award(10.0, signals.roadmap.quantified_claims, 1);

    if signals.combined.distinct(LexiconKind::Sustainability) > 0 {
        tally.bonus(5.0, StrengthSignal::BusinessModel);
    }

    if scaling_terms == 0 {
        tally.deduct(10.0, Deficiency::NoScalingPlan);
    } else {
        tally.note(StrengthSignal::ScalingPlan);
    }
    if extension_terms > 0 {
        tally.note(StrengthSignal::ExtensionPoints);
    }
    tally.finish()
}

fn presentation(signals: &SubmissionSignals, profile: &JudgingProfile) -> Assessment {
    let ux_terms = signals.combined.distinct(LexiconKind::Ux);
    let mut tally = Tally::new(35.0);

    tally.award(25.0, ux_terms, 4);
    if ux_terms == 0 {
        tally.deduct(10.0, Deficiency::NoUxDetail);
    } else {
        tally.note(StrengthSignal::UxDetail);
    }

    if signals.demo.is_usable() {
        tally.bonus(15.0, StrengthSignal::WorkingDemo);
    }
    if signals.has_presentation_surface(profile) {
        tally.add(10.0);
    }
    if signals.combined.distinct(LexiconKind::Accessibility) > 0 {
        tally.bonus(10.0, StrengthSignal::AccessibilityConsidered);
    }

    let sentence_length = signals.combined.average_sentence_length;
    if (10.0..=28.0).contains(&sentence_length) {
        tally.add(5.0);
    }
    tally.finish()
}

fn impact(signals: &SubmissionSignals, _profile: &JudgingProfile) -> Assessment {
    let target = signals.field(TextField::TargetUsers);
    let mut tally = Tally::new(35.0);

    tally.award(25.0, signals.combined.distinct(LexiconKind::Impact), 5);
    if signals.combined.quantified_impacts > 0 {
        tally.bonus(20.0, StrengthSignal::QuantifiedImpact);
    } else {
        tally.flag(Deficiency::UnquantifiedImpact);
    }
    tally.award(10.0, target.word_count, 25);
    tally.award(10.0, target.distinct(LexiconKind::Audience), 2);
    tally.finish()
}
