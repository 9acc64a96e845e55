use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, PoisonError, RwLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::domain::{Criterion, LexiconKind, VerdictTier};
use super::lexicon::Lexicon;
use super::verdict::VerdictScale;
use super::Judge;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Judging configuration as supplied by operators, before validation.
///
/// Serialises to plain JSON so a whole profile can be shipped as one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgingConfig {
    pub weights: BTreeMap<Criterion, f64>,
    pub lexicons: BTreeMap<LexiconKind, Vec<String>>,
    pub tech_categories: BTreeMap<String, Vec<String>>,
    /// Tech terms that are also everyday words (`go`, `swift`); they never back a claim.
    pub everyday_tech_terms: Vec<String>,
    /// Tech categories that count as a user-facing surface for Presentation.
    pub presentation_categories: Vec<String>,
    pub quantity_units: Vec<String>,
    pub impact_outcomes: Vec<String>,
    pub impact_verbs: Vec<String>,
    pub penalties: PenaltyThresholds,
    pub scoring: ScoringRules,
    pub feedback: FeedbackRules,
    pub verdict_bands: Vec<VerdictBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyThresholds {
    /// Buzzwords per 100 words tolerated before deductions start.
    pub buzzword_density_threshold: f64,
    pub buzzword_points_per_density: f64,
    pub buzzword_cap: f64,
    pub vagueness_free_per_field: usize,
    pub vagueness_points_per_marker: f64,
    pub vagueness_cap: f64,
    pub overclaim_points_per_claim: f64,
    pub overclaim_cap: f64,
    pub formulaic_min_phrases: usize,
    pub formulaic_deduction: f64,
    pub total_cap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Sub-scores at or above this read as a strong signal.
    pub strong_band: f64,
    /// Sub-scores at or above this (and below `strong_band`) read as adequate.
    pub adequate_band: f64,
    pub demo_bonus: f64,
    pub repository_bonus: f64,
    /// Feasibility ceiling when no usable demo link is present.
    pub missing_demo_ceiling: f64,
    /// Content-word unique ratio below which wording counts as repetitive.
    pub repetition_floor: f64,
    pub repetition_min_words: usize,
    pub repetition_ceiling: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackRules {
    pub strength_threshold: f64,
    pub outstanding_threshold: f64,
    pub weakness_threshold: f64,
    pub critical_threshold: f64,
    pub max_criterion_items: usize,
    pub max_items: usize,
    pub comprehensive_word_count: usize,
    /// Penalty deductions at or above this surface as weaknesses.
    pub penalty_weakness_threshold: f64,
}

/// Half-open score range `[min, max)` assigned to a verdict tier.
///
/// The band ending at 100 also includes 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictBand {
    pub tier: VerdictTier,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("criterion weights sum to {sum}, expected 1.0")]
    WeightSum { sum: f64 },
    #[error("weight for {criterion:?} must be within 0..=1, got {weight}")]
    WeightOutOfRange { criterion: Criterion, weight: f64 },
    #[error("no weight configured for {0:?}")]
    MissingWeight(Criterion),
    #[error("lexicon `{0}` is empty")]
    EmptyLexicon(&'static str),
    #[error("lexicon `{0}` contains a blank term")]
    BlankTerm(String),
    #[error("term `{term}` appears in marker lexicon `{marker}` and scoring lexicon `{scoring}`")]
    MarkerOverlap {
        term: String,
        marker: &'static str,
        scoring: &'static str,
    },
    #[error("unknown presentation category `{0}`")]
    UnknownCategory(String),
    #[error("threshold `{name}` is invalid: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
    #[error("verdict bands are invalid: {0}")]
    VerdictBands(String),
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Validated, immutable judging configuration with compiled matchers.
#[derive(Debug)]
pub struct JudgingProfile {
    config: JudgingConfig,
    lexicons: Vec<Lexicon>,
    tech_categories: Vec<(String, Lexicon)>,
    named_technologies: Lexicon,
    quantity_pattern: Regex,
    impact_pattern: Regex,
    link_pattern: Regex,
    verdict_scale: VerdictScale,
}

impl JudgingProfile {
    pub fn from_config(config: JudgingConfig) -> Result<Self, ConfigurationError> {
        validate_weights(&config.weights)?;
        validate_thresholds(&config)?;
        let lexicons = compile_lexicons(&config.lexicons)?;

        let mut tech_categories = Vec::with_capacity(config.tech_categories.len());
        for (name, terms) in &config.tech_categories {
            let lexicon = compile_terms(name, terms)?;
            tech_categories.push((name.clone(), lexicon));
        }
        let everyday = Lexicon::new(&config.everyday_tech_terms);
        let named_technologies = Lexicon::new(
            tech_categories
                .iter()
                .flat_map(|(_, lexicon)| lexicon.terms())
                .filter(|term| !everyday.contains_term(term)),
        );
        for name in &config.presentation_categories {
            if !config.tech_categories.contains_key(name) {
                return Err(ConfigurationError::UnknownCategory(name.clone()));
            }
        }

        let quantity_pattern = Regex::new(&quantity_expression(&config.quantity_units)?)?;
        let impact_pattern = Regex::new(&impact_expression(
            &config.impact_outcomes,
            &config.impact_verbs,
        )?)?;
        let link_pattern = Regex::new(
            r#"^https?://[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+(:\d+)?(/[^\s<>"{}|\\^`\[\]]*)?$"#,
        )?;
        let verdict_scale = VerdictScale::new(config.verdict_bands.clone())?;

        Ok(Self {
            config,
            lexicons,
            tech_categories,
            named_technologies,
            quantity_pattern,
            impact_pattern,
            link_pattern,
            verdict_scale,
        })
    }

    pub fn config(&self) -> &JudgingConfig {
        &self.config
    }

    pub fn weight(&self, criterion: Criterion) -> f64 {
        self.config.weights.get(&criterion).copied().unwrap_or(0.0)
    }

    pub fn lexicon(&self, kind: LexiconKind) -> &Lexicon {
        &self.lexicons[kind.index()]
    }

    pub fn tech_categories(&self) -> &[(String, Lexicon)] {
        &self.tech_categories
    }

    /// Tech terms specific enough to count as evidence for a claim.
    pub fn named_technologies(&self) -> &Lexicon {
        &self.named_technologies
    }

    pub fn penalties(&self) -> &PenaltyThresholds {
        &self.config.penalties
    }

    pub fn scoring(&self) -> &ScoringRules {
        &self.config.scoring
    }

    pub fn feedback(&self) -> &FeedbackRules {
        &self.config.feedback
    }

    pub fn verdict_scale(&self) -> &VerdictScale {
        &self.verdict_scale
    }

    pub(crate) fn quantity_pattern(&self) -> &Regex {
        &self.quantity_pattern
    }

    pub(crate) fn impact_pattern(&self) -> &Regex {
        &self.impact_pattern
    }

    pub(crate) fn is_well_formed_link(&self, link: &str) -> bool {
        self.link_pattern.is_match(link)
    }
}

/// Shared slot for the active profile.
///
/// Readers take an `Arc` snapshot; replacement validates the new configuration
/// before swapping so a rejected profile never becomes visible.
#[derive(Debug, Clone)]
pub struct ProfileHandle {
    active: Arc<RwLock<Arc<JudgingProfile>>>,
}

impl ProfileHandle {
    pub fn new(profile: JudgingProfile) -> Self {
        Self {
            active: Arc::new(RwLock::new(Arc::new(profile))),
        }
    }

    pub fn snapshot(&self) -> Arc<JudgingProfile> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, config: JudgingConfig) -> Result<Arc<JudgingProfile>, ConfigurationError> {
        let profile = match JudgingProfile::from_config(config) {
            Ok(profile) => Arc::new(profile),
            Err(error) => {
                warn!(%error, "rejected judging profile replacement");
                return Err(error);
            }
        };

        let mut slot = self.active.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Arc::clone(&profile);
        info!(
            lexicon_terms = profile
                .lexicons
                .iter()
                .map(|lexicon| lexicon.terms().len())
                .sum::<usize>(),
            "judging profile replaced"
        );
        Ok(profile)
    }

    /// Judge bound to the profile active at call time.
    pub fn judge(&self) -> Judge {
        Judge::new(self.snapshot())
    }
}

fn validate_weights(weights: &BTreeMap<Criterion, f64>) -> Result<(), ConfigurationError> {
    for criterion in Criterion::ALL {
        let weight = *weights
            .get(&criterion)
            .ok_or(ConfigurationError::MissingWeight(criterion))?;
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(ConfigurationError::WeightOutOfRange { criterion, weight });
        }
    }

    let sum: f64 = weights.values().sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ConfigurationError::WeightSum { sum });
    }
    Ok(())
}

fn validate_thresholds(config: &JudgingConfig) -> Result<(), ConfigurationError> {
    let penalties = &config.penalties;
    let scoring = &config.scoring;
    let feedback = &config.feedback;

    let non_negative = [
        ("buzzword_density_threshold", penalties.buzzword_density_threshold),
        ("buzzword_points_per_density", penalties.buzzword_points_per_density),
        ("buzzword_cap", penalties.buzzword_cap),
        ("vagueness_points_per_marker", penalties.vagueness_points_per_marker),
        ("vagueness_cap", penalties.vagueness_cap),
        ("overclaim_points_per_claim", penalties.overclaim_points_per_claim),
        ("overclaim_cap", penalties.overclaim_cap),
        ("formulaic_deduction", penalties.formulaic_deduction),
        ("total_cap", penalties.total_cap),
        ("demo_bonus", scoring.demo_bonus),
        ("repository_bonus", scoring.repository_bonus),
        ("penalty_weakness_threshold", feedback.penalty_weakness_threshold),
    ];
    for (name, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigurationError::InvalidThreshold { name, value });
        }
    }

    let scores = [
        ("strong_band", scoring.strong_band),
        ("adequate_band", scoring.adequate_band),
        ("missing_demo_ceiling", scoring.missing_demo_ceiling),
        ("repetition_ceiling", scoring.repetition_ceiling),
        ("strength_threshold", feedback.strength_threshold),
        ("outstanding_threshold", feedback.outstanding_threshold),
        ("weakness_threshold", feedback.weakness_threshold),
        ("critical_threshold", feedback.critical_threshold),
    ];
    for (name, value) in scores {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ConfigurationError::InvalidThreshold { name, value });
        }
    }

    if !(0.0..=1.0).contains(&scoring.repetition_floor) {
        return Err(ConfigurationError::InvalidThreshold {
            name: "repetition_floor",
            value: scoring.repetition_floor,
        });
    }
    if scoring.adequate_band > scoring.strong_band {
        return Err(ConfigurationError::InvalidThreshold {
            name: "adequate_band",
            value: scoring.adequate_band,
        });
    }
    if feedback.critical_threshold > feedback.weakness_threshold {
        return Err(ConfigurationError::InvalidThreshold {
            name: "critical_threshold",
            value: feedback.critical_threshold,
        });
    }
    if feedback.strength_threshold > feedback.outstanding_threshold {
        return Err(ConfigurationError::InvalidThreshold {
            name: "strength_threshold",
            value: feedback.strength_threshold,
        });
    }
    Ok(())
}

fn compile_terms(name: &str, terms: &[String]) -> Result<Lexicon, ConfigurationError> {
    if terms.iter().any(|term| term.trim().is_empty()) {
        return Err(ConfigurationError::BlankTerm(name.to_string()));
    }
    Ok(Lexicon::new(terms))
}

fn compile_lexicons(
    configured: &BTreeMap<LexiconKind, Vec<String>>,
) -> Result<Vec<Lexicon>, ConfigurationError> {
    let mut lexicons = Vec::with_capacity(LexiconKind::ALL.len());
    for kind in LexiconKind::ALL {
        let terms = configured.get(&kind).map(Vec::as_slice).unwrap_or(&[]);
        let lexicon = compile_terms(kind.label(), terms)?;
        if lexicon.is_empty() {
            return Err(ConfigurationError::EmptyLexicon(kind.label()));
        }
        lexicons.push(lexicon);
    }

    for marker in LexiconKind::ALL.iter().filter(|kind| kind.is_marker()) {
        for scoring in LexiconKind::ALL.iter().filter(|kind| !kind.is_marker()) {
            let scoring_lexicon = &lexicons[scoring.index()];
            if let Some(term) = lexicons[marker.index()]
                .terms()
                .iter()
                .find(|term| scoring_lexicon.contains_term(term))
            {
                return Err(ConfigurationError::MarkerOverlap {
                    term: term.clone(),
                    marker: marker.label(),
                    scoring: scoring.label(),
                });
            }
        }
    }

    Ok(lexicons)
}

/// Escaped alternation of `terms`, longest first so prefixes never shadow longer units.
fn alternation(name: &'static str, terms: &[String]) -> Result<String, ConfigurationError> {
    let unique: BTreeSet<String> = terms
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect();
    if unique.is_empty() {
        return Err(ConfigurationError::EmptyLexicon(name));
    }

    let mut ordered: Vec<String> = unique.into_iter().collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    Ok(ordered
        .iter()
        .map(|term| regex::escape(term).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|"))
}

fn quantity_expression(units: &[String]) -> Result<String, ConfigurationError> {
    let units = alternation("quantity_units", units)?;
    Ok(format!(
        r"(?i)(?:\$\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:k|m|million|billion)\b)?)|(?:\b\d[\d,]*(?:\.\d+)?(?:\s?%|\s?(?:{units})\b))"
    ))
}

fn impact_expression(outcomes: &[String], verbs: &[String]) -> Result<String, ConfigurationError> {
    let outcomes = alternation("impact_outcomes", outcomes)?;
    let verbs = alternation("impact_verbs", verbs)?;
    Ok(format!(
        r"(?i)(?:\b\d[\d,.]*\s?(?:%|x|percent|times)?\s+(?:{outcomes})\b)|(?:\b(?:{verbs})\b[^.!?\n]{{0,60}}?\bby\s+\d[\d,.]*\s?(?:%|x|percent)?)"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_pattern_requires_a_unit() {
        let profile = JudgingProfile::from_config(JudgingConfig::default()).expect("defaults");
        let pattern = profile.quantity_pattern();
        assert!(pattern.is_match("latency under 200 ms"));
        assert!(pattern.is_match("cut wait time by 40%"));
        assert!(pattern.is_match("saves $1,200 per clinic"));
        assert!(!pattern.is_match("founded in 2023"));
    }

    #[test]
    fn impact_pattern_accepts_both_phrasings() {
        let profile = JudgingProfile::from_config(JudgingConfig::default()).expect("defaults");
        let pattern = profile.impact_pattern();
        assert!(pattern.is_match("3x faster triage"));
        assert!(pattern.is_match("we reduced paperwork time by 40%"));
        assert!(!pattern.is_match("makes triage faster"));
    }

    #[test]
    fn link_shape_is_checked() {
        let profile = JudgingProfile::from_config(JudgingConfig::default()).expect("defaults");
        assert!(profile.is_well_formed_link("https://carequeue.example.org/demo"));
        assert!(profile.is_well_formed_link("http://localhost.dev:8080"));
        assert!(!profile.is_well_formed_link("carequeue.example.org"));
        assert!(!profile.is_well_formed_link("https://not a link"));
    }
}
