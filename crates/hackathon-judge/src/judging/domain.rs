use serde::{Deserialize, Serialize};

use crate::judging::EvaluationError;

/// Identifier wrapper for scored submissions placed on a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Project description as handed over by the intake layer.
///
/// Text is expected to be trimmed and normalized already. A blank descriptive
/// field is scored as "no evidence" rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub title: String,
    pub team_size: u32,
    pub problem_statement: String,
    pub solution_description: String,
    pub tech_stack: String,
    pub innovation_description: String,
    pub repository_link: String,
    #[serde(default)]
    pub demo_link: Option<String>,
    pub target_users: String,
    pub future_scope: String,
}

impl Submission {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Title => &self.title,
            TextField::ProblemStatement => &self.problem_statement,
            TextField::SolutionDescription => &self.solution_description,
            TextField::TechStack => &self.tech_stack,
            TextField::InnovationDescription => &self.innovation_description,
            TextField::TargetUsers => &self.target_users,
            TextField::FutureScope => &self.future_scope,
        }
    }

    /// Demo link with blank values treated as absent.
    pub fn demo_link(&self) -> Option<&str> {
        self.demo_link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }

    /// Every free-text field joined one per line, in [`TextField::ALL`] order.
    pub fn combined_text(&self) -> String {
        TextField::ALL
            .iter()
            .map(|field| self.text(*field))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn check_preconditions(&self) -> Result<(), EvaluationError> {
        if self.team_size == 0 {
            return Err(EvaluationError::InvalidInput {
                field: "team_size",
                reason: "team size must be a positive integer".to_string(),
            });
        }

        if self.title.trim().is_empty() {
            return Err(EvaluationError::InvalidInput {
                field: "title",
                reason: "title must not be blank".to_string(),
            });
        }

        Ok(())
    }
}

/// Free-text fields of a submission that feed signal extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Title,
    ProblemStatement,
    SolutionDescription,
    TechStack,
    InnovationDescription,
    TargetUsers,
    FutureScope,
}

impl TextField {
    pub const ALL: [TextField; 7] = [
        TextField::Title,
        TextField::ProblemStatement,
        TextField::SolutionDescription,
        TextField::TechStack,
        TextField::InnovationDescription,
        TextField::TargetUsers,
        TextField::FutureScope,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            TextField::Title => 0,
            TextField::ProblemStatement => 1,
            TextField::SolutionDescription => 2,
            TextField::TechStack => 3,
            TextField::InnovationDescription => 4,
            TextField::TargetUsers => 5,
            TextField::FutureScope => 6,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::ProblemStatement => "problem statement",
            TextField::SolutionDescription => "solution description",
            TextField::TechStack => "tech stack",
            TextField::InnovationDescription => "innovation description",
            TextField::TargetUsers => "target users",
            TextField::FutureScope => "future scope",
        }
    }
}

/// The seven weighted evaluation dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Innovation,
    TechnicalDepth,
    ProblemRelevance,
    Feasibility,
    Scalability,
    Presentation,
    Impact,
}

impl Criterion {
    pub const ALL: [Criterion; 7] = [
        Criterion::Innovation,
        Criterion::TechnicalDepth,
        Criterion::ProblemRelevance,
        Criterion::Feasibility,
        Criterion::Scalability,
        Criterion::Presentation,
        Criterion::Impact,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Criterion::Innovation => "Innovation",
            Criterion::TechnicalDepth => "Technical Depth",
            Criterion::ProblemRelevance => "Problem Relevance",
            Criterion::Feasibility => "Feasibility",
            Criterion::Scalability => "Scalability",
            Criterion::Presentation => "Presentation",
            Criterion::Impact => "Impact",
        }
    }

    /// Fallback advice when a criterion scores low without a specific deficiency.
    pub const fn improvement_hint(self) -> &'static str {
        match self {
            Criterion::Innovation => {
                "Spell out the angle nobody else takes on this problem and compare it to existing tools."
            }
            Criterion::TechnicalDepth => {
                "Describe architecture decisions, algorithms, and the hardest engineering problem you hit."
            }
            Criterion::ProblemRelevance => {
                "Show who has this problem, how often, and what it costs them today."
            }
            Criterion::Feasibility => {
                "Define the MVP and show which parts already run end to end."
            }
            Criterion::Scalability => {
                "Explain what has to change at 10x and 100x the current load."
            }
            Criterion::Presentation => {
                "Walk through the user journey and the interface decisions behind it."
            }
            Criterion::Impact => "Connect the solution to a concrete, measurable outcome for users.",
        }
    }
}

/// Ordered verdict tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTier {
    NotReady,
    Average,
    StrongContender,
    WinnerMaterial,
}

impl VerdictTier {
    pub const ALL: [VerdictTier; 4] = [
        VerdictTier::NotReady,
        VerdictTier::Average,
        VerdictTier::StrongContender,
        VerdictTier::WinnerMaterial,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            VerdictTier::NotReady => "Not Ready",
            VerdictTier::Average => "Average",
            VerdictTier::StrongContender => "Strong Contender",
            VerdictTier::WinnerMaterial => "Winner Material",
        }
    }
}

/// Categories of low-substance writing that lead to deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyCategory {
    Buzzword,
    Vagueness,
    Overclaim,
    FormulaicContent,
}

impl PenaltyCategory {
    pub const ALL: [PenaltyCategory; 4] = [
        PenaltyCategory::Buzzword,
        PenaltyCategory::Vagueness,
        PenaltyCategory::Overclaim,
        PenaltyCategory::FormulaicContent,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PenaltyCategory::Buzzword => "Buzzword stuffing",
            PenaltyCategory::Vagueness => "Vague descriptions",
            PenaltyCategory::Overclaim => "Overclaiming",
            PenaltyCategory::FormulaicContent => "Formulaic writing",
        }
    }

    pub const fn suggestion(self) -> &'static str {
        match self {
            PenaltyCategory::Buzzword => {
                "Cut the marketing vocabulary and describe what the system actually does."
            }
            PenaltyCategory::Vagueness => {
                "Replace hedges like 'various' and 'etc.' with the concrete items you mean."
            }
            PenaltyCategory::Overclaim => {
                "Back every bold claim with a number, a named technology, or a source."
            }
            PenaltyCategory::FormulaicContent => {
                "Rewrite the templated passages in your own words and drop placeholder text."
            }
        }
    }
}

/// Lexicons held by the judging profile.
///
/// The first four are marker lexicons and only ever lead to deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconKind {
    Buzzword,
    Vagueness,
    Overclaim,
    Formulaic,
    Innovation,
    Differentiator,
    GenericInnovation,
    TechnicalDepth,
    Feasibility,
    ScopeDiscipline,
    AmbitiousScope,
    Documentation,
    PainPoint,
    Audience,
    Scalability,
    Extensibility,
    Sustainability,
    Ux,
    Accessibility,
    Impact,
    Evidence,
}

impl LexiconKind {
    pub const ALL: [LexiconKind; 21] = [
        LexiconKind::Buzzword,
        LexiconKind::Vagueness,
        LexiconKind::Overclaim,
        LexiconKind::Formulaic,
        LexiconKind::Innovation,
        LexiconKind::Differentiator,
        LexiconKind::GenericInnovation,
        LexiconKind::TechnicalDepth,
        LexiconKind::Feasibility,
        LexiconKind::ScopeDiscipline,
        LexiconKind::AmbitiousScope,
        LexiconKind::Documentation,
        LexiconKind::PainPoint,
        LexiconKind::Audience,
        LexiconKind::Scalability,
        LexiconKind::Extensibility,
        LexiconKind::Sustainability,
        LexiconKind::Ux,
        LexiconKind::Accessibility,
        LexiconKind::Impact,
        LexiconKind::Evidence,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_marker(self) -> bool {
        matches!(
            self,
            LexiconKind::Buzzword
                | LexiconKind::Vagueness
                | LexiconKind::Overclaim
                | LexiconKind::Formulaic
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            LexiconKind::Buzzword => "buzzword",
            LexiconKind::Vagueness => "vagueness",
            LexiconKind::Overclaim => "overclaim",
            LexiconKind::Formulaic => "formulaic",
            LexiconKind::Innovation => "innovation",
            LexiconKind::Differentiator => "differentiator",
            LexiconKind::GenericInnovation => "generic_innovation",
            LexiconKind::TechnicalDepth => "technical_depth",
            LexiconKind::Feasibility => "feasibility",
            LexiconKind::ScopeDiscipline => "scope_discipline",
            LexiconKind::AmbitiousScope => "ambitious_scope",
            LexiconKind::Documentation => "documentation",
            LexiconKind::PainPoint => "pain_point",
            LexiconKind::Audience => "audience",
            LexiconKind::Scalability => "scalability",
            LexiconKind::Extensibility => "extensibility",
            LexiconKind::Sustainability => "sustainability",
            LexiconKind::Ux => "ux",
            LexiconKind::Accessibility => "accessibility",
            LexiconKind::Impact => "impact",
            LexiconKind::Evidence => "evidence",
        }
    }
}

/// Shape of a link field after a well-formedness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    Missing,
    Malformed,
    WellFormed,
}

impl LinkStatus {
    pub const fn is_usable(self) -> bool {
        matches!(self, LinkStatus::WellFormed)
    }
}
