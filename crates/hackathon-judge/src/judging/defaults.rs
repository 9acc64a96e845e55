//! Built-in lexicons and thresholds used when no judging profile is supplied.

use std::collections::BTreeMap;

use super::config::{
    FeedbackRules, JudgingConfig, PenaltyThresholds, ScoringRules, VerdictBand,
};
use super::domain::{Criterion, LexiconKind, VerdictTier};

const BUZZWORDS: &[&str] = &[
    "revolutionary",
    "disruptive",
    "game-changing",
    "world-changing",
    "cutting-edge",
    "state-of-the-art",
    "next-generation",
    "next-gen",
    "groundbreaking",
    "paradigm shift",
    "synergy",
    "synergistic",
    "leverage",
    "ecosystem",
    "holistic",
    "seamless",
    "robust",
    "scalable",
    "innovative",
    "transformative",
    "best-in-class",
    "world-class",
    "unprecedented",
    "unique",
    "novel",
    "breakthrough",
    "pioneering",
    "trailblazing",
    "bleeding-edge",
    "ai-powered",
    "blockchain-enabled",
    "cloud-native",
    "future-proof",
    "mission-critical",
    "enterprise-grade",
    "industry-leading",
];

const VAGUENESS: &[&str] = &[
    "and more",
    "etc.",
    "various",
    "multiple",
    "several",
    "many",
    "kind of",
    "sort of",
    "basically",
    "essentially",
    "somehow",
    "something",
    "anything",
    "whatever",
    "stuff",
    "things like",
    "and so on",
    "or something",
    "as needed",
    "if necessary",
    "possibly",
    "could potentially",
];

const OVERCLAIMS: &[&str] = &[
    "will change the world",
    "will revolutionize",
    "first ever",
    "never been done before",
    "completely unique",
    "100% original",
    "no competition",
    "unmatched",
    "unparalleled",
    "guaranteed to",
    "will definitely",
    "scientifically proven",
    "experts agree",
    "billion dollar",
    "unicorn potential",
    "viral growth",
    "hockey stick growth",
    "everyone will use",
];

const FORMULAIC: &[&str] = &[
    "in conclusion",
    "it is important to note",
    "it is worth noting",
    "in today's world",
    "in the realm of",
    "at the end of the day",
    "moving forward",
    "going forward",
    "that being said",
    "having said that",
    "furthermore",
    "moreover",
    "additionally",
    "in summary",
    "in essence",
    "ultimately",
    "delve into",
    "dive deeper",
    "shed light on",
    "harness the power",
    "leveraging the power of",
    "lorem ipsum",
    "[insert",
    "placeholder",
    "tbd",
];

const INNOVATION: &[&str] = &[
    "new method",
    "new technique",
    "fresh perspective",
    "improves upon",
    "addresses the gap",
    "unconventional",
    "reimagined",
    "creative solution",
    "hybrid approach",
    "combines",
    "instead of",
];

const DIFFERENTIATORS: &[&str] = &[
    "unlike",
    "different from",
    "compared to",
    "compared with",
    "instead of",
    "whereas",
    "existing tools",
    "existing solutions",
    "alternatives",
];

const GENERIC_INNOVATION: &[&str] = &[
    "use ai",
    "uses ai",
    "ai solution",
    "machine learning solution",
    "web app",
    "mobile app",
    "an app for",
    "a platform for",
];

const TECHNICAL_DEPTH: &[&str] = &[
    "algorithm",
    "architecture",
    "api",
    "rest api",
    "database",
    "schema",
    "indexing",
    "cache",
    "caching",
    "latency",
    "throughput",
    "optimization",
    "authentication",
    "authorization",
    "encryption",
    "unit tests",
    "integration tests",
    "ci/cd",
    "deployment",
    "monitoring",
    "logging",
    "error handling",
    "edge cases",
    "data structure",
    "time complexity",
    "microservices",
    "docker",
    "kubernetes",
    "graphql",
    "websocket",
    "real-time",
    "machine learning",
    "neural network",
    "model training",
    "inference",
    "pipeline",
    "state machine",
    "protocol",
];

const FEASIBILITY: &[&str] = &[
    "prototype",
    "mvp",
    "working demo",
    "implemented",
    "built",
    "deployed",
    "tested",
    "validated",
    "user feedback",
    "iteration",
    "milestone",
    "roadmap",
    "timeline",
    "budget",
    "constraint",
    "limitation",
    "trade-off",
    "pilot",
];

const SCOPE_DISCIPLINE: &[&str] = &[
    "mvp",
    "prototype",
    "phase 1",
    "initial version",
    "proof of concept",
    "pilot",
];

const AMBITIOUS_SCOPE: &[&str] = &[
    "entire industry",
    "all users",
    "everyone",
    "complete solution",
    "every problem",
];

const DOCUMENTATION: &[&str] = &[
    "readme",
    "documentation",
    "docs",
    "api reference",
    "setup guide",
];

const PAIN_POINTS: &[&str] = &[
    "struggle",
    "struggles",
    "challenge",
    "challenges",
    "difficult",
    "problem",
    "issue",
    "pain point",
    "frustrating",
    "frustration",
    "inefficient",
    "costly",
    "time-consuming",
    "manual",
    "error-prone",
    "delays",
    "wait",
    "waiting",
];

const AUDIENCES: &[&str] = &[
    "developer",
    "developers",
    "student",
    "students",
    "small business",
    "small businesses",
    "enterprise",
    "healthcare",
    "clinics",
    "hospitals",
    "nurses",
    "patients",
    "teachers",
    "education",
    "finance",
    "retail",
    "startups",
    "farmers",
    "volunteers",
    "nonprofits",
    "researchers",
];

const SCALABILITY: &[&str] = &[
    "scale",
    "scaling",
    "scalability",
    "horizontal scaling",
    "load balancing",
    "load balancer",
    "distributed",
    "microservices",
    "container",
    "containers",
    "kubernetes",
    "autoscaling",
    "serverless",
    "sharding",
    "replication",
    "queue",
    "cdn",
    "multi-region",
];

const EXTENSIBILITY: &[&str] = &[
    "plugin",
    "plugins",
    "modular",
    "extensible",
    "api",
    "integration",
    "integrations",
    "webhooks",
    "sdk",
    "customizable",
];

const SUSTAINABILITY: &[&str] = &[
    "revenue",
    "monetization",
    "subscription",
    "freemium",
    "pricing",
    "licensing",
    "grant",
    "partnership",
];

const UX: &[&str] = &[
    "user experience",
    "user interface",
    "ui",
    "ux",
    "design",
    "intuitive",
    "user-friendly",
    "responsive",
    "figma",
    "mockup",
    "wireframe",
    "wireframes",
    "usability",
    "user testing",
    "user research",
    "persona",
    "personas",
    "onboarding",
    "dashboard",
];

const ACCESSIBILITY: &[&str] = &[
    "accessibility",
    "accessible",
    "wcag",
    "a11y",
    "screen reader",
    "keyboard navigation",
    "high contrast",
    "localization",
];

const IMPACT: &[&str] = &[
    "impact",
    "benefit",
    "benefits",
    "improve",
    "improves",
    "save time",
    "saves",
    "save money",
    "reduce",
    "reduces",
    "increase",
    "increases",
    "help",
    "helps",
    "community",
    "society",
    "environment",
    "sustainable",
    "outcomes",
    "lives",
    "access",
];

const EVIDENCE: &[&str] = &[
    "according to",
    "source",
    "survey",
    "surveyed",
    "study",
    "report",
    "measured",
    "benchmark",
    "benchmarked",
    "interviews",
    "interviewed",
    "data from",
    "et al",
];

const TECH_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "frontend",
        &[
            "react",
            "vue",
            "angular",
            "svelte",
            "next.js",
            "nuxt",
            "html",
            "css",
            "javascript",
            "typescript",
            "tailwind",
            "bootstrap",
        ],
    ),
    (
        "backend",
        &[
            "node.js", "express", "django", "flask", "fastapi", "spring", "rails", "laravel", "go",
            "rust", "java", "python", "php", "axum", "actix",
        ],
    ),
    (
        "database",
        &[
            "postgresql",
            "postgres",
            "mysql",
            "mongodb",
            "redis",
            "elasticsearch",
            "firebase",
            "supabase",
            "sqlite",
            "dynamodb",
            "cassandra",
        ],
    ),
    (
        "ml_ai",
        &[
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "keras",
            "huggingface",
            "openai",
            "langchain",
            "opencv",
            "nltk",
            "spacy",
        ],
    ),
    (
        "cloud",
        &[
            "aws",
            "gcp",
            "azure",
            "vercel",
            "netlify",
            "heroku",
            "digitalocean",
            "cloudflare",
            "docker",
            "kubernetes",
        ],
    ),
    (
        "mobile",
        &["react native", "flutter", "swift", "kotlin", "ionic", "expo"],
    ),
    (
        "messaging",
        &[
            "graphql", "websocket", "grpc", "kafka", "rabbitmq", "celery", "stripe", "twilio",
            "sendgrid",
        ],
    ),
];

const EVERYDAY_TECH_TERMS: &[&str] = &[
    "go", "express", "spring", "swift", "rails", "expo", "react", "flask", "rust", "bootstrap",
];

const QUANTITY_UNITS: &[&str] = &[
    "percent",
    "x",
    "ms",
    "milliseconds",
    "seconds",
    "minutes",
    "hours",
    "days",
    "weeks",
    "month",
    "months",
    "years",
    "users",
    "people",
    "patients",
    "students",
    "customers",
    "requests",
    "rps",
    "qps",
    "kb",
    "mb",
    "gb",
    "tb",
    "k",
    "thousand",
    "million",
    "billion",
    "hospitals",
    "clinics",
    "schools",
    "teams",
    "companies",
    "downloads",
    "transactions",
    "queries",
];

const IMPACT_OUTCOMES: &[&str] = &[
    "faster",
    "quicker",
    "better",
    "cheaper",
    "reduction",
    "improvement",
    "fewer",
    "less",
    "more",
    "lower",
    "higher",
    "increase",
    "decrease",
    "savings",
];

const IMPACT_VERBS: &[&str] = &[
    "reduce",
    "reduces",
    "reduced",
    "cut",
    "cuts",
    "improve",
    "improves",
    "improved",
    "increase",
    "increases",
    "increased",
    "lower",
    "lowers",
    "lowered",
    "speed up",
    "speeds up",
];

fn words(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|term| term.to_string()).collect()
}

fn lexicon_terms(kind: LexiconKind) -> &'static [&'static str] {
    match kind {
        LexiconKind::Buzzword => BUZZWORDS,
        LexiconKind::Vagueness => VAGUENESS,
        LexiconKind::Overclaim => OVERCLAIMS,
        LexiconKind::Formulaic => FORMULAIC,
        LexiconKind::Innovation => INNOVATION,
        LexiconKind::Differentiator => DIFFERENTIATORS,
        LexiconKind::GenericInnovation => GENERIC_INNOVATION,
        LexiconKind::TechnicalDepth => TECHNICAL_DEPTH,
        LexiconKind::Feasibility => FEASIBILITY,
        LexiconKind::ScopeDiscipline => SCOPE_DISCIPLINE,
        LexiconKind::AmbitiousScope => AMBITIOUS_SCOPE,
        LexiconKind::Documentation => DOCUMENTATION,
        LexiconKind::PainPoint => PAIN_POINTS,
        LexiconKind::Audience => AUDIENCES,
        LexiconKind::Scalability => SCALABILITY,
        LexiconKind::Extensibility => EXTENSIBILITY,
        LexiconKind::Sustainability => SUSTAINABILITY,
        LexiconKind::Ux => UX,
        LexiconKind::Accessibility => ACCESSIBILITY,
        LexiconKind::Impact => IMPACT,
        LexiconKind::Evidence => EVIDENCE,
    }
}

pub(crate) fn default_weights() -> BTreeMap<Criterion, f64> {
    BTreeMap::from([
        (Criterion::Innovation, 0.25),
        (Criterion::TechnicalDepth, 0.20),
        (Criterion::ProblemRelevance, 0.15),
        (Criterion::Feasibility, 0.15),
        (Criterion::Scalability, 0.10),
        (Criterion::Presentation, 0.10),
        (Criterion::Impact, 0.05),
    ])
}

pub(crate) fn default_lexicons() -> BTreeMap<LexiconKind, Vec<String>> {
    LexiconKind::ALL
        .iter()
        .map(|kind| (*kind, words(lexicon_terms(*kind))))
        .collect()
}

pub(crate) fn default_tech_categories() -> BTreeMap<String, Vec<String>> {
    TECH_CATEGORIES
        .iter()
        .map(|(name, terms)| (name.to_string(), words(terms)))
        .collect()
}

pub(crate) fn default_verdict_bands() -> Vec<VerdictBand> {
    vec![
        VerdictBand {
            tier: VerdictTier::NotReady,
            min: 0.0,
            max: 50.0,
        },
        VerdictBand {
            tier: VerdictTier::Average,
            min: 50.0,
            max: 70.0,
        },
        VerdictBand {
            tier: VerdictTier::StrongContender,
            min: 70.0,
            max: 85.0,
        },
        VerdictBand {
            tier: VerdictTier::WinnerMaterial,
            min: 85.0,
            max: 100.0,
        },
    ]
}

impl Default for JudgingConfig {
    fn default() -> Self {
        Self {
            weights: default_weights(),
            lexicons: default_lexicons(),
            tech_categories: default_tech_categories(),
            everyday_tech_terms: words(EVERYDAY_TECH_TERMS),
            presentation_categories: words(&["frontend", "mobile"]),
            quantity_units: words(QUANTITY_UNITS),
            impact_outcomes: words(IMPACT_OUTCOMES),
            impact_verbs: words(IMPACT_VERBS),
            penalties: PenaltyThresholds::default(),
            scoring: ScoringRules::default(),
            feedback: FeedbackRules::default(),
            verdict_bands: default_verdict_bands(),
        }
    }
}

impl Default for PenaltyThresholds {
    fn default() -> Self {
        Self {
            buzzword_density_threshold: 5.0,
            buzzword_points_per_density: 2.0,
            buzzword_cap: 15.0,
            vagueness_free_per_field: 1,
            vagueness_points_per_marker: 1.5,
            vagueness_cap: 10.0,
            overclaim_points_per_claim: 3.0,
            overclaim_cap: 15.0,
            formulaic_min_phrases: 5,
            formulaic_deduction: 5.0,
            total_cap: 30.0,
        }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            strong_band: 85.0,
            adequate_band: 60.0,
            demo_bonus: 20.0,
            repository_bonus: 10.0,
            missing_demo_ceiling: 70.0,
            repetition_floor: 0.35,
            repetition_min_words: 12,
            repetition_ceiling: 45.0,
        }
    }
}

impl Default for FeedbackRules {
    fn default() -> Self {
        Self {
            strength_threshold: 70.0,
            outstanding_threshold: 85.0,
            weakness_threshold: 60.0,
            critical_threshold: 40.0,
            max_criterion_items: 3,
            max_items: 5,
            comprehensive_word_count: 400,
            penalty_weakness_threshold: 3.0,
        }
    }
}
