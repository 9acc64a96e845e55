//! End-to-end judging scenarios driven through the public crate surface.
//!
//! Submissions are evaluated against a shared profile handle, ranked, and
//! explained without touching private modules.

mod common {
    use hackathon_judge::judging::{JudgingConfig, JudgingProfile, ProfileHandle, Submission};

    pub(super) fn profiles() -> ProfileHandle {
        ProfileHandle::new(
            JudgingProfile::from_config(JudgingConfig::default()).expect("defaults are valid"),
        )
    }

    pub(super) fn grounded() -> Submission {
        Submission {
            title: "HarvestLink".to_string(),
            team_size: 3,
            problem_statement: "Small farms throw away 30% of their produce because buyers \
                cannot find them in time. Growers told us that manual phone calls are slow and \
                frustrating, and unsold crates cost each farm money every week."
                .to_string(),
            solution_description: "HarvestLink is a web app with a REST API and a PostgreSQL \
                database that matches surplus produce with local food banks. A matching \
                algorithm ranks buyers by distance and pickup window. We built the prototype \
                during the event and tested it with 6 growers."
                .to_string(),
            tech_stack: "React, Node.js, PostgreSQL, Docker".to_string(),
            innovation_description: "Unlike classified boards, HarvestLink pushes offers to \
                nearby buyers instead of waiting for them to search."
                .to_string(),
            repository_link: "https://github.com/harvestlink/app".to_string(),
            demo_link: Some("https://harvestlink.example.net".to_string()),
            target_users: "Small farms, food banks, and community kitchens.".to_string(),
            future_scope: "Add SMS alerts and a plugin for delivery partners.".to_string(),
        }
    }

    pub(super) fn hype() -> Submission {
        Submission {
            title: "OmniChain".to_string(),
            team_size: 5,
            problem_statement: "Everything is broken.".to_string(),
            solution_description: "A revolutionary, disruptive, game-changing, AI-powered \
                platform that will revolutionize everything with seamless synergy."
                .to_string(),
            tech_stack: "Cutting-edge, next-generation, cloud-native stack".to_string(),
            innovation_description: "Completely unique. It has never been done before."
                .to_string(),
            repository_link: "https://github.com/omnichain/omnichain".to_string(),
            demo_link: None,
            target_users: "Everyone will use it.".to_string(),
            future_scope: "It will change the world with unicorn potential.".to_string(),
        }
    }
}

use common::*;
use hackathon_judge::judging::{
    Criterion, JudgingConfig, Leaderboard, SubmissionId, VerdictTier, DEFAULT_PODIUM_SIZE,
};

#[test]
fn evaluations_feed_a_ranked_leaderboard() {
    let profiles = profiles();
    let judge = profiles.judge();

    let grounded = judge.evaluate(&grounded()).expect("grounded evaluates");
    let hype = judge.evaluate(&hype()).expect("hype evaluates");

    assert!(grounded.final_score > hype.final_score);
    assert_eq!(hype.verdict, VerdictTier::NotReady);
    assert!(hype.total_penalty > 0.0);
    assert!(grounded.feedback.is_some());

    let standings = Leaderboard::rank(
        [
            (SubmissionId("omnichain".to_string()), hype),
            (SubmissionId("harvestlink".to_string()), grounded),
        ],
        DEFAULT_PODIUM_SIZE,
    );

    assert_eq!(standings.entries[0].id.as_str(), "harvestlink");
    assert_eq!(standings.entries[0].rank, 1);
    let explanation = standings.explanation.expect("two entries explained");
    assert!(explanation.summary.starts_with("harvestlink leads omnichain by"));
    assert!(explanation.fewer_deductions);
}

#[test]
fn profile_swap_leaves_in_flight_judges_untouched() {
    let profiles = profiles();
    let before = profiles.judge();

    let mut config = JudgingConfig::default();
    config.weights.insert(Criterion::Innovation, 0.15);
    config.weights.insert(Criterion::Feasibility, 0.25);
    profiles.replace(config).expect("valid profile");

    let after = profiles.judge();
    assert_eq!(before.profile().weight(Criterion::Innovation), 0.25);
    assert_eq!(after.profile().weight(Criterion::Innovation), 0.15);

    let old = before.evaluate(&grounded()).expect("evaluates");
    let new = after.evaluate(&grounded()).expect("evaluates");
    let old_weight = old
        .criterion(Criterion::Feasibility)
        .map(|criterion| criterion.weight);
    let new_weight = new
        .criterion(Criterion::Feasibility)
        .map(|criterion| criterion.weight);
    assert_eq!(old_weight, Some(0.15));
    assert_eq!(new_weight, Some(0.25));
}

#[test]
fn rejected_profile_is_never_observed() {
    let profiles = profiles();
    let mut config = JudgingConfig::default();
    config.verdict_bands.pop();

    assert!(profiles.replace(config).is_err());
    assert_eq!(profiles.snapshot().verdict_scale().bands().len(), 4);
}

#[test]
fn results_serialise_with_snake_case_tags() {
    let result = profiles()
        .judge()
        .evaluate(&hype())
        .expect("evaluates");

    let value = serde_json::to_value(&result).expect("serialises");
    assert_eq!(value["verdict"], serde_json::json!("not_ready"));
    assert_eq!(value["facts"]["demo"], serde_json::json!("missing"));
    assert!(value["penalties"]
        .as_array()
        .expect("penalty list")
        .iter()
        .any(|record| record["category"] == "buzzword"));
}
