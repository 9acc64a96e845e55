use crate::infra::load_judging_profile;
use clap::Args;
use hackathon_judge::error::AppError;
use hackathon_judge::judging::{
    Judge, Leaderboard, LeaderboardStatistics, ScoreResult, Standings, Submission, SubmissionId,
    DEFAULT_PODIUM_SIZE,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Judging profile JSON to score with (defaults to the built-in profile)
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Number of podium places to flag on the leaderboard
    #[arg(long)]
    pub(crate) podium: Option<usize>,
    /// Print only the leaderboard, skipping per-submission reports
    #[arg(long)]
    pub(crate) leaderboard_only: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        profile,
        podium,
        leaderboard_only,
    } = args;

    let profile = load_judging_profile(profile.as_deref())?;
    let judge = Judge::new(Arc::new(profile));

    println!("Hackathon judging demo");
    let mut board = Leaderboard::with_podium(podium.unwrap_or(DEFAULT_PODIUM_SIZE));
    for (id, submission) in sample_submissions() {
        let result = judge.evaluate(&submission)?;
        if !leaderboard_only {
            render_score_report(&id, &result);
        }
        board.insert(id, result);
    }

    render_standings(&board.standings(), &board.statistics());
    Ok(())
}

pub(crate) fn render_score_report(id: &SubmissionId, result: &ScoreResult) {
    println!("\n{} [{}]", result.title, id);
    println!(
        "Final score: {:.1} ({}) | weighted {:.1} | penalties -{:.1}",
        result.final_score,
        result.verdict.label(),
        result.weighted_score,
        result.total_penalty
    );

    println!("Criteria");
    for criterion in &result.criteria {
        println!(
            "- {}: {:.1} (weight {:.2})",
            criterion.name, criterion.score, criterion.weight
        );
        println!("    {}", criterion.rationale);
    }

    if result.penalties.is_empty() {
        println!("Penalties: none");
    } else {
        println!("Penalties");
        for record in &result.penalties {
            println!(
                "- {}: {} instance(s), -{:.1}",
                record.category.label(),
                record.count,
                record.deduction
            );
        }
    }

    let Some(feedback) = &result.feedback else {
        return;
    };
    println!("Strengths");
    for strength in &feedback.strengths {
        println!("- {}", strength.detail);
    }
    if !feedback.weaknesses.is_empty() {
        println!("Weaknesses");
        for weakness in &feedback.weaknesses {
            println!("- {}", weakness.detail);
        }
    }
    println!("Suggestions");
    for suggestion in &feedback.suggestions {
        println!("- {suggestion}");
    }
    println!("Verdict: {}", feedback.narrative);
}

pub(crate) fn render_standings(standings: &Standings, statistics: &LeaderboardStatistics) {
    println!("\nLeaderboard");
    for entry in &standings.entries {
        let marker = if entry.podium { "*" } else { " " };
        println!(
            "{marker} #{} {} ({}) {:.1} {}",
            entry.rank,
            entry.result.title,
            entry.id,
            entry.result.final_score,
            entry.result.verdict.label()
        );
    }

    if let Some(explanation) = &standings.explanation {
        println!("\nWhy #1 leads: {}", explanation.summary);
    }

    println!(
        "\nField: {} submissions | mean {:.1} | high {:.1} | low {:.1}",
        statistics.total, statistics.mean, statistics.highest, statistics.lowest
    );
    for (tier, count) in &statistics.tier_counts {
        println!("- {}: {}", tier.label(), count);
    }
}

fn sample_submissions() -> Vec<(SubmissionId, Submission)> {
    vec![
        (
            SubmissionId("meal-bridge".to_string()),
            Submission {
                title: "MealBridge".to_string(),
                team_size: 4,
                problem_statement: "School cafeterias discard 25% of prepared meals while \
                    nearby shelters run short. Staff told us coordination happens over phone \
                    calls, which is slow and frustrating, and a 2023 district audit counted \
                    1,200 meals wasted each week."
                    .to_string(),
                solution_description: "MealBridge is a web app backed by a REST API and a \
                    PostgreSQL database. A matching algorithm pairs surplus trays with shelters \
                    by pickup window and distance, and a WebSocket feed pushes real-time offers \
                    to drivers. We built the prototype in 30 hours, tested it with 5 cafeteria \
                    managers, and documented setup in the README."
                    .to_string(),
                tech_stack: "React, Node.js, Express, PostgreSQL, Redis, Docker, AWS".to_string(),
                innovation_description: "Unlike donation hotlines, MealBridge pushes offers to \
                    the closest shelter first instead of waiting for calls. In our pilot it cut \
                    pickup time by 35%."
                    .to_string(),
                repository_link: "https://github.com/mealbridge/mealbridge".to_string(),
                demo_link: Some("https://mealbridge.example.org/demo".to_string()),
                target_users: "Cafeteria managers, shelter coordinators, and volunteer drivers \
                    in urban school districts."
                    .to_string(),
                future_scope: "Next we will add an integration with district inventory systems \
                    and autoscaling workers so the service can scale to 40 schools. A $20 \
                    monthly subscription per district covers hosting."
                    .to_string(),
            },
        ),
        (
            SubmissionId("quiz-pal".to_string()),
            Submission {
                title: "QuizPal".to_string(),
                team_size: 2,
                problem_statement: "Students forget material between lectures.".to_string(),
                solution_description: "A flashcard app that builds quizzes from lecture notes. \
                    We made a prototype with a simple card view."
                    .to_string(),
                tech_stack: "Python, Flask, SQLite".to_string(),
                innovation_description: "Quizzes are generated from the notes students already \
                    take."
                    .to_string(),
                repository_link: "https://github.com/quizpal/quizpal".to_string(),
                demo_link: None,
                target_users: "University students.".to_string(),
                future_scope: "Add spaced repetition and sharing.".to_string(),
            },
        ),
        (
            SubmissionId("hyper-nexus".to_string()),
            Submission {
                title: "HyperNexus".to_string(),
                team_size: 3,
                problem_statement: "The world needs a revolutionary paradigm shift.".to_string(),
                solution_description: "A disruptive, cutting-edge, AI-powered ecosystem with \
                    seamless synergy that will revolutionize everything."
                    .to_string(),
                tech_stack: "Next-generation, cloud-native, enterprise-grade stack".to_string(),
                innovation_description: "Completely unique and unparalleled. It has never been \
                    done before."
                    .to_string(),
                repository_link: "https://github.com/hypernexus/core".to_string(),
                demo_link: Some("hypernexus dot io".to_string()),
                target_users: "Everyone will use it.".to_string(),
                future_scope: "It will change the world with unicorn potential.".to_string(),
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hackathon_judge::judging::{JudgingConfig, JudgingProfile, VerdictTier};

    fn judge() -> Judge {
        Judge::new(Arc::new(
            JudgingProfile::from_config(JudgingConfig::default()).expect("defaults load"),
        ))
    }

    #[test]
    fn samples_all_evaluate() {
        let judge = judge();
        for (id, submission) in sample_submissions() {
            let result = judge
                .evaluate(&submission)
                .unwrap_or_else(|err| panic!("{id} failed: {err}"));
            assert!(result.feedback.is_some());
        }
    }

    #[test]
    fn samples_spread_across_the_board() {
        let judge = judge();
        let standings = Leaderboard::rank(
            sample_submissions().into_iter().map(|(id, submission)| {
                let result = judge.evaluate(&submission).expect("sample evaluates");
                (id, result)
            }),
            DEFAULT_PODIUM_SIZE,
        );

        assert_eq!(standings.entries.len(), 3);
        assert_eq!(standings.entries[0].id.as_str(), "meal-bridge");
        let hype = standings
            .entries
            .iter()
            .find(|entry| entry.id.as_str() == "hyper-nexus")
            .expect("hype ranked");
        assert_eq!(hype.result.verdict, VerdictTier::NotReady);
        assert!(hype.result.total_penalty > 0.0);
    }

    #[test]
    fn demo_runs_with_default_profile() {
        run_demo(DemoArgs {
            leaderboard_only: true,
            ..DemoArgs::default()
        })
        .expect("demo completes");
    }
}
