use super::common::*;
use crate::judging::signals::{extract, sentences, tokenize, Signal, SignalSet, SignalVector};
use crate::judging::{LexiconKind, LinkStatus, SubmissionSignals, TextField};

#[test]
fn blank_text_yields_zero_vector() {
    let profile = default_profile();
    let vector = extract("   \n\t ", &SignalSet::full(), &profile);

    assert_eq!(vector, SignalVector::default());
    assert_eq!(vector.value(Signal::WordCount), 0.0);
    assert_eq!(vector.value(Signal::LexiconDistinct(LexiconKind::Buzzword)), 0.0);
}

#[test]
fn lexicon_matches_respect_word_boundaries() {
    let profile = default_profile();
    let vector = extract(
        "She said the rapid rollout used an API and a UI kit.",
        &SignalSet::full(),
        &profile,
    );

    let technical = &vector.lexicon_hits[&LexiconKind::TechnicalDepth];
    assert_eq!(technical.count("api"), 1);
    assert_eq!(vector.lexicon_hits[&LexiconKind::Ux].count("ui"), 1);
    assert_eq!(vector.total(LexiconKind::Buzzword), 0);
}

#[test]
fn quantified_claims_need_units() {
    let profile = default_profile();
    let vector = extract(
        "We cut latency to 80 ms for 2,000 users in 2024 and saved $15k.",
        &SignalSet::full(),
        &profile,
    );

    assert_eq!(vector.quantified_claims, 3);
}

#[test]
fn tech_stack_set_skips_quantities() {
    let profile = default_profile();
    let vector = extract(
        "Redis cluster sized for 10 GB",
        &SignalSet::for_field(TextField::TechStack),
        &profile,
    );

    assert_eq!(vector.quantified_claims, 0);
    assert!(!vector.lexicon_hits.contains_key(&LexiconKind::Impact));
}

#[test]
fn unique_ratio_ignores_stop_words() {
    let profile = default_profile();
    let vector = extract(
        "queue queue queue and the queue",
        &SignalSet::full(),
        &profile,
    );

    assert_eq!(vector.word_count, 6);
    assert_eq!(vector.content_word_count, 4);
    assert_eq!(vector.unique_word_ratio, 0.25);
}

#[test]
fn sentences_split_on_terminators_and_lines() {
    let parts = sentences("Built with Node.js. Tested twice!\nShipped? Yes");
    assert_eq!(parts, vec!["Built with Node.js.", "Tested twice!", "Shipped?", "Yes"]);
}

#[test]
fn tokens_keep_inner_joiners() {
    assert_eq!(
        tokenize("real-time, 'quoted' error-prone -- don't"),
        vec!["real-time", "quoted", "error-prone", "don't"]
    );
}

#[test]
fn signal_map_names_lexicon_counts() {
    let profile = default_profile();
    let vector = extract("A modular plugin API.", &SignalSet::full(), &profile);
    let map = vector.to_map();

    assert_eq!(map["word_count"], 4.0);
    assert_eq!(map["extensibility.distinct"], 3.0);
    assert_eq!(map["buzzword.total"], 0.0);
}

#[test]
fn submission_signals_capture_links_and_categories() {
    let profile = default_profile();
    let signals = SubmissionSignals::extract(&care_queue(), &profile);

    assert_eq!(signals.demo, LinkStatus::WellFormed);
    assert_eq!(signals.repository, LinkStatus::WellFormed);
    for category in ["frontend", "backend", "database", "cloud", "messaging"] {
        assert!(
            signals.tech_categories.contains(category),
            "missing {category}"
        );
    }
    assert!(signals.has_presentation_surface(&profile));
    assert!(signals.field(TextField::ProblemStatement).quantified_claims >= 2);
}

#[test]
fn malformed_and_blank_demo_links_are_distinguished() {
    let profile = default_profile();

    let mut submission = care_queue();
    submission.demo_link = Some("carequeue dot org".to_string());
    assert_eq!(
        SubmissionSignals::extract(&submission, &profile).demo,
        LinkStatus::Malformed
    );

    submission.demo_link = Some("   ".to_string());
    assert_eq!(
        SubmissionSignals::extract(&submission, &profile).demo,
        LinkStatus::Missing
    );
}

#[test]
fn extraction_is_deterministic() {
    let profile = default_profile();
    let first = SubmissionSignals::extract(&care_queue(), &profile);
    let second = SubmissionSignals::extract(&care_queue(), &profile);
    assert_eq!(first, second);
}
