//! # MIC Engine Property Tests
//!
//! File: cli/tests/engine.rs
//!
//! ## Overview
//!
//! Library-level tests of the lookup and chat engines through their public
//! API, driving the session with virtual time only.
//!

use mic::engine::chat::{ChatEngine, IdGenerator, Origin, ResponseCorpus, Transcript};
use mic::engine::medicine::{lookup, MedicineCatalog, UNAVAILABLE_SIDE_EFFECTS};
use mic::session::{ChatSubmission, SessionState, SessionUpdate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

const DELAY: Duration = Duration::from_secs(1);

fn session(seed: u64) -> SessionState<StdRng> {
    SessionState::new(DELAY, StdRng::seed_from_u64(seed))
}

#[test]
fn known_keys_match_in_any_case_and_padding() {
    let catalog = MedicineCatalog::seeded();
    let cases = [
        ("paracetamol", "Paracetamol"),
        ("  PARACETAMOL ", "Paracetamol"),
        ("IbUpRoFeN", "Ibuprofen"),
        ("\taspirin\n", "Aspirin"),
    ];
    for (input, expected) in cases {
        let record = lookup(&catalog, input);
        assert_eq!(record.name, expected, "input {input:?}");
        assert!(!record.is_unavailable());
    }
}

#[test]
fn unknown_names_echo_the_exact_input() {
    let catalog = MedicineCatalog::seeded();
    for input in ["vitaminZ", " Vitamin Z ", "paracetamol500", "asp irin"] {
        let record = lookup(&catalog, input);
        assert_eq!(record.name, input);
        assert_eq!(record.side_effects, UNAVAILABLE_SIDE_EFFECTS);
        assert!(record.is_unavailable());
    }
}

#[test]
fn n_submissions_yield_two_n_messages_in_pairs() {
    let mut session = session(21);
    let inputs = ["Hello", "  ", "Is aspirin safe?", "", "Thanks", "\t"];
    let accepted = inputs.iter().filter(|t| !t.trim().is_empty()).count();

    for text in inputs {
        session.submit_chat(text);
        session.advance_by(DELAY);
    }

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 2 * accepted);
    for pair in transcript.messages().chunks(2) {
        assert_eq!(pair[0].origin, Origin::User);
        assert_eq!(pair[1].origin, Origin::Bot);
        assert!(pair[0].id < pair[1].id);
    }
}

#[test]
fn every_bot_reply_comes_from_the_corpus() {
    let corpus = ResponseCorpus::default();
    let mut session = session(3);
    for i in 0..50 {
        session.submit_chat(&format!("question {i}"));
    }
    session.advance_by(DELAY);
    assert!(session.is_idle());
    for message in session.transcript().iter().filter(|m| m.is_bot()) {
        assert!(corpus.contains(&message.text));
    }
}

#[test]
fn reply_selection_is_uniform() {
    let corpus = ResponseCorpus::default();
    let mut engine = ChatEngine::new(corpus.clone(), StdRng::seed_from_u64(2024));
    let draws = 7_000;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        *counts.entry(engine.select_reply().to_string()).or_default() += 1;
    }

    assert_eq!(counts.len(), corpus.len());
    let expected = draws / corpus.len();
    for (reply, count) in counts {
        let deviation = count.abs_diff(expected) as f64 / expected as f64;
        assert!(deviation < 0.15, "{reply:?} drawn {count} times, expected ~{expected}");
    }
}

#[test]
fn same_tick_messages_get_distinct_ids() {
    let mut session = session(8);
    for _ in 0..10 {
        session.submit_chat("same instant");
    }
    session.advance_by(DELAY);

    let ids: HashSet<_> = session.transcript().iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), 20);

    let mut generator = IdGenerator::new();
    assert_ne!(generator.issue(Duration::ZERO), generator.issue(Duration::ZERO));
}

#[test]
fn hello_gets_a_user_message_now_and_a_bot_message_one_second_later() {
    let mut session = session(1);
    assert!(matches!(session.submit_chat("Hello"), ChatSubmission::Scheduled(_)));
    assert_eq!(session.transcript().len(), 1);
    assert_eq!(session.transcript().messages()[0].text, "Hello");

    assert!(session.advance_by(Duration::from_millis(999)).is_empty());
    assert_eq!(session.transcript().len(), 1);

    let updates = session.advance_by(Duration::from_millis(1));
    assert_eq!(updates.len(), 1);
    assert!(matches!(updates[0], SessionUpdate::MessageAppended(_)));
    assert_eq!(session.transcript().len(), 2);
    assert!(ResponseCorpus::default().contains(&session.transcript().messages()[1].text));
}

#[test]
fn seeded_sessions_reply_identically() {
    let replies = |seed| {
        let mut session = session(seed);
        for text in ["one", "two", "three", "four"] {
            session.submit_chat(text);
        }
        session.advance_by(DELAY);
        session
            .transcript()
            .iter()
            .filter(|m| m.is_bot())
            .map(|m| m.text.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(replies(77), replies(77));
}

#[test]
fn transcript_starts_empty() {
    assert!(Transcript::new().is_empty());
    assert!(session(0).transcript().is_empty());
}
