// Property tests for the round invariants and the rule pipeline

use proptest::prelude::*;
use std::collections::BTreeMap;
use word_scramble::*;

fn everything_is_real(_: &str) -> bool {
    true
}

/// Reference sub-multiset check, written independently of the crate's version.
fn sub_multiset(candidate: &str, root: &str) -> bool {
    let count = |s: &str| {
        let mut counts = BTreeMap::new();
        for c in s.chars() {
            *counts.entry(c).or_insert(0usize) += 1;
        }
        counts
    };
    let root_counts = count(root);
    count(candidate)
        .iter()
        .all(|(c, n)| root_counts.get(c).copied().unwrap_or(0) >= *n)
}

fn play_all(root: &str, candidates: &[String]) -> RoundState {
    let mut state = RoundState::with_root_word(root).unwrap();
    for candidate in candidates {
        let (next, _) = apply_candidate(state, candidate, &everything_is_real);
        state = next;
    }
    state
}

proptest! {
    #[test]
    fn score_is_total_length_of_history(
        root in "[a-z]{3,10}",
        candidates in prop::collection::vec("[a-eA-E ]{0,6}", 0..40),
    ) {
        let state = play_all(&root, &candidates);
        let total: usize = state.history().iter().map(|w| w.chars().count()).sum();
        prop_assert_eq!(state.score(), total);
    }

    #[test]
    fn history_respects_round_invariants(
        root in "[a-e]{3,10}",
        candidates in prop::collection::vec("[a-e]{0,6}", 0..40),
    ) {
        let state = play_all(&root, &candidates);
        let history = state.history();
        for (i, word) in history.iter().enumerate() {
            prop_assert_ne!(word.as_str(), state.root_word());
            prop_assert!(word.chars().count() >= 3);
            prop_assert!(sub_multiset(word, state.root_word()));
            prop_assert!(!history[i + 1..].contains(word));
        }
    }

    #[test]
    fn derivability_matches_sub_multiset(
        candidate in "[a-f]{0,8}",
        root in "[a-f]{3,10}",
    ) {
        prop_assert_eq!(is_derivable(&candidate, &root), sub_multiset(&candidate, &root));
    }

    #[test]
    fn not_possible_exactly_when_not_derivable(
        candidate in "[a-f]{3,8}",
        root in "[a-f]{3,10}",
    ) {
        prop_assume!(candidate != root);
        let state = RoundState::with_root_word(root.as_str()).unwrap();
        let outcome = validate(&candidate, &state, &everything_is_real);
        if sub_multiset(&candidate, &root) {
            prop_assert_eq!(outcome, Ok(candidate));
        } else {
            prop_assert_eq!(outcome, Err(RejectReason::NotPossible));
        }
    }

    #[test]
    fn validate_is_idempotent_and_pure(
        root in "[a-e]{3,10}",
        played in prop::collection::vec("[a-e]{3,5}", 0..10),
        candidate in "[a-eA-E ]{0,8}",
    ) {
        let state = play_all(&root, &played);
        let before = state.clone();
        let first = validate(&candidate, &state, &everything_is_real);
        for _ in 0..3 {
            prop_assert_eq!(validate(&candidate, &state, &everything_is_real), first.clone());
        }
        prop_assert_eq!(state, before);
    }

    #[test]
    fn root_word_is_always_not_allowed(root in "[a-z]{3,12}", padding in " {0,3}") {
        let state = RoundState::with_root_word(root.as_str()).unwrap();
        let nothing = |_: &str| false;
        let candidate = format!("{padding}{}{padding}", root.to_uppercase());
        prop_assert_eq!(
            validate(&candidate, &state, &nothing),
            Err(RejectReason::NotAllowed)
        );
    }

    #[test]
    fn restart_always_yields_empty_round(
        root in "[a-e]{3,10}",
        candidates in prop::collection::vec("[a-e]{3,6}", 0..20),
        next_root in "[a-z]{3,10}",
    ) {
        let state = play_all(&root, &candidates);
        let mut source = SequenceWordSource::new([next_root.clone()]);
        let state = state.restart(&mut source).unwrap();
        prop_assert_eq!(state.root_word(), next_root.as_str());
        prop_assert_eq!(state.score(), 0);
        prop_assert!(state.history().is_empty());
    }
}
