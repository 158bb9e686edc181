// Integration tests for the word-scramble application
// These tests verify that all modules work together correctly

use std::io::Cursor;
use word_scramble::cli::CliInterface;
use word_scramble::wordlist::{EMBEDDED_DICTIONARY, EMBEDDED_START_WORDS};
use word_scramble::*;

fn embedded_dictionary() -> WordListDictionary {
    WordListDictionary::new(load_words_from_str(EMBEDDED_DICTIONARY))
}

#[test]
fn test_end_to_end_round_through_cli() {
    // Root word is fixed; the player enters a mix of valid and invalid words
    let mut source = SequenceWordSource::new(["temperament"]);
    let dictionary = embedded_dictionary();
    let input = "meter\n  TRAM  \nxyz\nmeter\ntemperament\n\n:exit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let state = game_loop(&mut interface, &mut source, &dictionary).unwrap();

    assert_eq!(state.history(), ["tram", "meter"]);
    assert_eq!(state.score(), 9);
}

#[test]
fn test_cli_end_of_input_ends_game() {
    let mut source = SequenceWordSource::new(["temperament"]);
    let dictionary = embedded_dictionary();
    let mut interface = CliInterface::new(Cursor::new("meter\n"));

    let state = game_loop(&mut interface, &mut source, &dictionary).unwrap();
    assert_eq!(state.score(), 5);
}

#[test]
fn test_cli_restart_draws_next_root() {
    let mut source = SequenceWordSource::new(["temperament", "painters"]);
    let dictionary = embedded_dictionary();
    let input = "meter\n:restart\npaint\nmeter\n:quit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    let state = game_loop(&mut interface, &mut source, &dictionary).unwrap();

    assert_eq!(state.root_word(), "painters");
    // "meter" cannot be formed from "painters"
    assert_eq!(state.history(), ["paint"]);
    assert_eq!(state.score(), 5);
}

#[test]
fn test_temperament_examples() {
    let dictionary = embedded_dictionary();
    let state = RoundState::with_root_word("temperament").unwrap();

    assert_eq!(
        validate("meter", &state, &dictionary),
        Ok("meter".to_string())
    );
    assert_eq!(
        validate("temperament", &state, &dictionary),
        Err(RejectReason::NotAllowed)
    );
    assert_eq!(
        validate("xyz", &state, &dictionary),
        Err(RejectReason::NotPossible)
    );
    assert_eq!(validate("   ", &state, &dictionary), Err(RejectReason::Empty));

    let state = state.commit("meter");
    assert_eq!(state.score(), 5);
    assert_eq!(state.history(), ["meter"]);
}

#[test]
fn test_resubmission_is_not_original_even_if_unknown_word() {
    // A dictionary that knows nothing cannot mask the originality rule
    let nothing = |_: &str| false;
    let state = RoundState::with_root_word("temperament")
        .unwrap()
        .commit("meter");

    assert_eq!(
        validate("METER ", &state, &nothing),
        Err(RejectReason::NotOriginal)
    );
}

#[test]
fn test_every_embedded_root_has_playable_words() {
    let dictionary = embedded_dictionary();
    let roots = load_words_from_str(EMBEDDED_START_WORDS);
    let words = load_words_from_str(EMBEDDED_DICTIONARY);

    for root in &roots {
        let state = RoundState::with_root_word(root.as_str()).unwrap();
        let playable = words
            .iter()
            .filter(|w| validate(w, &state, &dictionary).is_ok())
            .count();
        assert!(playable >= 10, "'{root}' only has {playable} playable words");
    }
}

#[test]
fn test_random_source_round_trip_with_embedded_lists() {
    let roots = load_words_from_str(EMBEDDED_START_WORDS);
    let mut source = RandomWordSource::with_seed(roots.clone(), 2024).unwrap();
    let dictionary = embedded_dictionary();

    let mut state = RoundState::start(&mut source).unwrap();
    assert!(roots.contains(&state.root_word().to_string()));

    // Play every playable dictionary word once
    let words = load_words_from_str(EMBEDDED_DICTIONARY);
    for word in &words {
        let (next, _) = apply_candidate(state, word, &dictionary);
        state = next;
    }

    let total: usize = state.history().iter().map(|w| w.chars().count()).sum();
    assert_eq!(state.score(), total);
    assert!(!state.history().is_empty());

    // A second pass adds nothing: every word is now already used or invalid
    let before = state.clone();
    for word in &words {
        let (next, outcome) = apply_candidate(state, word, &dictionary);
        assert!(outcome.is_err());
        state = next;
    }
    assert_eq!(state, before);

    let state = state.restart(&mut source).unwrap();
    assert_eq!(state.score(), 0);
    assert!(state.history().is_empty());
}

#[test]
fn test_custom_word_list_files_to_game() {
    // Integration test: load custom lists from files -> play a round
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let roots_path = temp_dir.join("word_scramble_test_roots.txt");
    let dictionary_path = temp_dir.join("word_scramble_test_dictionary.txt");

    {
        let mut file = File::create(&roots_path).unwrap();
        writeln!(file, "Lanterns").unwrap();
        let mut file = File::create(&dictionary_path).unwrap();
        writeln!(file, "antler").unwrap();
        writeln!(file, "rental").unwrap();
        writeln!(file, "slant").unwrap();
    }

    let roots = load_words_from_file(&roots_path).unwrap();
    assert_eq!(roots, ["lanterns"]);
    let dictionary = WordListDictionary::new(load_words_from_file(&dictionary_path).unwrap());

    let mut source = RandomWordSource::new(roots).unwrap();
    let input = "antler\nrental\nslants\nlantern\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let state = game_loop(&mut interface, &mut source, &dictionary).unwrap();

    // "slants" needs two s's, "lantern" is not in this dictionary
    assert_eq!(state.history(), ["rental", "antler"]);
    assert_eq!(state.score(), 12);

    std::fs::remove_file(&roots_path).unwrap();
    std::fs::remove_file(&dictionary_path).unwrap();
}

#[test]
fn test_empty_start_word_list_is_fatal() {
    let result = RandomWordSource::new(load_words_from_str("ab\n12345\n"));
    assert_eq!(result.unwrap_err(), WordSourceError::EmptyWordList);
}
