//! The ordered rule pipeline deciding whether a candidate is accepted.
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. empty after normalization ([`RejectReason::Empty`])
//! 2. equal to the root word ([`RejectReason::NotAllowed`])
//! 3. shorter than [`MIN_WORD_LENGTH`] ([`RejectReason::TooShort`])
//! 4. not buildable from the root's letters ([`RejectReason::NotPossible`])
//! 5. already accepted this round ([`RejectReason::NotOriginal`])
//! 6. unknown to the dictionary ([`RejectReason::NotReal`])
//!
//! Letters are counted as Unicode scalar values (`char`) throughout, for
//! length, derivability and scoring alike.

use crate::dictionary::DictionaryOracle;
use crate::round_state::RoundState;
use crate::wordlist::MIN_WORD_LENGTH;
use crate::debug_log;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    #[error("no word entered")]
    Empty,
    #[error("the root word itself is not allowed")]
    NotAllowed,
    #[error("word is shorter than 3 letters")]
    TooShort,
    #[error("word cannot be formed from the root word")]
    NotPossible,
    #[error("word has already been used")]
    NotOriginal,
    #[error("word is not in the dictionary")]
    NotReal,
}

/// Lowercases and trims a raw candidate. All rules operate on this form.
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// True when every letter of `candidate` is available in `root`, counting repeats.
pub fn is_derivable(candidate: &str, root: &str) -> bool {
    let mut pool = letter_counts(root);
    for c in candidate.chars() {
        match pool.get_mut(&c) {
            Some(remaining) if *remaining > 0 => *remaining -= 1,
            _ => return false,
        }
    }
    true
}

/// Runs the rule pipeline for `candidate` against `state`.
///
/// Returns the normalized word on acceptance. Never modifies `state`; the
/// caller commits accepted words with [`RoundState::commit`].
pub fn validate<D: DictionaryOracle + ?Sized>(
    candidate: &str,
    state: &RoundState,
    dictionary: &D,
) -> Result<String, RejectReason> {
    let word = normalize(candidate);
    let outcome = check_rules(&word, state, dictionary);
    if let Err(reason) = &outcome {
        debug_log!(
            "validate() - '{}' rejected for '{}': {:?}",
            word,
            state.root_word(),
            reason
        );
    } else {
        debug_log!("validate() - '{}' accepted for '{}'", word, state.root_word());
    }
    outcome.map(|()| word)
}

fn check_rules<D: DictionaryOracle + ?Sized>(
    word: &str,
    state: &RoundState,
    dictionary: &D,
) -> Result<(), RejectReason> {
    if word.is_empty() {
        return Err(RejectReason::Empty);
    }
    if word == state.root_word() {
        return Err(RejectReason::NotAllowed);
    }
    if word.chars().count() < MIN_WORD_LENGTH {
        return Err(RejectReason::TooShort);
    }
    if !is_derivable(word, state.root_word()) {
        return Err(RejectReason::NotPossible);
    }
    if state.contains(word) {
        return Err(RejectReason::NotOriginal);
    }
    if !dictionary.is_real_word(word) {
        return Err(RejectReason::NotReal);
    }
    Ok(())
}
