//! State of a single round: the root word, the accepted words and the score.
//!
//! Every transition takes `self` by value and hands back a new state, so a
//! round is always observed either entirely before or entirely after a
//! transition. Rule checking lives in [`crate::validation`]; this module only
//! applies outcomes that have already been accepted.

use crate::error::WordSourceError;
use crate::info_log;
use crate::word_source::{WordSource, check_root_word};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    history: Vec<String>,
    score: usize,
}

impl RoundState {
    /// Begins a round with a root word drawn from `source`.
    pub fn start<S: WordSource + ?Sized>(source: &mut S) -> Result<Self, WordSourceError> {
        let root_word = source.draw()?;
        let state = Self::with_root_word(root_word)?;
        info_log!("Round started with root word '{}'", state.root_word);
        Ok(state)
    }

    /// Begins a round with a known root word, checked against the root word contract.
    pub fn with_root_word(root_word: impl Into<String>) -> Result<Self, WordSourceError> {
        let root_word = root_word.into();
        check_root_word(&root_word)?;
        Ok(Self {
            root_word,
            history: Vec::new(),
            score: 0,
        })
    }

    /// Discards this round and starts a fresh one from a new draw.
    pub fn restart<S: WordSource + ?Sized>(self, source: &mut S) -> Result<Self, WordSourceError> {
        info_log!(
            "Restarting round '{}' ({} words, score {})",
            self.root_word,
            self.history.len(),
            self.score
        );
        Self::start(source)
    }

    /// Records a word that has already been accepted by [`crate::validation::validate`].
    ///
    /// No checks are made here: committing a word that was not validated
    /// against this state breaks the round invariants.
    #[must_use]
    pub fn commit(mut self, word: impl Into<String>) -> Self {
        let word = word.into();
        self.score += word.chars().count();
        self.history.insert(0, word);
        self
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn contains(&self, word: &str) -> bool {
        self.history.iter().any(|w| w == word)
    }
}
