//! Root word providers.
//!
//! A [`WordSource`] is injected into every round so the engine never reaches
//! for ambient global state. [`RandomWordSource`] backs real play,
//! [`SequenceWordSource`] gives fixed, repeatable draws.

use crate::error::WordSourceError;
use crate::wordlist::MIN_WORD_LENGTH;
use crate::debug_log;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub trait WordSource {
    /// Draws the root word for a new round.
    fn draw(&mut self) -> Result<String, WordSourceError>;
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn draw(&mut self) -> Result<String, WordSourceError> {
        (**self).draw()
    }
}

/// Checks a word against the root word contract: lowercase letters, at least three of them.
pub fn check_root_word(word: &str) -> Result<(), WordSourceError> {
    let valid = word.chars().count() >= MIN_WORD_LENGTH
        && word.chars().all(|c| c.is_alphabetic() && !c.is_uppercase());
    if valid {
        Ok(())
    } else {
        Err(WordSourceError::InvalidRootWord(word.to_string()))
    }
}

fn usable_roots(words: Vec<String>) -> Result<Vec<String>, WordSourceError> {
    let words: Vec<String> = words
        .into_iter()
        .filter(|w| check_root_word(w).is_ok())
        .collect();
    if words.is_empty() {
        return Err(WordSourceError::EmptyWordList);
    }
    Ok(words)
}

/// Uniform random draw from a fixed word list.
#[derive(Debug)]
pub struct RandomWordSource {
    words: Vec<String>,
    rng: StdRng,
}

impl RandomWordSource {
    pub fn new(words: Vec<String>) -> Result<Self, WordSourceError> {
        Ok(Self {
            words: usable_roots(words)?,
            rng: StdRng::from_entropy(),
        })
    }

    /// Same as [`RandomWordSource::new`] but with a reproducible sequence of draws.
    pub fn with_seed(words: Vec<String>, seed: u64) -> Result<Self, WordSourceError> {
        Ok(Self {
            words: usable_roots(words)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for RandomWordSource {
    fn draw(&mut self) -> Result<String, WordSourceError> {
        let word = self
            .words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(WordSourceError::EmptyWordList)?;
        debug_log!("RandomWordSource::draw() - drew '{}'", word);
        Ok(word)
    }
}

/// Hands out the given words in order, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceWordSource {
    words: Vec<String>,
    next: usize,
}

impl SequenceWordSource {
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl WordSource for SequenceWordSource {
    fn draw(&mut self) -> Result<String, WordSourceError> {
        if self.words.is_empty() {
            return Err(WordSourceError::EmptyWordList);
        }
        let word = self.words[self.next % self.words.len()].clone();
        self.next = (self.next + 1) % self.words.len();
        check_root_word(&word)?;
        Ok(word)
    }
}
