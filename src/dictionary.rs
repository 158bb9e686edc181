use std::collections::HashSet;

/// Answers whether a normalized candidate is a real word.
///
/// Implementations must give the same answer for the same input for the life
/// of the process. A lookup that cannot be completed answers `false`.
pub trait DictionaryOracle {
    fn is_real_word(&self, candidate: &str) -> bool;
}

impl<F> DictionaryOracle for F
where
    F: Fn(&str) -> bool,
{
    fn is_real_word(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// Exact-match dictionary backed by an in-memory word list.
#[derive(Debug, Default, Clone)]
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for WordListDictionary {
    fn is_real_word(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }
}
