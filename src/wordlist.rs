use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");
pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

pub const MIN_WORD_LENGTH: usize = 3;

/// Lowercases and trims a raw list entry, returning it only if it is a usable word.
fn clean_entry(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    let usable =
        word.chars().count() >= MIN_WORD_LENGTH && word.chars().all(char::is_alphabetic);
    usable.then_some(word)
}

fn dedup_in_order(words: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words.filter(|w| seen.insert(w.clone())).collect()
}

pub fn load_words_from_str(data: &str) -> Vec<String> {
    dedup_in_order(data.lines().filter_map(clean_entry))
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = clean_entry(&line?) {
            words.push(word);
        }
    }
    Ok(dedup_in_order(words.into_iter()))
}
