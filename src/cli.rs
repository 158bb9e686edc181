use crate::error::{AppError, AppResult};
use crate::feedback::{Alert, points_label};
use crate::game_state::{GameInterface, UserAction};
use crate::logging::{LogTarget, default_log_path};
use crate::round_state::RoundState;
use crate::wordlist::{
    EMBEDDED_DICTIONARY, EMBEDDED_START_WORDS, load_words_from_file, load_words_from_str,
};
use clap::Parser;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Word Scramble: build words from the letters of a root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'w', long = "start-words", env = "WORD_SCRAMBLE_START_WORDS")]
    pub start_words_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary of accepted words
    #[arg(short = 'd', long = "dictionary", env = "WORD_SCRAMBLE_DICTIONARY")]
    pub dictionary_path: Option<PathBuf>,

    /// Seed for the root word draw, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play every round with this root word instead of drawing one
    #[arg(long, conflicts_with = "seed")]
    pub root: Option<String>,

    /// Use the interactive terminal UI
    #[arg(long)]
    pub tui: bool,

    /// Log file (defaults to the user cache dir in TUI mode, stderr otherwise)
    #[arg(long = "log-file", env = "WORD_SCRAMBLE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// How the root word is chosen each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSelection {
    Random { seed: Option<u64> },
    Fixed(String),
}

/// Command line and environment resolved into concrete values.
#[derive(Debug)]
pub struct Settings {
    pub start_words: Vec<String>,
    pub dictionary: Vec<String>,
    pub root: RootSelection,
    pub tui: bool,
    pub log_target: LogTarget,
}

fn read_word_list(path: Option<&Path>, embedded: &str) -> AppResult<Vec<String>> {
    match path {
        Some(path) => load_words_from_file(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(load_words_from_str(embedded)),
    }
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let start_words = read_word_list(cli.start_words_path.as_deref(), EMBEDDED_START_WORDS)?;
        let dictionary = read_word_list(cli.dictionary_path.as_deref(), EMBEDDED_DICTIONARY)?;

        let root = match &cli.root {
            Some(word) => RootSelection::Fixed(word.trim().to_lowercase()),
            None => RootSelection::Random { seed: cli.seed },
        };

        let log_target = match (&cli.log_file, cli.tui) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => default_log_path().map_or(LogTarget::Stderr, LogTarget::File),
            (None, false) => LogTarget::Stderr,
        };

        Ok(Self {
            start_words,
            dictionary,
            root,
            tui: cli.tui,
            log_target,
        })
    }
}

// UI Input/Output functions

const RESTART_COMMANDS: [&str; 2] = [":restart", ":next"];
const EXIT_COMMANDS: [&str; 2] = [":exit", ":quit"];

pub fn parse_action(line: &str) -> UserAction {
    let command = line.trim().to_lowercase();
    if RESTART_COMMANDS.contains(&command.as_str()) {
        UserAction::Restart
    } else if EXIT_COMMANDS.contains(&command.as_str()) {
        UserAction::Exit
    } else {
        UserAction::Submit(line.to_string())
    }
}

/// Reads one line; end of input and read errors both end the game.
pub fn read_action<R: BufRead>(reader: &mut R) -> UserAction {
    println!("\nEnter a word (':restart' for a new root word, ':exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => UserAction::Exit,
        Ok(_) => parse_action(&input),
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            UserAction::Exit
        }
    }
}

pub fn display_round(state: &RoundState) {
    println!("Root word: {}", state.root_word());
    println!("Score: {}", state.score());
    if !state.history().is_empty() {
        println!("Entered words:");
        for word in state.history() {
            println!("  {word} ({})", points_label(word));
        }
    }
}

pub fn display_accepted(word: &str, state: &RoundState) {
    println!("{word}: {}. Score: {}", points_label(word), state.score());
}

pub fn display_rejection(alert: &Alert) {
    println!("{}: {}", alert.title, alert.message);
}

pub fn display_new_round(state: &RoundState) {
    println!("New round started.");
    display_round(state);
}

pub fn display_exit_message(state: &RoundState) {
    println!(
        "Final score: {} ({} words). Exiting.",
        state.score(),
        state.history().len()
    );
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, state: &RoundState) {
        display_round(state);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        Some(read_action(&mut self.reader))
    }

    fn display_accepted(&mut self, word: &str, state: &RoundState) {
        display_accepted(word, state);
    }

    fn display_rejection(&mut self, alert: &Alert) {
        display_rejection(alert);
    }

    fn display_new_round(&mut self, state: &RoundState) {
        display_new_round(state);
    }

    fn display_exit_message(&mut self, state: &RoundState) {
        display_exit_message(state);
    }
}
