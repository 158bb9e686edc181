// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod round_state;
pub mod tui;
pub mod validation;
pub mod word_source;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use dictionary::{DictionaryOracle, WordListDictionary};
pub use error::{AppError, WordSourceError};
pub use feedback::Alert;
pub use game_state::{GameInterface, UserAction, apply_candidate, game_loop};
pub use round_state::RoundState;
pub use validation::{RejectReason, is_derivable, normalize, validate};
pub use word_source::{RandomWordSource, SequenceWordSource, WordSource};
pub use wordlist::{load_words_from_file, load_words_from_str};
