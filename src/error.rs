use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a root word. Always a configuration problem, never a per-round one.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WordSourceError {
    #[error("word list contains no usable root words")]
    EmptyWordList,
    #[error("'{0}' is not a valid root word (expected lowercase letters, at least 3)")]
    InvalidRootWord(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    WordSource(#[from] WordSourceError),
    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
