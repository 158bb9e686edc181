//! Player-facing text for validation outcomes.

use crate::validation::RejectReason;

impl RejectReason {
    /// `Empty` means "nothing typed yet" and is never shown to the player.
    pub fn is_silent(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::NotAllowed => "Not Allowed",
            Self::TooShort => "Too Short",
            Self::NotPossible => "Not Possible",
            Self::NotOriginal => "Already Used",
            Self::NotReal => "Not Real",
        }
    }

    pub fn message(self, word: &str, root_word: &str) -> String {
        match self {
            Self::Empty => String::new(),
            Self::NotAllowed => "Cannot use the root word.".to_string(),
            Self::TooShort => "The word must contain at least 3 letters.".to_string(),
            Self::NotPossible => format!("'{word}' cannot be formed from '{root_word}'."),
            Self::NotOriginal => format!("'{word}' is already used."),
            Self::NotReal => format!("'{word}' is not a real word."),
        }
    }
}

/// An alert ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

impl Alert {
    /// Builds the alert for a rejection, or `None` when the reason is silent.
    pub fn for_rejection(reason: RejectReason, word: &str, root_word: &str) -> Option<Self> {
        if reason.is_silent() {
            return None;
        }
        Some(Self {
            title: reason.title(),
            message: reason.message(word, root_word),
        })
    }
}

pub fn points_label(word: &str) -> String {
    format!("+{} points", word.chars().count())
}
