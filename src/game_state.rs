use crate::dictionary::DictionaryOracle;
use crate::error::WordSourceError;
use crate::feedback::Alert;
use crate::round_state::RoundState;
use crate::validation::{RejectReason, normalize, validate};
use crate::word_source::WordSource;
use crate::{debug_log, info_log};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    Restart,
    Exit,
}

/// Front end seam: everything the game loop needs from a user interface.
pub trait GameInterface {
    fn display_round(&mut self, state: &RoundState);
    /// Returns `None` when no usable action could be read; the loop asks again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_accepted(&mut self, word: &str, state: &RoundState);
    fn display_rejection(&mut self, alert: &Alert);
    fn display_new_round(&mut self, state: &RoundState);
    fn display_exit_message(&mut self, state: &RoundState);
}

/// Validates `candidate` and commits it when accepted.
///
/// The returned state is `state` itself, unchanged, on rejection.
pub fn apply_candidate<D: DictionaryOracle + ?Sized>(
    state: RoundState,
    candidate: &str,
    dictionary: &D,
) -> (RoundState, Result<String, RejectReason>) {
    match validate(candidate, &state, dictionary) {
        Ok(word) => {
            let state = state.commit(word.clone());
            info_log!("Accepted '{}', score now {}", word, state.score());
            (state, Ok(word))
        }
        Err(reason) => (state, Err(reason)),
    }
}

pub fn game_loop<I, S, D>(
    interface: &mut I,
    source: &mut S,
    dictionary: &D,
) -> Result<RoundState, WordSourceError>
where
    I: GameInterface + ?Sized,
    S: WordSource + ?Sized,
    D: DictionaryOracle + ?Sized,
{
    let mut state = RoundState::start(source)?;
    interface.display_round(&state);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                info_log!(
                    "Exiting with score {} over {} words",
                    state.score(),
                    state.history().len()
                );
                interface.display_exit_message(&state);
                return Ok(state);
            }
            UserAction::Restart => {
                state = state.restart(source)?;
                interface.display_new_round(&state);
            }
            UserAction::Submit(candidate) => {
                let (next, outcome) = apply_candidate(state, &candidate, dictionary);
                state = next;
                match outcome {
                    Ok(word) => interface.display_accepted(&word, &state),
                    Err(reason) => {
                        let word = normalize(&candidate);
                        if let Some(alert) = Alert::for_rejection(reason, &word, state.root_word())
                        {
                            interface.display_rejection(&alert);
                        }
                    }
                }
            }
        }
    }
}
