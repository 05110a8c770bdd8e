//! Effect layer: runs the reducer against a live question store.

use tracing::{debug, error};

use crate::error::QuizError;
use crate::store::QuestionStore;

use super::event::{Effect, Event, StoreFailure};
use super::reducer::{reduce, IgnoreReason, Step};
use super::screen::Screen;
use super::state::QuizState;

/// What became of a dispatched event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Applied, and any store request it made succeeded.
    Applied,
    /// Not valid in the current state; nothing changed.
    Ignored(IgnoreReason),
    /// Applied, but its store request failed.
    Failed(StoreFailure),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// One running quiz session: its state and the store behind it.
///
/// Requests are issued one at a time and each completes before
/// [`dispatch`](Self::dispatch) returns.
pub struct QuizSession<S> {
    state: QuizState,
    store: S,
}

impl<S: QuestionStore> QuizSession<S> {
    /// Create a session with empty state.
    pub fn new(store: S) -> Self {
        Self::with_state(QuizState::new(), store)
    }

    /// Create a session resuming `state`.
    pub fn with_state(state: QuizState, store: S) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// What should be on screen now.
    pub fn screen(&self) -> Screen<'_> {
        self.state.screen()
    }

    /// Fetch the question list.
    pub fn start(&mut self) -> Outcome {
        self.dispatch(Event::Load)
    }

    /// Apply `event`, performing the store request it asks for.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        let name = event.name();
        let effect = match reduce(&self.state, event) {
            Step::Ignored(reason) => {
                debug!(event = name, "ignored: {}", reason);
                return Outcome::Ignored(reason);
            }
            Step::Next { state, effect } => {
                self.state = state;
                effect
            }
        };

        let Some(effect) = effect else {
            return Outcome::Applied;
        };

        let completion = self.perform(effect);
        let outcome = match completion.failure() {
            Some(failure) => Outcome::Failed(failure.clone()),
            None => Outcome::Applied,
        };

        // Completions never ask for further requests.
        match reduce(&self.state, completion) {
            Step::Next { state, .. } => self.state = state,
            Step::Ignored(reason) => error!(event = name, "completion dropped: {}", reason),
        }

        outcome
    }

    fn perform(&mut self, effect: Effect) -> Event {
        debug!(request = ?effect.kind(), "sending request");
        match effect {
            Effect::List => Event::Loaded(
                self.store
                    .list()
                    .map_err(|e| failure("Error fetching questions", &e)),
            ),
            Effect::Create(draft) => Event::Created(
                self.store
                    .create(&draft)
                    .map_err(|e| failure("Error adding question", &e)),
            ),
            Effect::Update { id, record } => {
                let result = self
                    .store
                    .update(&id, &record)
                    .map_err(|e| failure("Error updating question", &e));
                Event::Updated { id, result }
            }
            Effect::Delete { id } => {
                let result = self
                    .store
                    .delete(&id)
                    .map_err(|e| failure("Error deleting question", &e));
                Event::Deleted { id, result }
            }
        }
    }
}

fn failure(context: &str, err: &QuizError) -> StoreFailure {
    error!("{}: {}", context, err);
    StoreFailure::from(err)
}
