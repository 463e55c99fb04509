//! Session module - the decision session's phase machine and state.

mod errors;
mod phase;
mod state;

pub use errors::SessionError;
pub use phase::Phase;
pub use state::{SessionState, NEXT_DECISION_GREETING, WELCOME_GREETING};
