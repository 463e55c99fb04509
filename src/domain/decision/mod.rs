//! Decision module - the shared vocabulary of a decision session.
//!
//! Pure data shapes: chat messages, candidate options with their pro/con
//! analyses, the final recommendation and the saved decision record.

mod message;
mod option;
mod recommendation;
mod record;

pub use message::{ChatMessage, Sender};
pub use option::{DecisionOption, ProCon};
pub use recommendation::Recommendation;
pub use record::Decision;
