//! Domain layer containing the decision assistant's types and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, state machine, errors)
//! - `decision` - Messages, options, analyses, recommendations and saved decisions
//! - `session` - Conversation phase machine and transient session state
//! - `insight` - Insight board state and its default tips

pub mod decision;
pub mod foundation;
pub mod insight;
pub mod session;
