//! Insight module - rotating decision-making tips.

mod board;

pub use board::{InsightBoard, DEFAULT_INSIGHTS};
