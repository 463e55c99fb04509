//! Storage Adapters
//!
//! Implementations of the DecisionStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryDecisionStore** - Keeps history in memory for the process lifetime
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryDecisionStore;
//!
//! let store = InMemoryDecisionStore::with_decisions(sample_decisions());
//! store.record(decision).await;
//! ```

mod in_memory_decision_store;

pub use in_memory_decision_store::InMemoryDecisionStore;
