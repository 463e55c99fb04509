//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Hosted model clients (Gemini, OpenAI) and a scripted mock
//! - `gateway` - The coach's reasoning capabilities over an AI provider
//! - `storage` - Decision history

pub mod ai;
pub mod gateway;
pub mod storage;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use gateway::LlmReasoningGateway;
pub use storage::InMemoryDecisionStore;
