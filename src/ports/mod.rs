//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Raw text/JSON completion against a hosted model
//! - `ReasoningGateway` - The coach's typed capabilities (chat, options,
//!   analysis, recommendation, insight)
//! - `DecisionStore` - Append-only history of saved decisions

mod ai_provider;
mod decision_store;
mod reasoning_gateway;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FieldKind, FinishReason, Message,
    MessageRole, ProviderInfo, ResponseFormat, ResponseSchema, SchemaField, TokenUsage,
};
pub use decision_store::DecisionStore;
pub use reasoning_gateway::{
    AnalyzedOption, Failure, FailureKind, GatewayResult, HistoryTurn, ReasoningGateway, TurnRole,
};
