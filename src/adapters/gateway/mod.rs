//! Reasoning Gateway Adapters.
//!
//! - `LlmReasoningGateway` - prompts, schemas and failure mapping over any `AIProvider`

mod llm_gateway;
mod prompts;

pub use llm_gateway::{
    LlmReasoningGateway, ANALYSIS_FAILED, CHAT_FAILED, INSIGHT_FAILED, MISSING_CREDENTIAL,
    OPTIONS_FAILED, RECOMMENDATION_FAILED,
};
