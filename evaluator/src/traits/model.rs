//!
//! # ModelClient Trait
//!
//! This module defines the [`ModelClient`] trait, the single boundary between the
//! evaluation pipeline and an external generative model.
//!
//! The contract is deliberately narrow: one prompt string in, one response string
//! out. The response is expected to decode as JSON, but the backend may be slow,
//! may fail, and may return malformed text; callers must treat all three as normal.
//!

use crate::error::EvaluatorError;
use async_trait::async_trait;

/// A pluggable text-in/text-out capability representing "ask a generative model a question".
///
/// Implementations range from a fixed-payload shim for tests and demos to a real
/// HTTP client for a hosted model. Swapping the backend must never require changes
/// to prompt building or response parsing.
///
/// # Arguments
/// - `prompt`: The full prompt text to send.
///
/// # Returns
/// - `Ok(String)`: The raw response text from the model.
/// - `Err(EvaluatorError)`: If the backend request fails.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, EvaluatorError>;
}
