//! Evaluator Error Types
//!
//! This module defines the [`EvaluatorError`] enum, which encapsulates all error types that can occur while building prompts, talking to a model backend, and decoding model responses in the evaluator.
//! Each variant provides a descriptive error message for robust error handling and debugging.
//!
//! # Usage
//!
//! Use [`EvaluatorError`] as the error type in functions that may fail due to model, decoding, or validation issues. Each variant is tailored to a specific error scenario encountered in the evaluation pipeline.
//!
//! # Example
//!
//! ```rust
//! use evaluator::error::EvaluatorError;
//!
//! fn check_response(raw: &str) -> Result<(), EvaluatorError> {
//!     if raw.is_empty() {
//!         return Err(EvaluatorError::InvalidJson("empty response".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

/// Represents all error types that can occur in the evaluator.
#[derive(Debug)]
pub enum EvaluatorError {
    /// JSON is malformed or does not match the expected schema.
    InvalidJson(String),
    /// A required field is missing from the model response.
    MissingField(String),
    /// The model backend request failed (network, HTTP, or response envelope error).
    ModelRequest(String),
}
