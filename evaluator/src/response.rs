//! # Response Parsing
//!
//! Decodes the model's raw response text into an [`EvaluationResult`].
//! Decoding is strict about the required keys and lenient about everything
//! else: a malformed response is a hard failure of the current evaluation,
//! never a partial result.

use crate::error::EvaluatorError;
use crate::types::EvaluationResult;
use serde_json::{Value, json};

/// Keys that must be present in every evaluation response.
const REQUIRED_FIELDS: [&str; 3] = ["score", "feedback", "suggestions"];

/// Parse the model's response text into an [`EvaluationResult`].
///
/// # Errors
///
/// - [`EvaluatorError::InvalidJson`] if the text is not valid JSON, or a
///   present field has the wrong type.
/// - [`EvaluatorError::MissingField`] if a required key is absent.
pub fn parse_evaluation_response(raw: &str) -> Result<EvaluationResult, EvaluatorError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| EvaluatorError::InvalidJson(format!("invalid evaluation JSON: {e}")))?;

    for field in REQUIRED_FIELDS {
        if value.get(field).is_none() {
            return Err(EvaluatorError::MissingField(field.to_string()));
        }
    }

    serde_json::from_value(value).map_err(|e| {
        EvaluatorError::InvalidJson(format!(
            "evaluation JSON does not match the expected schema: {e}"
        ))
    })
}

/// Descriptive JSON Schema for the evaluation response shape.
///
/// Documentation for model-side structured output; nothing in the pipeline
/// enforces it at runtime beyond the required-key check in
/// [`parse_evaluation_response`].
pub fn evaluation_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "score": { "type": "number", "minimum": 0, "maximum": 100 },
            "feedback": { "type": "string" },
            "suggestions": { "type": "array", "items": { "type": "string" } },
            "error_locations": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "object_id": { "type": "string" },
                        "issue": { "type": "string" }
                    }
                }
            },
            "correctness": {
                "type": "object",
                "properties": {
                    "requirements_met": { "type": "boolean" },
                    "operations_correct": { "type": "boolean" },
                    "alignment_accurate": { "type": "boolean" }
                }
            }
        },
        "required": ["score", "feedback", "suggestions"]
    })
}
