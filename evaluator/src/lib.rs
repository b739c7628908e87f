//! # Evaluator Library
//!
//! This crate provides the core logic for model-assisted evaluation of CAD
//! challenge submissions. It builds prompts from challenge requirements and
//! submission summaries, sends them to a pluggable generative-model backend,
//! parses the returned JSON into a structured result, and runs a rule-based
//! detector over scene objects for common modeling mistakes.
//!
//! ## Key Concepts
//! - **Evaluator**: The main struct wiring a model backend and an overlap probe
//!   into the evaluation pipeline.
//! - **ModelClient**: Pluggable text-in/text-out boundary to the external model
//!   (fixed-payload shim or a real HTTP backend).
//! - **OverlapProbe**: Pluggable geometry predicate feeding the mistake detector.
//! - **EvaluationResult**: The fixed-shape record assembled from the model's JSON.
//!
//! ```no_run
//! use evaluator::Evaluator;
//! use serde_json::json;
//!
//! # async fn demo() -> Result<(), evaluator::error::EvaluatorError> {
//! let evaluator = Evaluator::new();
//! let result = evaluator
//!     .evaluate(
//!         &json!({ "total_objects": 3, "operations_used": 2 }),
//!         &json!({ "min_objects": 2, "required_shapes": ["cube", "cylinder"] }),
//!     )
//!     .await?;
//! println!("Score: {}", result.score);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod mistakes;
pub mod models;
pub mod probes;
pub mod prompt;
pub mod response;
pub mod traits;
pub mod types;

use crate::error::EvaluatorError;
use crate::models::static_model::StaticModel;
use crate::probes::no_overlap::NoOverlapProbe;
use crate::traits::model::ModelClient;
use crate::traits::overlap::OverlapProbe;
use crate::types::{EvaluationResult, Mistake};

use serde_json::Value;
use tracing::debug;

/// Evaluates CAD challenge submissions through a generative-model backend.
///
/// The evaluator owns two pluggable strategies: the model backend that answers
/// prompts and the overlap probe that backs the rule-based mistake detector.
/// Defaults are the fixed-payload [`StaticModel`] and the inert
/// [`NoOverlapProbe`], so a freshly constructed evaluator works offline.
///
/// # Fields
/// - `model`: Backend answering prompt text with response text.
/// - `overlap_probe`: Geometry predicate for the overlap check.
pub struct Evaluator<'a> {
    model: Box<dyn ModelClient + Send + Sync + 'a>,
    overlap_probe: Box<dyn OverlapProbe + Send + Sync + 'a>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator with the default backends.
    pub fn new() -> Self {
        Self {
            model: Box::new(StaticModel),
            overlap_probe: Box::new(NoOverlapProbe),
        }
    }

    /// Set a custom model backend for this evaluator.
    ///
    /// # Arguments
    /// * `model` - An implementation of the `ModelClient` trait.
    pub fn with_model<M: ModelClient + Send + Sync + 'a>(mut self, model: M) -> Self {
        self.model = Box::new(model);
        self
    }

    /// Set a custom overlap probe for the mistake detector.
    ///
    /// # Arguments
    /// * `probe` - An implementation of the `OverlapProbe` trait.
    pub fn with_overlap_probe<P: OverlapProbe + Send + Sync + 'a>(mut self, probe: P) -> Self {
        self.overlap_probe = Box::new(probe);
        self
    }

    /// Evaluate a submission against challenge requirements.
    ///
    /// # Returns
    /// * `Ok(EvaluationResult)` on success.
    /// * `Err(EvaluatorError)` if the model request fails or its response is
    ///   malformed or missing a required field.
    ///
    /// # Steps
    /// 1. Embeds both inputs pretty-printed into the evaluation prompt.
    /// 2. Sends the prompt to the configured model backend.
    /// 3. Parses the response text into an [`EvaluationResult`].
    pub async fn evaluate(
        &self,
        submission_summary: &Value,
        challenge_requirements: &Value,
    ) -> Result<EvaluationResult, EvaluatorError> {
        let prompt = prompt::evaluation_prompt(challenge_requirements, submission_summary)?;
        debug!(chars = prompt.len(), "sending evaluation prompt");

        let raw = self.model.generate(&prompt).await?;
        response::parse_evaluation_response(&raw)
    }

    /// Generate personalized learning recommendations.
    ///
    /// Builds a free-form analysis prompt from the user's history and current
    /// performance and returns whatever JSON mapping the model produces,
    /// unmodified. No shape is enforced beyond "decodes as JSON".
    pub async fn generate_personalized_feedback(
        &self,
        user_history: &[Value],
        current_performance: &Value,
    ) -> Result<Value, EvaluatorError> {
        let prompt = prompt::personalized_feedback_prompt(user_history, current_performance)?;
        debug!(chars = prompt.len(), "sending personalized feedback prompt");

        let raw = self.model.generate(&prompt).await?;
        serde_json::from_str(&raw)
            .map_err(|e| EvaluatorError::InvalidJson(format!("invalid feedback JSON: {e}")))
    }

    /// Run the rule-based mistake detector over a submission.
    ///
    /// Purely local: no model call is made. The overlap check uses the
    /// configured probe; the scaling check uses the fixed thresholds in
    /// [`mistakes`].
    pub fn detect_common_mistakes(&self, submission_data: &Value) -> Vec<Mistake> {
        mistakes::detect_common_mistakes(submission_data, self.overlap_probe.as_ref())
    }
}

impl Default for Evaluator<'_> {
    fn default() -> Self {
        Self::new()
    }
}
