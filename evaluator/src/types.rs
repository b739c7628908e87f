//! # Types Module
//!
//! This module defines the core data structures used throughout the evaluator.
//! These types represent the structured result of a model evaluation, detected
//! modeling mistakes, and the scene objects the rule-based detector operates on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single problem the model located in the submitted scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorLocation {
    /// Identifier of the scene object the issue was found on.
    pub object_id: String,
    /// Human-readable description of the issue.
    pub issue: String,
}

/// The structured result of evaluating a submission against a challenge.
///
/// `score`, `feedback` and `suggestions` are required in the model response;
/// `error_locations` and `correctness` are conventionally present but default
/// to empty when the model omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Overall score, intended range 0-100 (not enforced).
    pub score: f64,
    /// Free-form feedback on what is correct and incorrect.
    pub feedback: String,
    /// Actionable suggestions for improvement, in model order.
    pub suggestions: Vec<String>,
    /// Problems located on specific scene objects.
    #[serde(default)]
    pub error_locations: Vec<ErrorLocation>,
    /// Named boolean flags per evaluation dimension. The key set is open;
    /// whatever flags the model returns are preserved as-is.
    #[serde(default)]
    pub correctness: BTreeMap<String, bool>,
}

/// Category of a rule-detected modeling mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MistakeKind {
    /// Objects intersect without a boolean operation combining them.
    Overlap,
    /// A scale component falls outside the accepted range.
    Scaling,
}

/// A single mistake flagged by the rule-based detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistake {
    #[serde(rename = "type")]
    pub kind: MistakeKind,
    pub object_id: String,
    pub message: String,
}

fn unit_scale() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

/// Transform metadata attached to a scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    #[serde(default)]
    pub position: [f64; 3],
    #[serde(default = "unit_scale")]
    pub scale: [f64; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            scale: unit_scale(),
        }
    }
}

/// An object in the submitted CAD scene, as far as the detector cares.
///
/// Deserialization is lenient: missing fields take their defaults so that
/// partially-described objects still pass through the detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub transform: Transform,
}
