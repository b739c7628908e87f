//! # Rule-Based Mistake Detector
//!
//! A stateless pass over the submitted scene objects flagging common CAD
//! modeling mistakes. Two checks run per object, in input order, with no
//! deduplication:
//!
//! - **Overlap**: the configured [`OverlapProbe`] is asked whether the object
//!   intersects any other object in the scene.
//! - **Scaling**: any scale component above [`MAX_SCALE`] or below
//!   [`MIN_SCALE`] flags the object.

use crate::traits::overlap::OverlapProbe;
use crate::types::{Mistake, MistakeKind, SceneObject};
use serde_json::Value;

/// Largest accepted scale component.
pub const MAX_SCALE: f64 = 10.0;
/// Smallest accepted scale component.
pub const MIN_SCALE: f64 = 0.1;

/// Detect common CAD modeling mistakes in a submission.
///
/// `submission_data` is expected to carry an `objects` array; a missing or
/// non-array value yields no mistakes. Objects that do not deserialize
/// cleanly fall back to defaults rather than aborting the pass.
pub fn detect_common_mistakes(submission_data: &Value, probe: &dyn OverlapProbe) -> Vec<Mistake> {
    let objects: Vec<SceneObject> = submission_data
        .get("objects")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    let mut mistakes = Vec::new();

    for object in &objects {
        if probe.overlaps(object, &objects) {
            mistakes.push(Mistake {
                kind: MistakeKind::Overlap,
                object_id: object.id.clone(),
                message: "Objects overlap without boolean operation".to_string(),
            });
        }

        if object
            .transform
            .scale
            .iter()
            .any(|&s| s > MAX_SCALE || s < MIN_SCALE)
        {
            mistakes.push(Mistake {
                kind: MistakeKind::Scaling,
                object_id: object.id.clone(),
                message: "Extreme scaling detected - consider using different base shape"
                    .to_string(),
            });
        }
    }

    mistakes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::aabb::AabbOverlapProbe;
    use crate::probes::no_overlap::NoOverlapProbe;
    use serde_json::json;

    fn object(id: &str, scale: [f64; 3]) -> Value {
        json!({ "id": id, "transform": { "scale": scale } })
    }

    #[test]
    fn test_extreme_scale_is_flagged_once() {
        let submission = json!({ "objects": [object("cube_1", [15.0, 1.0, 1.0])] });
        let mistakes = detect_common_mistakes(&submission, &NoOverlapProbe);
        assert_eq!(mistakes.len(), 1);
        assert_eq!(mistakes[0].kind, MistakeKind::Scaling);
        assert_eq!(mistakes[0].object_id, "cube_1");
    }

    #[test]
    fn test_unit_scale_is_clean() {
        let submission = json!({ "objects": [object("cube_1", [1.0, 1.0, 1.0])] });
        assert!(detect_common_mistakes(&submission, &NoOverlapProbe).is_empty());
    }

    #[test]
    fn test_tiny_scale_is_flagged() {
        let submission = json!({ "objects": [object("cube_1", [1.0, 0.05, 1.0])] });
        let mistakes = detect_common_mistakes(&submission, &NoOverlapProbe);
        assert_eq!(mistakes.len(), 1);
        assert_eq!(mistakes[0].kind, MistakeKind::Scaling);
    }

    #[test]
    fn test_boundary_scales_are_accepted() {
        // 10.0 and 0.1 sit exactly on the thresholds and must not be flagged.
        let submission = json!({ "objects": [object("cube_1", [10.0, 0.1, 1.0])] });
        assert!(detect_common_mistakes(&submission, &NoOverlapProbe).is_empty());
    }

    #[test]
    fn test_empty_objects_yield_no_mistakes() {
        let submission = json!({ "objects": [] });
        assert!(detect_common_mistakes(&submission, &NoOverlapProbe).is_empty());
    }

    #[test]
    fn test_missing_objects_key_yields_no_mistakes() {
        let submission = json!({});
        assert!(detect_common_mistakes(&submission, &NoOverlapProbe).is_empty());
    }

    #[test]
    fn test_missing_scale_defaults_to_unit() {
        let submission = json!({ "objects": [{ "id": "cube_1" }] });
        assert!(detect_common_mistakes(&submission, &NoOverlapProbe).is_empty());
    }

    #[test]
    fn test_input_order_is_preserved() {
        let submission = json!({ "objects": [
            object("a", [20.0, 1.0, 1.0]),
            object("b", [1.0, 1.0, 1.0]),
            object("c", [0.01, 1.0, 1.0]),
        ]});
        let mistakes = detect_common_mistakes(&submission, &NoOverlapProbe);
        assert_eq!(mistakes.len(), 2);
        assert_eq!(mistakes[0].object_id, "a");
        assert_eq!(mistakes[1].object_id, "c");
    }

    #[test]
    fn test_overlap_probe_feeds_overlap_mistakes() {
        // Two unit cubes at the same position overlap under the AABB probe.
        let submission = json!({ "objects": [
            { "id": "cube_1", "transform": { "position": [0.0, 0.0, 0.0] } },
            { "id": "cube_2", "transform": { "position": [0.2, 0.0, 0.0] } },
        ]});
        let mistakes = detect_common_mistakes(&submission, &AabbOverlapProbe);
        assert_eq!(mistakes.len(), 2);
        assert!(mistakes.iter().all(|m| m.kind == MistakeKind::Overlap));
    }
}
