use crate::types::SceneObject;

/// OverlapProbe is a strategy trait for spatial intersection testing.
/// Each implementation provides a specific predicate deciding whether one
/// object overlaps any other object in the scene.
pub trait OverlapProbe: Send + Sync {
    /// Check whether `object` overlaps any other member of `scene`.
    ///
    /// - `object`: the object under test (also present in `scene`).
    /// - `scene`: the full object list for the submission.
    fn overlaps(&self, object: &SceneObject, scene: &[SceneObject]) -> bool;
}
