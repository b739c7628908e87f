//! # NoOverlap Probe
//!
//! The reference overlap predicate: never reports an intersection. Keeps the
//! mistake detector's overlap check inert until a geometry collaborator
//! supplies a real predicate.

use crate::traits::overlap::OverlapProbe;
use crate::types::SceneObject;

/// Overlap probe that always reports no overlap.
#[derive(Debug)]
pub struct NoOverlapProbe;

impl OverlapProbe for NoOverlapProbe {
    fn overlaps(&self, _object: &SceneObject, _scene: &[SceneObject]) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_overlaps() {
        let a = SceneObject {
            id: "a".to_string(),
            ..Default::default()
        };
        let b = SceneObject {
            id: "b".to_string(),
            ..Default::default()
        };
        let scene = vec![a.clone(), b];
        assert!(!NoOverlapProbe.overlaps(&a, &scene));
    }
}
