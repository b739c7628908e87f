//! # AABB Overlap Probe
//!
//! Axis-aligned bounding box intersection built from object transforms.
//! Each object is treated as a unit cube centered on its position and scaled
//! by its scale vector, so the half extent on an axis is `scale / 2`. This is
//! a coarse predicate: it over-reports for non-box solids and ignores
//! rotation, but it is cheap and catches the common case of objects left
//! stacked on top of each other.

use crate::traits::overlap::OverlapProbe;
use crate::types::SceneObject;

/// Overlap probe using axis-aligned bounding boxes derived from transforms.
#[derive(Debug)]
pub struct AabbOverlapProbe;

impl OverlapProbe for AabbOverlapProbe {
    fn overlaps(&self, object: &SceneObject, scene: &[SceneObject]) -> bool {
        // Objects sharing an id are treated as the same solid.
        scene
            .iter()
            .filter(|other| other.id != object.id)
            .any(|other| aabb_intersects(object, other))
    }
}

fn aabb_intersects(a: &SceneObject, b: &SceneObject) -> bool {
    (0..3).all(|axis| {
        let (a_min, a_max) = extent(a, axis);
        let (b_min, b_max) = extent(b, axis);
        // Strict comparison: touching faces do not count as overlap.
        a_min < b_max && b_min < a_max
    })
}

fn extent(object: &SceneObject, axis: usize) -> (f64, f64) {
    let center = object.transform.position[axis];
    let half = object.transform.scale[axis].abs() / 2.0;
    (center - half, center + half)
}
