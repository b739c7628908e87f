//! # Overlap Probes Module
//!
//! This module provides the available [`OverlapProbe`](crate::traits::overlap::OverlapProbe)
//! implementations for the mistake detector.
//!
//! ## Available Probes
//!
//! - [`no_overlap`]: Never reports an overlap; the reference behavior.
//! - [`aabb`]: Axis-aligned bounding box intersection from object transforms.

pub mod aabb;
pub mod no_overlap;
