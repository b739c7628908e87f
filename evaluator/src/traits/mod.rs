//!
//! Traits Module
//!
//! This module contains core traits used throughout the evaluator for extensibility and abstraction.
//!
//! - [`model`]: Defines the boundary trait for calling an external generative model.
//! - [`overlap`]: Defines the strategy trait for geometric overlap probing.
//!
//! Implement these traits to plug in a different model backend or a different
//! geometry predicate without touching prompt building or response parsing.

pub mod model;
pub mod overlap;
