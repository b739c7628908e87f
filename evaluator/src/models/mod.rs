//! # Model Backends Module
//!
//! This module provides the available [`ModelClient`](crate::traits::model::ModelClient)
//! implementations for the evaluator.
//!
//! ## Available Backends
//!
//! - [`static_model`]: Returns a fixed example payload regardless of input; the
//!   reference shim for tests, demos, and offline development.
//! - [`gemini_model`]: Calls Google's Gemini API over HTTP for real evaluations.

pub mod gemini_model;
pub mod static_model;
