//! Shared utilities for the evaluator workspace.
//!
//! Currently hosts the global application configuration. Cross-cutting
//! concerns that more than one crate needs belong here.

pub mod config;
