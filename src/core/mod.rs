//! Core domain models for pipelines
//!
//! This module defines the stage and pipeline records, the status
//! vocabulary, and scenario configuration.

pub mod config;
pub mod pipeline;
pub mod stage;
pub mod state;

pub use pipeline::*;
pub use stage::*;
pub use state::*;
