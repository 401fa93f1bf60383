//! pipesim - an in-memory CI/CD pipeline simulator

pub mod cli;
pub mod core;
pub mod registry;

// Re-export commonly used types
pub use self::core::{derive_status, Pipeline, Stage, StageKind, Status};
pub use self::core::config::{ConfigError, ScenarioConfig};
pub use registry::{Registry, RegistryError, SharedRegistry};
