//! Scenario configuration from YAML

use crate::core::state::{StageKind, Status};
use crate::registry::{Registry, RegistryError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors raised while loading a scenario
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid scenario: {0}")]
    Validation(String),
}

/// Top-level scenario loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Treat unknown pipelines or stages as errors instead of ignoring them
    #[serde(default)]
    pub strict: bool,

    /// Pipelines to create, in order
    pub pipelines: Vec<PipelineConfig>,
}

/// A pipeline to create and the updates to apply to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pipeline name
    pub name: String,

    /// Stage kinds in execution order
    #[serde(default)]
    pub stages: Vec<StageKind>,

    /// Status updates applied after creation
    #[serde(default)]
    pub updates: Vec<UpdateConfig>,
}

/// A single stage status update
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateConfig {
    pub stage: StageKind,
    pub status: Status,
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the scenario is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipelines.is_empty() {
            return Err(ConfigError::Validation(
                "scenario must declare at least one pipeline".to_string(),
            ));
        }

        if let Some(index) = self.pipelines.iter().position(|p| p.name.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "pipeline #{} has an empty name",
                index + 1
            )));
        }

        Ok(())
    }

    /// The build/test/deploy run where every stage succeeds
    pub fn demo() -> Self {
        let kinds = [StageKind::Build, StageKind::Test, StageKind::Deploy];
        ScenarioConfig {
            strict: false,
            pipelines: vec![PipelineConfig {
                name: "My Pipeline".to_string(),
                stages: kinds.to_vec(),
                updates: kinds
                    .iter()
                    .map(|&stage| UpdateConfig {
                        stage,
                        status: Status::Success,
                    })
                    .collect(),
            }],
        }
    }

    /// Force strict mode on; a file that already asks for it stays strict
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict |= strict;
        self
    }

    /// Total number of updates across all pipelines
    pub fn update_count(&self) -> usize {
        self.pipelines.iter().map(|p| p.updates.len()).sum()
    }

    /// Create every pipeline in `registry` and apply its updates.
    ///
    /// Returns the new pipeline ids in declaration order. In strict mode the
    /// first update naming a missing stage aborts with an error.
    pub fn apply(&self, registry: &mut Registry) -> Result<Vec<Uuid>, RegistryError> {
        let mut ids = Vec::with_capacity(self.pipelines.len());

        for config in &self.pipelines {
            let id = registry.create_pipeline(&config.name, &config.stages).id;

            for update in &config.updates {
                if self.strict {
                    registry.try_update_stage_status(id, update.stage, update.status)?;
                } else {
                    registry.update_stage_status(id, update.stage, update.status);
                }
            }

            info!(
                pipeline = %config.name,
                updates = config.updates.len(),
                "Applied scenario pipeline"
            );
            ids.push(id);
        }

        Ok(ids)
    }
}
