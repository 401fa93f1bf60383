//! In-memory registry of pipelines

pub mod shared;

pub use shared::SharedRegistry;

use crate::core::{Pipeline, StageKind, Status};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Lookup failures surfaced by the `try_*` operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Pipeline not found: {0}")]
    PipelineNotFound(Uuid),

    #[error("Pipeline {pipeline_id} has no {kind} stage")]
    StageNotFound { pipeline_id: Uuid, kind: StageKind },
}

/// Holds every pipeline created during the process lifetime
#[derive(Debug, Default)]
pub struct Registry {
    pipelines: Vec<Pipeline>,
    index: HashMap<Uuid, usize>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with one in-progress stage per kind
    pub fn create_pipeline(&mut self, name: &str, kinds: &[StageKind]) -> &Pipeline {
        let pipeline = Pipeline::new(name, kinds);
        debug!(
            pipeline_id = %pipeline.id,
            name,
            stages = kinds.len(),
            "Created pipeline"
        );

        let slot = self.pipelines.len();
        self.index.insert(pipeline.id, slot);
        self.pipelines.push(pipeline);
        &self.pipelines[slot]
    }

    /// Set the status of the first stage of `kind`.
    ///
    /// Unknown pipelines and stages are ignored.
    pub fn update_stage_status(&mut self, pipeline_id: Uuid, kind: StageKind, status: Status) {
        if let Err(e) = self.try_update_stage_status(pipeline_id, kind, status) {
            debug!("Ignoring stage update: {}", e);
        }
    }

    /// Set the status of the first stage of `kind`, reporting lookup misses
    pub fn try_update_stage_status(
        &mut self,
        pipeline_id: Uuid,
        kind: StageKind,
        status: Status,
    ) -> Result<(), RegistryError> {
        let pipeline = self
            .get_mut(pipeline_id)
            .ok_or(RegistryError::PipelineNotFound(pipeline_id))?;

        let stage = pipeline
            .stage_mut(kind)
            .ok_or(RegistryError::StageNotFound { pipeline_id, kind })?;
        stage.set_status(status);
        pipeline.sync_end_time();

        debug!(
            %pipeline_id,
            stage = %kind,
            %status,
            pipeline_status = %pipeline.status(),
            "Updated stage status"
        );
        Ok(())
    }

    /// Render the report for a pipeline, if it exists
    pub fn report(&self, pipeline_id: Uuid) -> Option<String> {
        self.get(pipeline_id).map(Pipeline::report)
    }

    /// Render the report for a pipeline, reporting an unknown id
    pub fn try_report(&self, pipeline_id: Uuid) -> Result<String, RegistryError> {
        self.report(pipeline_id)
            .ok_or(RegistryError::PipelineNotFound(pipeline_id))
    }

    /// Write the report to stdout; does nothing for an unknown id
    pub fn print_report(&self, pipeline_id: Uuid) {
        if let Some(report) = self.report(pipeline_id) {
            print!("{}", report);
        }
    }

    /// Pipeline with the given id
    pub fn get(&self, pipeline_id: Uuid) -> Option<&Pipeline> {
        self.index.get(&pipeline_id).map(|&slot| &self.pipelines[slot])
    }

    fn get_mut(&mut self, pipeline_id: Uuid) -> Option<&mut Pipeline> {
        let slot = *self.index.get(&pipeline_id)?;
        self.pipelines.get_mut(slot)
    }

    /// First pipeline with the given name
    pub fn find_by_name(&self, name: &str) -> Option<&Pipeline> {
        self.pipelines.iter().find(|p| p.name == name)
    }

    /// Pipelines in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Pipeline> {
        self.pipelines.iter()
    }

    /// Number of pipelines created so far
    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    /// Whether no pipeline has been created yet
    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }
}
