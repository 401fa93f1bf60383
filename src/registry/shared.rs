//! Lock-guarded registry handle for concurrent callers

use crate::core::{Pipeline, StageKind, Status};
use crate::registry::{Registry, RegistryError};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Cloneable handle to a registry shared between tasks.
///
/// Each operation holds the lock for its whole duration.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Create a handle to an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing registry
    pub fn from_registry(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Create a pipeline and return its id
    pub async fn create_pipeline(&self, name: &str, kinds: &[StageKind]) -> Uuid {
        let mut registry = self.inner.write().await;
        registry.create_pipeline(name, kinds).id
    }

    /// Set the status of the first stage of `kind`, ignoring lookup misses
    pub async fn update_stage_status(&self, pipeline_id: Uuid, kind: StageKind, status: Status) {
        let mut registry = self.inner.write().await;
        registry.update_stage_status(pipeline_id, kind, status);
    }

    /// Set the status of the first stage of `kind`, reporting lookup misses
    pub async fn try_update_stage_status(
        &self,
        pipeline_id: Uuid,
        kind: StageKind,
        status: Status,
    ) -> Result<(), RegistryError> {
        let mut registry = self.inner.write().await;
        registry.try_update_stage_status(pipeline_id, kind, status)
    }

    /// Render the report for a pipeline, if it exists
    pub async fn report(&self, pipeline_id: Uuid) -> Option<String> {
        self.inner.read().await.report(pipeline_id)
    }

    /// Copy of a pipeline as it is right now
    pub async fn snapshot(&self, pipeline_id: Uuid) -> Option<Pipeline> {
        self.inner.read().await.get(pipeline_id).cloned()
    }

    /// Number of pipelines created so far
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_concurrent_creates() {
        let shared = SharedRegistry::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                tokio::spawn(async move {
                    let id = shared
                        .create_pipeline(&format!("p{}", i), &[StageKind::Build])
                        .await;
                    shared
                        .update_stage_status(id, StageKind::Build, Status::Success)
                        .await;
                    id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        assert_eq!(shared.len().await, 8);
        for id in ids {
            let pipeline = shared.snapshot(id).await.unwrap();
            assert_eq!(pipeline.status(), Status::Success);
        }
    }

    #[tokio::test]
    async fn test_shared_try_update_and_report() {
        let mut registry = Registry::new();
        let id = registry.create_pipeline("P", &[StageKind::Deploy]).id;
        let shared = SharedRegistry::from_registry(registry);

        let result = shared
            .try_update_stage_status(id, StageKind::Build, Status::Failed)
            .await;
        assert!(matches!(result, Err(RegistryError::StageNotFound { .. })));

        assert_eq!(
            shared.report(id).await.unwrap(),
            "Pipeline P Status: in-progress\n  deploy: in-progress\n"
        );
        assert!(shared.report(Uuid::new_v4()).await.is_none());
    }
}
