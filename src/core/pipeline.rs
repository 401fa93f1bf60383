//! Pipeline domain model

use crate::core::{
    stage::Stage,
    state::{derive_status, StageKind, Status},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use uuid::Uuid;

/// A named pipeline and its ordered stages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    /// Unique pipeline identifier
    pub id: Uuid,

    /// Pipeline name
    pub name: String,

    /// Stages in declared execution order
    pub stages: Vec<Stage>,

    /// When the pipeline was created
    pub start_time: DateTime<Utc>,

    /// When the pipeline last reached a terminal status
    pub end_time: Option<DateTime<Utc>>,
}

impl Pipeline {
    /// Create a pipeline with one in-progress stage per kind
    pub fn new(name: impl Into<String>, kinds: &[StageKind]) -> Self {
        let start_time = Utc::now();
        Pipeline {
            id: Uuid::new_v4(),
            name: name.into(),
            stages: kinds.iter().copied().map(Stage::new).collect(),
            start_time,
            end_time: None,
        }
    }

    /// Overall status, recomputed from the stages on every call
    pub fn status(&self) -> Status {
        derive_status(self.stages.iter().map(|s| s.status))
    }

    /// First stage of the given kind
    pub fn stage(&self, kind: StageKind) -> Option<&Stage> {
        self.stages.iter().find(|s| s.kind == kind)
    }

    /// First stage of the given kind, mutably
    pub fn stage_mut(&mut self, kind: StageKind) -> Option<&mut Stage> {
        self.stages.iter_mut().find(|s| s.kind == kind)
    }

    /// Refresh `end_time` from the derived status
    pub(crate) fn sync_end_time(&mut self) {
        self.end_time = if self.status().is_terminal() {
            Some(Utc::now().max(self.start_time))
        } else {
            None
        };
    }

    /// Render the plain-text status report
    pub fn report(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "Pipeline {} Status: {}", self.name, self.status());
        for stage in &self.stages {
            let _ = writeln!(out, "  {}: {}", stage.kind, stage.status);
        }
        out
    }

    /// Serializable view including the derived status
    pub fn snapshot(&self) -> PipelineSnapshot<'_> {
        PipelineSnapshot {
            status: self.status(),
            pipeline: self,
        }
    }
}

/// A pipeline together with its derived status, for JSON output
#[derive(Debug, Serialize)]
pub struct PipelineSnapshot<'a> {
    #[serde(flatten)]
    pub pipeline: &'a Pipeline,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline_with(statuses: &[(StageKind, Status)]) -> Pipeline {
        let kinds: Vec<StageKind> = statuses.iter().map(|(k, _)| *k).collect();
        let mut pipeline = Pipeline::new("P", &kinds);
        for (stage, (_, status)) in pipeline.stages.iter_mut().zip(statuses) {
            stage.status = *status;
        }
        pipeline
    }

    #[test]
    fn test_new_pipeline_stages_in_order() {
        let pipeline = Pipeline::new(
            "My Pipeline",
            &[StageKind::Build, StageKind::Test, StageKind::Deploy],
        );

        let kinds: Vec<_> = pipeline.stages.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StageKind::Build, StageKind::Test, StageKind::Deploy]);
        assert!(pipeline.stages.iter().all(|s| s.status == Status::InProgress));
        assert_eq!(pipeline.status(), Status::InProgress);
    }

    #[test]
    fn test_failed_then_success_reports_success() {
        let pipeline = pipeline_with(&[
            (StageKind::Build, Status::Failed),
            (StageKind::Test, Status::Success),
        ]);
        assert_eq!(pipeline.status(), Status::Success);
    }

    #[test]
    fn test_empty_pipeline_is_in_progress() {
        let pipeline = Pipeline::new("empty", &[]);
        assert_eq!(pipeline.status(), Status::InProgress);
        assert_eq!(pipeline.report(), "Pipeline empty Status: in-progress\n");
    }

    #[test]
    fn test_stage_lookup_first_match() {
        let mut pipeline = Pipeline::new("dup", &[StageKind::Test, StageKind::Test]);
        let first_id = pipeline.stages[0].id;

        assert_eq!(pipeline.stage(StageKind::Test).unwrap().id, first_id);
        assert_eq!(pipeline.stage_mut(StageKind::Test).unwrap().id, first_id);
        assert!(pipeline.stage(StageKind::Deploy).is_none());
    }

    #[test]
    fn test_report_format() {
        let pipeline = pipeline_with(&[
            (StageKind::Build, Status::Success),
            (StageKind::Test, Status::Failed),
            (StageKind::Deploy, Status::InProgress),
        ]);

        let expected = "Pipeline P Status: failed\n  build: success\n  test: failed\n  deploy: in-progress\n";
        assert_eq!(pipeline.report(), expected);
    }

    #[test]
    fn test_sync_end_time_follows_status() {
        let mut pipeline = pipeline_with(&[(StageKind::Build, Status::Success)]);
        pipeline.sync_end_time();
        assert!(pipeline.end_time.unwrap() >= pipeline.start_time);

        pipeline.stages[0].status = Status::InProgress;
        pipeline.sync_end_time();
        assert!(pipeline.end_time.is_none());
    }

    #[test]
    fn test_snapshot_includes_status() {
        let pipeline = pipeline_with(&[(StageKind::Build, Status::Failed)]);
        let json = serde_json::to_value(pipeline.snapshot()).unwrap();

        assert_eq!(json["status"], "failed");
        assert_eq!(json["name"], "P");
        assert_eq!(json["stages"][0]["kind"], "build");
    }
}
