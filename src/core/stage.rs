//! Stage domain model

use crate::core::state::{StageKind, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single stage in a pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    /// Unique stage identifier
    pub id: Uuid,

    /// Which phase this stage represents (fixed at creation)
    pub kind: StageKind,

    /// Current status
    pub status: Status,

    /// When the stage was created
    pub start_time: DateTime<Utc>,

    /// When the status was last updated
    pub end_time: Option<DateTime<Utc>>,
}

impl Stage {
    /// Create a new in-progress stage
    pub fn new(kind: StageKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            status: Status::InProgress,
            start_time: Utc::now(),
            end_time: None,
        }
    }

    /// Set the status and stamp the end time.
    ///
    /// The end time never precedes the start time, even if the wall clock
    /// stepped backwards.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.end_time = Some(Utc::now().max(self.start_time));
    }
}
