//! Stage kinds, statuses and pipeline status derivation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The phase a stage represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum StageKind {
    /// Compile / package
    Build,
    /// Run the test suite
    Test,
    /// Ship the artifact
    Deploy,
}

impl StageKind {
    /// Lowercase name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Build => "build",
            StageKind::Test => "test",
            StageKind::Deploy => "deploy",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "build" => Ok(StageKind::Build),
            "test" => Ok(StageKind::Test),
            "deploy" => Ok(StageKind::Deploy),
            other => Err(format!("Unknown stage kind: {}", other)),
        }
    }
}

impl TryFrom<String> for StageKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Status of a stage, and of a pipeline once derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Status {
    /// Stage finished successfully
    Success,
    /// Stage failed
    Failed,
    /// Stage has not reported a result yet
    InProgress,
}

impl Status {
    /// Lowercase name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failed => "failed",
            Status::InProgress => "in-progress",
        }
    }

    /// Whether this status ends a pipeline run
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Success | Status::Failed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Status::Success),
            "failed" => Ok(Status::Failed),
            "in-progress" | "in_progress" | "inprogress" => Ok(Status::InProgress),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

impl TryFrom<String> for Status {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Derive a pipeline's overall status from its ordered stage statuses.
///
/// A successful last stage wins even when an earlier stage failed; only
/// then is any failure considered.
pub fn derive_status<I>(statuses: I) -> Status
where
    I: IntoIterator<Item = Status>,
{
    let mut last = None;
    let mut any_failed = false;

    for status in statuses {
        any_failed |= status == Status::Failed;
        last = Some(status);
    }

    if last == Some(Status::Success) {
        Status::Success
    } else if any_failed {
        Status::Failed
    } else {
        Status::InProgress
    }
}
