//! Build models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Build lifecycle status.
///
/// Any status the API adds later deserializes to [`BuildStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    Created,
    NeedsApproval,
    Triggered,
    Executing,
    Completed,
    Failed,
    Aborted,
    Errored,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BuildStatus::Created => "created",
            BuildStatus::NeedsApproval => "needs approval",
            BuildStatus::Triggered => "triggered",
            BuildStatus::Executing => "executing",
            BuildStatus::Completed => "completed",
            BuildStatus::Failed => "failed",
            BuildStatus::Aborted => "aborted",
            BuildStatus::Errored => "errored",
            BuildStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Build as listed on a repository page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Build ID
    pub id: String,

    /// Branch the build ran on
    #[serde(default)]
    pub branch: String,

    /// Commit SHA
    #[serde(default)]
    pub change_id_in_repo: String,

    /// Commit message
    #[serde(default)]
    pub change_message: String,

    /// Current status
    pub status: BuildStatus,

    /// Commit author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    /// When the change was pushed (epoch millis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_timestamp: Option<i64>,

    /// When execution started (epoch millis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_started_timestamp: Option<i64>,

    /// When execution finished (epoch millis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_finished_timestamp: Option<i64>,
}

impl Build {
    /// `branch#abcdef` label with the change id cut to six characters.
    pub fn change_label(&self) -> String {
        let short: String = self.change_id_in_repo.chars().take(6).collect();
        format!("{}#{}", self.branch, short)
    }

    /// Execution time in seconds, when both timestamps are known.
    pub fn duration_secs(&self) -> Option<i64> {
        match (self.build_started_timestamp, self.build_finished_timestamp) {
            (Some(start), Some(end)) if end >= start => Some((end - start) / 1000),
            _ => None,
        }
    }
}
