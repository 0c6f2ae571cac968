//! Compute credit transaction models

use serde::{Deserialize, Serialize};

/// A single compute credit charge.
///
/// Every field is optional; rows are rendered with placeholders for
/// whatever the API leaves out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Charge time (Unix epoch milliseconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Task that consumed the credits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Repository the task belongs to (`owner/name`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,

    /// Credits charged, as a decimal string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits_amount: Option<String>,
}
