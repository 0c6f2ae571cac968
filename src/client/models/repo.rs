//! Repository models

use serde::{Deserialize, Serialize};

use super::Build;
use crate::client::pagination::Connection;

/// Repository with its most recent builds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Repository ID
    pub id: String,

    /// `owner/name`
    pub full_name: String,

    /// Latest builds, newest last as returned by `builds(last:)`
    #[serde(default)]
    pub builds: Connection<Build>,
}
