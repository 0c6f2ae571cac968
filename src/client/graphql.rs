//! GraphQL request/response envelopes

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Request body sent to the GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    /// Query document
    pub query: &'a str,

    /// Query variables
    pub variables: V,
}

/// Response body returned by the GraphQL endpoint
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Resolved data, absent when the whole query failed
    pub data: Option<T>,

    /// Field or query errors
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A single GraphQL error
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Error message
    pub message: String,

    /// Path of the failing field
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl GraphQlError {
    fn describe(&self) -> String {
        if self.path.is_empty() {
            return self.message.clone();
        }
        let path: Vec<String> = self
            .path
            .iter()
            .map(|p| match p {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        format!("{} (at {})", self.message, path.join("."))
    }
}

impl<T> GraphQlResponse<T> {
    /// Unwrap the data, turning any reported error into [`ApiError::GraphQl`].
    pub fn into_data(self) -> Result<T> {
        if !self.errors.is_empty() {
            let messages = self.errors.iter().map(GraphQlError::describe).collect();
            return Err(ApiError::GraphQl(messages).into());
        }

        self.data.ok_or_else(|| {
            ApiError::InvalidResponse("Response contained no data".to_string()).into()
        })
    }
}
