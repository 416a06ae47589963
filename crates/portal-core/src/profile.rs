//! Profile name update payloads (`POST /profile/name`)

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Request body for a name update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameUpdateRequest {
    pub full_name: String,
}

impl NameUpdateRequest {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}

/// Response body for a name update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameUpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl NameUpdateResponse {
    /// Name the server confirmed, or an error when it reported failure.
    ///
    /// A success without a `full_name` confirms the submitted value.
    pub fn into_confirmed(self, submitted: &str) -> Result<String> {
        if !self.success {
            return Err(Error::rejected(
                self.error.unwrap_or_else(|| "Failed to save name".to_string()),
            ));
        }
        Ok(self.full_name.unwrap_or_else(|| submitted.to_string()))
    }
}
