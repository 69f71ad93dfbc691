//! Wire types for the hosted auth service
//!
//! Rows coming back from the provider are duck-typed JSON; everything here
//! is validated at the boundary before the rest of the workspace sees it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw user-info payload from `GET /auth/v1/user`
///
/// All fields are optional at the wire level; [`UserInfo::into_verified`]
/// enforces the required subset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form metadata blob maintained by the provider
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl UserInfo {
    /// Validate the required fields and produce a [`VerifiedUser`]
    ///
    /// # Errors
    /// Returns the name of the first missing/empty required field. Rows
    /// without a subject id or email are rejected rather than trusted.
    pub fn into_verified(self) -> Result<VerifiedUser, String> {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => return Err("id".to_string()),
        };
        let email = match self.email {
            Some(email) if !email.is_empty() => email,
            _ => return Err("email".to_string()),
        };

        let name = self
            .user_metadata
            .get("full_name")
            .or_else(|| self.user_metadata.get("name"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

        let avatar_url = self
            .user_metadata
            .get("avatar_url")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Ok(VerifiedUser { id, email, name, avatar_url })
    }
}

/// User-info payload after boundary validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Error response body from the hosted auth service
///
/// The service is not consistent about which field it populates, so all
/// three spellings are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderApiError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl ProviderApiError {
    /// Best-effort human-readable message
    #[must_use]
    pub fn detail(&self) -> &str {
        self.msg
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error_description.as_deref())
            .unwrap_or("unknown provider error")
    }
}

impl fmt::Display for ProviderApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}: {}", code, self.detail()),
            None => write!(f, "{}", self.detail()),
        }
    }
}

impl std::error::Error for ProviderApiError {}
