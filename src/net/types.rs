//! Wire DTOs exchanged with the ledger REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of a rejected request, e.g. `{"error": "Token de autenticação invalido."}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST authentication` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST authentication` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Bearer token, sent back verbatim in the `Authorization` header.
    pub authorization: String,
    /// Admin marker; older deployments send a string, newer ones a bool.
    #[serde(default)]
    pub adminflag: Option<serde_json::Value>,
    #[serde(default)]
    pub username: Option<String>,
}

impl LoginResponse {
    /// `true` only for JSON `true` or the string `"true"`.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        match &self.adminflag {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag == crate::state::session::ADMIN_FLAG_TRUE,
            _ => false,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }
}
