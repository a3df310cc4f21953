//! Shared error-reporting contract for forms, lists and session actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user-triggered failure funnels into `report_error`, which alerts the
//! most specific message available and reloads the current view. There is no
//! partial-state recovery: the page comes back from a clean load.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::state::session::SessionError;

use super::types::ServerErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("request failed: {status}")]
    Server {
        status: u16,
        /// `error` field of the JSON body, when the server sent one.
        error: Option<String>,
        body: String,
    },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("not available on server")]
    Unavailable,
}

impl RequestError {
    /// Classify a non-2xx response body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let error = serde_json::from_str::<ServerErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.is_empty());
        Self::Server { status, error, body: body.to_owned() }
    }
}

/// Text shown to the user when an operation fails.
pub trait UserMessage {
    fn user_message(&self) -> String;
}

impl UserMessage for RequestError {
    /// Server `error` text, else the transport message, else the raw error.
    fn user_message(&self) -> String {
        match self {
            Self::Server { error: Some(error), .. } => error.clone(),
            Self::Server { body, .. } if !body.trim().is_empty() => body.clone(),
            Self::Transport(message) | Self::Decode(message) if !message.is_empty() => message.clone(),
            Self::Session(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

impl UserMessage for SessionError {
    fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Alert the user and force a full reload of the current view.
pub fn report_error<E>(err: &E)
where
    E: UserMessage + std::fmt::Display,
{
    log::error!("{err}");
    alert_user(&err.user_message());
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Show a blocking alert without touching the current view.
pub fn alert_user(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
