//! Request dispatcher: the single path every API call takes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: `send` returns `RequestError::Unavailable`;
//! request construction stays pure and testable everywhere.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs and hand failures to
//! `net::error::report_error`, which owns user-facing reporting.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::RequestError;
use super::types::{LoginRequest, LoginResponse};
use crate::state::session::SharedStore;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A fully prepared call: prefixed URL plus credential header.
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl OutboundRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Attaches the current credential to outbound calls.
#[derive(Clone)]
pub struct Dispatcher {
    api_prefix: String,
    store: SharedStore,
}

impl Dispatcher {
    pub fn new(api_prefix: impl Into<String>, store: SharedStore) -> Self {
        Self { api_prefix: api_prefix.into(), store }
    }

    /// Prepare a request, adding `Authorization` only when a token is stored.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Session` if the session cannot be read.
    pub fn build(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<OutboundRequest, RequestError> {
        let mut headers = Vec::new();
        if let Some(session) = self.store.get()? {
            headers.push((AUTHORIZATION_HEADER.to_owned(), session.token));
        }
        Ok(OutboundRequest {
            method,
            url: format!("{}{}", self.api_prefix, path),
            headers,
            body,
        })
    }

    /// Send a request and return the decoded JSON body (`null` when empty).
    ///
    /// # Errors
    ///
    /// Returns `Server` for non-2xx responses, `Transport` when the call never
    /// completes, `Decode` for an unreadable body, and `Unavailable` outside
    /// the browser.
    pub async fn send(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<serde_json::Value, RequestError> {
        let request = self.build(method, path, body)?;
        log::debug!("{} {}", request.method.as_str(), request.url);
        execute(request).await
    }

    /// # Errors
    ///
    /// See [`Dispatcher::send`]; also `Decode` if the body does not match `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        decode(self.send(Method::Get, path, None).await?)
    }

    /// # Errors
    ///
    /// See [`Dispatcher::send`]; also `Decode` if the body does not match `T`.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, RequestError> {
        let body = encode(body)?;
        decode(self.send(Method::Post, path, Some(body)).await?)
    }

    /// # Errors
    ///
    /// See [`Dispatcher::send`]; also `Decode` if the body does not match `T`.
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, RequestError> {
        let body = encode(body)?;
        decode(self.send(Method::Put, path, Some(body)).await?)
    }

    /// Exchange credentials for a token via `POST authentication`.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::send`].
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<LoginResponse, RequestError> {
        let credentials = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        self.post("authentication", &credentials).await
    }
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, RequestError> {
    serde_json::to_value(body).map_err(|e| RequestError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, RequestError> {
    serde_json::from_value(value).map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_body(text: &str) -> Result<serde_json::Value, RequestError> {
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(text).map_err(|e| RequestError::Decode(e.to_string()))
}

async fn execute(request: OutboundRequest) -> Result<serde_json::Value, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Method as HttpMethod, RequestBuilder};

        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let pending = match &request.body {
            Some(body) => builder.json(body).map_err(|e| RequestError::Transport(e.to_string()))?,
            None => builder.build().map_err(|e| RequestError::Transport(e.to_string()))?,
        };
        let resp = pending.send().await.map_err(|e| RequestError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| RequestError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(RequestError::from_status(status, &text));
        }
        parse_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(RequestError::Unavailable)
    }
}
