//! Networking modules for the licensing REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends authenticated requests, `error` classifies failures
//! and surfaces them to the user, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
