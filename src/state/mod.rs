//! Session state shared across the console.
//!
//! DESIGN
//! ======
//! `session` owns persistence, `identity` derives read-only facts from the
//! stored token, and `auth` wraps both in a reactive context so role changes
//! re-render without a page reload.

pub mod auth;
pub mod identity;
pub mod session;
