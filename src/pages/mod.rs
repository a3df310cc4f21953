//! Page modules for the views this crate renders itself.
//!
//! ARCHITECTURE
//! ============
//! Lists, detail pages and registration forms belong to the embedding
//! application and are mounted through `app::ViewRenderer`.

pub mod dashboard;
pub mod login;
