//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome from the frame the route guard selected.

pub mod layout;
pub mod navbar;
