//! Route authorization: the route table, the guard and per-role navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `table` describes every path, `guard` decides render/redirect against the
//! current identity, and `nav` lists only links the guard would grant.

pub mod guard;
pub mod nav;
pub mod table;
