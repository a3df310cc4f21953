//! Browser/environment helpers kept apart from page and component logic.

pub mod storage;
