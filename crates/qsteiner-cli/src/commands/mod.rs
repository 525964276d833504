//! CLI command implementations.

pub mod circuit;
pub mod common;
pub mod search;
pub mod steiner;
pub mod version;
