//! CLI command implementations.

pub mod organize;
