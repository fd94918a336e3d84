//! Data models.

pub mod config;
pub mod poster;
pub mod report;
