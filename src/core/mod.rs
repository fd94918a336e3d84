//! Core business logic modules.

pub mod cleanup;
pub mod organizer;
pub mod parser;
pub mod pipeline;
pub mod placement;
pub mod resolver;
pub mod scanner;
