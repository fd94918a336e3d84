//! Poster Sorter Library
//!
//! A library for sorting movie, series and collection posters into an asset
//! directory tree using TMDB, Sonarr and Radarr metadata.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod store;
pub mod utils;

pub use error::{Error, Result};
