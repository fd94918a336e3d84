//! Clients for the movie catalog, series catalog and movie library services.

pub mod arr;
pub mod catalog;
pub mod radarr;
pub mod sonarr;
pub mod tmdb;
