//! # Song Library Common Library
//!
//! Shared code for the song library service:
//! - Song domain model and list filter
//! - Release date wire format (`DD.MM.YYYY`)
//! - Bootstrap configuration loading
//! - Database initialization and schema migrations

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod release_date;

pub use error::{Error, Result};
pub use models::{Song, SongFilter};
