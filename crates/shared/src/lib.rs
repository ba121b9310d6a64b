//! Shared types, errors, and configuration for Stockroom.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error taxonomy with HTTP status mapping
//! - Configuration management
//! - Pagination types for list endpoints

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{Paged, Pagination};
