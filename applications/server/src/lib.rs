//! Songbook Server Library
//!
//! HTTP service over a songs table: filtered listing, paginated lyrics,
//! update/delete, and creation enriched by an external lookup service.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod shutdown;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
