//! Songbook Core
//!
//! Storage-agnostic domain types, traits, and error handling for Songbook.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `CreateSong`, `UpdateSong`
//! - **Query Types**: `SongFilter` (allow-listed equality filters), `Pagination`, `Page`
//! - **Lyrics**: verse splitting over the stored lyric text
//! - **Core Traits**: `SongStore`
//! - **Error Handling**: Unified `SongbookError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use songbook_core::{verses, Pagination};
//!
//! let text = "first verse\n\nsecond verse\n\nthird verse";
//! let all = verses::split(text);
//! assert_eq!(all.len(), 3);
//!
//! let pagination = Pagination::new(2, 2).unwrap();
//! assert_eq!(pagination.slice(&all), &["third verse"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod pagination;
pub mod storage;
pub mod types;
pub mod verses;

// Re-export commonly used types
pub use error::{Result, SongbookError};
pub use filter::{FilterValue, SongField, SongFilter};
pub use pagination::{Page, Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use storage::SongStore;
pub use types::{CreateSong, Song, SongId, UpdateSong};
