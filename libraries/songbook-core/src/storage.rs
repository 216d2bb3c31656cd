//! Storage trait for songs

use crate::error::Result;
use crate::filter::SongFilter;
use crate::pagination::Pagination;
use crate::types::{CreateSong, Song, SongId, UpdateSong};
use async_trait::async_trait;

/// Song persistence
///
/// Abstracts the relational store behind the HTTP layer. Every method is a
/// single round-trip; update and delete do not check that the row exists.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Insert a new song and return it with its assigned id and timestamps
    async fn create_song(&self, song: CreateSong) -> Result<Song>;

    /// Get song by ID
    async fn get_song(&self, id: SongId) -> Result<Option<Song>>;

    /// One page of songs matching `filter`, plus the total match count
    async fn list_songs(&self, filter: &SongFilter, pagination: Pagination)
        -> Result<(Vec<Song>, u64)>;

    /// Overwrite the present fields and refresh `updated_at`
    ///
    /// Returns the number of rows affected (0 when the id does not exist).
    async fn update_song(&self, id: SongId, update: &UpdateSong) -> Result<u64>;

    /// Delete song, returning the number of rows removed
    async fn delete_song(&self, id: SongId) -> Result<u64>;
}
