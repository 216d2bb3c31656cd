use crate::songs;
use async_trait::async_trait;
use songbook_core::{
    error::Result, CreateSong, Pagination, Song, SongFilter, SongId, SongStore, UpdateSong,
};
use sqlx::SqlitePool;

/// Song store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteSongStore {
    pool: SqlitePool,
}

impl SqliteSongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl SongStore for SqliteSongStore {
    async fn create_song(&self, song: CreateSong) -> Result<Song> {
        songs::create(&self.pool, song).await
    }

    async fn get_song(&self, id: SongId) -> Result<Option<Song>> {
        songs::get_by_id(&self.pool, id).await
    }

    async fn list_songs(
        &self,
        filter: &SongFilter,
        pagination: Pagination,
    ) -> Result<(Vec<Song>, u64)> {
        songs::list(&self.pool, filter, pagination).await
    }

    async fn update_song(&self, id: SongId, update: &UpdateSong) -> Result<u64> {
        let rows = songs::update(&self.pool, id, update).await?;
        tracing::debug!(id, rows, "Updated song");
        Ok(rows)
    }

    async fn delete_song(&self, id: SongId) -> Result<u64> {
        let rows = songs::delete(&self.pool, id).await?;
        tracing::debug!(id, rows, "Deleted song");
        Ok(rows)
    }
}
