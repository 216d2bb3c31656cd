/// Songs API routes
use crate::{
    error::{Result, ServerError},
    extract::{JsonBody, SongIdPath},
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use songbook_core::{
    types::{validate_length, MAX_GROUP_LEN, MAX_SONG_LEN},
    CreateSong, Page, Pagination, Song, SongFilter, UpdateSong,
};

/// Raw query pairs in request order, duplicates included
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Deserialize)]
pub struct CreateSongRequest {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub song: String,
}

impl CreateSongRequest {
    fn validate(&self) -> Result<()> {
        if self.group.is_empty() {
            return Err(ServerError::BadRequest("group is required".to_string()));
        }
        if self.song.is_empty() {
            return Err(ServerError::BadRequest("song is required".to_string()));
        }
        validate_length("group", &self.group, MAX_GROUP_LEN)?;
        validate_length("song", &self.song, MAX_SONG_LEN)?;
        Ok(())
    }
}

/// GET /songs
pub async fn list_songs(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Page<Song>>> {
    let Query(pairs) = query?;
    let (pagination, rest) = take_pagination(pairs)?;

    let mut filter = SongFilter::new();
    for (key, value) in &rest {
        filter.add(key, value)?;
    }

    let (songs, total) = app_state.db.list_songs(&filter, pagination).await?;
    Ok(Json(Page::new(songs, total, pagination)))
}

/// GET /songs/:id/text
/// Lyrics of one song, paginated by verse
pub async fn get_song_text(
    State(app_state): State<AppState>,
    SongIdPath(id): SongIdPath,
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Page<String>>> {
    let Query(pairs) = query?;
    let (pagination, _) = take_pagination(pairs)?;

    let song = app_state
        .db
        .get_song(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Song not found".to_string()))?;

    let verses = song.verses();
    let data = pagination
        .slice(&verses)
        .iter()
        .map(|verse| (*verse).to_string())
        .collect();

    Ok(Json(Page::new(data, verses.len() as u64, pagination)))
}

/// PUT /songs/:id
/// Echoes the submitted fields back, not the stored row
pub async fn update_song(
    State(app_state): State<AppState>,
    SongIdPath(id): SongIdPath,
    JsonBody(update): JsonBody<UpdateSong>,
) -> Result<Json<UpdateSong>> {
    update.validate()?;

    app_state.db.update_song(id, &update).await?;
    Ok(Json(update))
}

/// DELETE /songs/:id
pub async fn delete_song(
    State(app_state): State<AppState>,
    SongIdPath(id): SongIdPath,
) -> Result<StatusCode> {
    app_state.db.delete_song(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /songs
/// Fetch release date, lyrics, and link from the lookup service, then store
pub async fn create_song(
    State(app_state): State<AppState>,
    JsonBody(request): JsonBody<CreateSongRequest>,
) -> Result<(StatusCode, Json<Song>)> {
    request.validate()?;

    let details = app_state
        .lookup
        .song_details(&request.group, &request.song)
        .await?;

    let song = app_state
        .db
        .create_song(CreateSong {
            group: request.group,
            song: request.song,
            release_date: details.release_date,
            text: details.text,
            link: details.link,
        })
        .await?;

    tracing::info!(id = song.id, group = %song.group, song = %song.song, "Created song");

    Ok((StatusCode::CREATED, Json(song)))
}

/// Pull `page` and `limit` out of the query, first occurrence winning
fn take_pagination(pairs: QueryPairs) -> Result<(Pagination, QueryPairs)> {
    let mut page = None;
    let mut limit = None;
    let mut rest = Vec::with_capacity(pairs.len());

    for (key, value) in pairs {
        match key.as_str() {
            "page" => {
                page.get_or_insert(value);
            }
            "limit" => {
                limit.get_or_insert(value);
            }
            _ => rest.push((key, value)),
        }
    }

    let pagination = Pagination::parse(page.as_deref(), limit.as_deref())?;
    Ok((pagination, rest))
}
