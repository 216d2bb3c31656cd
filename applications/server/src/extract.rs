/// Request extractors that reject with `ServerError`
use crate::error::ServerError;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use songbook_core::SongId;

/// JSON request body
///
/// Decoded whatever the `Content-Type` header says; only the body itself
/// has to be valid JSON for `T`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        decode_json(&bytes).map(JsonBody)
    }
}

/// `:id` path segment parsed as a song id
#[derive(Debug, Clone, Copy)]
pub struct SongIdPath(pub SongId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for SongIdPath
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        parse_song_id(&raw).map(SongIdPath)
    }
}

fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ServerError> {
    serde_json::from_slice(bytes).map_err(|e| {
        ServerError::BadRequest(format!("Failed to parse the request body as JSON: {}", e))
    })
}

fn parse_song_id(raw: &str) -> Result<SongId, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid song id: {}", raw)))
}
