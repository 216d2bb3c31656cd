//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use songbook_core::{CreateSong, Pagination, Song, SongFilter, SongStore};
use songbook_lookup::{LookupClient, LookupConfig};
use songbook_server::{api, state::AppState};
use songbook_storage::SqliteSongStore;
use std::{sync::Arc, time::Duration};
use tempfile::TempDir;
use tower::util::ServiceExt;
use wiremock::MockServer;

/// Router wired to a temp-file SQLite store and a mock lookup service
pub struct TestApp {
    pub router: Router,
    pub store: SqliteSongStore,
    pub lookup: MockServer,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_lookup_timeout(Duration::from_secs(5)).await
    }

    pub async fn with_lookup_timeout(timeout: Duration) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = songbook_storage::create_pool(&db_url, 5).await.unwrap();
        songbook_storage::run_migrations(&pool).await.unwrap();
        let store = SqliteSongStore::new(pool);

        let lookup = MockServer::start().await;
        let client = LookupClient::new(
            LookupConfig::new(lookup.uri()).with_timeouts(timeout, Duration::from_secs(1)),
        )
        .unwrap();

        let app_state = AppState::new(Arc::new(store.clone()), Arc::new(client));

        Self {
            router: api::router(app_state),
            store,
            lookup,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty)
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send_request(builder.body(body).unwrap()).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    /// Insert a song directly, bypassing the lookup service
    pub async fn seed(&self, group: &str, song: &str, text: &str) -> Song {
        self.store
            .create_song(CreateSong {
                group: group.to_string(),
                song: song.to_string(),
                release_date: "2006".to_string(),
                text: text.to_string(),
                link: format!("https://example.com/{}", song),
            })
            .await
            .unwrap()
    }

    pub async fn song_count(&self) -> u64 {
        let (_, total) = self
            .store
            .list_songs(&SongFilter::new(), Pagination::default())
            .await
            .unwrap();
        total
    }
}
