//! Integration tests for the songs vertical slice
//!
//! Tests song operations including:
//! - Create and point lookup
//! - Filter conjunction and count consistency
//! - Partial updates with explicit optional fields
//! - Idempotent delete


use songbook_core::{Pagination, SongFilter, SongStore, UpdateSong};
use songbook_storage::{songs, SqliteSongStore};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_song() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = create_test_song(pool, "Muse", "Supermassive Black Hole").await;
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let retrieved = songs::get_by_id(pool, created.id)
        .await
        .expect("Query failed")
        .expect("Song not found");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.group, "Muse");
    assert_eq!(retrieved.song, "Supermassive Black Hole");
    assert_eq!(retrieved.release_date, "16.07.2006");
    assert_eq!(retrieved.text, "verse one\n\nverse two");
    assert_eq!(retrieved.verses(), vec!["verse one", "verse two"]);
}

#[tokio::test]
async fn test_get_missing_song_is_none() {
    let test_db = TestDb::new().await;

    let missing = songs::get_by_id(test_db.pool(), 404).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_ids_are_unique() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let a = create_test_song(pool, "A", "One").await;
    let b = create_test_song(pool, "A", "One").await;
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_filter_conjunction() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let target = create_test_song(pool, "A", "B").await;
    create_test_song(pool, "A", "C").await;
    create_test_song(pool, "X", "B").await;

    let filter = SongFilter::new()
        .with("group", "A")
        .unwrap()
        .with("song", "B")
        .unwrap();

    let (rows, total) = songs::list(pool, &filter, Pagination::default())
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, target.id);
}

#[tokio::test]
async fn test_omitted_filter_does_not_constrain() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_song(pool, "A", "B").await;
    create_test_song(pool, "A", "C").await;
    create_test_song(pool, "X", "B").await;

    let by_group = SongFilter::new().with("group", "A").unwrap();
    let (_, total) = songs::list(pool, &by_group, Pagination::default())
        .await
        .unwrap();
    assert_eq!(total, 2);

    let (_, all) = songs::list(pool, &SongFilter::new(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(all, 3);
}

#[tokio::test]
async fn test_filter_is_exact_match() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_song(pool, "Muse", "Uprising").await;

    for value in ["muse", "Mus", "Muse ", "%"] {
        let filter = SongFilter::new().with("group", value).unwrap();
        let total = songs::count(pool, &filter).await.unwrap();
        assert_eq!(total, 0, "value {:?} should not match", value);
    }
}

#[tokio::test]
async fn test_filter_by_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_song(pool, "A", "One").await;
    let second = create_test_song(pool, "A", "Two").await;

    let filter = SongFilter::new()
        .with("id", &second.id.to_string())
        .unwrap();
    let (rows, total) = songs::list(pool, &filter, Pagination::default())
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(rows[0].song, "Two");
}

#[tokio::test]
async fn test_count_is_independent_of_pagination() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    for i in 1..=7 {
        create_test_song(pool, "Band", &format!("Song {}", i)).await;
    }

    let filter = SongFilter::new().with("group", "Band").unwrap();

    for (page, limit, expected_len) in [(1, 3, 3), (3, 3, 1), (4, 3, 0), (1, 100, 7)] {
        let pagination = Pagination::new(page, limit).unwrap();
        let (rows, total) = songs::list(pool, &filter, pagination).await.unwrap();
        assert_eq!(total, 7);
        assert_eq!(rows.len(), expected_len, "page {} limit {}", page, limit);
    }
}

#[tokio::test]
async fn test_list_orders_by_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    for i in 1..=5 {
        create_test_song(pool, "Band", &format!("Song {}", i)).await;
    }

    let (rows, _) = songs::list(pool, &SongFilter::new(), Pagination::new(2, 2).unwrap())
        .await
        .unwrap();

    let titles: Vec<_> = rows.iter().map(|s| s.song.as_str()).collect();
    assert_eq!(titles, vec!["Song 3", "Song 4"]);
}

#[tokio::test]
async fn test_update_overwrites_only_present_fields() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let song = create_test_song(pool, "Muse", "Uprising").await;

    let update = UpdateSong {
        song: Some("Starlight".to_string()),
        link: Some(String::new()),
        ..Default::default()
    };
    let rows = songs::update(pool, song.id, &update).await.unwrap();
    assert_eq!(rows, 1);

    let updated = songs::get_by_id(pool, song.id).await.unwrap().unwrap();
    assert_eq!(updated.song, "Starlight");
    assert_eq!(updated.link, "");
    assert_eq!(updated.group, "Muse");
    assert_eq!(updated.release_date, song.release_date);
    assert_eq!(updated.text, song.text);
    assert!(updated.updated_at >= song.updated_at);
}

#[tokio::test]
async fn test_update_with_no_fields_refreshes_timestamp() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let song = create_test_song(pool, "Muse", "Uprising").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let rows = songs::update(pool, song.id, &UpdateSong::default())
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let updated = songs::get_by_id(pool, song.id).await.unwrap().unwrap();
    assert!(updated.updated_at > song.updated_at);
    assert_eq!(updated.song, "Uprising");
}

#[tokio::test]
async fn test_update_missing_song_affects_nothing() {
    let test_db = TestDb::new().await;

    let update = UpdateSong {
        group: Some("Ghost".to_string()),
        ..Default::default()
    };
    let rows = songs::update(test_db.pool(), 999, &update).await.unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let song = create_test_song(pool, "Muse", "Uprising").await;

    assert_eq!(songs::delete(pool, song.id).await.unwrap(), 1);
    assert_eq!(songs::delete(pool, song.id).await.unwrap(), 0);
    assert!(songs::get_by_id(pool, song.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_trait_delegates_to_slice() {
    let test_db = TestDb::new().await;
    let store = SqliteSongStore::new(test_db.pool().clone());

    let created = store
        .create_song(new_song("Queen", "Bohemian Rhapsody"))
        .await
        .unwrap();

    let fetched = store.get_song(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.song, "Bohemian Rhapsody");

    let (rows, total) = store
        .list_songs(&SongFilter::new(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].id, created.id);

    assert_eq!(store.delete_song(created.id).await.unwrap(), 1);
    assert!(store.get_song(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_migrations_are_rerunnable() {
    let test_db = TestDb::new().await;

    songbook_storage::run_migrations(test_db.pool())
        .await
        .expect("Second migration run should be a no-op");
}
