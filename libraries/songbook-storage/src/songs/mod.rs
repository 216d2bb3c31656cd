use chrono::{DateTime, Utc};
use songbook_core::{
    error::Result, CreateSong, FilterValue, Pagination, Song, SongFilter, SongId, UpdateSong,
};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const SELECT_COLUMNS: &str =
    r#"id, "group", song, release_date, text, link, created_at, updated_at"#;

#[derive(Debug, FromRow)]
struct SongRow {
    id: i64,
    group: String,
    song: String,
    release_date: String,
    text: String,
    link: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Song {
            id: row.id,
            group: row.group,
            song: row.song,
            release_date: row.release_date,
            text: row.text,
            link: row.link,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insert a new song
pub async fn create(pool: &SqlitePool, song: CreateSong) -> Result<Song> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO songs ("group", song, release_date, text, link, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&song.group)
    .bind(&song.song)
    .bind(&song.release_date)
    .bind(&song.text)
    .bind(&song.link)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Song {
        id: result.last_insert_rowid(),
        group: song.group,
        song: song.song,
        release_date: song.release_date,
        text: song.text,
        link: song.link,
        created_at: now,
        updated_at: now,
    })
}

/// Get song by ID
pub async fn get_by_id(pool: &SqlitePool, id: SongId) -> Result<Option<Song>> {
    let query = format!("SELECT {} FROM songs WHERE id = ?", SELECT_COLUMNS);

    let row = sqlx::query_as::<_, SongRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Song::from))
}

/// Count songs matching `filter`
pub async fn count(pool: &SqlitePool, filter: &SongFilter) -> Result<u64> {
    let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM songs");
    push_conditions(&mut builder, filter);

    let total: i64 = builder.build_query_scalar::<i64>().fetch_one(pool).await?;
    Ok(total as u64)
}

/// One page of songs matching `filter`, ordered by id, plus the total match count
pub async fn list(
    pool: &SqlitePool,
    filter: &SongFilter,
    pagination: Pagination,
) -> Result<(Vec<Song>, u64)> {
    let total = count(pool, filter).await?;

    let mut builder =
        QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM songs", SELECT_COLUMNS));
    push_conditions(&mut builder, filter);
    builder
        .push(" ORDER BY id LIMIT ")
        .push_bind(i64::from(pagination.limit()))
        .push(" OFFSET ")
        .push_bind(i64::try_from(pagination.offset()).unwrap_or(i64::MAX));

    let rows: Vec<SongRow> = builder.build_query_as::<SongRow>().fetch_all(pool).await?;

    Ok((rows.into_iter().map(Song::from).collect(), total))
}

/// Overwrite present fields and refresh `updated_at`
///
/// Returns rows affected; a missing id is not an error.
pub async fn update(pool: &SqlitePool, id: SongId, update: &UpdateSong) -> Result<u64> {
    let mut builder = QueryBuilder::<Sqlite>::new("UPDATE songs SET ");
    let mut assignments = builder.separated(", ");

    if let Some(group) = &update.group {
        assignments
            .push(r#""group" = "#)
            .push_bind_unseparated(group.clone());
    }
    if let Some(song) = &update.song {
        assignments.push("song = ").push_bind_unseparated(song.clone());
    }
    if let Some(release_date) = &update.release_date {
        assignments
            .push("release_date = ")
            .push_bind_unseparated(release_date.clone());
    }
    if let Some(text) = &update.text {
        assignments.push("text = ").push_bind_unseparated(text.clone());
    }
    if let Some(link) = &update.link {
        assignments.push("link = ").push_bind_unseparated(link.clone());
    }
    assignments
        .push("updated_at = ")
        .push_bind_unseparated(Utc::now());

    builder.push(" WHERE id = ").push_bind(id);

    let result = builder.build().execute(pool).await?;
    Ok(result.rows_affected())
}

/// Delete song, returning rows removed
pub async fn delete(pool: &SqlitePool, id: SongId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

fn push_conditions(builder: &mut QueryBuilder<'_, Sqlite>, filter: &SongFilter) {
    for (index, (field, value)) in filter.conditions().iter().enumerate() {
        builder
            .push(if index == 0 { " WHERE " } else { " AND " })
            .push(field.column())
            .push(" = ");
        match value {
            FilterValue::Integer(v) => builder.push_bind(*v),
            FilterValue::Text(v) => builder.push_bind(v.clone()),
        };
    }
}
