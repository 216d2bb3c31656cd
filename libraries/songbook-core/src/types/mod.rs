//! Domain types for Songbook

mod song;

pub use song::{
    validate_length, CreateSong, Song, SongId, UpdateSong, MAX_GROUP_LEN, MAX_RELEASE_DATE_LEN,
    MAX_SONG_LEN,
};
