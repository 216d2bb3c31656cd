//! Song types
//!
//! A song row plus the input shapes used to create and update it.

use crate::error::{Result, SongbookError};
use crate::verses;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Song identifier (database primary key)
pub type SongId = i64;

/// Maximum length of `group`, in characters
pub const MAX_GROUP_LEN: usize = 255;

/// Maximum length of `song`, in characters
pub const MAX_SONG_LEN: usize = 255;

/// Maximum length of `release_date`, in characters
pub const MAX_RELEASE_DATE_LEN: usize = 50;

/// A stored song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    /// Performing artist or group
    pub group: String,
    /// Track title
    pub song: String,
    /// Free-form release date, as returned by the lookup service
    pub release_date: String,
    /// Full lyrics, verses separated by a blank line
    pub text: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Song {
    /// Lyrics split into verses
    pub fn verses(&self) -> Vec<&str> {
        verses::split(&self.text)
    }
}

/// Data for creating a new song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSong {
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// Data for updating a song (all fields optional)
///
/// A present field overwrites the column, including with an empty string.
/// An absent field leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSong {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl UpdateSong {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.group.is_none()
            && self.song.is_none()
            && self.release_date.is_none()
            && self.text.is_none()
            && self.link.is_none()
    }

    /// Check column length limits on every present field
    pub fn validate(&self) -> Result<()> {
        if let Some(group) = &self.group {
            validate_length("group", group, MAX_GROUP_LEN)?;
        }
        if let Some(song) = &self.song {
            validate_length("song", song, MAX_SONG_LEN)?;
        }
        if let Some(release_date) = &self.release_date {
            validate_length("release_date", release_date, MAX_RELEASE_DATE_LEN)?;
        }
        Ok(())
    }
}

/// Reject `value` when it is longer than `max` characters
pub fn validate_length(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(SongbookError::invalid_input(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
