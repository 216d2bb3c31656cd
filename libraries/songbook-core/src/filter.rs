//! Equality filters for the song list
//!
//! Filter keys come straight from the query string, so they are checked
//! against a fixed allow-list of columns. Values are always bound as query
//! parameters, never spliced into SQL.

use crate::error::{Result, SongbookError};
use crate::types::SongId;

/// A filterable song column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SongField {
    Id,
    Group,
    Song,
    ReleaseDate,
    Text,
    Link,
}

impl SongField {
    /// Every filterable column
    pub const ALL: [SongField; 6] = [
        SongField::Id,
        SongField::Group,
        SongField::Song,
        SongField::ReleaseDate,
        SongField::Text,
        SongField::Link,
    ];

    /// Map a query-string key to a column
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Query-string / JSON name
    pub fn key(&self) -> &'static str {
        match self {
            SongField::Id => "id",
            SongField::Group => "group",
            SongField::Song => "song",
            SongField::ReleaseDate => "release_date",
            SongField::Text => "text",
            SongField::Link => "link",
        }
    }

    /// SQL column expression (`group` is a reserved word)
    pub fn column(&self) -> &'static str {
        match self {
            SongField::Group => "\"group\"",
            other => other.key(),
        }
    }
}

/// Typed value a column is compared against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Integer(i64),
    Text(String),
}

/// Conjunction of exact-match conditions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    conditions: Vec<(SongField, FilterValue)>,
}

impl SongFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key = value`
    ///
    /// Unknown keys are rejected. If the key is already constrained the first
    /// value is kept.
    pub fn add(&mut self, key: &str, value: &str) -> Result<()> {
        let field = SongField::from_key(key)
            .ok_or_else(|| SongbookError::invalid_input(format!("unknown filter key: {}", key)))?;

        if self.get(field).is_some() {
            return Ok(());
        }

        let value = match field {
            SongField::Id => {
                let id: SongId = value.trim().parse().map_err(|_| {
                    SongbookError::invalid_input(format!("{} must be an integer", key))
                })?;
                FilterValue::Integer(id)
            }
            _ => FilterValue::Text(value.to_string()),
        };

        self.conditions.push((field, value));
        Ok(())
    }

    /// Builder form of [`SongFilter::add`]
    pub fn with(mut self, key: &str, value: &str) -> Result<Self> {
        self.add(key, value)?;
        Ok(self)
    }

    /// Value a column is constrained to, if any
    pub fn get(&self, field: SongField) -> Option<&FilterValue> {
        self.conditions
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value)
    }

    /// Conditions in the order they were added
    pub fn conditions(&self) -> &[(SongField, FilterValue)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
