//! Page/limit pagination shared by the song list and lyric endpoints

use crate::error::{Result, SongbookError};
use serde::Serialize;

/// Page used when the caller does not supply one
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not supply one
pub const DEFAULT_LIMIT: u32 = 10;

/// Validated pagination request
///
/// Both `page` and `limit` are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Build a pagination request, rejecting a zero page or limit
    pub fn new(page: u32, limit: u32) -> Result<Self> {
        if page == 0 {
            return Err(SongbookError::invalid_input("page must be at least 1"));
        }
        if limit == 0 {
            return Err(SongbookError::invalid_input("limit must be at least 1"));
        }
        Ok(Self { page, limit })
    }

    /// Parse raw query-string values, applying defaults for missing ones
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self> {
        let page = parse_param("page", page, DEFAULT_PAGE)?;
        let limit = parse_param("limit", limit, DEFAULT_LIMIT)?;
        Self::new(page, limit)
    }

    /// 1-indexed page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Maximum items per page
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items before this page: `(page - 1) * limit`
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// The items of `items` that fall on this page
    ///
    /// Returns an empty slice when the offset is past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        if offset >= items.len() {
            return &[];
        }
        let end = offset
            .saturating_add(self.limit as usize)
            .min(items.len());
        &items[offset..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_param(name: &str, raw: Option<&str>, default: u32) -> Result<u32> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<u32>().map_err(|_| {
            SongbookError::invalid_input(format!("{} must be a positive integer", name))
        }),
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Count of all matching items, before pagination
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, pagination: Pagination) -> Self {
        Self {
            data,
            total,
            page: pagination.page(),
            limit: pagination.limit(),
        }
    }
}
