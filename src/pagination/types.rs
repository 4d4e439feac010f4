//! Pagination types
//!
//! The request descriptor, the raw result a data source hands back, and the
//! structured response the paginator builds from it.

use crate::config::PaginationDefaults;
use crate::error::{Error, Result};
use crate::types::SortDirection;
use serde::{Deserialize, Serialize};

// ============================================================================
// Pagination Params
// ============================================================================

/// Describes one pagination request
///
/// `page_number` and `page_size` are optional; the paginator substitutes
/// [`PaginationDefaults`] for whichever is missing. The search and sort fields
/// are never interpreted here and reach the data source exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// 1-based page being requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u64>,

    /// Maximum number of items per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,

    /// Free-text filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,

    /// Fields the search term applies to, in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_by: Option<Vec<String>>,

    /// Field to sort by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// Sort direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting: Option<SortDirection>,
}

impl PaginationParams {
    /// Create empty params; every field falls back to its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific page
    pub fn page(mut self, page_number: u64) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Request a specific page size
    pub fn per_page(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Search for `term` in the given fields
    pub fn search<I, S>(mut self, term: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_term = Some(term.into());
        self.search_by = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sort by `field` in the given direction
    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(field.into());
        self.sorting = Some(direction);
        self
    }

    /// Page number after default substitution
    pub fn resolved_page_number(&self, defaults: &PaginationDefaults) -> u64 {
        self.page_number.unwrap_or(defaults.page_number)
    }

    /// Page size after default substitution
    pub fn resolved_page_size(&self, defaults: &PaginationDefaults) -> u64 {
        self.page_size.unwrap_or(defaults.page_size)
    }

    /// Number of items preceding the requested page
    ///
    /// Handy for data sources that slice with offset/limit. Saturates instead
    /// of overflowing, and treats page 0 like page 1.
    pub fn offset(&self, defaults: &PaginationDefaults) -> u64 {
        self.resolved_page_number(defaults)
            .saturating_sub(1)
            .saturating_mul(self.resolved_page_size(defaults))
    }

    /// Reject a zero page number or page size
    ///
    /// Pagination itself never calls this; callers that accept untrusted input
    /// can opt in before paginating.
    pub fn validate(&self) -> Result<()> {
        if self.page_number == Some(0) {
            return Err(Error::invalid_param("pageNumber", "must be at least 1"));
        }
        if self.page_size == Some(0) {
            return Err(Error::invalid_param("pageSize", "must be at least 1"));
        }
        Ok(())
    }
}

// ============================================================================
// Fetch Result
// ============================================================================

/// Raw output of a data source for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult<T> {
    /// Items on the requested page, in order
    pub data: Vec<T>,
    /// Total number of matching items across all pages
    pub total_count: u64,
}

impl<T> FetchResult<T> {
    /// Create a fetch result
    pub fn new(data: Vec<T>, total_count: u64) -> Self {
        Self { data, total_count }
    }

    /// A result with no items and no matches
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total_count: 0,
        }
    }
}

// ============================================================================
// Paginated Response
// ============================================================================

/// A page of items plus the summary fields derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items returned by the data source, untouched
    pub contents: Vec<T>,
    /// Total matching items, as reported by the data source
    pub total_count: u64,
    /// `ceil(total_count / page_size)`
    pub total_page: u64,
    /// Resolved page number
    pub page_number: u64,
    /// Resolved page size
    pub page_size: u64,
    /// Whether `page_number` is 1
    pub is_first_page: bool,
    /// Whether `page_number >= total_page`
    pub is_last_page: bool,
}

impl<T> PaginatedResponse<T> {
    /// Build a response from a fetch result and the resolved page values
    ///
    /// A page number past the end counts as the last page. A page size of
    /// zero yields zero total pages rather than dividing by zero.
    pub fn from_fetch(result: FetchResult<T>, page_number: u64, page_size: u64) -> Self {
        let total_page = total_pages(result.total_count, page_size);

        Self {
            contents: result.data,
            total_count: result.total_count,
            total_page,
            page_number,
            page_size,
            is_first_page: page_number == 1,
            is_last_page: page_number >= total_page,
        }
    }

    /// Transform the contents, keeping every summary field
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            contents: self.contents.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_page: self.total_page,
            page_number: self.page_number,
            page_size: self.page_size,
            is_first_page: self.is_first_page,
            is_last_page: self.is_last_page,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Whether this page has no items
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Number of pages needed to hold `total_count` items
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}
