//! Pagination over any [`DataSource`]
//!
//! [`paginate`] is the one-call entry point using the built-in defaults.
//! [`Paginator`] keeps a source and its [`PaginationDefaults`] together for
//! repeated use.

use super::source::DataSource;
use super::types::{PaginatedResponse, PaginationParams};
use crate::config::PaginationDefaults;
use tracing::debug;

/// Fetch one page from `source` and summarize it
///
/// Missing page number and page size resolve to 1 and 10. The source sees the
/// params unmodified; its error, if any, is returned as-is.
pub async fn paginate<S>(
    source: &S,
    params: &PaginationParams,
) -> Result<PaginatedResponse<S::Item>, S::Error>
where
    S: DataSource + ?Sized,
{
    paginate_with_defaults(source, params, &PaginationDefaults::default()).await
}

/// Same as [`paginate`], with caller-supplied defaults
pub async fn paginate_with_defaults<S>(
    source: &S,
    params: &PaginationParams,
    defaults: &PaginationDefaults,
) -> Result<PaginatedResponse<S::Item>, S::Error>
where
    S: DataSource + ?Sized,
{
    let page_number = params.resolved_page_number(defaults);
    let page_size = params.resolved_page_size(defaults);

    debug!(page_number, page_size, "Fetching page");
    let result = source.fetch_data(params).await?;

    let response = PaginatedResponse::from_fetch(result, page_number, page_size);
    debug!(
        page_number,
        page_size,
        items = response.contents.len(),
        total_count = response.total_count,
        total_page = response.total_page,
        is_first_page = response.is_first_page,
        is_last_page = response.is_last_page,
        "Paginated"
    );

    Ok(response)
}

// ============================================================================
// Paginator
// ============================================================================

/// A data source bundled with the defaults used to paginate it
#[derive(Debug, Clone)]
pub struct Paginator<S> {
    source: S,
    defaults: PaginationDefaults,
}

impl<S> Paginator<S>
where
    S: DataSource,
{
    /// Create a paginator using the built-in defaults
    pub fn new(source: S) -> Self {
        Self::with_defaults(source, PaginationDefaults::default())
    }

    /// Create a paginator with custom defaults
    pub fn with_defaults(source: S, defaults: PaginationDefaults) -> Self {
        Self { source, defaults }
    }

    /// Get the underlying data source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get the configured defaults
    pub fn defaults(&self) -> &PaginationDefaults {
        &self.defaults
    }

    /// Consume the paginator, returning the data source
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Fetch one page and summarize it using this paginator's defaults
    pub async fn paginate(
        &self,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<S::Item>, S::Error> {
        paginate_with_defaults(&self.source, params, &self.defaults).await
    }
}
