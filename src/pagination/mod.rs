//! Pagination module
//!
//! # Overview
//!
//! A data source implements [`DataSource::fetch_data`] to return one page of
//! items and the total number of matches. [`paginate`] (or a [`Paginator`])
//! resolves the requested page, awaits the fetch once, and derives the total
//! page count plus first/last-page flags from the result.

mod paginator;
mod source;
mod types;

pub use paginator::{paginate, paginate_with_defaults, Paginator};
pub use source::DataSource;
pub use types::{total_pages, FetchResult, PaginatedResponse, PaginationParams};
