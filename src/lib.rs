//! # pageable
//!
//! A minimal contract for paginating any data source.
//!
//! A data source implements [`DataSource::fetch_data`], returning the items on
//! the requested page plus the total number of matches. [`paginate`] turns
//! that into a [`PaginatedResponse`] with the page count and first/last-page
//! flags filled in, so every source reports pagination the same way.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pageable::{paginate, DataSource, FetchResult, PaginationParams};
//!
//! struct Users(Vec<String>);
//!
//! #[async_trait::async_trait]
//! impl DataSource for Users {
//!     type Item = String;
//!     type Error = std::convert::Infallible;
//!
//!     async fn fetch_data(
//!         &self,
//!         params: &PaginationParams,
//!     ) -> Result<FetchResult<String>, Self::Error> {
//!         let defaults = pageable::PaginationDefaults::default();
//!         let page = self
//!             .0
//!             .iter()
//!             .skip(params.offset(&defaults) as usize)
//!             .take(params.resolved_page_size(&defaults) as usize)
//!             .cloned()
//!             .collect();
//!         Ok(FetchResult::new(page, self.0.len() as u64))
//!     }
//! }
//!
//! let users = Users(vec!["alice".into(), "bob".into()]);
//! let page = paginate(&users, &PaginationParams::new().per_page(1)).await?;
//! assert_eq!(page.total_page, 2);
//! assert!(page.is_first_page);
//! ```
//!
//! Filtering, sorting and slicing are entirely up to the data source; the
//! search and sort fields of [`PaginationParams`] are passed through as-is.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Pagination defaults and their YAML loader
pub mod config;

/// Data source contract and pagination
pub mod pagination;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_defaults, load_defaults_from_str, PaginationDefaults};
pub use error::{Error, Result};
pub use pagination::{
    paginate, paginate_with_defaults, DataSource, FetchResult, PaginatedResponse,
    PaginationParams, Paginator,
};
pub use types::SortDirection;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
