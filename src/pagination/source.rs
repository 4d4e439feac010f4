//! The data source contract
//!
//! Anything that can fetch one page of items together with a total count can
//! be paginated.

use super::types::{FetchResult, PaginationParams};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait that all paginated data sources implement
///
/// Implementations receive the params exactly as the caller built them,
/// defaults not substituted, and are responsible for filtering, sorting and
/// slicing. `total_count` must describe the full matching set, not the length
/// of the returned page.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Item type on each page
    type Item: Send;

    /// Error produced when fetching fails; returned to the caller unchanged
    type Error: Send;

    /// Fetch the page described by `params` plus the total matching count
    async fn fetch_data(
        &self,
        params: &PaginationParams,
    ) -> Result<FetchResult<Self::Item>, Self::Error>;
}

#[async_trait]
impl<S> DataSource for &S
where
    S: DataSource + ?Sized,
{
    type Item = S::Item;
    type Error = S::Error;

    async fn fetch_data(
        &self,
        params: &PaginationParams,
    ) -> Result<FetchResult<Self::Item>, Self::Error> {
        (**self).fetch_data(params).await
    }
}

#[async_trait]
impl<S> DataSource for Box<S>
where
    S: DataSource + ?Sized,
{
    type Item = S::Item;
    type Error = S::Error;

    async fn fetch_data(
        &self,
        params: &PaginationParams,
    ) -> Result<FetchResult<Self::Item>, Self::Error> {
        (**self).fetch_data(params).await
    }
}

#[async_trait]
impl<S> DataSource for Arc<S>
where
    S: DataSource + ?Sized,
{
    type Item = S::Item;
    type Error = S::Error;

    async fn fetch_data(
        &self,
        params: &PaginationParams,
    ) -> Result<FetchResult<Self::Item>, Self::Error> {
        (**self).fetch_data(params).await
    }
}
