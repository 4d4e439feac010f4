//! Integration tests using in-memory data sources
//!
//! Tests the full flow: params → data source → paginated response → JSON

use async_trait::async_trait;
use futures::future::join_all;
use pageable::{
    load_defaults_from_str, paginate, DataSource, FetchResult, PaginatedResponse,
    PaginationDefaults, PaginationParams, Paginator, SortDirection,
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Test Data Source
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

/// A user table that filters, sorts and slices in memory
struct UserStore {
    users: Vec<User>,
    defaults: PaginationDefaults,
    calls: AtomicUsize,
}

impl UserStore {
    fn new(count: u32) -> Self {
        let users = (1..=count)
            .map(|id| User {
                id,
                name: format!("user-{id:03}"),
                email: format!("user{id}@example.com"),
            })
            .collect();
        Self {
            users,
            defaults: PaginationDefaults::default(),
            calls: AtomicUsize::new(0),
        }
    }

    fn matches(user: &User, term: &str, fields: &[String]) -> bool {
        fields.iter().any(|field| match field.as_str() {
            "name" => user.name.contains(term),
            "email" => user.email.contains(term),
            _ => false,
        })
    }
}

#[async_trait]
impl DataSource for UserStore {
    type Item = User;
    type Error = anyhow::Error;

    async fn fetch_data(&self, params: &PaginationParams) -> anyhow::Result<FetchResult<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5)).await;

        let mut matched: Vec<User> = match (&params.search_term, &params.search_by) {
            (Some(term), Some(fields)) => self
                .users
                .iter()
                .filter(|u| Self::matches(u, term, fields))
                .cloned()
                .collect(),
            _ => self.users.clone(),
        };

        match params.sort_by.as_deref() {
            Some("name") => matched.sort_by(|a, b| a.name.cmp(&b.name)),
            Some("id") | None => matched.sort_by_key(|u| u.id),
            Some(other) => anyhow::bail!("cannot sort by '{other}'"),
        }
        if params.sorting == Some(SortDirection::Desc) {
            matched.reverse();
        }

        let total_count = matched.len() as u64;
        let data = matched
            .into_iter()
            .skip(params.offset(&self.defaults) as usize)
            .take(params.resolved_page_size(&self.defaults) as usize)
            .collect();

        Ok(FetchResult::new(data, total_count))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// End-to-End Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_walk_all_pages() {
    init_tracing();
    let store = UserStore::new(25);

    let mut ids = Vec::new();
    let mut page_number = 1;
    loop {
        let params = PaginationParams::new().page(page_number).per_page(10);
        let page = paginate(&store, &params).await.unwrap();

        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_page, 3);
        assert_eq!(page.is_first_page, page_number == 1);
        ids.extend(page.contents.iter().map(|u| u.id));

        if page.is_last_page {
            break;
        }
        page_number += 1;
    }

    assert_eq!(page_number, 3);
    assert_eq!(ids, (1..=25).collect::<Vec<_>>());
    assert_eq!(store.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_defaults_when_params_empty() {
    let store = UserStore::new(5);

    let page = paginate(&store, &PaginationParams::new()).await.unwrap();

    assert_eq!(page.page_number, 1);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.total_page, 1);
    assert_eq!(page.len(), 5);
    assert!(page.is_first_page);
    assert!(page.is_last_page);
}

#[tokio::test]
async fn test_search_and_sort_reach_the_source() {
    let store = UserStore::new(30);
    let params = PaginationParams::new()
        .per_page(2)
        .search("user-02", ["name"])
        .sort("name", SortDirection::Desc);

    let page = paginate(&store, &params).await.unwrap();

    // user-020 ..= user-029 match
    assert_eq!(page.total_count, 10);
    assert_eq!(page.total_page, 5);
    let names: Vec<_> = page.contents.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["user-029", "user-028"]);
}

#[tokio::test]
async fn test_out_of_range_page_is_last() {
    let store = UserStore::new(10);
    let params = PaginationParams::new().page(99).per_page(10);

    let page = paginate(&store, &params).await.unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total_count, 10);
    assert_eq!(page.total_page, 1);
    assert!(!page.is_first_page);
    assert!(page.is_last_page);
}

#[tokio::test]
async fn test_source_error_is_returned_unchanged() {
    let store = UserStore::new(10);
    let params = PaginationParams::new().sort("shoe_size", SortDirection::Asc);

    let err = paginate(&store, &params).await.unwrap_err();

    assert_eq!(err.to_string(), "cannot sort by 'shoe_size'");
}

#[tokio::test]
async fn test_concurrent_pagination_over_shared_source() {
    let paginator = Arc::new(Paginator::new(Arc::new(UserStore::new(42))));

    let tasks = (1..=5).map(|page_number| {
        let paginator = Arc::clone(&paginator);
        tokio::spawn(async move {
            paginator
                .paginate(&PaginationParams::new().page(page_number))
                .await
                .unwrap()
        })
    });
    let pages: Vec<PaginatedResponse<User>> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.page_number, i as u64 + 1);
        assert_eq!(page.total_page, 5);
    }
    assert_eq!(pages[4].len(), 2);
    assert!(pages[4].is_last_page);
    assert_eq!(paginator.source().calls.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn test_paginator_with_yaml_defaults() {
    let defaults = load_defaults_from_str("page_size: 4").unwrap();
    let mut store = UserStore::new(9);
    store.defaults = defaults;
    let paginator = Paginator::with_defaults(store, defaults);

    let page = paginator.paginate(&PaginationParams::new().page(3)).await.unwrap();

    assert_eq!(page.page_size, 4);
    assert_eq!(page.total_page, 3);
    assert_eq!(page.contents.iter().map(|u| u.id).collect::<Vec<_>>(), vec![9]);
    assert!(page.is_last_page);
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[tokio::test]
async fn test_response_serializes_camel_case() {
    let store = UserStore::new(3);
    let page = paginate(&store, &PaginationParams::new().per_page(2))
        .await
        .unwrap()
        .map(|u| u.id);

    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(
        value,
        json!({
            "contents": [1, 2],
            "totalCount": 3,
            "totalPage": 2,
            "pageNumber": 1,
            "pageSize": 2,
            "isFirstPage": true,
            "isLastPage": false
        })
    );
}

#[test]
fn test_params_deserialize_from_request_body() {
    let params: PaginationParams = serde_json::from_value(json!({
        "pageNumber": 2,
        "searchTerm": "ali",
        "searchBy": ["name", "email"],
        "sortBy": "name",
        "sorting": "desc"
    }))
    .unwrap();

    assert_eq!(
        params,
        PaginationParams::new()
            .page(2)
            .search("ali", ["name", "email"])
            .sort("name", SortDirection::Desc)
    );
    assert_eq!(params.page_size, None);
}

#[test]
fn test_params_serialize_skips_absent_fields() {
    let value = serde_json::to_value(PaginationParams::new().per_page(5)).unwrap();
    assert_eq!(value, json!({ "pageSize": 5 }));
}

#[test]
fn test_params_reject_unknown_sorting() {
    let result = serde_json::from_value::<PaginationParams>(json!({ "sorting": "sideways" }));
    assert!(result.is_err());
}
