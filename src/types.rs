//! Common types used throughout pageable
//!
//! Shared value types that are not specific to a single module.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Sort Direction
// ============================================================================

/// Direction a data source should sort its results in
///
/// The paginator never sorts anything itself; the direction is carried in
/// [`PaginationParams`](crate::PaginationParams) for the data source to honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// Returns the lowercase wire name of this direction
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Returns the opposite direction
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(Error::invalid_sort_direction(s)),
        }
    }
}
