//! Pagination defaults
//!
//! The values substituted for a page number or page size the caller left out.
//! Out of the box these are page 1 and 10 items per page; applications that
//! want different defaults can load them from YAML:
//!
//! ```yaml
//! page_number: 1
//! page_size: 25
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Page number used when a request does not specify one
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Page size used when a request does not specify one
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Defaults applied to omitted pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDefaults {
    /// Page number used when `pageNumber` is absent
    #[serde(default = "default_page_number")]
    pub page_number: u64,

    /// Page size used when `pageSize` is absent
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_number() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationDefaults {
    /// Create defaults with a custom page size, starting on page 1
    pub fn with_page_size(page_size: u64) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Check that both defaults are usable as positive integers
    pub fn validate(&self) -> Result<()> {
        if self.page_number == 0 {
            return Err(Error::invalid_config_value(
                "page_number",
                "must be at least 1",
            ));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_config_value("page_size", "must be at least 1"));
        }
        Ok(())
    }
}

/// Load pagination defaults from a YAML file
pub fn load_defaults(path: impl AsRef<Path>) -> Result<PaginationDefaults> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;
    load_defaults_from_str(&content)
}

/// Load pagination defaults from a YAML string
///
/// An empty document yields [`PaginationDefaults::default`].
pub fn load_defaults_from_str(yaml: &str) -> Result<PaginationDefaults> {
    if yaml.trim().is_empty() {
        return Ok(PaginationDefaults::default());
    }

    let defaults: PaginationDefaults = serde_yaml::from_str(yaml)?;

    defaults.validate()?;
    Ok(defaults)
}
