//! Shelf configuration section
//!
//! A shelf is configured with an optional capacity. Configs can be built in
//! code or parsed from a TOML snippet supplied by the caller:
//!
//! ```toml
//! capacity = 20
//! ```
//!
//! Omitting `capacity` yields an unbounded shelf.

use crate::error::{LibraryError, Result};
use bookstoread_core::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of books a shelf accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<usize>", into = "Option<usize>")]
pub enum Capacity {
    /// No limit on the number of books
    #[default]
    Unbounded,
    /// At most this many books
    Limited(usize),
}

impl Capacity {
    /// Remaining slots given `count` books, or `None` when unbounded
    pub fn remaining(&self, count: usize) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Limited(max) => Some(max.saturating_sub(count)),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Limited(max) => Some(*max),
        }
    }
}

impl From<Option<usize>> for Capacity {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Self::Unbounded, Self::Limited)
    }
}

impl From<Capacity> for Option<usize> {
    fn from(capacity: Capacity) -> Self {
        capacity.limit()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::Limited(max) => write!(f, "{}", max),
        }
    }
}

/// Shelf settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Maximum number of books; absent means unbounded
    #[serde(skip_serializing_if = "Capacity::is_unbounded")]
    pub capacity: Capacity,
}

impl ShelfConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Capacity::Limited(capacity);
        self
    }

    /// Parses and validates a config from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config
            .validate()
            .map_err(|errors| LibraryError::InvalidConfig(errors.join("; ")))?;
        Ok(config)
    }

    /// Serializes the config to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| LibraryError::InvalidConfig(e.to_string()))
    }
}

impl Validator for ShelfConfig {
    fn validate(&self) -> std::result::Result<(), Vec<String>> {
        match self.capacity {
            Capacity::Limited(0) => Err(vec!["capacity must be at least 1".to_string()]),
            _ => Ok(()),
        }
    }
}
