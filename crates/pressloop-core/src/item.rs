//! Content items and feed loading
//!
//! A [`ContentItem`] is what a [`ResultCursor`](crate::cursor::ResultCursor)
//! iterates. The runtime never writes items back; whatever adapter produced
//! them owns storage. [`load_feed`] is a small file-based adapter used by the
//! CLI and by tests.

use crate::error::PressloopError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Publication status reported by the repository adapter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Publish,
    Draft,
    Pending,
    Private,
    Future,
}

/// One content item in a result set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentItem {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

impl ContentItem {
    /// Create an item with only an id and a body
    pub fn new(id: u64, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
            ..Self::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add a metadata entry
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

/// Table-of-items wrapper used by TOML feeds and object-shaped JSON feeds
#[derive(Debug, Deserialize)]
struct FeedFile {
    #[serde(default)]
    items: Vec<ContentItem>,
}

/// JSON feeds may be a bare array or an object with an `items` array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonFeed {
    List(Vec<ContentItem>),
    Wrapped(FeedFile),
}

/// Parse a TOML feed (`[[items]]` tables)
pub fn parse_toml_feed(content: &str, origin: &Path) -> crate::error::Result<Vec<ContentItem>> {
    let feed: FeedFile = toml::from_str(content).map_err(|e| PressloopError::FeedParseError {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(feed.items)
}

/// Parse a JSON feed (array, or `{ "items": [...] }`)
pub fn parse_json_feed(content: &str, origin: &Path) -> crate::error::Result<Vec<ContentItem>> {
    let feed: JsonFeed =
        serde_json::from_str(content).map_err(|e| PressloopError::FeedParseError {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(match feed {
        JsonFeed::List(items) => items,
        JsonFeed::Wrapped(file) => file.items,
    })
}

/// Load an ordered item sequence from a `.toml` or `.json` file
pub fn load_feed(path: impl AsRef<Path>) -> crate::error::Result<Vec<ContentItem>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let parse: fn(&str, &Path) -> crate::error::Result<Vec<ContentItem>> =
        match extension.as_deref() {
            Some("toml") => parse_toml_feed,
            Some("json") => parse_json_feed,
            _ => return Err(PressloopError::FeedUnsupportedFormat(path.to_path_buf())),
        };

    let content = std::fs::read_to_string(path)?;
    let items = parse(&content, path)?;
    tracing::debug!("Loaded {} item(s) from {}", items.len(), path.display());
    Ok(items)
}
