//! Fixture files for feed and configuration tests

use std::path::{Path, PathBuf};

/// Three published items: a plain one, a teaser one, and a two-page one
pub const SAMPLE_FEED_TOML: &str = r#"
[[items]]
id = 1
title = "Plain"
body = "Just one page."

[[items]]
id = 2
title = "Teaser"
body = "Lead paragraph.<!--more Keep reading-->The rest of the story."

[[items]]
id = 3
title = "Paged"
body = "Page one.\n<!--nextpage-->\nPage two."
"#;

/// The same items as [`SAMPLE_FEED_TOML`] in JSON array form
pub const SAMPLE_FEED_JSON: &str = r#"[
  {"id": 1, "title": "Plain", "body": "Just one page."},
  {"id": 2, "title": "Teaser", "body": "Lead paragraph.<!--more Keep reading-->The rest of the story."},
  {"id": 3, "title": "Paged", "body": "Page one.\n<!--nextpage-->\nPage two."}
]"#;

/// Write `content` to `dir/name` and return the full path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}
