//! Content segmentation - split a body into pages and teaser/remainder views
//!
//! Segmentation is driven by in-band markers that authors type into the body:
//!
//! - **Page break** (`<!--nextpage-->`): splits the body into pages. The marker
//!   and any whitespace touching it are dropped, so a marker on its own line
//!   does not leave blank lines behind.
//! - **More** (`<!--more-->` or `<!--more Custom label-->`): splits a page into
//!   the teaser shown in listings and the remainder shown on the full view.
//! - **No teaser** (`<!--noteaser-->`): hides the teaser on the full view.
//!
//! All functions here are pure; the only state is the [`Markers`] set.

mod pages;
mod teaser;

pub use pages::{clamp_page_number, split_pages};
pub use teaser::{split_teaser, Teaser};
pub(crate) use teaser::split_teaser_raw;

use crate::config::consts;
use serde::{Deserialize, Serialize};

/// The marker strings recognized in item bodies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Markers {
    #[serde(default = "default_page_break")]
    pub page_break: String,
    /// Opening of the more-marker; label text may follow up to `more_close`
    #[serde(default = "default_more")]
    pub more: String,
    #[serde(default = "default_more_close")]
    pub more_close: String,
    #[serde(default = "default_no_teaser")]
    pub no_teaser: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            page_break: default_page_break(),
            more: default_more(),
            more_close: default_more_close(),
            no_teaser: default_no_teaser(),
        }
    }
}

fn default_page_break() -> String {
    consts::markers::PAGE_BREAK.to_string()
}

fn default_more() -> String {
    consts::markers::MORE_OPEN.to_string()
}

fn default_more_close() -> String {
    consts::markers::MORE_CLOSE.to_string()
}

fn default_no_teaser() -> String {
    consts::markers::NO_TEASER.to_string()
}

impl Markers {
    /// Split `body` into pages on this set's page-break marker
    pub fn split_pages(&self, body: &str) -> Vec<String> {
        split_pages(body, &self.page_break)
    }

    /// Split one page into teaser and remainder
    pub fn split_teaser(&self, page: &str) -> Teaser {
        split_teaser(page, self)
    }

    /// Whether `body` carries the suppress-teaser marker; never with an empty marker
    pub fn suppresses_teaser(&self, body: &str) -> bool {
        !self.no_teaser.is_empty() && body.contains(&self.no_teaser)
    }

    pub(crate) fn strip_no_teaser(&self, text: &str) -> String {
        if self.no_teaser.is_empty() {
            text.to_string()
        } else {
            text.replace(&self.no_teaser, "")
        }
    }
}

#[cfg(test)]
mod tests;
