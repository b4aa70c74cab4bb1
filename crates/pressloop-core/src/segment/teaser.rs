//! Teaser/remainder splitting on the more-marker

use super::Markers;

/// One page split on its more-marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Teaser {
    /// Text before the marker; empty when the suppress marker applies
    pub teaser: String,
    /// Text after the marker; empty when there is no marker
    pub remainder: String,
    pub has_more_marker: bool,
    /// Inline label carried by the marker (`<!--more Read on-->`), or empty
    pub label: String,
    /// Whether the suppress-teaser marker emptied `teaser`
    pub suppressed: bool,
}

/// Location of a more-marker inside a page
struct MoreMarker<'a> {
    start: usize,
    end: usize,
    label: &'a str,
}

/// Find the first well-formed more-marker
///
/// The label may not span lines; an opener whose label would contain a
/// newline is skipped and the search continues after it.
fn find_more_marker<'a>(page: &'a str, markers: &Markers) -> Option<MoreMarker<'a>> {
    if markers.more.is_empty() {
        return None;
    }

    let mut search_from = 0;

    while let Some(offset) = page[search_from..].find(&markers.more) {
        let start = search_from + offset;
        let label_start = start + markers.more.len();
        let close = page[label_start..].find(&markers.more_close)?;
        let label = &page[label_start..label_start + close];

        if !label.contains('\n') {
            return Some(MoreMarker {
                start,
                end: label_start + close + markers.more_close.len(),
                label,
            });
        }
        search_from = label_start;
    }

    None
}

/// Split a page into teaser and remainder without applying suppression
pub(crate) fn split_teaser_raw(page: &str, markers: &Markers) -> Teaser {
    match find_more_marker(page, markers) {
        Some(marker) => Teaser {
            teaser: markers.strip_no_teaser(&page[..marker.start]),
            remainder: markers.strip_no_teaser(&page[marker.end..]),
            has_more_marker: true,
            label: marker.label.trim().to_string(),
            suppressed: false,
        },
        None => Teaser {
            teaser: page.to_string(),
            remainder: String::new(),
            has_more_marker: false,
            label: String::new(),
            suppressed: false,
        },
    }
}

/// Split a page into teaser and remainder on the first more-marker
///
/// Without a marker the teaser is the whole page and the remainder is empty.
/// When the page has a more-marker and the suppress-teaser marker appears
/// anywhere in it (before or after the more-marker), the teaser is reported
/// empty.
pub fn split_teaser(page: &str, markers: &Markers) -> Teaser {
    let mut split = split_teaser_raw(page, markers);

    if split.has_more_marker && markers.suppresses_teaser(page) {
        split.teaser.clear();
        split.suppressed = true;
    }

    split
}
