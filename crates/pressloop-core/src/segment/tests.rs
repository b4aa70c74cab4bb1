//! Tests for content segmentation

use super::*;

fn pages(body: &str) -> Vec<String> {
    split_pages(body, "<br>")
}

#[test]
fn test_split_pages_on_marker() {
    assert_eq!(pages("P1<br>P2<br>P3"), vec!["P1", "P2", "P3"]);
}

#[test]
fn test_split_pages_without_marker_is_single_page() {
    assert_eq!(pages("no marker"), vec!["no marker"]);
}

#[test]
fn test_split_pages_empty_body_is_one_empty_page() {
    assert_eq!(pages(""), vec![""]);
}

#[test]
fn test_split_pages_strips_whitespace_around_marker() {
    let body = "First page\n\n<br>\n\nSecond page\n<br>\nThird page";
    assert_eq!(pages(body), vec!["First page", "Second page", "Third page"]);
}

#[test]
fn test_split_pages_keeps_outer_whitespace() {
    // Only whitespace touching a marker is dropped
    assert_eq!(pages("  P1 <br> P2  "), vec!["  P1", "P2  "]);
}

#[test]
fn test_split_pages_without_marker_keeps_body_verbatim() {
    assert_eq!(pages("  padded\n"), vec!["  padded\n"]);
}

#[test]
fn test_split_pages_ignores_leading_marker() {
    assert_eq!(pages("<br>\nP1<br>P2"), vec!["P1", "P2"]);
    assert_eq!(pages("\n<br>only"), vec!["only"]);
}

#[test]
fn test_split_pages_trailing_marker_leaves_empty_last_page() {
    assert_eq!(pages("P1<br>"), vec!["P1", ""]);
}

#[test]
fn test_split_pages_with_default_marker() {
    let markers = Markers::default();
    let body = "Intro\n<!--nextpage-->\nMiddle\n<!--nextpage-->\nEnd";
    assert_eq!(markers.split_pages(body), vec!["Intro", "Middle", "End"]);
}

#[test]
fn test_split_pages_empty_marker_never_splits() {
    assert_eq!(split_pages("a b c", ""), vec!["a b c"]);
}

#[test]
fn test_split_teaser_on_more_marker() {
    let split = Markers::default().split_teaser("teaser<!--more-->rest");
    assert_eq!(split.teaser, "teaser");
    assert_eq!(split.remainder, "rest");
    assert!(split.has_more_marker);
    assert_eq!(split.label, "");
    assert!(!split.suppressed);
}

#[test]
fn test_split_teaser_without_marker() {
    let split = Markers::default().split_teaser("just a body");
    assert_eq!(split.teaser, "just a body");
    assert_eq!(split.remainder, "");
    assert!(!split.has_more_marker);
    assert_eq!(split.label, "");
}

#[test]
fn test_split_teaser_custom_label() {
    let split = Markers::default().split_teaser("Lead<!--more  Keep reading -->Body");
    assert_eq!(split.teaser, "Lead");
    assert_eq!(split.remainder, "Body");
    assert_eq!(split.label, "Keep reading");
}

#[test]
fn test_split_teaser_splits_on_first_marker_only() {
    let split = Markers::default().split_teaser("a<!--more-->b<!--more-->c");
    assert_eq!(split.teaser, "a");
    assert_eq!(split.remainder, "b<!--more-->c");
}

#[test]
fn test_split_teaser_unclosed_marker_is_not_a_marker() {
    let split = Markers::default().split_teaser("a<!--more b");
    assert!(!split.has_more_marker);
    assert_eq!(split.teaser, "a<!--more b");
}

#[test]
fn test_split_teaser_label_cannot_span_lines() {
    let split = Markers::default().split_teaser("a<!--more\nx-->b<!--more-->c");
    assert!(split.has_more_marker);
    assert_eq!(split.teaser, "a<!--more\nx-->b");
    assert_eq!(split.remainder, "c");
}

#[test]
fn test_no_teaser_before_more_marker_suppresses_teaser() {
    let split = Markers::default().split_teaser("<!--noteaser-->Lead<!--more-->Body");
    assert_eq!(split.teaser, "");
    assert_eq!(split.remainder, "Body");
    assert!(split.suppressed);
}

#[test]
fn test_no_teaser_after_more_marker_still_suppresses_teaser() {
    let split = Markers::default().split_teaser("Lead<!--more-->Body<!--noteaser-->");
    assert_eq!(split.teaser, "");
    assert_eq!(split.remainder, "Body");
    assert!(split.suppressed);
}

#[test]
fn test_no_teaser_without_more_marker_keeps_body() {
    let split = Markers::default().split_teaser("Body<!--noteaser-->");
    assert_eq!(split.teaser, "Body<!--noteaser-->");
    assert!(!split.suppressed);
}

#[test]
fn test_split_teaser_with_custom_markers() {
    let markers = Markers {
        page_break: "<br>".to_string(),
        more: "[more".to_string(),
        more_close: "]".to_string(),
        no_teaser: "[noteaser]".to_string(),
    };
    let split = markers.split_teaser("Top[more Next]Bottom");
    assert_eq!(split.teaser, "Top");
    assert_eq!(split.remainder, "Bottom");
    assert_eq!(split.label, "Next");
}

#[test]
fn test_split_teaser_empty_more_marker_never_matches() {
    let markers = Markers {
        more: String::new(),
        ..Markers::default()
    };

    // An empty opener would match at every offset
    let split = split_teaser("a\nb-->rest", &markers);

    assert!(!split.has_more_marker);
    assert_eq!(split.teaser, "a\nb-->rest");
    assert!(split.remainder.is_empty());
}

#[test]
fn test_split_teaser_empty_suppress_marker_keeps_teaser() {
    let markers = Markers {
        no_teaser: String::new(),
        ..Markers::default()
    };

    let split = split_teaser("lead<!--more-->rest", &markers);

    assert!(split.has_more_marker);
    assert!(!split.suppressed);
    assert_eq!(split.teaser, "lead");
    assert_eq!(split.remainder, "rest");
    assert!(!markers.suppresses_teaser("lead<!--more-->rest"));
}

#[test]
fn test_clamp_page_number() {
    assert_eq!(clamp_page_number(99, 3), 3);
    assert_eq!(clamp_page_number(0, 3), 1);
    assert_eq!(clamp_page_number(2, 3), 2);
}

#[test]
fn test_clamp_page_number_edges() {
    assert_eq!(clamp_page_number(-5, 3), 1);
    assert_eq!(clamp_page_number(1, 0), 1);
    assert_eq!(clamp_page_number(7, 0), 1);
    assert_eq!(clamp_page_number(i64::MAX, 4), 4);
}
