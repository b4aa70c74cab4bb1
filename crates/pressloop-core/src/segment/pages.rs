//! Page splitting and page-number clamping

/// Split a body into pages on a literal page-break marker
///
/// A body without the marker yields exactly one page holding the body as-is,
/// including the empty body (one empty page, never zero pages). Whitespace
/// touching a marker is removed along with it, and a marker at the very start
/// of the body is ignored instead of producing an empty first page.
pub fn split_pages(body: &str, marker: &str) -> Vec<String> {
    if marker.is_empty() {
        return vec![body.to_string()];
    }

    let body = match body.trim_start().strip_prefix(marker) {
        Some(rest) => rest.trim_start(),
        None => body,
    };

    if !body.contains(marker) {
        return vec![body.to_string()];
    }

    let parts: Vec<&str> = body.split(marker).collect();
    let last = parts.len() - 1;

    parts
        .iter()
        .enumerate()
        .map(|(index, part)| {
            let mut page = *part;
            if index > 0 {
                page = page.trim_start();
            }
            if index < last {
                page = page.trim_end();
            }
            page.to_string()
        })
        .collect()
}

/// Clamp a requested page number into `[1, total_pages]`
///
/// Stale pagination links ask for pages that no longer exist; they land on
/// the last page instead of failing. A zero page count is treated as one page.
pub fn clamp_page_number(requested: i64, total_pages: usize) -> usize {
    let total = total_pages.max(1);
    if requested < 1 {
        return 1;
    }
    match usize::try_from(requested) {
        Ok(page) => page.min(total),
        Err(_) => total,
    }
}
