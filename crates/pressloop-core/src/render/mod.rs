//! Body rendering for the current item
//!
//! Combines the loop context (current page, full or teaser view) with the
//! segmenter and passes the result through the `more-link` and `item-body`
//! channels of a [`HookRegistry`].

use crate::config::{consts, events, RenderConfig};
use crate::cursor::LoopContext;
use crate::hooks::{HookArg, HookRegistry};
use crate::segment::split_teaser_raw;
use serde::Serialize;
use std::rc::Rc;

/// Per-call rendering switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Link label used when the more-marker carries none
    pub more_label: String,
    /// Drop the teaser from the full view even without a suppress marker
    pub strip_teaser: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            more_label: consts::render::MORE_LABEL.to_string(),
            strip_teaser: false,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            more_label: config.more_label.clone(),
            ..Self::default()
        }
    }
}

/// Rendered body of the current item plus the position it was rendered at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBody {
    pub item_id: u64,
    pub title: String,
    /// 1-based page that was rendered
    pub page: usize,
    pub pages: usize,
    pub full_view: bool,
    pub has_more_marker: bool,
    pub body: String,
}

/// Render the body of the current item, or `None` when nothing is current
///
/// The full view shows the teaser, the `more-{id}` anchor the more-link
/// points at, and the remainder. Teaser and anchor are dropped when
/// `strip_teaser` is set, or on the first page of an item whose body carries
/// the suppress-teaser marker. The teaser view shows the teaser
/// followed by a more-link passed through [`events::MORE_LINK`] as
/// `(link, label)`. Either way the text is finally passed through
/// [`events::ITEM_BODY`] as `(body, item)`.
pub fn render_body(
    context: &LoopContext,
    hooks: &HookRegistry,
    options: &RenderOptions,
) -> Option<RenderedBody> {
    // Copy the slot out so callbacks are free to move the cursor
    let frame = context.current_frame()?;
    let markers = context.markers();
    let page = frame.page_body();
    let split = split_teaser_raw(page, &markers);

    let body = if !split.has_more_marker {
        split.teaser
    } else if frame.more {
        let suppressed = options.strip_teaser
            || (frame.page == 1 && markers.suppresses_teaser(&frame.item.body));
        if suppressed {
            split.remainder
        } else {
            format!(
                r#"{}<span id="more-{}"></span>{}"#,
                split.teaser, frame.item.id, split.remainder
            )
        }
    } else {
        let label = if split.label.is_empty() {
            options.more_label.as_str()
        } else {
            split.label.as_str()
        };
        let link = more_link(hooks, frame.item.id, label);
        let teaser = split.teaser.trim_end();
        if teaser.is_empty() {
            link
        } else {
            format!("{} {}", teaser, link)
        }
    };

    let body = hooks.apply_text(
        events::ITEM_BODY,
        body,
        &[HookArg::Item(Rc::clone(&frame.item))],
    );

    tracing::trace!(
        "Rendered item {} page {}/{}",
        frame.item.id,
        frame.page,
        frame.page_count()
    );

    Some(RenderedBody {
        item_id: frame.item.id,
        title: frame.item.title.clone(),
        page: frame.page,
        pages: frame.page_count(),
        full_view: frame.more,
        has_more_marker: split.has_more_marker,
        body,
    })
}

fn more_link(hooks: &HookRegistry, id: u64, label: &str) -> String {
    let link = format!(r##"<a href="#more-{}" class="more-link">{}</a>"##, id, label);
    hooks.apply_text(events::MORE_LINK, link, &[HookArg::Text(label.to_string())])
}
