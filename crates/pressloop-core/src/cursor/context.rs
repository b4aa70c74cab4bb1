//! Shared loop context: the current-item slot and its save/restore stack

use crate::item::ContentItem;
use crate::segment::{clamp_page_number, Markers};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything known about the item a cursor last advanced onto
///
/// This is both the live current-item slot and the unit saved on the
/// context stack while a nested cursor runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFrame {
    pub item: Rc<ContentItem>,
    /// Position the item was read at in its cursor
    pub position: usize,
    /// Id of the cursor that produced the item
    pub cursor: u64,
    /// 1-based page being rendered
    pub page: usize,
    /// Whether the full view (past the more-marker) is shown
    pub more: bool,
    pub pages: Vec<String>,
}

impl ItemFrame {
    fn new(item: Rc<ContentItem>, position: usize, cursor: u64, markers: &Markers) -> Self {
        let pages = markers.split_pages(&item.body);
        Self {
            item,
            position,
            cursor,
            page: 1,
            more: false,
            pages,
        }
    }

    pub fn is_multipage(&self) -> bool {
        self.pages.len() > 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Body of the current page
    pub fn page_body(&self) -> &str {
        self.pages
            .get(self.page.saturating_sub(1))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
struct LoopState {
    current: Option<ItemFrame>,
    stack: Vec<ItemFrame>,
    markers: Markers,
    next_cursor_id: u64,
}

/// Handle to the single current-item slot shared by every cursor
///
/// Cloning the handle shares the slot; cursors and renderers built from
/// clones of one context see the same current item. The context is
/// single-threaded and must not be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LoopContext {
    state: Rc<RefCell<LoopState>>,
}

impl LoopContext {
    /// Context using the default markers
    pub fn new() -> Self {
        Self::default()
    }

    /// Context deriving page lists with custom markers
    pub fn with_markers(markers: Markers) -> Self {
        let context = Self::default();
        context.state.borrow_mut().markers = markers;
        context
    }

    pub fn markers(&self) -> Markers {
        self.state.borrow().markers.clone()
    }

    /// Item in the current-item slot, or `None` before any advance
    pub fn current_item(&self) -> Option<Rc<ContentItem>> {
        self.state
            .borrow()
            .current
            .as_ref()
            .map(|frame| Rc::clone(&frame.item))
    }

    /// Copy of the full current-item slot
    pub fn current_frame(&self) -> Option<ItemFrame> {
        self.state.borrow().current.clone()
    }

    /// Current page number; 1 when nothing is current
    pub fn current_page(&self) -> usize {
        self.state
            .borrow()
            .current
            .as_ref()
            .map_or(1, |frame| frame.page)
    }

    /// Select the page to render, clamped to the pages of the current item
    ///
    /// Returns the page actually selected. Without a current item nothing
    /// changes and 1 is returned.
    pub fn set_page(&self, requested: i64) -> usize {
        let mut state = self.state.borrow_mut();
        match state.current.as_mut() {
            Some(frame) => {
                frame.page = clamp_page_number(requested, frame.page_count());
                frame.page
            }
            None => 1,
        }
    }

    /// Switch the current item between teaser and full view
    pub fn show_more(&self, more: bool) {
        if let Some(frame) = self.state.borrow_mut().current.as_mut() {
            frame.more = more;
        }
    }

    pub fn is_more_shown(&self) -> bool {
        self.state
            .borrow()
            .current
            .as_ref()
            .is_some_and(|frame| frame.more)
    }

    /// Page list of the current item; empty when nothing is current
    pub fn pages(&self) -> Vec<String> {
        self.state
            .borrow()
            .current
            .as_ref()
            .map(|frame| frame.pages.clone())
            .unwrap_or_default()
    }

    pub fn is_multipage(&self) -> bool {
        self.state
            .borrow()
            .current
            .as_ref()
            .is_some_and(ItemFrame::is_multipage)
    }

    /// Number of saved snapshots waiting to be restored
    pub fn stack_depth(&self) -> usize {
        self.state.borrow().stack.len()
    }

    /// Register a new cursor, saving the current slot if it is occupied
    pub(crate) fn begin_cursor(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.next_cursor_id += 1;
        let id = state.next_cursor_id;

        if let Some(frame) = state.current.clone() {
            tracing::debug!(
                "Cursor {} saves item {} (depth {})",
                id,
                frame.item.id,
                state.stack.len() + 1
            );
            state.stack.push(frame);
        }

        id
    }

    /// Put `item` in the slot with fresh per-item flags
    pub(crate) fn set_current(&self, item: Rc<ContentItem>, position: usize, cursor: u64) {
        let mut state = self.state.borrow_mut();
        let frame = ItemFrame::new(item, position, cursor, &state.markers);
        state.current = Some(frame);
    }

    /// Pop the newest snapshot back into the slot; `false` if none was saved
    pub(crate) fn restore(&self) -> bool {
        let mut state = self.state.borrow_mut();
        match state.stack.pop() {
            Some(frame) => {
                tracing::debug!(
                    "Restored item {} (depth {})",
                    frame.item.id,
                    state.stack.len()
                );
                state.current = Some(frame);
                true
            }
            None => false,
        }
    }
}
