//! Result cursor - walk a result set while maintaining the current item
//!
//! A [`ResultCursor`] owns an ordered sequence of items fixed at construction
//! and a position that starts before the first item. Every advance moves the
//! shared current-item slot of its [`LoopContext`] onto the next item and
//! fires [`events::ITEM_ADVANCED`].
//!
//! ## Nesting
//!
//! Constructing a cursor while the slot holds an item saves that item on the
//! context stack. After the nested iteration, [`ResultCursor::reset`] puts it
//! back:
//!
//! ```
//! use pressloop_core::{ContentItem, HookRegistry, LoopContext, ResultCursor};
//!
//! let hooks = HookRegistry::new();
//! let context = LoopContext::new();
//!
//! let mut outer = ResultCursor::new(&context, vec![ContentItem::new(1, "a")]);
//! outer.advance(&hooks);
//!
//! let mut inner = ResultCursor::new(&context, vec![ContentItem::new(2, "b")]);
//! inner.advance(&hooks);
//! assert_eq!(context.current_item().map(|item| item.id), Some(2));
//!
//! inner.reset();
//! assert_eq!(context.current_item().map(|item| item.id), Some(1));
//! ```
//!
//! Operations that cannot do anything useful (advancing past the end,
//! resetting with nothing saved) are silent no-ops.

mod context;

pub use context::{ItemFrame, LoopContext};

use crate::config::events;
use crate::hooks::{HookArg, HookRegistry};
use crate::item::ContentItem;
use std::rc::Rc;

/// Where a cursor is in its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Before the first item
    Unstarted,
    /// On an item with more to come
    Active,
    /// On the last item
    Exhausted,
}

/// Snapshot of a cursor passed to lifecycle callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorInfo {
    pub id: u64,
    /// Zero-based position, -1 before the first advance
    pub position: i64,
    pub len: usize,
}

/// Cursor over an ordered, externally supplied item sequence
#[derive(Debug)]
pub struct ResultCursor {
    id: u64,
    items: Vec<Rc<ContentItem>>,
    position: i64,
    context: LoopContext,
}

impl ResultCursor {
    /// Create a cursor over `items`
    ///
    /// If `context` already holds a current item, it is saved on the context
    /// stack so [`reset`](Self::reset) can bring it back after this cursor
    /// has been iterated.
    pub fn new(context: &LoopContext, items: Vec<ContentItem>) -> Self {
        Self::from_shared(context, items.into_iter().map(Rc::new).collect())
    }

    /// Create a cursor over items that are already shared
    pub fn from_shared(context: &LoopContext, items: Vec<Rc<ContentItem>>) -> Self {
        let id = context.begin_cursor();
        tracing::trace!("Cursor {} created over {} item(s)", id, items.len());
        Self {
            id,
            items,
            position: -1,
            context: context.clone(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Rc<ContentItem>] {
        &self.items
    }

    pub fn context(&self) -> &LoopContext {
        &self.context
    }

    /// Zero-based position of the item last advanced onto, -1 before that
    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn state(&self) -> CursorState {
        if self.position < 0 {
            CursorState::Unstarted
        } else if self.has_more() {
            CursorState::Active
        } else {
            CursorState::Exhausted
        }
    }

    pub fn info(&self) -> CursorInfo {
        CursorInfo {
            id: self.id,
            position: self.position,
            len: self.items.len(),
        }
    }

    /// Whether another [`advance`](Self::advance) would move the cursor
    pub fn has_more(&self) -> bool {
        self.position + 1 < self.items.len() as i64
    }

    /// Item at this cursor's position, or `None` before the first advance
    pub fn current(&self) -> Option<Rc<ContentItem>> {
        usize::try_from(self.position)
            .ok()
            .and_then(|index| self.items.get(index))
            .cloned()
    }

    /// Move onto the next item
    ///
    /// Fills the shared slot with the item, its page list and fresh per-item
    /// flags, then fires [`events::ITEM_ADVANCED`] with `(item, cursor)`. The
    /// first advance from the unstarted state fires [`events::LOOP_START`]
    /// beforehand. Without further items this does nothing and returns `None`.
    pub fn advance(&mut self, hooks: &HookRegistry) -> Option<Rc<ContentItem>> {
        if !self.has_more() {
            tracing::trace!("Cursor {} has no more items", self.id);
            return None;
        }

        if self.position < 0 {
            hooks.fire(events::LOOP_START, &[HookArg::Cursor(self.info())]);
        }

        self.position += 1;
        let index = self.position as usize;
        let item = Rc::clone(&self.items[index]);
        self.context.set_current(Rc::clone(&item), index, self.id);
        tracing::trace!("Cursor {} advanced to item {} at {}", self.id, item.id, index);

        hooks.fire(
            events::ITEM_ADVANCED,
            &[HookArg::Item(Rc::clone(&item)), HookArg::Cursor(self.info())],
        );

        Some(item)
    }

    /// Restore the shared slot after a nested iteration
    ///
    /// Pops the newest saved snapshot. With nothing saved, the slot is
    /// re-synchronized to this cursor's own item; before its first advance
    /// that is a no-op.
    pub fn reset(&self) {
        if self.context.restore() {
            return;
        }

        if let Some(item) = self.current() {
            self.context
                .set_current(item, self.position as usize, self.id);
        }
    }

    /// Move back before the first item; the shared slot is left as it is
    pub fn rewind(&mut self) {
        self.position = -1;
    }

    /// Iterate the remaining items, calling `f` for each
    ///
    /// After the last item [`events::LOOP_END`] is fired (unless nothing was
    /// visited) and the context is [`reset`](Self::reset). Returns the number
    /// of items visited.
    pub fn walk<F>(&mut self, hooks: &HookRegistry, mut f: F) -> usize
    where
        F: FnMut(&Rc<ContentItem>, &LoopContext),
    {
        let mut visited = 0;
        while let Some(item) = self.advance(hooks) {
            f(&item, &self.context);
            visited += 1;
        }

        if visited > 0 {
            hooks.fire(events::LOOP_END, &[HookArg::Cursor(self.info())]);
        }
        self.reset();

        visited
    }
}

#[cfg(test)]
mod tests;
