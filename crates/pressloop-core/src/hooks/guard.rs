//! RAII guard for the executing-event stack

use std::cell::RefCell;

/// Keeps an event name on the executing stack while callbacks run
///
/// The name is popped when the guard is dropped, so the stack unwinds even
/// when a callback panics or an invocation returns early.
#[derive(Debug)]
pub(crate) struct ExecutionGuard<'a> {
    stack: &'a RefCell<Vec<String>>,
}

impl<'a> ExecutionGuard<'a> {
    pub(crate) fn enter(stack: &'a RefCell<Vec<String>>, event: &str) -> Self {
        stack.borrow_mut().push(event.to_string());
        Self { stack }
    }
}

impl Drop for ExecutionGuard<'_> {
    fn drop(&mut self) {
        self.stack.borrow_mut().pop();
    }
}
