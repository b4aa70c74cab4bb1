// Core modules
pub mod config;
pub mod cursor;
pub mod error;
pub mod hooks;
pub mod item;
pub mod render;
pub mod segment;

// Re-export commonly used types
pub use cursor::{CursorInfo, CursorState, LoopContext, ResultCursor};
pub use error::{PressloopError, Result};
pub use hooks::{Callback, HookArg, HookRegistry, SubscriptionHandle, SubscriptionQuery};
pub use item::{ContentItem, ItemStatus};
pub use segment::{Markers, Teaser};
