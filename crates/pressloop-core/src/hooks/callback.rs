//! Callback and argument types accepted at the registry boundary

use super::HookRegistry;
use crate::cursor::CursorInfo;
use crate::item::ContentItem;
use std::fmt;
use std::rc::Rc;

/// A value passed to, or returned from, a callback
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HookArg {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    Item(Rc<ContentItem>),
    Cursor(CursorInfo),
    Json(serde_json::Value),
}

impl HookArg {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HookArg::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            HookArg::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HookArg::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&Rc<ContentItem>> {
        match self {
            HookArg::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_cursor(&self) -> Option<CursorInfo> {
        match self {
            HookArg::Cursor(info) => Some(*info),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, HookArg::Null)
    }

    /// Render the value as output text
    ///
    /// Items render as their body; null renders as the empty string.
    pub fn into_text(self) -> String {
        match self {
            HookArg::Text(s) => s,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for HookArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookArg::Null => Ok(()),
            HookArg::Bool(b) => write!(f, "{}", b),
            HookArg::Int(i) => write!(f, "{}", i),
            HookArg::Text(s) => f.write_str(s),
            HookArg::Item(item) => f.write_str(&item.body),
            HookArg::Cursor(info) => write!(f, "cursor#{}", info.id),
            HookArg::Json(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for HookArg {
    fn from(value: &str) -> Self {
        HookArg::Text(value.to_string())
    }
}

impl From<String> for HookArg {
    fn from(value: String) -> Self {
        HookArg::Text(value)
    }
}

impl From<i64> for HookArg {
    fn from(value: i64) -> Self {
        HookArg::Int(value)
    }
}

impl From<bool> for HookArg {
    fn from(value: bool) -> Self {
        HookArg::Bool(value)
    }
}

impl From<Rc<ContentItem>> for HookArg {
    fn from(value: Rc<ContentItem>) -> Self {
        HookArg::Item(value)
    }
}

impl From<ContentItem> for HookArg {
    fn from(value: ContentItem) -> Self {
        HookArg::Item(Rc::new(value))
    }
}

impl From<CursorInfo> for HookArg {
    fn from(value: CursorInfo) -> Self {
        HookArg::Cursor(value)
    }
}

impl From<serde_json::Value> for HookArg {
    fn from(value: serde_json::Value) -> Self {
        HookArg::Json(value)
    }
}

/// Signature every callback is reduced to
///
/// The registry is handed back so a callback can fire further events.
pub type HandlerFn = dyn Fn(&HookRegistry, &[HookArg]) -> HookArg;

/// A shared, invocable callback body
#[derive(Clone)]
pub struct Handler(Rc<HandlerFn>);

impl Handler {
    pub fn new(f: impl Fn(&HookRegistry, &[HookArg]) -> HookArg + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub(crate) fn call(&self, hooks: &HookRegistry, args: &[HookArg]) -> HookArg {
        (self.0)(hooks, args)
    }

    /// Address of the shared allocation, used as closure identity
    fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:#x})", self.addr())
    }
}

/// Identity of a callback for removal and lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallbackId {
    Named(String),
    Closure(usize),
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackId::Named(name) => f.write_str(name),
            CallbackId::Closure(addr) => write!(f, "closure@{:#x}", addr),
        }
    }
}

/// Anything that can be registered against an event
///
/// A callback is either a function looked up by name in the registry's
/// function table, or an inline closure. Closures are identified by their
/// allocation, so keep a clone of the `Callback` around to remove it later.
#[derive(Debug, Clone)]
pub enum Callback {
    Named(String),
    Handler(Handler),
}

impl Callback {
    /// Callback resolved by name when it is registered
    pub fn named(name: impl Into<String>) -> Self {
        Callback::Named(name.into())
    }

    /// Callback from a closure returning a value (transforms)
    pub fn new(f: impl Fn(&HookRegistry, &[HookArg]) -> HookArg + 'static) -> Self {
        Callback::Handler(Handler::new(f))
    }

    /// Callback from a closure with no result (lifecycle listeners)
    pub fn action(f: impl Fn(&HookRegistry, &[HookArg]) + 'static) -> Self {
        Self::new(move |hooks, args| {
            f(hooks, args);
            HookArg::Null
        })
    }

    /// Transform over the first argument as text
    ///
    /// Non-text values pass through untouched.
    pub fn map_text(f: impl Fn(&str) -> String + 'static) -> Self {
        Self::new(text_transform(f))
    }

    pub fn id(&self) -> CallbackId {
        match self {
            Callback::Named(name) => CallbackId::Named(name.clone()),
            Callback::Handler(handler) => CallbackId::Closure(handler.addr()),
        }
    }
}

/// Handler applying `f` to a text first argument; other values pass through
pub(crate) fn text_transform(
    f: impl Fn(&str) -> String + 'static,
) -> impl Fn(&HookRegistry, &[HookArg]) -> HookArg + 'static {
    move |_, args| match args.first() {
        Some(HookArg::Text(text)) => HookArg::Text(f(text)),
        Some(other) => other.clone(),
        None => HookArg::Null,
    }
}

impl From<Handler> for Callback {
    fn from(handler: Handler) -> Self {
        Callback::Handler(handler)
    }
}
