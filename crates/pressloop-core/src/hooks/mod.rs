//! Callback registry - priority-ordered, reentrant event dispatch
//!
//! Templates hook into the runtime by subscribing callbacks to named events.
//! There are two ways an event is dispatched:
//!
//! - [`HookRegistry::fire`]: every subscription is called, results are discarded.
//! - [`HookRegistry::apply`]: subscriptions form a pipeline; each receives the
//!   value produced by the previous one as its first argument.
//!
//! ## Ordering
//!
//! Subscriptions run by ascending priority (lower first). Inside one priority
//! they run in registration order.
//!
//! ## Reentrancy
//!
//! Callbacks receive the registry and may fire, apply, register or unregister
//! from inside a dispatch. Each dispatch works on the subscription list as it
//! was when the dispatch started; changes made by a running callback apply to
//! the next dispatch of that event. [`HookRegistry::current_event_name`]
//! always reports the innermost event being dispatched.
//!
//! ## Catch-all subscriptions
//!
//! Subscriptions to [`events::ALL`] run ahead of every other event and
//! receive the event name followed by that event's arguments.

mod builtins;
mod callback;
mod guard;

pub use builtins::BUILTIN_NAMES;
pub use callback::{CallbackId, Callback, Handler, HandlerFn, HookArg};

use crate::config::{consts, events};
use crate::error::PressloopError;
use guard::ExecutionGuard;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

/// One registered callback inside a priority group
#[derive(Debug, Clone)]
struct Subscription {
    id: CallbackId,
    handler: Handler,
    accepted_args: usize,
}

impl Subscription {
    /// Call with the argument list cut down to the accepted count
    fn invoke(&self, hooks: &HookRegistry, args: &[HookArg]) -> HookArg {
        let take = self.accepted_args.min(args.len());
        self.handler.call(hooks, &args[..take])
    }
}

/// Subscriptions of one event, grouped by priority
type PriorityGroups = BTreeMap<i32, Vec<Subscription>>;

/// Returned by [`HookRegistry::register`]; identifies one subscription
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    pub event: String,
    pub callback: CallbackId,
    pub priority: i32,
}

/// Legacy-shaped answer of [`HookRegistry::has_subscription`]
///
/// Asking without a callback answers "is anything subscribed"; asking with a
/// callback answers "at which priority". A priority of `0` is a valid answer
/// and is not the same as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionQuery {
    Any(bool),
    Priority(Option<i32>),
}

/// Event registry owning subscriptions, counters and the executing stack
#[derive(Debug, Default)]
pub struct HookRegistry {
    events: RefCell<HashMap<String, PriorityGroups>>,
    functions: RefCell<HashMap<String, Handler>>,
    counts: RefCell<HashMap<String, u64>>,
    executing: RefCell<Vec<String>>,
}

impl HookRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry whose function table holds the built-in transforms
    pub fn with_builtins() -> Self {
        let hooks = Self::new();
        builtins::install(&hooks);
        hooks
    }

    /// Add a named function that callbacks may refer to by name
    ///
    /// Redefining a name affects registrations made afterwards only.
    pub fn define_function(
        &self,
        name: impl Into<String>,
        f: impl Fn(&HookRegistry, &[HookArg]) -> HookArg + 'static,
    ) {
        let name = name.into();
        tracing::trace!("Defining function '{}'", name);
        self.functions.borrow_mut().insert(name, Handler::new(f));
    }

    /// Whether a named function is defined
    pub fn is_defined(&self, name: &str) -> bool {
        self.functions.borrow().contains_key(name)
    }

    fn resolve(&self, event: &str, callback: &Callback) -> crate::error::Result<Handler> {
        match callback {
            Callback::Handler(handler) => Ok(handler.clone()),
            Callback::Named(name) => {
                let found = if name.trim().is_empty() {
                    None
                } else {
                    self.functions.borrow().get(name).cloned()
                };
                found.ok_or_else(|| PressloopError::InvalidCallback {
                    event: event.to_string(),
                    callback: name.clone(),
                })
            }
        }
    }

    /// Subscribe a callback to an event
    ///
    /// Registering the same callback twice at the same priority updates the
    /// accepted argument count but keeps the original position in the group.
    ///
    /// # Errors
    ///
    /// Returns [`PressloopError::InvalidCallback`] when a named callback does
    /// not resolve to a defined function. Nothing is registered in that case.
    pub fn register(
        &self,
        event: &str,
        callback: impl Into<Callback>,
        priority: i32,
        accepted_args: usize,
    ) -> crate::error::Result<SubscriptionHandle> {
        let callback = callback.into();
        let handler = self.resolve(event, &callback)?;
        let id = callback.id();

        let mut events = self.events.borrow_mut();
        let group = events
            .entry(event.to_string())
            .or_default()
            .entry(priority)
            .or_default();

        match group.iter_mut().find(|sub| sub.id == id) {
            Some(existing) => {
                existing.handler = handler;
                existing.accepted_args = accepted_args;
            }
            None => group.push(Subscription {
                id: id.clone(),
                handler,
                accepted_args,
            }),
        }

        tracing::debug!(
            "Registered '{}' on '{}' (priority {}, {} arg(s))",
            id,
            event,
            priority,
            accepted_args
        );

        Ok(SubscriptionHandle {
            event: event.to_string(),
            callback: id,
            priority,
        })
    }

    /// Subscribe with the default priority and accepted argument count
    pub fn subscribe(
        &self,
        event: &str,
        callback: impl Into<Callback>,
    ) -> crate::error::Result<SubscriptionHandle> {
        self.register(
            event,
            callback,
            consts::hooks::DEFAULT_PRIORITY,
            consts::hooks::DEFAULT_ACCEPTED_ARGS,
        )
    }

    fn remove(&self, event: &str, id: &CallbackId, priority: i32) -> bool {
        let mut events = self.events.borrow_mut();
        let Some(groups) = events.get_mut(event) else {
            return false;
        };
        let Some(group) = groups.get_mut(&priority) else {
            return false;
        };
        let Some(index) = group.iter().position(|sub| &sub.id == id) else {
            return false;
        };

        group.remove(index);
        if group.is_empty() {
            groups.remove(&priority);
        }
        if groups.is_empty() {
            events.remove(event);
        }

        tracing::debug!("Unregistered '{}' from '{}' (priority {})", id, event, priority);
        true
    }

    /// Remove a subscription; `false` when it was not registered
    pub fn unregister(&self, event: &str, callback: &Callback, priority: i32) -> bool {
        self.remove(event, &callback.id(), priority)
    }

    /// Remove the subscription a handle refers to
    pub fn unregister_handle(&self, handle: &SubscriptionHandle) -> bool {
        self.remove(&handle.event, &handle.callback, handle.priority)
    }

    /// Remove every subscription of an event, or only one priority group
    ///
    /// Returns the number of subscriptions removed.
    pub fn remove_all(&self, event: &str, priority: Option<i32>) -> usize {
        let mut events = self.events.borrow_mut();
        let removed = match priority {
            Some(priority) => {
                let Some(groups) = events.get_mut(event) else {
                    return 0;
                };
                let removed = groups.remove(&priority).map_or(0, |group| group.len());
                if groups.is_empty() {
                    events.remove(event);
                }
                removed
            }
            None => events
                .remove(event)
                .map_or(0, |groups| groups.values().map(Vec::len).sum()),
        };

        if removed > 0 {
            tracing::debug!("Removed {} subscription(s) from '{}'", removed, event);
        }
        removed
    }

    /// Whether anything is subscribed to `event`
    pub fn exists(&self, event: &str) -> bool {
        self.events
            .borrow()
            .get(event)
            .is_some_and(|groups| groups.values().any(|group| !group.is_empty()))
    }

    /// Priority at which `callback` is subscribed to `event`
    pub fn priority_of(&self, event: &str, callback: &Callback) -> Option<i32> {
        let id = callback.id();
        self.events.borrow().get(event).and_then(|groups| {
            groups
                .iter()
                .find(|(_, group)| group.iter().any(|sub| sub.id == id))
                .map(|(priority, _)| *priority)
        })
    }

    /// Legacy dual-mode lookup: existence without a callback, priority with one
    pub fn has_subscription(&self, event: &str, callback: Option<&Callback>) -> SubscriptionQuery {
        match callback {
            None => SubscriptionQuery::Any(self.exists(event)),
            Some(callback) => SubscriptionQuery::Priority(self.priority_of(event, callback)),
        }
    }

    /// Number of subscriptions on `event`
    pub fn subscription_count(&self, event: &str) -> usize {
        self.events
            .borrow()
            .get(event)
            .map_or(0, |groups| groups.values().map(Vec::len).sum())
    }

    /// How many times `event` was fired or applied; 0 if never
    pub fn invocation_count(&self, event: &str) -> u64 {
        self.counts.borrow().get(event).copied().unwrap_or(0)
    }

    /// Innermost event currently being dispatched
    pub fn current_event_name(&self) -> Option<String> {
        self.executing.borrow().last().cloned()
    }

    /// Whether `event` is being dispatched at any nesting depth
    pub fn is_executing(&self, event: &str) -> bool {
        self.executing.borrow().iter().any(|name| name == event)
    }

    /// Depth of nested dispatches in progress
    pub fn executing_depth(&self) -> usize {
        self.executing.borrow().len()
    }

    fn bump(&self, event: &str) {
        *self.counts.borrow_mut().entry(event.to_string()).or_insert(0) += 1;
    }

    /// Copy out the ordered subscriptions so no borrow is held while calling
    fn snapshot(&self, event: &str) -> Vec<Subscription> {
        self.events
            .borrow()
            .get(event)
            .map(|groups| groups.values().flatten().cloned().collect())
            .unwrap_or_default()
    }

    fn run_catch_all(&self, event: &str, args: &[HookArg]) {
        if event == events::ALL {
            return;
        }
        let subscriptions = self.snapshot(events::ALL);
        if subscriptions.is_empty() {
            return;
        }

        let mut all_args = Vec::with_capacity(args.len() + 1);
        all_args.push(HookArg::Text(event.to_string()));
        all_args.extend_from_slice(args);
        for sub in &subscriptions {
            sub.invoke(self, &all_args);
        }
    }

    /// Call every subscription of `event`, discarding results
    ///
    /// The invocation counter grows even when nobody is subscribed.
    pub fn fire(&self, event: &str, args: &[HookArg]) {
        self.bump(event);

        if !self.exists(event) && !self.exists(events::ALL) {
            tracing::trace!("Fired '{}' with no subscriptions", event);
            return;
        }

        let _guard = ExecutionGuard::enter(&self.executing, event);
        self.run_catch_all(event, args);

        let subscriptions = self.snapshot(event);
        tracing::trace!("Firing '{}' to {} subscription(s)", event, subscriptions.len());
        for sub in &subscriptions {
            sub.invoke(self, args);
        }
    }

    /// Thread `value` through every subscription of `event`
    ///
    /// Each subscription receives the current value followed by `extra` and
    /// returns the replacement. Without subscriptions `value` comes back as-is.
    pub fn apply(&self, event: &str, value: HookArg, extra: &[HookArg]) -> HookArg {
        self.bump(event);

        if !self.exists(event) && !self.exists(events::ALL) {
            tracing::trace!("Applied '{}' with no subscriptions", event);
            return value;
        }

        let mut args = Vec::with_capacity(extra.len() + 1);
        args.push(value);
        args.extend_from_slice(extra);

        let _guard = ExecutionGuard::enter(&self.executing, event);
        self.run_catch_all(event, &args);

        let subscriptions = self.snapshot(event);
        tracing::trace!("Applying '{}' through {} subscription(s)", event, subscriptions.len());
        for sub in &subscriptions {
            args[0] = sub.invoke(self, &args);
        }

        args.swap_remove(0)
    }

    /// [`apply`](Self::apply) for text values
    pub fn apply_text(&self, event: &str, text: impl Into<String>, extra: &[HookArg]) -> String {
        self.apply(event, HookArg::Text(text.into()), extra).into_text()
    }
}
