//! Constants shared across the runtime

/// Lifecycle and transform channels the runtime dispatches on its own.
///
/// Templates may subscribe to any of these without further registration.
pub mod events {
    /// Fired once per advanced item with `(item, cursor)`.
    pub const ITEM_ADVANCED: &str = "item-advanced";

    /// Fired before the first `item-advanced` of a cursor with `(cursor)`.
    pub const LOOP_START: &str = "loop-start";

    /// Fired after the last item of a walked cursor with `(cursor)`.
    pub const LOOP_END: &str = "loop-end";

    /// Value channel for the rendered body, with the current item as extra argument.
    pub const ITEM_BODY: &str = "item-body";

    /// Value channel for the "read more" link HTML, with the link label as extra argument.
    pub const MORE_LINK: &str = "more-link";

    /// Catch-all channel invoked ahead of every other event.
    pub const ALL: &str = "all";
}

/// Registration defaults
pub mod hooks {
    /// Priority used when the caller does not pick one
    pub const DEFAULT_PRIORITY: i32 = 10;

    /// Accepted argument count used when the caller does not pick one
    pub const DEFAULT_ACCEPTED_ARGS: usize = 1;
}

/// In-band body markers
pub mod markers {
    pub const PAGE_BREAK: &str = "<!--nextpage-->";

    /// Opening of the more-marker; inline label text may follow before the close.
    pub const MORE_OPEN: &str = "<!--more";

    pub const MORE_CLOSE: &str = "-->";

    pub const NO_TEASER: &str = "<!--noteaser-->";
}

/// Rendering defaults
pub mod render {
    pub const MORE_LABEL: &str = "(more…)";
}
