//! Tests for result cursors and the loop context

use super::*;
use crate::hooks::Callback;
use crate::segment::Markers;
use pressloop_testkit::CallLog;

fn items(ids: &[u64]) -> Vec<ContentItem> {
    ids.iter()
        .map(|id| ContentItem::new(*id, format!("body {}", id)))
        .collect()
}

fn current_id(context: &LoopContext) -> Option<u64> {
    context.current_item().map(|item| item.id)
}

#[test]
fn test_empty_cursor_never_advances() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut cursor = ResultCursor::new(&context, Vec::new());

    assert!(!cursor.has_more());
    assert!(cursor.advance(&hooks).is_none());
    assert!(!cursor.has_more());
    assert_eq!(cursor.position(), -1);
    assert_eq!(cursor.state(), CursorState::Unstarted);
    assert!(context.current_item().is_none());
    assert_eq!(hooks.invocation_count(events::ITEM_ADVANCED), 0);
}

#[test]
fn test_positions_follow_advances() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut cursor = ResultCursor::new(&context, items(&[10, 11, 12]));

    let mut positions = Vec::new();
    while cursor.has_more() {
        cursor.advance(&hooks);
        positions.push(cursor.position());
    }

    assert_eq!(positions, vec![0, 1, 2]);
    assert!(!cursor.has_more());
    assert_eq!(current_id(&context), Some(12));
}

#[test]
fn test_advance_past_end_is_noop() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut cursor = ResultCursor::new(&context, items(&[1]));

    assert_eq!(cursor.advance(&hooks).map(|item| item.id), Some(1));
    assert!(cursor.advance(&hooks).is_none());
    assert_eq!(cursor.position(), 0);
    assert_eq!(hooks.invocation_count(events::ITEM_ADVANCED), 1);
}

#[test]
fn test_state_transitions() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut cursor = ResultCursor::new(&context, items(&[1, 2]));

    assert_eq!(cursor.state(), CursorState::Unstarted);
    cursor.advance(&hooks);
    assert_eq!(cursor.state(), CursorState::Active);
    cursor.advance(&hooks);
    assert_eq!(cursor.state(), CursorState::Exhausted);

    cursor.rewind();
    assert_eq!(cursor.state(), CursorState::Unstarted);
    assert!(cursor.has_more());
}

#[test]
fn test_current_before_first_advance() {
    let context = LoopContext::new();
    let cursor = ResultCursor::new(&context, items(&[1]));

    assert!(cursor.current().is_none());
    assert_eq!(cursor.len(), 1);
    assert!(!cursor.is_empty());
}

#[test]
fn test_advance_fires_item_advanced_with_item_and_cursor() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let log = CallLog::new();

    let seen = log.clone();
    hooks
        .register(
            events::ITEM_ADVANCED,
            Callback::action(move |_, args| {
                let item = args[0].as_item().map_or(0, |item| item.id);
                let cursor = args[1].as_cursor().map_or(-1, |info| info.position);
                seen.push(format!("{}@{}", item, cursor));
            }),
            10,
            2,
        )
        .unwrap();

    let mut cursor = ResultCursor::new(&context, items(&[7, 8]));
    cursor.advance(&hooks);
    cursor.advance(&hooks);

    assert_eq!(log.entries(), vec!["7@0", "8@1"]);
}

#[test]
fn test_loop_start_fires_once_before_first_item() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let log = CallLog::new();

    for event in [events::LOOP_START, events::ITEM_ADVANCED] {
        let log = log.clone();
        hooks
            .subscribe(event, Callback::action(move |hooks, _| {
                log.push(hooks.current_event_name().unwrap_or_default());
            }))
            .unwrap();
    }

    let mut cursor = ResultCursor::new(&context, items(&[1, 2]));
    cursor.advance(&hooks);
    cursor.advance(&hooks);

    assert_eq!(
        log.entries(),
        vec!["loop-start", "item-advanced", "item-advanced"]
    );
}

#[test]
fn test_rewind_restarts_loop() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut cursor = ResultCursor::new(&context, items(&[1, 2]));

    while cursor.advance(&hooks).is_some() {}
    cursor.rewind();
    assert_eq!(cursor.advance(&hooks).map(|item| item.id), Some(1));

    assert_eq!(hooks.invocation_count(events::LOOP_START), 2);
    assert_eq!(hooks.invocation_count(events::ITEM_ADVANCED), 3);
}

#[test]
fn test_nested_reset_restores_outer_item() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();

    let mut outer = ResultCursor::new(&context, items(&[1, 2]));
    outer.advance(&hooks);
    assert_eq!(current_id(&context), Some(1));

    let mut inner = ResultCursor::new(&context, items(&[20, 21]));
    assert_eq!(context.stack_depth(), 1);
    inner.advance(&hooks);
    inner.advance(&hooks);
    assert_eq!(current_id(&context), Some(21));

    inner.reset();

    assert_eq!(current_id(&context), Some(1));
    assert_eq!(context.stack_depth(), 0);
    assert_eq!(context.current_frame().map(|frame| frame.position), Some(0));

    // The outer cursor continues where it was
    outer.advance(&hooks);
    assert_eq!(current_id(&context), Some(2));
}

#[test]
fn test_reset_restores_page_and_more_flags() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();

    let mut outer = ResultCursor::new(
        &context,
        vec![ContentItem::new(1, "one<!--nextpage-->two<!--nextpage-->three")],
    );
    outer.advance(&hooks);
    context.set_page(3);
    context.show_more(true);

    let mut inner = ResultCursor::new(&context, items(&[2]));
    inner.advance(&hooks);
    assert_eq!(context.current_page(), 1);
    assert!(!context.is_more_shown());
    assert!(!context.is_multipage());

    inner.reset();

    assert_eq!(context.current_page(), 3);
    assert!(context.is_more_shown());
    assert_eq!(context.pages(), vec!["one", "two", "three"]);
}

#[test]
fn test_reset_without_saved_state_resyncs_to_own_item() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut cursor = ResultCursor::new(&context, items(&[1, 2]));

    cursor.advance(&hooks);
    context.set_page(2);
    cursor.reset();

    assert_eq!(current_id(&context), Some(1));
    assert_eq!(context.current_page(), 1);
    assert_eq!(context.stack_depth(), 0);
}

#[test]
fn test_reset_before_advance_is_noop() {
    let context = LoopContext::new();
    let cursor = ResultCursor::new(&context, Vec::new());

    cursor.reset();

    assert!(context.current_item().is_none());
    assert_eq!(context.stack_depth(), 0);
}

#[test]
fn test_reset_does_not_fire_events() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut outer = ResultCursor::new(&context, items(&[1]));
    outer.advance(&hooks);

    let inner = ResultCursor::new(&context, items(&[2]));
    inner.reset();

    assert_eq!(hooks.invocation_count(events::ITEM_ADVANCED), 1);
    assert_eq!(current_id(&context), Some(1));
}

#[test]
fn test_three_levels_unwind_in_order() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();

    let mut a = ResultCursor::new(&context, items(&[1]));
    a.advance(&hooks);
    let mut b = ResultCursor::new(&context, items(&[2]));
    b.advance(&hooks);
    let mut c = ResultCursor::new(&context, items(&[3]));
    c.advance(&hooks);
    assert_eq!(context.stack_depth(), 2);

    c.reset();
    assert_eq!(current_id(&context), Some(2));
    b.reset();
    assert_eq!(current_id(&context), Some(1));
}

#[test]
fn test_reentrant_advance_from_callback() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let log = CallLog::new();

    // Every outer item runs a nested loop from inside its advance callback
    let nested_context = context.clone();
    let nested_log = log.clone();
    hooks
        .register(
            events::ITEM_ADVANCED,
            Callback::action(move |hooks, args| {
                let Some(item) = args[0].as_item() else {
                    return;
                };
                if item.id >= 100 {
                    return;
                }
                let mut related = ResultCursor::new(
                    &nested_context,
                    vec![ContentItem::new(item.id * 100, "related")],
                );
                related.walk(hooks, |nested, _| {
                    nested_log.push(format!("{}>{}", item.id, nested.id));
                });
            }),
            10,
            1,
        )
        .unwrap();

    let mut outer = ResultCursor::new(&context, items(&[1, 2]));
    let mut visited = Vec::new();
    while let Some(item) = outer.advance(&hooks) {
        // The nested walk restored the outer item before control came back
        visited.push((item.id, current_id(&context)));
    }

    assert_eq!(log.entries(), vec!["1>100", "2>200"]);
    assert_eq!(visited, vec![(1, Some(1)), (2, Some(2))]);
    assert_eq!(context.stack_depth(), 0);
}

#[test]
fn test_walk_visits_all_and_fires_loop_end() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut cursor = ResultCursor::new(&context, items(&[1, 2, 3]));

    let mut ids = Vec::new();
    let visited = cursor.walk(&hooks, |item, context| {
        assert_eq!(context.current_item().map(|current| current.id), Some(item.id));
        ids.push(item.id);
    });

    assert_eq!(visited, 3);
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(hooks.invocation_count(events::LOOP_START), 1);
    assert_eq!(hooks.invocation_count(events::LOOP_END), 1);
}

#[test]
fn test_walk_empty_skips_loop_events() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut cursor = ResultCursor::new(&context, Vec::new());

    assert_eq!(cursor.walk(&hooks, |_, _| {}), 0);
    assert_eq!(hooks.invocation_count(events::LOOP_START), 0);
    assert_eq!(hooks.invocation_count(events::LOOP_END), 0);
}

#[test]
fn test_nested_walk_restores_outer_item() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut outer = ResultCursor::new(&context, items(&[1, 2]));

    let mut seen_after_inner = Vec::new();
    outer.walk(&hooks, |_, context| {
        let mut inner = ResultCursor::new(context, items(&[50, 51]));
        inner.walk(&hooks, |_, _| {});
        seen_after_inner.push(current_id(context));
    });

    assert_eq!(seen_after_inner, vec![Some(1), Some(2)]);
}

#[test]
fn test_cursor_ids_are_distinct() {
    let context = LoopContext::new();
    let a = ResultCursor::new(&context, Vec::new());
    let b = ResultCursor::new(&context, Vec::new());

    assert_ne!(a.id(), b.id());
    assert_eq!(a.info(), CursorInfo { id: a.id(), position: -1, len: 0 });
}

#[test]
fn test_set_page_clamps() {
    let hooks = HookRegistry::new();
    let context = LoopContext::new();
    let mut cursor = ResultCursor::new(
        &context,
        vec![ContentItem::new(1, "a<!--nextpage-->b")],
    );

    // Without a current item nothing is clamped against
    assert_eq!(context.set_page(5), 1);

    cursor.advance(&hooks);
    assert!(context.is_multipage());
    assert_eq!(context.set_page(99), 2);
    assert_eq!(context.set_page(0), 1);
    assert_eq!(context.set_page(-4), 1);
    assert_eq!(context.set_page(2), 2);
    assert_eq!(
        context.current_frame().map(|frame| frame.page_body().to_string()),
        Some("b".to_string())
    );
}

#[test]
fn test_custom_markers_split_pages() {
    let hooks = HookRegistry::new();
    let markers = Markers {
        page_break: "[page]".to_string(),
        ..Markers::default()
    };
    let context = LoopContext::with_markers(markers);
    let mut cursor = ResultCursor::new(&context, vec![ContentItem::new(1, "x[page]y")]);

    cursor.advance(&hooks);

    assert_eq!(context.pages(), vec!["x", "y"]);
    assert_eq!(context.markers().page_break, "[page]");
}
