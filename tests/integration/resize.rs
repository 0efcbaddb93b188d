// =====
// TESTS: 5
// =====
//
// Resize handling and teardown.

use ellipsis_chips::app::handle_terminal_event;
use ellipsis_chips::chips::Trigger;
use crossterm::event::Event;
use pretty_assertions::assert_eq;
use ratatui::layout::Size;

use crate::helpers::{indicator, owned, shown, test_app};

const LABELS: &[&str] = &["alpha", "beta", "gamma", "delta"];

#[test]
fn growing_terminal_reveals_chips() {
    let mut app = test_app(LABELS, 26);
    app.run_pending_triggers();
    assert_eq!(shown(&app).len(), 1);

    handle_terminal_event(&mut app, Event::Resize(80, 24));
    assert_eq!(app.run_pending_triggers(), 1);
    assert_eq!(shown(&app), owned(LABELS));
    assert_eq!(indicator(&app), None);
}

#[test]
fn shrinking_terminal_collapses_chips() {
    let mut app = test_app(LABELS, 80);
    app.run_pending_triggers();
    assert_eq!(indicator(&app), None);

    handle_terminal_event(&mut app, Event::Resize(26, 24));
    app.run_pending_triggers();
    assert_eq!(shown(&app), owned(&["alpha"]));
    assert_eq!(indicator(&app).as_deref(), Some("+3 more"));
}

#[test]
fn repeated_layout_is_stable() {
    let mut app = test_app(LABELS, 33);
    app.run_pending_triggers();
    let first = (shown(&app), indicator(&app), app.chip_list.last_outcome());

    app.handle_resize(Size::new(33, 24));
    app.run_pending_triggers();
    assert_eq!((shown(&app), indicator(&app), app.chip_list.last_outcome()), first);
}

#[test]
fn resize_and_label_change_both_run() {
    let mut app = test_app(LABELS, 26);
    app.run_pending_triggers();

    app.push_label("epsilon".to_owned());
    handle_terminal_event(&mut app, Event::Resize(100, 24));
    assert_eq!(app.chip_list.try_next_trigger(), Some(Trigger::ChipsChanged));
    assert_eq!(app.chip_list.try_next_trigger(), Some(Trigger::Resize));
}

#[test]
fn no_layout_after_teardown() {
    let mut app = test_app(LABELS, 26);
    app.run_pending_triggers();
    let before = app.chip_list.host().clone();

    app.chip_list.teardown();
    assert_eq!(app.viewport.subscriber_count(), 0);

    handle_terminal_event(&mut app, Event::Resize(100, 24));
    assert_eq!(app.run_pending_triggers(), 0);
    assert_eq!(shown(&app), before.visible_chips().map(|c| c.label.clone()).collect::<Vec<_>>());
    assert_eq!(app.chip_list.host().indicator_text(), before.indicator_text());
}
