// =====
// TESTS: 8
// =====
//
// Label-list lifecycle: deferred layout, no-op on equal input, count invariants.

use ellipsis_chips::chips::Trigger;
use pretty_assertions::assert_eq;

use crate::helpers::{indicator, owned, shown, test_app};

const LABELS: &[&str] = &["alpha", "beta", "gamma", "delta"];

#[test]
fn layout_waits_for_next_turn() {
    let mut app = test_app(LABELS, 26);

    // Chip nodes are rendered, but nothing has been measured yet.
    assert_eq!(app.chip_list.host().chips().len(), 4);
    assert_eq!(indicator(&app), None);
    assert!(app.chip_list.last_outcome().is_none());

    assert_eq!(app.run_pending_triggers(), 1);
    assert_eq!(shown(&app), owned(&["alpha"]));
    assert_eq!(indicator(&app).as_deref(), Some("+3 more"));
}

#[test]
fn equal_assignment_schedules_nothing() {
    let mut app = test_app(LABELS, 26);
    app.run_pending_triggers();

    assert!(!app.set_labels(owned(LABELS)));
    assert_eq!(app.chip_list.try_next_trigger(), None);
}

#[test]
fn adding_label_relayouts_once() {
    let mut app = test_app(&["a", "b"], 40);
    app.run_pending_triggers();
    assert_eq!(indicator(&app), None);

    assert!(app.push_label("c".to_owned()));
    assert_eq!(app.chip_list.try_next_trigger(), Some(Trigger::ChipsChanged));
    assert_eq!(app.chip_list.try_next_trigger(), None);
}

#[test]
fn removing_overflow_hides_indicator() {
    let mut app = test_app(LABELS, 30);
    app.run_pending_triggers();
    assert!(indicator(&app).is_some());

    app.set_labels(owned(&["alpha", "beta"]));
    app.run_pending_triggers();
    assert_eq!(shown(&app), owned(&["alpha", "beta"]));
    assert_eq!(indicator(&app), None);
    assert_eq!(app.chip_list.host().indicator_text(), Some("+0 more"));
}

#[test]
fn visible_plus_hidden_equals_total() {
    let mut app = test_app(ellipsis_chips::config::DEMO_LABELS, 80);
    for width in [10_u16, 25, 40, 55, 70, 90, 140] {
        app.handle_resize(ratatui::layout::Size::new(width, 24));
        app.run_pending_triggers();
        let outcome = app.chip_list.last_outcome().unwrap();
        assert_eq!(outcome.visible + outcome.hidden, app.labels().len(), "width {width}");
        assert_eq!(shown(&app).len(), outcome.visible);
        assert_eq!(indicator(&app).is_some(), outcome.hidden > 0);
    }
}

#[test]
fn short_labels_fill_in_after_a_long_one() {
    let mut app = test_app(&["a", "a-very-long-label", "b", "c"], 26);
    app.run_pending_triggers();
    // Only the long label is collapsed; "b" and "c" fit in what is left.
    assert_eq!(shown(&app), owned(&["a", "b", "c"]));
    assert_eq!(indicator(&app).as_deref(), Some("+1 more"));
}

#[test]
fn reversing_changes_which_chips_show() {
    let mut app = test_app(LABELS, 26);
    app.run_pending_triggers();
    app.reverse_labels();
    app.run_pending_triggers();
    assert_eq!(shown(&app), owned(&["delta"]));
}

#[test]
fn clearing_labels_hides_everything() {
    let mut app = test_app(LABELS, 26);
    app.run_pending_triggers();
    app.clear_labels();
    app.run_pending_triggers();
    assert!(shown(&app).is_empty());
    assert_eq!(indicator(&app), None);
    assert_eq!(app.chip_list.last_outcome().map(|o| o.hidden), Some(0));
}
