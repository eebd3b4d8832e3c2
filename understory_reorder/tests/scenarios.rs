// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end reorder sessions against the in-memory host.

use kurbo::{Insets, Point, Vec2};
use understory_reorder::geometry::Geometry;
use understory_reorder::headless::HeadlessList;
use understory_reorder::host::ReorderHost;
use understory_reorder::keyboard::KeyResponse;
use understory_reorder::list::ReorderList;
use understory_reorder::types::{Key, MarkerTarget, Markers, Outcome, Side};

fn abcde() -> HeadlessList<char> {
    HeadlessList::uniform(['A', 'B', 'C', 'D', 'E'], 10.0)
}

fn drag_to(engine: &mut ReorderList<char>, host: &mut HeadlessList<char>, from: f64, to: f64) {
    engine.pointer_move(host, Point::new(20.0, to), Vec2::new(0.0, to - from));
}

#[test]
fn keyboard_down_twice_moves_c_to_end() {
    let mut host = abcde();
    let mut engine = ReorderList::new();
    engine.key_down(&mut host, 'C', true, Key::Enter);
    assert_eq!(engine.key_down(&mut host, 'C', true, Key::ArrowDown), KeyResponse::Moved(3));
    assert_eq!(engine.key_down(&mut host, 'C', true, Key::ArrowDown), KeyResponse::Moved(4));
    let KeyResponse::Dropped(Some(c)) = engine.key_down(&mut host, 'C', true, Key::Enter) else {
        panic!("expected the drop to commit");
    };
    assert_eq!(c.order, ['A', 'B', 'D', 'E', 'C']);
    assert_eq!(host.items(), ['A', 'B', 'D', 'E', 'C']);
    assert_eq!(host.focused(), Some('C'));
}

#[test]
fn pointer_drag_a_past_b() {
    let mut host = abcde();
    let mut engine = ReorderList::new();
    assert_eq!(
        engine.pointer_down(&mut host, 'A', true, Point::new(20.0, 5.0)),
        Outcome::Consumed
    );
    assert_eq!(host.markers(MarkerTarget::List), Markers::REORDERING);
    drag_to(&mut engine, &mut host, 5.0, 12.0);
    drag_to(&mut engine, &mut host, 12.0, 17.0);
    let c = engine.pointer_up(&mut host).expect("A crossed B");
    assert_eq!(c.order, ['B', 'A', 'C', 'D', 'E']);
    assert_eq!((c.from, c.to), (0, 1));
    assert!(host.is_pristine());
}

#[test]
fn escape_before_navigation_restores_everything() {
    for item in ['A', 'C', 'E'] {
        let mut host = abcde();
        let mut engine = ReorderList::new();
        engine.key_down(&mut host, item, true, Key::Space);
        assert_eq!(engine.key_down(&mut host, item, true, Key::Escape), KeyResponse::Cancelled);
        assert_eq!(host.items(), ['A', 'B', 'C', 'D', 'E']);
        assert!(host.is_pristine());
        assert!(!engine.is_active());
    }
}

#[test]
fn grab_and_drop_without_moving_is_identity() {
    let mut host = abcde();
    let mut engine = ReorderList::new();
    engine.pointer_down(&mut host, 'D', true, Point::new(20.0, 35.0));
    assert_eq!(engine.pointer_up(&mut host), None);
    engine.key_down(&mut host, 'D', true, Key::Enter);
    assert_eq!(
        engine.key_down(&mut host, 'D', true, Key::Enter),
        KeyResponse::Dropped(None)
    );
    assert_eq!(host.items(), ['A', 'B', 'C', 'D', 'E']);
    assert!(host.is_pristine());
}

#[test]
fn uneven_rows_with_margins() {
    let mut host = HeadlessList::new(Point::new(0.0, 200.0), 80.0);
    host.push('A', 30.0, Insets::new(0.0, 4.0, 0.0, 4.0));
    host.push('B', 10.0, Insets::new(0.0, 4.0, 0.0, 4.0));
    host.push('C', 50.0, Insets::new(0.0, 4.0, 0.0, 4.0));
    // A: 204..234, B: 242..252 (mid 247), C: 260..310 (mid 285).
    assert_eq!(host.item_midpoint(&'C'), 285.0);

    let mut engine = ReorderList::new();
    engine.pointer_down(&mut host, 'A', true, Point::new(5.0, 219.0));
    let tracker = engine.pointer().session().unwrap().tracker();
    assert_eq!(tracker.extent(), 38.0);
    assert_eq!(tracker.midpoint(Side::Prev), f64::NEG_INFINITY);

    drag_to(&mut engine, &mut host, 219.0, 250.0);
    // B slid up by A's extent, C's midpoint is measured fresh.
    assert_eq!(host.row('B').unwrap().translation, Some(-38.0));
    let tracker = engine.pointer().session().unwrap().tracker();
    assert_eq!(tracker.midpoint(Side::Prev), 209.0);
    assert_eq!(tracker.midpoint(Side::Next), 285.0);

    drag_to(&mut engine, &mut host, 250.0, 284.0);
    assert_eq!(engine.pointer().session().unwrap().tracker().displacement(), 1);
    let c = engine.pointer_up(&mut host).unwrap();
    assert_eq!(c.order, ['B', 'A', 'C']);
}

#[test]
fn auto_scroll_only_inside_container() {
    let mut host = abcde();
    let mut engine = ReorderList::new();
    engine.pointer_down(&mut host, 'C', true, Point::new(20.0, 25.0));
    drag_to(&mut engine, &mut host, 25.0, 28.0);
    drag_to(&mut engine, &mut host, 28.0, 70.0);
    assert_eq!(host.scroll_requests(), ['C']);
    let c = engine.pointer_up(&mut host).unwrap();
    assert_eq!(c.order, ['A', 'B', 'D', 'E', 'C']);
}

#[test]
fn announcements_follow_a_keyboard_session() {
    let mut host = abcde();
    let mut engine = ReorderList::new();
    engine.key_down(&mut host, 'B', true, Key::Enter);
    engine.key_down(&mut host, 'B', true, Key::ArrowUp);
    engine.key_down(&mut host, 'B', true, Key::End);
    engine.key_down(&mut host, 'B', true, Key::Home);
    engine.key_down(&mut host, 'B', true, Key::Enter);
    assert_eq!(
        host.announcements(),
        [
            "Item grabbed, position 2 of 5. Use the arrow keys to move, Enter or Space to drop, Escape to cancel.",
            "Position 1 of 5.",
            "Position 5 of 5.",
            "Position 1 of 5.",
            "Item moved from position 2 to position 1 of 5.",
        ]
    );
    assert_eq!(host.items(), ['B', 'A', 'C', 'D', 'E']);
}

#[test]
fn sessions_can_follow_each_other() {
    let mut host = abcde();
    let mut engine = ReorderList::new();
    engine.pointer_down(&mut host, 'E', true, Point::new(20.0, 45.0));
    drag_to(&mut engine, &mut host, 45.0, -5.0);
    assert_eq!(
        engine.pointer_up(&mut host).unwrap().order,
        ['E', 'A', 'B', 'C', 'D']
    );

    // The next session measures the new order.
    engine.key_down(&mut host, 'A', true, Key::Enter);
    engine.key_down(&mut host, 'A', true, Key::ArrowUp);
    engine.key_down(&mut host, 'A', true, Key::Enter);
    assert_eq!(host.items(), ['A', 'E', 'B', 'C', 'D']);
}
