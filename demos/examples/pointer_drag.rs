// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag basics.
//!
//! Drags the first row of a five-row list downward in small steps, printing
//! each crossing as neighbors slide into the gap, then drops it.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example pointer_drag`

use kurbo::{Insets, Point, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_reorder::headless::HeadlessList;
use understory_reorder::host::ReorderHost;
use understory_reorder::list::ReorderList;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut host = HeadlessList::new(Point::new(0.0, 40.0), 200.0);
    for name in ["apples", "bread", "cheese", "dates", "eggs"] {
        host.push(name, 28.0, Insets::new(0.0, 2.0, 0.0, 2.0));
    }
    let mut engine = ReorderList::new();

    let mut y = 56.0;
    engine.pointer_down(&mut host, "apples", true, Point::new(20.0, y));
    println!("== Drag `apples` down ==");
    while y < 140.0 {
        y += 12.0;
        engine.pointer_move(&mut host, Point::new(20.0, y), Vec2::new(0.0, 12.0));
        let t = engine.pointer().session().unwrap().tracker();
        info!(y, displacement = t.displacement(), "pointer sample");
        let shifted: Vec<_> = host
            .rows()
            .iter()
            .filter(|r| r.translation.is_some())
            .map(|r| r.key)
            .collect();
        println!(
            "  y={y:>5.1}  displacement={:+}  translated={shifted:?}",
            t.displacement()
        );
    }

    let dropped = engine.pointer_up(&mut host);
    info!(committed = dropped.is_some(), "pointer released");
    match dropped {
        Some(c) => println!("== Dropped at {} ==\n  {:?}", c.to, c.order),
        None => println!("== Dropped in place =="),
    }
    println!("  host order: {:?}", host.items());
    for a in host.announcements() {
        println!("  announce: {a}");
    }
}
