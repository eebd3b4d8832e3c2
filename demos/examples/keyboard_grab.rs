// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard grab basics.
//!
//! Grabs an item with Enter, walks the highlight with the arrow keys
//! (wrapping past the top), and drops it; then shows Escape cancelling a
//! second grab. Prints the live-region announcements along the way.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example keyboard_grab`

use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_reorder::headless::HeadlessList;
use understory_reorder::host::ReorderHost;
use understory_reorder::list::ReorderList;
use understory_reorder::types::Key;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut host = HeadlessList::uniform(['A', 'B', 'C', 'D', 'E'], 20.0);
    let mut engine = ReorderList::new();

    println!("== Move B ==");
    for key in [Key::Enter, Key::ArrowUp, Key::ArrowUp, Key::ArrowUp, Key::Enter] {
        let r = engine.key_down(&mut host, 'B', true, key);
        println!("  {key:?} -> {r:?}");
    }
    info!(order = ?host.items(), "keyboard move done");
    println!("  order: {:?}", host.items());

    println!("== Cancel a grab of D ==");
    for key in [Key::Space, Key::Home, Key::Escape] {
        let r = engine.key_down(&mut host, 'D', true, key);
        println!("  {key:?} -> {r:?}");
    }
    info!(order = ?host.items(), "keyboard cancel done");
    println!("  order: {:?}", host.items());

    println!("== Announcements ==");
    for a in host.announcements() {
        println!("  {a}");
    }
}
