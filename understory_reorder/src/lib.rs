// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: a headless, `no_std` engine for reorderable lists.
//!
//! ## Overview
//!
//! This crate decides, at every input event, whether a dragged or grabbed list
//! item has passed a neighbor, and reconciles the final position back into the
//! list order. It supports two interaction models that end in the same commit:
//!
//! - Pointer drag: the item follows the cursor; neighbors slide into the gap as
//!   the cursor crosses their midpoints.
//! - Keyboard grab: Enter/Space grabs, arrows/Home/End move a highlight,
//!   Enter/Space drops, Escape cancels.
//!
//! It does not find items, wire listeners, or render anything. The embedding
//! toolkit implements [`ReorderHost`](crate::host::ReorderHost) for structure
//! and presentation and [`Geometry`](crate::geometry::Geometry) for rendered
//! boxes, then forwards events to a [`ReorderList`](crate::list::ReorderList).
//!
//! ## Components
//!
//! - [`geometry`]: item extents and sibling midpoints, with `±∞` sentinels at
//!   the list ends.
//! - [`tracker`]: grabbed index, displacement and sibling cursors for a drag.
//! - [`pointer`]: the pointer drag state machine.
//! - [`keyboard`]: the keyboard grab state machine.
//! - [`commit`]: the single remove-then-insert that applies a displacement.
//! - [`announce`]: status messages for an accessibility live region.
//! - [`list`]: both machines behind one front, with configuration.
//! - [`headless`]: an in-memory host, for tests and as a reference.
//!
//! ## Invariants
//!
//! - At most one session is active.
//! - The grabbed index is fixed for a session; movement is a displacement.
//! - Neither sibling cursor ever points at the grabbed item's own slot.
//! - The order changes at most once per session, at commit. Movement during a
//!   drag is presentation only.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_reorder::headless::HeadlessList;
//! use understory_reorder::host::ReorderHost;
//! use understory_reorder::list::ReorderList;
//! use understory_reorder::types::Key;
//!
//! // Five 10px rows: A..E.
//! let mut host = HeadlessList::uniform(['A', 'B', 'C', 'D', 'E'], 10.0);
//! let mut engine = ReorderList::new();
//!
//! // Drag A past B's midpoint (y = 15).
//! engine.pointer_down(&mut host, 'A', true, Point::new(10.0, 5.0));
//! engine.pointer_move(&mut host, Point::new(10.0, 16.0), Vec2::new(0.0, 11.0));
//! let moved = engine.pointer_up(&mut host).unwrap();
//! assert_eq!(moved.order, ['B', 'A', 'C', 'D', 'E']);
//!
//! // Grab C with the keyboard, move it down twice, drop.
//! engine.key_down(&mut host, 'C', true, Key::Enter);
//! engine.key_down(&mut host, 'C', true, Key::ArrowDown);
//! engine.key_down(&mut host, 'C', true, Key::ArrowDown);
//! engine.key_down(&mut host, 'C', true, Key::Enter);
//! assert_eq!(host.items(), ['B', 'A', 'D', 'E', 'C']);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: emit `debug` events for grabs, crossings, commits and cancels.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod announce;
pub mod commit;
pub mod geometry;
pub mod headless;
pub mod host;
pub mod keyboard;
pub mod list;
pub mod pointer;
pub mod tracker;
pub mod types;
