// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag state machine.
//!
//! ## States
//!
//! `Idle` and `Grabbed`, represented by whether a [`PointerSession`] exists.
//!
//! - [`PointerDrag::grab`]: pointer-down on an item's handle. Snapshots the
//!   order, anchors the cursor, and starts a [`Session`].
//! - [`PointerDrag::drag`]: pointer-move. Offsets the grabbed item to follow
//!   the cursor, then runs the crossing loop in the direction of travel and
//!   toggles a one-extent translation on every crossed sibling.
//! - [`PointerDrag::release`]: pointer-up. Restores presentation and commits
//!   the net displacement.
//! - [`PointerDrag::cancel`]: restores presentation without committing.
//!
//! Visual movement during a drag is presentation only; the order changes
//! once, on release.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::announce::Announcement;
use crate::commit::{Committed, commit};
use crate::geometry::{Geometry, within_vertical};
use crate::host::ReorderHost;
use crate::tracker::Session;
use crate::types::{Direction, MarkerTarget, Markers, Outcome};

/// State of an active pointer drag.
#[derive(Clone, Debug)]
pub struct PointerSession<K> {
    item: K,
    items: Vec<K>,
    tracker: Session,
    anchor: f64,
    container: kurbo::Rect,
}

impl<K: Copy> PointerSession<K> {
    /// The grabbed item.
    pub fn item(&self) -> K {
        self.item
    }

    /// Order at grab time.
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// Index bookkeeping for the drag.
    pub fn tracker(&self) -> &Session {
        &self.tracker
    }

    /// Cursor `y` at grab time; offsets are measured from here.
    pub fn anchor(&self) -> f64 {
        self.anchor
    }
}

/// Pointer half of the reorder engine.
#[derive(Clone, Debug)]
pub struct PointerDrag<K> {
    session: Option<PointerSession<K>>,
    resolving: bool,
}

impl<K> Default for PointerDrag<K> {
    fn default() -> Self {
        Self {
            session: None,
            resolving: false,
        }
    }
}

impl<K: Copy + PartialEq> PointerDrag<K> {
    /// Create an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&PointerSession<K>> {
        self.session.as_ref()
    }

    /// Returns `true` while a drag is active.
    pub fn is_grabbed(&self) -> bool {
        self.session.is_some()
    }

    /// Pointer-down on `item` at `position`.
    ///
    /// Ignored unless idle and `on_handle` is set, and if `item` is not in the
    /// host's list.
    pub fn grab<H>(&mut self, host: &mut H, item: K, on_handle: bool, position: Point) -> Outcome
    where
        H: ReorderHost<K> + Geometry<K> + ?Sized,
    {
        if self.session.is_some() || !on_handle {
            return Outcome::Ignored;
        }
        let items = host.items();
        let Some(index) = items.iter().position(|&k| k == item) else {
            return Outcome::Ignored;
        };

        let tracker = Session::start(&items, index, &*host);
        let container = host.container_bounds();

        host.set_markers(MarkerTarget::List, Markers::REORDERING);
        host.set_markers(MarkerTarget::Item(item), Markers::GRABBED);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "reorder.pointer.grab",
            index,
            len = items.len(),
            extent = tracker.extent(),
            y = position.y
        );

        self.session = Some(PointerSession {
            item,
            items,
            tracker,
            anchor: position.y,
            container,
        });
        Outcome::Consumed
    }

    /// Pointer-move to `position`, having moved by `movement` since the last
    /// sample.
    ///
    /// A sample without vertical movement is ignored.
    pub fn drag<H>(
        &mut self,
        host: &mut H,
        position: Point,
        movement: Vec2,
        auto_scroll: bool,
    ) -> Outcome
    where
        H: ReorderHost<K> + Geometry<K> + ?Sized,
    {
        // Hosts that re-dispatch events from inside a move land here.
        if self.resolving {
            return Outcome::Ignored;
        }
        let Some(s) = self.session.as_mut() else {
            return Outcome::Ignored;
        };
        let Some(direction) = Direction::from_delta(movement.y) else {
            return Outcome::Ignored;
        };

        let y = position.y;
        host.set_visual_offset(s.item, y - s.anchor);
        if auto_scroll && within_vertical(s.container, y) {
            host.scroll_into_view(s.item);
        }

        if !s.tracker.is_beyond(y, direction) {
            return Outcome::Consumed;
        }

        self.resolving = true;
        let translate = -s.tracker.extent() * direction.sign() as f64;
        while let Some(crossed) = s.tracker.step(y, direction, &s.items, &*host) {
            host.toggle_translation(s.items[crossed], translate);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "reorder.pointer.cross",
                crossed,
                ?direction,
                displacement = s.tracker.displacement()
            );
        }
        self.resolving = false;

        Outcome::Consumed
    }

    /// Pointer-up: restore presentation and commit.
    ///
    /// Returns the committed move, or `None` if idle or the item ended where
    /// it started.
    pub fn release<H>(&mut self, host: &mut H) -> Option<Committed<K>>
    where
        H: ReorderHost<K> + Geometry<K> + ?Sized,
    {
        let s = self.session.take()?;
        restore(host, &s);

        let committed = commit(
            host,
            &s.items,
            s.tracker.grabbed_index(),
            s.tracker.displacement(),
        );
        if let Some(c) = &committed {
            host.announce(&Announcement::dropped(c.from, c.to, c.order.len()));
        }
        committed
    }

    /// Discard the drag and restore presentation.
    pub fn cancel<H>(&mut self, host: &mut H) -> Outcome
    where
        H: ReorderHost<K> + Geometry<K> + ?Sized,
    {
        let Some(s) = self.session.take() else {
            return Outcome::Ignored;
        };
        restore(host, &s);

        let index = s.tracker.grabbed_index();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "reorder.pointer.cancel",
            index,
            displacement = s.tracker.displacement()
        );

        host.announce(&Announcement::cancelled(index, s.items.len()));
        Outcome::Consumed
    }
}

fn restore<K: Copy, H: ReorderHost<K> + ?Sized>(host: &mut H, s: &PointerSession<K>) {
    for &item in &s.items {
        host.clear_translation(item);
    }
    host.clear_visual_offset(s.item);
    host.clear_markers(MarkerTarget::List, Markers::REORDERING);
    host.clear_markers(MarkerTarget::Item(s.item), Markers::GRABBED);
}
