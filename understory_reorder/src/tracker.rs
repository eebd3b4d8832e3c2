// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index tracker: displacement and sibling bookkeeping for a drag.
//!
//! ## Model
//!
//! A [`Session`] records the grabbed item's original index, a signed
//! displacement from it, and the two items adjacent to the displaced position
//! ("sibling cursors") together with their midpoints. Sibling indices always
//! refer to the order at session start; the grabbed item's own slot is never
//! a sibling.
//!
//! ## Crossing
//!
//! When the pointer passes the leading sibling's midpoint, [`Session::advance`]
//! moves both cursors one step, skipping the grabbed slot, and reports the
//! crossed item so the caller can translate it into the gap. The midpoint left
//! behind is derived arithmetically from the one just crossed (the crossed
//! item may still be animating); the midpoint ahead is measured.
//!
//! One pointer sample may cross several items. Call [`Session::step`] in a
//! loop until it returns `None`:
//!
//! ```
//! use kurbo::Rect;
//! use understory_reorder::geometry::Geometry;
//! use understory_reorder::tracker::Session;
//! use understory_reorder::types::Direction;
//!
//! // Five 10px rows starting at y = 0.
//! struct Rows;
//! impl Geometry<usize> for Rows {
//!     fn item_extent(&self, _: &usize) -> f64 { 10.0 }
//!     fn item_midpoint(&self, i: &usize) -> f64 { *i as f64 * 10.0 + 5.0 }
//!     fn container_bounds(&self) -> Rect { Rect::new(0.0, 0.0, 100.0, 50.0) }
//! }
//!
//! let items = [0, 1, 2, 3, 4];
//! let mut session = Session::start(&items, 0, &Rows);
//! let mut crossed = Vec::new();
//! while let Some(i) = session.step(36.0, Direction::Down, &items, &Rows) {
//!     crossed.push(i);
//! }
//! assert_eq!(crossed, [1, 2, 3]);
//! assert_eq!(session.displacement(), 3);
//! ```

use crate::geometry::Geometry;
use crate::types::{Direction, Side};

/// Mutable state of one drag.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    grabbed: usize,
    len: usize,
    displacement: isize,
    prev: isize,
    next: isize,
    prev_midpoint: f64,
    next_midpoint: f64,
    extent: f64,
}

#[inline]
fn item_at<K>(items: &[K], index: isize) -> Option<&K> {
    usize::try_from(index).ok().and_then(|i| items.get(i))
}

impl Session {
    /// Start tracking a drag of `items[grabbed]`.
    ///
    /// The grabbed item's extent is measured once and used as the unit every
    /// crossing displaces content by.
    pub fn start<K, G: Geometry<K> + ?Sized>(items: &[K], grabbed: usize, geometry: &G) -> Self {
        debug_assert!(grabbed < items.len(), "grabbed index out of range");
        let g = grabbed as isize;
        let prev = g - 1;
        let next = g + 1;
        Self {
            grabbed,
            len: items.len(),
            displacement: 0,
            prev,
            next,
            prev_midpoint: geometry.sibling_midpoint(item_at(items, prev), Side::Prev),
            next_midpoint: geometry.sibling_midpoint(item_at(items, next), Side::Next),
            extent: items
                .get(grabbed)
                .map_or(0.0, |item| geometry.item_extent(item)),
        }
    }

    /// Original index of the grabbed item. Fixed for the session.
    pub fn grabbed_index(&self) -> usize {
        self.grabbed
    }

    /// Signed number of positions the item has moved.
    pub fn displacement(&self) -> isize {
        self.displacement
    }

    /// Index the item would land at if dropped now.
    pub fn displaced_index(&self) -> usize {
        self.grabbed.saturating_add_signed(self.displacement)
    }

    /// Vertical footprint of the grabbed item.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Index of the sibling on `side`, if one exists.
    pub fn sibling_index(&self, side: Side) -> Option<usize> {
        let i = match side {
            Side::Prev => self.prev,
            Side::Next => self.next,
        };
        usize::try_from(i).ok().filter(|&i| i < self.len)
    }

    /// Cached midpoint of the sibling on `side`, or the side's sentinel.
    pub fn midpoint(&self, side: Side) -> f64 {
        match side {
            Side::Prev => self.prev_midpoint,
            Side::Next => self.next_midpoint,
        }
    }

    /// Returns `true` if `y` is past the leading midpoint for `direction`.
    pub fn is_beyond(&self, y: f64, direction: Direction) -> bool {
        match direction {
            Direction::Up => y < self.prev_midpoint,
            Direction::Down => y > self.next_midpoint,
        }
    }

    /// Cross the leading sibling for `direction`.
    ///
    /// Returns the index of the crossed item, which the caller translates by
    /// one extent opposite to `direction`. Returns `None`, leaving the session
    /// untouched, if there is no sibling on that side.
    pub fn advance<K, G: Geometry<K> + ?Sized>(
        &mut self,
        direction: Direction,
        items: &[K],
        geometry: &G,
    ) -> Option<usize> {
        let crossed = self.sibling_index(direction.leading_side())?;
        let step = direction.sign();
        let grabbed = self.grabbed as isize;

        self.prev += step;
        self.next += step;
        if self.prev == grabbed {
            self.prev += step;
        }
        if self.next == grabbed {
            self.next += step;
        }

        match direction {
            Direction::Up => {
                self.next_midpoint = self.prev_midpoint + self.extent;
                self.prev_midpoint =
                    geometry.sibling_midpoint(item_at(items, self.prev), Side::Prev);
            }
            Direction::Down => {
                self.prev_midpoint = self.next_midpoint - self.extent;
                self.next_midpoint =
                    geometry.sibling_midpoint(item_at(items, self.next), Side::Next);
            }
        }

        self.displacement += step;
        Some(crossed)
    }

    /// One iteration of the crossing loop: advance if `y` is past the leading
    /// midpoint and a sibling exists there.
    pub fn step<K, G: Geometry<K> + ?Sized>(
        &mut self,
        y: f64,
        direction: Direction,
        items: &[K],
        geometry: &G,
    ) -> Option<usize> {
        if !self.is_beyond(y, direction) {
            return None;
        }
        self.advance(direction, items, geometry)
    }
}
