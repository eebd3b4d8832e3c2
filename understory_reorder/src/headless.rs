// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory host: a vertical stack of rows laid out from an origin.
//!
//! [`HeadlessList`] implements both [`ReorderHost`] and [`Geometry`] without a
//! rendering backend. Row boxes are computed on demand from row heights and
//! margins, plus any translation or visual offset the engine has applied, so
//! geometry queries always see the current presentation.
//!
//! It also records what the engine asked of it (markers, focus, scroll
//! requests, announcement text), which makes it useful for tests, demos, and
//! as a reference when writing a toolkit host.
//!
//! ```
//! use kurbo::Point;
//! use understory_reorder::headless::HeadlessList;
//! use understory_reorder::geometry::Geometry;
//!
//! let list = HeadlessList::uniform(['a', 'b', 'c'], 20.0);
//! assert_eq!(list.item_midpoint(&'b'), 30.0);
//! assert_eq!(list.container_bounds().y1, 60.0);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect};

use crate::announce::Announcement;
use crate::geometry::Geometry;
use crate::host::ReorderHost;
use crate::types::{MarkerTarget, Markers};

/// One row of a [`HeadlessList`].
#[derive(Clone, Debug, PartialEq)]
pub struct Row<K> {
    /// Item handle.
    pub key: K,
    /// Height of the row's box, excluding margins.
    pub height: f64,
    /// Outer spacing; only `y0` (top) and `y1` (bottom) affect layout.
    pub margin: Insets,
    /// Translation applied by the engine to fill a gap, if any.
    pub translation: Option<f64>,
    /// Offset that makes the row follow the pointer, if any.
    pub offset: Option<f64>,
    /// Markers currently set on the row.
    pub markers: Markers,
}

impl<K> Row<K> {
    fn extent(&self) -> f64 {
        self.height + self.margin.y0 + self.margin.y1
    }

    fn shift(&self) -> f64 {
        self.translation.unwrap_or(0.0) + self.offset.unwrap_or(0.0)
    }
}

/// In-memory list host.
#[derive(Clone, Debug)]
pub struct HeadlessList<K> {
    rows: Vec<Row<K>>,
    origin: Point,
    width: f64,
    list_markers: Markers,
    focused: Option<K>,
    scroll_requests: Vec<K>,
    announcements: Vec<String>,
}

impl<K: Copy + PartialEq> HeadlessList<K> {
    /// Create an empty list whose container starts at `origin`.
    pub fn new(origin: Point, width: f64) -> Self {
        Self {
            rows: Vec::new(),
            origin,
            width,
            list_markers: Markers::empty(),
            focused: None,
            scroll_requests: Vec::new(),
            announcements: Vec::new(),
        }
    }

    /// Rows of equal `height` with no margins, starting at the page origin.
    pub fn uniform(keys: impl IntoIterator<Item = K>, height: f64) -> Self {
        let mut list = Self::new(Point::ZERO, 100.0);
        for key in keys {
            list.push(key, height, Insets::ZERO);
        }
        list
    }

    /// Append a row.
    pub fn push(&mut self, key: K, height: f64, margin: Insets) {
        self.rows.push(Row {
            key,
            height,
            margin,
            translation: None,
            offset: None,
            markers: Markers::empty(),
        });
    }

    /// Rows in their current order.
    pub fn rows(&self) -> &[Row<K>] {
        &self.rows
    }

    /// The row for `key`.
    pub fn row(&self, key: K) -> Option<&Row<K>> {
        self.rows.iter().find(|r| r.key == key)
    }

    fn row_mut(&mut self, key: K) -> Option<&mut Row<K>> {
        self.rows.iter_mut().find(|r| r.key == key)
    }

    /// Rendered box of `key`, including translation and visual offset.
    pub fn rect(&self, key: K) -> Option<Rect> {
        let mut y = self.origin.y;
        for row in &self.rows {
            if row.key == key {
                let top = y + row.margin.y0 + row.shift();
                return Some(Rect::new(
                    self.origin.x,
                    top,
                    self.origin.x + self.width,
                    top + row.height,
                ));
            }
            y += row.extent();
        }
        None
    }

    /// Markers set on `target`.
    pub fn markers(&self, target: MarkerTarget<K>) -> Markers {
        match target {
            MarkerTarget::List => self.list_markers,
            MarkerTarget::Item(key) => self.row(key).map_or(Markers::empty(), |r| r.markers),
        }
    }

    /// The item whose handle holds focus, if the engine moved focus.
    pub fn focused(&self) -> Option<K> {
        self.focused
    }

    /// Items the engine asked to scroll into view, oldest first.
    pub fn scroll_requests(&self) -> &[K] {
        &self.scroll_requests
    }

    /// Announcement text, oldest first.
    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    /// The most recent announcement.
    pub fn last_announcement(&self) -> Option<&str> {
        self.announcements.last().map(String::as_str)
    }

    /// Returns `true` if no markers, translations or offsets are applied.
    pub fn is_pristine(&self) -> bool {
        self.list_markers.is_empty()
            && self
                .rows
                .iter()
                .all(|r| r.markers.is_empty() && r.translation.is_none() && r.offset.is_none())
    }
}

impl<K: Copy + PartialEq> ReorderHost<K> for HeadlessList<K> {
    fn items(&self) -> Vec<K> {
        self.rows.iter().map(|r| r.key).collect()
    }

    fn insert_before(&mut self, item: K, before: Option<K>) {
        let Some(from) = self.rows.iter().position(|r| r.key == item) else {
            return;
        };
        let row = self.rows.remove(from);
        match before.and_then(|b| self.rows.iter().position(|r| r.key == b)) {
            Some(at) => self.rows.insert(at, row),
            None => self.rows.push(row),
        }
    }

    fn set_visual_offset(&mut self, item: K, offset: f64) {
        if let Some(row) = self.row_mut(item) {
            row.offset = Some(offset);
        }
    }

    fn clear_visual_offset(&mut self, item: K) {
        if let Some(row) = self.row_mut(item) {
            row.offset = None;
        }
    }

    fn toggle_translation(&mut self, item: K, offset: f64) {
        if let Some(row) = self.row_mut(item) {
            row.translation = match row.translation {
                Some(_) => None,
                None => Some(offset),
            };
        }
    }

    fn clear_translation(&mut self, item: K) {
        if let Some(row) = self.row_mut(item) {
            row.translation = None;
        }
    }

    fn set_markers(&mut self, target: MarkerTarget<K>, markers: Markers) {
        match target {
            MarkerTarget::List => self.list_markers.insert(markers),
            MarkerTarget::Item(key) => {
                if let Some(row) = self.row_mut(key) {
                    row.markers.insert(markers);
                }
            }
        }
    }

    fn clear_markers(&mut self, target: MarkerTarget<K>, markers: Markers) {
        match target {
            MarkerTarget::List => self.list_markers.remove(markers),
            MarkerTarget::Item(key) => {
                if let Some(row) = self.row_mut(key) {
                    row.markers.remove(markers);
                }
            }
        }
    }

    fn scroll_into_view(&mut self, item: K) {
        self.scroll_requests.push(item);
    }

    fn focus_handle(&mut self, item: K) {
        self.focused = Some(item);
    }

    fn announce(&mut self, announcement: &Announcement) {
        self.announcements.push(announcement.to_string());
    }
}

impl<K: Copy + PartialEq> Geometry<K> for HeadlessList<K> {
    /// Unknown items have no extent.
    fn item_extent(&self, item: &K) -> f64 {
        self.row(*item).map_or(0.0, Row::extent)
    }

    /// Unknown items report NaN, which never compares past a cursor.
    fn item_midpoint(&self, item: &K) -> f64 {
        self.rect(*item).map_or(f64::NAN, |r| r.center().y)
    }

    fn container_bounds(&self) -> Rect {
        let height: f64 = self.rows.iter().map(Row::extent).sum();
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_includes_margins_and_origin() {
        let mut list = HeadlessList::new(Point::new(5.0, 100.0), 50.0);
        list.push(1_u32, 20.0, Insets::new(0.0, 2.0, 0.0, 3.0));
        list.push(2, 10.0, Insets::ZERO);
        assert_eq!(list.item_extent(&1), 25.0);
        assert_eq!(list.rect(1), Some(Rect::new(5.0, 102.0, 55.0, 122.0)));
        assert_eq!(list.item_midpoint(&2), 130.0);
        assert_eq!(list.container_bounds(), Rect::new(5.0, 100.0, 55.0, 135.0));
        assert!(list.item_midpoint(&9).is_nan());
        assert_eq!(list.item_extent(&9), 0.0);
    }

    #[test]
    fn translations_toggle() {
        let mut list = HeadlessList::uniform([1_u32, 2, 3], 10.0);
        list.toggle_translation(2, -10.0);
        assert_eq!(list.item_midpoint(&2), 5.0);
        list.toggle_translation(2, -10.0);
        assert_eq!(list.item_midpoint(&2), 15.0);
        list.set_visual_offset(3, 4.0);
        assert_eq!(list.item_midpoint(&3), 29.0);
        assert!(!list.is_pristine());
        list.clear_visual_offset(3);
        assert!(list.is_pristine());
    }

    #[test]
    fn insert_before_moves_rows() {
        let mut list = HeadlessList::uniform(['a', 'b', 'c', 'd'], 10.0);
        list.insert_before('a', Some('d'));
        assert_eq!(list.items(), ['b', 'c', 'a', 'd']);
        list.insert_before('b', None);
        assert_eq!(list.items(), ['c', 'a', 'd', 'b']);
        assert_eq!(list.item_midpoint(&'b'), 35.0);
    }

    #[test]
    fn markers_and_announcements() {
        let mut list = HeadlessList::uniform(['a', 'b'], 10.0);
        list.set_markers(MarkerTarget::List, Markers::REORDERING);
        list.set_markers(MarkerTarget::Item('a'), Markers::GRABBED | Markers::TARGETED);
        list.clear_markers(MarkerTarget::Item('a'), Markers::TARGETED);
        assert_eq!(list.markers(MarkerTarget::Item('a')), Markers::GRABBED);
        assert_eq!(list.markers(MarkerTarget::List), Markers::REORDERING);
        list.announce(&Announcement::Moved { position: 2, len: 2 });
        assert_eq!(list.last_announcement(), Some("Position 2 of 2."));
    }
}
