// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities the engine calls into.
//!
//! The host owns the items and their presentation. The engine only reads the
//! current order, asks for one structural move per session, and pushes
//! fire-and-forget presentation updates.
//!
//! The host must not change the list structure while a session is active.

use alloc::vec::Vec;

use crate::announce::Announcement;
use crate::types::{MarkerTarget, Markers};

/// Capability interface implemented by the toolkit embedding the engine.
///
/// Presentation methods return nothing; the engine never consults their
/// effect except through [`Geometry`](crate::geometry::Geometry).
pub trait ReorderHost<K> {
    /// Current items, in order.
    fn items(&self) -> Vec<K>;

    /// Move `item` so it sits immediately before `before`, or at the end when
    /// `before` is `None`.
    fn insert_before(&mut self, item: K, before: Option<K>);

    /// Render `item` shifted vertically by `offset` from its layout position.
    fn set_visual_offset(&mut self, item: K, offset: f64);

    /// Remove any offset set by [`set_visual_offset`](Self::set_visual_offset).
    fn clear_visual_offset(&mut self, item: K);

    /// Translate `item` by `offset`, or remove its translation if one is
    /// already applied.
    fn toggle_translation(&mut self, item: K, offset: f64);

    /// Remove any translation applied by
    /// [`toggle_translation`](Self::toggle_translation).
    fn clear_translation(&mut self, item: K);

    /// Add `markers` to `target`.
    fn set_markers(&mut self, target: MarkerTarget<K>, markers: Markers);

    /// Remove `markers` from `target`.
    fn clear_markers(&mut self, target: MarkerTarget<K>, markers: Markers);

    /// Bring `item` into view, scrolling the nearest scroll container.
    fn scroll_into_view(&mut self, item: K);

    /// Give keyboard focus to the handle of `item`.
    fn focus_handle(&mut self, item: K);

    /// Push a status message to the accessibility channel.
    fn announce(&mut self, announcement: &Announcement);
}
