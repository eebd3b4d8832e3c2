// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorder engine: pointer and keyboard machines behind one front.
//!
//! ## Usage
//!
//! - Construct with [`ReorderList::new`] or [`ReorderList::with_config`].
//! - Forward pointer-down/move/up/cancel, key-down and focus-out events from
//!   the list to the matching methods, passing your host.
//! - Suppress the platform default when a method reports
//!   [`Outcome::Consumed`].
//! - Persist the new order from [`Committed::order`] when a drop returns one.
//!
//! ## Sessions
//!
//! At most one session is active. A grab of either kind is rejected while the
//! other kind is in progress. Apart from that the machines are independent:
//! pointer events only reach the pointer machine and keys only the keyboard
//! machine. Escape is the exception and cancels whichever session is active.

use kurbo::{Point, Vec2};

use crate::commit::Committed;
use crate::geometry::Geometry;
use crate::host::ReorderHost;
use crate::keyboard::{KeyResponse, KeyboardGrab};
use crate::pointer::PointerDrag;
use crate::types::{Key, Outcome, ReorderConfig};

/// Reorder engine for one list.
#[derive(Clone, Debug)]
pub struct ReorderList<K> {
    config: ReorderConfig,
    pointer: PointerDrag<K>,
    keyboard: KeyboardGrab<K>,
}

impl<K> Default for ReorderList<K> {
    fn default() -> Self {
        Self {
            config: ReorderConfig::default(),
            pointer: PointerDrag::default(),
            keyboard: KeyboardGrab::default(),
        }
    }
}

impl<K: Copy + PartialEq> ReorderList<K> {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with `config`.
    pub fn with_config(config: ReorderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect from the next event.
    pub fn set_config(&mut self, config: ReorderConfig) {
        self.config = config;
    }

    /// The pointer machine.
    pub fn pointer(&self) -> &PointerDrag<K> {
        &self.pointer
    }

    /// The keyboard machine.
    pub fn keyboard(&self) -> &KeyboardGrab<K> {
        &self.keyboard
    }

    /// Returns `true` while either kind of session is active.
    pub fn is_active(&self) -> bool {
        self.pointer.is_grabbed() || self.keyboard.is_grabbed()
    }

    /// The item being reordered, if any.
    pub fn grabbed_item(&self) -> Option<K> {
        self.pointer
            .session()
            .map(|s| s.item())
            .or_else(|| self.keyboard.session().map(|s| s.item()))
    }

    /// Pointer-down on `item`.
    pub fn pointer_down<H>(&mut self, host: &mut H, item: K, on_handle: bool, position: Point) -> Outcome
    where
        H: ReorderHost<K> + Geometry<K> + ?Sized,
    {
        if self.keyboard.is_grabbed() {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "reorder.ignored", reason = "keyboard session active");
            return Outcome::Ignored;
        }
        self.pointer.grab(host, item, on_handle, position)
    }

    /// Pointer-move.
    pub fn pointer_move<H>(&mut self, host: &mut H, position: Point, movement: Vec2) -> Outcome
    where
        H: ReorderHost<K> + Geometry<K> + ?Sized,
    {
        self.pointer
            .drag(host, position, movement, self.config.auto_scroll)
    }

    /// Pointer-up. Returns the committed move, if the order changed.
    pub fn pointer_up<H>(&mut self, host: &mut H) -> Option<Committed<K>>
    where
        H: ReorderHost<K> + Geometry<K> + ?Sized,
    {
        self.pointer.release(host)
    }

    /// Pointer-cancel from the platform. Discards a pointer drag.
    pub fn pointer_cancel<H>(&mut self, host: &mut H) -> Outcome
    where
        H: ReorderHost<K> + Geometry<K> + ?Sized,
    {
        self.pointer.cancel(host)
    }

    /// Key-down while focus is within `item`.
    pub fn key_down<H>(&mut self, host: &mut H, item: K, on_handle: bool, key: Key) -> KeyResponse<K>
    where
        H: ReorderHost<K> + Geometry<K> + ?Sized,
    {
        if self.pointer.is_grabbed() {
            return match key {
                Key::Escape => match self.pointer.cancel(host) {
                    Outcome::Consumed => KeyResponse::Cancelled,
                    Outcome::Ignored => KeyResponse::Ignored,
                },
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(message = "reorder.ignored", reason = "pointer session active", ?key);
                    KeyResponse::Ignored
                }
            };
        }
        self.keyboard
            .key_down(host, item, on_handle, key, &self.config)
    }

    /// Focus left an element within the list.
    pub fn focus_out<H>(&mut self, host: &mut H, on_handle: bool) -> KeyResponse<K>
    where
        H: ReorderHost<K> + ?Sized,
    {
        self.keyboard.focus_out(host, on_handle)
    }

    /// Discard whichever session is active.
    pub fn cancel<H>(&mut self, host: &mut H) -> Outcome
    where
        H: ReorderHost<K> + Geometry<K> + ?Sized,
    {
        if self.pointer.cancel(host).is_consumed() {
            return Outcome::Consumed;
        }
        self.keyboard.cancel(host).outcome()
    }
}
