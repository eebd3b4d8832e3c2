// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard grab state machine.
//!
//! ## States
//!
//! `Idle` and `Grabbed`, represented by whether a [`KeyboardSession`] exists.
//!
//! | Key                    | Idle                     | Grabbed                     |
//! |------------------------|--------------------------|-----------------------------|
//! | Enter / Space          | grab (on a handle)       | drop at the highlight       |
//! | Arrow Up / Down        | ignored                  | move highlight, skip origin |
//! | Home / End             | ignored                  | highlight first / last      |
//! | Escape                 | ignored                  | cancel                      |
//! | focus leaves a handle  | ignored                  | cancel                      |
//!
//! Unlike a pointer drag, nothing moves while grabbed; a `TARGETED` marker
//! shows where the item will land. On drop the displacement is
//! `highlighted - grabbed` and the shared [commit](crate::commit) runs.

use alloc::vec::Vec;

use crate::announce::Announcement;
use crate::commit::{Committed, commit, destination};
use crate::host::ReorderHost;
use crate::types::{Direction, Key, MarkerTarget, Markers, Outcome, ReorderConfig};

/// A highlight movement request.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Navigation {
    /// One position in a direction, skipping the grabbed item's own slot.
    Step(Direction),
    /// The first position.
    First,
    /// The last position.
    Last,
}

impl Navigation {
    /// Navigation bound to `key`, if any.
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowUp => Some(Self::Step(Direction::Up)),
            Key::ArrowDown => Some(Self::Step(Direction::Down)),
            Key::Home => Some(Self::First),
            Key::End => Some(Self::Last),
            _ => None,
        }
    }
}

/// Compute the next highlighted index.
///
/// Steps skip `grabbed`, landing one further in the same direction. With
/// `wrap`, stepping past either end continues from the other; without it, a
/// step that would leave the list keeps the current highlight.
pub fn navigate(
    highlighted: usize,
    grabbed: usize,
    len: usize,
    navigation: Navigation,
    wrap: bool,
) -> usize {
    let Some(last) = len.checked_sub(1) else {
        return 0;
    };
    let direction = match navigation {
        Navigation::First => return 0,
        Navigation::Last => return last,
        Navigation::Step(direction) => direction,
    };
    if last == 0 {
        return highlighted;
    }

    let step = |from: usize| match direction {
        Direction::Up => from.checked_sub(1).or(wrap.then_some(last)),
        Direction::Down if from < last => Some(from + 1),
        Direction::Down => wrap.then_some(0),
    };

    match step(highlighted) {
        Some(to) if to == grabbed => step(to).unwrap_or(highlighted),
        Some(to) => to,
        None => highlighted,
    }
}

/// State of an active keyboard grab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardSession<K> {
    item: K,
    items: Vec<K>,
    grabbed: usize,
    highlighted: usize,
}

impl<K: Copy> KeyboardSession<K> {
    /// The grabbed item.
    pub fn item(&self) -> K {
        self.item
    }

    /// Original index of the grabbed item.
    pub fn grabbed_index(&self) -> usize {
        self.grabbed
    }

    /// Candidate drop index.
    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    /// Displacement a drop would commit.
    pub fn displacement(&self) -> isize {
        self.highlighted as isize - self.grabbed as isize
    }
}

/// What a keyboard event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyResponse<K> {
    /// Nothing; let the platform handle the key.
    Ignored,
    /// An item was grabbed at this index.
    Grabbed(usize),
    /// The highlight moved to this index.
    Moved(usize),
    /// The grab ended with a drop; carries the move if the order changed.
    Dropped(Option<Committed<K>>),
    /// The grab was discarded.
    Cancelled,
}

impl<K> KeyResponse<K> {
    /// Whether the host should suppress the key's default action.
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::Ignored => Outcome::Ignored,
            _ => Outcome::Consumed,
        }
    }
}

/// Keyboard half of the reorder engine.
#[derive(Clone, Debug)]
pub struct KeyboardGrab<K> {
    session: Option<KeyboardSession<K>>,
}

impl<K> Default for KeyboardGrab<K> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<K: Copy + PartialEq> KeyboardGrab<K> {
    /// Create an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&KeyboardSession<K>> {
        self.session.as_ref()
    }

    /// Returns `true` while an item is grabbed.
    pub fn is_grabbed(&self) -> bool {
        self.session.is_some()
    }

    /// Dispatch `key`, pressed while focus is within `item`.
    ///
    /// `on_handle` tells whether focus is on the item's grab handle; only a
    /// handle can start a grab.
    pub fn key_down<H>(
        &mut self,
        host: &mut H,
        item: K,
        on_handle: bool,
        key: Key,
        config: &ReorderConfig,
    ) -> KeyResponse<K>
    where
        H: ReorderHost<K> + ?Sized,
    {
        match key {
            Key::Escape => self.cancel(host),
            k if k.is_activation() => {
                if self.session.is_some() {
                    self.place(host)
                } else if on_handle {
                    self.grab(host, item)
                } else {
                    KeyResponse::Ignored
                }
            }
            k => match Navigation::from_key(k) {
                Some(n) => self.navigate(host, n, config),
                None => KeyResponse::Ignored,
            },
        }
    }

    /// Grab `item`.
    pub fn grab<H>(&mut self, host: &mut H, item: K) -> KeyResponse<K>
    where
        H: ReorderHost<K> + ?Sized,
    {
        if self.session.is_some() {
            return KeyResponse::Ignored;
        }
        let items = host.items();
        let Some(index) = items.iter().position(|&k| k == item) else {
            return KeyResponse::Ignored;
        };

        host.set_markers(MarkerTarget::Item(item), Markers::GRABBED);
        host.announce(&Announcement::grabbed(index, items.len()));

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "reorder.keyboard.grab", index, len = items.len());

        self.session = Some(KeyboardSession {
            item,
            items,
            grabbed: index,
            highlighted: index,
        });
        KeyResponse::Grabbed(index)
    }

    /// Move the highlight.
    pub fn navigate<H>(
        &mut self,
        host: &mut H,
        navigation: Navigation,
        config: &ReorderConfig,
    ) -> KeyResponse<K>
    where
        H: ReorderHost<K> + ?Sized,
    {
        let Some(s) = self.session.as_mut() else {
            return KeyResponse::Ignored;
        };
        let len = s.items.len();
        let to = navigate(
            s.highlighted,
            s.grabbed,
            len,
            navigation,
            config.wrap_navigation,
        );

        host.clear_markers(MarkerTarget::Item(s.items[s.highlighted]), Markers::TARGETED);
        host.set_markers(MarkerTarget::Item(s.items[to]), Markers::TARGETED);
        if config.auto_scroll {
            host.scroll_into_view(s.items[to]);
        }
        host.announce(&Announcement::moved(to, len));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "reorder.keyboard.navigate",
            ?navigation,
            from = s.highlighted,
            to
        );

        s.highlighted = to;
        KeyResponse::Moved(to)
    }

    /// Drop the grabbed item at the highlight.
    pub fn place<H>(&mut self, host: &mut H) -> KeyResponse<K>
    where
        H: ReorderHost<K> + ?Sized,
    {
        let Some(s) = self.session.take() else {
            return KeyResponse::Ignored;
        };
        let displacement = s.displacement();
        let len = s.items.len();

        let committed = commit(host, &s.items, s.grabbed, displacement);
        host.clear_markers(MarkerTarget::Item(s.items[s.highlighted]), Markers::TARGETED);
        host.clear_markers(MarkerTarget::Item(s.item), Markers::GRABBED);
        host.focus_handle(s.item);
        host.announce(&Announcement::dropped(
            s.grabbed,
            destination(s.grabbed, displacement, len),
            len,
        ));

        KeyResponse::Dropped(committed)
    }

    /// Discard the grab. Safe to call at any time.
    pub fn cancel<H>(&mut self, host: &mut H) -> KeyResponse<K>
    where
        H: ReorderHost<K> + ?Sized,
    {
        let Some(s) = self.session.take() else {
            return KeyResponse::Ignored;
        };
        host.clear_markers(MarkerTarget::Item(s.items[s.highlighted]), Markers::TARGETED);
        host.clear_markers(MarkerTarget::Item(s.item), Markers::GRABBED);
        host.announce(&Announcement::cancelled(s.grabbed, s.items.len()));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "reorder.keyboard.cancel",
            index = s.grabbed,
            highlighted = s.highlighted
        );

        KeyResponse::Cancelled
    }

    /// Focus left an element; `on_handle` tells whether it was a grab handle.
    pub fn focus_out<H>(&mut self, host: &mut H, on_handle: bool) -> KeyResponse<K>
    where
        H: ReorderHost<K> + ?Sized,
    {
        if !on_handle {
            return KeyResponse::Ignored;
        }
        self.cancel(host)
    }
}
