// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types shared by the reorder state machines: directions, sides,
//! markers, keys, handler outcomes, and configuration.

/// Direction of travel of the grabbed item.
///
/// Produced from pointer deltas by [`Direction::from_delta`] and from arrow
/// keys by the [keyboard](crate::keyboard) machine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Toward index 0.
    Up,
    /// Toward the last index.
    Down,
}

impl Direction {
    /// Signed unit step: `-1` for [`Up`](Self::Up), `+1` for [`Down`](Self::Down).
    #[inline]
    pub const fn sign(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }

    /// Direction of a vertical delta; a zero (or NaN) delta has no direction.
    #[inline]
    pub fn from_delta(dy: f64) -> Option<Self> {
        if dy < 0.0 {
            Some(Self::Up)
        } else if dy > 0.0 {
            Some(Self::Down)
        } else {
            None
        }
    }

    /// The sibling side that leads when travelling in this direction.
    #[inline]
    pub const fn leading_side(self) -> Side {
        match self {
            Self::Up => Side::Prev,
            Self::Down => Side::Next,
        }
    }
}

/// Which neighbor of the displaced position a value refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The item immediately above the displaced position.
    Prev,
    /// The item immediately below the displaced position.
    Next,
}

impl Side {
    /// Midpoint used when no sibling exists on this side.
    ///
    /// `-∞` above the first item and `+∞` below the last, so crossing checks
    /// at the list ends never succeed.
    #[inline]
    pub const fn sentinel(self) -> f64 {
        match self {
            Self::Prev => f64::NEG_INFINITY,
            Self::Next => f64::INFINITY,
        }
    }
}

bitflags::bitflags! {
    /// Presentation markers the engine sets and clears on the host.
    ///
    /// Hosts map these onto their own styling hooks (attributes, classes,
    /// widget state).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Markers: u8 {
        /// The item currently being reordered.
        const GRABBED    = 0b0000_0001;
        /// The keyboard highlight (candidate drop position).
        const TARGETED   = 0b0000_0010;
        /// Set on the list while a pointer drag is in progress.
        const REORDERING = 0b0000_0100;
    }
}

/// Receiver of a marker change.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MarkerTarget<K> {
    /// The list container.
    List,
    /// A single item.
    Item(K),
}

/// Keys understood by the [keyboard](crate::keyboard) machine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Activation: grab, or drop when grabbed.
    Enter,
    /// Activation: same as [`Enter`](Self::Enter).
    Space,
    /// Cancel the current session.
    Escape,
    /// Move the highlight one position up.
    ArrowUp,
    /// Move the highlight one position down.
    ArrowDown,
    /// Jump the highlight to the first position.
    Home,
    /// Jump the highlight to the last position.
    End,
    /// Any key the engine does not handle.
    Other,
}

impl Key {
    /// Returns `true` for keys that grab or drop.
    #[inline]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Result of feeding one input event to the engine.
///
/// Hosts use [`Consumed`](Self::Consumed) to suppress the platform default
/// (page scroll on Space and arrow keys, text selection or touch scrolling on
/// pointer-down).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// The engine did nothing with the event.
    Ignored,
    /// The engine acted on the event.
    Consumed,
}

impl Outcome {
    /// Returns `true` if the engine acted on the event.
    #[inline]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Behavior switches for a [`ReorderList`](crate::list::ReorderList).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ReorderConfig {
    /// Arrow keys wrap from the last position to the first and back.
    ///
    /// When `false`, arrows stop at the ends of the list.
    pub wrap_navigation: bool,
    /// Ask the host to keep the dragged item in view while the pointer is
    /// inside the container, and to follow the keyboard highlight.
    pub auto_scroll: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            wrap_navigation: true,
            auto_scroll: true,
        }
    }
}

impl ReorderConfig {
    /// Set [`wrap_navigation`](Self::wrap_navigation).
    #[must_use]
    pub const fn with_wrap_navigation(mut self, wrap: bool) -> Self {
        self.wrap_navigation = wrap;
        self
    }

    /// Set [`auto_scroll`](Self::auto_scroll).
    #[must_use]
    pub const fn with_auto_scroll(mut self, auto_scroll: bool) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }
}
