// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Status announcements for an accessibility live region.
//!
//! The engine hands each [`Announcement`] to
//! [`ReorderHost::announce`](crate::host::ReorderHost::announce). Its
//! [`Display`](core::fmt::Display) form is the message text; positions are
//! 1-based.
//!
//! ```
//! use understory_reorder::announce::Announcement;
//! let a = Announcement::Moved { position: 3, len: 5 };
//! assert_eq!(a.to_string(), "Position 3 of 5.");
//! ```

use core::fmt;

/// A message describing the state of a reorder session.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Announcement {
    /// An item was grabbed with the keyboard.
    Grabbed {
        /// 1-based position of the grabbed item.
        position: usize,
        /// Number of items in the list.
        len: usize,
    },
    /// The keyboard highlight moved.
    Moved {
        /// 1-based position of the highlight.
        position: usize,
        /// Number of items in the list.
        len: usize,
    },
    /// The session committed.
    Dropped {
        /// 1-based original position.
        from: usize,
        /// 1-based destination position.
        to: usize,
        /// Number of items in the list.
        len: usize,
    },
    /// The session was discarded.
    Cancelled {
        /// 1-based position the item stays at.
        position: usize,
        /// Number of items in the list.
        len: usize,
    },
}

impl Announcement {
    pub(crate) const fn grabbed(index: usize, len: usize) -> Self {
        Self::Grabbed {
            position: index + 1,
            len,
        }
    }

    pub(crate) const fn moved(index: usize, len: usize) -> Self {
        Self::Moved {
            position: index + 1,
            len,
        }
    }

    pub(crate) const fn dropped(from: usize, to: usize, len: usize) -> Self {
        Self::Dropped {
            from: from + 1,
            to: to + 1,
            len,
        }
    }

    pub(crate) const fn cancelled(index: usize, len: usize) -> Self {
        Self::Cancelled {
            position: index + 1,
            len,
        }
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Grabbed { position, len } => write!(
                f,
                "Item grabbed, position {position} of {len}. \
                 Use the arrow keys to move, Enter or Space to drop, Escape to cancel."
            ),
            Self::Moved { position, len } => write!(f, "Position {position} of {len}."),
            Self::Dropped { from, to, len } if from == to => {
                write!(f, "Item dropped at its original position {from} of {len}.")
            }
            Self::Dropped { from, to, len } => {
                write!(f, "Item moved from position {from} to position {to} of {len}.")
            }
            Self::Cancelled { position, len } => write!(
                f,
                "Reorder cancelled. Item returned to position {position} of {len}."
            ),
        }
    }
}
