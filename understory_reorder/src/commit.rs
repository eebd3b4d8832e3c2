// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commit: apply a session's net displacement to the ordered sequence.
//!
//! Both the [pointer](crate::pointer) and [keyboard](crate::keyboard)
//! machines end here. A session is reduced to `(grabbed, displacement)` and
//! the sequence is mutated exactly once, by a single remove-then-insert.
//!
//! ## Insertion point
//!
//! Hosts move items with an "insert before" primitive evaluated against the
//! order *before* the grabbed item is removed. Moving up inserts before the
//! item currently at the destination; moving down inserts before the item one
//! past it, because removing the grabbed item shifts everything after it up by
//! one.

use alloc::vec::Vec;

use crate::host::ReorderHost;

/// Result of a commit that changed the order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Committed<K> {
    /// The order after the move, as reported by the host.
    pub order: Vec<K>,
    /// Original index of the moved item.
    pub from: usize,
    /// Index the item now occupies.
    pub to: usize,
}

/// Destination index for `grabbed + displacement`, clamped into `0..len`.
pub fn destination(grabbed: usize, displacement: isize, len: usize) -> usize {
    grabbed
        .saturating_add_signed(displacement)
        .min(len.saturating_sub(1))
}

/// Index of the item to insert before, in the pre-removal order.
///
/// Returns `len` (meaning "append") when the destination is the last slot.
pub fn insert_before_index(grabbed: usize, destination: usize) -> usize {
    if destination < grabbed {
        destination
    } else {
        destination + 1
    }
}

/// Move `items[grabbed]` by `displacement` positions in place.
///
/// Returns the destination index, or `None` if nothing moved.
pub fn reorder<K>(items: &mut Vec<K>, grabbed: usize, displacement: isize) -> Option<usize> {
    if displacement == 0 || grabbed >= items.len() {
        return None;
    }
    let to = destination(grabbed, displacement, items.len());
    if to == grabbed {
        return None;
    }
    let item = items.remove(grabbed);
    items.insert(to, item);
    Some(to)
}

/// Apply `displacement` to `items[grabbed]` through the host.
///
/// `items` is the order at session start. A zero net displacement is a pure
/// discard: the host is not touched and `None` is returned.
pub fn commit<K, H>(
    host: &mut H,
    items: &[K],
    grabbed: usize,
    displacement: isize,
) -> Option<Committed<K>>
where
    K: Copy + PartialEq,
    H: ReorderHost<K> + ?Sized,
{
    let &item = items.get(grabbed)?;
    let to = destination(grabbed, displacement, items.len());
    if displacement == 0 || to == grabbed {
        return None;
    }

    let before = items.get(insert_before_index(grabbed, to)).copied();
    host.insert_before(item, before);
    let order = host.items();

    debug_assert!(
        {
            let mut expected = items.to_vec();
            reorder(&mut expected, grabbed, displacement);
            expected == order
        },
        "host order does not match the committed move"
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "reorder.commit",
        from = grabbed,
        to,
        displacement,
        len = items.len()
    );

    Some(Committed {
        order,
        from: grabbed,
        to,
    })
}
