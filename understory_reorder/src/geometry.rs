// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry provider: extents and midpoints of rendered items.
//!
//! ## Coordinate space
//!
//! Midpoints must be reported in the same space as the pointer positions fed
//! to the [pointer](crate::pointer) machine, typically page coordinates that
//! include the current scroll offset.
//!
//! ## Freshness
//!
//! Implementations query the current rendered geometry on every call instead
//! of caching it. Siblings may have been translated by earlier crossings in the
//! same session, and the engine relies on seeing those translations.
//!
//! ## Absence
//!
//! There are no error conditions. A missing sibling is reported by
//! [`Geometry::sibling_midpoint`] as the sentinel of its [`Side`], so
//! comparisons at the list ends need no special cases.

use kurbo::Rect;

use crate::types::Side;

/// Rendered geometry of the list and its items.
pub trait Geometry<K> {
    /// Total vertical footprint of `item`, including its outer margins.
    ///
    /// Every crossing displaces content by this amount.
    fn item_extent(&self, item: &K) -> f64;

    /// Vertical center of the item's current rendered box.
    fn item_midpoint(&self, item: &K) -> f64;

    /// Bounds of the list container. Only `y0..=y1` is consulted.
    fn container_bounds(&self) -> Rect;

    /// Midpoint of the sibling on `side`, or the side's sentinel when there is
    /// no sibling.
    fn sibling_midpoint(&self, item: Option<&K>, side: Side) -> f64 {
        match item {
            Some(item) => self.item_midpoint(item),
            None => side.sentinel(),
        }
    }
}

impl<K, G: Geometry<K> + ?Sized> Geometry<K> for &G {
    #[inline]
    fn item_extent(&self, item: &K) -> f64 {
        (**self).item_extent(item)
    }

    #[inline]
    fn item_midpoint(&self, item: &K) -> f64 {
        (**self).item_midpoint(item)
    }

    #[inline]
    fn container_bounds(&self) -> Rect {
        (**self).container_bounds()
    }
}

/// Returns `true` if `y` lies within the container's vertical bounds.
#[inline]
pub(crate) fn within_vertical(bounds: Rect, y: f64) -> bool {
    y >= bounds.y0 && y <= bounds.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Geometry<u32> for Fixed {
        fn item_extent(&self, _item: &u32) -> f64 {
            10.0
        }

        fn item_midpoint(&self, item: &u32) -> f64 {
            f64::from(*item) * 10.0 + 5.0
        }

        fn container_bounds(&self) -> Rect {
            Rect::new(0.0, 0.0, 100.0, 50.0)
        }
    }

    #[test]
    fn missing_siblings_are_sentinels() {
        let g = Fixed;
        assert_eq!(g.sibling_midpoint(None, Side::Prev), f64::NEG_INFINITY);
        assert_eq!(g.sibling_midpoint(None, Side::Next), f64::INFINITY);
        assert_eq!(g.sibling_midpoint(Some(&2), Side::Next), 25.0);
        assert_eq!((&g).sibling_midpoint(Some(&0), Side::Prev), 5.0);
    }

    #[test]
    fn vertical_containment_is_inclusive() {
        let b = Fixed.container_bounds();
        assert!(within_vertical(b, 0.0));
        assert!(within_vertical(b, 50.0));
        assert!(!within_vertical(b, 50.5));
        assert!(!within_vertical(b, -1.0));
    }
}
