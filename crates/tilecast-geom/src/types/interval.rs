// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::collide::{Collide, Distance};
use crate::scalar::Scalar;

/// Directed 1D range `start → end`.
///
/// The order of the endpoints encodes a direction: an interval with
/// `start > end` is *reversed* and is walked from its right end to its left.
/// No invariant is enforced; empty (point) and reversed intervals are valid
/// inputs to every query. `left`/`right` give the sorted bounds.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<S> {
    /// Where the interval starts when walked in its own direction.
    pub start: S,
    /// Where the walk ends.
    pub end: S,
}

impl<S: Scalar> Interval<S> {
    /// Creates an interval running from `start` to `end`.
    pub const fn new(start: S, end: S) -> Self {
        Self { start, end }
    }

    /// Sorted bounds `(left, right)`.
    pub fn range(&self) -> (S, S) {
        if self.start > self.end {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }

    /// Sorted bounds plus the `reverse` flag (`start > end`).
    pub fn range_with_direction(&self) -> (S, S, bool) {
        let (left, right) = self.range();
        (left, right, self.is_reversed())
    }

    /// `min(start, end)`.
    pub fn left(&self) -> S {
        self.range().0
    }

    /// `max(start, end)`.
    pub fn right(&self) -> S {
        self.range().1
    }

    /// `true` when the interval runs toward smaller values.
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    /// Unsigned extent `right - left`.
    pub fn length(&self) -> S {
        let (left, right) = self.range();
        right - left
    }

    /// Swaps the endpoints if needed so that `start <= end`.
    pub fn make_positive(&mut self) {
        if self.is_reversed() {
            core::mem::swap(&mut self.start, &mut self.end);
        }
    }

    /// Non-mutating [`make_positive`](Self::make_positive).
    pub fn positive(mut self) -> Self {
        self.make_positive();
        self
    }

    /// Inclusive containment: `left <= point <= right`.
    pub fn contains(&self, point: S) -> bool {
        let (left, right) = self.range();
        left <= point && point <= right
    }

    /// Exclusive containment: `left < point < right`.
    pub fn contains_i(&self, point: S) -> bool {
        let (left, right) = self.range();
        left < point && point < right
    }

    /// Gap from the range to `point`; zero when contained.
    pub fn distance_point(&self, point: S) -> S {
        let (left, right) = self.range();
        if point < left {
            left - point
        } else if point > right {
            point - right
        } else {
            S::zero()
        }
    }

    /// Inclusive overlap with the unordered range spanned by `a` and `b`.
    ///
    /// Fails only when one range lies entirely left or right of the other;
    /// touching ends collide.
    pub fn collide_range(&self, a: S, b: S) -> bool {
        let (left, right) = self.range();
        let (other_left, other_right) = Self::new(a, b).range();
        !(right < other_left || other_right < left)
    }

    /// Exclusive overlap with the unordered range spanned by `a` and `b`.
    pub fn collide_range_i(&self, a: S, b: S) -> bool {
        let (left, right) = self.range();
        let (other_left, other_right) = Self::new(a, b).range();
        !(right <= other_left || other_right <= left)
    }

    /// Intersection with `other`, or `None` when disjoint.
    ///
    /// The result keeps the receiver's direction: a reversed receiver yields
    /// a reversed intersection.
    pub fn collide_range_of(&self, other: &Self) -> Option<Self> {
        if !self.collide(other) {
            return None;
        }
        let (left, right, reverse) = self.range_with_direction();
        let (other_left, other_right) = other.range();
        let lo = left.max(other_left);
        let hi = right.min(other_right);
        Some(if reverse { Self::new(hi, lo) } else { Self::new(lo, hi) })
    }

    /// Position at which the receiver, walked in its own direction, first
    /// enters `other`; `None` when disjoint.
    ///
    /// That is `max(left, other_left)` for a forward interval and
    /// `min(right, other_right)` for a reversed one.
    pub fn collide_position(&self, other: &Self) -> Option<S> {
        if !self.collide(other) {
            return None;
        }
        let (left, right, reverse) = self.range_with_direction();
        let (other_left, other_right) = other.range();
        Some(if reverse {
            right.min(other_right)
        } else {
            left.max(other_left)
        })
    }
}

impl<S: Scalar> Collide<Interval<S>> for Interval<S> {
    fn collide(&self, other: &Interval<S>) -> bool {
        self.collide_range(other.start, other.end)
    }

    fn collide_i(&self, other: &Interval<S>) -> bool {
        self.collide_range_i(other.start, other.end)
    }
}

impl<S: Scalar> Distance<Interval<S>> for Interval<S> {
    type Output = S;

    /// Gap between the two ranges; zero when they overlap or touch.
    fn distance(&self, other: &Interval<S>) -> S {
        let (left, right) = self.range();
        let (other_left, other_right) = other.range();
        if right < other_left {
            other_left - right
        } else if other_right < left {
            left - other_right
        } else {
            S::zero()
        }
    }

    fn distance_squared(&self, other: &Interval<S>) -> S {
        let d = self.distance(other);
        d * d
    }
}

impl<S: Scalar> Collide<S> for Interval<S> {
    fn collide(&self, point: &S) -> bool {
        self.contains(*point)
    }

    fn collide_i(&self, point: &S) -> bool {
        self.contains_i(*point)
    }
}

impl<S: Scalar> Distance<S> for Interval<S> {
    type Output = S;

    fn distance(&self, point: &S) -> S {
        self.distance_point(*point)
    }

    fn distance_squared(&self, point: &S) -> S {
        let d = self.distance_point(*point);
        d * d
    }
}
