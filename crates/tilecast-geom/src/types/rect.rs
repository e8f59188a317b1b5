// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::collide::{mirror_collide, mirror_distance, Collide, Distance};
use crate::scalar::Scalar;
use crate::types::circle::Circle;
use crate::types::interval::Interval;
use crate::types::vec2::Vec2;

/// Axis-aligned rectangle stored as `position + size`.
///
/// Invariants: none. `size` components may be negative, in which case the
/// rectangle covers the region between `position` and `position + size`
/// anyway; `right() < left()` is then possible. Every query accepts such
/// unnormalized rectangles directly. [`make_positive`](Self::make_positive)
/// is the only normalizing mutation and never changes the covered region.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<S> {
    /// Corner the size is measured from (top-left when the size is positive).
    pub position: Vec2<S>,
    /// Signed extent along each axis.
    pub size: Vec2<S>,
}

impl<S: Scalar> Rect<S> {
    /// Creates a rectangle from `x, y, width, height`.
    pub fn new(x: S, y: S, width: S, height: S) -> Self {
        Self::from_position_size(Vec2::new(x, y), Vec2::new(width, height))
    }

    /// Creates a rectangle from a corner and a signed size.
    pub const fn from_position_size(position: Vec2<S>, size: Vec2<S>) -> Self {
        Self { position, size }
    }

    /// Rectangle spanning from `a` to `b`; the size is negative on any axis
    /// where `b` lies before `a`.
    pub fn from_points(a: Vec2<S>, b: Vec2<S>) -> Self {
        Self::from_position_size(a, b - a)
    }

    /// `position.x`.
    pub fn left(&self) -> S {
        self.position.x
    }

    /// `position.y`.
    pub fn top(&self) -> S {
        self.position.y
    }

    /// `position.x + size.x`; smaller than `left()` when the width is negative.
    pub fn right(&self) -> S {
        self.position.x + self.size.x
    }

    /// `position.y + size.y`; smaller than `top()` when the height is negative.
    pub fn bottom(&self) -> S {
        self.position.y + self.size.y
    }

    /// Signed width.
    pub fn width(&self) -> S {
        self.size.x
    }

    /// Signed height.
    pub fn height(&self) -> S {
        self.size.y
    }

    /// Smallest x covered.
    pub fn real_left(&self) -> S {
        self.left().min(self.right())
    }

    /// Largest x covered.
    pub fn real_right(&self) -> S {
        self.left().max(self.right())
    }

    /// Smallest y covered.
    pub fn real_top(&self) -> S {
        self.top().min(self.bottom())
    }

    /// Largest y covered.
    pub fn real_bottom(&self) -> S {
        self.top().max(self.bottom())
    }

    /// Unsigned width.
    pub fn real_width(&self) -> S {
        self.size.x.abs()
    }

    /// Unsigned height.
    pub fn real_height(&self) -> S {
        self.size.y.abs()
    }

    /// Horizontal extent as the interval `left → right`.
    pub fn x_interval(&self) -> Interval<S> {
        Interval::new(self.left(), self.right())
    }

    /// Vertical extent as the interval `top → bottom`.
    pub fn y_interval(&self) -> Interval<S> {
        Interval::new(self.top(), self.bottom())
    }

    /// Midpoint of the covered region.
    pub fn center(&self) -> Vec2<S> {
        self.position + self.size * (S::one() / S::two())
    }

    /// Flips negative axes so the size is non-negative, keeping the region.
    pub fn make_positive(&mut self) {
        if self.size.x < S::zero() {
            self.position.x = self.position.x + self.size.x;
            self.size.x = -self.size.x;
        }
        if self.size.y < S::zero() {
            self.position.y = self.position.y + self.size.y;
            self.size.y = -self.size.y;
        }
    }

    /// Non-mutating [`make_positive`](Self::make_positive).
    pub fn positive(mut self) -> Self {
        self.make_positive();
        self
    }

    /// Moves `position` to `to`; the size is untouched.
    pub fn move_to(&mut self, to: Vec2<S>) {
        self.position = to;
    }

    /// Shifts the rectangle by `by`; the size is untouched.
    pub fn translate(&mut self, by: Vec2<S>) {
        self.position = self.position + by;
    }

    /// Moves the rectangle so `left() == left`, preserving the width.
    pub fn set_left(&mut self, left: S) {
        self.position.x = left;
    }

    /// Moves the rectangle so `top() == top`, preserving the height.
    pub fn set_top(&mut self, top: S) {
        self.position.y = top;
    }

    /// Moves the rectangle so `right() == right`, preserving the width.
    ///
    /// `position.x` changes; `size.x` does not.
    pub fn set_right(&mut self, right: S) {
        self.position.x = right - self.size.x;
    }

    /// Moves the rectangle so `bottom() == bottom`, preserving the height.
    ///
    /// `position.y` changes; `size.y` does not.
    pub fn set_bottom(&mut self, bottom: S) {
        self.position.y = bottom - self.size.y;
    }

    /// Moves the rectangle so `center() == center`, preserving the size.
    pub fn set_center(&mut self, center: Vec2<S>) {
        self.position = center - self.size * (S::one() / S::two());
    }

    /// Grows the covered region by `margin` on every side (shrinks when
    /// negative). The result is normalized.
    pub fn inflate(&self, margin: S) -> Self {
        let r = self.positive();
        let grow = Vec2::new(margin, margin);
        Self::from_position_size(r.position - grow, r.size + grow * S::two())
    }

    /// Smallest normalized rectangle covering both inputs.
    pub fn union(&self, other: &Self) -> Self {
        let left = self.real_left().min(other.real_left());
        let top = self.real_top().min(other.real_top());
        let right = self.real_right().max(other.real_right());
        let bottom = self.real_bottom().max(other.real_bottom());
        Self::new(left, top, right - left, bottom - top)
    }

    /// Per-axis gaps from `point` to the covered region (zero inside).
    fn axis_gaps(&self, point: Vec2<S>) -> (S, S) {
        (
            self.x_interval().distance_point(point.x),
            self.y_interval().distance_point(point.y),
        )
    }
}

/// Overlap of two signed extents on one axis, without normalizing either.
///
/// `delta` is `other_position - self_position`; `extent` and `other_extent`
/// are the signed sizes. The axis is mirrored when `delta < 0`, after which
/// `self` reaches toward `other` by `max(extent, 0)` and `other` reaches back
/// by `max(-other_extent, 0)`; the ranges meet when those reaches cover the
/// gap. A non-positive extent collapses its side to the scalar at its
/// position.
fn overlaps_on_axis<S: Scalar>(delta: S, extent: S, other_extent: S, exclusive: bool) -> bool {
    let zero = S::zero();
    let (delta, extent, other_extent) = if delta < zero {
        (-delta, -extent, -other_extent)
    } else {
        (delta, extent, other_extent)
    };
    let reach = extent.max(zero) + (-other_extent).max(zero);
    if exclusive {
        // With `delta == 0` both ranges may only share their start point.
        reach > delta && (delta > zero || extent < zero || other_extent > zero)
    } else {
        reach >= delta
    }
}

impl<S: Scalar> Collide<Vec2<S>> for Rect<S> {
    fn collide(&self, point: &Vec2<S>) -> bool {
        self.x_interval().contains(point.x) && self.y_interval().contains(point.y)
    }

    fn collide_i(&self, point: &Vec2<S>) -> bool {
        self.x_interval().contains_i(point.x) && self.y_interval().contains_i(point.y)
    }
}

impl<S: Scalar> Collide<Rect<S>> for Rect<S> {
    fn collide(&self, other: &Rect<S>) -> bool {
        let delta = other.position - self.position;
        overlaps_on_axis(delta.x, self.size.x, other.size.x, false)
            && overlaps_on_axis(delta.y, self.size.y, other.size.y, false)
    }

    fn collide_i(&self, other: &Rect<S>) -> bool {
        let delta = other.position - self.position;
        overlaps_on_axis(delta.x, self.size.x, other.size.x, true)
            && overlaps_on_axis(delta.y, self.size.y, other.size.y, true)
    }
}

impl<S: Scalar> Collide<Circle<S>> for Rect<S> {
    fn collide(&self, circle: &Circle<S>) -> bool {
        let (dx, dy) = self.axis_gaps(circle.center);
        let r = circle.radius();
        if dx == S::zero() {
            dy <= r
        } else if dy == S::zero() {
            dx <= r
        } else {
            dx * dx + dy * dy <= r * r
        }
    }

    fn collide_i(&self, circle: &Circle<S>) -> bool {
        let r = circle.radius();
        if r <= S::zero() {
            return self.collide(&circle.center);
        }
        let (dx, dy) = self.axis_gaps(circle.center);
        if dx == S::zero() {
            dy < r
        } else if dy == S::zero() {
            dx < r
        } else {
            dx * dx + dy * dy < r * r
        }
    }
}

impl<S: Scalar> Distance<Vec2<S>> for Rect<S> {
    type Output = S;

    fn distance(&self, point: &Vec2<S>) -> S {
        let (dx, dy) = self.axis_gaps(*point);
        if dx == S::zero() {
            dy
        } else if dy == S::zero() {
            dx
        } else {
            (dx * dx + dy * dy).sqrt()
        }
    }

    fn distance_squared(&self, point: &Vec2<S>) -> S {
        let (dx, dy) = self.axis_gaps(*point);
        dx * dx + dy * dy
    }
}

impl<S: Scalar> Distance<Rect<S>> for Rect<S> {
    type Output = S;

    fn distance(&self, other: &Rect<S>) -> S {
        let dx = self.x_interval().distance(&other.x_interval());
        let dy = self.y_interval().distance(&other.y_interval());
        if dx == S::zero() {
            dy
        } else if dy == S::zero() {
            dx
        } else {
            (dx * dx + dy * dy).sqrt()
        }
    }

    fn distance_squared(&self, other: &Rect<S>) -> S {
        let dx = self.x_interval().distance(&other.x_interval());
        let dy = self.y_interval().distance(&other.y_interval());
        dx * dx + dy * dy
    }
}

impl<S: Scalar> Distance<Circle<S>> for Rect<S> {
    type Output = S;

    /// Gap between the rectangle and the circle's disk; zero on overlap.
    fn distance(&self, circle: &Circle<S>) -> S {
        (self.distance(&circle.center) - circle.radius()).max(S::zero())
    }

    fn distance_squared(&self, circle: &Circle<S>) -> S {
        let d = Distance::<Circle<S>>::distance(self, circle);
        d * d
    }
}

mirror_collide!(Vec2 => Rect);
mirror_distance!(Vec2 => Rect);

#[cfg(test)]
mod tests {
    use super::overlaps_on_axis;

    #[test]
    fn axis_overlap_matches_normalized_ranges() {
        // self [0, 4], other [4, 8]: touching.
        assert!(overlaps_on_axis(4.0_f32, 4.0, 4.0, false));
        assert!(!overlaps_on_axis(4.0_f32, 4.0, 4.0, true));
        // self [0, 4], other [6, 2] stored reversed: overlap [2, 4].
        assert!(overlaps_on_axis(6.0_f32, 4.0, -4.0, true));
        // self stored as [4, 0] (position 4, extent -4) vs other [5, 9].
        assert!(!overlaps_on_axis(1.0_f32, -4.0, 4.0, false));
        // other sits behind self: self [3, 5], other [0, 3].
        assert!(overlaps_on_axis(-3.0_f32, 2.0, 3.0, false));
        assert!(!overlaps_on_axis(-3.0_f32, 2.0, 3.0, true));
        // same start, other reversed: self [0, 4], other [-3, 0].
        assert!(overlaps_on_axis(0.0_f32, 4.0, -3.0, false));
        assert!(!overlaps_on_axis(0.0_f32, 4.0, -3.0, true));
    }
}
