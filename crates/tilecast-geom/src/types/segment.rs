// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::collide::{mirror_collide, Collide};
use crate::scalar::Scalar;
use crate::types::circle::Circle;
use crate::types::interval::Interval;
use crate::types::rect::Rect;
use crate::types::vec2::Vec2;

/// Directed line segment `start → end`.
///
/// Direction matters: clipping keeps it, and hit positions are reported as
/// the first contact when walking from `start`. Zero-length segments are
/// valid and behave as points.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<S> {
    /// Where the walk begins.
    pub start: Vec2<S>,
    /// Where the walk ends.
    pub end: Vec2<S>,
}

impl<S: Scalar> Segment<S> {
    /// Creates a segment running from `start` to `end`.
    pub const fn new(start: Vec2<S>, end: Vec2<S>) -> Self {
        Self { start, end }
    }

    /// `end - start`.
    pub fn delta(&self) -> Vec2<S> {
        self.end - self.start
    }

    /// Euclidean length.
    pub fn length(&self) -> S {
        self.delta().length()
    }

    /// Squared length.
    pub fn length_squared(&self) -> S {
        self.delta().length_squared()
    }

    /// Same points, opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Point at parameter `t` (`0` is `start`, `1` is `end`).
    pub fn point_at(&self, t: S) -> Vec2<S> {
        self.start + self.delta() * t
    }

    /// Projection on the x axis, directed like the segment.
    pub fn x_interval(&self) -> Interval<S> {
        Interval::new(self.start.x, self.end.x)
    }

    /// Projection on the y axis, directed like the segment.
    pub fn y_interval(&self) -> Interval<S> {
        Interval::new(self.start.y, self.end.y)
    }

    /// Normalized bounding rectangle.
    pub fn range(&self) -> Rect<S> {
        Rect::from_points(self.start, self.end).positive()
    }

    /// `y` of the infinite line through the segment at `x`; `None` when the
    /// line is vertical.
    pub fn y_on_line_at_x(&self, x: S) -> Option<S> {
        (self.start.x != self.end.x).then(|| self.y_on_line_at_x_unchecked(x))
    }

    /// `x` of the infinite line through the segment at `y`; `None` when the
    /// line is horizontal.
    pub fn x_on_line_at_y(&self, y: S) -> Option<S> {
        (self.start.y != self.end.y).then(|| self.x_on_line_at_y_unchecked(y))
    }

    /// [`y_on_line_at_x`](Self::y_on_line_at_x) without the vertical check.
    ///
    /// Divides by `delta.x`; the caller must rule out a vertical line.
    pub fn y_on_line_at_x_unchecked(&self, x: S) -> S {
        let d = self.delta();
        self.start.y + (x - self.start.x) * d.y / d.x
    }

    /// [`x_on_line_at_y`](Self::x_on_line_at_y) without the horizontal check.
    ///
    /// Divides by `delta.y`; the caller must rule out a horizontal line.
    pub fn x_on_line_at_y_unchecked(&self, y: S) -> S {
        let d = self.delta();
        self.start.x + (y - self.start.y) * d.x / d.y
    }

    /// Point on the line at `x`, reusing an endpoint when `x` hits it exactly.
    fn point_at_x(&self, x: S) -> Vec2<S> {
        if x == self.start.x {
            self.start
        } else if x == self.end.x {
            self.end
        } else {
            Vec2::new(x, self.y_on_line_at_x_unchecked(x))
        }
    }

    /// Point on the line at `y`, reusing an endpoint when `y` hits it exactly.
    fn point_at_y(&self, y: S) -> Vec2<S> {
        if y == self.start.y {
            self.start
        } else if y == self.end.y {
            self.end
        } else {
            Vec2::new(self.x_on_line_at_y_unchecked(y), y)
        }
    }

    /// Clips the segment to the x range of `range` (either direction).
    ///
    /// Returns `None` when the segment's x projection is disjoint from the
    /// range. Otherwise the endpoints are recomputed on the segment's line at
    /// the range bounds and ordered so the result runs in the segment's own
    /// direction. A vertical segment is returned unchanged once its `x` lies
    /// within the range. A single-point range yields a point segment.
    pub fn cut_by_x(&self, range: Interval<S>) -> Option<Self> {
        let (left, right) = range.range();
        if self.start.x == self.end.x {
            return range.contains(self.start.x).then_some(*self);
        }
        let (seg_left, seg_right, reverse) = self.x_interval().range_with_direction();
        if seg_right < left || right < seg_left {
            return None;
        }
        let lo = self.point_at_x(seg_left.max(left));
        let hi = self.point_at_x(seg_right.min(right));
        Some(if reverse { Self::new(hi, lo) } else { Self::new(lo, hi) })
    }

    /// Clips the segment to the y range of `range`; see [`cut_by_x`](Self::cut_by_x).
    pub fn cut_by_y(&self, range: Interval<S>) -> Option<Self> {
        let (top, bottom) = range.range();
        if self.start.y == self.end.y {
            return range.contains(self.start.y).then_some(*self);
        }
        let (seg_top, seg_bottom, reverse) = self.y_interval().range_with_direction();
        if seg_bottom < top || bottom < seg_top {
            return None;
        }
        let lo = self.point_at_y(seg_top.max(top));
        let hi = self.point_at_y(seg_bottom.min(bottom));
        Some(if reverse { Self::new(hi, lo) } else { Self::new(lo, hi) })
    }

    /// Clips the segment to `rect` on both axes.
    pub fn cut_by_rect(&self, rect: &Rect<S>) -> Option<Self> {
        self.cut_by_x(rect.x_interval())?.cut_by_y(rect.y_interval())
    }

    /// First point of `rect` met when walking from `start`, or `None`.
    ///
    /// Clips to the rectangle's x range, finds where the clipped y extent
    /// enters the rectangle's y range, then places that y back on the line.
    pub fn collide_position(&self, rect: &Rect<S>) -> Option<Vec2<S>> {
        let clipped = self.cut_by_x(rect.x_interval())?;
        let y = clipped.y_interval().collide_position(&rect.y_interval())?;
        if clipped.start.y == clipped.end.y {
            return Some(clipped.start);
        }
        Some(clipped.point_at_y(y))
    }

    /// Roots of `|start + t * delta - center|^2 = r^2`, ascending, or `None`
    /// when the line misses the circle or the segment is a point.
    fn circle_roots(&self, circle: &Circle<S>) -> Option<(S, S, S)> {
        let d = self.delta();
        let f = self.start - circle.center;
        let r = circle.radius();
        let a = d.dot(d);
        if a == S::zero() {
            return None;
        }
        let b = S::two() * f.dot(d);
        let c = f.dot(f) - r * r;
        let disc = b * b - S::two() * S::two() * a * c;
        if disc < S::zero() {
            return None;
        }
        let root = disc.sqrt();
        let denom = S::two() * a;
        Some(((-b - root) / denom, (-b + root) / denom, disc))
    }

    /// Inclusive test against the circle's outline only: the segment
    /// touches or crosses the circumference. A segment lying strictly inside
    /// the disk does not count.
    pub fn collide_o(&self, circle: &Circle<S>) -> bool {
        if self.start == self.end {
            return circle.center.distance_squared(self.start)
                == circle.radius() * circle.radius();
        }
        let unit = Interval::new(S::zero(), S::one());
        self.circle_roots(circle)
            .is_some_and(|(t1, t2, _)| unit.contains(t1) || unit.contains(t2))
    }

    /// Exclusive outline test: the segment properly crosses the
    /// circumference at an interior parameter; tangency does not count.
    pub fn collide_oi(&self, circle: &Circle<S>) -> bool {
        let unit = Interval::new(S::zero(), S::one());
        self.circle_roots(circle).is_some_and(|(t1, t2, disc)| {
            disc > S::zero() && (unit.contains_i(t1) || unit.contains_i(t2))
        })
    }
}

impl<S: Scalar> Collide<Rect<S>> for Segment<S> {
    fn collide(&self, rect: &Rect<S>) -> bool {
        self.cut_by_x(rect.x_interval())
            .is_some_and(|c| rect.y_interval().collide_range(c.start.y, c.end.y))
    }

    fn collide_i(&self, rect: &Rect<S>) -> bool {
        if !rect.x_interval().collide_range_i(self.start.x, self.end.x) {
            return false;
        }
        self.cut_by_x(rect.x_interval())
            .is_some_and(|c| rect.y_interval().collide_range_i(c.start.y, c.end.y))
    }
}

impl<S: Scalar> Collide<Circle<S>> for Segment<S> {
    /// Any point of the segment lies in the closed disk.
    fn collide(&self, circle: &Circle<S>) -> bool {
        if circle.collide(&self.start) || circle.collide(&self.end) {
            return true;
        }
        self.circle_roots(circle).is_some_and(|(t1, t2, _)| {
            Interval::new(t1, t2).collide_range(S::zero(), S::one())
        })
    }

    /// Any point of the segment lies in the open disk.
    fn collide_i(&self, circle: &Circle<S>) -> bool {
        if circle.collide_i(&self.start) || circle.collide_i(&self.end) {
            return true;
        }
        self.circle_roots(circle).is_some_and(|(t1, t2, disc)| {
            disc > S::zero() && Interval::new(t1, t2).collide_range_i(S::zero(), S::one())
        })
    }
}

mirror_collide!(Rect => Segment);
