// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::collide::{mirror_collide, mirror_distance, Collide, Distance};
use crate::error::GeomError;
use crate::scalar::Scalar;
use crate::types::rect::Rect;
use crate::types::segment::Segment;
use crate::types::vec2::Vec2;

/// Circle given by its center and radius.
///
/// Invariant: `radius >= 0`. The radius is private and every write goes
/// through [`Circle::new`] or [`Circle::set_radius`], both of which reject
/// negative values with [`GeomError::NegativeRadius`]. A zero radius is a
/// point: its inclusive containment test is point equality.
///
/// Collisions against rectangles and segments are implemented once, on
/// [`Rect`] and [`Segment`]; the circle-side impls forward there.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Circle<S> {
    /// Center point; may be moved freely.
    pub center: Vec2<S>,
    radius: S,
}

impl<S: Scalar> Circle<S> {
    /// Creates a circle, rejecting a negative radius.
    pub fn new(center: Vec2<S>, radius: S) -> Result<Self, GeomError> {
        check_radius(radius)?;
        Ok(Self { center, radius })
    }

    /// The radius (always `>= 0`).
    pub fn radius(&self) -> S {
        self.radius
    }

    /// Replaces the radius; a negative value is rejected and leaves the
    /// circle unchanged.
    pub fn set_radius(&mut self, radius: S) -> Result<(), GeomError> {
        check_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Moves the center; the radius is untouched.
    pub fn move_to(&mut self, center: Vec2<S>) {
        self.center = center;
    }

    /// Axis-aligned square of side `2 * radius` centered on `center`.
    pub fn enclosing_rect(&self) -> Rect<S> {
        let r = Vec2::new(self.radius, self.radius);
        Rect::from_position_size(self.center - r, r * S::two())
    }
}

fn check_radius<S: Scalar>(radius: S) -> Result<(), GeomError> {
    // NaN fails the comparison and is rejected as well.
    if radius >= S::zero() {
        Ok(())
    } else {
        Err(GeomError::NegativeRadius {
            radius: radius.to_f64(),
        })
    }
}

#[cfg(feature = "serde")]
impl<'de, S> serde::Deserialize<'de> for Circle<S>
where
    S: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<S> {
            center: Vec2<S>,
            radius: S,
        }
        let raw = Raw::<S>::deserialize(deserializer)?;
        Self::new(raw.center, raw.radius).map_err(serde::de::Error::custom)
    }
}

impl<S: Scalar> Collide<Vec2<S>> for Circle<S> {
    fn collide(&self, point: &Vec2<S>) -> bool {
        self.center.distance_squared(*point) <= self.radius * self.radius
    }

    fn collide_i(&self, point: &Vec2<S>) -> bool {
        self.center.distance_squared(*point) < self.radius * self.radius
    }
}

impl<S: Scalar> Collide<Circle<S>> for Circle<S> {
    fn collide(&self, other: &Circle<S>) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }

    fn collide_i(&self, other: &Circle<S>) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) < reach * reach
    }
}

impl<S: Scalar> Distance<Vec2<S>> for Circle<S> {
    type Output = S;

    fn distance(&self, point: &Vec2<S>) -> S {
        (self.center.distance(*point) - self.radius).max(S::zero())
    }

    fn distance_squared(&self, point: &Vec2<S>) -> S {
        let d = Distance::<Vec2<S>>::distance(self, point);
        d * d
    }
}

impl<S: Scalar> Distance<Circle<S>> for Circle<S> {
    type Output = S;

    fn distance(&self, other: &Circle<S>) -> S {
        (self.center.distance(other.center) - self.radius - other.radius).max(S::zero())
    }

    fn distance_squared(&self, other: &Circle<S>) -> S {
        let d = Distance::<Circle<S>>::distance(self, other);
        d * d
    }
}

mirror_collide!(Circle => Rect);
mirror_collide!(Circle => Segment);
mirror_collide!(Vec2 => Circle);
mirror_distance!(Circle => Rect);
mirror_distance!(Vec2 => Circle);
