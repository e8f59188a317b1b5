// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Boundary adapters between `tilecast-geom` values and `mint` types.
//!
//! The geometry core never sees host-engine types. Callers convert at the
//! edge of their game loop:
//!
//! ```
//! use tilecast_geom::{Segment, Vec2};
//! use tilecast_mint::{FromNative, ToNative};
//!
//! let from_engine = mint::Point2 { x: 3.0_f32, y: 4.0 };
//! let p = Vec2::from_native(from_engine);
//! let seg = Segment::new(Vec2::zero(), p);
//! let [a, b] = seg.to_native();
//! assert_eq!((a.x, b.y), (0.0, 4.0));
//! ```
//!
//! Conversions are explicit and lossless; nothing here is implicit `From`
//! sugar on core types.

use mint::{Point2, Vector2};
use tilecast_geom::{Circle, GeomError, Rect, Scalar, Segment, Vec2};

/// Converts a core value into its `mint` representation.
pub trait ToNative {
    /// The `mint` shape this value maps to.
    type Native;
    /// Performs the conversion.
    fn to_native(&self) -> Self::Native;
}

/// Builds a core value from a `mint` representation.
pub trait FromNative<N>: Sized {
    /// Performs the conversion.
    fn from_native(native: N) -> Self;
}

impl<S: Scalar> ToNative for Vec2<S> {
    type Native = Point2<S>;

    fn to_native(&self) -> Point2<S> {
        Point2 {
            x: self.x,
            y: self.y,
        }
    }
}

impl<S: Scalar> FromNative<Point2<S>> for Vec2<S> {
    fn from_native(native: Point2<S>) -> Self {
        Vec2::new(native.x, native.y)
    }
}

impl<S: Scalar> FromNative<Vector2<S>> for Vec2<S> {
    fn from_native(native: Vector2<S>) -> Self {
        Vec2::new(native.x, native.y)
    }
}

/// `[start, end]`.
impl<S: Scalar> ToNative for Segment<S> {
    type Native = [Point2<S>; 2];

    fn to_native(&self) -> [Point2<S>; 2] {
        [self.start.to_native(), self.end.to_native()]
    }
}

impl<S: Scalar> FromNative<[Point2<S>; 2]> for Segment<S> {
    fn from_native([start, end]: [Point2<S>; 2]) -> Self {
        Segment::new(Vec2::from_native(start), Vec2::from_native(end))
    }
}

/// `(position, size)`; the size keeps its sign.
impl<S: Scalar> ToNative for Rect<S> {
    type Native = (Point2<S>, Vector2<S>);

    fn to_native(&self) -> (Point2<S>, Vector2<S>) {
        (
            self.position.to_native(),
            Vector2 {
                x: self.size.x,
                y: self.size.y,
            },
        )
    }
}

impl<S: Scalar> FromNative<(Point2<S>, Vector2<S>)> for Rect<S> {
    fn from_native((position, size): (Point2<S>, Vector2<S>)) -> Self {
        Rect::from_position_size(Vec2::from_native(position), Vec2::from_native(size))
    }
}

/// `(center, radius)`.
impl<S: Scalar> ToNative for Circle<S> {
    type Native = (Point2<S>, S);

    fn to_native(&self) -> (Point2<S>, S) {
        (self.center.to_native(), self.radius())
    }
}

/// Builds a circle from a `mint` center, rejecting a negative radius.
pub fn circle_from_native<S: Scalar>(center: Point2<S>, radius: S) -> Result<Circle<S>, GeomError> {
    Circle::new(Vec2::from_native(center), radius)
}
