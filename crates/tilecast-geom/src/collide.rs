// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shape-pair dispatch traits.
//!
//! Each shape pair has exactly one canonical implementation, living next to
//! the type that owns the algorithm:
//!
//! | pair               | canonical owner |
//! |--------------------|-----------------|
//! | interval × interval, interval × scalar | [`Interval`](crate::Interval) |
//! | rect × point, rect × rect, rect × circle | [`Rect`](crate::Rect) |
//! | segment × rect, segment × circle | [`Segment`](crate::Segment) |
//! | circle × point, circle × circle | [`Circle`](crate::Circle) |
//!
//! Mirrored pairs (`circle × rect`, `rect × segment`, `point × rect`, ...)
//! forward to the canonical side, so `a.collide(&b) == b.collide(&a)` holds
//! by construction.

/// Boolean overlap query between `Self` and `Rhs`.
///
/// - `collide` is inclusive: boundary contact counts as a collision.
/// - `collide_i` is exclusive: the interiors must overlap.
///
/// `collide_i(a, b)` implies `collide(a, b)` for every implementation.
pub trait Collide<Rhs: ?Sized> {
    /// Inclusive test; touching counts.
    fn collide(&self, other: &Rhs) -> bool;
    /// Exclusive test; touching does not count.
    fn collide_i(&self, other: &Rhs) -> bool;
}

/// Gap between `Self` and `Rhs`; zero whenever they overlap or touch.
pub trait Distance<Rhs: ?Sized> {
    /// Output scalar.
    type Output;
    /// Euclidean gap.
    fn distance(&self, other: &Rhs) -> Self::Output;
    /// Squared Euclidean gap.
    fn distance_squared(&self, other: &Rhs) -> Self::Output;
}

/// `mirror_collide!(A => B)` implements `Collide<B> for A` by forwarding to `B: Collide<A>`.
macro_rules! mirror_collide {
    ($this:ident => $canonical:ident) => {
        impl<S: $crate::scalar::Scalar> $crate::collide::Collide<$canonical<S>> for $this<S> {
            fn collide(&self, other: &$canonical<S>) -> bool {
                $crate::collide::Collide::collide(other, self)
            }
            fn collide_i(&self, other: &$canonical<S>) -> bool {
                $crate::collide::Collide::collide_i(other, self)
            }
        }
    };
}

/// `mirror_distance!(A => B)` implements `Distance<B> for A` by forwarding to `B: Distance<A>`.
macro_rules! mirror_distance {
    ($this:ident => $canonical:ident) => {
        impl<S: $crate::scalar::Scalar> $crate::collide::Distance<$canonical<S>> for $this<S> {
            type Output = S;
            fn distance(&self, other: &$canonical<S>) -> S {
                $crate::collide::Distance::distance(other, self)
            }
            fn distance_squared(&self, other: &$canonical<S>) -> S {
                $crate::collide::Distance::distance_squared(other, self)
            }
        }
    };
}

pub(crate) use mirror_collide;
pub(crate) use mirror_distance;
