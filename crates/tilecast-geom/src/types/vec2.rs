// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, Mul, Neg, Sub};

use crate::scalar::Scalar;

/// 2D vector used for both points and directions.
///
/// * Components are world units; `y` grows downward in screen-space worlds,
///   but nothing in the core depends on that convention.
/// * Arithmetic is plain component-wise `S` math.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<S> {
    /// Horizontal component.
    pub x: S,
    /// Vertical component.
    pub y: S,
}

impl<S: Scalar> Vec2<S> {
    /// Creates a vector from components.
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(S::zero(), S::zero())
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [S; 2] {
        [self.x, self.y]
    }

    /// Dot product with another vector.
    pub fn dot(self, other: Self) -> S {
        self.x * other.x + self.y * other.y
    }

    /// Squared magnitude.
    pub fn length_squared(self) -> S {
        self.dot(self)
    }

    /// Magnitude.
    pub fn length(self) -> S {
        self.length_squared().sqrt()
    }

    /// Squared distance to another point.
    pub fn distance_squared(self, other: Self) -> S {
        (other - self).length_squared()
    }

    /// Distance to another point.
    pub fn distance(self, other: Self) -> S {
        (other - self).length()
    }
}

impl<S: Scalar> Add for Vec2<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: Scalar> Sub for Vec2<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S: Scalar> Mul<S> for Vec2<S> {
    type Output = Self;
    fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<S: Scalar> Neg for Vec2<S> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Converts `[x, y]` into a `Vec2`.
///
/// # Examples
/// ```
/// use tilecast_geom::Vec2;
/// let v = Vec2::from([1.0_f32, 2.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0]);
/// ```
impl<S: Scalar> From<[S; 2]> for Vec2<S> {
    fn from(value: [S; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl<S: Scalar> From<(S, S)> for Vec2<S> {
    fn from((x, y): (S, S)) -> Self {
        Self::new(x, y)
    }
}
