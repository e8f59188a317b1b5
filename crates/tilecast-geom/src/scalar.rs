// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Numeric scalar abstraction for the geometry core.
//!
//! Every value type in this crate is generic over a [`Scalar`], so the same
//! collision code serves `f32` game worlds and `f64` tooling without a
//! duplicated type family. Implementations exist for `f32` and `f64`.
//!
//! Contract:
//! - Comparisons use `PartialOrd`; NaN inputs are not guarded and simply make
//!   predicates false.
//! - `sqrt`, `floor` and `ceil` route through `libm` so results do not depend
//!   on which intrinsics a target happens to lower to.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar arithmetic used by intervals, segments, rectangles and circles.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Returns `1 + 1`.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Square root.
    fn sqrt(self) -> Self;

    /// Largest integral value not greater than `self`.
    fn floor(self) -> Self;

    /// Smallest integral value not less than `self`.
    fn ceil(self) -> Self;

    /// Converts from `f32`; intended for constants and test scaffolding.
    fn from_f32(value: f32) -> Self;

    /// Converts a cell index or count into this scalar.
    fn from_i32(value: i32) -> Self;

    /// Widens to `f64` for diagnostics and error payloads.
    fn to_f64(self) -> f64;

    /// Truncates toward zero, saturating at the `i32` range (NaN maps to 0).
    fn to_i32(self) -> i32;

    /// Absolute value.
    fn abs(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }

    /// The smaller of two values; `self` wins ties.
    fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// The larger of two values; `self` wins ties.
    fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    fn floor(self) -> Self {
        libm::floorf(self)
    }

    fn ceil(self) -> Self {
        libm::ceilf(self)
    }

    fn from_f32(value: f32) -> Self {
        value
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i32(value: i32) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn to_i32(self) -> i32 {
        // `as` saturates and maps NaN to zero.
        self as i32
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn from_f32(value: f32) -> Self {
        f64::from(value)
    }

    fn from_i32(value: i32) -> Self {
        f64::from(value)
    }

    fn to_f64(self) -> f64 {
        self
    }

    #[allow(clippy::cast_possible_truncation)]
    fn to_i32(self) -> i32 {
        self as i32
    }
}
