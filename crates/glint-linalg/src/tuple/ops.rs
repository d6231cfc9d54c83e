//! Implementations of `std::ops`.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{approx::ApproxEq, EPSILON};

use super::Tuple;

/// Componentwise addition.
///
/// # Panics
///
/// Adding two points has no geometric meaning. If the resulting `w` indicates
/// that both operands were points (`w >= 2.0`), this operation panics instead
/// of returning a meaningless tuple.
impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Tuple) -> Tuple {
        let out = Tuple::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        );
        assert!(out.w < 2.0, "cannot add two points");
        out
    }
}

/// Componentwise subtraction.
///
/// # Panics
///
/// Subtracting a point from a vector has no geometric meaning. If the
/// resulting `w` is negative, this operation panics instead of returning a
/// meaningless tuple.
impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Tuple) -> Tuple {
        let out = Tuple::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        );
        assert!(out.w >= 0.0, "cannot subtract a point from a vector");
        out
    }
}

/// Componentwise negation, including `w`.
impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Tuple {
        Tuple::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Tuple-scalar multiplication (scaling).
impl Mul<f32> for Tuple {
    type Output = Tuple;

    fn mul(self, rhs: f32) -> Tuple {
        Tuple::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

/// Scalar-tuple multiplication (scaling).
impl Mul<Tuple> for f32 {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        rhs * self
    }
}

/// Tuple-scalar division (scaling).
///
/// Division by zero is not guarded and yields non-finite components.
impl Div<f32> for Tuple {
    type Output = Tuple;

    fn div(self, rhs: f32) -> Tuple {
        Tuple::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

/// Componentwise *approximate* equality with the fixed [`EPSILON`] tolerance.
///
/// Tuples are never compared with exact floating-point equality; use
/// [`ApproxEq`] directly for a custom tolerance.
impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, EPSILON)
    }
}

impl ApproxEq for Tuple {
    type Tolerance = f32;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.x.abs_diff_eq(&other.x, abs_tolerance)
            && self.y.abs_diff_eq(&other.y, abs_tolerance)
            && self.z.abs_diff_eq(&other.z, abs_tolerance)
            && self.w.abs_diff_eq(&other.w, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.x.rel_diff_eq(&other.x, rel_tolerance)
            && self.y.rel_diff_eq(&other.y, rel_tolerance)
            && self.z.rel_diff_eq(&other.z, rel_tolerance)
            && self.w.rel_diff_eq(&other.w, rel_tolerance)
    }
}
