use std::fmt;

use crate::{approx::ApproxEq, EPSILON};

mod ops;

/// A 4-component homogeneous coordinate: a point in space or a direction
/// vector.
///
/// The `w` component carries the classification: `w == 1.0` designates a
/// *point*, `w == 0.0` designates a *vector* (both within [`EPSILON`]). The
/// arithmetic on points and vectors keeps `w` consistent: subtracting two
/// points yields a vector, adding a vector to a point yields a point, and so
/// on. Combinations without a geometric meaning (adding two points) are
/// rejected by the [`Add`](std::ops::Add) and [`Sub`](std::ops::Sub) impls.
///
/// # Construction
///
/// - [`Tuple::point`] and [`Tuple::vector`] create classified tuples from 3
///   coordinates, as do the freestanding [`point`] and [`vector`] functions.
/// - [`Tuple::new`] creates a tuple from all 4 components.
///
/// # Examples
///
/// ```
/// # use glint_linalg::*;
/// let p = point(4.3, -4.2, 3.1);
/// assert!(p.is_point());
/// assert_eq!(p.w, 1.0);
///
/// let v = vector(4.3, -4.2, 3.1);
/// assert!(v.is_vector());
/// assert_eq!(v.w, 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Tuple {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

unsafe impl bytemuck::Zeroable for Tuple {}
unsafe impl bytemuck::Pod for Tuple {}

impl Tuple {
    /// Creates a tuple from its raw components, without classifying it.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point (a tuple with `w = 1.0`).
    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a vector (a tuple with `w = 0.0`).
    #[inline]
    pub const fn vector(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Returns whether this tuple is a point (`w` is approximately 1).
    pub fn is_point(&self) -> bool {
        self.w.abs_diff_eq(&1.0, EPSILON)
    }

    /// Returns whether this tuple is a vector (`w` is approximately 0).
    pub fn is_vector(&self) -> bool {
        self.w.abs_diff_eq(&0.0, EPSILON)
    }

    /// Returns the Euclidean length of this tuple, over all 4 components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glint_linalg::*;
    /// assert_approx_eq!(vector(1.0, 2.0, 3.0).magnitude(), 14.0f32.sqrt());
    /// assert_approx_eq!(vector(0.0, 1.0, 0.0).magnitude(), 1.0);
    /// ```
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Divides this tuple by its magnitude, resulting in a unit-length tuple.
    ///
    /// A zero-magnitude tuple has no defined direction; normalizing it yields
    /// non-finite components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glint_linalg::*;
    /// assert_eq!(vector(4.0, 0.0, 0.0).normalize(), vector(1.0, 0.0, 0.0));
    /// assert_approx_eq!(vector(1.0, 2.0, 3.0).normalize().magnitude(), 1.0);
    /// ```
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Computes the dot product of `self` and `other`, over all 4 components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glint_linalg::*;
    /// let a = vector(1.0, 2.0, 3.0);
    /// let b = vector(2.0, 3.0, 4.0);
    /// assert_approx_eq!(a.dot(b), 20.0);
    /// ```
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Computes the 3-D cross product of `self` and `other`.
    ///
    /// The result is a vector perpendicular to both inputs; swapping the
    /// arguments inverts its direction. The cross product is only defined for
    /// vectors, so the result always has `w = 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glint_linalg::*;
    /// let a = vector(1.0, 2.0, 3.0);
    /// let b = vector(2.0, 3.0, 4.0);
    /// assert_eq!(a.cross(b), vector(-1.0, 2.0, -1.0));
    /// assert_eq!(b.cross(a), vector(1.0, -2.0, 1.0));
    /// ```
    pub fn cross(self, other: Self) -> Self {
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

/// Tuples render as `Point {…}`, `Vec {…}` or, when `w` classifies as
/// neither, `Error {…}`.
impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_vector() {
            "Vec"
        } else if self.is_point() {
            "Point"
        } else {
            "Error"
        };
        write!(f, "{} {{{}, {}, {}, {}}}", kind, self.x, self.y, self.z, self.w)
    }
}

/// Constructs a point (a [`Tuple`] with `w = 1.0`).
#[inline]
pub const fn point(x: f32, y: f32, z: f32) -> Tuple {
    Tuple::point(x, y, z)
}

/// Constructs a vector (a [`Tuple`] with `w = 0.0`).
#[inline]
pub const fn vector(x: f32, y: f32, z: f32) -> Tuple {
    Tuple::vector(x, y, z)
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne};

    use super::*;

    #[test]
    fn classification() {
        let a = Tuple::new(4.3, -4.2, 3.1, 1.0);
        assert!(a.is_point());
        assert!(!a.is_vector());

        let b = Tuple::new(4.3, -4.2, 3.1, 0.0);
        assert!(b.is_vector());
        assert!(!b.is_point());

        assert!(point(4.3, -4.2, 3.1).is_point());
        assert!(vector(4.3, -4.2, 3.1).is_vector());
    }

    #[test]
    fn equality() {
        let a = Tuple::new(4.3, -4.2, 3.1, 1.0);
        let mut b = Tuple::new(4.3, -4.2, 3.1, 1.0);
        assert_eq!(a, b);

        b.x = 2.3;
        assert_ne!(a, b);

        // Within the fixed tolerance, tuples compare equal.
        assert_eq!(a, Tuple::new(4.3 + 5e-6, -4.2, 3.1, 1.0));
    }

    #[test]
    fn add() {
        let p = point(3.0, -2.0, 5.0);
        let v = vector(-2.0, 3.0, 1.0);
        assert_eq!(p + v, point(1.0, 1.0, 6.0));
        assert_eq!(v + v, vector(-4.0, 6.0, 2.0));
    }

    #[test]
    #[should_panic(expected = "cannot add two points")]
    fn add_two_points() {
        let _ = point(3.0, -2.0, 5.0) + point(1.0, 1.0, 1.0);
    }

    #[test]
    fn sub() {
        let p1 = point(3.0, 2.0, 1.0);
        let p2 = point(5.0, 6.0, 7.0);
        assert_eq!(p1 - p2, vector(-2.0, -4.0, -6.0));

        let v = vector(5.0, 6.0, 7.0);
        assert_eq!(p1 - v, point(-2.0, -4.0, -6.0));

        let zero = vector(0.0, 0.0, 0.0);
        assert_eq!(zero - vector(1.0, -2.0, 3.0), vector(-1.0, 2.0, -3.0));
    }

    #[test]
    #[should_panic(expected = "cannot subtract a point from a vector")]
    fn sub_point_from_vector() {
        let _ = vector(3.0, 2.0, 1.0) - point(5.0, 6.0, 7.0);
    }

    #[test]
    fn neg() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-a, Tuple::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn scale() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(a * 3.5, Tuple::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(3.5 * a, Tuple::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(a * 0.5, Tuple::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(a / 2.0, Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn magnitude() {
        assert_approx_eq!(vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_approx_eq!(vector(0.0, 1.0, 0.0).magnitude(), 1.0);
        assert_approx_eq!(vector(0.0, 0.0, 1.0).magnitude(), 1.0);
        assert_approx_eq!(vector(1.0, 2.0, 3.0).magnitude(), 14.0f32.sqrt());
        assert_approx_eq!(vector(-1.0, -2.0, -3.0).magnitude(), 14.0f32.sqrt());
    }

    #[test]
    fn normalize() {
        assert_eq!(vector(4.0, 0.0, 0.0).normalize(), vector(1.0, 0.0, 0.0));

        let n = vector(1.0, 2.0, 3.0).normalize();
        assert_eq!(n, vector(0.26726, 0.53452, 0.80178));
        assert_approx_eq!(n.magnitude(), 1.0);
    }

    #[test]
    fn normalize_zero_vector() {
        let n = vector(0.0, 0.0, 0.0).normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn dot() {
        assert_approx_eq!(vector(1.0, 2.0, 3.0).dot(vector(2.0, 3.0, 4.0)), 20.0);
    }

    #[test]
    fn cross() {
        let a = vector(1.0, 2.0, 3.0);
        let b = vector(2.0, 3.0, 4.0);
        assert_eq!(a.cross(b), vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(a), vector(1.0, -2.0, 1.0));
        assert_eq!(a.cross(b), -b.cross(a));
        assert!(a.cross(b).is_vector());
    }

    #[test]
    fn approx() {
        let a = vector(1.0, 2.0, 3.0);
        assert_approx_eq!(a, vector(1.0, 2.0, 3.0 + 5e-6));
        assert_approx_ne!(a, vector(1.0, 2.0, 3.01));
        assert_approx_eq!(a, vector(1.0, 2.0, 3.01)).abs(0.1);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", point(4.3, -4.2, 3.1)), "Point {4.3, -4.2, 3.1, 1}");
        assert_eq!(format!("{}", vector(1.0, 2.0, 3.0)), "Vec {1, 2, 3, 0}");
        assert_eq!(
            format!("{}", Tuple::new(1.0, 2.0, 3.0, 0.5)),
            "Error {1, 2, 3, 0.5}"
        );
    }
}
