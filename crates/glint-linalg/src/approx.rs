//! Approximate equality.
//!
//! Every numeric comparison in the renderer goes through this module instead
//! of exact floating-point equality. The default tolerance for both
//! comparison flavors is the project-wide [`EPSILON`][crate::EPSILON].

mod impls;

use std::{fmt, panic::Location};

use crate::EPSILON;

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of
/// their components are.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type representing the tolerance for absolute and relative comparisons.
    ///
    /// This is almost always either [`f32`] or [`f64`], depending on which one
    /// is the underlying primitive type being compared.
    type Tolerance: DefaultTolerances + Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal
    /// to `abs_tolerance`, the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal
    /// to the largest of the two values times `rel_tolerance`, the values are
    /// considered to be equal.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;
}

/// Trait implemented for the `Tolerance` value of [`ApproxEq`] implementations.
///
/// This supplies the default tolerances used by
/// [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for *relative comparisons* via [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = EPSILON;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = 1e-5;
    const DEFAULT_REL_TOLERANCE: Self = 1e-5;
}

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// This type will check the assertion when dropped. Calling [`Asserter::abs`]
/// or [`Asserter::rel`] configures the comparison method and tolerance to use;
/// if both are called, the values are considered equal if *either* comparison
/// considers them equal.
///
/// If neither method is called, a *default comparison* is performed: an
/// absolute comparison with [`DEFAULT_ABS_TOLERANCE`] ORed with a relative
/// comparison with [`DEFAULT_REL_TOLERANCE`].
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(left: &'a T, right: &'a T, kind: AssertionKind) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            abs: None,
            rel: None,
        }
    }

    /// Perform an *absolute comparison* of the values with the given tolerance.
    ///
    /// This type of comparison is typically a good choice when comparing
    /// values that are relatively close to zero and potentially have opposing
    /// signs.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Perform a *relative comparison* of the values with the given tolerance.
    ///
    /// This type of comparison is a good default for numbers that aren't very
    /// close to zero. For numbers close to zero, a very large relative
    /// tolerance might be required.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    fn equal(&mut self) -> bool {
        if let Some(abs) = self.abs.take() {
            if T::abs_diff_eq(self.left, self.right, abs) {
                return true;
            }
        }
        if let Some(rel) = self.rel.take() {
            if T::rel_diff_eq(self.left, self.right, rel) {
                return true;
            }
        }

        false
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` does not propagate into destructors, so the location
    // captured in `new` is printed manually instead.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            let op = match self.kind {
                AssertionKind::Eq => "==",
                AssertionKind::Ne => "!=",
            };
            panic!(
                r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#,
                op = op,
                location = self.location,
                left = self.left,
                right = self.right,
            );
        }
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using
/// [`ApproxEq`]).
///
/// This macro functions identically to [`assert_eq!`], except in that it uses
/// the [`ApproxEq`] trait to perform an approximate comparison, and returns an
/// [`Asserter`] that can be used to configure the type of comparison and the
/// tolerance value to use.
///
/// Also see [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// # Examples
///
/// Default approximate comparison:
///
/// ```
/// # use glint_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// ```
///
/// Perform absolute and relative comparisons with custom tolerance values:
///
/// ```
/// # use glint_linalg::*;
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq)
    };
}

/// Asserts that two expressions are *not* approximately equal to each other
/// (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_ne!`], except in that it uses
/// the [`ApproxEq`] trait to perform an approximate comparison, and returns an
/// [`Asserter`] that can be used to configure the type of comparison and the
/// tolerance value to use.
///
/// Also see [`assert_approx_eq!`][crate::assert_approx_eq].
///
/// # Examples
///
/// ```
/// # use glint_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne)
    };
}
