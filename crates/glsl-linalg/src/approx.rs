//! Approximate equality for scalars, vectors and matrices.
//!
//! Results of the GLSL built-ins are rarely bit-exact, so tests and callers compare them with
//! [`assert_approx_eq!`][crate::assert_approx_eq] instead of `==`. Vectors and matrices compare
//! component by component.
//!
//! Background on the three comparison modes:
//! <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>

use std::{fmt, panic::Location};

/// Values that can be compared for approximate equality.
///
/// Compound values are approximately equal when every component is.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Scalar type of the tolerances, [`f32`] or [`f64`].
    type Tolerance: Tolerance;

    /// Returns whether `|self - other| <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns whether `|self - other| <= max(|self|, |other|) * rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns whether at most `ulps_tolerance` representable values lie between `self` and
    /// `other`.
    ///
    /// `NaN` never compares equal. `-0.0` equals `+0.0`; any other pair with differing signs is
    /// unequal.
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Tolerance scalars and the defaults used by the assertion macros.
pub trait Tolerance: Copy {
    /// Absolute tolerance used when no comparison is configured.
    const DEFAULT_ABS: Self;
    /// Relative tolerance used when no comparison is configured.
    const DEFAULT_REL: Self;
}

macro_rules! float_approx {
    ($($t:ty),+) => {
        $(
            impl Tolerance for $t {
                const DEFAULT_ABS: Self = <$t>::EPSILON;
                const DEFAULT_REL: Self = <$t>::EPSILON;
            }

            impl ApproxEq for $t {
                type Tolerance = $t;

                fn abs_diff_eq(&self, other: &Self, abs_tolerance: $t) -> bool {
                    // Infinities only equal themselves.
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }
                    (self - other).abs() <= abs_tolerance
                }

                fn rel_diff_eq(&self, other: &Self, rel_tolerance: $t) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }
                    let largest = self.abs().max(other.abs());
                    (self - other).abs() <= largest * rel_tolerance
                }

                fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
                    if self.is_nan() || other.is_nan() {
                        return false;
                    }
                    if self.is_sign_negative() != other.is_sign_negative() {
                        return self == other;
                    }
                    let distance = self.to_bits().abs_diff(other.to_bits());
                    distance <= ulps_tolerance.into()
                }
            }
        )+
    };
}

float_approx!(f32, f64);

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: Self::Tolerance) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps_tolerance: u32) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

/// The comparisons an [`Asserter`] performs. The values are equal if any of them succeeds.
#[derive(Clone, Copy)]
struct Checks<Tol> {
    abs: Option<Tol>,
    rel: Option<Tol>,
    ulps: Option<u32>,
}

impl<Tol: Tolerance> Checks<Tol> {
    fn is_empty(&self) -> bool {
        self.abs.is_none() && self.rel.is_none() && self.ulps.is_none()
    }

    fn passes<T: ApproxEq<Tolerance = Tol> + ?Sized>(&self, left: &T, right: &T) -> bool {
        if self.is_empty() {
            return left.abs_diff_eq(right, Tol::DEFAULT_ABS)
                || left.rel_diff_eq(right, Tol::DEFAULT_REL);
        }
        self.abs.is_some_and(|tol| left.abs_diff_eq(right, tol))
            || self.rel.is_some_and(|tol| left.rel_diff_eq(right, tol))
            || self.ulps.is_some_and(|tol| left.ulps_diff_eq(right, tol))
    }
}

/// Pending assertion returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion runs when the guard is dropped. Before that, [`Asserter::abs`],
/// [`Asserter::rel`] and [`Asserter::ulps`] select which comparisons to run; the values are
/// considered equal if any selected comparison says so. With no selection, an absolute and a
/// relative comparison with [`Tolerance::DEFAULT_ABS`] and [`Tolerance::DEFAULT_REL`] are used.
#[must_use = "the assertion runs when the `Asserter` is dropped"]
pub struct Asserter<'a, T: ApproxEq + fmt::Debug> {
    left: &'a T,
    right: &'a T,
    expect_equal: bool,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    checks: Checks<T::Tolerance>,
}

impl<'a, T: ApproxEq + fmt::Debug> Asserter<'a, T> {
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expect_equal: bool,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_equal,
            location: Location::caller(),
            msg,
            checks: Checks {
                abs: None,
                rel: None,
                ulps: None,
            },
        }
    }

    /// Compares the absolute difference against `tolerance`.
    ///
    /// Works best for values near zero, where relative comparisons break down.
    pub fn abs(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.checks.abs = Some(tolerance);
        self
    }

    /// Compares the difference relative to the larger magnitude against `tolerance`.
    ///
    /// Any non-zero value needs a tolerance of at least 1.0 to compare equal to 0.0.
    pub fn rel(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.checks.rel = Some(tolerance);
        self
    }

    /// Allows at most `tolerance` representable values between the operands.
    pub fn ulps(&mut self, tolerance: u32) -> &mut Self {
        self.checks.ulps = Some(tolerance);
        self
    }
}

impl<'a, T: ApproxEq + fmt::Debug> Drop for Asserter<'a, T> {
    fn drop(&mut self) {
        // Don't turn an unrelated panic into an abort.
        if std::thread::panicking() {
            return;
        }
        if self.checks.passes(self.left, self.right) != self.expect_equal {
            let op = if self.expect_equal { "==" } else { "!=" };
            failed(op, self.left, self.right, self.location, self.msg);
        }
    }
}

// `#[track_caller]` is ignored on `drop`, so the location is captured in `Asserter::new` and
// printed here.
fn failed(
    op: &str,
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    match msg {
        Some(msg) => panic!(
            "assertion `left {op} right` failed at {location}: {msg}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

/// Asserts that two values are approximately equal.
///
/// Works like [`assert_eq!`] but compares through [`ApproxEq`]. The returned [`Asserter`] selects
/// the comparison and tolerance.
///
/// # Examples
///
/// ```
/// # use glsl_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
///
/// assert_approx_eq!(normalize(vec2(3.0, 4.0)), vec2(0.6, 0.8)).abs(1e-12);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, true, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            true,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two values are *not* approximately equal.
///
/// The counterpart of [`assert_approx_eq!`].
///
/// ```
/// # use glsl_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(1.0, 1.0 + 2.0 * f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, false, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            false,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Mat2};

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "expected unit length")]
    fn message() {
        assert_approx_eq!(1.0, 2.0, "expected unit length");
    }

    #[test]
    fn modes_are_ored() {
        assert_approx_eq!(1.0, 1.5).abs(0.1).rel(0.5);
        assert_approx_ne!(1.0, 1.5).abs(0.1).ulps(8);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(0).abs(f32::EPSILON);
    }

    #[test]
    fn signs_and_zero() {
        assert_approx_eq!(0.0, -0.0).ulps(0);
        assert_approx_ne!(1e-30, -1e-30).ulps(1000);
        assert_approx_eq!(1e-30, -1e-30).abs(1e-29);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
    }

    #[test]
    fn non_finite() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(1.0);
        assert_approx_ne!(f64::NAN, 0.0).ulps(u32::MAX);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::MAX).rel(1e300);
        assert_approx_eq!(f32::MAX, f32::INFINITY).ulps(1);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY).abs(f32::INFINITY);
    }

    #[test]
    fn componentwise() {
        assert_approx_eq!(vec3(0.1 + 0.2, 1.0, -2.0), vec3(0.3, 1.0, -2.0));
        assert_approx_ne!(vec3(0.0, 1.0, 2.0), vec3(0.0, 1.0, 2.1)).abs(0.05);
        assert_approx_eq!([1.0f32, 2.0], [1.0, 2.0 + f32::EPSILON]).ulps(1);

        let m = Mat2::<f64>::from_rows([[1.0, 0.0], [0.0, 1.0]]);
        assert_approx_eq!(m * 3.0 / 3.0, Mat2::IDENTITY);
    }
}
