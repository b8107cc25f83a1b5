//! Capability traits for vector and matrix elements.

// FIXME: renaming to `ConstZero`/`ConstOne` and introducing non-const `Zero`/`One` traits might
// be useful

use std::ops;

/// Scalar types that can be stored in a [`Vector`][crate::Vector] and take part in its operators.
///
/// Every primitive number type and [`bool`] implement this trait. Implementing it for a custom
/// type makes that type usable as a broadcast scalar operand (`v * s`).
pub trait Element: Copy {
    /// Applies `op` to all lanes at once, or returns [`None`] if no accelerated kernel applies.
    ///
    /// Accelerated and scalar paths must produce identical results.
    #[doc(hidden)]
    #[inline]
    fn simd_lanes<const N: usize>(
        op: LaneOp,
        lhs: &[Self; N],
        rhs: &[Self; N],
    ) -> Option<[Self; N]> {
        let _ = (op, lhs, rhs);
        None
    }
}

/// Lane-wise operation requested through [`Element::simd_lanes`].
#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self` (y) and `other` (x).
    fn atan2(self, other: Self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;

    /// Computes `sqrt(1 / self)`.
    fn inverse_sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Unsigned integers are numbers too; negation lives in [`Signed`].
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Numbers with a sign.
pub trait Signed: Number + ops::Neg<Output = Self> {
    fn abs(self) -> Self;

    /// Returns `1` for positive values, `-1` for negative values and `self` otherwise (zero, NaN).
    fn sign(self) -> Self;
}

/// Division of several values by one shared divisor.
///
/// Floating-point types compute the reciprocal of the divisor once and multiply by it, so the
/// result is exactly `x * (1 / divisor)`. That can differ from `x / divisor` in the last bit:
///
/// ```
/// # use glsl_linalg::*;
/// let v = vec2(5.0f32, 7.0) / 3.0;
/// assert_eq!(v, vec2(5.0 * (1.0 / 3.0), 7.0 * (1.0 / 3.0)));
/// assert_ne!(v.x, 5.0 / 3.0);
/// ```
///
/// Integer types divide every element directly.
pub trait ScalarDiv: Copy + ops::Div<Output = Self> {
    #[inline]
    fn div_each<const N: usize>(elems: [Self; N], divisor: Self) -> [Self; N] {
        elems.map(|elem| elem / divisor)
    }
}

/// Value conversion with the semantics of GLSL constructors (`float(i)`, `bool(f)`, ...).
///
/// Numeric conversions behave like `as`. Converting to [`bool`] tests against zero, converting from
/// [`bool`] yields `0` or `1`.
pub trait Cast<U> {
    fn cast(self) -> U;
}

/// Floating-point element types.
///
/// Methods that share a name with an inherent method of [`f32`]/[`f64`] behave identically, except
/// for [`Float::fract`], which follows GLSL (`x - floor(x)`) instead of [`f32::fract`]
/// (`x - trunc(x)`).
pub trait Float: Signed + Trig + Sqrt + MinMax + ScalarDiv + PartialOrd + Element {
    fn to_radians(self) -> Self;
    fn to_degrees(self) -> Self;
    fn powf(self, exp: Self) -> Self;
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    fn exp2(self) -> Self;
    fn log2(self) -> Self;
    fn floor(self) -> Self;
    fn trunc(self) -> Self;
    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;
    /// Rounds half-way cases to the nearest even integer.
    fn round_even(self) -> Self;
    fn ceil(self) -> Self;
    /// `self - floor(self)`.
    fn fract(self) -> Self;
    /// `self - y * floor(self / y)`; the result has the sign of `y`.
    fn modulo(self, y: Self) -> Self;
    /// Splits `self` into a fractional and a whole part, both with the sign of `self`.
    fn modf(self) -> (Self, Self);
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn mul_add(self, a: Self, b: Self) -> Self;
    /// Splits `self` into a mantissa in `[0.5, 1)` and a power of two.
    ///
    /// Zero, infinities and NaN return themselves with an exponent of 0.
    fn frexp(self) -> (Self, i32);
    /// Computes `self * 2^exp`.
    fn ldexp(self, exp: i32) -> Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0 => f32, f64);

macro_rules! element {
    ($($types:ty),+) => {
        $(
            impl Element for $types {}
        )+
    };
}
element!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool);

impl Element for f32 {
    #[cfg(feature = "simd")]
    #[inline]
    fn simd_lanes<const N: usize>(
        op: LaneOp,
        lhs: &[Self; N],
        rhs: &[Self; N],
    ) -> Option<[Self; N]> {
        crate::simd::f32x4(op, lhs, rhs)
    }
}

impl Element for f64 {
    #[cfg(feature = "simd")]
    #[inline]
    fn simd_lanes<const N: usize>(
        op: LaneOp,
        lhs: &[Self; N],
        rhs: &[Self; N],
    ) -> Option<[Self; N]> {
        crate::simd::f64x4(op, lhs, rhs)
    }
}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! int_signed {
    ($($types:ty),+) => {
        $(
            impl Signed for $types {
                fn abs(self) -> Self {
                    self.abs()
                }

                fn sign(self) -> Self {
                    self.signum()
                }
            }
        )+
    };
}
int_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! int_scalar_div {
    ($($types:ty),+) => {
        $(
            impl ScalarDiv for $types {}
        )+
    };
}
int_scalar_div!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! cast {
    (@to $from:ty => $($to:ty),+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
    ($($from:ty),+) => {
        $(
            cast!(@to $from =>
                u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
            );

            impl Cast<bool> for $from {
                #[inline]
                fn cast(self) -> bool {
                    self != <$from as Zero>::ZERO
                }
            }

            impl Cast<$from> for bool {
                #[inline]
                fn cast(self) -> $from {
                    self as u8 as $from
                }
            }
        )+
    };
}
cast!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl Cast<bool> for bool {
    #[inline]
    fn cast(self) -> bool {
        self
    }
}

macro_rules! float {
    (
        $t:ident, $bits:ty,
        mantissa: $mant:literal, exponent_mask: $emask:literal, bias: $bias:literal
    ) => {
        impl MinMax for $t {
            fn min(self, other: Self) -> Self {
                self.min(other)
            }

            fn max(self, other: Self) -> Self {
                self.max(other)
            }
        }

        impl Signed for $t {
            fn abs(self) -> Self {
                self.abs()
            }

            fn sign(self) -> Self {
                if self > 0.0 {
                    1.0
                } else if self < 0.0 {
                    -1.0
                } else {
                    self
                }
            }
        }

        impl ScalarDiv for $t {
            #[inline]
            fn div_each<const N: usize>(elems: [Self; N], divisor: Self) -> [Self; N] {
                let recip = 1.0 / divisor;
                elems.map(|elem| elem * recip)
            }
        }

        impl Trig for $t {
            fn sin(self) -> Self {
                self.sin()
            }

            fn cos(self) -> Self {
                self.cos()
            }

            fn tan(self) -> Self {
                self.tan()
            }

            fn asin(self) -> Self {
                self.asin()
            }

            fn acos(self) -> Self {
                self.acos()
            }

            fn atan(self) -> Self {
                self.atan()
            }

            fn atan2(self, other: Self) -> Self {
                self.atan2(other)
            }

            fn sinh(self) -> Self {
                self.sinh()
            }

            fn cosh(self) -> Self {
                self.cosh()
            }

            fn tanh(self) -> Self {
                self.tanh()
            }

            fn asinh(self) -> Self {
                self.asinh()
            }

            fn acosh(self) -> Self {
                self.acosh()
            }

            fn atanh(self) -> Self {
                self.atanh()
            }
        }

        impl Sqrt for $t {
            fn sqrt(self) -> Self {
                self.sqrt()
            }

            fn inverse_sqrt(self) -> Self {
                (1.0 / self).sqrt()
            }
        }

        impl Float for $t {
            fn to_radians(self) -> Self {
                self.to_radians()
            }

            fn to_degrees(self) -> Self {
                self.to_degrees()
            }

            fn powf(self, exp: Self) -> Self {
                self.powf(exp)
            }

            fn exp(self) -> Self {
                self.exp()
            }

            fn ln(self) -> Self {
                self.ln()
            }

            fn exp2(self) -> Self {
                self.exp2()
            }

            fn log2(self) -> Self {
                self.log2()
            }

            fn floor(self) -> Self {
                self.floor()
            }

            fn trunc(self) -> Self {
                self.trunc()
            }

            fn round(self) -> Self {
                self.round()
            }

            fn round_even(self) -> Self {
                self.round_ties_even()
            }

            fn ceil(self) -> Self {
                self.ceil()
            }

            fn fract(self) -> Self {
                self - self.floor()
            }

            fn modulo(self, y: Self) -> Self {
                self - y * (self / y).floor()
            }

            fn modf(self) -> (Self, Self) {
                let whole = self.trunc();
                (self - whole, whole)
            }

            fn is_nan(self) -> bool {
                self.is_nan()
            }

            fn is_infinite(self) -> bool {
                self.is_infinite()
            }

            fn mul_add(self, a: Self, b: Self) -> Self {
                self.mul_add(a, b)
            }

            fn frexp(self) -> (Self, i32) {
                if self == 0.0 || !self.is_finite() {
                    return (self, 0);
                }

                let bits = self.to_bits();
                let exponent = ((bits >> $mant) & $emask) as i32;
                if exponent == 0 {
                    // Subnormal: scale into the normal range first.
                    let scale = $t::from_bits((($bias + $mant + 2) as $bits) << $mant);
                    let (mantissa, exp) = Float::frexp(self * scale);
                    return (mantissa, exp - ($mant + 2));
                }

                let cleared = bits & !(($emask as $bits) << $mant);
                let mantissa = $t::from_bits(cleared | ((($bias - 1) as $bits) << $mant));
                (mantissa, exponent - ($bias - 1))
            }

            fn ldexp(self, exp: i32) -> Self {
                let max_step = $t::from_bits(((2 * $bias) as $bits) << $mant);
                let min_step = $t::from_bits((1 as $bits) << $mant);

                let mut x = self;
                let mut exp = exp;
                while exp > $bias {
                    if x == 0.0 || !x.is_finite() {
                        return x;
                    }
                    x *= max_step;
                    exp -= $bias;
                }
                while exp < -($bias - 1) {
                    if x == 0.0 || !x.is_finite() {
                        return x;
                    }
                    x *= min_step;
                    exp += $bias - 1;
                }
                x * $t::from_bits(((exp + $bias) as $bits) << $mant)
            }
        }
    };
}
float!(f32, u32, mantissa: 23, exponent_mask: 0xff, bias: 127);
float!(f64, u64, mantissa: 52, exponent_mask: 0x7ff, bias: 1023);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast() {
        assert_eq!(Cast::<f32>::cast(3i32), 3.0);
        assert_eq!(Cast::<i32>::cast(-2.7f32), -2);
        assert_eq!(Cast::<f32>::cast(true), 1.0);
        assert_eq!(Cast::<u32>::cast(false), 0);
        assert!(Cast::<bool>::cast(0.5f64));
        assert!(!Cast::<bool>::cast(0u8));
    }

    #[test]
    fn sign() {
        assert_eq!(Signed::sign(-3.5f32), -1.0);
        assert_eq!(Signed::sign(2.0f64), 1.0);
        assert_eq!(Signed::sign(0.0f32), 0.0);
        assert!(Signed::sign(f32::NAN).is_nan());
        assert_eq!(Signed::sign(-7i32), -1);
    }

    #[test]
    fn rounding() {
        assert_eq!(Float::round_even(2.5f32), 2.0);
        assert_eq!(Float::round_even(3.5f32), 4.0);
        assert_eq!(Float::round_even(-2.5f64), -2.0);
        assert_eq!(Float::round_even(2.6f64), 3.0);
        assert_eq!(Float::round_even(-0.5f32), -0.0);
        assert_eq!(Float::round_even(0.49999997f32), 0.0);
        assert_eq!(Float::round_even(4503599627370497.0f64), 4503599627370497.0);
        assert_eq!(Float::fract(-1.25f32), 0.75);
        assert_eq!(Float::modulo(-1.0f32, 3.0), 2.0);
        assert_eq!(Float::modf(-1.25f64), (-0.25, -1.0));
    }

    #[test]
    fn frexp_ldexp() {
        assert_eq!(Float::frexp(8.0f32), (0.5, 4));
        assert_eq!(Float::frexp(-3.0f64), (-0.75, 2));
        assert_eq!(Float::frexp(0.0f32), (0.0, 0));
        assert_eq!(Float::frexp(f32::INFINITY), (f32::INFINITY, 0));

        let tiny = f32::from_bits(1); // smallest subnormal
        let (mantissa, exp) = Float::frexp(tiny);
        assert_eq!(mantissa, 0.5);
        assert_eq!(exp, -148);
        assert_eq!(Float::ldexp(mantissa, exp), tiny);

        assert_eq!(Float::ldexp(0.75f64, 2), 3.0);
        assert_eq!(Float::ldexp(1.0f32, 200), f32::INFINITY);
        assert_eq!(Float::ldexp(1.0f32, -200), 0.0);
        assert_eq!(Float::ldexp(1.0f64, -1074), f64::from_bits(1));
    }

    #[test]
    fn scalar_div() {
        assert_eq!(i32::div_each([7, -7], 2), [3, -3]);
        assert_eq!(f32::div_each([5.0, 7.0], 3.0), [5.0 * (1.0 / 3.0), 7.0 * (1.0 / 3.0)]);
    }
}
