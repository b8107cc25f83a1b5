//! Common functions: sign and rounding, min/max/clamp, interpolation, classification and bit
//! conversions.

use crate::{
    operand::{Components, Shape},
    traits::{Float, MinMax, One, Signed, Zero},
};

use super::{elementwise, elementwise2, elementwise3};

/// Absolute value of each component.
pub fn abs<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Signed,
{
    elementwise(x, Signed::abs)
}

/// `1` for positive, `-1` for negative, `0` for zero components.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(sign(ivec3(-4, 0, 9)), ivec3(-1, 0, 1));
/// assert_eq!(sign(-0.5), -1.0);
/// ```
pub fn sign<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Signed,
{
    elementwise(x, Signed::sign)
}

pub fn floor<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::floor)
}

pub fn trunc<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::trunc)
}

/// Rounds half-way cases away from zero.
pub fn round<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::round)
}

/// Rounds half-way cases to the nearest even integer.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(round_even(vec4(0.5, 1.5, 2.5, -2.5)), vec4(0.0, 2.0, 2.0, -2.0));
/// assert_eq!(round(vec4(0.5, 1.5, 2.5, -2.5)), vec4(1.0, 2.0, 3.0, -3.0));
/// ```
#[doc(alias = "roundEven")]
pub fn round_even<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::round_even)
}

pub fn ceil<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::ceil)
}

/// `x - floor(x)`.
///
/// Unlike [`f32::fract`], the result is never negative:
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(fract(vec2(1.25, -1.25)), vec2(0.25, 0.75));
/// ```
pub fn fract<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::fract)
}

/// GLSL `mod`: `x - y * floor(x / y)`.
///
/// The result takes the sign of `y`, unlike the `%` operator.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(modulo(vec2(5.5, -5.5), vec2(2.0, 2.0)), vec2(1.5, 0.5));
/// assert_eq!(vec2(5.5, -5.5) % 2.0, vec2(1.5, -1.5));
/// ```
#[doc(alias = "mod")]
pub fn modulo<A, B>(x: A, y: B) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    elementwise2(x, y, Float::modulo)
}

/// Splits each component into a fractional and a whole part, both with the sign of the input.
///
/// Returns `(fractional, whole)`.
///
/// ```
/// # use glsl_linalg::*;
/// let (fract, whole) = modf(vec2(2.5, -3.25));
/// assert_eq!(fract, vec2(0.5, -0.25));
/// assert_eq!(whole, vec2(2.0, -3.0));
/// ```
pub fn modf<A>(x: A) -> (A::Map<A::Elem>, A::Map<A::Elem>)
where
    A: Components,
    A::Elem: Float,
{
    (
        A::build(|i| x.component(i).modf().0),
        A::build(|i| x.component(i).modf().1),
    )
}

pub fn min<A, B>(x: A, y: B) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: MinMax,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    elementwise2(x, y, MinMax::min)
}

pub fn max<A, B>(x: A, y: B) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: MinMax,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    elementwise2(x, y, MinMax::max)
}

/// `min(max(x, lo), hi)` for each component.
///
/// ```
/// # use glsl_linalg::*;
/// let v = vec3(-1.0, 0.5, 7.0);
/// assert_eq!(clamp(v, Vec3f::ZERO, Vec3f::splat(1.0)), vec3(0.0, 0.5, 1.0));
/// assert_eq!(clamp(5, 0, 3), 3);
/// ```
pub fn clamp<A, B, C>(x: A, lo: B, hi: C) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: MinMax,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
    C: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    elementwise3(x, lo, hi, |x, lo, hi| x.max(lo).min(hi))
}

/// Linear blend `x * (1 - a) + y * a`.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(mix(vec2(0.0, 10.0), vec2(1.0, 20.0), vec2(0.5, 0.25)), vec2(0.5, 12.5));
/// ```
pub fn mix<A, B, C>(x: A, y: B, a: C) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
    C: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    elementwise3(x, y, a, |x, y, a| x * (<A::Elem as One>::ONE - a) + y * a)
}

/// Selects `y` where `a` is true and `x` elsewhere (GLSL `mix` with a boolean selector).
///
/// ```
/// # use glsl_linalg::*;
/// let picked = mix_select(vec3(1, 2, 3), vec3(7, 8, 9), bvec3(true, false, true));
/// assert_eq!(picked, vec3(7, 2, 9));
/// ```
#[doc(alias = "mix")]
pub fn mix_select<A, B, C>(x: A, y: B, a: C) -> A::Map<A::Elem>
where
    A: Components,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
    C: Components<Elem = bool, Map<()> = Shape<A>>,
{
    elementwise3(x, y, a, |x, y, a| if a { y } else { x })
}

/// `0` where `x < edge`, `1` elsewhere.
pub fn step<A, B>(edge: A, x: B) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    elementwise2(edge, x, |edge, x| {
        if x < edge {
            <A::Elem as Zero>::ZERO
        } else {
            <A::Elem as One>::ONE
        }
    })
}

/// Hermite interpolation between 0 and 1 as `x` goes from `edge0` to `edge1`.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
/// assert_eq!(smoothstep(vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(-1.0, 2.0)), vec2(0.0, 1.0));
/// ```
pub fn smoothstep<A, B, C>(edge0: A, edge1: B, x: C) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
    C: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    elementwise3(edge0, edge1, x, |e0, e1, x| {
        let zero = <A::Elem as Zero>::ZERO;
        let one = <A::Elem as One>::ONE;
        let two = one + one;
        let three = two + one;
        let t = ((x - e0) / (e1 - e0)).clamp(zero, one);
        t * t * (three - two * t)
    })
}

#[doc(alias = "isnan")]
pub fn is_nan<A>(x: A) -> A::Map<bool>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::is_nan)
}

#[doc(alias = "isinf")]
pub fn is_inf<A>(x: A) -> A::Map<bool>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::is_infinite)
}

/// Reinterprets the bits of each component as a signed integer.
///
/// ```
/// # use glsl_linalg::*;
/// let bits = float_bits_to_int(vec2(1.0, -0.0));
/// assert_eq!(bits, ivec2(0x3f80_0000, i32::MIN));
/// assert_eq!(int_bits_to_float(bits), vec2(1.0, -0.0));
/// ```
#[doc(alias = "floatBitsToInt")]
pub fn float_bits_to_int<A>(x: A) -> A::Map<i32>
where
    A: Components<Elem = f32>,
{
    elementwise(x, |f| f.to_bits() as i32)
}

#[doc(alias = "floatBitsToUint")]
pub fn float_bits_to_uint<A>(x: A) -> A::Map<u32>
where
    A: Components<Elem = f32>,
{
    elementwise(x, f32::to_bits)
}

#[doc(alias = "intBitsToFloat")]
pub fn int_bits_to_float<A>(x: A) -> A::Map<f32>
where
    A: Components<Elem = i32>,
{
    elementwise(x, |i| f32::from_bits(i as u32))
}

#[doc(alias = "uintBitsToFloat")]
pub fn uint_bits_to_float<A>(x: A) -> A::Map<f32>
where
    A: Components<Elem = u32>,
{
    elementwise(x, f32::from_bits)
}

/// Fused multiply-add `a * b + c`, with a single rounding.
pub fn fma<A, B, C>(a: A, b: B, c: C) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
    C: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    elementwise3(a, b, c, Float::mul_add)
}

/// Splits each component into a mantissa in `[0.5, 1)` and a power of two.
///
/// Returns `(mantissa, exponent)`.
///
/// ```
/// # use glsl_linalg::*;
/// let (mantissa, exponent) = frexp(vec3(8.0, 0.75, -3.0));
/// assert_eq!(mantissa, vec3(0.5, 0.75, -0.75));
/// assert_eq!(exponent, ivec3(4, 0, 2));
/// assert_eq!(ldexp(mantissa, exponent), vec3(8.0, 0.75, -3.0));
/// ```
pub fn frexp<A>(x: A) -> (A::Map<A::Elem>, A::Map<i32>)
where
    A: Components,
    A::Elem: Float,
{
    (
        A::build(|i| x.component(i).frexp().0),
        A::build(|i| x.component(i).frexp().1),
    )
}

/// Computes `x * 2^exp` for each component.
pub fn ldexp<A, B>(x: A, exp: B) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
    B: Components<Elem = i32, Map<()> = Shape<A>>,
{
    elementwise2(x, exp, Float::ldexp)
}

#[cfg(test)]
mod tests {
    use crate::{aliases::*, assert_approx_eq, vec2, vec3, vec4, Vec3f};

    use super::*;

    #[test]
    fn rounding() {
        let v = vec4(-1.5, -0.25, 0.75, 2.5);
        assert_eq!(floor(v), vec4(-2.0, -1.0, 0.0, 2.0));
        assert_eq!(ceil(v), vec4(-1.0, -0.0, 1.0, 3.0));
        assert_eq!(trunc(v), vec4(-1.0, -0.0, 0.0, 2.0));
        assert_eq!(fract(v), vec4(0.5, 0.75, 0.75, 0.5));
        assert_eq!(fract(-0.25f64), 0.75);
    }

    #[test]
    fn sign_and_abs() {
        assert_eq!(abs(ivec2(-3, 3)), ivec2(3, 3));
        assert_eq!(sign(vec3(-2.0, 0.0, 0.1)), vec3(-1.0, 0.0, 1.0));
        assert_eq!(abs(vec4(1.0, -2.0, 3.0, -4.0).wz()), vec2(4.0, 3.0));
    }

    #[test]
    fn min_max_clamp() {
        let a = vec3(1, 5, 3);
        let b = vec3(4, 2, 3);
        assert_eq!(min(a, b), vec3(1, 2, 3));
        assert_eq!(max(a, &b), vec3(4, 5, 3));
        assert_eq!(clamp(a, ivec3(2, 2, 2), ivec3(4, 4, 4)), ivec3(2, 4, 3));

        // `min(max())`: an inverted range yields `hi`.
        assert_eq!(clamp(3.0, 5.0, 1.0), 1.0);
        assert_eq!(min(f32::NAN, 1.0), 1.0);
    }

    #[test]
    fn interpolation() {
        assert_approx_eq!(mix(0.0, 10.0, 0.3), 3.0);
        assert_eq!(mix(vec2(2.0, 4.0), vec2(4.0, 8.0), vec2(0.5, 0.25)), vec2(3.0, 5.0));
        assert_eq!(smoothstep(vec2(0.0, 0.0), vec2(2.0, 2.0), vec2(1.0, 3.0)), vec2(0.5, 1.0));
        assert_eq!(step(vec3(1.0, 1.0, 1.0), vec3(0.5, 1.0, 2.0)), vec3(0.0, 1.0, 1.0));
        assert_eq!(smoothstep(0.0, 2.0, 1.0), 0.5);
        assert_approx_eq!(smoothstep(0.0, 1.0, 0.25), 0.15625);
        let edge = Vec3f::splat(2.0);
        assert_eq!(step(edge.xy(), vec2(3.0, 1.0)), vec2(1.0, 0.0));
    }

    #[test]
    fn modulo_follows_divisor_sign() {
        assert_eq!(modulo(-1.0, 3.0), 2.0);
        assert_eq!(modulo(1.0, -3.0), -2.0);
        assert_eq!(modulo(vec2(7.5, -7.5), vec2(2.0, 2.0)), vec2(1.5, 0.5));
        let (f, w) = modf(-2.75);
        assert_eq!((f, w), (-0.75, -2.0));
    }

    #[test]
    fn classification() {
        let v = vec4(f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 0.0);
        assert_eq!(is_nan(v), bvec4(true, false, false, false));
        assert_eq!(is_inf(v), bvec4(false, true, true, false));
    }

    #[test]
    fn bit_conversions() {
        assert_eq!(float_bits_to_uint(1.0f32), 0x3f80_0000);
        assert_eq!(uint_bits_to_float(uvec2(0x3f80_0000, 0)), vec2(1.0, 0.0));
        assert_eq!(fma(2.0, 3.0, 1.0), 7.0);
        assert_eq!(ldexp(0.5f32, 3), 4.0);
        assert_eq!(frexp(0.0f32), (0.0, 0));
    }
}
