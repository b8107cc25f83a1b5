//! Exponential functions.

use crate::{
    operand::{Components, Shape},
    traits::{Float, Sqrt},
};

use super::{elementwise, elementwise2};

/// `x` raised to the power `y`.
pub fn pow<A, B>(x: A, y: B) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    elementwise2(x, y, Float::powf)
}

pub fn exp<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::exp)
}

/// Natural logarithm.
pub fn log<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::ln)
}

pub fn exp2<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::exp2)
}

pub fn log2<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(x, Float::log2)
}

pub fn sqrt<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Sqrt,
{
    elementwise(x, Sqrt::sqrt)
}

/// `1 / sqrt(x)`, computed as `sqrt(1 / x)`.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(inversesqrt(vec2(4.0, 0.25)), vec2(0.5, 2.0));
/// assert_eq!(inversesqrt(0.0f32), f32::INFINITY);
/// ```
#[doc(alias = "inverseSqrt")]
pub fn inversesqrt<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Sqrt,
{
    elementwise(x, Sqrt::inverse_sqrt)
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3};

    use super::*;

    #[test]
    fn exponentials() {
        assert_eq!(pow(vec3(2.0, 3.0, 4.0), vec3(3.0, 2.0, 0.5)), vec3(8.0, 9.0, 2.0));
        assert_eq!(exp2(vec3(0.0, 1.0, 10.0)), vec3(1.0, 2.0, 1024.0));
        assert_eq!(log2(vec3(1.0, 2.0, 1024.0)), vec3(0.0, 1.0, 10.0));
        assert_approx_eq!(log(exp(vec3(0.5f32, 1.0, 2.0))), vec3(0.5, 1.0, 2.0)).abs(1e-6);
        assert_eq!(sqrt(vec3(1.0, 4.0, 9.0)), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn inversesqrt_is_sqrt_of_reciprocal() {
        let mut rng = fastrand::Rng::with_seed(0x15);
        for _ in 0..100 {
            let x = rng.f64() * 50.0 + 0.01;
            assert_eq!(inversesqrt(x), (1.0 / x).sqrt());
        }
        assert!(inversesqrt(-1.0f64).is_nan());
    }
}
