//! Angle and trigonometry functions. Angles are in radians.

use crate::{
    operand::{Components, Shape},
    traits::{Float, Trig},
};

use super::{elementwise, elementwise2};

/// Converts degrees to radians.
pub fn radians<A>(degrees: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(degrees, Float::to_radians)
}

/// Converts radians to degrees.
pub fn degrees<A>(radians: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
{
    elementwise(radians, Float::to_degrees)
}

macro_rules! unary {
    ($($(#[$attr:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$attr])*
            pub fn $name<A>(x: A) -> A::Map<A::Elem>
            where
                A: Components,
                A::Elem: Trig,
            {
                elementwise(x, Trig::$name)
            }
        )+
    };
}

unary!(
    sin,
    cos,
    tan,
    asin,
    acos,
    /// Arc tangent of `x`, in `[-pi/2, pi/2]`. See [`atan2`] for the two-argument form.
    atan,
    sinh,
    cosh,
    tanh,
    asinh,
    acosh,
    atanh,
);

/// GLSL two-argument `atan(y, x)`: the angle of the point `(x, y)`, in `[-pi, pi]`.
///
/// ```
/// # use glsl_linalg::*;
/// use std::f64::consts::PI;
///
/// let angles = atan2(dvec2(1.0, 0.0), dvec2(0.0, -1.0));
/// assert_approx_eq!(angles, dvec2(PI / 2.0, PI));
/// ```
#[doc(alias = "atan")]
pub fn atan2<A, B>(y: A, x: B) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Trig,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    elementwise2(y, x, Trig::atan2)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use crate::{assert_approx_eq, vec2, vec3, vec4};

    use super::*;

    #[test]
    fn angles() {
        assert_approx_eq!(radians(vec2(180.0f32, 90.0)), vec2(PI, FRAC_PI_2)).abs(1e-6);
        assert_approx_eq!(degrees(FRAC_PI_4), 45.0).abs(1e-5);
    }

    #[test]
    fn circular() {
        let v = vec4(0.0, FRAC_PI_2, PI, -FRAC_PI_2);
        assert_approx_eq!(sin(v), vec4(0.0, 1.0, 0.0, -1.0)).abs(1e-6);
        assert_approx_eq!(cos(v.xz()), vec2(1.0, -1.0)).abs(1e-6);
        assert_approx_eq!(tan(FRAC_PI_4), 1.0);
        assert_approx_eq!(asin(sin(0.5f32)), 0.5);
        assert_approx_eq!(acos(vec2(1.0f32, -1.0)), vec2(0.0, PI));
        assert_approx_eq!(atan(1.0f32), FRAC_PI_4);
        assert_approx_eq!(atan2(-1.0f32, -1.0), -3.0 * FRAC_PI_4).abs(1e-6);
    }

    #[test]
    fn hyperbolic() {
        let v = vec3(-1.0f64, 0.0, 0.5);
        assert_approx_eq!(asinh(sinh(v)), v).abs(1e-12);
        assert_approx_eq!(atanh(tanh(v)), v).abs(1e-12);
        assert_approx_eq!(acosh(cosh(vec2(1.0f64, 2.0))), vec2(0.0, 2.0)).abs(1e-7);
        assert_eq!(cosh(0.0f64), 1.0);
    }
}
