//! Geometric functions.
//!
//! Scalars are accepted as one-dimensional values. Two of the scalar forms deliberately differ from
//! the absolute-value based definitions: [`length`] returns its argument unchanged and
//! [`normalize`] always returns 1.

use crate::{
    operand::{Components, Shape},
    traits::{Float, Number, One, Signed, Sqrt, Zero},
    Vector,
};

/// Sum of the products of corresponding components. For scalars this is `x * y`.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(dot(vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)), 0.0);
/// assert_eq!(dot(ivec2(2, 3), ivec4(0, 4, 5, 6).yz()), 23);
/// assert_eq!(dot(3, 4), 12);
/// ```
pub fn dot<A, B>(x: A, y: B) -> A::Elem
where
    A: Components,
    A::Elem: Number,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    dot_components(&x, &y)
}

fn dot_components<A, B>(x: &A, y: &B) -> A::Elem
where
    A: Components,
    A::Elem: Number,
    B: Components<Elem = A::Elem>,
{
    (0..A::COUNT).fold(<A::Elem as Zero>::ZERO, |acc, i| {
        acc + x.component(i) * y.component(i)
    })
}

/// Cross product of two 3-component values.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(cross(vec3(1, 0, 0), vec3(0, 1, 0)), vec3(0, 0, 1));
/// let v = vec4(0.0, 1.0, 0.0, 1.0);
/// assert_eq!(cross(v.xyz(), v.yxz()), vec3(0.0, 0.0, -1.0));
/// ```
///
/// ```compile_fail
/// # use glsl_linalg::*;
/// let _ = cross(vec2(1.0, 0.0), vec2(0.0, 1.0));
/// ```
pub fn cross<A, B>(x: A, y: B) -> Vector<A::Elem, 3>
where
    A: Components<Map<()> = Vector<(), 3>>,
    A::Elem: Number,
    B: Components<Elem = A::Elem, Map<()> = Vector<(), 3>>,
{
    let [a1, a2, a3] = [0, 1, 2].map(|i| x.component(i));
    let [b1, b2, b3] = [0, 1, 2].map(|i| y.component(i));
    Vector::from_array([a2 * b3 - a3 * b2, a3 * b1 - a1 * b3, a1 * b2 - a2 * b1])
}

/// Length of a vector; a scalar is returned unchanged.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(length(vec2(3.0, 4.0)), 5.0);
/// assert_eq!(length(-2.0), -2.0);
/// ```
pub fn length<A>(x: A) -> A::Elem
where
    A: Components,
    A::Elem: Number + Sqrt,
{
    if A::IS_SCALAR {
        x.component(0)
    } else {
        dot_components(&x, &x).sqrt()
    }
}

/// Distance between two points. For scalars this is `|y - x|`.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(distance(vec2(1.0, 1.0), vec2(4.0, 5.0)), 5.0);
/// assert_eq!(distance(3.0, -1.0), 4.0);
/// ```
pub fn distance<A, B>(x: A, y: B) -> A::Elem
where
    A: Components,
    A::Elem: Signed + Sqrt,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    if A::IS_SCALAR {
        (y.component(0) - x.component(0)).abs()
    } else {
        (0..A::COUNT)
            .map(|i| x.component(i) - y.component(i))
            .fold(<A::Elem as Zero>::ZERO, |acc, d| acc + d * d)
            .sqrt()
    }
}

/// Scales a vector to unit length, as `x * inversesqrt(dot(x, x))`. A scalar yields 1.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(normalize(vec3(0.0, 0.0, 4.0)), vec3(0.0, 0.0, 1.0));
/// assert_eq!(normalize(-8.0), 1.0);
/// ```
pub fn normalize<A>(x: A) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Number + Sqrt,
{
    if A::IS_SCALAR {
        A::build(|_| <A::Elem as One>::ONE)
    } else {
        let scale = dot_components(&x, &x).inverse_sqrt();
        A::build(|i| x.component(i) * scale)
    }
}

/// Reflects the incident vector `i` at the plane with normal `n`: `i - 2 * dot(n, i) * n`.
///
/// `n` should be normalized.
///
/// ```
/// # use glsl_linalg::*;
/// let r = reflect(vec2(1.0, -1.0), vec2(0.0, 1.0));
/// assert_eq!(r, vec2(1.0, 1.0));
/// ```
pub fn reflect<A, B>(i: A, n: B) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Number,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    let one = <A::Elem as One>::ONE;
    let d = (one + one) * dot_components(&n, &i);
    A::build(|k| i.component(k) - d * n.component(k))
}

/// Refracts the incident vector `i` at a surface with normal `n` and ratio of indices of refraction
/// `eta`.
///
/// Returns zero on total internal reflection (`k < 0`). `i` and `n` should be normalized.
///
/// ```
/// # use glsl_linalg::*;
/// let straight = refract(vec2(0.0, -1.0), vec2(0.0, 1.0), 1.0);
/// assert_eq!(straight, vec2(0.0, -1.0));
///
/// let grazing = normalize(vec2(1.0, -0.1));
/// assert_eq!(refract(grazing, vec2(0.0, 1.0), 1.5), vec2(0.0, 0.0));
/// ```
pub fn refract<A, B>(i: A, n: B, eta: A::Elem) -> A::Map<A::Elem>
where
    A: Components,
    A::Elem: Float,
    B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
{
    let one = <A::Elem as One>::ONE;
    let d = dot_components(&n, &i);
    let k = one - eta * eta * (one - d * d);
    if k < <A::Elem as Zero>::ZERO {
        log::trace!("refract: total internal reflection");
        return A::build(|_| <A::Elem as Zero>::ZERO);
    }

    let s = eta * d + k.sqrt();
    A::build(|c| eta * i.component(c) - s * n.component(c))
}

#[cfg(test)]
mod tests {
    use crate::{aliases::*, assert_approx_eq, test, vec1, vec2, vec3, vec4};

    use super::*;

    #[test]
    fn dot_and_cross() {
        assert_eq!(dot(vec3(1, 0, 0), vec3(0, 1, 0)), 0);
        assert_eq!(cross(vec3(1, 0, 0), vec3(0, 1, 0)), vec3(0, 0, 1));
        assert_eq!(cross(ivec3(0, 1, 0), ivec3(1, 0, 0)), ivec3(0, 0, -1));
        assert_eq!(dot(2.0, 4.5), 9.0);

        let v = vec4(1, 2, 3, 4);
        assert_eq!(dot(v.xyz(), &v.xyz().get()), 14);
    }

    #[test]
    fn scalar_length_and_normalize() {
        // Scalars are returned as they are, without taking the absolute value.
        assert_eq!(length(3.0), 3.0);
        assert_eq!(length(-3.0f32), -3.0);
        assert_eq!(normalize(0.25), 1.0);
        assert_eq!(normalize(-5.0f32), 1.0);

        // A one-component vector is a vector.
        assert_eq!(length(vec1(-3.0)), 3.0);
        assert_eq!(normalize(vec1(-5.0)), vec1(-1.0));

        assert_eq!(distance(2.0, 7.5), 5.5);
        assert_eq!(distance(7.5, 2.0), 5.5);
    }

    #[test]
    fn length_and_normalize() {
        assert_eq!(length(vec2(3.0, 4.0)), 5.0);
        assert_eq!(length(vec4(3.0, 4.0, 0.0, 12.0).xyw()), 13.0);

        let mut rng = fastrand::Rng::with_seed(0x4e7);
        for _ in 0..200 {
            let v = dvec3(rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5) * 20.0;
            if length(v) < 1e-3 {
                continue;
            }
            let n = normalize(v);
            assert_approx_eq!(length(n), 1.0).abs(1e-12);
            assert_approx_eq!(dot(n, v), length(v)).rel(1e-12);
        }
    }

    #[test]
    fn reflection() {
        let n = normalize(vec3(0.0, 1.0, 1.0));
        let i = vec3(0.5, -1.0, 0.25);
        let r = reflect(i, n);
        assert_approx_eq!(length(r), length(i)).abs(1e-6);
        assert_approx_eq!(dot(r, n), -dot(i, n)).abs(1e-6);
        assert_eq!(reflect(1.0, 1.0), -1.0);
    }

    #[test]
    fn refraction() {
        test::init_logger();

        let n = vec2(0.0f64, 1.0);
        let i = normalize(vec2(1.0, -1.0));

        // Snell's law: sin(theta_t) = eta * sin(theta_i).
        let eta = 1.0 / 1.33;
        let t = refract(i, n, eta);
        assert_approx_eq!(length(t), 1.0).abs(1e-12);
        assert_approx_eq!(t.x, eta * i.x).abs(1e-12);
        assert!(t.y < 0.0);

        // Total internal reflection.
        assert_eq!(refract(i, n, 1.5), dvec2(0.0, 0.0));
        assert_eq!(refract(i.yx(), n.yx(), 1.5), dvec2(0.0, 0.0));
    }
}
