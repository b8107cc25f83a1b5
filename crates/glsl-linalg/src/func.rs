//! GLSL built-in functions.
//!
//! Every function here accepts a scalar, a [`Vector`][crate::Vector], a swizzle view or a reference
//! to one of those (anything implementing [`Components`]) and applies the scalar operation to each
//! component. Vector results are always canonical vectors, never views.
//!
//! Functions taking several values require all of them to have the same shape: a scalar with
//! scalars, an `N`-vector with other `N`-vectors or `N`-views. Mixing shapes fails to compile:
//!
//! ```compile_fail
//! # use glsl_linalg::*;
//! let _ = min(vec3(1.0, 2.0, 3.0), vec2(0.0, 0.0));
//! ```
//!
//! ```
//! # use glsl_linalg::*;
//! let v = vec4(0.25, -1.5, 2.0, 9.0);
//! assert_eq!(floor(v.xy()), vec2(0.0, -2.0));
//! assert_eq!(max(v.zw(), v.yx()), vec2(2.0, 9.0));
//! assert_eq!(abs(-2.5), 2.5);
//! ```

mod common;
mod exponential;
mod geometric;
mod matrix;
mod relational;
mod trig;

pub use common::*;
pub use exponential::*;
pub use geometric::*;
pub use matrix::*;
pub use relational::*;
pub use trig::*;

use crate::operand::{Components, Shape};

/// Applies `f` to each component of `a`.
///
/// The result has the shape of `a` with the element type returned by `f`.
///
/// # Examples
///
/// ```
/// # use glsl_linalg::*;
/// let v = vec3(1, 2, 3);
/// assert_eq!(elementwise(v.zyx(), |c| c * 10), vec3(30, 20, 10));
/// assert_eq!(elementwise(v, |c| c > 1), bvec3(false, true, true));
/// assert_eq!(elementwise(4u8, |c| c + 1), 5);
/// ```
#[inline]
pub fn elementwise<A, U, F>(a: A, mut f: F) -> A::Map<U>
where
    A: Components,
    F: FnMut(A::Elem) -> U,
{
    A::build(|i| f(a.component(i)))
}

/// Applies `f` to each pair of components of `a` and `b`.
///
/// # Examples
///
/// ```
/// # use glsl_linalg::*;
/// let a = vec2(1, 5);
/// let b = vec4(2, 3, 4, 5);
/// assert_eq!(elementwise2(a, b.wz(), |x, y| x * y), vec2(5, 20));
/// ```
#[inline]
pub fn elementwise2<A, B, U, F>(a: A, b: B, mut f: F) -> A::Map<U>
where
    A: Components,
    B: Components<Map<()> = Shape<A>>,
    F: FnMut(A::Elem, B::Elem) -> U,
{
    A::build(|i| f(a.component(i), b.component(i)))
}

/// Applies `f` to each triple of components of `a`, `b` and `c`.
#[inline]
pub fn elementwise3<A, B, C, U, F>(a: A, b: B, c: C, mut f: F) -> A::Map<U>
where
    A: Components,
    B: Components<Map<()> = Shape<A>>,
    C: Components<Map<()> = Shape<A>>,
    F: FnMut(A::Elem, B::Elem, C::Elem) -> U,
{
    A::build(|i| f(a.component(i), b.component(i), c.component(i)))
}

#[cfg(test)]
mod tests {
    use crate::{aliases::*, vec1, vec2, vec3, vec4};

    use super::*;

    #[test]
    fn dispatch_reads_through_views() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(elementwise(v.wzyx(), |c| c), vec4(4, 3, 2, 1));
        assert_eq!(elementwise(&v, |c| c as f32), vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            elementwise2(v.xy(), v.zw(), |a, b| a + b),
            ivec2(4, 6)
        );
        assert_eq!(
            elementwise3(v.xyz(), v.yzw(), v.xxx(), |a, b, c| a * b - c),
            vec3(1, 5, 11)
        );
        assert_eq!(elementwise3(1, 2, 3, |a, b, c| a + b + c), 6);
    }

    #[test]
    fn one_component_vector_is_not_a_scalar() {
        let v = vec1(2.0f32);
        let out: vec1 = elementwise(v, |c| c * 2.0);
        assert_eq!(out, vec1(4.0));
        let out: f32 = elementwise(2.0f32, |c| c * 2.0);
        assert_eq!(out, 4.0);
        assert_eq!(elementwise2(vec2(1, 2), ivec2(3, 4), |a, b| a < b), bvec2(true, true));
    }
}
