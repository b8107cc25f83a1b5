//! Component-wise comparisons producing boolean vectors, and their reductions.
//!
//! The comparison operators of [`Vector`][crate::Vector] are lexicographic and return a single
//! `bool`; these functions compare each component on its own instead.

use crate::operand::{Components, Shape};

use super::{elementwise, elementwise2};

macro_rules! relational {
    ($($(#[$attr:meta])* $name:ident: $Bound:ident, $op:tt;)+) => {
        $(
            $(#[$attr])*
            pub fn $name<A, B>(x: A, y: B) -> A::Map<bool>
            where
                A: Components,
                A::Elem: $Bound,
                B: Components<Elem = A::Elem, Map<()> = Shape<A>>,
            {
                elementwise2(x, y, |a, b| a $op b)
            }
        )+
    };
}

relational! {
    /// `x < y` for each component.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(less_than(vec3(1, 5, 3), vec3(2, 2, 3)), bvec3(true, false, false));
    /// ```
    #[doc(alias = "lessThan")]
    less_than: PartialOrd, <;
    #[doc(alias = "lessThanEqual")]
    less_than_equal: PartialOrd, <=;
    #[doc(alias = "greaterThan")]
    greater_than: PartialOrd, >;
    #[doc(alias = "greaterThanEqual")]
    greater_than_equal: PartialOrd, >=;
    /// `x == y` for each component.
    equal: PartialEq, ==;
    #[doc(alias = "notEqual")]
    not_equal: PartialEq, !=;
}

/// Returns whether any component is `true`.
///
/// ```
/// # use glsl_linalg::*;
/// let v = vec4(1.0, f32::NAN, 3.0, 4.0);
/// assert!(any(is_nan(v)));
/// assert!(!all(is_nan(v)));
/// assert!(all(not(is_nan(v.xzw()))));
/// ```
pub fn any<A>(x: A) -> bool
where
    A: Components<Elem = bool>,
{
    (0..A::COUNT).any(|i| x.component(i))
}

/// Returns whether all components are `true`.
pub fn all<A>(x: A) -> bool
where
    A: Components<Elem = bool>,
{
    (0..A::COUNT).all(|i| x.component(i))
}

/// Logical negation of each component.
pub fn not<A>(x: A) -> A::Map<bool>
where
    A: Components<Elem = bool>,
{
    elementwise(x, |b| !b)
}

#[cfg(test)]
mod tests {
    use crate::{aliases::*, vec3, vec4};

    use super::*;

    #[test]
    fn comparisons() {
        let a = vec3(1.0, 2.0, f32::NAN);
        let b = vec3(2.0, 2.0, 0.0);
        assert_eq!(less_than(a, b), bvec3(true, false, false));
        assert_eq!(less_than_equal(a, b), bvec3(true, true, false));
        assert_eq!(greater_than(a, b), bvec3(false, false, false));
        assert_eq!(greater_than_equal(b, a), bvec3(true, true, false));
        assert_eq!(equal(a, b), bvec3(false, true, false));
        assert_eq!(not_equal(a, b), bvec3(true, false, true));
        assert_eq!(equal(a.zyx(), a.zyx()), bvec3(false, true, true));
    }

    #[test]
    fn reductions() {
        assert!(any(bvec4(false, false, true, false)));
        assert!(!any(bvec2(false, false)));
        assert!(all(bvec3(true, true, true)));
        assert!(!all(bvec3(true, false, true)));
        assert_eq!(not(bvec4(true, false, true, false)), bvec4(false, true, false, true));
        assert!(all(equal(uvec2(4, 5), uvec2(4, 5))));
        assert!(any(true));
        assert!(all(vec4(true, true, false, true).xyw()));
    }
}
