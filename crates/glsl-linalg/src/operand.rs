//! Traits that let operators and functions accept vectors, swizzle views and scalars alike.
//!
//! - [`Operand<N>`] is the right-hand side of an `N`-component vector operator: a vector or view
//!   with `N` components, or a scalar that is broadcast to all of them.
//! - [`Components`] is a GLSL *genType*: a scalar or a vector-like value. Functions that take
//!   several [`Components`] require them to have the same shape, which is expressed as equality of
//!   their [`Shape`] types.
//!
//! Both read through a view's swizzle, so `v.zyx()` behaves exactly like the vector it resolves to.

use std::array;

use crate::{
    swizzle::Swizzle,
    traits::Element,
    vector::{View, ViewMut},
    Vector,
};

/// An operand of an `N`-component vector operation.
pub trait Operand<const N: usize> {
    type Elem: Copy;

    /// Returns the value of axis `axis` (`< N`).
    fn lane(&self, axis: usize) -> Self::Elem;

    /// Returns all `N` axes as an array.
    #[inline]
    fn lanes(&self) -> [Self::Elem; N] {
        array::from_fn(|axis| self.lane(axis))
    }

    /// Returns the broadcast value if this operand is a scalar.
    #[inline]
    fn broadcast(&self) -> Option<Self::Elem> {
        None
    }
}

/// A scalar or vector-like value whose components can be processed one by one.
pub trait Components {
    type Elem: Copy;

    /// The canonical value of the same shape with elements of type `U`: `U` itself for scalars,
    /// `Vector<U, N>` for vectors and views.
    type Map<U>;

    /// Number of components.
    const COUNT: usize;

    /// Whether this is a plain scalar (as opposed to a vector, even one with a single component).
    const IS_SCALAR: bool;

    fn component(&self, axis: usize) -> Self::Elem;

    /// Builds a value of this shape by invoking `f` with each component index.
    fn build<U, F: FnMut(usize) -> U>(f: F) -> Self::Map<U>;
}

/// The shape of a [`Components`] value, ignoring its element type.
pub type Shape<A> = <A as Components>::Map<()>;

impl<T: Element, const N: usize> Operand<N> for T {
    type Elem = T;

    #[inline]
    fn lane(&self, _: usize) -> T {
        *self
    }

    #[inline]
    fn broadcast(&self) -> Option<T> {
        Some(*self)
    }
}

impl<T: Element> Components for T {
    type Elem = T;
    type Map<U> = U;

    const COUNT: usize = 1;
    const IS_SCALAR: bool = true;

    #[inline]
    fn component(&self, _: usize) -> T {
        *self
    }

    #[inline]
    fn build<U, F: FnMut(usize) -> U>(mut f: F) -> U {
        f(0)
    }
}

impl<T: Copy, const N: usize> Operand<N> for Vector<T, N> {
    type Elem = T;

    #[inline]
    fn lane(&self, axis: usize) -> T {
        self[axis]
    }

    #[inline]
    fn lanes(&self) -> [T; N] {
        self.into_array()
    }
}

impl<T: Copy, const N: usize> Operand<N> for &Vector<T, N> {
    type Elem = T;

    #[inline]
    fn lane(&self, axis: usize) -> T {
        self[axis]
    }

    #[inline]
    fn lanes(&self) -> [T; N] {
        self.into_array()
    }
}

impl<T: Copy, const N: usize> Components for Vector<T, N> {
    type Elem = T;
    type Map<U> = Vector<U, N>;

    const COUNT: usize = N;
    const IS_SCALAR: bool = false;

    #[inline]
    fn component(&self, axis: usize) -> T {
        self[axis]
    }

    #[inline]
    fn build<U, F: FnMut(usize) -> U>(f: F) -> Vector<U, N> {
        Vector::from_fn(f)
    }
}

impl<T: Copy, const N: usize> Components for &Vector<T, N> {
    type Elem = T;
    type Map<U> = Vector<U, N>;

    const COUNT: usize = N;
    const IS_SCALAR: bool = false;

    #[inline]
    fn component(&self, axis: usize) -> T {
        self[axis]
    }

    #[inline]
    fn build<U, F: FnMut(usize) -> U>(f: F) -> Vector<U, N> {
        Vector::from_fn(f)
    }
}

macro_rules! view_operand {
    ($($view:ident),+) => {
        $(
            impl<'a, T: Copy, const N: usize, const M: usize, const P: u16> Operand<N>
                for $view<'a, T, N, M, P>
            {
                type Elem = T;

                #[inline]
                fn lane(&self, axis: usize) -> T {
                    self.storage()[Swizzle::<N, M, P>::axis(axis)]
                }
            }

            impl<'a, 'b, T: Copy, const N: usize, const M: usize, const P: u16> Operand<N>
                for &'b $view<'a, T, N, M, P>
            {
                type Elem = T;

                #[inline]
                fn lane(&self, axis: usize) -> T {
                    self.storage()[Swizzle::<N, M, P>::axis(axis)]
                }
            }

            impl<'a, T: Copy, const N: usize, const M: usize, const P: u16> Components
                for $view<'a, T, N, M, P>
            {
                type Elem = T;
                type Map<U> = Vector<U, N>;

                const COUNT: usize = N;
                const IS_SCALAR: bool = false;

                #[inline]
                fn component(&self, axis: usize) -> T {
                    self.storage()[Swizzle::<N, M, P>::axis(axis)]
                }

                #[inline]
                fn build<U, F: FnMut(usize) -> U>(f: F) -> Vector<U, N> {
                    Vector::from_fn(f)
                }
            }

            impl<'a, 'b, T: Copy, const N: usize, const M: usize, const P: u16> Components
                for &'b $view<'a, T, N, M, P>
            {
                type Elem = T;
                type Map<U> = Vector<U, N>;

                const COUNT: usize = N;
                const IS_SCALAR: bool = false;

                #[inline]
                fn component(&self, axis: usize) -> T {
                    self.storage()[Swizzle::<N, M, P>::axis(axis)]
                }

                #[inline]
                fn build<U, F: FnMut(usize) -> U>(f: F) -> Vector<U, N> {
                    Vector::from_fn(f)
                }
            }
        )+
    };
}
view_operand!(View, ViewMut);
