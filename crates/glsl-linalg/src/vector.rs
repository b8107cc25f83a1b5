use std::{array, fmt};

use crate::{
    error::SliceLengthError,
    func,
    operand::{Components, Operand},
    traits::{Cast, Float, MinMax, Number, One, Sqrt, Zero},
};

mod members;
mod ops;
mod view;

pub use view::{View, ViewMut};

macro_rules! sized_aliases {
    ($($n:literal: $generic:ident, $single:ident;)+) => {
        $(
            #[doc = concat!("A vector with ", stringify!($n), " components.")]
            pub type $generic<T> = Vector<T, $n>;
            #[doc = concat!("A vector with ", stringify!($n), " [`f32`] components.")]
            pub type $single = Vector<f32, $n>;
        )+
    };
}

sized_aliases! {
    1: Vec1, Vec1f;
    2: Vec2, Vec2f;
    3: Vec3, Vec3f;
    4: Vec4, Vec4f;
}

/// A column vector of `N` components of type `T`.
///
/// This is the *canonical* vector: it owns its storage, can be indexed, and hands out swizzle
/// views of itself. Results of arithmetic on views are always canonical vectors.
///
/// # Construction
///
/// - [`vec1`], [`vec2`], [`vec3`] and [`vec4`] take the components as arguments.
/// - [`Vector::splat`] repeats one value, [`Vector::from_fn`] computes each component from its
///   index.
/// - Arrays convert with [`From`], slices with [`TryFrom`].
/// - Smaller vectors and scalars are concatenated through [`From`] impls for tuples:
///   `Vec4::from((v.xy().get(), 0.0, 1.0))` is GLSL's `vec4(v.xy, 0.0, 1.0)`.
/// - [`Vector::narrow`] keeps the leading components of a larger vector, `extend` and `truncate`
///   add or drop one trailing component.
/// - [`Vector::from_operand`] and [`Vector::cast`] convert element types.
/// - [`Vector::ZERO`] and the axis constants `X`, `Y`, `Z` and `W`.
///
/// ```
/// # use glsl_linalg::*;
/// let v = vec2(1, 2).extend(3).extend(4);
/// assert_eq!(v, Vec4::from((vec2(1, 2), 3, 4)));
/// assert_eq!(v.truncate(), v.narrow::<3>());
/// assert_eq!(Vec3::<i32>::Y, vec3(0, 1, 0));
/// ```
///
/// # Element Access
///
/// - Components of vectors with up to 4 dimensions are fields named `x`, `y`, `z` and `w`. The
///   color names `r`, `g`, `b`, `a` and texture names `s`, `t`, `p`, `q` refer to the same fields.
///   Fields are ordinary places: they can be assigned and borrowed.
/// - [`Vector::axis`] and [`Vector::axis_mut`] select a field by a constant index.
/// - Vectors can be indexed with `usize` like arrays and slices.
///
/// ```
/// # use glsl_linalg::*;
/// let mut v = vec3(1, 2, 3);
/// v.g = 20;
/// *v.axis_mut::<2>() += 10;
/// assert_eq!(v, [1, 20, 13]);
/// assert_eq!(v.s, v[0]);
/// ```
///
/// # Swizzles
///
/// Every combination of 2 to 4 letters from one of the groups `xyzw`, `rgba` and `stpq` is a method
/// returning a [`View`]; combinations without repeated letters also have a `_mut` variant returning
/// a [`ViewMut`]. Views read (and write) through the reordered axes:
///
/// ```
/// # use glsl_linalg::*;
/// let mut v = vec4(1, 2, 3, 4);
/// assert_eq!(v.wzyx(), vec4(4, 3, 2, 1));
/// assert_eq!(v.xx() + v.yy(), vec2(3, 3));
///
/// v.zx_mut().set(vec2(30, 10));
/// assert_eq!(v, vec4(10, 2, 30, 4));
///
/// let mut ba = v.ba_mut();
/// ba += 1;
/// assert_eq!(v, vec4(10, 2, 31, 5));
/// ```
///
/// # Comparison
///
/// `==` compares every component. `<`, `>` and [`Ord`] order vectors *lexicographically*: the first
/// differing component decides. This gives vectors a total order (for sorting or as map keys); the
/// per-component comparisons are the [`less_than`][crate::less_than] family of functions.
///
/// ```
/// # use glsl_linalg::*;
/// assert!(vec3(1, 2, 3) < vec3(1, 2, 4));
/// assert!(vec3(2, 0, 0) > vec3(1, 9, 9));
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

// SAFETY: `Vector` is a transparent wrapper around `[T; N]`.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The vector with every component set to [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

macro_rules! unit_axes {
    ($n:literal: $($axis:ident = [$($elem:ident),+]),+) => {
        impl<T: Zero + One> Vector<T, $n> {
            $(
                #[doc = concat!("The unit vector along the ", stringify!($axis), " axis.")]
                pub const $axis: Self = Self([$(T::$elem),+]);
            )+
        }
    };
}

unit_axes!(1: X = [ONE]);
unit_axes!(2: X = [ONE, ZERO], Y = [ZERO, ONE]);
unit_axes!(3: X = [ONE, ZERO, ZERO], Y = [ZERO, ONE, ZERO], Z = [ZERO, ZERO, ONE]);
unit_axes!(
    4: X = [ONE, ZERO, ZERO, ZERO],
    Y = [ZERO, ONE, ZERO, ZERO],
    Z = [ZERO, ZERO, ONE, ZERO],
    W = [ZERO, ZERO, ZERO, ONE]
);

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with every component set to `elem`.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(Vec3::splat(-1), ivec3(-1, -1, -1));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector by calling `f` with the index of each component, like [`array::from_fn`].
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(Vec4::from_fn(|i| i * i), vec4(0, 1, 4, 9));
    /// ```
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(f))
    }

    /// Creates a vector from any operand with `N` components, converting each element.
    ///
    /// The operand may be a vector of another element type, a swizzle view, or a scalar that is
    /// broadcast to every component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let i = ivec3(1, 2, 3);
    /// let v = Vec3f::from_operand(i.zyx());
    /// assert_eq!(v, vec3(3.0, 2.0, 1.0));
    ///
    /// assert_eq!(Vec2f::from_operand(1), vec2(1.0, 1.0));
    /// assert_eq!(Vector::<bool, 2>::from_operand(vec2(0.0, 0.5)), [false, true]);
    /// ```
    pub fn from_operand<O>(operand: O) -> Self
    where
        O: Operand<N>,
        O::Elem: Cast<T>,
    {
        Self(operand.lanes().map(<O::Elem as Cast<T>>::cast))
    }

    /// Converts every element to another type, with GLSL constructor semantics.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(vec2(1.7, -1.7).cast::<i32>(), ivec2(1, -1));
    /// ```
    #[inline]
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(<T as Cast<U>>::cast)
    }

    /// Keeps the first `K` components, dropping the rest.
    ///
    /// `K` must be at least 1 and smaller than `N`; this is checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let v = vec4(1, 2, 3, 4);
    /// assert_eq!(v.narrow::<3>(), vec3(1, 2, 3));
    /// assert_eq!(v.narrow::<1>(), vec1(1));
    /// ```
    ///
    /// ```compile_fail
    /// # use glsl_linalg::*;
    /// let _ = vec2(1, 2).narrow::<3>();
    /// ```
    ///
    /// ```compile_fail
    /// # use glsl_linalg::*;
    /// let _ = vec2(1, 2).narrow::<0>();
    /// ```
    pub fn narrow<const K: usize>(self) -> Vector<T, K>
    where
        T: Copy,
    {
        const {
            assert!(K >= 1, "narrowing must keep at least one component");
            assert!(K < N, "narrowing must drop at least one component");
        };
        Vector::from_fn(|i| self.0[i])
    }

    /// Applies `f` to every component.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(vec2(-3, 4).map(i32::unsigned_abs), uvec2(3, 4));
    /// ```
    #[inline]
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the components of `self` and `other`.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let pairs = vec2(1, 2).zip(vec2('a', 'b'));
    /// assert_eq!(pairs, vec2((1, 'a'), (2, 'b')));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut rhs = other.0.into_iter();
        self.map(|lhs| match rhs.next() {
            Some(rhs) => (lhs, rhs),
            // Both iterators have exactly `N` items.
            None => unreachable!(),
        })
    }

    /// Wraps an array. Unlike the [`From`] impl, this can be used in constants.
    #[inline]
    pub const fn from_array(array: [T; N]) -> Self {
        Self(array)
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns the components as a mutable slice.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let mut v = vec4(4, 3, 2, 1);
    /// v.as_mut_slice().sort();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Borrows `K` components selected by the swizzle pattern `P` as a read-only view.
    ///
    /// The named accessors (`v.zyx()`, ...) are shorthands for this method. See the
    /// [`swizzle`][crate::swizzle] module for the pattern encoding.
    #[inline]
    pub fn swizzle<const K: usize, const P: u16>(&self) -> View<'_, T, K, N, P> {
        View::new(&self.0)
    }

    /// Borrows `K` components selected by the swizzle pattern `P` as a writable view.
    ///
    /// Patterns that name an axis twice are rejected at compile time.
    #[inline]
    pub fn swizzle_mut<const K: usize, const P: u16>(&mut self) -> ViewMut<'_, T, K, N, P> {
        ViewMut::new(&mut self.0)
    }

    /// Returns a reference to the component at the constant index `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let v = vec2(5, 6);
    /// let y: *const i32 = v.axis::<1>();
    /// assert_eq!(y, &v.y as *const i32);
    /// ```
    ///
    /// ```compile_fail
    /// # use glsl_linalg::*;
    /// let _ = vec2(5, 6).axis::<2>();
    /// ```
    #[inline]
    pub fn axis<const I: usize>(&self) -> &T {
        const { assert!(I < N, "axis index out of bounds") };
        &self.0[I]
    }

    /// Returns a mutable reference to the component at the constant index `I`.
    #[inline]
    pub fn axis_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < N, "axis index out of bounds") };
        &mut self.0[I]
    }

    /// Dot product with any operand of `N` components. A scalar operand is broadcast.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let a = ivec3(2, -1, 4);
    /// assert_eq!(a.dot(ivec3(1, 1, 1)), 5);
    /// assert_eq!(a.dot(a.zyx()), 16 + 1 + 16);
    /// assert_eq!(a.dot(2), 10);
    /// ```
    pub fn dot<O>(&self, other: O) -> T
    where
        T: Number,
        O: Operand<N, Elem = T>,
    {
        self.0
            .iter()
            .zip(other.lanes())
            .fold(T::ZERO, |sum, (&a, b)| sum + a * b)
    }

    /// Squared length, `dot(self, self)`.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Euclidean length. Same as [`length`][crate::length].
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(vec2(-6.0, 8.0).length(), 10.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        func::length(self)
    }

    /// Scales the vector to unit length. Same as [`normalize`][crate::normalize].
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        func::normalize(self)
    }

    /// Unsigned angle between `self` and `other` in radians, in `[0, π]`.
    ///
    /// Both vectors must have non-zero length.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// use std::f64::consts::{FRAC_PI_4, PI};
    ///
    /// let v = vec2(2.0, 0.0);
    /// assert_approx_eq!(v.abs_angle_to(vec2(3.0, 3.0)), FRAC_PI_4);
    /// assert_approx_eq!(v.abs_angle_to(-v), PI);
    /// ```
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Float,
    {
        let cos = self.dot(other) * (self.length2() * other.length2()).inverse_sqrt();
        cos.max(-T::ONE).min(T::ONE).acos()
    }

    /// Per-component minimum. Same as [`min`][crate::min].
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        func::min(self, other)
    }

    /// Per-component maximum. Same as [`max`][crate::max].
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        func::max(self, other)
    }

    /// Per-component `min(max(self, lo), hi)`. Same as [`clamp`][crate::clamp].
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let v = vec3(-1.0, 2.0, 0.5);
    /// assert_eq!(v.clamp(Vector::ZERO, Vector::splat(1.0)), vec3(0.0, 1.0, 0.5));
    /// ```
    pub fn clamp(self, lo: Self, hi: Self) -> Self
    where
        T: MinMax + Copy,
    {
        func::clamp(self, lo, hi)
    }

    /// GLSL `++v`: adds one to every component and returns the new value.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let mut v = ivec2(1, -1);
    /// assert_eq!(v.increment(), ivec2(2, 0));
    /// assert_eq!(v.post_increment(), ivec2(2, 0));
    /// assert_eq!(v, ivec2(3, 1));
    /// ```
    pub fn increment(&mut self) -> Self
    where
        T: Number,
    {
        for elem in &mut self.0 {
            *elem = *elem + T::ONE;
        }
        *self
    }

    /// GLSL `--v`: subtracts one from every component and returns the new value.
    pub fn decrement(&mut self) -> Self
    where
        T: Number,
    {
        for elem in &mut self.0 {
            *elem = *elem - T::ONE;
        }
        *self
    }

    /// GLSL `v++`: adds one to every component and returns the previous value.
    pub fn post_increment(&mut self) -> Self
    where
        T: Number,
    {
        let before = *self;
        self.increment();
        before
    }

    /// GLSL `v--`: subtracts one from every component and returns the previous value.
    pub fn post_decrement(&mut self) -> Self
    where
        T: Number,
    {
        let before = *self;
        self.decrement();
        before
    }
}

macro_rules! grow_shrink {
    ($($n:literal <-> $m:literal [$($c:ident),+];)+) => {
        $(
            impl<T> Vector<T, $n> {
                #[doc = concat!(
                    "Appends `value`, producing a ", stringify!($m), "-component vector."
                )]
                pub fn extend(self, value: T) -> Vector<T, $m> {
                    let [$($c),+] = self.0;
                    Vector([$($c,)+ value])
                }
            }

            impl<T> Vector<T, $m> {
                #[doc = concat!(
                    "Drops the last component, producing a ", stringify!($n), "-component vector."
                )]
                pub fn truncate(self) -> Vector<T, $n> {
                    let [$($c,)+ _] = self.0;
                    Vector([$($c),+])
                }
            }
        )+
    };
}

grow_shrink! {
    1 <-> 2 [x];
    2 <-> 3 [x, y];
    3 <-> 4 [x, y, z];
}

impl<T> Vector<T, 3> {
    /// Cross product. Same as [`cross`][crate::cross], which also accepts views.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
    /// assert_eq!(Vec3f::X.cross(Vec3f::Z), -Vec3f::Y);
    /// ```
    pub fn cross<B>(self, other: B) -> Self
    where
        T: Number,
        B: Components<Elem = T, Map<()> = Vector<(), 3>>,
    {
        func::cross(self, other)
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = SliceLengthError;

    /// Copies the elements of a slice of exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let v = Vec3::try_from(&[1, 2, 3][..]).unwrap();
    /// assert_eq!(v, vec3(1, 2, 3));
    /// assert!(Vec2::<i32>::try_from(&[1, 2, 3][..]).is_err());
    /// ```
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let array: [T; N] = slice.try_into().map_err(|_| SliceLengthError {
            expected: N,
            actual: slice.len(),
        })?;
        Ok(Self(array))
    }
}

impl<T> From<(T, T)> for Vector<T, 2> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self([x, y])
    }
}

impl<T> From<(T, T, T)> for Vector<T, 3> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self([x, y, z])
    }
}

impl<T> From<(T, T, T, T)> for Vector<T, 4> {
    #[inline]
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self([x, y, z, w])
    }
}

impl<T> From<(Vector<T, 2>, T)> for Vector<T, 3> {
    #[inline]
    fn from((xy, z): (Vector<T, 2>, T)) -> Self {
        let [x, y] = xy.0;
        Self([x, y, z])
    }
}

impl<T> From<(T, Vector<T, 2>)> for Vector<T, 3> {
    #[inline]
    fn from((x, yz): (T, Vector<T, 2>)) -> Self {
        let [y, z] = yz.0;
        Self([x, y, z])
    }
}

impl<T> From<(Vector<T, 3>, T)> for Vector<T, 4> {
    #[inline]
    fn from((xyz, w): (Vector<T, 3>, T)) -> Self {
        let [x, y, z] = xyz.0;
        Self([x, y, z, w])
    }
}

impl<T> From<(T, Vector<T, 3>)> for Vector<T, 4> {
    #[inline]
    fn from((x, yzw): (T, Vector<T, 3>)) -> Self {
        let [y, z, w] = yzw.0;
        Self([x, y, z, w])
    }
}

impl<T> From<(Vector<T, 2>, T, T)> for Vector<T, 4> {
    #[inline]
    fn from((xy, z, w): (Vector<T, 2>, T, T)) -> Self {
        let [x, y] = xy.0;
        Self([x, y, z, w])
    }
}

impl<T> From<(T, Vector<T, 2>, T)> for Vector<T, 4> {
    #[inline]
    fn from((x, yz, w): (T, Vector<T, 2>, T)) -> Self {
        let [y, z] = yz.0;
        Self([x, y, z, w])
    }
}

impl<T> From<(T, T, Vector<T, 2>)> for Vector<T, 4> {
    #[inline]
    fn from((x, y, zw): (T, T, Vector<T, 2>)) -> Self {
        let [z, w] = zw.0;
        Self([x, y, z, w])
    }
}

impl<T> From<(Vector<T, 2>, Vector<T, 2>)> for Vector<T, 4> {
    #[inline]
    fn from((xy, zw): (Vector<T, 2>, Vector<T, 2>)) -> Self {
        let [x, y] = xy.0;
        let [z, w] = zw.0;
        Self([x, y, z, w])
    }
}

// Swizzle views concatenate like the vectors they resolve to.
macro_rules! concat_views {
    ($(
        [$($gen:tt)*] ($($arg:ident: $ty:ty),+) -> $n:literal = ($($part:expr),+);
    )+) => {
        $(
            impl<'a, T: Copy, $($gen)*> From<($($ty),+)> for Vector<T, $n> {
                #[inline]
                fn from(($($arg),+): ($($ty),+)) -> Self {
                    Self::from(($($part),+))
                }
            }
        )+
    };
}

concat_views! {
    [const M: usize, const P: u16]
        (xy: View<'a, T, 2, M, P>, z: T) -> 3 = (xy.get(), z);
    [const M: usize, const P: u16]
        (x: T, yz: View<'a, T, 2, M, P>) -> 3 = (x, yz.get());
    [const M: usize, const P: u16]
        (xyz: View<'a, T, 3, M, P>, w: T) -> 4 = (xyz.get(), w);
    [const M: usize, const P: u16]
        (x: T, yzw: View<'a, T, 3, M, P>) -> 4 = (x, yzw.get());
    [const M: usize, const P: u16]
        (xy: View<'a, T, 2, M, P>, z: T, w: T) -> 4 = (xy.get(), z, w);
    [const M: usize, const P: u16]
        (x: T, yz: View<'a, T, 2, M, P>, w: T) -> 4 = (x, yz.get(), w);
    [const M: usize, const P: u16]
        (x: T, y: T, zw: View<'a, T, 2, M, P>) -> 4 = (x, y, zw.get());
    [const M: usize, const P: u16]
        (xy: View<'a, T, 2, M, P>, zw: Vector<T, 2>) -> 4 = (xy.get(), zw);
    [const M: usize, const P: u16]
        (xy: Vector<T, 2>, zw: View<'a, T, 2, M, P>) -> 4 = (xy, zw.get());
    [const M: usize, const P: u16, const M2: usize, const P2: u16]
        (xy: View<'a, T, 2, M, P>, zw: View<'a, T, 2, M2, P2>) -> 4 = (xy.get(), zw.get());
}

/// Formats as a parenthesized list, `(1.0, 0.0)`.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .fold(&mut f.debug_tuple(""), |list, elem| list.field(elem))
            .finish()
    }
}

/// Formats as a parenthesized list, `(1, 0)`. Width and precision apply to every component.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// GLSL `vec1(x)`.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// GLSL `vec2(x, y)`, for any element type.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// GLSL `vec3(x, y, z)`, for any element type.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// GLSL `vec4(x, y, z, w)`, for any element type.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

include!(concat!(env!("OUT_DIR"), "/swizzle_accessors.rs"));

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::{aliases::*, assert_approx_eq};

    use super::*;

    #[test]
    fn named_fields() {
        let mut v = vec4(1, 2, 3, 4);
        v.b = 30;
        v.t *= 10;
        assert_eq!(v, [1, 20, 30, 4]);
        let q: &mut i32 = &mut v.q;
        *q = 40;
        assert_eq!(*v.axis::<3>(), 40);
        assert_eq!(v[3], 40);

        let mut s = vec1(5u8);
        s.r += 1;
        assert_eq!(s.x, 6);
    }

    #[test]
    fn unit_axes() {
        assert_eq!(Vec1f::X, vec1(1.0));
        assert_eq!(Vec2::<i32>::Y, ivec2(0, 1));
        assert_eq!(Vec3f::Z, vec3(0.0, 0.0, 1.0));
        assert_eq!(Vec4::<u32>::W, uvec4(0, 0, 0, 1));
        assert_eq!(Vec4f::ZERO, Vec4f::default());
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec3(1.0, -0.5, 0.0)), "(1, -0.5, 0)");
        assert_eq!(format!("{:?}", vec2(1.0, 0.0)), "(1.0, 0.0)");
        assert_eq!(format!("{:.1}", vec2(1.26, 2.0)), "(1.3, 2.0)");
        assert_eq!(format!("{}", bvec2(true, false)), "(true, false)");
    }

    #[test]
    fn geometry() {
        let a = vec3(2.0, 3.0, 6.0);
        assert_eq!(a.length2(), 49.0);
        assert_eq!(a.length(), 7.0);
        assert_approx_eq!(a.normalize(), vec3(2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0)).abs(1e-12);
        assert_eq!(a.cross(a), dvec3(0.0, 0.0, 0.0));
        assert_eq!(a.cross(a.zxy()).dot(a), 0.0);

        assert_approx_eq!(Vec2f::X.abs_angle_to(Vec2f::Y), std::f32::consts::FRAC_PI_2);
        // Parallel vectors whose normalized dot rounds above 1.
        assert!(!vec3(0.1, 0.2, 0.3).abs_angle_to(vec3(0.3, 0.6, 0.9)).is_nan());
    }

    #[test]
    fn min_max_clamp() {
        let a = vec3(1, 5, -2);
        let b = vec3(3, 0, -2);
        assert_eq!(a.min(b), vec3(1, 0, -2));
        assert_eq!(a.max(b), vec3(3, 5, -2));
        assert_eq!(a.clamp(Vec3::splat(0), Vec3::splat(4)), vec3(1, 4, 0));
        // `hi` wins when the bounds cross.
        assert_eq!(a.clamp(Vec3::splat(3), Vec3::splat(2)), vec3(2, 2, 2));
    }

    #[test]
    fn lexicographic_order() {
        assert!(vec3(1, 2, 3) < vec3(1, 2, 4));
        assert!(vec3(2, 0, 0) > vec3(1, 9, 9));
        assert!(vec3(1, 2, 3) <= vec3(1, 2, 3));
        assert!(vec2(0.0, f32::NAN).partial_cmp(&vec2(0.0, 1.0)).is_none());
        assert!(vec2(-1.0, f32::NAN) < vec2(0.0, 1.0));

        let set: BTreeSet<_> = [ivec2(1, 0), ivec2(0, 5), ivec2(0, 1)].into_iter().collect();
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            [ivec2(0, 1), ivec2(0, 5), ivec2(1, 0)]
        );
    }

    #[test]
    fn narrowing() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.narrow::<3>(), vec3(1.0, 2.0, 3.0));
        assert_eq!(v.narrow::<2>(), vec2(1.0, 2.0));
        assert_eq!(v.xyz().get().narrow::<2>(), v.xy());
        assert_eq!(v.truncate().truncate().truncate(), vec1(1.0));
        assert_eq!(vec1("a").extend("b").extend("c"), vec3("a", "b", "c"));
    }

    #[test]
    fn concatenation() {
        let xy = vec2(1, 2);
        assert_eq!(Vec4::from((xy, 3, 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((3, 4, xy)), vec4(3, 4, 1, 2));
        assert_eq!(Vec4::from((3, xy, 4)), vec4(3, 1, 2, 4));
        assert_eq!(Vec4::from((xy, xy.yx().get())), vec4(1, 2, 2, 1));
        assert_eq!(Vec4::from((vec3(1, 2, 3), 4)), vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((0, vec3(1, 2, 3))), vec4(0, 1, 2, 3));
        assert_eq!(Vec3::from((xy, 3)), vec3(1, 2, 3));
        assert_eq!(Vec3::from((0, xy)), vec3(0, 1, 2));
        assert_eq!(Vec2::from((5, 6)), xy + 4);

        // GLSL `vec4(v.xy, 0.0, 1.0)` and friends.
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vec4::from((v.xy(), 0.0, 1.0)), vec4(1.0, 2.0, 0.0, 1.0));
        assert_eq!(Vec4::from((0.0, v.wz(), 1.0)), vec4(0.0, 4.0, 3.0, 1.0));
        assert_eq!(Vec4::from((0.0, 1.0, v.ba())), vec4(0.0, 1.0, 3.0, 4.0));
        assert_eq!(Vec4::from((v.zyx(), 9.0)), vec4(3.0, 2.0, 1.0, 9.0));
        assert_eq!(Vec4::from((9.0, v.rgb())), vec4(9.0, 1.0, 2.0, 3.0));
        assert_eq!(Vec4::from((v.xy(), v.xy())), vec4(1.0, 2.0, 1.0, 2.0));
        assert_eq!(Vec4::from((v.st(), vec2(5.0, 6.0))), vec4(1.0, 2.0, 5.0, 6.0));
        assert_eq!(Vec4::from((vec2(5.0, 6.0), v.qp())), vec4(5.0, 6.0, 4.0, 3.0));
        assert_eq!(Vec3::from((v.wx(), 0.0)), vec3(4.0, 1.0, 0.0));
        assert_eq!(Vec3::from((0.0, v.yy())), vec3(0.0, 2.0, 2.0));
    }

    #[test]
    fn conversions() {
        assert_eq!(Vec3f::from_operand(7u8), vec3(7.0, 7.0, 7.0));
        assert_eq!(uvec2(3, 4).cast::<f64>(), dvec2(3.0, 4.0));
        assert_eq!(bvec3(true, false, true).cast::<i32>(), ivec3(1, 0, 1));
        assert_eq!(Vector::<u32, 3>::from_operand(vec4(1.9, 2.0, 3.0, 4.0).wzy()), uvec3(4, 3, 2));
        assert_eq!(vec2(1, 2).zip(vec2(3.0, 4.0)).map(|(a, b)| a as f64 * b), dvec2(3.0, 8.0));

        let err = Vec4::<f32>::try_from(&[1.0, 2.0][..]).unwrap_err();
        assert_eq!(err.to_string(), "expected a slice of 4 elements, got 2");
    }

    #[test]
    fn increment() {
        let mut v = vec3(0.5, 1.0, -1.0);
        assert_eq!(v.post_increment(), vec3(0.5, 1.0, -1.0));
        assert_eq!(v.decrement(), vec3(0.5, 1.0, -1.0));
        assert_eq!(v.increment(), vec3(1.5, 2.0, 0.0));
        assert_eq!(v.post_decrement(), vec3(1.5, 2.0, 0.0));
        assert_eq!(v, vec3(0.5, 1.0, -1.0));
    }
}
