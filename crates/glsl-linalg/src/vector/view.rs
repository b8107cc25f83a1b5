use std::fmt;

use crate::{operand::Operand, swizzle::Swizzle, traits::Number, Vector};

/// A read-only swizzle of a vector's storage.
///
/// `View<'a, T, N, M, P>` presents `N` of the `M` elements of a borrowed vector, reordered (or
/// repeated) according to the pattern `P`. Views are produced by the swizzle accessors of
/// [`Vector`] (`v.zyx()`, `v.ba()`, ...) and by [`Vector::swizzle`].
///
/// A view takes part in arithmetic, comparisons and functions like the vector it resolves to, but
/// has no address of its own: it can't be indexed or swizzled again. Use [`View::get`] to obtain
/// that vector.
///
/// # Examples
///
/// ```
/// # use glsl_linalg::*;
/// let v = vec4(1.0, 2.0, 3.0, 4.0);
/// let zyx = v.zyx();
/// assert_eq!(zyx, vec3(3.0, 2.0, 1.0));
/// assert_eq!(zyx * 2.0, vec3(6.0, 4.0, 2.0));
/// assert_eq!(dot(zyx, v.xxx()), 6.0);
/// assert_eq!(zyx.get()[0], 3.0);
/// ```
pub struct View<'a, T, const N: usize, const M: usize, const P: u16> {
    storage: &'a [T; M],
}

/// A writable swizzle of a vector's storage.
///
/// Only exists for patterns that name every axis at most once; `v.xx_mut()` is not generated and
/// `v.swizzle_mut::<2, 0x00>()` fails to compile.
///
/// Assigning through the view scatters the components back to their storage slots. The right-hand
/// side is read completely before anything is written, so operands may alias the written vector.
///
/// # Examples
///
/// ```
/// # use glsl_linalg::*;
/// let mut v = vec3(1, 2, 3);
/// let mut xy = v.xy_mut();
/// xy += 10;
/// xy *= vec2(1, 2);
/// assert_eq!(v, vec3(11, 24, 3));
///
/// let zyx = v.zyx().get();
/// v.xyz_mut().set(zyx);
/// assert_eq!(v, vec3(3, 24, 11));
/// ```
pub struct ViewMut<'a, T, const N: usize, const M: usize, const P: u16> {
    storage: &'a mut [T; M],
}

impl<'a, T, const N: usize, const M: usize, const P: u16> View<'a, T, N, M, P> {
    #[inline]
    pub(crate) fn new(storage: &'a [T; M]) -> Self {
        let () = Swizzle::<N, M, P>::ASSERT_READABLE;
        Self { storage }
    }

    #[inline]
    pub(crate) fn storage(&self) -> &[T; M] {
        self.storage
    }

    /// Iterates over the selected elements, in swizzle order.
    pub(crate) fn elems(&self) -> impl Iterator<Item = &T> + '_ {
        (0..N).map(|k| &self.storage[Swizzle::<N, M, P>::axis(k)])
    }

    /// Resolves the swizzle into a canonical vector.
    #[inline]
    pub fn get(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|k| self.storage[Swizzle::<N, M, P>::axis(k)])
    }
}

impl<'a, T, const N: usize, const M: usize, const P: u16> ViewMut<'a, T, N, M, P> {
    #[inline]
    pub(crate) fn new(storage: &'a mut [T; M]) -> Self {
        let () = Swizzle::<N, M, P>::ASSERT_WRITABLE;
        Self { storage }
    }

    #[inline]
    pub(crate) fn storage(&self) -> &[T; M] {
        &*self.storage
    }

    pub(crate) fn elems(&self) -> impl Iterator<Item = &T> + '_ {
        (0..N).map(|k| &self.storage[Swizzle::<N, M, P>::axis(k)])
    }

    /// Resolves the swizzle into a canonical vector.
    #[inline]
    pub fn get(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|k| self.storage[Swizzle::<N, M, P>::axis(k)])
    }

    /// Reborrows this view as a read-only [`View`].
    #[inline]
    pub fn as_view(&self) -> View<'_, T, N, M, P> {
        View::new(&*self.storage)
    }

    /// Writes `value` through the swizzle.
    ///
    /// A scalar is written to every selected component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let mut v = vec4(0, 0, 0, 0);
    /// v.wx_mut().set(vec2(1, 2));
    /// v.yz_mut().set(7);
    /// assert_eq!(v, vec4(2, 7, 7, 1));
    /// ```
    pub fn set<R>(&mut self, value: R)
    where
        T: Copy,
        R: Operand<N, Elem = T>,
    {
        let () = Swizzle::<N, M, P>::ASSERT_WRITABLE;
        let lanes = value.lanes();
        for (k, lane) in lanes.into_iter().enumerate() {
            self.storage[Swizzle::<N, M, P>::axis(k)] = lane;
        }
    }

    /// Adds one to every selected component and returns the new value (GLSL `++v.xy`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// assert_eq!(v.zx_mut().increment(), vec2(4, 2));
    /// assert_eq!(v.yz_mut().post_decrement(), vec2(2, 4));
    /// assert_eq!(v, vec3(2, 1, 3));
    /// ```
    pub fn increment(&mut self) -> Vector<T, N>
    where
        T: Number,
    {
        let value = self.get().map(|elem| elem + T::ONE);
        self.set(value);
        value
    }

    /// Subtracts one from every selected component and returns the new value (GLSL `--v.xy`).
    pub fn decrement(&mut self) -> Vector<T, N>
    where
        T: Number,
    {
        let value = self.get().map(|elem| elem - T::ONE);
        self.set(value);
        value
    }

    /// Adds one to every selected component and returns the previous value (GLSL `v.xy++`).
    pub fn post_increment(&mut self) -> Vector<T, N>
    where
        T: Number,
    {
        let old = self.get();
        self.increment();
        old
    }

    /// Subtracts one from every selected component and returns the previous value (GLSL `v.xy--`).
    pub fn post_decrement(&mut self) -> Vector<T, N>
    where
        T: Number,
    {
        let old = self.get();
        self.decrement();
        old
    }
}

impl<'a, T, const N: usize, const M: usize, const P: u16> Clone for View<'a, T, N, M, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, const N: usize, const M: usize, const P: u16> Copy for View<'a, T, N, M, P> {}

impl<'a, T: fmt::Debug, const N: usize, const M: usize, const P: u16> fmt::Debug
    for View<'a, T, N, M, P>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in self.elems() {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<'a, T: fmt::Debug, const N: usize, const M: usize, const P: u16> fmt::Debug
    for ViewMut<'a, T, N, M, P>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_view(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec3f};

    #[test]
    fn read_through_pattern() {
        let v = vec4(10, 20, 30, 40);
        assert_eq!(v.wy().get(), vec2(40, 20));
        assert_eq!(v.xxx().get(), vec3(10, 10, 10));
        assert_eq!(v.swizzle::<4, 0x0123>().get(), vec4(40, 30, 20, 10));
        assert_eq!(format!("{:?}", v.zx()), "(30, 10)");
    }

    #[test]
    fn write_through_pattern() {
        let mut v = vec4(0, 0, 0, 0);
        v.wzyx_mut().set(vec4(1, 2, 3, 4));
        assert_eq!(v, vec4(4, 3, 2, 1));

        let mut v = Vec3f::ZERO;
        let mut zx = v.zx_mut();
        zx.set(vec2(1.0, 2.0));
        assert_eq!(zx.get(), vec2(1.0, 2.0));
        assert_eq!(zx.as_view().get(), vec2(1.0, 2.0));
        assert_eq!(v, vec3(2.0, 0.0, 1.0));
    }

    #[test]
    fn rgba_and_stpq_groups() {
        let mut c = vec4(0.1, 0.2, 0.3, 1.0);
        assert_eq!(c.bgr().get(), vec3(0.3, 0.2, 0.1));
        assert_eq!(c.qp().get(), vec2(1.0, 0.3));

        c.ra_mut().set(vec2(0.5, 0.5));
        assert_eq!(c, vec4(0.5, 0.2, 0.3, 0.5));
    }

    #[test]
    fn increment_writes_back() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!(v.wx_mut().post_increment(), vec2(4, 1));
        assert_eq!(v, vec4(2, 2, 3, 5));
        assert_eq!(v.zy_mut().decrement(), vec2(2, 1));
        assert_eq!(v, vec4(2, 1, 2, 5));
    }
}
