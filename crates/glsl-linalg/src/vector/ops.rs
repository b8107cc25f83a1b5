//! Implementations of `std::ops` and the comparison traits.
//!
//! Binary operators take any [`Operand`] of matching dimension on the right: a vector, a swizzle
//! view, or a scalar that is broadcast to every component. The left-hand side may be a vector, a
//! reference to one, or a view; the result is always a canonical [`Vector`]. Compound assignment
//! works on vectors and on writable views.

use std::{
    array,
    cmp::Ordering,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
        ShrAssign, Sub, SubAssign,
    },
    slice,
};

use crate::{
    approx::ApproxEq,
    operand::Operand,
    swizzle::Swizzle,
    traits::{Element, LaneOp, ScalarDiv},
};

use super::{Vector, View, ViewMut};

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, const N: usize> Vector<T, N> {
    #[inline]
    fn elems(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }
}

// Equality and lexicographic ordering between any two vector-likes of the same dimension.
macro_rules! cmp {
    ([$($gen:tt)*] $lhs:ty, $rhs:ty) => {
        impl<$($gen)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                self.elems().eq(other.elems())
            }
        }

        impl<$($gen)*> PartialOrd<$rhs> for $lhs
        where
            T: PartialOrd<U>,
        {
            #[inline]
            fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                self.elems().partial_cmp(other.elems())
            }
        }
    };
}

cmp!([T, U, const N: usize] Vector<T, N>, Vector<U, N>);
cmp!(
    ['a, T, U, const N: usize, const M: usize, const P: u16]
    Vector<T, N>, View<'a, U, N, M, P>
);
cmp!(
    ['a, T, U, const N: usize, const M: usize, const P: u16]
    Vector<T, N>, ViewMut<'a, U, N, M, P>
);
cmp!(
    ['a, T, U, const N: usize, const M: usize, const P: u16]
    View<'a, T, N, M, P>, Vector<U, N>
);
cmp!(
    ['a, T, U, const N: usize, const M: usize, const P: u16]
    ViewMut<'a, T, N, M, P>, Vector<U, N>
);
cmp!(
    ['a, 'b, T, U, const N: usize, const M: usize, const P: u16, const M2: usize, const P2: u16]
    View<'a, T, N, M, P>, View<'b, U, N, M2, P2>
);
cmp!(
    ['a, 'b, T, U, const N: usize, const M: usize, const P: u16, const M2: usize, const P2: u16]
    View<'a, T, N, M, P>, ViewMut<'b, U, N, M2, P2>
);
cmp!(
    ['a, 'b, T, U, const N: usize, const M: usize, const P: u16, const M2: usize, const P2: u16]
    ViewMut<'a, T, N, M, P>, View<'b, U, N, M2, P2>
);

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

/// Lexicographic order: the first differing component decides.
impl<T, const N: usize> Ord for Vector<T, N>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical negation.
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not,
{
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

// Views resolve to a canonical vector first.
macro_rules! view_unary_op {
    ($([$($lt:lifetime),+] $lhs:ty;)+) => {
        $(
            impl<$($lt,)+ T, const N: usize, const M: usize, const P: u16> Neg for $lhs
            where
                T: Neg + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn neg(self) -> Self::Output {
                    self.get().map(T::neg)
                }
            }

            impl<$($lt,)+ T, const N: usize, const M: usize, const P: u16> Not for $lhs
            where
                T: Not + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn not(self) -> Self::Output {
                    self.get().map(T::not)
                }
            }
        )+
    };
}

view_unary_op! {
    ['a] View<'a, T, N, M, P>;
    ['v, 'a] &'v View<'a, T, N, M, P>;
    ['a] ViewMut<'a, T, N, M, P>;
    ['v, 'a] &'v ViewMut<'a, T, N, M, P>;
}

#[inline]
fn zip_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R, f: impl Fn(T, T) -> T) -> [T; N]
where
    T: Copy,
    R: Operand<N, Elem = T>,
{
    let rhs = rhs.lanes();
    array::from_fn(|i| f(lhs[i], rhs[i]))
}

/// Like [`zip_lanes`], but lets the element type run the whole operation as one SIMD kernel.
#[inline]
fn simd_zip_lanes<T, R, const N: usize>(
    op: LaneOp,
    lhs: [T; N],
    rhs: R,
    f: impl Fn(T, T) -> T,
) -> [T; N]
where
    T: Element,
    R: Operand<N, Elem = T>,
{
    let rhs = rhs.lanes();
    T::simd_lanes(op, &lhs, &rhs).unwrap_or_else(|| array::from_fn(|i| f(lhs[i], rhs[i])))
}

#[inline]
fn add_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R) -> [T; N]
where
    T: Element + Add<Output = T>,
    R: Operand<N, Elem = T>,
{
    simd_zip_lanes(LaneOp::Add, lhs, rhs, |a, b| a + b)
}

#[inline]
fn sub_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R) -> [T; N]
where
    T: Element + Sub<Output = T>,
    R: Operand<N, Elem = T>,
{
    simd_zip_lanes(LaneOp::Sub, lhs, rhs, |a, b| a - b)
}

#[inline]
fn mul_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R) -> [T; N]
where
    T: Element + Mul<Output = T>,
    R: Operand<N, Elem = T>,
{
    simd_zip_lanes(LaneOp::Mul, lhs, rhs, |a, b| a * b)
}

/// Dividing by a scalar multiplies with its reciprocal (for floats), see [`ScalarDiv`].
#[inline]
fn div_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R) -> [T; N]
where
    T: Element + ScalarDiv,
    R: Operand<N, Elem = T>,
{
    match rhs.broadcast() {
        Some(divisor) => T::div_each(lhs, divisor),
        None => simd_zip_lanes(LaneOp::Div, lhs, rhs, |a, b| a / b),
    }
}

#[inline]
fn rem_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R) -> [T; N]
where
    T: Copy + Rem<Output = T>,
    R: Operand<N, Elem = T>,
{
    zip_lanes(lhs, rhs, |a, b| a % b)
}

#[inline]
fn bitand_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R) -> [T; N]
where
    T: Copy + BitAnd<Output = T>,
    R: Operand<N, Elem = T>,
{
    zip_lanes(lhs, rhs, |a, b| a & b)
}

#[inline]
fn bitor_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R) -> [T; N]
where
    T: Copy + BitOr<Output = T>,
    R: Operand<N, Elem = T>,
{
    zip_lanes(lhs, rhs, |a, b| a | b)
}

#[inline]
fn bitxor_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R) -> [T; N]
where
    T: Copy + BitXor<Output = T>,
    R: Operand<N, Elem = T>,
{
    zip_lanes(lhs, rhs, |a, b| a ^ b)
}

#[inline]
fn shl_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R) -> [T; N]
where
    T: Copy + Shl<Output = T>,
    R: Operand<N, Elem = T>,
{
    zip_lanes(lhs, rhs, |a, b| a << b)
}

#[inline]
fn shr_lanes<T, R, const N: usize>(lhs: [T; N], rhs: R) -> [T; N]
where
    T: Copy + Shr<Output = T>,
    R: Operand<N, Elem = T>,
{
    zip_lanes(lhs, rhs, |a, b| a >> b)
}

macro_rules! binary_op {
    (@view $Op:ident::$op:ident, $kernel:ident, [$($bound:tt)+] [$($lt:lifetime),+] $lhs:ty) => {
        impl<$($lt,)+ T, R, const N: usize, const M: usize, const P: u16> $Op<R> for $lhs
        where
            T: $($bound)+,
            R: Operand<N, Elem = T>,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: R) -> Vector<T, N> {
                Vector($kernel(self.get().0, rhs))
            }
        }
    };
    (
        $Op:ident::$op:ident,
        $OpAssign:ident::$op_assign:ident,
        $kernel:ident,
        T: $($bound:tt)+
    ) => {
        impl<T, R, const N: usize> $Op<R> for Vector<T, N>
        where
            T: $($bound)+,
            R: Operand<N, Elem = T>,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: R) -> Vector<T, N> {
                Vector($kernel(self.0, rhs))
            }
        }

        impl<'v, T, R, const N: usize> $Op<R> for &'v Vector<T, N>
        where
            T: $($bound)+,
            R: Operand<N, Elem = T>,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: R) -> Vector<T, N> {
                Vector($kernel(self.0, rhs))
            }
        }

        binary_op!(@view $Op::$op, $kernel, [$($bound)+] ['a] View<'a, T, N, M, P>);
        binary_op!(@view $Op::$op, $kernel, [$($bound)+] ['v, 'a] &'v View<'a, T, N, M, P>);
        binary_op!(@view $Op::$op, $kernel, [$($bound)+] ['a] ViewMut<'a, T, N, M, P>);
        binary_op!(@view $Op::$op, $kernel, [$($bound)+] ['v, 'a] &'v ViewMut<'a, T, N, M, P>);

        impl<T, R, const N: usize> $OpAssign<R> for Vector<T, N>
        where
            T: $($bound)+,
            R: Operand<N, Elem = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: R) {
                self.0 = $kernel(self.0, rhs);
            }
        }

        impl<'a, T, R, const N: usize, const M: usize, const P: u16> $OpAssign<R>
            for ViewMut<'a, T, N, M, P>
        where
            T: $($bound)+,
            R: Operand<N, Elem = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: R) {
                let () = Swizzle::<N, M, P>::ASSERT_WRITABLE;
                let value = Vector($kernel(self.get().0, rhs));
                self.set(value);
            }
        }
    };
}

binary_op!(Add::add, AddAssign::add_assign, add_lanes, T: Element + Add<Output = T>);
binary_op!(Sub::sub, SubAssign::sub_assign, sub_lanes, T: Element + Sub<Output = T>);
binary_op!(Mul::mul, MulAssign::mul_assign, mul_lanes, T: Element + Mul<Output = T>);
binary_op!(Div::div, DivAssign::div_assign, div_lanes, T: Element + ScalarDiv);
binary_op!(Rem::rem, RemAssign::rem_assign, rem_lanes, T: Copy + Rem<Output = T>);
binary_op!(
    BitAnd::bitand,
    BitAndAssign::bitand_assign,
    bitand_lanes,
    T: Copy + BitAnd<Output = T>
);
binary_op!(BitOr::bitor, BitOrAssign::bitor_assign, bitor_lanes, T: Copy + BitOr<Output = T>);
binary_op!(
    BitXor::bitxor,
    BitXorAssign::bitxor_assign,
    bitxor_lanes,
    T: Copy + BitXor<Output = T>
);
binary_op!(Shl::shl, ShlAssign::shl_assign, shl_lanes, T: Copy + Shl<Output = T>);
binary_op!(Shr::shr, ShrAssign::shr_assign, shr_lanes, T: Copy + Shr<Output = T>);

// `scalar op vector`: the scalar is broadcast, then the operation runs component-wise.
macro_rules! scalar_lhs {
    ($t:ty: $($Op:ident::$op:ident),+) => {
        $(
            impl<const N: usize> $Op<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn $op(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    Vector::<$t, N>::splat(self).$op(rhs)
                }
            }

            impl<'a, const N: usize, const M: usize, const P: u16> $Op<View<'a, $t, N, M, P>>
                for $t
            {
                type Output = Vector<$t, N>;

                #[inline]
                fn $op(self, rhs: View<'a, $t, N, M, P>) -> Vector<$t, N> {
                    Vector::<$t, N>::splat(self).$op(rhs)
                }
            }
        )+
    };
}

scalar_lhs!(f32: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
scalar_lhs!(f64: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
scalar_lhs!(bool: BitAnd::bitand, BitOr::bitor, BitXor::bitxor);

macro_rules! int_scalar_lhs {
    ($($t:ty),+) => {
        $(
            scalar_lhs!($t: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem, BitAnd::bitand,
                BitOr::bitor, BitXor::bitxor, Shl::shl, Shr::shr);
        )+
    };
}
int_scalar_lhs!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use crate::{aliases::*, vec2, vec3, vec4, Vec4f};

    #[test]
    fn scalar_division_uses_reciprocal() {
        let mut rng = fastrand::Rng::with_seed(0xd1f);
        for _ in 0..500 {
            let v = vec4(rng.f32(), rng.f32(), rng.f32(), rng.f32()) * 100.0;
            let s = rng.f32() * 10.0 + 0.1;
            let expected = v * (1.0 / s);
            assert_eq!((v / s).map(f32::to_bits), expected.map(f32::to_bits));

            let mut w = v;
            w /= s;
            assert_eq!(w.map(f32::to_bits), expected.map(f32::to_bits));
        }

        // Rounds differently from a true division.
        let third = vec2(5.0f32, 1.0) / 3.0;
        assert_eq!(third.x, 5.0 * (1.0f32 / 3.0));
        assert_ne!(third.x, 5.0f32 / 3.0);

        // Vector divisors divide exactly.
        assert_eq!(vec2(5.0f32, 7.0) / vec2(3.0, 3.0), vec2(5.0 / 3.0, 7.0 / 3.0));
        assert_eq!(ivec2(7, -7) / 2, ivec2(3, -3));
    }

    #[test]
    fn operands_of_every_kind() {
        let a = vec3(1.0f64, 2.0, 3.0);
        let b = vec4(10.0f64, 20.0, 30.0, 40.0);

        assert_eq!(a + b.zyx(), vec3(31.0, 22.0, 13.0));
        assert_eq!(b.xyz() - a, vec3(9.0, 18.0, 27.0));
        assert_eq!(b.xxy() * b.www(), vec3(400.0, 400.0, 800.0));
        assert_eq!(&a * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(a * &a, vec3(1.0, 4.0, 9.0));
        assert_eq!(2.0 * a, vec3(2.0, 4.0, 6.0));
        assert_eq!(1.0 - b.xy(), vec2(-9.0, -19.0));
        assert_eq!(-b.wz(), vec2(-40.0, -30.0));
        assert_eq!(Vec4f::ZERO + 1.0, Vec4f::splat(1.0));
    }

    #[test]
    fn borrowed_and_mutable_views_as_lhs() {
        let mut v = ivec3(1, 2, 3);

        let zy = v.zy();
        assert_eq!(&zy * 2, ivec2(6, 4));
        assert_eq!(-&zy, ivec2(-3, -2));

        let xy = v.xy_mut();
        assert_eq!(&xy + ivec2(10, 20), ivec2(11, 22));
        assert_eq!(-&xy, ivec2(-1, -2));
        assert_eq!(xy - 1, ivec2(0, 1));
        assert_eq!(-v.zx_mut(), ivec2(-3, -1));
        assert_eq!(v.yz_mut() << 1, ivec2(4, 6));

        // Reading through a mutable view leaves the storage alone.
        assert_eq!(v, ivec3(1, 2, 3));

        let mut b = bvec2(true, false);
        assert_eq!(!b.yx_mut(), bvec2(true, false));
        assert_eq!(!&b.xy(), bvec2(false, true));
    }

    #[test]
    fn integer_and_boolean_ops() {
        let v = ivec3(6, -7, 8);
        assert_eq!(v % 4, ivec3(2, -3, 0));
        assert_eq!(v & 3, ivec3(2, 1, 0));
        assert_eq!(v | ivec3(1, 0, 1), ivec3(7, -7, 9));
        assert_eq!(v ^ v, ivec3(0, 0, 0));
        assert_eq!(uvec2(1, 2) << 3, uvec2(8, 16));
        assert_eq!(uvec2(16, 1) >> uvec2(4, 1), uvec2(1, 0));
        assert_eq!(1u32 << uvec2(1, 2), uvec2(2, 4));
        assert_eq!(100 / ivec2(3, 7), ivec2(33, 14));

        let b = bvec3(true, false, true);
        assert_eq!(!b, bvec3(false, true, false));
        assert_eq!(b & bvec3(true, true, false), bvec3(true, false, false));
        assert_eq!(true ^ b, bvec3(false, true, false));
    }

    #[test]
    fn compound_assignment_through_views() {
        let mut v = ivec4(1, 2, 3, 4);
        *v.axis_mut::<0>() += 1;
        let mut wz = v.wz_mut();
        wz += ivec2(10, 20);
        wz *= 2;
        assert_eq!(v, ivec4(2, 2, 46, 28));

        // The right-hand side is read before anything is written.
        let mut v = ivec3(1, 2, 3);
        let zyx = v.zyx().get();
        v.xyz_mut().set(zyx);
        assert_eq!(v, ivec3(3, 2, 1));
        let yx = v.yx().get();
        let mut xy = v.xy_mut();
        xy -= yx;
        assert_eq!(v, ivec3(1, -1, 1));
    }

    #[test]
    fn view_comparisons() {
        let v = ivec4(1, 2, 3, 4);
        assert_eq!(v.xy(), ivec2(1, 2));
        assert_eq!(ivec2(2, 1), v.yx());
        assert_eq!(v.xy(), v.yx().get().yx());
        assert!(v.yx() > v.xy());
        assert!(v.xyz() < ivec3(1, 2, 4));
        assert_ne!(v.zw(), v.wz());
    }
}
