//! Operators and comparisons for [`Matrix`].
//!
//! Every operation reads the logical `C`x`R` region only and returns an unpadded matrix, so the
//! operands of a binary operator may use different padding.

use std::{
    cmp::Ordering,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use crate::{
    approx::ApproxEq,
    swizzle::Swizzle,
    traits::{Element, Number, ScalarDiv, Zero},
    vector::{View, ViewMut},
    Matrix, Vector,
};

/// Column access. The column has the full storage height `MR`.
impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> Index<usize>
    for Matrix<T, C, R, MC, MR>
{
    type Output = Vector<T, MR>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[..C][col]
    }
}

impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> IndexMut<usize>
    for Matrix<T, C, R, MC, MR>
{
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[..C][col]
    }
}

impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> Index<(usize, usize)>
    for Matrix<T, C, R, MC, MR>
{
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < R, "row index {row} out of bounds for a matrix with {R} rows");
        &self.0[..C][col][row]
    }
}

impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> IndexMut<(usize, usize)>
    for Matrix<T, C, R, MC, MR>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < R, "row index {row} out of bounds for a matrix with {R} rows");
        &mut self.0[..C][col][row]
    }
}

/// Compares the logical elements. Padding is ignored.
impl<T, U, const C: usize, const R: usize, const MC: usize, const MR: usize>
    PartialEq<Matrix<U, C, R, MC, MR>> for Matrix<T, C, R, MC, MR>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, C, R, MC, MR>) -> bool {
        self.elems().eq(other.elems())
    }
}

impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> Eq
    for Matrix<T, C, R, MC, MR>
where
    T: Eq,
{
}

/// Lexicographic order over the elements, column by column.
impl<T, U, const C: usize, const R: usize, const MC: usize, const MR: usize>
    PartialOrd<Matrix<U, C, R, MC, MR>> for Matrix<T, C, R, MC, MR>
where
    T: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &Matrix<U, C, R, MC, MR>) -> Option<Ordering> {
        self.elems().partial_cmp(other.elems())
    }
}

impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> Ord
    for Matrix<T, C, R, MC, MR>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.elems().cmp(other.elems())
    }
}

impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> ApproxEq
    for Matrix<T, C, R, MC, MR>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> Neg
    for Matrix<T, C, R, MC, MR>
where
    T: Neg<Output = T> + Zero + Copy,
{
    type Output = Matrix<T, C, R>;

    fn neg(self) -> Self::Output {
        Matrix::from_fn(|row, col| -self[(row, col)])
    }
}

// Column-wise `matrix op matrix` for operators that GLSL defines component-wise.
macro_rules! matrix_op {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident) => {
        impl<
                T,
                const C: usize,
                const R: usize,
                const MC: usize,
                const MR: usize,
                const MC2: usize,
                const MR2: usize,
            > $Op<Matrix<T, C, R, MC2, MR2>> for Matrix<T, C, R, MC, MR>
        where
            T: Element + Zero + $Op<Output = T>,
        {
            type Output = Matrix<T, C, R>;

            fn $op(self, rhs: Matrix<T, C, R, MC2, MR2>) -> Matrix<T, C, R> {
                let columns: [Vector<T, R>; C] =
                    std::array::from_fn(|col| self.column(col).$op(rhs.column(col)));
                Matrix::from_columns(columns)
            }
        }

        impl<
                T,
                const C: usize,
                const R: usize,
                const MC: usize,
                const MR: usize,
                const MC2: usize,
                const MR2: usize,
            > $OpAssign<Matrix<T, C, R, MC2, MR2>> for Matrix<T, C, R, MC, MR>
        where
            T: Element + Zero + $Op<Output = T>,
        {
            fn $op_assign(&mut self, rhs: Matrix<T, C, R, MC2, MR2>) {
                for col in 0..C {
                    self.column_mut(col).$op_assign(rhs.column(col));
                }
            }
        }
    };
}

matrix_op!(Add::add, AddAssign::add_assign);
matrix_op!(Sub::sub, SubAssign::sub_assign);

// `matrix op scalar`, applied to every element.
macro_rules! scalar_op {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, T: $($bound:tt)+) => {
        impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> $Op<T>
            for Matrix<T, C, R, MC, MR>
        where
            T: Zero + $($bound)+,
        {
            type Output = Matrix<T, C, R>;

            fn $op(self, rhs: T) -> Matrix<T, C, R> {
                let columns: [Vector<T, R>; C] =
                    std::array::from_fn(|col| self.column(col).$op(rhs));
                Matrix::from_columns(columns)
            }
        }

        impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> $OpAssign<T>
            for Matrix<T, C, R, MC, MR>
        where
            T: Zero + $($bound)+,
        {
            fn $op_assign(&mut self, rhs: T) {
                for col in 0..C {
                    self.column_mut(col).$op_assign(rhs);
                }
            }
        }
    };
}

scalar_op!(Add::add, AddAssign::add_assign, T: Element + Add<Output = T>);
scalar_op!(Sub::sub, SubAssign::sub_assign, T: Element + Sub<Output = T>);
scalar_op!(Mul::mul, MulAssign::mul_assign, T: Element + Mul<Output = T>);
scalar_op!(Div::div, DivAssign::div_assign, T: Element + ScalarDiv);

/// Matrix * column vector.
impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> Mul<Vector<T, C>>
    for Matrix<T, C, R, MC, MR>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * swizzled column vector.
impl<
        'a,
        T,
        const C: usize,
        const R: usize,
        const MC: usize,
        const MR: usize,
        const M: usize,
        const P: u16,
    > Mul<View<'a, T, C, M, P>> for Matrix<T, C, R, MC, MR>
where
    T: Number,
{
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, rhs: View<'a, T, C, M, P>) -> Self::Output {
        self * rhs.get()
    }
}

/// Matrix * Matrix.
///
/// A `C`x`R` matrix multiplied with a `K`x`C` matrix yields a `K`x`R` matrix.
impl<
        T,
        const C: usize,
        const R: usize,
        const K: usize,
        const MC: usize,
        const MR: usize,
        const MC2: usize,
        const MR2: usize,
    > Mul<Matrix<T, K, C, MC2, MR2>> for Matrix<T, C, R, MC, MR>
where
    T: Number,
{
    type Output = Matrix<T, K, R>;

    fn mul(self, rhs: Matrix<T, K, C, MC2, MR2>) -> Self::Output {
        Matrix::from_fn(|row, col| {
            (0..C).fold(T::ZERO, |acc, i| acc + self[(row, i)] * rhs[(i, col)])
        })
    }
}

/// In-place multiplication with a square matrix. The product is computed into a temporary first.
impl<T, const N: usize, const MC: usize, const MR: usize, const MC2: usize, const MR2: usize>
    MulAssign<Matrix<T, N, N, MC2, MR2>> for Matrix<T, N, N, MC, MR>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, N, N, MC2, MR2>) {
        let product = *self * rhs;
        *self = product.padded::<MC, MR>();
    }
}

/// Row vector * Matrix.
///
/// Component `c` of the result is the dot product of the vector with column `c`, which equals
/// `transpose(m) * v`.
impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize>
    Mul<Matrix<T, C, R, MC, MR>> for Vector<T, R>
where
    T: Number,
{
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, C, R, MC, MR>) -> Self::Output {
        Vector::from_fn(|col| self.dot(rhs.column(col)))
    }
}

/// Swizzled row vector * Matrix.
impl<
        'a,
        T,
        const C: usize,
        const R: usize,
        const MC: usize,
        const MR: usize,
        const M: usize,
        const P: u16,
    > Mul<Matrix<T, C, R, MC, MR>> for View<'a, T, R, M, P>
where
    T: Number,
{
    type Output = Vector<T, C>;

    #[inline]
    fn mul(self, rhs: Matrix<T, C, R, MC, MR>) -> Self::Output {
        self.get() * rhs
    }
}

/// `v *= m` stores the row-vector product `v * m`.
impl<T, const N: usize, const MC: usize, const MR: usize> MulAssign<Matrix<T, N, N, MC, MR>>
    for Vector<T, N>
where
    T: Number,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, N, N, MC, MR>) {
        *self = *self * rhs;
    }
}

impl<'a, T, const N: usize, const M: usize, const P: u16, const MC: usize, const MR: usize>
    MulAssign<Matrix<T, N, N, MC, MR>> for ViewMut<'a, T, N, M, P>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, N, N, MC, MR>) {
        let () = Swizzle::<N, M, P>::ASSERT_WRITABLE;
        let value = self.get() * rhs;
        self.set(value);
    }
}

// `scalar op matrix`, applied to every element.
macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            scalar_lhs!(@op $t: Add::add, Sub::sub, Mul::mul, Div::div);
        )+
    };
    (@op $t:ty: $($Op:ident::$op:ident),+) => {
        $(
            impl<const C: usize, const R: usize, const MC: usize, const MR: usize>
                $Op<Matrix<$t, C, R, MC, MR>> for $t
            {
                type Output = Matrix<$t, C, R>;

                fn $op(self, rhs: Matrix<$t, C, R, MC, MR>) -> Matrix<$t, C, R> {
                    Matrix::from_fn(|row, col| $Op::$op(self, rhs[(row, col)]))
                }
            }
        )+
    };
}

scalar_lhs!(f32, f64);
