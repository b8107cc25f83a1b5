use std::{array, fmt, hash};

use crate::{
    swizzle,
    traits::{Cast, Element, Float, Number, One, Zero},
    vector::{View, ViewMut},
    Vector,
};

mod ops;

macro_rules! shape_aliases {
    ($($name:ident = $c:literal x $r:literal $(, $single:ident)?;)+) => {
        $(
            #[doc = concat!(
                "A matrix with ", stringify!($c), " columns and ", stringify!($r), " rows."
            )]
            pub type $name<T> = Matrix<T, $c, $r>;
            $(
                #[doc = concat!("[`", stringify!($name), "`] with [`f32`] elements.")]
                pub type $single = Matrix<f32, $c, $r>;
            )?
        )+
    };
}

shape_aliases! {
    Mat1 = 1 x 1, Mat1f;
    Mat2 = 2 x 2, Mat2f;
    Mat3 = 3 x 3, Mat3f;
    Mat4 = 4 x 4, Mat4f;
    Mat2x3 = 2 x 3;
    Mat2x4 = 2 x 4;
    Mat3x2 = 3 x 2;
    Mat3x4 = 3 x 4;
    Mat4x2 = 4 x 2;
    Mat4x3 = 4 x 3;
}

/// A column-major matrix with `C` columns and `R` rows, and element type `T`.
///
/// The parameter order matches GLSL's `matCxR`. The matrix is stored as `MC` column vectors of
/// `MR` elements each; `MC` and `MR` default to `C` and `R`. A larger storage shape carries a
/// logically smaller matrix, for example a 3x3 matrix laid out as 4x4 for interop:
/// `Matrix<f32, 3, 3, 4, 4>`. The elements outside the logical `C`x`R` region are padding: they are
/// zero after construction, and no arithmetic, comparison or hash ever reads them. Results of
/// arithmetic are always unpadded (`Matrix<T, C, R>`).
///
/// Both shapes must lie within 1..=4 and the storage must be at least as large as the logical
/// matrix. Other shapes fail to build:
///
/// ```compile_fail
/// # use glsl_linalg::*;
/// let _ = Matrix::<f32, 4, 4, 3, 3>::IDENTITY;
/// ```
///
/// # Construction
///
/// - [`Matrix::from_columns`] and [`Matrix::from_rows`] take exactly `C` columns or `R` rows.
/// - 2D arrays of columns convert with [`From`].
/// - [`Matrix::from_fn`] computes every element from its `(row, col)` position.
/// - [`Matrix::splat`] copies a scalar into every element.
/// - [`Matrix::from_diagonal`] builds a square matrix that is zero off the diagonal.
/// - [`Matrix::from_matrix`] converts the element type and/or padding of a same-shape matrix, and
///   [`Matrix::resize`] changes the shape like GLSL's `mat3(m4)`.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`].
///
/// The constructor functions return unpadded matrices, so only `C` and `R` have to be inferred.
/// [`Matrix::padded`] moves a matrix into padded storage; the constants exist for every storage
/// shape.
///
/// # Element Access
///
/// `m[c]` is column `c` as a vector of the storage height `MR`. [`Matrix::column`] returns the
/// logical `R` rows of a column as a [`View`] instead.
///
/// `m[(row, col)]` is a single element, addressed row first as in mathematical notation. Both
/// indices start at 0.
///
/// ```
/// # use glsl_linalg::*;
/// let mut m = Mat2::from_rows([
///     [5, 6],
///     [7, 8],
/// ]);
/// m[(1, 0)] = -7;
/// assert_eq!(m[(1, 0)], -7);
/// assert_eq!(m[(0, 1)], 6);
/// assert_eq!(m[0], vec2(5, -7));
/// ```
///
/// Indices outside the logical matrix panic, padding included. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`None`] for them:
///
/// ```
/// # use glsl_linalg::*;
/// let m = Matrix::<u8, 3, 1>::from_rows([[9, 8, 7]]).padded::<4, 4>();
/// assert_eq!(m.get(0, 2), Some(&7));
/// assert_eq!(m.get(0, 3), None);
/// assert_eq!(m.get(1, 0), None);
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<T, const C: usize, const R: usize, const MC: usize = C, const MR: usize = R>(
    [Vector<T, MR>; MC],
);

// SAFETY: `Matrix` is a transparent wrapper around an array of `Vector`s, which are themselves
// transparent wrappers around arrays.
unsafe impl<T: bytemuck::Zeroable, const C: usize, const R: usize, const MC: usize, const MR: usize>
    bytemuck::Zeroable for Matrix<T, C, R, MC, MR>
{
}
unsafe impl<T: bytemuck::Pod, const C: usize, const R: usize, const MC: usize, const MR: usize>
    bytemuck::Pod for Matrix<T, C, R, MC, MR>
{
}

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Creates a matrix by calling `f` with the `(row, col)` position of each element.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let m: Mat3x2<usize> = Matrix::from_fn(|row, col| 3 * row + col);
    /// assert_eq!(m.row(1), vec3(3, 4, 5));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        T: Zero,
        F: FnMut(usize, usize) -> T,
    {
        Self::build(f)
    }

    /// Creates a matrix from exactly `C` column vectors.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let m = Mat2x3::from_columns([vec3(1, 2, 3), vec3(4, 5, 6)]);
    /// assert_eq!(m, Matrix::from_rows([[1, 4], [2, 5], [3, 6]]));
    /// ```
    ///
    /// Passing a different number of columns does not compile:
    ///
    /// ```compile_fail
    /// # use glsl_linalg::*;
    /// let _ = Mat3f::from_columns([Vec3f::X, Vec3f::Y]);
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Zero + Copy,
    {
        let columns = columns.map(Into::into);
        Self::build(|row, col| columns[col][row])
    }

    /// Creates a matrix from exactly `R` row vectors, in reading order.
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Zero + Copy,
    {
        let rows = rows.map(Into::into);
        Self::build(|row, col| rows[row][col])
    }

    /// Creates a matrix with every element set to `elem`.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(Mat2x3::splat(7).column(1), vec3(7, 7, 7));
    /// ```
    pub fn splat(elem: T) -> Self
    where
        T: Zero + Copy,
    {
        Self::build(|_, _| elem)
    }

    /// Converts a matrix of the same logical shape, possibly with another element type and
    /// padding.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let padded = Mat2::from_rows([[1, 2], [3, 4]]).padded::<4, 4>();
    /// let m = Mat2f::from_matrix(padded);
    /// assert_eq!(m, Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    /// ```
    pub fn from_matrix<U, const MC2: usize, const MR2: usize>(
        other: Matrix<U, C, R, MC2, MR2>,
    ) -> Self
    where
        T: Zero,
        U: Cast<T> + Copy,
    {
        Self::build(|row, col| other[(row, col)].cast())
    }
}

impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> Matrix<T, C, R, MC, MR> {
    /// Fails the build unless the logical and storage shapes are supported.
    pub const LAYOUT: () = assert!(
        C >= 1 && R >= 1 && C <= MC && R <= MR && MC <= 4 && MR <= 4,
        "matrix shape must be within 1..=4 and fit its storage"
    );

    /// Length of the main diagonal.
    const DIAGONAL: usize = if C < R { C } else { R };

    /// Fills the logical region from `f` and zeroes the padding.
    fn build<F>(mut f: F) -> Self
    where
        T: Zero,
        F: FnMut(usize, usize) -> T,
    {
        let () = Self::LAYOUT;
        Self(array::from_fn(|col| {
            Vector::from_fn(|row| if col < C && row < R { f(row, col) } else { T::ZERO })
        }))
    }

    /// Lays the matrix out in `MC2` columns of `MR2` elements, with zeroed padding.
    ///
    /// The constructors produce unpadded matrices; this is how a padded one is made.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let m = Mat3f::IDENTITY.padded::<4, 4>();
    /// assert_eq!(m[2], vec4(0.0, 0.0, 1.0, 0.0));
    /// assert_eq!(m.as_columns()[3], Vec4f::ZERO);
    /// assert_eq!(m.padded::<3, 3>(), Mat3f::IDENTITY);
    /// ```
    ///
    /// The storage can't be smaller than the matrix:
    ///
    /// ```compile_fail
    /// # use glsl_linalg::*;
    /// let _ = Mat3f::IDENTITY.padded::<2, 4>();
    /// ```
    pub fn padded<const MC2: usize, const MR2: usize>(&self) -> Matrix<T, C, R, MC2, MR2>
    where
        T: Zero + Copy,
    {
        Matrix::build(|row, col| self[(row, col)])
    }

    /// Converts to a `C2`x`R2` matrix like GLSL's matrix-from-matrix constructors.
    ///
    /// Elements that `self` doesn't have are taken from the identity matrix.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let m = Mat2::from_rows([[2, 3], [4, 5]]);
    /// assert_eq!(m.resize::<3, 3>(), Matrix::from_rows([
    ///     [2, 3, 0],
    ///     [4, 5, 0],
    ///     [0, 0, 1],
    /// ]));
    /// assert_eq!(m.resize::<1, 1>(), Mat1::splat(2));
    /// ```
    pub fn resize<const C2: usize, const R2: usize>(&self) -> Matrix<T, C2, R2>
    where
        T: Zero + One + Copy,
    {
        Matrix::from_fn(|row, col| match self.get(row, col) {
            Some(&elem) => elem,
            None if row == col => T::ONE,
            None => T::ZERO,
        })
    }

    /// Applies `f` to every stored element, padding included.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let m = Mat2::from_rows([[1, -2], [-3, 4]]).map(i32::signum);
    /// assert_eq!(m, Matrix::from_rows([[1, -1], [-1, 1]]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, C, R, MC, MR>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Mirrors the matrix along its main diagonal.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let m = Mat3x2::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// let t: Mat2x3<i32> = m.transpose();
    /// assert_eq!(t.column(0), m.row(0));
    /// assert_eq!(t.row(2), vec2(3, 6));
    /// ```
    pub fn transpose(&self) -> Matrix<T, R, C>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns the logical rows of column `col` as a read-only view.
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let m = Mat2::from_rows([[1, 2], [3, 4]]).padded::<4, 4>();
    /// assert_eq!(m.column(1), vec2(2, 4));
    /// assert_eq!(m[1], vec4(2, 4, 0, 0));
    /// ```
    pub fn column(&self, col: usize) -> View<'_, T, R, MR, { swizzle::IDENTITY }> {
        self.0[..C][col].swizzle()
    }

    /// Returns the logical rows of column `col` as a writable view.
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    pub fn column_mut(&mut self, col: usize) -> ViewMut<'_, T, R, MR, { swizzle::IDENTITY }> {
        self.0[..C][col].swizzle_mut()
    }

    /// Returns row `row` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        assert!(row < R, "row index {row} out of bounds for a matrix with {R} rows");
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Returns the element at `(row, col)`, or [`None`] outside the logical matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        (row < R && col < C).then(|| &self.0[col][row])
    }

    /// Returns the element at `(row, col)` mutably, or [`None`] outside the logical matrix.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let mut m = Mat2::<i32>::IDENTITY;
    /// if let Some(elem) = m.get_mut(0, 1) {
    ///     *elem = 5;
    /// }
    /// assert!(m.get_mut(2, 0).is_none());
    /// assert_eq!(m, Matrix::from_rows([[1, 5], [0, 1]]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < R && col < C {
            Some(&mut self.0[col][row])
        } else {
            None
        }
    }

    /// Returns the stored columns, including padding.
    #[inline]
    pub fn as_columns(&self) -> &[Vector<T, MR>; MC] {
        &self.0
    }

    /// Iterates over the elements of the logical region in column-major order.
    pub(crate) fn elems(&self) -> impl Iterator<Item = &T> + '_ {
        self.0[..C].iter().flat_map(|column| &column.as_slice()[..R])
    }

    /// GLSL `++m`: adds one to every element and returns the new value.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let mut m = Mat2f::IDENTITY;
    /// assert_eq!(m.post_increment(), Mat2f::IDENTITY);
    /// assert_eq!(m, Matrix::from_rows([[2.0, 1.0], [1.0, 2.0]]));
    /// ```
    pub fn increment(&mut self) -> Matrix<T, C, R>
    where
        T: Number,
    {
        *self = Self::build(|row, col| self[(row, col)] + T::ONE);
        self.canonical()
    }

    /// GLSL `--m`: subtracts one from every element and returns the new value.
    pub fn decrement(&mut self) -> Matrix<T, C, R>
    where
        T: Number,
    {
        *self = Self::build(|row, col| self[(row, col)] - T::ONE);
        self.canonical()
    }

    /// GLSL `m++`: adds one to every element and returns the previous value.
    pub fn post_increment(&mut self) -> Matrix<T, C, R>
    where
        T: Number,
    {
        let before = self.canonical();
        self.increment();
        before
    }

    /// GLSL `m--`: subtracts one from every element and returns the previous value.
    pub fn post_decrement(&mut self) -> Matrix<T, C, R>
    where
        T: Number,
    {
        let before = self.canonical();
        self.decrement();
        before
    }

    /// Copies the logical region into an unpadded matrix.
    ///
    /// Matrices only compare equal to matrices with the same storage shape, so padded matrices
    /// are compared through this.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let padded = Matrix::<f32, 3, 3, 4, 4>::IDENTITY;
    /// assert_eq!(padded.canonical(), Mat3f::IDENTITY);
    /// ```
    #[inline]
    pub fn canonical(&self) -> Matrix<T, C, R>
    where
        T: Zero + Copy,
    {
        self.padded()
    }
}

/// Prints one matrix row inline, also in `{:#?}` output.
struct InlineRow<'a, T, const C: usize>([&'a T; C]);

impl<T: fmt::Debug, const C: usize> fmt::Debug for InlineRow<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem:?}")?;
        }
        f.write_str("]")
    }
}

/// Prints the logical rows in reading order, `[[1, 2], [3, 4]]`.
impl<T: fmt::Debug, const C: usize, const R: usize, const MC: usize, const MR: usize> fmt::Debug
    for Matrix<T, C, R, MC, MR>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..R).map(|row| InlineRow::<T, C>(array::from_fn(|col| &self.0[col][row])));
        f.debug_list().entries(rows).finish()
    }
}

impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> hash::Hash
    for Matrix<T, C, R, MC, MR>
where
    T: hash::Hash,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.elems().for_each(|elem| elem.hash(state));
    }
}

impl<T: Zero + Copy, const C: usize, const R: usize, const MC: usize, const MR: usize>
    Matrix<T, C, R, MC, MR>
{
    /// The all-zero matrix.
    pub const ZERO: Self = {
        let () = Self::LAYOUT;
        Self([Vector::ZERO; MC])
    };
}

impl<T: Zero + One + Copy, const C: usize, const R: usize, const MC: usize, const MR: usize>
    Matrix<T, C, R, MC, MR>
{
    /// Ones on the main diagonal, zero elsewhere.
    ///
    /// For non-square shapes the diagonal stops at the shorter dimension, like GLSL's `matCxR(1)`.
    pub const IDENTITY: Self = {
        let () = Self::LAYOUT;
        let mut storage = [[T::ZERO; MR]; MC];
        let mut i = 0;
        while i < Self::DIAGONAL {
            storage[i][i] = T::ONE;
            i += 1;
        }

        let mut columns = [Vector::ZERO; MC];
        let mut col = 0;
        while col < MC {
            columns[col] = Vector::from_array(storage[col]);
            col += 1;
        }
        Self(columns)
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Creates a matrix with `diag` on the main diagonal and zero elsewhere.
    ///
    /// Square only, so that `N` can be inferred from `diag`. [`Matrix::from_fn`] covers other
    /// shapes.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let scale = Matrix::from_diagonal(vec3(2.0, 3.0, 1.0));
    /// assert_eq!(scale * vec3(1.0, 1.0, 5.0), vec3(2.0, 3.0, 5.0));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::build(|row, col| if row == col { diag[row] } else { T::ZERO })
    }
}

impl<T, const N: usize, const MC: usize, const MR: usize> Matrix<T, N, N, MC, MR> {
    /// Returns the main diagonal.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// let m = Mat3::from_fn(|row, col| row * 3 + col);
    /// assert_eq!(m.into_diagonal(), vec3(0, 4, 8));
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Sum of the main diagonal.
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(Matrix::from_diagonal([4, -1, 2]).trace(), 5);
    /// assert_eq!(Mat4f::IDENTITY.trace(), 4.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).map(|i| self[(i, i)]).fold(T::ZERO, |sum, elem| sum + elem)
    }
}

impl<T, const C: usize, const R: usize> From<[[T; R]; C]> for Matrix<T, C, R>
where
    T: Zero + Copy,
{
    /// Creates a matrix from an array of columns.
    #[inline]
    fn from(columns: [[T; R]; C]) -> Self {
        Self::from_columns(columns)
    }
}

impl<T, const C: usize, const R: usize, const MC: usize, const MR: usize> Default
    for Matrix<T, C, R, MC, MR>
where
    T: Default + Zero,
{
    fn default() -> Self {
        Self::build(|_, _| T::default())
    }
}

/// Determinant and inverse of square matrices with a closed-form solution.
///
/// Implemented for 2x2, 3x3 and 4x4 matrices with any padding.
pub trait SquareMatrix {
    type Elem;

    /// The unpadded matrix type returned by [`SquareMatrix::inverse`].
    type Canonical;

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    fn determinant(&self) -> Self::Elem;

    /// Computes the inverse matrix.
    ///
    /// Inverting a singular matrix (determinant 0) doesn't panic: the result follows IEEE-754
    /// semantics and contains infinities or NaNs.
    fn inverse(&self) -> Self::Canonical
    where
        Self::Elem: Float;
}

fn log_singular<T: Number>(det: T, n: usize) {
    if det == T::ZERO {
        log::debug!("inverting a singular {n}x{n} matrix");
    }
}

impl<T: Number + Element, const MC: usize, const MR: usize> SquareMatrix
    for Matrix<T, 2, 2, MC, MR>
{
    type Elem = T;
    type Canonical = Mat2<T>;

    #[inline]
    fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Inverts this 2x2 matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(Mat2f::IDENTITY.inverse(), Mat2f::IDENTITY);
    /// let m = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
    /// assert_approx_eq!(m * m.inverse(), Mat2f::IDENTITY);
    /// ```
    fn inverse(&self) -> Mat2<T>
    where
        T: Float,
    {
        let det = self.determinant();
        log_singular(det, 2);

        let (a, b) = (self[(0, 0)], self[(1, 0)]);
        let (c, d) = (self[(0, 1)], self[(1, 1)]);
        Mat2::from_columns([[d, -b], [-c, a]]) * (T::ONE / det)
    }
}

impl<T: Number + Element, const MC: usize, const MR: usize> SquareMatrix
    for Matrix<T, 3, 3, MC, MR>
{
    type Elem = T;
    type Canonical = Mat3<T>;

    fn determinant(&self) -> T {
        let [a, b, c] = self.columns3();
        a.dot(b.cross(c))
    }

    /// Inverts this 3x3 matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(Mat3f::IDENTITY.inverse(), Mat3f::IDENTITY);
    /// ```
    fn inverse(&self) -> Mat3<T>
    where
        T: Float,
    {
        let [a, b, c] = self.columns3();
        let det = a.dot(b.cross(c));
        log_singular(det, 3);

        let inv_det = T::ONE / det;
        Mat3::from_rows([
            b.cross(c) * inv_det,
            c.cross(a) * inv_det,
            a.cross(b) * inv_det,
        ])
    }
}

impl<T: Copy, const MC: usize, const MR: usize> Matrix<T, 3, 3, MC, MR> {
    fn columns3(&self) -> [Vector<T, 3>; 3] {
        array::from_fn(|col| Vector::from_fn(|row| self[(row, col)]))
    }
}

impl<T: Copy, const MC: usize, const MR: usize> Matrix<T, 4, 4, MC, MR> {
    /// Splits the matrix into the upper 3 rows of each column and the bottom row.
    fn split4(&self) -> ([Vector<T, 3>; 4], [T; 4]) {
        (
            array::from_fn(|col| Vector::from_fn(|row| self[(row, col)])),
            array::from_fn(|col| self[(3, col)]),
        )
    }
}

impl<T: Number + Element, const MC: usize, const MR: usize> SquareMatrix
    for Matrix<T, 4, 4, MC, MR>
{
    type Elem = T;
    type Canonical = Mat4<T>;

    /// Expands the determinant in 2x2 minors of the upper and lower halves.
    fn determinant(&self) -> T {
        let ([a, b, c, d], [x, y, z, w]) = self.split4();
        let s = a.cross(b);
        let t = c.cross(d);
        let u = a * y - b * x;
        let v = c * w - d * z;
        s.dot(v) + t.dot(u)
    }

    /// Inverts this 4x4 matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glsl_linalg::*;
    /// assert_eq!(Mat4f::IDENTITY.inverse(), Mat4f::IDENTITY);
    /// let scale = Mat4f::from_diagonal([2.0, 4.0, 8.0, 1.0]);
    /// assert_eq!(scale.inverse(), Mat4f::from_diagonal([0.5, 0.25, 0.125, 1.0]));
    /// ```
    fn inverse(&self) -> Mat4<T>
    where
        T: Float,
    {
        let ([a, b, c, d], [x, y, z, w]) = self.split4();
        let mut s = a.cross(b);
        let mut t = c.cross(d);
        let mut u = a * y - b * x;
        let mut v = c * w - d * z;

        let det = s.dot(v) + t.dot(u);
        log_singular(det, 4);

        let inv_det = T::ONE / det;
        s *= inv_det;
        t *= inv_det;
        u *= inv_det;
        v *= inv_det;

        let r0 = b.cross(v) + t * y;
        let r1 = v.cross(a) - t * x;
        let r2 = d.cross(u) + s * w;
        let r3 = u.cross(c) - s * z;

        Mat4::from_rows([
            Vector::from((r0, -b.dot(t))),
            Vector::from((r1, a.dot(t))),
            Vector::from((r2, -d.dot(s))),
            Vector::from((r3, c.dot(s))),
        ])
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::hash_map::RandomState, hash::BuildHasher};

    use crate::{approx::ApproxEq, assert_approx_eq, test, vec2, vec3, vec4};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat3x2::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat3x2::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat2::from([[1, 2], [3, 4]]),
            Mat2::from_columns([vec2(1, 2), vec2(3, 4)])
        );
    }

    #[test]
    fn constructors_infer_unpadded_storage() {
        let m = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let _: Mat2<f64> = m;
        assert_approx_eq!(m.inverse(), Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]]));
        assert_eq!(m, Matrix::from_columns([[4.0, 2.0], [7.0, 6.0]]));

        let p: Matrix<f64, 2, 2, 4, 4> = m.padded();
        assert_eq!(p.as_columns()[0], vec4(4.0, 2.0, 0.0, 0.0));
        assert_eq!(p.canonical(), m);
        assert_eq!(Mat2::<f64>::from_matrix(p), m);
        assert_approx_eq!(p.inverse(), m.inverse());
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );

        let padded = mat.padded::<4, 4>();
        assert_eq!(format!("{:?}", padded), "[[0, 1], [2, 3]]");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Matrix::<f32, 3, 3, 4, 4>::IDENTITY[3], Vector::ZERO);
        assert_eq!(Matrix::<f32, 3, 3, 4, 4>::IDENTITY.canonical(), Mat3f::IDENTITY);
        assert_eq!(Mat3x2::<i32>::IDENTITY.row(1), vec3(0, 1, 0));
    }

    #[test]
    fn padding_is_ignored() {
        let mut a = Mat2::from_rows([[1, 2], [3, 4]]).padded::<4, 4>();
        let b = a;
        a.0[3] = vec4(9, 9, 9, 9);
        a.0[0][3] = 9;
        assert_eq!(a, b);
        assert_eq!(a.canonical(), Mat2::from_rows([[1, 2], [3, 4]]));
        assert_eq!(a + b, Mat2::from_rows([[2, 4], [6, 8]]));

        let state = RandomState::new();
        assert_eq!(state.hash_one(a), state.hash_one(b));
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 1],
        ]));

        let smaller = mat.resize::<2, 1>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn conversions() {
        let m = Matrix::<u8, 2, 3>::from_fn(|row, col| (row + col) as u8);
        let f: Matrix<f64, 2, 3, 4, 4> = Mat2x3::<f64>::from_matrix(m).padded();
        assert_eq!(f.column(1), vec3(1.0, 2.0, 3.0));
        assert_eq!(Mat2::splat(5)[0], vec2(5, 5));
    }

    #[test]
    fn column_views() {
        let mut m = Mat3::<i32>::IDENTITY;
        m.column_mut(2).set(vec3(7, 8, 9));
        let doubled = m.column(2).get() * 2;
        m.column_mut(0).set(doubled);
        assert_eq!(m.row(0), vec3(14, 0, 7));
        assert_eq!(m.row(2), vec3(18, 0, 9));
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix::<f64, 3, 3, 4, 4>::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0,  5],
            [2, 1, 4, -3],
            [1, 0, 5,  0],
        ]);
        assert_eq!(testmat.determinant(), 30);
        assert_eq!(testmat.transpose().determinant(), 30);
    }

    fn random_matrix<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, N, N> {
        Matrix::from_fn(|_, _| rng.f64() * 4.0 - 2.0)
    }

    #[test]
    fn inverse_round_trip() {
        let mut rng = fastrand::Rng::with_seed(0x1a7);
        for _ in 0..200 {
            let m = random_matrix::<2>(&mut rng);
            if m.determinant().abs() > 1e-3 {
                assert_approx_eq!(m * m.inverse(), Mat2::IDENTITY).abs(1e-9);
            }
            let m = random_matrix::<3>(&mut rng);
            if m.determinant().abs() > 1e-3 {
                assert_approx_eq!(m * m.inverse(), Mat3::IDENTITY).abs(1e-9);
            }
            let m = random_matrix::<4>(&mut rng);
            if m.determinant().abs() > 1e-3 {
                assert_approx_eq!(m * m.inverse(), Mat4::IDENTITY).abs(1e-9);
                assert_approx_eq!(m.inverse() * m, Mat4::IDENTITY).abs(1e-9);
            }
        }
    }

    #[test]
    fn singular_inverse() {
        test::init_logger();

        let m = Mat2f::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        let inv = m.inverse();
        assert!(inv.elems().all(|e| !e.is_finite()));
        assert!(!inv.abs_diff_eq(&Mat2f::IDENTITY, 1.0));
    }
}
