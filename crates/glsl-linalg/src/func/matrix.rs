//! Matrix functions.

use crate::{
    matrix::SquareMatrix,
    operand::Components,
    traits::{Float, Number, Zero},
    Matrix, Vector,
};

/// Multiplies two matrices component by component.
///
/// For the linear algebraic product use the `*` operator.
///
/// ```
/// # use glsl_linalg::*;
/// let a = Matrix::from_rows([[1, 2], [3, 4]]);
/// let b = Matrix::from_rows([[5, 6], [7, 8]]);
/// assert_eq!(matrix_comp_mult(a, b), Matrix::from_rows([[5, 12], [21, 32]]));
/// ```
#[doc(alias = "matrixCompMult")]
pub fn matrix_comp_mult<
    T,
    const C: usize,
    const R: usize,
    const MC: usize,
    const MR: usize,
    const MC2: usize,
    const MR2: usize,
>(
    x: Matrix<T, C, R, MC, MR>,
    y: Matrix<T, C, R, MC2, MR2>,
) -> Matrix<T, C, R>
where
    T: Number,
{
    Matrix::from_fn(|row, col| x[(row, col)] * y[(row, col)])
}

/// Treats `c` as a column vector and `r` as a row vector and returns their linear algebraic
/// product, a matrix with as many rows as `c` has components and as many columns as `r`.
///
/// ```
/// # use glsl_linalg::*;
/// let m = outer_product(vec3(1, 2, 3), vec2(10, 20));
/// assert_eq!(m, Matrix::from_rows([
///     [10, 20],
///     [20, 40],
///     [30, 60],
/// ]));
/// ```
#[doc(alias = "outerProduct")]
pub fn outer_product<A, B, const C: usize, const R: usize>(c: A, r: B) -> Matrix<A::Elem, C, R>
where
    A: Components<Map<()> = Vector<(), R>>,
    A::Elem: Number,
    B: Components<Elem = A::Elem, Map<()> = Vector<(), C>>,
{
    Matrix::from_fn(|row, col| c.component(row) * r.component(col))
}

/// Swaps rows and columns.
///
/// ```
/// # use glsl_linalg::*;
/// let m = Mat2x3::from_rows([[1, 2], [3, 4], [5, 6]]);
/// assert_eq!(transpose(m), Matrix::from_rows([[1, 3, 5], [2, 4, 6]]));
/// assert_eq!(transpose(transpose(m)), m);
/// ```
pub fn transpose<T, const C: usize, const R: usize, const MC: usize, const MR: usize>(
    m: Matrix<T, C, R, MC, MR>,
) -> Matrix<T, R, C>
where
    T: Zero + Copy,
{
    m.transpose()
}

/// Determinant of a 2x2, 3x3 or 4x4 matrix.
///
/// ```
/// # use glsl_linalg::*;
/// assert_eq!(determinant(Mat3f::IDENTITY), 1.0);
/// assert_eq!(determinant(Matrix::from_rows([[1, 2], [3, 4]])), -2);
/// ```
pub fn determinant<M: SquareMatrix>(m: M) -> M::Elem {
    m.determinant()
}

/// Inverse of a 2x2, 3x3 or 4x4 matrix.
///
/// A singular matrix produces infinities or NaNs.
///
/// ```
/// # use glsl_linalg::*;
/// let m = Matrix::from_rows([[2.0, 0.0], [0.0, 4.0]]);
/// assert_eq!(inverse(m), Matrix::from_rows([[0.5, 0.0], [0.0, 0.25]]));
/// ```
pub fn inverse<M>(m: M) -> M::Canonical
where
    M: SquareMatrix,
    M::Elem: Float,
{
    m.inverse()
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_approx_eq,
        matrix::{Mat2, Mat3, Mat3f, Mat4},
        vec3, vec4,
    };

    use super::*;

    fn random<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, N, N> {
        Matrix::from_fn(|_, _| rng.f64() * 10.0 - 5.0)
    }

    #[test]
    fn inverse_of_inverse() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..100 {
            let m = random::<2>(&mut rng);
            if determinant(m).abs() > 1e-2 {
                assert_approx_eq!(inverse(inverse(m)), m).abs(1e-9);
                assert_approx_eq!(m * inverse(m), Mat2::IDENTITY).abs(1e-9);
            }
            let m = random::<3>(&mut rng);
            if determinant(m).abs() > 1e-2 {
                assert_approx_eq!(inverse(inverse(m)), m).abs(1e-8);
                assert_approx_eq!(m * inverse(m), Mat3::IDENTITY).abs(1e-9);
            }
            let m = random::<4>(&mut rng);
            if determinant(m).abs() > 1e-2 {
                assert_approx_eq!(inverse(inverse(m)), m).abs(1e-7);
                assert_approx_eq!(m * inverse(m), Mat4::IDENTITY).abs(1e-9);
            }
        }
    }

    #[test]
    fn padded_inverse() {
        let m = Mat3f::from_rows([
            [2.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 4.0, 0.0],
        ])
        .padded::<4, 4>();
        let inv: Mat3<f32> = inverse(m);
        assert_eq!(inv * vec3(2.0, 1.0, 4.0), vec3(1.0, 1.0, 1.0));
        assert_eq!(determinant(m), -8.0);
    }

    #[test]
    fn structural() {
        let m: Mat4<i32> = Matrix::from_fn(|row, col| (row * 4 + col) as i32);
        assert_eq!(transpose(transpose(m)), m);
        assert_eq!(matrix_comp_mult(m, Mat4::IDENTITY).into_diagonal(), vec4(0, 5, 10, 15));

        let outer = outer_product(vec4(1, 2, 3, 4).xy(), vec3(1, 0, -1));
        assert_eq!(outer.row(1), vec3(2, 0, -2));
        assert_eq!(outer * vec3(1, 1, 1), vec4(0, 0, 0, 0).xy());
    }
}
