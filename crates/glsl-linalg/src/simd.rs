//! 4-lane floating-point kernels, selected at compile time per target architecture.
//!
//! Only whole-vector `+ - * /` between two 4-element operands is accelerated. Lane operations
//! are plain IEEE-754 arithmetic (no fused multiply-add, no reassociation), so results match the
//! scalar path bit for bit. Other widths and targets without a kernel return [`None`], and the
//! caller falls back to the scalar loop.

use crate::traits::LaneOp;

/// Dispatches a 4-lane `f32` operation; [`None`] when `N != 4` or no kernel exists.
#[inline]
pub(crate) fn f32x4<const N: usize>(
    op: LaneOp,
    lhs: &[f32; N],
    rhs: &[f32; N],
) -> Option<[f32; N]> {
    let lhs: &[f32; 4] = lhs.as_slice().try_into().ok()?;
    let rhs: &[f32; 4] = rhs.as_slice().try_into().ok()?;
    let lanes = arch::f32x4(op, lhs, rhs)?;

    let mut out = [0.0; N];
    out.copy_from_slice(&lanes);
    Some(out)
}

/// Dispatches a 4-lane `f64` operation; [`None`] when `N != 4` or no kernel exists.
#[inline]
pub(crate) fn f64x4<const N: usize>(
    op: LaneOp,
    lhs: &[f64; N],
    rhs: &[f64; N],
) -> Option<[f64; N]> {
    let lhs: &[f64; 4] = lhs.as_slice().try_into().ok()?;
    let rhs: &[f64; 4] = rhs.as_slice().try_into().ok()?;
    let lanes = arch::f64x4(op, lhs, rhs)?;

    let mut out = [0.0; N];
    out.copy_from_slice(&lanes);
    Some(out)
}

#[cfg(target_arch = "x86_64")]
mod arch {
    use core::arch::x86_64::*;

    use crate::traits::LaneOp;

    #[inline]
    pub(super) fn f32x4(op: LaneOp, lhs: &[f32; 4], rhs: &[f32; 4]) -> Option<[f32; 4]> {
        let mut out = [0.0; 4];
        // Safety: SSE is part of the x86_64 baseline; unaligned loads/stores of 4 floats stay
        // within the arrays.
        unsafe {
            let a = _mm_loadu_ps(lhs.as_ptr());
            let b = _mm_loadu_ps(rhs.as_ptr());
            let r = match op {
                LaneOp::Add => _mm_add_ps(a, b),
                LaneOp::Sub => _mm_sub_ps(a, b),
                LaneOp::Mul => _mm_mul_ps(a, b),
                LaneOp::Div => _mm_div_ps(a, b),
            };
            _mm_storeu_ps(out.as_mut_ptr(), r);
        }
        Some(out)
    }

    #[inline]
    pub(super) fn f64x4(op: LaneOp, lhs: &[f64; 4], rhs: &[f64; 4]) -> Option<[f64; 4]> {
        let mut out = [0.0; 4];
        // Safety: SSE2 is part of the x86_64 baseline; each half is 2 doubles within the arrays.
        unsafe {
            for half in [0, 2] {
                let a = _mm_loadu_pd(lhs.as_ptr().add(half));
                let b = _mm_loadu_pd(rhs.as_ptr().add(half));
                let r = match op {
                    LaneOp::Add => _mm_add_pd(a, b),
                    LaneOp::Sub => _mm_sub_pd(a, b),
                    LaneOp::Mul => _mm_mul_pd(a, b),
                    LaneOp::Div => _mm_div_pd(a, b),
                };
                _mm_storeu_pd(out.as_mut_ptr().add(half), r);
            }
        }
        Some(out)
    }
}

#[cfg(target_arch = "aarch64")]
mod arch {
    use core::arch::aarch64::*;

    use crate::traits::LaneOp;

    #[inline]
    pub(super) fn f32x4(op: LaneOp, lhs: &[f32; 4], rhs: &[f32; 4]) -> Option<[f32; 4]> {
        let mut out = [0.0; 4];
        // Safety: NEON is part of the aarch64 baseline.
        unsafe {
            let a = vld1q_f32(lhs.as_ptr());
            let b = vld1q_f32(rhs.as_ptr());
            let r = match op {
                LaneOp::Add => vaddq_f32(a, b),
                LaneOp::Sub => vsubq_f32(a, b),
                LaneOp::Mul => vmulq_f32(a, b),
                LaneOp::Div => vdivq_f32(a, b),
            };
            vst1q_f32(out.as_mut_ptr(), r);
        }
        Some(out)
    }

    #[inline]
    pub(super) fn f64x4(op: LaneOp, lhs: &[f64; 4], rhs: &[f64; 4]) -> Option<[f64; 4]> {
        let mut out = [0.0; 4];
        // Safety: NEON is part of the aarch64 baseline.
        unsafe {
            for half in [0, 2] {
                let a = vld1q_f64(lhs.as_ptr().add(half));
                let b = vld1q_f64(rhs.as_ptr().add(half));
                let r = match op {
                    LaneOp::Add => vaddq_f64(a, b),
                    LaneOp::Sub => vsubq_f64(a, b),
                    LaneOp::Mul => vmulq_f64(a, b),
                    LaneOp::Div => vdivq_f64(a, b),
                };
                vst1q_f64(out.as_mut_ptr().add(half), r);
            }
        }
        Some(out)
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
mod arch {
    use crate::traits::LaneOp;

    #[inline]
    pub(super) fn f32x4(_: LaneOp, _: &[f32; 4], _: &[f32; 4]) -> Option<[f32; 4]> {
        None
    }

    #[inline]
    pub(super) fn f64x4(_: LaneOp, _: &[f64; 4], _: &[f64; 4]) -> Option<[f64; 4]> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_scalar() {
        let mut rng = fastrand::Rng::with_seed(0x51d);
        for _ in 0..1000 {
            let a: [f32; 4] = std::array::from_fn(|_| rng.f32() * 200.0 - 100.0);
            let b: [f32; 4] = std::array::from_fn(|_| rng.f32() * 200.0 - 100.0);
            for (op, scalar) in [
                (LaneOp::Add, (|x, y| x + y) as fn(f32, f32) -> f32),
                (LaneOp::Sub, |x, y| x - y),
                (LaneOp::Mul, |x, y| x * y),
                (LaneOp::Div, |x, y| x / y),
            ] {
                if let Some(lanes) = f32x4(op, &a, &b) {
                    let expected: [f32; 4] = std::array::from_fn(|i| scalar(a[i], b[i]));
                    assert_eq!(lanes.map(f32::to_bits), expected.map(f32::to_bits), "{op:?}");
                }
            }

            let a = a.map(f64::from);
            let b = b.map(f64::from);
            if let Some(lanes) = f64x4(LaneOp::Div, &a, &b) {
                let expected: [f64; 4] = std::array::from_fn(|i| a[i] / b[i]);
                assert_eq!(lanes, expected);
            }
        }
    }

    #[test]
    fn other_widths_fall_back() {
        assert_eq!(f32x4(LaneOp::Add, &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(f64x4(LaneOp::Mul, &[1.0; 2], &[1.0; 2]), None);
    }
}
