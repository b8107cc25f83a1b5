//! Compile-time swizzle resolution.
//!
//! A swizzle is described by three numbers:
//!
//! - the *operate dimension* `N`: how many components the swizzle yields (1 to 4),
//! - the *memory dimension* `M`: how many components the underlying storage has,
//! - the *pattern* `P`: up to four 4-bit axis selectors packed into a [`u16`], axis `k` in nibble
//!   `k` (so `.zx` is `0x02`: axis 0 reads storage slot 2, axis 1 reads slot 0).
//!
//! [`resolve`] turns these into the per-axis storage indices plus two legality flags. The
//! [`Swizzle`] type exposes the same resolution as associated constants, which is what the views
//! and operators of this crate consult. Illegal swizzles never reach runtime: every view
//! constructor and write path evaluates one of the `ASSERT_*` constants, and an instantiation with
//! a failing assertion is rejected when the program is built.
//!
//! Reading an axis that doesn't exist:
//!
//! ```compile_fail
//! # use glsl_linalg::*;
//! let v = vec2(1.0, 2.0);
//! let _ = v.xyz(); // `z` is outside of a 2-component vector
//! ```
//!
//! Writing through a swizzle that names an axis twice:
//!
//! ```compile_fail
//! # use glsl_linalg::*;
//! let mut v = vec3(1.0, 2.0, 3.0);
//! let _ = v.swizzle_mut::<2, 0x00>(); // `.xx`
//! ```
//!
//! Combining operands of different dimensions:
//!
//! ```compile_fail
//! # use glsl_linalg::*;
//! let _ = vec3(1.0, 2.0, 3.0) + vec2(1.0, 2.0);
//! ```
//!
//! Indexing or taking the address of a view (only canonical vectors support both):
//!
//! ```compile_fail
//! # use glsl_linalg::*;
//! let v = vec3(1.0, 2.0, 3.0);
//! let _ = v.zyx()[0];
//! ```
//!
//! ```compile_fail
//! # use glsl_linalg::*;
//! let v = vec3(1.0, 2.0, 3.0);
//! let _ = v.zyx().as_array();
//! ```
//!
//! Vectors wider than 4 components have no swizzles, even with in-bounds axes:
//!
//! ```compile_fail
//! # use glsl_linalg::*;
//! let v = Vector::from_array([0, 1, 2, 3, 4, 5]);
//! let _ = v.swizzle::<2, 0x54>();
//! ```
//!
//! Views cannot be swizzled again:
//!
//! ```compile_fail
//! # use glsl_linalg::*;
//! let v = vec3(1.0, 2.0, 3.0);
//! let _ = v.zyx().xy();
//! ```

/// The pattern that maps every axis to the storage slot of the same index (`.xyzw`).
pub const IDENTITY: u16 = 0x3210;

/// Result of resolving a swizzle with [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolved {
    /// Storage index of each axis. Only the first *operate dimension* entries are meaningful.
    pub axes: [usize; 4],
    /// Whether two of the active axes read the same storage slot.
    pub has_duplicated_axis: bool,
    /// Whether every active axis is inside the storage.
    pub is_valid: bool,
}

/// Resolves a swizzle pattern against an operate and memory dimension.
///
/// Axes at or beyond `operate` are decoded but do not influence either flag.
///
/// # Examples
///
/// ```
/// # use glsl_linalg::swizzle::*;
/// let zx = resolve(2, 3, 0x02);
/// assert_eq!(zx.axes[..2], [2, 0]);
/// assert!(zx.is_valid);
/// assert!(!zx.has_duplicated_axis);
///
/// // `.xw` on a 3-component vector.
/// assert!(!resolve(2, 3, 0x30).is_valid);
/// ```
pub const fn resolve(operate: usize, memory: usize, pattern: u16) -> Resolved {
    let axes = [
        (pattern & 0xf) as usize,
        (pattern >> 4 & 0xf) as usize,
        (pattern >> 8 & 0xf) as usize,
        (pattern >> 12 & 0xf) as usize,
    ];

    let mut has_duplicated_axis = false;
    let mut is_valid = true;
    let mut k = 0;
    while k < operate && k < 4 {
        if axes[k] >= memory {
            is_valid = false;
        }
        let mut j = 0;
        while j < k {
            if axes[j] == axes[k] {
                has_duplicated_axis = true;
            }
            j += 1;
        }
        k += 1;
    }

    Resolved {
        axes,
        has_duplicated_axis,
        is_valid,
    }
}

/// Packs a list of axes into a swizzle pattern.
///
/// # Examples
///
/// ```
/// # use glsl_linalg::*;
/// const ZYX: u16 = swizzle::pattern(&[2, 1, 0]);
/// let v = vec3(1, 2, 3);
/// assert_eq!(v.swizzle::<3, ZYX>(), vec3(3, 2, 1));
/// ```
pub const fn pattern(axes: &[usize]) -> u16 {
    assert!(axes.len() <= 4, "a swizzle selects at most 4 axes");

    let mut pattern = 0;
    let mut k = 0;
    while k < axes.len() {
        assert!(axes[k] < 16, "swizzle axes are 4-bit selectors");
        pattern |= (axes[k] as u16) << (4 * k);
        k += 1;
    }
    pattern
}

/// Type-level swizzle descriptor: `N` operated axes over `M` stored components, pattern `P`.
///
/// This type only exists to carry associated constants and is never instantiated.
pub enum Swizzle<const N: usize, const M: usize, const P: u16> {}

impl<const N: usize, const M: usize, const P: u16> Swizzle<N, M, P> {
    const RESOLVED: Resolved = resolve(N, M, P);

    /// Storage index of each axis.
    pub const AXES: [usize; 4] = Self::RESOLVED.axes;
    pub const HAS_DUPLICATED_AXIS: bool = Self::RESOLVED.has_duplicated_axis;
    pub const IS_VALID: bool = Self::RESOLVED.is_valid;

    /// Whether both dimensions are within 1..=4 and every axis is inside the storage.
    pub const IS_READABLE: bool = N >= 1 && N <= 4 && M >= 1 && M <= 4 && Self::IS_VALID;

    /// Fails the build unless [`Self::IS_READABLE`] holds.
    pub const ASSERT_READABLE: () = assert!(
        Self::IS_READABLE,
        "swizzle dimensions must be within 1..=4 and select axes inside the vector"
    );

    /// Like [`Self::ASSERT_READABLE`], and additionally fails if an axis is named twice.
    pub const ASSERT_WRITABLE: () = {
        let () = Self::ASSERT_READABLE;
        assert!(
            !Self::HAS_DUPLICATED_AXIS,
            "cannot write through a swizzle that names an axis twice"
        );
    };

    /// Storage index of axis `k`.
    #[inline]
    pub(crate) const fn axis(k: usize) -> usize {
        Self::AXES[k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibbles() {
        let r = resolve(4, 4, 0x1302);
        assert_eq!(r.axes, [2, 0, 3, 1]);
        assert!(r.is_valid);
        assert!(!r.has_duplicated_axis);

        assert_eq!(resolve(4, 4, IDENTITY).axes, [0, 1, 2, 3]);
        assert_eq!(pattern(&[2, 0, 3, 1]), 0x1302);
        assert_eq!(pattern(&[0, 1, 2, 3]), IDENTITY);
        assert_eq!(pattern(&[]), 0);
    }

    #[test]
    fn only_active_axes_count() {
        // `.xx` duplicates, but `.x` with the same pattern does not.
        assert!(resolve(2, 2, 0x00).has_duplicated_axis);
        assert!(!resolve(1, 2, 0x00).has_duplicated_axis);

        // The inactive nibble points far outside of the storage.
        assert!(resolve(1, 1, 0xf0).is_valid);
        assert!(!resolve(2, 1, 0xf0).is_valid);
    }

    #[test]
    fn validity_matches_axis_bounds() {
        for operate in 1..=4 {
            for memory in 1..=4 {
                for pattern in 0..=u16::MAX {
                    let r = resolve(operate, memory, pattern);
                    let in_bounds =
                        (0..operate).all(|k| usize::from(pattern >> (4 * k) & 0xf) < memory);
                    assert_eq!(r.is_valid, in_bounds, "{operate} {memory} {pattern:#06x}");

                    let axes = &r.axes[..operate];
                    let duplicated = (0..operate).any(|k| axes[k + 1..].contains(&axes[k]));
                    assert_eq!(
                        r.has_duplicated_axis, duplicated,
                        "{operate} {memory} {pattern:#06x}"
                    );
                }
            }
        }
    }

    #[test]
    fn type_level() {
        assert_eq!(Swizzle::<3, 4, 0x012>::AXES[..3], [2, 1, 0]);
        assert!(Swizzle::<3, 4, 0x012>::IS_VALID);
        assert!(Swizzle::<2, 4, 0x11>::HAS_DUPLICATED_AXIS);
        assert!(!Swizzle::<2, 2, 0x32>::IS_VALID);
        assert_eq!(Swizzle::<4, 4, IDENTITY>::axis(3), 3);
    }

    #[test]
    fn readable_needs_supported_dimensions() {
        assert!(Swizzle::<2, 4, 0x32>::IS_READABLE);
        assert!(Swizzle::<1, 1, 0x0>::IS_READABLE);

        // In bounds for 6 stored components, but 6 is not a vector size.
        assert!(Swizzle::<2, 6, 0x54>::IS_VALID);
        assert!(!Swizzle::<2, 6, 0x54>::IS_READABLE);
        assert!(!Swizzle::<2, 0, 0x00>::IS_READABLE);
        assert!(!Swizzle::<5, 4, 0x0>::IS_READABLE);
    }
}
