//! GLSL type names.
//!
//! The lower-case aliases name the same types as their GLSL counterparts: `vecN` holds [`f32`],
//! `dvecN` [`f64`], `ivecN` [`i32`], `uvecN` [`u32`] and `bvecN` [`bool`]; `matCxR` is a
//! matrix with `C` columns and `R` rows. Every vector alias has a constructor function of the
//! same name (`vec3(..)` is generic and also covers the `ivec3`/`dvec3` cases).
//!
//! ```
//! # use glsl_linalg::*;
//! let normal: vec3 = vec3(0.0, 1.0, 0.0);
//! let cell: ivec2 = ivec2(3, -1);
//! let mask: bvec2 = bvec2(true, false);
//! let m: mat2x3 = Matrix::from_columns([normal, normal]);
//! assert_eq!(m * vec2(1.0, 2.0), vec3(0.0, 3.0, 0.0));
//! # let _ = (cell, mask);
//! ```

#![allow(non_camel_case_types)]

use crate::{Matrix, Vector};

macro_rules! vector_aliases {
    ($($elem:ty => [$($name:ident: $n:literal ($($arg:ident),+)),+]),+ $(,)?) => {
        $($(
            pub type $name = Vector<$elem, $n>;

            #[doc = concat!("Constructs a [`", stringify!($name), "`].")]
            #[inline]
            pub const fn $name($($arg: $elem),+) -> $name {
                Vector::from_array([$($arg),+])
            }
        )+)+
    };
}

vector_aliases! {
    f64 => [dvec1: 1 (x), dvec2: 2 (x, y), dvec3: 3 (x, y, z), dvec4: 4 (x, y, z, w)],
    i32 => [ivec1: 1 (x), ivec2: 2 (x, y), ivec3: 3 (x, y, z), ivec4: 4 (x, y, z, w)],
    u32 => [uvec1: 1 (x), uvec2: 2 (x, y), uvec3: 3 (x, y, z), uvec4: 4 (x, y, z, w)],
    bool => [bvec1: 1 (x), bvec2: 2 (x, y), bvec3: 3 (x, y, z), bvec4: 4 (x, y, z, w)],
}

pub type vec1 = Vector<f32, 1>;
pub type vec2 = Vector<f32, 2>;
pub type vec3 = Vector<f32, 3>;
pub type vec4 = Vector<f32, 4>;

macro_rules! matrix_aliases {
    ($elem:ty => $($name:ident: $c:literal x $r:literal),+ $(,)?) => {
        $(
            pub type $name = Matrix<$elem, $c, $r>;
        )+
    };
}

matrix_aliases!(f32 =>
    mat1: 1 x 1, mat2: 2 x 2, mat3: 3 x 3, mat4: 4 x 4,
    mat1x1: 1 x 1, mat1x2: 1 x 2, mat1x3: 1 x 3, mat1x4: 1 x 4,
    mat2x1: 2 x 1, mat2x2: 2 x 2, mat2x3: 2 x 3, mat2x4: 2 x 4,
    mat3x1: 3 x 1, mat3x2: 3 x 2, mat3x3: 3 x 3, mat3x4: 3 x 4,
    mat4x1: 4 x 1, mat4x2: 4 x 2, mat4x3: 4 x 3, mat4x4: 4 x 4,
);

matrix_aliases!(f64 =>
    dmat1: 1 x 1, dmat2: 2 x 2, dmat3: 3 x 3, dmat4: 4 x 4,
    dmat1x1: 1 x 1, dmat1x2: 1 x 2, dmat1x3: 1 x 3, dmat1x4: 1 x 4,
    dmat2x1: 2 x 1, dmat2x2: 2 x 2, dmat2x3: 2 x 3, dmat2x4: 2 x 4,
    dmat3x1: 3 x 1, dmat3x2: 3 x 2, dmat3x3: 3 x 3, dmat3x4: 3 x 4,
    dmat4x1: 4 x 1, dmat4x2: 4 x 2, dmat4x3: 4 x 3, dmat4x4: 4 x 4,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes() {
        let m = mat3x2::IDENTITY;
        assert_eq!(m.row(0), vec3::X);
        let _: dmat4 = dmat4x4::ZERO;
        assert_eq!(uvec3(1, 2, 3).cast::<f32>(), crate::vec3(1.0, 2.0, 3.0));
        assert_eq!(dvec1(2.0).length(), 2.0);
        assert_eq!(std::mem::size_of::<mat4x3>(), 4 * 3 * 4);
    }
}
