//! GLSL-style vectors, matrices and built-in functions for Rust.
//!
//! This library mirrors the vector and matrix types of the OpenGL Shading Language closely enough
//! that shader math can be moved between GLSL and Rust with few changes: component names and
//! swizzles (`v.x`, `v.zyx()`, `v.rg_mut()`), column-major matrices indexed by column, the
//! component-wise operators, and the built-in function library (`dot`, `mix`, `smoothstep`,
//! `inverse`, ...).
//!
//! # Overview
//!
//! - [`Vector<T, N>`] is the canonical vector. It owns its `N` elements and is the only type that
//!   can be indexed or swizzled.
//! - Swizzle accessors return a [`View`] or [`ViewMut`] borrowing the vector. Views take part in
//!   operators and functions like the vector they resolve to.
//! - [`Matrix<T, C, R, MC, MR>`] is a column-major matrix with `C` columns and `R` rows, optionally
//!   stored with padding (`MC`x`MR`) for interop with GPU buffer layouts.
//! - The GLSL function library lives at the crate root and accepts scalars, vectors and views.
//! - The [`aliases`] module provides the GLSL type names (`vec3`, `ivec2`, `mat4x3`, ...).
//!
//! ```
//! use glsl_linalg::*;
//!
//! let light = normalize(vec3(1.0, 1.0, 0.0));
//! let normal = vec3(0.0, 1.0, 0.0);
//! let diffuse = max(dot(normal, light), 0.0);
//! assert_approx_eq!(diffuse, 0.70710677).abs(1e-6);
//!
//! let mut color = vec4(0.2, 0.4, 0.6, 1.0);
//! let shaded = color.bgr() * diffuse;
//! color.rgb_mut().set(shaded);
//! assert!(color.r > color.b);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Illegal code fails to compile: writing through a swizzle that names an axis twice, swizzling
//!   past the end of a vector, mixing vectors of different dimensions, and using a malformed
//!   matrix layout are all rejected at build time. There is no runtime error channel.
//! - Only fixed sizes from 1 to 4, matching GLSL. Dimensions are const generics.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//! - Results match GLSL's definitions where Rust's standard library differs (`fract`, `mod`,
//!   `round_even`, scalar division). Some functions deliberately keep their historical scalar
//!   behavior, see [`length`] and [`normalize`].
//! - Packing functions, `faceforward`, `findLSB` and the integer carry/borrow functions are not
//!   provided.
//!
//! # Cargo features
//!
//! - `simd`: routes 4-component `f32`/`f64` vector arithmetic through SSE/NEON kernels. Results
//!   are identical with and without the feature.

pub mod aliases;
pub mod approx;
mod error;
mod func;
mod matrix;
pub mod operand;
#[cfg(feature = "simd")]
mod simd;
pub mod swizzle;
#[cfg(test)]
mod test;
mod traits;
mod vector;

pub use aliases::*;
pub use error::*;
pub use func::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
