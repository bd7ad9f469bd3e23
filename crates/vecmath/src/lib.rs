//! Generic fixed-size vectors, modeled after the vector types of shader languages (`vec2`,
//! `vec3`, `vec4`).
//!
//! The central type is [`Vector<T, N>`][Vector], an `N`-element array of numbers with element-wise
//! arithmetic, lexicographic comparison, textual I/O and the usual element-wise math functions.
//!
//! ```
//! # use vecmath::*;
//! let a = vec2(1.0f32, 3.0);
//! let b = vec2(-2.0, -3.0);
//! assert_eq!(a + b, vec2(-1.0, 0.0));
//! assert_eq!(a / vec2(1.0, 2.0), vec2(1.0, 1.5));
//! assert_eq!(format!("{a}"), "vec<2, f32>( 1 3 )");
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Vector dimensions are always known at compile time, and are at least 2. There are no
//!   dynamically-sized vectors.
//! - Storage is a plain, unpadded `[T; N]`. With the `bytemuck` feature (enabled by default),
//!   vectors of [`bytemuck::Pod`] elements are themselves [`bytemuck::Pod`].
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals"). Each operation only requires the capabilities it actually uses ([`Number`],
//!   [`Trig`], [`Sign`], ...), so integer vectors work wherever that makes sense.
//! - Numeric edge cases are not papered over: division by zero, NaN and out-of-domain inputs
//!   behave exactly like they do for the element type.
//! - No matrices, no SIMD.
//!
//! # Cargo Features
//!
//! - `bytemuck` *(default)*: implements [`bytemuck::Zeroable`] and [`bytemuck::Pod`] for
//!   [`Vector`].
//!
//! [`Vector`] always implements the comparison traits of the [`approx`] crate, so that vectors
//! can be compared with `approx::assert_relative_eq!` and friends.

mod error;
pub mod shader;
mod traits;
mod vector;

pub use error::ReadError;
pub use traits::*;
pub use vector::*;
