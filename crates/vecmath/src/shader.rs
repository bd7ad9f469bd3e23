//! Free functions named after their shader-language built-in counterparts.
//!
//! These forward to the methods on [`Vector`] and exist so that code ported from GLSL or WGSL can
//! keep its shape:
//!
//! ```
//! # use vecmath::*;
//! use vecmath::shader::{dot, normalize, sin};
//!
//! let n = normalize(vec3(0.0, 3.0, 4.0));
//! let d = dot(n, Vec3f::Y.map(f64::from));
//! assert_eq!(d, 0.6);
//! assert_eq!(sin(Vec2f::splat(0.0)), Vec2f::ZERO);
//! ```
//!
//! They live in their own module (rather than at the crate root) so that a glob import of the
//! crate does not shadow scalar functions of the same name.

use crate::{
    traits::{Abs, Exp, Log, Number, Round, Sign, Sqrt, Trig},
    Vector,
};

/// Applies `f` to every element of `v`. See [`Vector::apply`].
pub fn apply<T, F, const N: usize>(v: Vector<T, N>, f: F) -> Vector<T, N>
where
    F: FnMut(T) -> T,
{
    v.apply(f)
}

macro_rules! forward {
    ($($bound:ident => $($name:ident)+;)+) => {
        $($(
            #[doc = concat!("Element-wise `", stringify!($name), "`. See [`Vector::", stringify!($name), "`].")]
            #[inline]
            pub fn $name<T: $bound, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
                v.$name()
            }
        )+)+
    };
}

forward! {
    Trig => sin cos tan asin acos atan;
    Exp => exp exp2;
    Log => log log2;
    Sqrt => sqrt;
    Abs => abs;
    Sign => sign;
    Round => floor ceil;
}

/// Computes the dot product of `a` and `b`. See [`Vector::dot`].
#[inline]
pub fn dot<T: Number, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dot(b)
}

/// Computes the cross product of `a` and `b`. See [`Vector::cross`].
#[inline]
pub fn cross<T: Number>(a: Vector<T, 3>, b: Vector<T, 3>) -> Vector<T, 3> {
    a.cross(b)
}

/// Returns the length of `v`. See [`Vector::length`].
#[inline]
pub fn length<T: Number + Sqrt, const N: usize>(v: Vector<T, N>) -> T {
    v.length()
}

/// Returns the squared length of `v`. See [`Vector::length_squared`].
#[inline]
pub fn length_squared<T: Number, const N: usize>(v: Vector<T, N>) -> T {
    v.length_squared()
}

/// Returns `v` scaled to unit length. See [`Vector::normalize`].
#[inline]
pub fn normalize<T: Number + Sqrt, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}
