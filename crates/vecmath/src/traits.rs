//! Scalar capability traits.
//!
//! Each element-wise operation on [`Vector`][crate::Vector] is bounded by the narrowest trait
//! that provides the scalar version of it, so that e.g. integer vectors support `abs` and `sign`
//! but not `sin`.

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
///
/// This is also the step used by [`Vector::inc`][crate::Vector::inc] and
/// [`Vector::dec`][crate::Vector::dec].
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Unlike signed-only numeric traits, this does not require [`Neg`][ops::Neg], so unsigned
/// integer vectors can still compute dot products.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support the trigonometric functions.
///
/// All angles are in radians.
pub trait Trig {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    /// Arcsine. Inputs outside of `[-1, 1]` yield NaN.
    fn asin(self) -> Self;
    /// Arccosine. Inputs outside of `[-1, 1]` yield NaN.
    fn acos(self) -> Self;
    fn atan(self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support exponentiation.
pub trait Exp {
    /// Computes *e* raised to the power of `self`.
    fn exp(self) -> Self;
    /// Computes 2 raised to the power of `self`.
    fn exp2(self) -> Self;
}

/// Types that support logarithms.
pub trait Log {
    /// The natural logarithm of `self`.
    ///
    /// Named after the shader built-in rather than [`f32::ln`].
    fn log(self) -> Self;
    /// The base-2 logarithm of `self`.
    fn log2(self) -> Self;
}

/// Types that can be rounded towards negative or positive infinity.
pub trait Round {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
}

/// Types that have an absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that can report their sign.
///
/// [`Sign::sign`] returns -1 for negative values, 1 for positive values and 0 for zero. For
/// floating-point types, both `+0.0` and `-0.0` map to `0.0`, and NaN maps to NaN.
///
/// Note that this differs from [`f32::signum`], which returns `1.0` for `+0.0`.
pub trait Sign {
    fn sign(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

macro_rules! consts {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
consts!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
consts!(0.0, 1.0 => f32, f64);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Exp for $types {
                fn exp(self) -> Self {
                    self.exp()
                }

                fn exp2(self) -> Self {
                    self.exp2()
                }
            }

            impl Log for $types {
                fn log(self) -> Self {
                    self.ln()
                }

                fn log2(self) -> Self {
                    self.log2()
                }
            }

            impl Round for $types {
                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Sign for $types {
                fn sign(self) -> Self {
                    if self > 0.0 {
                        1.0
                    } else if self < 0.0 {
                        -1.0
                    } else if self == 0.0 {
                        0.0
                    } else {
                        self // NaN
                    }
                }
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! signed_impls {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Sign for $types {
                fn sign(self) -> Self {
                    self.signum()
                }
            }
        )+
    };
}
signed_impls!(i8, i16, i32, i64, i128, isize);

macro_rules! unsigned_impls {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    self
                }
            }

            impl Sign for $types {
                fn sign(self) -> Self {
                    if self == 0 { 0 } else { 1 }
                }
            }
        )+
    };
}
unsigned_impls!(u8, u16, u32, u64, u128, usize);

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
