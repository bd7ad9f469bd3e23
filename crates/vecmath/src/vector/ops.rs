//! Implementations of `std::ops` and `std::cmp`.

use std::{
    cmp::Ordering,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

/// Lexicographic ordering.
///
/// Elements are compared from first to last. The first pair that does not compare equal decides
/// the result; if that pair is unordered (eg. because one of them is NaN), the vectors are
/// unordered as well, and all comparison operators return `false`.
impl<T, const N: usize> PartialOrd for Vector<T, N>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.0.iter().zip(&other.0) {
            match a.partial_cmp(b) {
                Some(Ordering::Equal) => {}
                ord => return ord,
            }
        }
        Some(Ordering::Equal)
    }
}

impl<T, const N: usize> Ord for Vector<T, N>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

// NB: vector-vector and vector-scalar impls both exist for every operator, which rules out more
// generic impls like `Add<U> for Vector<T, N> where T: Add<U>`. The scalar is always the
// right-hand operand; `2.0 * v` is intentionally not supported.

macro_rules! binary_ops {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident => $name:literal;)+) => {
        $(
            #[doc = concat!("Element-wise ", $name, ".")]
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l.$method(r))
                }
            }

            #[doc = concat!("Element-wise ", $name, ".")]
            impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
            where
                T: $assign,
            {
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
                }
            }

            #[doc = concat!("Vector-scalar ", $name, ", applied to every element.")]
            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem.$method(rhs))
                }
            }

            #[doc = concat!("Vector-scalar ", $name, ", applied to every element.")]
            impl<T, const N: usize> $assign<T> for Vector<T, N>
            where
                T: $assign + Copy,
            {
                fn $assign_method(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|lhs| lhs.$assign_method(rhs));
                }
            }
        )+
    };
}

binary_ops! {
    Add::add, AddAssign::add_assign => "addition";
    Sub::sub, SubAssign::sub_assign => "subtraction";
    Mul::mul, MulAssign::mul_assign => "multiplication";
    Div::div, DivAssign::div_assign => "division";
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec2, vec3, Vec2f, Vec3f};

    #[test]
    fn vector_arithmetic() {
        let a = vec2(1.0f32, 3.0);
        let b = vec2(-2.0f32, -3.0);
        let c = vec2(1.0f32, 2.0);

        assert_eq!(a + b, vec2(-1.0, 0.0));
        assert_eq!(a + c, vec2(2.0, 5.0));
        assert_eq!(a - c, vec2(0.0, 1.0));
        assert_eq!(a * b, vec2(-2.0, -9.0));
        assert_eq!(a / c, vec2(1.0, 1.5));

        // Operands are left untouched.
        assert_eq!(a, vec2(1.0, 3.0));
    }

    #[test]
    fn scalar_arithmetic() {
        let v = vec3(2, -4, 6);
        assert_eq!(v + 1, vec3(3, -3, 7));
        assert_eq!(v - 2, vec3(0, -6, 4));
        assert_eq!(v * 3, vec3(6, -12, 18));
        assert_eq!(v / 2, vec3(1, -2, 3));
    }

    #[test]
    fn compound_assignment() {
        let mut a = vec2(1.0f32, 3.0);
        a += vec2(-2.0, -3.0);
        assert_eq!(a, vec2(-1.0, 0.0));
        a += a[0];
        assert_eq!(a, vec2(-2.0, -1.0));
        a -= vec2(1.0, 1.0);
        assert_eq!(a, vec2(-3.0, -2.0));
        a *= vec2(2.0, -0.5);
        assert_eq!(a, vec2(-6.0, 1.0));
        a /= vec2(3.0, 4.0);
        assert_eq!(a, vec2(-2.0, 0.25));
        a -= 1.0;
        assert_eq!(a, vec2(-3.0, -0.75));
        a *= 4.0;
        assert_eq!(a, vec2(-12.0, -3.0));
        a /= -3.0;
        assert_eq!(a, vec2(4.0, 1.0));
    }

    #[test]
    fn division_by_zero_propagates() {
        let v = vec2(1.0f32, -1.0) / 0.0;
        assert_eq!(v, vec2(f32::INFINITY, f32::NEG_INFINITY));
        let nan = Vec2f::ZERO / Vec2f::ZERO;
        assert!(nan[0].is_nan() && nan[1].is_nan());
    }

    #[test]
    fn negation() {
        assert_eq!(-vec3(1, -2, 0), vec3(-1, 2, 0));
        assert_eq!(-Vec3f::Z, vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn equality() {
        assert_eq!(vec2(1.0, 1.0), vec2(1.0, 1.0));
        assert_ne!(vec2(1.0, 1.0), vec2(2.0, 1.0));
        assert_ne!(vec3(1, 2, 3), vec3(1, 2, 4));
        assert_eq!(vec3(1, 2, 3), [1, 2, 3]);
        assert_eq!([1, 2, 3], vec3(1, 2, 3));
        assert_ne!(vec2(f32::NAN, 0.0), vec2(f32::NAN, 0.0));
    }

    #[test]
    fn lexicographic_ordering() {
        assert!(vec3(1, 5, 9) < vec3(2, 0, 0));
        assert!(vec3(1, 5, 9) < vec3(1, 6, 0));
        assert!(vec3(1, 5, 9) > vec3(1, 5, 8));
        assert!(vec3(1, 5, 9) <= vec3(1, 6, 0));
        assert!(vec3(1, 6, 0) >= vec3(1, 5, 9));

        let a = vec2(3, 4);
        assert!(!(a < a));
        assert!(!(a > a));
        assert!(a <= a && a >= a);
        assert_eq!(a.cmp(&vec2(3, 5)), std::cmp::Ordering::Less);
    }

    #[test]
    fn nan_ordering() {
        let a = vec2(f32::NAN, 1.0);
        let b = vec2(0.0, 0.0);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b) && !(a > b) && !(a <= b) && !(a >= b));

        // An earlier difference decides before the NaN is ever looked at.
        assert!(vec2(0.0, f32::NAN) < vec2(1.0, 0.0));
    }

    #[test]
    fn add_then_sub_roundtrips() {
        let a = vec3(0.1f32, -7.25, 1e3);
        let b = vec3(3.3f32, 0.7, -2e2);
        assert_relative_eq!(a + b - b, a, max_relative = 1e-5);
    }
}
