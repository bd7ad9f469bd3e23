//! Element-wise math functions.

use crate::traits::{Abs, Exp, Log, Round, Sign, Sqrt, Trig};

use super::Vector;

macro_rules! elementwise {
    ($($bound:ident::$method:ident => $doc:literal;)+) => {
        $(
            #[doc = $doc]
            #[inline]
            pub fn $method(self) -> Self
            where
                T: $bound,
            {
                self.apply(T::$method)
            }
        )+
    };
}

impl<T, const N: usize> Vector<T, N> {
    /// Applies a unary function to every element, returning a new vector of the same type.
    ///
    /// All element-wise math functions are implemented in terms of this.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let v = vec3(1, -2, 3).apply(|x| x * x);
    /// assert_eq!(v, vec3(1, 4, 9));
    /// ```
    #[inline]
    pub fn apply<F>(self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.map(f)
    }

    elementwise! {
        Trig::sin => "Computes the sine of each element (in radians).";
        Trig::cos => "Computes the cosine of each element (in radians).";
        Trig::tan => "Computes the tangent of each element (in radians).";
        Trig::asin => "Computes the arcsine of each element.\n\nElements outside of `[-1, 1]` result in NaN.";
        Trig::acos => "Computes the arccosine of each element.\n\nElements outside of `[-1, 1]` result in NaN.";
        Trig::atan => "Computes the arctangent of each element.";
        Exp::exp => "Computes *e* raised to the power of each element.";
        Exp::exp2 => "Computes 2 raised to the power of each element.";
        Log::log => "Computes the natural logarithm of each element.";
        Log::log2 => "Computes the base-2 logarithm of each element.";
        Sqrt::sqrt => "Computes the square root of each element.";
        Abs::abs => "Computes the absolute value of each element.";
        Round::floor => "Rounds each element towards negative infinity.";
        Round::ceil => "Rounds each element towards positive infinity.";
    }

    /// Maps each element to -1, 0, or 1, depending on its sign.
    ///
    /// See [`Sign`] for the exact rules, including how signed zeros and NaN are handled.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// assert_eq!(vec3(-3.0, 0.0, 4.0).sign(), vec3(-1.0, 0.0, 1.0));
    /// assert_eq!(vec3(-3, 0, 4).sign(), vec3(-1, 0, 1));
    /// ```
    #[inline]
    pub fn sign(self) -> Self
    where
        T: Sign,
    {
        self.apply(Sign::sign)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_abs_diff_eq;

    use crate::{vec2, vec3, vec4, Vec2f};

    #[test]
    fn apply_leaves_input_alone() {
        let v = vec2(2.0f32, 5.0);
        let mut calls = 0;
        let doubled = v.apply(|x| {
            calls += 1;
            x * 2.0
        });
        assert_eq!(calls, 2);
        assert_eq!(doubled, vec2(4.0, 10.0));
        assert_eq!(v, vec2(2.0, 5.0));
    }

    #[test]
    fn trig() {
        let v = vec3(0.0, FRAC_PI_2, PI);
        assert_abs_diff_eq!(v.sin(), vec3(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(v.cos(), vec3(1.0, 0.0, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(vec2(0.0, FRAC_PI_4).tan(), vec2(0.0, 1.0), epsilon = 1e-12);

        let inv = vec3(-1.0, 0.0, 1.0);
        assert_abs_diff_eq!(inv.asin(), vec3(-FRAC_PI_2, 0.0, FRAC_PI_2), epsilon = 1e-12);
        assert_abs_diff_eq!(inv.acos(), vec3(PI, FRAC_PI_2, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(inv.atan(), vec3(-FRAC_PI_4, 0.0, FRAC_PI_4), epsilon = 1e-12);
    }

    #[test]
    fn domain_errors_propagate() {
        let v = vec2(2.0f32, 0.5).asin();
        assert!(v[0].is_nan());
        assert!(!v[1].is_nan());

        let l = vec2(0.0f32, -1.0).log();
        assert_eq!(l[0], f32::NEG_INFINITY);
        assert!(l[1].is_nan());
    }

    #[test]
    fn exp_log() {
        let v = vec3(0.0f64, 1.0, 3.0);
        assert_abs_diff_eq!(v.exp(), vec3(1.0, E, 3.0f64.exp()), epsilon = 1e-12);
        assert_eq!(v.exp2(), vec3(1.0, 2.0, 8.0));
        assert_abs_diff_eq!(v.exp().log(), v, epsilon = 1e-12);
        assert_eq!(vec3(1.0f64, 2.0, 1024.0).log2(), vec3(0.0, 1.0, 10.0));
        assert_eq!(vec2(9.0f32, 0.25).sqrt(), vec2(3.0, 0.5));
    }

    #[test]
    fn rounding() {
        let v = vec4(-1.5f32, -0.5, 0.5, 2.0);
        assert_eq!(v.floor(), vec4(-2.0, -1.0, 0.0, 2.0));
        assert_eq!(v.ceil(), vec4(-1.0, -0.0, 1.0, 2.0));
        assert_eq!(v.abs(), vec4(1.5, 0.5, 0.5, 2.0));
    }

    #[test]
    fn sign() {
        assert_eq!(vec3(-3.0f32, 0.0, 4.0).sign(), vec3(-1.0, 0.0, 1.0));
        assert_eq!(vec3(-3, 0, 4).sign(), vec3(-1, 0, 1));
        assert_eq!(vec2(0u32, 17).sign(), vec2(0, 1));
        assert_eq!(vec2(-0.0f64, f64::INFINITY).sign(), vec2(0.0, 1.0));

        let nan = Vec2f::splat(f32::NAN).sign();
        assert!(nan[0].is_nan() && nan[1].is_nan());
    }
}
