use std::{
    any, array, fmt,
    ops::{AddAssign, SubAssign},
};

use crate::traits::{MinMax, Number, One, Sqrt, Zero};

mod io;
mod math;
mod ops;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;

/// An `N`-element vector storing elements of type `T`.
///
/// `N` must be at least 2. Instantiating a [`Vector`] with fewer elements is rejected when the
/// program is compiled:
///
/// ```compile_fail
/// # use vecmath::*;
/// let v = Vector::new([1.0f32]);
/// ```
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions, as well as [`Vector::new`],
///   create vectors from exactly `N` values. Passing the wrong number of values does not compile.
/// - [`Vector::from_convertible`] does the same, but converts every value into `T` first.
/// - [`Vector::splat`] broadcasts a single value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::ZERO`], [`Vector::zero`] and the [`Default`] impl create all-zero vectors.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are
///   unit vectors pointing along the given axis.
/// - Text can be parsed via [`str::parse`] or [`Vector::read_from`].
///
/// # Element Access
///
/// The [`Index`] and [`IndexMut`] impls work just like on arrays, including the panic on
/// out-of-bounds indices. [`Vector::get`] and [`Vector::get_mut`] return [`Option`]s instead, and
/// [`Vector::get_unchecked`] skips the bounds check entirely (and is `unsafe` as a result).
///
/// # Arithmetic
///
/// `+`, `-`, `*` and `/` operate element-wise on two vectors of the same shape, or on a vector
/// and a scalar of type `T`. The scalar must be the right-hand operand. The compound assignment
/// operators are available for both forms.
///
/// Both operands must have the same dimension and element type; anything else is a type error:
///
/// ```compile_fail
/// # use vecmath::*;
/// let v = vec2(1.0f32, 2.0) + vec3(1.0f32, 2.0, 3.0);
/// ```
///
/// ```compile_fail
/// # use vecmath::*;
/// let v = vec2(1.0f32, 2.0) + vec2(1.0f64, 2.0);
/// ```
///
/// Numeric edge cases are not intercepted: dividing by zero, or calling [`Vector::asin`] on
/// values outside of `[-1, 1]`, produces whatever `T` produces (typically infinity or NaN).
///
/// # Comparison
///
/// Vectors are equal when all of their elements are. The [`PartialOrd`] impl is lexicographic:
/// the first pair of elements that is not equal decides the ordering. If all elements are equal,
/// neither vector is less than the other.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

// `bytemuck` can conjure vectors with `N < 2` without going through a constructor. Indexing such
// a vector still panics instead of reading out of bounds, and `first_le`/`first_ge` re-run the
// dimension check.
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T, const N: usize> Vector<T, N> {
    /// Evaluated by every constructor; fails compilation when `N < 2`.
    const DIMENSION_CHECK: () = assert!(N >= 2, "vectors need at least 2 elements");
}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = {
        let () = Self::DIMENSION_CHECK;
        Self([T::ZERO; N])
    };

    /// Returns [`Vector::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// assert_eq!(Vec3i::zero(), vec3(0, 0, 0));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector from exactly `N` elements.
    ///
    /// The number of elements is part of the type, so passing too few or too many does not
    /// compile:
    ///
    /// ```compile_fail
    /// # use vecmath::*;
    /// let v = Vec3f::new([1.0, 2.0]);
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let v = Vector::new([1.0, 3.0]);
    /// assert_eq!(v[0], 1.0);
    /// assert_eq!(v[1], 3.0);
    /// ```
    #[inline]
    pub const fn new(elems: [T; N]) -> Self {
        let () = Self::DIMENSION_CHECK;
        Self(elems)
    }

    /// Creates a vector from `N` values that are convertible into `T`.
    ///
    /// Like [`Vector::new`], the number of values must match `N`:
    ///
    /// ```compile_fail
    /// # use vecmath::*;
    /// let v = Vec3::<f64>::from_convertible([1i32, 2]);
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let v: Vec2<f64> = Vector::from_convertible([1i32, -2i32]);
    /// assert_eq!(v, vec2(1.0, -2.0));
    /// ```
    pub fn from_convertible<U>(elems: [U; N]) -> Self
    where
        U: Into<T>,
    {
        Self::new(elems.map(Into::into))
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self::new([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::new(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// Unlike [`Vector::apply`], the closure may change the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let v = vec3(1, 2, 3).map(|i| i as f32 * 0.5);
    /// assert_eq!(v, vec3(0.5, 1.0, 1.5));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        // Both sides have exactly `N` elements, so this never runs out.
        Vector(array::from_fn(|_| iter.next().unwrap()))
    }

    /// Returns a reference to the element at `index`, or [`None`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.get(1), Some(&6));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if `index >= N`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the element at `index` without performing a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. Calling this with an out-of-bounds index is undefined
    /// behavior, even if the returned reference is never used.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N);
        self.0.get_unchecked(index)
    }

    /// Returns a mutable reference to the element at `index` without performing a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`, see [`Vector::get_unchecked`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N);
        self.0.get_unchecked_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Adds 1 to every element, returning the updated vector.
    ///
    /// This is the prefix increment (`++v`) of shader languages.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let mut v = vec2(-1, 0);
    /// assert_eq!(*v.inc(), vec2(0, 1));
    /// assert_eq!(v, vec2(0, 1));
    /// ```
    pub fn inc(&mut self) -> &mut Self
    where
        T: One + AddAssign + Copy,
    {
        *self += T::ONE;
        self
    }

    /// Adds 1 to every element, returning a copy of the vector from *before* the update.
    ///
    /// This is the postfix increment (`v++`) of shader languages.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let mut v = vec2(0, 1);
    /// assert_eq!(v.post_inc(), vec2(0, 1));
    /// assert_eq!(v, vec2(1, 2));
    /// ```
    pub fn post_inc(&mut self) -> Self
    where
        T: One + AddAssign + Copy,
    {
        let prev = *self;
        *self += T::ONE;
        prev
    }

    /// Subtracts 1 from every element, returning the updated vector.
    pub fn dec(&mut self) -> &mut Self
    where
        T: One + SubAssign + Copy,
    {
        *self -= T::ONE;
        self
    }

    /// Subtracts 1 from every element, returning a copy of the vector from *before* the update.
    pub fn post_dec(&mut self) -> Self
    where
        T: One + SubAssign + Copy,
    {
        let prev = *self;
        *self -= T::ONE;
        prev
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// Cheaper than [`Vector::length`], and sufficient for comparing magnitudes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// assert_eq!(vec2(4, 0).length_squared(), 16);
    /// ```
    #[doc(alias = "length2")]
    pub fn length_squared(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length_squared().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction; normalizing it divides by zero, which results in NaN
    /// elements for floating-point vectors. Callers are expected to check for that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let v = vec3(-1.0, 0.5, 7.0);
    /// assert_eq!(v.clamp(Vector::ZERO, Vector::splat(1.0)), vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Returns whether the first element of `self` is less than or equal to that of `other`.
    ///
    /// This ignores all other elements. It exists for code ported from libraries where `<=`
    /// behaves this way; the [`PartialOrd`] impl compares all elements lexicographically.
    ///
    /// Vectors without a first element are rejected at compile time, even when obtained without
    /// a constructor:
    ///
    /// ```compile_fail
    /// # use vecmath::*;
    /// let v: Vector<f32, 1> = bytemuck::Zeroable::zeroed();
    /// v.first_le(&v);
    /// ```
    pub fn first_le(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        let () = Self::DIMENSION_CHECK;
        self.0[0] <= other.0[0]
    }

    /// Returns whether the first element of `self` is greater than or equal to that of `other`.
    ///
    /// Like [`Vector::first_le`], this ignores all other elements.
    pub fn first_ge(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        let () = Self::DIMENSION_CHECK;
        self.0[0] >= other.0[0]
    }
}

impl<T> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a1 * b2 - a2 * b1,
            a2 * b0 - a0 * b2,
            a0 * b1 - a1 * b0,
        );
        cross
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as `vec<N, T>( x y ... )`.
///
/// Formatting parameters like precision and width are applied to every element. The alternate
/// form (`{:#}`) omits the type tag and parentheses and only writes the space-separated elements,
/// which is the format expected by [`Vector::read_from`].
///
/// # Examples
///
/// ```
/// # use vecmath::*;
/// let v = vec2(1.0f32, 1.5);
/// assert_eq!(format!("{v}"), "vec<2, f32>( 1 1.5 )");
/// assert_eq!(format!("{v:.2}"), "vec<2, f32>( 1.00 1.50 )");
/// assert_eq!(format!("{v:#}"), "1 1.5");
/// ```
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tagged = !f.alternate();
        if tagged {
            write!(f, "vec<{}, {}>( ", N, any::type_name::<T>())?;
        }
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        if tagged {
            f.write_str(" )")?;
        }
        Ok(())
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
