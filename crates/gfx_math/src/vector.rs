//! Vectors.

use crate::error::MathError;
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut, Mul},
};

/// A 4-dimensional single precision vector.
///
/// The same type is used for points (w = 1), directions (w = 0) and plain
/// 4-tuples such as colors. Nothing is enforced about the w-component, and
/// every operation treats all four components alike unless stated otherwise.
/// The layout is four consecutive `f32`s, so the vector can be handed directly
/// to a rendering backend.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 4]", from = "[f32; 4]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point (w = 1) with the given coordinates.
    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a direction (w = 0) with the given components.
    #[inline]
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.w
    }

    /// Returns a copy of the vector with the w-component replaced.
    #[inline]
    pub const fn with_w(&self, w: f32) -> Self {
        Self::new(self.x, self.y, self.z, w)
    }

    /// Computes the dot product of this vector with another.
    ///
    /// All four components take part, including w. For the geometric dot
    /// product of two directions, either make sure both have w = 0 or use
    /// [`Self::xyz_dot`].
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Computes the dot product of the x-, y- and z-components only.
    #[inline]
    pub fn xyz_dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the 3D cross product of the x-, y- and z-components. The
    /// w-component of the result is always zero.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::direction(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the norm (magnitude) of the vector as the square root of
    /// [`Self::dot`] with itself, so the w-component contributes.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the normalized version of the vector by scaling with the
    /// reciprocal of the norm.
    ///
    /// A zero vector is not trapped: the result is non-finite. Use
    /// [`Self::try_normalized`] to get an error instead.
    #[inline]
    pub fn normalized(&self) -> Self {
        self.mul(1.0 / self.norm())
    }

    /// Computes the normalized version of the vector.
    ///
    /// # Errors
    /// Returns [`MathError::ZeroMagnitude`] if the norm is zero.
    #[inline]
    pub fn try_normalized(&self) -> Result<Self, MathError> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(MathError::ZeroMagnitude);
        }
        Ok(self.mul(1.0 / norm))
    }

    /// Computes the angle in radians between this vector and another as
    /// `acos(dot / (|a| |b|))`, with all four components taking part.
    ///
    /// The result is NaN if either vector has zero norm.
    #[inline]
    pub fn angle_between(&self, other: &Self) -> f32 {
        (self.dot(other) / (self.norm() * other.norm())).acos()
    }

    /// Whether all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl TryFrom<&[f32]> for Vector4 {
    type Error = MathError;

    fn try_from(elements: &[f32]) -> Result<Self, Self::Error> {
        let Ok(array) = <[f32; 4]>::try_from(elements) else {
            return Err(MathError::InvalidLength {
                expected: 4,
                actual: elements.len(),
            });
        };
        Ok(array.into())
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, s| {
    let s = *s;
    Vector4::new(a.x * s, a.y * s, a.z * s, a.w * s)
});

impl_binop!(Mul, mul, f32, Vector4, Vector4, |s, a| { a.mul(*s) });

impl_binop!(Div, div, Vector4, f32, Vector4, |a, s| {
    a.mul(1.0 / *s)
});

impl_binop_assign!(AddAssign, add_assign, Add, add, Vector4, Vector4);
impl_binop_assign!(SubAssign, sub_assign, Sub, sub, Vector4, Vector4);
impl_binop_assign!(MulAssign, mul_assign, Mul, mul, Vector4, f32);
impl_binop_assign!(DivAssign, div_assign, Div, div, Vector4, f32);

impl_neg!(Vector4, |v| { Vector4::new(-v.x, -v.y, -v.z, -v.w) });

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_approx_eq!(Vector4, [x, y, z, w]);

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4}, {:.4}, {:.4}, {:.4}]",
            self.x, self.y, self.z, self.w
        )
    }
}
