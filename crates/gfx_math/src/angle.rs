//! Units for angles.
//!
//! All rotation builders take [`Radians`]. [`Degrees`] exists for call sites
//! that think in degrees and convert at the boundary.

use bytemuck::{Pod, Zeroable};
use std::{
    f32::consts::PI,
    ops::{Add, Mul, Neg, Sub},
};

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

impl Radians {
    /// The value of the angle in radians.
    #[inline]
    pub const fn radians(self) -> f32 {
        self.0
    }

    /// The sine and cosine of the angle.
    #[inline]
    pub fn sin_cos(self) -> (f32, f32) {
        (self.0.sin(), self.0.cos())
    }
}

impl Degrees {
    /// The value of the angle in degrees.
    #[inline]
    pub const fn degrees(self) -> f32 {
        self.0
    }
}

impl From<Degrees> for Radians {
    fn from(degrees: Degrees) -> Self {
        Self(degrees_to_radians(degrees.0))
    }
}

impl From<Radians> for Degrees {
    fn from(radians: Radians) -> Self {
        Self(radians_to_degrees(radians.0))
    }
}

impl Add for Radians {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f32> for Radians {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Neg for Radians {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl_approx_eq!(Radians, [0]);
impl_approx_eq!(Degrees, [0]);

/// Converts an angle in degrees to radians.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts an angle in radians to degrees.
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn converting_special_angles_to_radians_works() {
        assert_abs_diff_eq!(Radians::from(Degrees(0.0)), Radians(0.0));
        assert_abs_diff_eq!(Radians::from(Degrees(90.0)), Radians(PI / 2.0), epsilon = 1e-6);
        assert_abs_diff_eq!(Radians::from(Degrees(180.0)), Radians(PI), epsilon = 1e-6);
        assert_abs_diff_eq!(
            Radians::from(Degrees(-270.0)),
            Radians(-1.5 * PI),
            epsilon = 1e-6
        );
    }

    #[test]
    fn converting_special_angles_to_degrees_works() {
        assert_abs_diff_eq!(Degrees::from(Radians(PI / 2.0)), Degrees(90.0), epsilon = 1e-4);
        assert_abs_diff_eq!(Degrees::from(Radians(-PI)), Degrees(-180.0), epsilon = 1e-4);
        assert_abs_diff_eq!(Degrees::from(Radians(2.0 * PI)), Degrees(360.0), epsilon = 1e-4);
    }

    #[test]
    fn radian_ops_work() {
        assert_abs_diff_eq!(Radians(0.5) + Radians(0.25), Radians(0.75));
        assert_abs_diff_eq!(Radians(0.5) - Radians(0.25), Radians(0.25));
        assert_abs_diff_eq!(Radians(0.5) * 3.0, Radians(1.5));
        assert_eq!(-Radians(0.5), Radians(-0.5));
        assert!(Radians(0.1) < Radians(0.2));
    }
}
