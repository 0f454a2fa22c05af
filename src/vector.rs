//! Plain 3D values acted on by rotations and poses.
//!
//! [`Point`] is coordinate data; [`Translation`] is the position part of a
//! [`Pose`](crate::Pose) and composes additively. Both implement
//! [`Coordinates`], so every transform returns the same kind it was given.

use alloc::vec::Vec;
use core::ops::{Add, Neg, Sub};

use crate::error::PoseResult;
use crate::traits::{coerce_array, Coordinates, FieldValue, FloatScalar, Transform};

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 3D offset, the position component of a pose.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

macro_rules! impl_vector3 {
    ($($t:ident),*) => {
        $(
            impl<T: FloatScalar> $t<T> {
                #[inline]
                pub fn new(x: T, y: T, z: T) -> Self {
                    Self { x, y, z }
                }

                /// Create from coordinates that may need coercion.
                pub fn try_new(
                    x: impl FieldValue,
                    y: impl FieldValue,
                    z: impl FieldValue,
                ) -> PoseResult<Self> {
                    Ok(Self {
                        x: x.to_field()?,
                        y: y.to_field()?,
                        z: z.to_field()?,
                    })
                }

                #[inline]
                pub fn from_array([x, y, z]: [T; 3]) -> Self {
                    Self { x, y, z }
                }

                #[inline]
                pub fn as_array(&self) -> [T; 3] {
                    [self.x, self.y, self.z]
                }

                pub fn to_vec(&self) -> Vec<T> {
                    self.as_array().to_vec()
                }

                /// Overwrite all three coordinates from coercible inputs.
                pub fn set_xyz_from<V: FieldValue>(&mut self, xyz: [V; 3]) -> PoseResult<()> {
                    *self = Self::from_array(coerce_array(&xyz)?);
                    Ok(())
                }

                /// Euclidean norm.
                #[inline]
                pub fn magnitude(&self) -> T {
                    (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
                }
            }

            impl<T: FloatScalar> Coordinates<T> for $t<T> {
                #[inline]
                fn xyz(&self) -> [T; 3] {
                    self.as_array()
                }

                #[inline]
                fn set_xyz(&mut self, [x, y, z]: [T; 3]) {
                    self.x = x;
                    self.y = y;
                    self.z = z;
                }
            }

            impl<T: FloatScalar> Neg for $t<T> {
                type Output = Self;

                #[inline]
                fn neg(self) -> Self {
                    Self::new(-self.x, -self.y, -self.z)
                }
            }

            impl<T: FloatScalar> Add for $t<T> {
                type Output = Self;

                #[inline]
                fn add(self, rhs: Self) -> Self {
                    Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
                }
            }

            impl<T: FloatScalar> Sub for $t<T> {
                type Output = Self;

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
                }
            }
        )*
    };
}

impl_vector3!(Point, Translation);

impl<T: FloatScalar> Translation<T> {
    /// Componentwise linear interpolation; `factor` outside [0, 1]
    /// extrapolates.
    pub fn interpolate(&self, other: &Self, factor: T) -> Self {
        *self + (*other - *self).scaled(factor)
    }

    #[inline]
    fn scaled(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T: FloatScalar> From<Point<T>> for Translation<T> {
    fn from(p: Point<T>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl<T: FloatScalar> From<Translation<T>> for Point<T> {
    fn from(t: Translation<T>) -> Self {
        Self::new(t.x, t.y, t.z)
    }
}

// Offsetting by a translation
impl<T: FloatScalar> Transform<T> for Translation<T> {
    #[inline]
    fn apply(&self, [x, y, z]: [T; 3]) -> [T; 3] {
        [x + self.x, y + self.y, z + self.z]
    }
}
