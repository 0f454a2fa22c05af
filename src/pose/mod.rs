//! Rigid-body pose: a rotation followed by a translation.
//!
//! A [`Pose`] maps `p` to `R·p + t`. Poses compose right-to-left like the
//! rotations they hold, invert into the opposite frame, and interpolate
//! with SLERP on the rotation and a straight line on the translation.
//!
//! ```
//! use poser::{Opk, Point, Pose, Rotation, Transform, Translation};
//!
//! let pose = Pose::new(
//!     Rotation::new(Opk::new(0.0_f64, 0.0, 90.0)),
//!     Translation::new(1.0, 0.0, 0.0),
//! );
//! let p = pose.transformed_point(&Point::new(1.0, 0.0, 0.0));
//! assert!((p.x - 1.0).abs() < 1e-12);
//! assert!((p.y - 1.0).abs() < 1e-12);
//!
//! let back = pose.inverse().transformed_point(&p);
//! assert!((back.x - 1.0).abs() < 1e-12);
//! assert!(back.y.abs() < 1e-12);
//! ```


use alloc::vec::Vec;
use core::ops::Mul;

use crate::error::PoseResult;
use crate::matrix::RotationMatrix;
use crate::rotation::Rotation;
use crate::traits::{coerce_array, coerce_nested, FieldValue, FloatScalar, Transform};
use crate::vector::Translation;

/// A rotation and a translation, applied in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose<T> {
    rotation: Rotation<T>,
    translation: Translation<T>,
}

impl<T: FloatScalar> Pose<T> {
    #[inline]
    pub fn new(rotation: Rotation<T>, translation: Translation<T>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Identity rotation, zero translation.
    pub fn identity() -> Self {
        Self::new(Rotation::identity(), Translation::default())
    }

    #[inline]
    pub fn rotation(&self) -> &Rotation<T> {
        &self.rotation
    }

    /// Mutable access to the rotation; its own setters keep it consistent.
    #[inline]
    pub fn rotation_mut(&mut self) -> &mut Rotation<T> {
        &mut self.rotation
    }

    #[inline]
    pub fn translation(&self) -> &Translation<T> {
        &self.translation
    }

    #[inline]
    pub fn translation_mut(&mut self) -> &mut Translation<T> {
        &mut self.translation
    }

    pub fn set_rotation(&mut self, rotation: Rotation<T>) {
        self.rotation = rotation;
    }

    pub fn set_translation(&mut self, translation: Translation<T>) {
        self.translation = translation;
    }
}

impl<T: FloatScalar> Default for Pose<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// ── Algebra ──────────────────────────────────────────────────────────

impl<T: FloatScalar> Pose<T> {
    /// The inverse pose: `R' = R⁻¹`, `t' = R'·(-t)`.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        let translation = rotation.transformed_point(&-self.translation);
        Self::new(rotation, translation)
    }

    /// Invert in place.
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    ///
    /// The rotation is `R1·R2` and the translation is `t1 + R1·t2`.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.rotation * other.rotation,
            self.translation + self.rotation.transformed_point(&other.translation),
        )
    }

    /// Interpolate towards `other`.
    ///
    /// The translation moves along a straight line and the rotation along
    /// the SLERP arc. A `factor` outside [0, 1] extrapolates.
    pub fn interpolate(&self, other: &Self, factor: T) -> Self {
        Self::new(
            self.rotation.interpolate(&other.rotation, factor),
            self.translation.interpolate(&other.translation, factor),
        )
    }
}

impl<T: FloatScalar> Mul for Pose<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl<T: FloatScalar> Mul<&Pose<T>> for &Pose<T> {
    type Output = Pose<T>;

    #[inline]
    fn mul(self, rhs: &Pose<T>) -> Pose<T> {
        self.compose(rhs)
    }
}

impl<T: FloatScalar> Transform<T> for Pose<T> {
    #[inline]
    fn apply(&self, xyz: [T; 3]) -> [T; 3] {
        self.translation.apply(self.rotation.apply(xyz))
    }
}

// ── Homogeneous matrix ───────────────────────────────────────────────

impl<T: FloatScalar> Pose<T> {
    /// The 4×4 homogeneous matrix `[[R, t], [0, 0, 0, 1]]`.
    pub fn homogeneous(&self) -> [[T; 4]; 4] {
        let r = self.rotation.rows();
        let t = self.translation.as_array();
        let (o, z) = (T::one(), T::zero());
        [
            [r[0][0], r[0][1], r[0][2], t[0]],
            [r[1][0], r[1][1], r[1][2], t[1]],
            [r[2][0], r[2][1], r[2][2], t[2]],
            [z, z, z, o],
        ]
    }

    /// The homogeneous matrix as nested vectors, row by row.
    pub fn to_nested_vec(&self) -> Vec<Vec<T>> {
        self.homogeneous().iter().map(|row| row.to_vec()).collect()
    }

    /// Write rotation and translation from a homogeneous matrix of coercible
    /// inputs. The bottom row is not stored and is not converted.
    pub fn set_homogeneous<V: FieldValue>(&mut self, rows: [[V; 4]; 4]) -> PoseResult<()> {
        let [a, b, c, _] = rows;
        let block = [coerce_array(&a)?, coerce_array(&b)?, coerce_array(&c)?];
        self.set_block(block);
        Ok(())
    }

    /// Write rotation and translation from a nested sequence of coercible
    /// inputs: at least three rows of four entries, any further rows ignored.
    pub fn set_nested<I>(&mut self, rows: I) -> PoseResult<()>
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: FieldValue,
    {
        let block: [[T; 4]; 3] = coerce_nested(rows, true)?;
        self.set_block(block);
        Ok(())
    }

    fn set_block(&mut self, block: [[T; 4]; 3]) {
        let rotation = RotationMatrix::from_rows([
            [block[0][0], block[0][1], block[0][2]],
            [block[1][0], block[1][1], block[1][2]],
            [block[2][0], block[2][1], block[2][2]],
        ]);
        *self = Self::new(
            Rotation::from(rotation),
            Translation::new(block[0][3], block[1][3], block[2][3]),
        );
    }
}

impl<T: FloatScalar> From<Rotation<T>> for Pose<T> {
    fn from(rotation: Rotation<T>) -> Self {
        Self::new(rotation, Translation::default())
    }
}

impl<T: FloatScalar> From<Translation<T>> for Pose<T> {
    fn from(translation: Translation<T>) -> Self {
        Self::new(Rotation::identity(), translation)
    }
}
