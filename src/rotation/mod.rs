//! Rotation aggregate keeping a quaternion, a matrix and OPK angles in sync.
//!
//! A [`Rotation`] is built from any one representation and derives the other
//! two through the matrix:
//!
//! | written          | derived                                        |
//! |------------------|------------------------------------------------|
//! | quaternion       | matrix from the quaternion, OPK from the matrix |
//! | matrix           | OPK and quaternion, both from the matrix        |
//! | OPK              | matrix from OPK, quaternion from the matrix     |
//!
//! Every setter computes the full new state before assigning it, and the
//! fallible setters return without touching the rotation on error.
//!
//! ```
//! use poser::{Opk, Point, Rotation, Transform};
//!
//! let r = Rotation::new(Opk::new(0.0_f64, 0.0, 90.0));
//! assert!((r.quaternion().w - r.quaternion().z).abs() < 1e-12);
//!
//! let p = r.transformed_point(&Point::new(1.0, 0.0, 0.0));
//! assert!((p.y - 1.0).abs() < 1e-12);
//!
//! let back = r.inverse() * r;
//! assert!((back.quaternion().w - 1.0).abs() < 1e-12);
//! ```

#[cfg(test)]
mod tests;

use alloc::vec::Vec;
use core::ops::Mul;

use crate::converter;
use crate::error::PoseResult;
use crate::matrix::RotationMatrix;
use crate::opk::Opk;
use crate::quaternion::Quaternion;
use crate::traits::{FieldValue, FloatScalar, Transform};

/// One of the three rotation representations a [`Rotation`] can be built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Representation<T> {
    Quaternion(Quaternion<T>),
    Matrix(RotationMatrix<T>),
    Opk(Opk<T>),
}

impl<T> From<Quaternion<T>> for Representation<T> {
    fn from(q: Quaternion<T>) -> Self {
        Representation::Quaternion(q)
    }
}

impl<T> From<RotationMatrix<T>> for Representation<T> {
    fn from(m: RotationMatrix<T>) -> Self {
        Representation::Matrix(m)
    }
}

impl<T> From<Opk<T>> for Representation<T> {
    fn from(o: Opk<T>) -> Self {
        Representation::Opk(o)
    }
}

/// A rotation held simultaneously as quaternion, matrix and OPK angles.
///
/// The three representations always describe the same rotation. The stored
/// quaternion is normalized; a zero quaternion is taken as the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation<T> {
    quaternion: Quaternion<T>,
    matrix: RotationMatrix<T>,
    opk: Opk<T>,
}

impl<T: FloatScalar> Rotation<T> {
    /// Build from any representation.
    pub fn new(rotation: impl Into<Representation<T>>) -> Self {
        match rotation.into() {
            Representation::Quaternion(q) => Self::from_quaternion(q),
            Representation::Matrix(m) => Self::from_matrix(m),
            Representation::Opk(o) => Self::from_opk(o),
        }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self {
            quaternion: Quaternion::identity(),
            matrix: RotationMatrix::identity(),
            opk: Opk::default(),
        }
    }

    fn from_quaternion(q: Quaternion<T>) -> Self {
        if q.magnitude() == T::zero() {
            log::debug!("zero quaternion has no rotation, using identity");
            return Self::identity();
        }
        let quaternion = q.normalized();
        let matrix = converter::quaternion_to_matrix(&quaternion);
        let opk = converter::matrix_to_opk(&matrix);
        Self {
            quaternion,
            matrix,
            opk,
        }
    }

    fn from_matrix(matrix: RotationMatrix<T>) -> Self {
        let opk = converter::matrix_to_opk(&matrix);
        let quaternion = converter::matrix_to_quaternion(&matrix).normalized();
        Self {
            quaternion,
            matrix,
            opk,
        }
    }

    fn from_opk(opk: Opk<T>) -> Self {
        let matrix = converter::opk_to_matrix(&opk);
        let quaternion = converter::matrix_to_quaternion(&matrix).normalized();
        Self {
            quaternion,
            matrix,
            opk,
        }
    }
}

impl<T: FloatScalar> Default for Rotation<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar> From<Quaternion<T>> for Rotation<T> {
    fn from(q: Quaternion<T>) -> Self {
        Self::from_quaternion(q)
    }
}

impl<T: FloatScalar> From<RotationMatrix<T>> for Rotation<T> {
    fn from(m: RotationMatrix<T>) -> Self {
        Self::from_matrix(m)
    }
}

impl<T: FloatScalar> From<Opk<T>> for Rotation<T> {
    fn from(o: Opk<T>) -> Self {
        Self::from_opk(o)
    }
}

// ── Accessors ────────────────────────────────────────────────────────

impl<T: FloatScalar> Rotation<T> {
    #[inline]
    pub fn quaternion(&self) -> &Quaternion<T> {
        &self.quaternion
    }

    #[inline]
    pub fn matrix(&self) -> &RotationMatrix<T> {
        &self.matrix
    }

    #[inline]
    pub fn opk(&self) -> &Opk<T> {
        &self.opk
    }

    /// Matrix entries as a row-major 2D array.
    #[inline]
    pub fn rows(&self) -> [[T; 3]; 3] {
        self.matrix.rows()
    }

    /// Matrix entries as nested vectors, row by row.
    pub fn to_nested_vec(&self) -> Vec<Vec<T>> {
        self.matrix.to_nested_vec()
    }

    /// Replace the rotation with `q` and re-derive matrix and OPK.
    pub fn set_quaternion(&mut self, q: Quaternion<T>) {
        *self = Self::from_quaternion(q);
    }

    /// Replace the rotation with `m` and re-derive quaternion and OPK.
    pub fn set_matrix(&mut self, m: RotationMatrix<T>) {
        *self = Self::from_matrix(m);
    }

    /// Replace the rotation with `opk` and re-derive matrix and quaternion.
    pub fn set_opk(&mut self, opk: Opk<T>) {
        *self = Self::from_opk(opk);
    }

    /// Write all nine matrix entries from coercible inputs.
    pub fn set_rows<V: FieldValue>(&mut self, rows: [[V; 3]; 3]) -> PoseResult<()> {
        let mut m = self.matrix;
        m.set_rows(rows)?;
        self.set_matrix(m);
        Ok(())
    }

    /// Write all nine matrix entries from a nested sequence of coercible
    /// inputs (three rows of three).
    pub fn set_nested<I>(&mut self, rows: I) -> PoseResult<()>
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: FieldValue,
    {
        let mut m = self.matrix;
        m.set_nested(rows)?;
        self.set_matrix(m);
        Ok(())
    }
}

// ── Algebra ──────────────────────────────────────────────────────────

impl<T: FloatScalar> Rotation<T> {
    /// The inverse rotation, rebuilt from the conjugate quaternion.
    pub fn inverse(&self) -> Self {
        Self::from_quaternion(self.quaternion.inverse())
    }

    /// Invert in place.
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Spherical interpolation of the quaternions, rebuilt into a rotation.
    pub fn interpolate(&self, other: &Self, factor: T) -> Self {
        Self::from_quaternion(self.quaternion.interpolate(&other.quaternion, factor))
    }
}

// Quaternion product: `rhs` is applied first.
impl<T: FloatScalar> Mul for Rotation<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_quaternion(self.quaternion * rhs.quaternion)
    }
}

impl<T: FloatScalar> Mul<&Rotation<T>> for &Rotation<T> {
    type Output = Rotation<T>;

    #[inline]
    fn mul(self, rhs: &Rotation<T>) -> Rotation<T> {
        (*self).mul(*rhs)
    }
}

impl<T: FloatScalar> Transform<T> for Rotation<T> {
    #[inline]
    fn apply(&self, xyz: [T; 3]) -> [T; 3] {
        self.matrix.apply(xyz)
    }
}
