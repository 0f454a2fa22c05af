use alloc::vec::Vec;
use core::ops::{Index, Mul};

use crate::error::PoseResult;
use crate::traits::{coerce_array, coerce_nested, FieldValue, FloatScalar, Transform};

/// 3×3 rotation matrix with named row-major entries.
///
/// Matrices produced by this crate are orthonormal with determinant +1.
/// Direct construction and the bulk setters do not validate that, and
/// [`inverse`](RotationMatrix::inverse) is the transpose, which is only the
/// true inverse of an orthonormal matrix.
///
/// ```
/// use poser::{Point, RotationMatrix, Transform};
///
/// // 90° about Z
/// let m = RotationMatrix::from_rows([
///     [0.0, -1.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 0.0, 1.0],
/// ]);
/// let p = m.transformed_point(&Point::new(1.0, 0.0, 0.0));
/// assert_eq!(p.as_array(), [0.0, 1.0, 0.0]);
/// assert_eq!(m * m.inverse(), RotationMatrix::identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix<T> {
    pub r11: T,
    pub r12: T,
    pub r13: T,
    pub r21: T,
    pub r22: T,
    pub r23: T,
    pub r31: T,
    pub r32: T,
    pub r33: T,
}

impl<T: FloatScalar> RotationMatrix<T> {
    /// Create a matrix from its nine entries, row by row.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(r11: T, r12: T, r13: T, r21: T, r22: T, r23: T, r31: T, r32: T, r33: T) -> Self {
        Self {
            r11,
            r12,
            r13,
            r21,
            r22,
            r23,
            r31,
            r32,
            r33,
        }
    }

    /// Create a matrix from nine entries that may need coercion.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        r11: impl FieldValue,
        r12: impl FieldValue,
        r13: impl FieldValue,
        r21: impl FieldValue,
        r22: impl FieldValue,
        r23: impl FieldValue,
        r31: impl FieldValue,
        r32: impl FieldValue,
        r33: impl FieldValue,
    ) -> PoseResult<Self> {
        Ok(Self::new(
            r11.to_field()?,
            r12.to_field()?,
            r13.to_field()?,
            r21.to_field()?,
            r22.to_field()?,
            r23.to_field()?,
            r31.to_field()?,
            r32.to_field()?,
            r33.to_field()?,
        ))
    }

    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(o, z, z, z, o, z, z, z, o)
    }

    /// Create a matrix from a row-major 2D array.
    #[inline]
    pub fn from_rows(rows: [[T; 3]; 3]) -> Self {
        let [[r11, r12, r13], [r21, r22, r23], [r31, r32, r33]] = rows;
        Self::new(r11, r12, r13, r21, r22, r23, r31, r32, r33)
    }

    /// Entries as a row-major 2D array.
    #[inline]
    pub fn rows(&self) -> [[T; 3]; 3] {
        [
            [self.r11, self.r12, self.r13],
            [self.r21, self.r22, self.r23],
            [self.r31, self.r32, self.r33],
        ]
    }

    /// Entries as nested vectors, row by row.
    pub fn to_nested_vec(&self) -> Vec<Vec<T>> {
        self.rows().iter().map(|row| row.to_vec()).collect()
    }

    /// Overwrite all nine entries from a row-major array of coercible inputs.
    ///
    /// Either every entry converts and all nine are written, or the matrix is
    /// left untouched and the conversion error is returned.
    pub fn set_rows<V: FieldValue>(&mut self, rows: [[V; 3]; 3]) -> PoseResult<()> {
        let [a, b, c] = rows;
        *self = Self::from_rows([coerce_array(&a)?, coerce_array(&b)?, coerce_array(&c)?]);
        Ok(())
    }

    /// Overwrite all nine entries from a nested sequence of coercible inputs.
    ///
    /// The sequence must hold exactly three rows of three entries.
    pub fn set_nested<I>(&mut self, rows: I) -> PoseResult<()>
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: FieldValue,
    {
        *self = Self::from_rows(coerce_nested(rows, false)?);
        Ok(())
    }

    /// Transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.r11, self.r21, self.r31, self.r12, self.r22, self.r32, self.r13, self.r23,
            self.r33,
        )
    }

    /// Inverse of an orthonormal matrix (its transpose).
    #[inline]
    pub fn inverse(&self) -> Self {
        self.transpose()
    }

    /// Invert in place.
    #[inline]
    pub fn invert(&mut self) {
        *self = self.transpose();
    }

    /// Sum of the diagonal entries.
    #[inline]
    pub fn trace(&self) -> T {
        self.r11 + self.r22 + self.r33
    }

    /// Determinant, +1 for a proper rotation.
    pub fn determinant(&self) -> T {
        self.r11 * (self.r22 * self.r33 - self.r23 * self.r32)
            - self.r12 * (self.r21 * self.r33 - self.r23 * self.r31)
            + self.r13 * (self.r21 * self.r32 - self.r22 * self.r31)
    }
}

impl<T: FloatScalar> Default for RotationMatrix<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// Index by (row, col) tuple, zero-based
impl<T: FloatScalar> Index<(usize, usize)> for RotationMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match (row, col) {
            (0, 0) => &self.r11,
            (0, 1) => &self.r12,
            (0, 2) => &self.r13,
            (1, 0) => &self.r21,
            (1, 1) => &self.r22,
            (1, 2) => &self.r23,
            (2, 0) => &self.r31,
            (2, 1) => &self.r32,
            (2, 2) => &self.r33,
            _ => panic!("index ({}, {}) out of bounds for a 3x3 matrix", row, col),
        }
    }
}

// Row-major product: `rhs` is applied first.
impl<T: FloatScalar> Mul for RotationMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = self.rows();
        let b = rhs.rows();
        let mut out = [[T::zero(); 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                out[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Self::from_rows(out)
    }
}

impl<T: FloatScalar> Transform<T> for RotationMatrix<T> {
    #[inline]
    fn apply(&self, [x, y, z]: [T; 3]) -> [T; 3] {
        [
            self.r11 * x + self.r12 * y + self.r13 * z,
            self.r21 * x + self.r22 * y + self.r23 * z,
            self.r31 * x + self.r32 * y + self.r33 * z,
        ]
    }
}
