use core::ops::{Mul, Neg};

use crate::error::PoseResult;
use crate::traits::{coerce_array, FieldValue, FloatScalar};

/// Rotation quaternion.
///
/// Scalar-first convention: `[w, x, y, z]` where `w` is the scalar part
/// and `(x, y, z)` is the vector part.
///
/// Unit norm is not enforced at construction. Operations that need a unit
/// quaternion (product, inverse, interpolation) normalize their operands
/// first. `q` and `-q` denote the same rotation and no sign convention is
/// imposed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Create a quaternion from components.
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Create a quaternion from components that may need coercion.
    ///
    /// ```
    /// use poser::Quaternion;
    ///
    /// let q = Quaternion::<f64>::try_new("1", 0, 0.0, "0").unwrap();
    /// assert_eq!(q, Quaternion::identity());
    /// assert!(Quaternion::<f64>::try_new("w", 0, 0, 0).is_err());
    /// ```
    pub fn try_new(
        w: impl FieldValue,
        x: impl FieldValue,
        y: impl FieldValue,
        z: impl FieldValue,
    ) -> PoseResult<Self> {
        Ok(Self {
            w: w.to_field()?,
            x: x.to_field()?,
            y: y.to_field()?,
            z: z.to_field()?,
        })
    }

    /// Identity quaternion (no rotation).
    #[inline]
    pub fn identity() -> Self {
        Self {
            w: T::one(),
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Components as `[w, x, y, z]`.
    #[inline]
    pub fn as_array(&self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Overwrite all four components at once from coercible inputs.
    pub fn set_wxyz_from<V: FieldValue>(&mut self, wxyz: [V; 4]) -> PoseResult<()> {
        let [w, x, y, z] = coerce_array(&wxyz)?;
        *self = Self { w, x, y, z };
        Ok(())
    }
}

impl<T: FloatScalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Euclidean norm of the four components.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Normalize in place.
    ///
    /// A quaternion with magnitude exactly one or exactly zero is left as is.
    pub fn normalize(&mut self) {
        let n = self.magnitude();
        if n == T::one() || n == T::zero() {
            return;
        }
        let inv = T::one() / n;
        self.w = self.w * inv;
        self.x = self.x * inv;
        self.y = self.y * inv;
        self.z = self.z * inv;
    }

    /// Normalized copy.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Conjugate: `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Inverse rotation: the conjugate of the normalized quaternion.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.normalized().conjugate()
    }

    /// Invert in place.
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Dot product of two quaternions.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

// ── Interpolation ────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Spherical linear interpolation between `self` and `other`.
    ///
    /// `factor = 0` returns `self`, `factor = 1` returns `other` (both
    /// normalized), and factors outside [0, 1] extrapolate along the same arc.
    /// The path follows the signs the operands currently carry: there is no
    /// hemisphere flip, so `q` and `-q` may interpolate along the long arc.
    /// For exactly opposite operands that arc passes through a quaternion
    /// orthogonal to `self`, and the result is always unit length.
    ///
    /// ```
    /// use poser::Quaternion;
    ///
    /// let a = Quaternion::<f64>::identity();
    /// let b = Quaternion::new(0.0, 0.0, 0.0, 1.0); // 180° about Z
    /// let mid = a.interpolate(&b, 0.5);
    /// assert!((mid.w - mid.z).abs() < 1e-12); // 90° about Z
    /// ```
    pub fn interpolate(&self, other: &Self, factor: T) -> Self {
        let a = self.normalized();
        let b = other.normalized();

        let dot = a.dot(&b).max(-T::one()).min(T::one());

        // |dot| this close to one leaves sin(omega) unusable as a divisor
        let eps = T::from(1e-9)
            .unwrap_or_else(T::epsilon)
            .max(T::epsilon());
        if T::one() - dot.abs() < eps {
            if dot > T::zero() {
                log::trace!("slerp fallback to normalized lerp (dot = {:?})", dot);
                return Self {
                    w: a.w + (b.w - a.w) * factor,
                    x: a.x + (b.x - a.x) * factor,
                    y: a.y + (b.y - a.y) * factor,
                    z: a.z + (b.z - a.z) * factor,
                }
                .normalized();
            }

            // Antipodal operands: take the half circle through `p`, orthogonal to `a`
            log::trace!("slerp between antipodal operands (dot = {:?})", dot);
            let p = Self::new(-a.x, a.w, -a.z, a.y);
            let theta = factor * T::from(core::f64::consts::PI).unwrap_or_else(T::zero);
            let (s, c) = theta.sin_cos();
            return Self {
                w: a.w * c + p.w * s,
                x: a.x * c + p.x * s,
                y: a.y * c + p.y * s,
                z: a.z * c + p.z * s,
            };
        }

        let omega = dot.acos();
        let sin_omega = omega.sin();
        let f1 = ((T::one() - factor) * omega).sin() / sin_omega;
        let f2 = (factor * omega).sin() / sin_omega;
        Self {
            w: a.w * f1 + b.w * f2,
            x: a.x * f1 + b.x * f2,
            y: a.y * f1 + b.y * f2,
            z: a.z * f1 + b.z * f2,
        }
    }
}

// ── Operators ────────────────────────────────────────────────────────

// Hamilton product of the normalized operands: `rhs` is applied first.
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = self.normalized();
        let b = rhs.normalized();
        Self {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        (*self).mul(*rhs)
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            w: -self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: core::fmt::Display> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
