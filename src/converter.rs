//! Conversions between the three rotation representations.
//!
//! The matrix is the pivot: OPK angles and quaternions are each converted to
//! and from a [`RotationMatrix`], and the composite conversions go through it.
//!
//! ```
//! use poser::converter::{matrix_to_opk, opk_to_matrix};
//! use poser::Opk;
//!
//! let m = opk_to_matrix(&Opk::new(10.0_f64, 20.0, 30.0));
//! let opk = matrix_to_opk(&m);
//! assert!((opk.omega - 10.0).abs() < 1e-9);
//! assert!((opk.phi - 20.0).abs() < 1e-9);
//! assert!((opk.kappa - 30.0).abs() < 1e-9);
//! ```

use crate::matrix::RotationMatrix;
use crate::opk::Opk;
use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;

/// Band around zero in which `cos(phi)` counts as gimbal lock.
///
/// `1e-10`, widened to machine epsilon for scalars too coarse to resolve it.
pub fn gimbal_lock_tolerance<T: FloatScalar>() -> T {
    T::from(1e-10)
        .unwrap_or_else(T::epsilon)
        .max(T::epsilon())
}

/// Extract OPK angles (degrees) from a rotation matrix.
///
/// Away from gimbal lock, `omega = atan2(-r23, r33)` and
/// `kappa = atan2(-r12, r11)`. At phi = ±90° only `omega ± kappa` is
/// determined, so omega is fixed at zero and kappa is read from the second
/// column: `atan2(r32, r22)` for +90°, `atan2(-r32, r22)` for -90°.
pub fn matrix_to_opk<T: FloatScalar>(m: &RotationMatrix<T>) -> Opk<T> {
    let phi = m.r13.atan2((m.r23 * m.r23 + m.r33 * m.r33).sqrt());

    if phi.cos().abs() >= gimbal_lock_tolerance() {
        return Opk::from_radians((-m.r23).atan2(m.r33), phi, (-m.r12).atan2(m.r11));
    }

    log::trace!("gimbal lock at phi = {:?} rad, fixing omega = 0", phi);
    let kappa = if phi > T::zero() {
        m.r32.atan2(m.r22)
    } else {
        (-m.r32).atan2(m.r22)
    };
    Opk::from_radians(T::zero(), phi, kappa)
}

/// Build the rotation matrix `Rx(omega) · Ry(phi) · Rz(kappa)`.
pub fn opk_to_matrix<T: FloatScalar>(opk: &Opk<T>) -> RotationMatrix<T> {
    let [omega, phi, kappa] = opk.to_radians();
    let (so, co) = omega.sin_cos();
    let (sp, cp) = phi.sin_cos();
    let (sk, ck) = kappa.sin_cos();

    RotationMatrix::new(
        cp * ck,
        -cp * sk,
        sp,
        co * sk + so * sp * ck,
        co * ck - so * sp * sk,
        -so * cp,
        so * sk - co * sp * ck,
        so * ck + co * sp * sk,
        co * cp,
    )
}

/// Extract a quaternion from a rotation matrix using Shepperd's method.
///
/// With a positive trace the scalar part is extracted first and `w > 0`.
/// Otherwise the largest diagonal entry selects which vector component is
/// extracted first, so the divisor stays away from zero; the sign of the
/// result is not normalized in that branch.
pub fn matrix_to_quaternion<T: FloatScalar>(m: &RotationMatrix<T>) -> Quaternion<T> {
    let half = T::one() / (T::one() + T::one());
    let trace = m.trace();

    if trace > T::zero() {
        let d = (trace + T::one()).sqrt();
        let f = half / d;
        return Quaternion::new(
            half * d,
            (m.r32 - m.r23) * f,
            (m.r13 - m.r31) * f,
            (m.r21 - m.r12) * f,
        );
    }

    let r = m.rows();
    let mut i = 0;
    if r[1][1] > r[0][0] {
        i = 1;
    }
    if r[2][2] > r[i][i] {
        i = 2;
    }
    let j = (i + 1) % 3;
    let k = (j + 1) % 3;

    let d = (r[i][i] - r[j][j] - r[k][k] + T::one()).sqrt();
    let f = half / d;
    let mut v = [T::zero(); 3];
    v[i] = half * d;
    v[j] = (r[j][i] + r[i][j]) * f;
    v[k] = (r[k][i] + r[i][k]) * f;
    let w = (r[k][j] - r[j][k]) * f;

    Quaternion::new(w, v[0], v[1], v[2])
}

/// Build the rotation matrix of a quaternion.
///
/// The quaternion is normalized first (without modifying the argument), so
/// any non-zero quaternion yields an orthonormal matrix.
pub fn quaternion_to_matrix<T: FloatScalar>(q: &Quaternion<T>) -> RotationMatrix<T> {
    let q = q.normalized();
    let two = T::one() + T::one();
    let (w, x, y, z) = (q.w, q.x, q.y, q.z);

    let xx = x * x;
    let yy = y * y;
    let zz = z * z;
    let xy = x * y;
    let xz = x * z;
    let yz = y * z;
    let wx = w * x;
    let wy = w * y;
    let wz = w * z;

    RotationMatrix::new(
        T::one() - two * (yy + zz),
        two * (xy - wz),
        two * (xz + wy),
        two * (xy + wz),
        T::one() - two * (xx + zz),
        two * (yz - wx),
        two * (xz - wy),
        two * (yz + wx),
        T::one() - two * (xx + yy),
    )
}

/// OPK angles of a quaternion, through its matrix.
pub fn quaternion_to_opk<T: FloatScalar>(q: &Quaternion<T>) -> Opk<T> {
    matrix_to_opk(&quaternion_to_matrix(q))
}

/// Quaternion of OPK angles, through their matrix.
pub fn opk_to_quaternion<T: FloatScalar>(opk: &Opk<T>) -> Quaternion<T> {
    matrix_to_quaternion(&opk_to_matrix(opk))
}
