use crate::error::PoseResult;
use crate::traits::{coerce_array, FieldValue, FloatScalar};

/// Omega-phi-kappa Euler angles, in degrees.
///
/// Omega rotates about X, phi about Y and kappa about Z, composed as
/// `Rx(omega) · Ry(phi) · Rz(kappa)`. The canonical branch keeps phi in
/// [-90°, 90°]; at phi = ±90° omega is reported as zero and kappa carries
/// the whole in-plane rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Opk<T> {
    pub omega: T,
    pub phi: T,
    pub kappa: T,
}

impl<T: FloatScalar> Opk<T> {
    #[inline]
    pub fn new(omega: T, phi: T, kappa: T) -> Self {
        Self { omega, phi, kappa }
    }

    /// Create from angles that may need coercion.
    pub fn try_new(
        omega: impl FieldValue,
        phi: impl FieldValue,
        kappa: impl FieldValue,
    ) -> PoseResult<Self> {
        Ok(Self {
            omega: omega.to_field()?,
            phi: phi.to_field()?,
            kappa: kappa.to_field()?,
        })
    }

    /// Create from angles given in radians.
    pub fn from_radians(omega: T, phi: T, kappa: T) -> Self {
        Self::new(omega.to_degrees(), phi.to_degrees(), kappa.to_degrees())
    }

    /// Angles converted to radians, as `[omega, phi, kappa]`.
    pub fn to_radians(&self) -> [T; 3] {
        [
            self.omega.to_radians(),
            self.phi.to_radians(),
            self.kappa.to_radians(),
        ]
    }

    #[inline]
    pub fn as_array(&self) -> [T; 3] {
        [self.omega, self.phi, self.kappa]
    }

    /// Overwrite all three angles from coercible inputs.
    pub fn set_angles_from<V: FieldValue>(&mut self, angles: [V; 3]) -> PoseResult<()> {
        let [omega, phi, kappa] = coerce_array(&angles)?;
        *self = Self { omega, phi, kappa };
        Ok(())
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Opk<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "(omega: {}°, phi: {}°, kappa: {}°)",
            self.omega, self.phi, self.kappa
        )
    }
}
