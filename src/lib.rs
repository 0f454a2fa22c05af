//! # poser
//!
//! Rigid-body pose algebra, no-std compatible. Rotations are kept as a
//! quaternion, a 3×3 matrix and omega-phi-kappa angles at the same time, and
//! poses pair a rotation with a translation.
//!
//! ## Quick start
//!
//! ```
//! use poser::{Opk, Point, Pose, Rotation, Transform, Translation};
//!
//! let pose = Pose::new(
//!     Rotation::new(Opk::new(10.0_f64, 20.0, 30.0)),
//!     Translation::new(1.0, 2.0, 3.0),
//! );
//!
//! // (~pose) * pose is the identity
//! let id = pose.inverse() * pose;
//! assert!(id.translation().magnitude() < 1e-9);
//! assert!((id.rotation().quaternion().w.abs() - 1.0).abs() < 1e-9);
//!
//! let p = pose.transformed_point(&Point::new(0.0, 0.0, 0.0));
//! assert_eq!(p.as_array(), [1.0, 2.0, 3.0]);
//! ```
//!
//! ## Modules
//!
//! - [`quaternion`]: Scalar-first `(w, x, y, z)` quaternion with Hamilton
//!   product, conjugate inverse, normalization and SLERP.
//!
//! - [`matrix`]: Row-major 3×3 [`RotationMatrix`] with transpose inverse,
//!   product and point transforms.
//!
//! - [`opk`]: [`Opk`] Euler angles in degrees, `R = Rx(ω)·Ry(φ)·Rz(κ)`.
//!
//! - [`converter`]: Stateless conversions between the three
//!   representations, including Shepperd's method and gimbal-lock handling.
//!
//! - [`rotation`]: [`Rotation`] aggregate that keeps all three
//!   representations consistent across every write.
//!
//! - [`pose`]: [`Pose`] composition, inversion, interpolation, transforms and the
//!   homogeneous 4×4 form.
//!
//! - [`vector`]: [`Point`] and [`Translation`] value types.
//!
//! - [`traits`]: [`FloatScalar`], the [`FieldValue`] coercion trait, and
//!   the [`Coordinates`] / [`Transform`] seam shared by everything that moves
//!   points.
//!
//! - [`error`]: [`PoseError`] and [`PoseResult`].
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` for [`PoseError`] |
//!
//! The pure-Rust `libm` float routines of `num-traits` are always enabled and
//! serve as the fallback when `std` is off; there is no separate `libm` feature.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod converter;
pub mod error;
pub mod matrix;
pub mod opk;
pub mod pose;
pub mod quaternion;
pub mod rotation;
pub mod traits;
pub mod vector;

pub use error::{PoseError, PoseResult};
pub use matrix::RotationMatrix;
pub use opk::Opk;
pub use pose::Pose;
pub use quaternion::Quaternion;
pub use rotation::{Representation, Rotation};
pub use traits::{Coordinates, FieldValue, FloatScalar, Transform};
pub use vector::{Point, Translation};
