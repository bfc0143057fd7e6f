//! sensor-frustum: view-frustum geometry for pinhole sensors on a moving body.
//!
//! A [`CameraModel`] holds the intrinsics of a depth camera or similar sensor,
//! its fixed offset from the body it is mounted on, and its current pose. From
//! these it maintains the six bounding planes of the viewing frustum and an
//! axis-aligned bounding box, so that map points can be culled quickly.
//!
//! # Quick Start
//!
//! ```
//! use sensor_frustum::*;
//!
//! fn main() -> Result<()> {
//!     let mut camera = CameraModel::new();
//!     camera.set_intrinsics_from_fov(1.5, 1.0, 0.2, 5.0)?;
//!     camera.set_camera_pose(Transformation::from_translation(DVec3::new(0.0, 0.0, 1.0)));
//!
//!     let point = DVec3::new(2.0, 0.0, 1.0);
//!     let visible = camera.aabb().is_some_and(|aabb| aabb.contains(point))
//!         && camera.is_point_in_view(point);
//!     assert!(visible);
//!     Ok(())
//! }
//! ```
//!
//! # Frames
//!
//! Transformations follow the `T_A_B` convention: `T_A_B` maps points from
//! frame `B` into frame `A`. The sensor looks along its local +X axis.
//!
//! - `T_C_B`: extrinsics, body frame into sensor frame
//! - `T_G_C`: sensor pose in the global frame
//! - `T_G_B`: body pose in the global frame

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod camera_model;

pub use camera_model::{
    CameraModel, FrustumCorners, PLANE_BOTTOM, PLANE_FAR, PLANE_LEFT, PLANE_NEAR, PLANE_RIGHT,
    PLANE_TOP,
};

// Re-export core types
pub use sensor_frustum_core::{
    aabb::Aabb,
    config::{CameraConfig, IntrinsicsConfig},
    error::{FrustumError, Result},
    plane::{Plane, PlaneOrientation},
    transform::Transformation,
    DMat4, DQuat, DVec2, DVec3, Point,
};
