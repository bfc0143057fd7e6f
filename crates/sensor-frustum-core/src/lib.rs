//! Core primitives for sensor-frustum.
//!
//! This crate provides the geometric building blocks used by the camera model:
//! - [`Plane`] half-spaces with an explicit or winding-derived inside sense
//! - [`Aabb`] axis-aligned bounding boxes
//! - [`Transformation`] rigid transforms for sensor extrinsics and poses
//! - [`CameraConfig`] serializable sensor configuration and its validation

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors and constructors return plain values
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod aabb;
pub mod config;
pub mod error;
pub mod plane;
pub mod transform;

pub use aabb::Aabb;
pub use config::{CameraConfig, IntrinsicsConfig};
pub use error::{FrustumError, Result};
pub use plane::{Plane, PlaneOrientation};
pub use transform::Transformation;

/// A point or direction in 3D space.
pub type Point = glam::DVec3;

// Re-export glam types for convenience
pub use glam::{DMat4, DQuat, DVec2, DVec3};
