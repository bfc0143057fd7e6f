//! Sensor configuration and intrinsics validation.
//!
//! Angles are radians, distances are in the unit of the poses (usually meters).

use std::f64::consts::PI;
use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{FrustumError, Result};
use crate::transform::Transformation;

/// How the angular extent of the sensor is specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IntrinsicsConfig {
    /// Image resolution (width, height) in pixels and focal length in pixels.
    FocalLength { resolution: DVec2, focal_length: f64 },
    /// Full horizontal and vertical field of view.
    FieldOfView { horizontal_fov: f64, vertical_fov: f64 },
}

impl IntrinsicsConfig {
    /// Resolves this configuration to a validated `(horizontal, vertical)`
    /// field of view pair.
    pub fn field_of_view(&self) -> Result<(f64, f64)> {
        match *self {
            Self::FocalLength {
                resolution,
                focal_length,
            } => fov_from_focal_length(resolution, focal_length),
            Self::FieldOfView {
                horizontal_fov,
                vertical_fov,
            } => {
                validate_field_of_view("horizontal", horizontal_fov)?;
                validate_field_of_view("vertical", vertical_fov)?;
                Ok((horizontal_fov, vertical_fov))
            }
        }
    }
}

impl Default for IntrinsicsConfig {
    fn default() -> Self {
        Self::FieldOfView {
            horizontal_fov: PI / 2.0,
            vertical_fov: PI / 3.0,
        }
    }
}

/// Complete description of a sensor for building a camera model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Angular extent of the sensor.
    pub intrinsics: IntrinsicsConfig,
    /// Depth of the near plane.
    pub min_distance: f64,
    /// Depth of the far plane.
    pub max_distance: f64,
    /// Sensor-to-body offset `T_C_B`. Identity when omitted.
    pub extrinsics: Option<Transformation>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            intrinsics: IntrinsicsConfig::default(),
            min_distance: 0.1,
            max_distance: 5.0,
            extrinsics: None,
        }
    }
}

impl CameraConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes this configuration to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every numerical precondition of the configuration.
    pub fn validate(&self) -> Result<()> {
        self.intrinsics.field_of_view()?;
        validate_depth_range(self.min_distance, self.max_distance)?;
        self.normalized_extrinsics()?;
        Ok(())
    }

    /// Returns the configured extrinsics with a renormalized rotation, or the
    /// identity when none are configured.
    pub fn normalized_extrinsics(&self) -> Result<Transformation> {
        let Some(t_c_b) = self.extrinsics else {
            return Ok(Transformation::IDENTITY);
        };
        if !t_c_b.is_finite() {
            return Err(FrustumError::InvalidExtrinsics(format!(
                "non-finite component in {t_c_b:?}"
            )));
        }
        let norm = t_c_b.rotation.length();
        if norm < 1e-9 {
            return Err(FrustumError::InvalidExtrinsics(
                "rotation quaternion has zero length".to_string(),
            ));
        }
        Ok(Transformation::new(t_c_b.rotation / norm, t_c_b.translation))
    }
}

/// Converts a resolution and focal length to a `(horizontal, vertical)` field
/// of view, `2 * atan(size / (2 * f))` per axis.
pub fn fov_from_focal_length(resolution: DVec2, focal_length: f64) -> Result<(f64, f64)> {
    if !focal_length.is_finite() || focal_length <= 0.0 {
        return Err(FrustumError::InvalidFocalLength(focal_length));
    }
    if !resolution.is_finite() || resolution.x <= 0.0 || resolution.y <= 0.0 {
        return Err(FrustumError::InvalidResolution {
            width: resolution.x,
            height: resolution.y,
        });
    }

    let horizontal_fov = 2.0 * (resolution.x / (2.0 * focal_length)).atan();
    let vertical_fov = 2.0 * (resolution.y / (2.0 * focal_length)).atan();
    Ok((horizontal_fov, vertical_fov))
}

/// Checks that a full field of view angle lies in `(0, pi)`.
pub fn validate_field_of_view(axis: &'static str, angle: f64) -> Result<()> {
    if angle.is_finite() && angle > 0.0 && angle < PI {
        Ok(())
    } else {
        Err(FrustumError::InvalidFieldOfView { axis, angle })
    }
}

/// Checks that `0 < min_distance < max_distance`, both finite.
pub fn validate_depth_range(min_distance: f64, max_distance: f64) -> Result<()> {
    if min_distance.is_finite()
        && max_distance.is_finite()
        && min_distance > 0.0
        && min_distance < max_distance
    {
        Ok(())
    } else {
        Err(FrustumError::InvalidDepthRange {
            min: min_distance,
            max: max_distance,
        })
    }
}
