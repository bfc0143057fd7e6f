//! Error types for sensor-frustum.

use thiserror::Error;

/// The main error type for sensor-frustum operations.
///
/// Numerical preconditions on the sensor model are checked when it is
/// configured; pose updates and queries never fail.
#[derive(Error, Debug)]
pub enum FrustumError {
    /// The focal length is not a finite, strictly positive number.
    #[error("invalid focal length {0}: must be finite and > 0")]
    InvalidFocalLength(f64),

    /// The image resolution has a non-positive or non-finite component.
    #[error("invalid resolution {width}x{height}: both axes must be finite and > 0")]
    InvalidResolution { width: f64, height: f64 },

    /// A field of view angle lies outside the open interval (0, pi).
    #[error("invalid {axis} field of view {angle} rad: must lie in (0, pi)")]
    InvalidFieldOfView { axis: &'static str, angle: f64 },

    /// The depth range does not satisfy `0 < min < max`.
    #[error("invalid depth range [{min}, {max}]: expected 0 < min < max")]
    InvalidDepthRange { min: f64, max: f64 },

    /// The configured extrinsic transform cannot describe a rigid motion.
    #[error("invalid extrinsics: {0}")]
    InvalidExtrinsics(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for sensor-frustum operations.
pub type Result<T> = std::result::Result<T, FrustumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FrustumError::InvalidDepthRange { min: 2.0, max: 1.0 };
        assert_eq!(
            err.to_string(),
            "invalid depth range [2, 1]: expected 0 < min < max"
        );

        let err = FrustumError::InvalidFieldOfView {
            axis: "horizontal",
            angle: 4.0,
        };
        assert!(err.to_string().contains("horizontal"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<f64>("not json").unwrap_err();
        let err: FrustumError = json_err.into();
        assert!(matches!(err, FrustumError::JsonError(_)));
    }
}
