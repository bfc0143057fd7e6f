//! Rigid body transforms.
//!
//! Poses follow the `T_A_B` naming convention: `T_A_B` maps points expressed
//! in frame `B` into frame `A`, and `T_A_B * T_B_C == T_A_C`.

use std::ops::Mul;

use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::Point;

/// A rigid transformation made of a rotation followed by a translation.
///
/// Unlike a general affine transform, this never carries scale or shear, so
/// its inverse always exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    /// Rotation component as a unit quaternion.
    pub rotation: DQuat,
    /// Translation component.
    pub translation: DVec3,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transformation {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rotation: DQuat::IDENTITY,
        translation: DVec3::ZERO,
    };

    /// Creates a transform from a rotation and a translation.
    #[must_use]
    pub fn new(rotation: DQuat, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Creates a pure translation.
    #[must_use]
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Creates a pure rotation.
    #[must_use]
    pub fn from_rotation(rotation: DQuat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Creates a transform rotating by `angle` radians about `axis`, then
    /// translating. The axis does not need to be normalized.
    #[must_use]
    pub fn from_axis_angle(axis: DVec3, angle: f64, translation: DVec3) -> Self {
        Self {
            rotation: DQuat::from_axis_angle(axis.normalize(), angle),
            translation,
        }
    }

    /// Creates a transform from a 4x4 matrix.
    ///
    /// Any scale in the matrix is discarded.
    #[must_use]
    pub fn from_matrix(matrix: DMat4) -> Self {
        let (_scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self {
            rotation,
            translation,
        }
    }

    /// Converts this transform to a homogeneous 4x4 matrix.
    #[must_use]
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Returns the inverse transform, so that `t * t.inverse()` is the identity.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            rotation,
            translation: -(rotation * self.translation),
        }
    }

    /// Maps a point through this transform.
    #[must_use]
    pub fn transform_point(&self, point: Point) -> Point {
        self.rotation * point + self.translation
    }

    /// Rotates a direction vector, ignoring the translation.
    #[must_use]
    pub fn transform_vector(&self, vector: DVec3) -> DVec3 {
        self.rotation * vector
    }

    /// Returns whether both transforms agree within `epsilon`.
    ///
    /// A quaternion and its negation encode the same rotation, so rotations are
    /// compared up to sign.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        let rotation_matches = self.rotation.abs_diff_eq(other.rotation, epsilon)
            || self.rotation.abs_diff_eq(-other.rotation, epsilon);
        rotation_matches && self.translation.abs_diff_eq(other.translation, epsilon)
    }

    /// Returns whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.rotation.is_finite() && self.translation.is_finite()
    }
}

impl Mul for Transformation {
    type Output = Transformation;

    /// Composes two transforms: `rhs` is applied first.
    fn mul(self, rhs: Transformation) -> Transformation {
        Transformation {
            rotation: self.rotation * rhs.rotation,
            translation: self.translation + self.rotation * rhs.translation,
        }
    }
}

impl Mul<Point> for Transformation {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.transform_point(rhs)
    }
}
