//! Frustum corners in the sensor frame, derived from the intrinsics.

use glam::DVec2;
use sensor_frustum_core::config::{
    fov_from_focal_length, validate_depth_range, validate_field_of_view,
};
use sensor_frustum_core::{IntrinsicsConfig, Point, Result};

/// The eight corners of the viewing frustum in the sensor frame.
///
/// The sensor looks along local +X, with +Y the horizontal axis and +Z the
/// vertical axis. Corners 0-3 lie on the near plane and 4-7 on the far plane,
/// each group ordered (+h +v), (+h -v), (-h -v), (-h +v).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumCorners {
    points: [Point; 8],
    horizontal_fov: f64,
    vertical_fov: f64,
    min_distance: f64,
    max_distance: f64,
}

impl FrustumCorners {
    /// Number of corners.
    pub const COUNT: usize = 8;

    /// Computes the corners from a full horizontal and vertical field of view
    /// in radians and the near and far depths.
    pub fn from_fov(
        horizontal_fov: f64,
        vertical_fov: f64,
        min_distance: f64,
        max_distance: f64,
    ) -> Result<Self> {
        validate_field_of_view("horizontal", horizontal_fov)?;
        validate_field_of_view("vertical", vertical_fov)?;
        validate_depth_range(min_distance, max_distance)?;

        let tan_half_horizontal = (horizontal_fov / 2.0).tan();
        let tan_half_vertical = (vertical_fov / 2.0).tan();

        let rectangle = |depth: f64| {
            let h = depth * tan_half_horizontal;
            let v = depth * tan_half_vertical;
            [
                Point::new(depth, h, v),
                Point::new(depth, h, -v),
                Point::new(depth, -h, -v),
                Point::new(depth, -h, v),
            ]
        };
        let [n0, n1, n2, n3] = rectangle(min_distance);
        let [f0, f1, f2, f3] = rectangle(max_distance);

        Ok(Self {
            points: [n0, n1, n2, n3, f0, f1, f2, f3],
            horizontal_fov,
            vertical_fov,
            min_distance,
            max_distance,
        })
    }

    /// Computes the corners from an image resolution (width, height) and a
    /// focal length, both in pixels.
    pub fn from_focal_length(
        resolution: DVec2,
        focal_length: f64,
        min_distance: f64,
        max_distance: f64,
    ) -> Result<Self> {
        let (horizontal_fov, vertical_fov) = fov_from_focal_length(resolution, focal_length)?;
        Self::from_fov(horizontal_fov, vertical_fov, min_distance, max_distance)
    }

    /// Computes the corners from a serialized intrinsics description.
    pub fn from_config(
        intrinsics: &IntrinsicsConfig,
        min_distance: f64,
        max_distance: f64,
    ) -> Result<Self> {
        let (horizontal_fov, vertical_fov) = intrinsics.field_of_view()?;
        Self::from_fov(horizontal_fov, vertical_fov, min_distance, max_distance)
    }

    /// All eight corners, near plane first.
    pub fn points(&self) -> &[Point; 8] {
        &self.points
    }

    /// The four near-plane corners.
    pub fn near(&self) -> &[Point] {
        &self.points[..4]
    }

    /// The four far-plane corners.
    pub fn far(&self) -> &[Point] {
        &self.points[4..]
    }

    /// The mean of the corners, which lies strictly inside the frustum.
    pub fn centroid(&self) -> Point {
        self.points.iter().fold(Point::ZERO, |sum, p| sum + *p) / 8.0
    }

    /// Full horizontal field of view in radians.
    pub fn horizontal_fov(&self) -> f64 {
        self.horizontal_fov
    }

    /// Full vertical field of view in radians.
    pub fn vertical_fov(&self) -> f64 {
        self.vertical_fov
    }

    /// Depth of the near plane.
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Depth of the far plane.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}
