//! Camera model: a pinhole sensor's viewing frustum tracked through a moving pose.
//!
//! Intrinsics are set once and fix the eight frustum corners in the sensor
//! frame. Every pose update transforms those corners into the global frame and
//! rebuilds the six bounding planes and the axis-aligned bounding box from
//! scratch.
//!
//! [`CameraModel::is_point_in_view`] tests only the planes. Callers culling many
//! points should first reject against [`CameraModel::aabb`], which is much
//! cheaper.

mod frustum_corners;

pub use frustum_corners::FrustumCorners;

use glam::DVec2;
use sensor_frustum_core::{
    Aabb, CameraConfig, FrustumError, Plane, PlaneOrientation, Point, Result, Transformation,
};

/// Index of the near plane in [`CameraModel::bounding_planes`].
pub const PLANE_NEAR: usize = 0;
/// Index of the far plane.
pub const PLANE_FAR: usize = 1;
/// Index of the left plane (-Y side of the sensor).
pub const PLANE_LEFT: usize = 2;
/// Index of the right plane (+Y side of the sensor).
pub const PLANE_RIGHT: usize = 3;
/// Index of the top plane (+Z side of the sensor).
pub const PLANE_TOP: usize = 4;
/// Index of the bottom plane (-Z side of the sensor).
pub const PLANE_BOTTOM: usize = 5;

const PLANE_NAMES: [&str; 6] = ["near", "far", "left", "right", "top", "bottom"];

/// Corner triples spanning each bounding plane. Their winding already makes the
/// frustum interior the inside half-space.
const PLANE_CORNERS: [[usize; 3]; 6] = [
    [0, 2, 1], // near
    [4, 5, 6], // far
    [3, 6, 2], // left
    [0, 5, 4], // right
    [3, 4, 7], // top
    [2, 6, 5], // bottom
];

/// Corner pairs forming the twelve frustum edges.
const FRUSTUM_EDGES: [[usize; 2]; 12] = [
    // Near rectangle
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    // Far rectangle
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    // Near to far
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

fn log_rejected(err: FrustumError) -> FrustumError {
    log::warn!("rejected camera configuration: {err}");
    err
}

/// A pinhole sensor with a time-varying pose.
///
/// Poses use the `T_A_B` convention (maps frame `B` into frame `A`): `T_C_B` is
/// the sensor-to-body extrinsic offset and `T_G_C` the sensor pose in the
/// global frame.
#[derive(Debug, Clone, Default)]
pub struct CameraModel {
    // Frustum corners in the sensor frame; `None` until intrinsics are set.
    untransformed_corners: Option<FrustumCorners>,

    t_c_b: Transformation,
    t_g_c: Transformation,

    // Derived from the corners and `t_g_c`.
    bounding_planes: Option<[Plane; 6]>,
    aabb: Option<Aabb>,
}

impl CameraModel {
    /// Creates an uninitialized camera model with identity extrinsics and pose.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a camera model from a configuration, applying its intrinsics
    /// and extrinsics.
    pub fn from_config(config: &CameraConfig) -> Result<Self> {
        let corners = FrustumCorners::from_config(
            &config.intrinsics,
            config.min_distance,
            config.max_distance,
        )
        .map_err(log_rejected)?;
        let t_c_b = config
            .normalized_extrinsics()
            .map_err(log_rejected)?;

        let mut camera = Self::new();
        camera.set_intrinsics(corners);
        camera.set_extrinsics(t_c_b);
        Ok(camera)
    }

    // ===== INTRINSICS =====

    /// Sets the intrinsics from an image resolution (width, height) and a
    /// focal length, both in pixels.
    ///
    /// On error the previous intrinsics are kept.
    pub fn set_intrinsics_from_focal_length(
        &mut self,
        resolution: DVec2,
        focal_length: f64,
        min_distance: f64,
        max_distance: f64,
    ) -> Result<()> {
        let corners =
            FrustumCorners::from_focal_length(resolution, focal_length, min_distance, max_distance)
                .map_err(log_rejected)?;
        self.set_intrinsics(corners);
        Ok(())
    }

    /// Sets the intrinsics from the full horizontal and vertical field of view
    /// in radians.
    ///
    /// On error the previous intrinsics are kept.
    pub fn set_intrinsics_from_fov(
        &mut self,
        horizontal_fov: f64,
        vertical_fov: f64,
        min_distance: f64,
        max_distance: f64,
    ) -> Result<()> {
        let corners =
            FrustumCorners::from_fov(horizontal_fov, vertical_fov, min_distance, max_distance)
                .map_err(log_rejected)?;
        self.set_intrinsics(corners);
        Ok(())
    }

    /// Replaces the frustum corners.
    ///
    /// The bounding planes and AABB are rebuilt on the next pose update.
    pub fn set_intrinsics(&mut self, corners: FrustumCorners) {
        log::debug!(
            "camera intrinsics: fov {:.4} x {:.4} rad, depth [{}, {}]",
            corners.horizontal_fov(),
            corners.vertical_fov(),
            corners.min_distance(),
            corners.max_distance()
        );
        self.untransformed_corners = Some(corners);
    }

    /// Returns whether intrinsics have been set.
    pub fn is_initialized(&self) -> bool {
        self.untransformed_corners.is_some()
    }

    /// Returns the frustum corners in the sensor frame, if initialized.
    pub fn untransformed_corners(&self) -> Option<&FrustumCorners> {
        self.untransformed_corners.as_ref()
    }

    // ===== EXTRINSICS & POSE =====

    /// Sets the sensor-to-body offset `T_C_B`. Does not touch the current pose.
    pub fn set_extrinsics(&mut self, t_c_b: Transformation) {
        log::debug!("camera extrinsics: {t_c_b:?}");
        self.t_c_b = t_c_b;
    }

    /// Returns the sensor-to-body offset `T_C_B`.
    pub fn extrinsics(&self) -> Transformation {
        self.t_c_b
    }

    /// Sets the sensor pose `T_G_C` and rebuilds the bounding planes and AABB.
    pub fn set_camera_pose(&mut self, t_g_c: Transformation) {
        self.t_g_c = t_g_c;
        self.calculate_bounding_planes();
    }

    /// Sets the body pose `T_G_B`; the sensor pose becomes `T_G_B * T_C_B^-1`.
    pub fn set_body_pose(&mut self, t_g_b: Transformation) {
        self.set_camera_pose(t_g_b * self.t_c_b.inverse());
    }

    /// Returns the sensor pose `T_G_C`.
    pub fn camera_pose(&self) -> Transformation {
        self.t_g_c
    }

    /// Returns the body pose `T_G_B = T_G_C * T_C_B`.
    pub fn body_pose(&self) -> Transformation {
        self.t_g_c * self.t_c_b
    }

    // ===== DERIVED GEOMETRY =====

    fn calculate_bounding_planes(&mut self) {
        let Some(local) = self.untransformed_corners else {
            log::trace!("camera model not initialized, skipping bounding planes");
            return;
        };

        let t_g_c = self.t_g_c;
        let corners = (*local.points()).map(|p| t_g_c * p);
        let interior = t_g_c * local.centroid();

        let planes = PLANE_CORNERS.map(|[i, j, k]| {
            Plane::from_points_oriented(
                corners[i],
                corners[j],
                corners[k],
                PlaneOrientation::Facing(interior),
            )
        });
        for (name, plane) in PLANE_NAMES.iter().zip(planes.iter()) {
            log::trace!(
                "{name} plane: normal {:?} distance {}",
                plane.normal(),
                plane.distance()
            );
        }

        let aabb = Aabb::from_points(corners);
        log::trace!("AABB min {:?} max {:?}", aabb.min, aabb.max);

        self.bounding_planes = Some(planes);
        self.aabb = Some(aabb);
    }

    /// Returns the frustum corners in the global frame at the current pose.
    pub fn transformed_corners(&self) -> Option<[Point; 8]> {
        let corners = self.untransformed_corners.as_ref()?;
        Some((*corners.points()).map(|p| self.t_g_c * p))
    }

    /// Returns the six bounding planes in the global frame, indexed by
    /// [`PLANE_NEAR`] through [`PLANE_BOTTOM`].
    ///
    /// `None` until a pose has been set on an initialized model.
    pub fn bounding_planes(&self) -> Option<&[Plane; 6]> {
        self.bounding_planes.as_ref()
    }

    /// Returns the axis-aligned bounding box of the frustum from the last
    /// pose update.
    pub fn aabb(&self) -> Option<Aabb> {
        self.aabb
    }

    /// Returns the twelve frustum edges in the global frame.
    pub fn bounding_lines(&self) -> Option<[(Point, Point); 12]> {
        let corners = self.transformed_corners()?;
        Some(FRUSTUM_EDGES.map(|[a, b]| (corners[a], corners[b])))
    }

    /// Returns the four far-plane corners in the global frame.
    pub fn far_plane_points(&self) -> Option<[Point; 4]> {
        let corners = self.transformed_corners()?;
        Some([corners[4], corners[5], corners[6], corners[7]])
    }

    // ===== QUERIES =====

    /// Returns whether a point lies inside all six bounding planes.
    ///
    /// This does not consult the AABB. Before any bounding planes exist, no
    /// point is in view.
    pub fn is_point_in_view(&self, point: Point) -> bool {
        let Some(planes) = &self.bounding_planes else {
            return false;
        };
        for (name, plane) in PLANE_NAMES.iter().zip(planes.iter()) {
            if !plane.is_point_inside(point) {
                log::trace!("point {point:?} outside {name} plane");
                return false;
            }
        }
        true
    }
}
