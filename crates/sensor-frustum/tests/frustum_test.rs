//! Integration tests for the camera model.
//!
//! These exercise the public API end to end: configuring a sensor, moving it
//! through poses, and culling points against the resulting frustum.

use std::f64::consts::{FRAC_PI_2, PI};

use sensor_frustum::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn square_camera() -> CameraModel {
    let mut camera = CameraModel::new();
    camera
        .set_intrinsics_from_fov(FRAC_PI_2, FRAC_PI_2, 1.0, 10.0)
        .expect("valid intrinsics");
    camera
}

/// Culls with the AABB first, then the planes.
fn is_visible(camera: &CameraModel, point: Point) -> bool {
    camera.aabb().is_some_and(|aabb| aabb.contains(point)) && camera.is_point_in_view(point)
}

#[test]
fn test_square_frustum_membership() {
    init_logging();
    let mut camera = square_camera();
    camera.set_camera_pose(Transformation::IDENTITY);

    let planes = camera.bounding_planes().expect("planes after pose");
    assert_eq!(planes.len(), 6);
    for plane in planes {
        assert!((plane.normal().length() - 1.0).abs() < 1e-9);
    }

    assert!(camera.is_point_in_view(DVec3::new(5.0, 0.0, 0.0)));
    assert!(!camera.is_point_in_view(DVec3::new(0.5, 0.0, 0.0)));
    assert!(!camera.is_point_in_view(DVec3::new(5.0, 100.0, 0.0)));
    assert!(!camera.is_point_in_view(DVec3::new(5.0, 0.0, -100.0)));
}

#[test]
fn test_aabb_precheck_agrees_with_planes() {
    init_logging();
    let mut camera = square_camera();
    camera.set_camera_pose(Transformation::from_axis_angle(
        DVec3::new(1.0, 1.0, 0.0),
        0.7,
        DVec3::new(3.0, -2.0, 1.0),
    ));
    let aabb = camera.aabb().expect("aabb after pose");

    // Every point the planes accept lies in the AABB.
    let mut accepted = 0;
    for i in -12..=12 {
        for j in -12..=12 {
            for k in -12..=12 {
                let point = DVec3::new(f64::from(i), f64::from(j), f64::from(k));
                if camera.is_point_in_view(point) {
                    accepted += 1;
                    assert!(aabb.contains(point), "{point:?} in view but outside AABB");
                    assert!(is_visible(&camera, point));
                }
            }
        }
    }
    assert!(accepted > 0);
}

#[test]
fn test_moving_body_with_mounted_sensor() {
    init_logging();
    let mut camera = square_camera();

    // Sensor mounted 0.5 m forward of the body and turned to look along body +Y.
    let t_b_c = Transformation::from_axis_angle(DVec3::Z, FRAC_PI_2, DVec3::new(0.5, 0.0, 0.0));
    camera.set_extrinsics(t_b_c.inverse());

    let target = DVec3::new(0.5, 5.0, 0.0);
    camera.set_body_pose(Transformation::IDENTITY);
    assert!(is_visible(&camera, target));

    // Drive the body 20 m along +Y; the target is now behind the sensor.
    camera.set_body_pose(Transformation::from_translation(DVec3::new(0.0, 20.0, 0.0)));
    assert!(!is_visible(&camera, target));
    assert!(is_visible(&camera, DVec3::new(0.5, 25.0, 0.0)));

    let body = camera.body_pose();
    assert!(body.abs_diff_eq(
        &Transformation::from_translation(DVec3::new(0.0, 20.0, 0.0)),
        1e-12
    ));
}

#[test]
fn test_reconfiguration_discards_old_frustum() {
    init_logging();
    let mut camera = square_camera();
    camera.set_camera_pose(Transformation::IDENTITY);
    let point = DVec3::new(4.0, 3.0, 0.0);
    assert!(camera.is_point_in_view(point));

    camera
        .set_intrinsics_from_fov(PI / 4.0, PI / 4.0, 1.0, 10.0)
        .expect("valid intrinsics");
    // Planes are only rebuilt by the next pose update.
    assert!(camera.is_point_in_view(point));

    camera.set_camera_pose(Transformation::IDENTITY);
    assert!(!camera.is_point_in_view(point));
    assert!(camera.is_point_in_view(DVec3::new(4.0, 0.0, 0.0)));
}

#[test]
fn test_focal_length_intrinsics() {
    init_logging();
    let mut camera = CameraModel::new();
    camera
        .set_intrinsics_from_focal_length(DVec2::new(640.0, 480.0), 320.0, 0.5, 8.0)
        .expect("valid intrinsics");
    camera.set_camera_pose(Transformation::IDENTITY);

    // 90 degrees horizontally, 2 * atan(0.75) vertically.
    assert!(camera.is_point_in_view(DVec3::new(4.0, 3.9, 0.0)));
    assert!(!camera.is_point_in_view(DVec3::new(4.0, 4.1, 0.0)));
    assert!(camera.is_point_in_view(DVec3::new(4.0, 0.0, 2.9)));
    assert!(!camera.is_point_in_view(DVec3::new(4.0, 0.0, 3.1)));
}

#[test]
fn test_rejected_intrinsics() {
    init_logging();
    let mut camera = CameraModel::new();

    let err = camera
        .set_intrinsics_from_fov(FRAC_PI_2, FRAC_PI_2, 3.0, 3.0)
        .unwrap_err();
    assert!(matches!(err, FrustumError::InvalidDepthRange { .. }));
    assert!(err.to_string().contains("depth range"));
    assert!(!camera.is_initialized());

    camera.set_camera_pose(Transformation::IDENTITY);
    assert!(camera.bounding_planes().is_none());
    assert!(!camera.is_point_in_view(DVec3::new(5.0, 0.0, 0.0)));
}

#[test]
fn test_camera_from_json_config() {
    init_logging();
    let json = r#"{
        "intrinsics": { "FieldOfView": { "horizontal_fov": 1.5707963267948966, "vertical_fov": 1.0 } },
        "min_distance": 0.2,
        "max_distance": 6.0,
        "extrinsics": { "rotation": [0.0, 0.0, 0.0, 1.0], "translation": [0.0, 0.0, -1.0] }
    }"#;
    let config = CameraConfig::from_json_str(json).expect("valid json");
    config.validate().expect("valid config");

    let mut camera = CameraModel::from_config(&config).expect("valid config");
    camera.set_body_pose(Transformation::IDENTITY);

    // T_C_B translates body points down by 1 m, so the sensor sits at z = 1.
    let t_g_c = camera.camera_pose();
    assert!((t_g_c.translation - DVec3::new(0.0, 0.0, 1.0)).length() < 1e-12);
    assert!(camera.is_point_in_view(DVec3::new(3.0, 0.0, 1.0)));
    assert!(!camera.is_point_in_view(DVec3::new(7.0, 0.0, 1.0)));

    let lines = camera.bounding_lines().expect("lines after pose");
    assert_eq!(lines.len(), 12);
    let far = camera.far_plane_points().expect("far points after pose");
    assert!(far.iter().all(|p| (p.x - 6.0).abs() < 1e-9));
}
