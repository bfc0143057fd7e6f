//! Demo culling a voxel grid against a sensor moving along a circular path.
//!
//! Pass a JSON sensor configuration as the first argument, or run without
//! arguments to use the default sensor. Set `RUST_LOG=debug` to see the
//! configured intrinsics, or `trace` for every plane test.

use sensor_frustum::*;
use std::f64::consts::TAU;

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => CameraConfig::from_json_file(path)?,
        None => CameraConfig {
            extrinsics: Some(
                Transformation::from_translation(DVec3::new(-0.2, 0.0, -0.3)),
            ),
            ..Default::default()
        },
    };
    config.validate()?;
    let mut camera = CameraModel::from_config(&config)?;

    // 0.25 m voxels covering a 10 m x 10 m x 2 m volume.
    let voxel_size = 0.25;
    let mut voxel_centers = Vec::new();
    for i in -20..20 {
        for j in -20..20 {
            for k in 0..8 {
                voxel_centers.push(
                    (DVec3::new(f64::from(i), f64::from(j), f64::from(k)) + 0.5) * voxel_size,
                );
            }
        }
    }
    log::info!("{} voxels", voxel_centers.len());

    let steps = 8;
    for step in 0..steps {
        let angle = TAU * f64::from(step) / f64::from(steps);
        // Drive around a 2 m circle, facing along the direction of travel.
        let t_g_b = Transformation::from_axis_angle(
            DVec3::Z,
            angle + TAU / 4.0,
            DVec3::new(2.0 * angle.cos(), 2.0 * angle.sin(), 0.5),
        );
        camera.set_body_pose(t_g_b);

        let Some(aabb) = camera.aabb() else {
            continue;
        };
        let in_box: Vec<Point> = voxel_centers
            .iter()
            .copied()
            .filter(|p| aabb.contains(*p))
            .collect();
        let in_view = in_box.iter().filter(|p| camera.is_point_in_view(**p)).count();

        log::info!(
            "step {step}: sensor at {:?}, {} voxels in AABB, {in_view} in view",
            camera.camera_pose().translation,
            in_box.len()
        );
    }

    Ok(())
}
