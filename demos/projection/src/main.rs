use log::{debug, info, warn};
use polyfill::math::{Matrix4, Quaternion, Vector3};

fn main() {
    env_logger::init();

    let camera_position = Vector3::new(0.0, 0.0, 5.0);
    let view = Matrix4::new_translation(&-camera_position);
    let projection = Matrix4::new_perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
    let view_projection = projection * view;
    debug!("View projection matrix: {view_projection:?}");

    let mut up = Vector3::new(0.0, 1.0, 0.0);
    let mut axis = Vector3::default();
    axis.cross_vectors(&up, &Vector3::new(1.0, 0.0, 1.0)).normalize();
    up.normalize();
    let spin = Quaternion::from_axis_angle(&axis, std::f64::consts::FRAC_PI_4);
    info!("Rotating around {axis} by {spin}");

    let corners = [
        Vector3::new(-1.0, -1.0, -1.0),
        Vector3::new(1.0, -1.0, -1.0),
        Vector3::new(1.0, 1.0, -1.0),
        Vector3::new(-1.0, 1.0, -1.0),
        Vector3::new(-1.0, -1.0, 1.0),
        Vector3::new(1.0, -1.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(-1.0, 1.0, 1.0),
    ];

    for corner in corners {
        let mut point = corner;
        point.apply_quaternion(&spin).apply_matrix4(&view_projection);

        let on_screen = [point.x, point.y, point.z]
            .iter()
            .all(|coordinate| coordinate.is_finite() && coordinate.abs() <= 1.0);
        if on_screen {
            info!("{corner} -> {point} (height {:.3})", point.dot(&up));
        } else {
            warn!("{corner} -> {point} is outside the view volume");
        }
    }

    let mut degenerate = Vector3::new(0.0, 0.0, 0.0);
    degenerate.normalize();
    info!("Normalized zero vector stays {degenerate}, length {}", degenerate.length());
}
