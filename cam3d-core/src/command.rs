/// Symbolic camera control commands
///
/// Commands are independent of any input-device binding; the front end
/// decides which keys or buttons produce which command. Every command is
/// well-formed by construction, so applying one cannot fail.
use crate::camera::{Axis, Camera};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Translate by an offset in the camera's local frame.
    MoveLocal(f32, f32, f32),
    /// Rotate about one of the camera's local axes, angle in radians.
    RotateLocal(Axis, f32),
    /// Change the focal length by a delta, clamped to the valid range.
    AdjustZoom(f32),
}

impl CameraCommand {
    pub fn apply(&self, camera: &mut Camera) {
        match *self {
            CameraCommand::MoveLocal(dx, dy, dz) => camera.translate_local(dx, dy, dz),
            CameraCommand::RotateLocal(axis, angle) => camera.rotate_local(axis, angle),
            CameraCommand::AdjustZoom(delta) => camera.adjust_focal_length(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FOCAL_LENGTH_MAX;
    use approx::assert_abs_diff_eq;
    use nalgebra::Point3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn move_local_translates_along_current_axes() {
        let mut camera = Camera::new(Point3::origin(), 500.0);
        CameraCommand::MoveLocal(0.0, 0.0, 1.0).apply(&mut camera);
        assert_abs_diff_eq!(camera.position.z, 1.0);

        CameraCommand::RotateLocal(Axis::Y, FRAC_PI_2).apply(&mut camera);
        CameraCommand::MoveLocal(0.0, 0.0, 1.0).apply(&mut camera);
        assert_abs_diff_eq!(camera.position.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(camera.position.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn adjust_zoom_saturates() {
        let mut camera = Camera::default();
        CameraCommand::AdjustZoom(1e9).apply(&mut camera);
        assert_abs_diff_eq!(camera.focal_length(), FOCAL_LENGTH_MAX);
    }
}
