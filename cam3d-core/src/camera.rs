/// Camera state and the world-to-camera view transform
use nalgebra::{Matrix3, Point3, Vector3};

use crate::math;

/// Lower bound for the focal length; adjustments saturate here.
pub const FOCAL_LENGTH_MIN: f32 = 20.0;
/// Upper bound for the focal length; adjustments saturate here.
pub const FOCAL_LENGTH_MAX: f32 = 3000.0;
/// Focal length a fresh camera starts with.
pub const DEFAULT_FOCAL_LENGTH: f32 = 500.0;

/// One of the camera's local axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A movable pinhole camera.
///
/// `orientation` maps camera-local coordinates to world coordinates and is
/// kept a pure rotation (orthonormal columns, determinant +1) across any
/// sequence of local rotations. A single long-lived instance drives a
/// session; it is only ever mutated through the methods below.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    orientation: Matrix3<f32>,
    focal_length: f32,
}

impl Camera {
    /// Camera at `position` with identity orientation (looking along +Z,
    /// +Y up, +X right). Out-of-range focal lengths are clamped.
    pub fn new(position: Point3<f32>, focal_length: f32) -> Self {
        Self {
            position,
            orientation: Matrix3::identity(),
            focal_length: focal_length.clamp(FOCAL_LENGTH_MIN, FOCAL_LENGTH_MAX),
        }
    }

    /// The local-to-world rotation.
    pub fn orientation(&self) -> &Matrix3<f32> {
        &self.orientation
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    /// Rotate about one of the camera's own current axes.
    ///
    /// Post-multiplying applies the elemental rotation in the camera's
    /// local frame (intrinsic rotation); pre-multiplying would rotate
    /// about the world axis instead. The result is re-orthonormalized so
    /// drift cannot accumulate over long sessions.
    pub fn rotate_local(&mut self, axis: Axis, angle: f32) {
        let r = match axis {
            Axis::X => math::rotation_x(angle),
            Axis::Y => math::rotation_y(angle),
            Axis::Z => math::rotation_z(angle),
        };
        self.orientation = math::orthonormalize(&(self.orientation * r));
    }

    /// Move by `(dx, dy, dz)` expressed in the camera's local frame,
    /// e.g. "forward" is `(0, 0, +step)`.
    pub fn translate_local(&mut self, dx: f32, dy: f32, dz: f32) {
        self.position += self.orientation * Vector3::new(dx, dy, dz);
    }

    /// Set the focal length, saturated to [`FOCAL_LENGTH_MIN`]..[`FOCAL_LENGTH_MAX`].
    pub fn set_focal_length(&mut self, focal_length: f32) {
        self.focal_length = focal_length.clamp(FOCAL_LENGTH_MIN, FOCAL_LENGTH_MAX);
    }

    /// Adjust the focal length by `delta`, saturated to the valid range.
    pub fn adjust_focal_length(&mut self, delta: f32) {
        self.set_focal_length(self.focal_length + delta);
    }

    /// Snapshot the current state into a world-to-camera transform.
    ///
    /// Must be rebuilt whenever the camera changes; the render passes
    /// build one per frame.
    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform {
            rotation_inv: self.orientation.transpose(),
            position: self.position,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, -75.0), DEFAULT_FOCAL_LENGTH)
    }
}

/// Per-frame snapshot mapping world points into the camera's frame.
///
/// Because the orientation is a pure rotation its transpose is its
/// inverse, so no general matrix inversion is needed.
#[derive(Debug, Clone)]
pub struct ViewTransform {
    rotation_inv: Matrix3<f32>,
    position: Point3<f32>,
}

impl ViewTransform {
    /// Express a world point in camera coordinates: translate the camera
    /// to the origin, then rotate by the inverse orientation.
    pub fn to_camera(&self, world: &Point3<f32>) -> Point3<f32> {
        Point3::from(self.rotation_inv * (world - self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn orientation_stays_orthonormal_under_rotation_sequences() {
        let mut camera = Camera::default();
        for i in 0..400 {
            let angle = 0.1 + (i % 7) as f32 * 0.05;
            camera.rotate_local(Axis::X, angle);
            camera.rotate_local(Axis::Y, -angle * 0.5);
            camera.rotate_local(Axis::Z, angle * 1.7);
        }
        let o = camera.orientation();
        assert_relative_eq!(o * o.transpose(), Matrix3::identity(), epsilon = 1e-5);
        assert_relative_eq!(o.determinant(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn local_move_with_identity_orientation_is_axis_aligned() {
        let mut camera = Camera::new(Point3::origin(), DEFAULT_FOCAL_LENGTH);
        camera.translate_local(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(camera.position.x, 0.0);
        assert_abs_diff_eq!(camera.position.y, 0.0);
        assert_abs_diff_eq!(camera.position.z, 1.0);
    }

    #[test]
    fn local_move_follows_rotated_axes() {
        let mut camera = Camera::new(Point3::origin(), DEFAULT_FOCAL_LENGTH);
        camera.rotate_local(Axis::Y, FRAC_PI_2);
        // Local forward now points along world +X.
        camera.translate_local(0.0, 0.0, 1.0);
        assert_relative_eq!(camera.position.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(camera.position.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(camera.position.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn focal_length_saturates_at_both_bounds() {
        let mut camera = Camera::default();
        for _ in 0..10 {
            camera.adjust_focal_length(-1000.0);
        }
        assert_abs_diff_eq!(camera.focal_length(), FOCAL_LENGTH_MIN);
        for _ in 0..10 {
            camera.adjust_focal_length(10_000.0);
        }
        assert_abs_diff_eq!(camera.focal_length(), FOCAL_LENGTH_MAX);
    }

    #[test]
    fn view_transform_round_trips_with_identity_camera() {
        let camera = Camera::default();
        let view = camera.view_transform();
        let p = Point3::new(12.5, -30.0, 180.0);
        let cam = view.to_camera(&p);
        let back = Point3::from(camera.orientation() * cam.coords) + camera.position.coords;
        assert_relative_eq!(back, p, epsilon = 1e-4);
    }

    #[test]
    fn view_transform_round_trips_after_rotation() {
        let mut camera = Camera::default();
        camera.rotate_local(Axis::Y, 0.8);
        camera.rotate_local(Axis::X, -0.3);
        camera.translate_local(10.0, -4.0, 25.0);
        let view = camera.view_transform();
        let p = Point3::new(-40.0, 17.0, 260.0);
        let cam = view.to_camera(&p);
        let back = Point3::from(camera.orientation() * cam.coords) + camera.position.coords;
        assert_relative_eq!(back, p, epsilon = 1e-3);
    }

    #[test]
    fn camera_position_maps_to_origin() {
        let mut camera = Camera::default();
        camera.rotate_local(Axis::Z, 1.1);
        let view = camera.view_transform();
        let origin = view.to_camera(&camera.position);
        assert_abs_diff_eq!(origin, Point3::origin(), epsilon = 1e-6);
    }
}
