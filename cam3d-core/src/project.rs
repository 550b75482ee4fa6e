/// Pinhole perspective projection
use nalgebra::{Point2, Point3};

/// Project a camera-space point to the 2D image plane.
///
/// Returns `None` for points at or behind the camera plane (`z <= 0`);
/// this is a hard near-plane cull, not a clip. Mapping the projected
/// point onto a concrete surface's pixel grid (origin shift, y flip) is
/// the front end's job.
pub fn project(point: &Point3<f32>, focal_length: f32) -> Option<Point2<f32>> {
    if point.z <= 0.0 {
        return None;
    }
    Some(Point2::new(
        focal_length * point.x / point.z,
        focal_length * point.y / point.z,
    ))
}
