/// Rotation constructors and numeric helpers for the 3x3 kernel
///
/// Matrices act on column vectors on the right, so `A * B` applies `B`
/// first, then `A`. Everything else (products, transpose, dot, cross)
/// comes straight from nalgebra's operators.
use nalgebra::{Matrix3, Vector3};

/// Vectors shorter than this are treated as zero by [`try_normalize`].
pub const MIN_NORMAL_LENGTH: f32 = 1e-6;

/// Right-handed rotation about the X axis, angle in radians.
pub fn rotation_x(angle: f32) -> Matrix3<f32> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

/// Right-handed rotation about the Y axis, angle in radians.
pub fn rotation_y(angle: f32) -> Matrix3<f32> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, 0.0, s, //
        0.0, 1.0, 0.0, //
        -s, 0.0, c,
    )
}

/// Right-handed rotation about the Z axis, angle in radians.
pub fn rotation_z(angle: f32) -> Matrix3<f32> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Normalize a vector, or `None` when its length is below
/// [`MIN_NORMAL_LENGTH`]. Callers decide what a degenerate input means;
/// the depth sorter skips the owning triangle.
pub fn try_normalize(v: &Vector3<f32>) -> Option<Vector3<f32>> {
    v.try_normalize(MIN_NORMAL_LENGTH)
}

/// Re-orthonormalize a near-rotation matrix with Gram-Schmidt on its
/// columns. Incremental rotation composition accumulates floating-point
/// drift; running the result through this keeps an orientation a valid
/// rotation over arbitrarily long sessions.
pub fn orthonormalize(m: &Matrix3<f32>) -> Matrix3<f32> {
    let c0: Vector3<f32> = m.column(0).into_owned().normalize();
    let c1 = m.column(1).into_owned();
    let c1 = (c1 - c0 * c0.dot(&c1)).normalize();
    let c2 = c0.cross(&c1);
    Matrix3::from_columns(&[c0, c1, c2])
}
