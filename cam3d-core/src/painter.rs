/// Painter's-algorithm depth sorting over camera-space triangles
///
/// Triangles are compared through separating-plane tests against the
/// viewer at the camera-space origin. The result is a back-to-front draw
/// order: a heuristic, not true hidden-surface removal. Triangles that
/// mutually intersect or occlude each other cyclically can still come
/// out in a misrendering order; no clipping or splitting is attempted.
use std::cmp::Ordering;

use nalgebra::{Point3, Vector3};

use crate::math;
use crate::scene::Color;

/// A triangle re-expressed in camera space for one frame. Transient:
/// rebuilt from the current camera every render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamTriangle {
    pub vertices: [Point3<f32>; 3],
    pub color: Color,
}

/// The supporting plane of a triangle, with unit normal.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub point: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Plane {
    /// Supporting plane of a camera-space triangle, or `None` when the
    /// triangle is degenerate (zero area). Degenerate triangles are
    /// excluded from sorting and drawing rather than producing NaNs.
    pub fn of(triangle: &CamTriangle) -> Option<Self> {
        let [v0, v1, v2] = triangle.vertices;
        let normal = math::try_normalize(&(v1 - v0).cross(&(v2 - v0)))?;
        Some(Self { point: v0, normal })
    }

    /// Signed distance of a point from the plane, positive on the side
    /// the normal points toward.
    pub fn signed_distance(&self, point: &Point3<f32>) -> f32 {
        (point - self.point).dot(&self.normal)
    }
}

/// Whether every vertex of `triangle` lies on the viewer's side of
/// `plane`, the viewer being fixed at the camera-space origin. A vertex
/// exactly on the plane counts as on the viewer's side.
pub fn on_viewer_side(plane: &Plane, triangle: &CamTriangle) -> bool {
    let viewer_sign = if plane.signed_distance(&Point3::origin()) >= 0.0 {
        1.0
    } else {
        -1.0
    };
    triangle
        .vertices
        .iter()
        .all(|v| plane.signed_distance(v) * viewer_sign >= 0.0)
}

/// Sort triangles back to front so that later entries are drawn on top.
///
/// The primary signal is the pairwise separating-plane test: if A is
/// entirely on the viewer's side of B's plane while B is not on the
/// viewer's side of A's plane, A is closer and sorts after B. When the
/// tests are inconclusive either way, mean camera-space depth breaks the
/// tie (deeper first), which also keeps the comparator a total order as
/// the standard sort requires. Degenerate triangles are dropped.
pub fn depth_sort(triangles: &mut Vec<CamTriangle>) {
    let mut keyed: Vec<(CamTriangle, Plane)> = triangles
        .drain(..)
        .filter_map(|t| Plane::of(&t).map(|p| (t, p)))
        .collect();
    keyed.sort_by(|(a, plane_a), (b, plane_b)| {
        let a_in_front = on_viewer_side(plane_b, a) && !on_viewer_side(plane_a, b);
        let b_in_front = on_viewer_side(plane_a, b) && !on_viewer_side(plane_b, a);
        match (a_in_front, b_in_front) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => mean_depth(b)
                .partial_cmp(&mean_depth(a))
                .unwrap_or(Ordering::Equal),
        }
    });
    triangles.extend(keyed.into_iter().map(|(t, _)| t));
}

fn mean_depth(triangle: &CamTriangle) -> f32 {
    triangle.vertices.iter().map(|v| v.z).sum::<f32>() / 3.0
}
