/// Per-frame render passes: world space -> camera space -> 2D
use nalgebra::Point2;

use crate::camera::Camera;
use crate::painter::{depth_sort, CamTriangle};
use crate::project::project;
use crate::scene::{Color, Scene};

/// A triangle projected to the image plane, carrying its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    pub vertices: [Point2<f32>; 3],
    pub color: Color,
}

/// Project the scene's segments through the camera.
///
/// The view transform is snapshotted once for the whole pass. Segments
/// with either endpoint at or behind the camera plane are omitted from
/// the output, which is recomputed in full every frame.
pub fn wireframe_pass<'a>(
    scene: &'a Scene,
    camera: &Camera,
) -> impl Iterator<Item = (Point2<f32>, Point2<f32>)> + 'a {
    let view = camera.view_transform();
    let focal_length = camera.focal_length();
    scene.segments.iter().filter_map(move |segment| {
        let a = project(&view.to_camera(&segment.a), focal_length)?;
        let b = project(&view.to_camera(&segment.b), focal_length)?;
        Some((a, b))
    })
}

/// Transform, depth-sort and project the scene's triangles.
///
/// Returns triangles back to front: drawing them in order paints nearer
/// ones over farther ones. Degenerate triangles and triangles with any
/// vertex behind the camera are omitted this frame.
pub fn painter_pass(scene: &Scene, camera: &Camera) -> Vec<ProjectedTriangle> {
    let view = camera.view_transform();
    let focal_length = camera.focal_length();
    let mut cam_triangles: Vec<CamTriangle> = scene
        .triangles
        .iter()
        .map(|t| CamTriangle {
            vertices: t.vertices.map(|v| view.to_camera(&v)),
            color: t.color,
        })
        .collect();
    depth_sort(&mut cam_triangles);
    cam_triangles
        .iter()
        .filter_map(|t| {
            let v0 = project(&t.vertices[0], focal_length)?;
            let v1 = project(&t.vertices[1], focal_length)?;
            let v2 = project(&t.vertices[2], focal_length)?;
            Some(ProjectedTriangle {
                vertices: [v0, v1, v2],
                color: t.color,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Axis;
    use crate::scene::Color;
    use nalgebra::Point3;
    use std::f32::consts::PI;

    #[test]
    fn wireframe_pass_omits_segments_behind_camera() {
        let mut scene = Scene::new();
        // One segment in front of the default camera, one behind it.
        scene.add_segment(Point3::new(0.0, 0.0, 100.0), Point3::new(10.0, 0.0, 100.0));
        scene.add_segment(Point3::new(0.0, 0.0, -200.0), Point3::new(10.0, 0.0, -200.0));
        let camera = Camera::default();
        assert_eq!(wireframe_pass(&scene, &camera).count(), 1);
    }

    #[test]
    fn wireframe_pass_projects_the_whole_street() {
        let scene = Scene::street_scene();
        let camera = Camera::default();
        let drawn = wireframe_pass(&scene, &camera).count();
        assert_eq!(drawn, scene.segments.len());
    }

    #[test]
    fn painter_pass_orders_back_to_front() {
        let scene = Scene::triangle_scene();
        let camera = Camera::default();
        let drawn = painter_pass(&scene, &camera);
        assert_eq!(drawn.len(), 3);
        // Green (z=500) first, blue (z=400) next, red (z=300) on top.
        assert_eq!(drawn[0].color, Color::new(0, 255, 0));
        assert_eq!(drawn[1].color, Color::new(0, 0, 255));
        assert_eq!(drawn[2].color, Color::new(255, 0, 0));
    }

    #[test]
    fn painter_pass_omits_triangles_behind_camera() {
        let scene = Scene::triangle_scene();
        let mut camera = Camera::default();
        // Turn the camera around: the whole scene is now behind it.
        camera.rotate_local(Axis::Y, PI);
        assert!(painter_pass(&scene, &camera).is_empty());
    }

    #[test]
    fn passes_are_idempotent_for_an_unchanged_camera() {
        let camera = Camera::default();

        let scene = Scene::street_scene();
        let first: Vec<_> = wireframe_pass(&scene, &camera).collect();
        let second: Vec<_> = wireframe_pass(&scene, &camera).collect();
        assert_eq!(first, second);

        let scene = Scene::triangle_scene();
        assert_eq!(painter_pass(&scene, &camera), painter_pass(&scene, &camera));
    }
}
