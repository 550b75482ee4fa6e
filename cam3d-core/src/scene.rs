/// Scene primitives and construction helpers
use nalgebra::Point3;

/// RGB color attribute of a filled triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A world-space line segment for wireframe rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point3<f32>,
    pub b: Point3<f32>,
}

/// A world-space triangle with a color, for filled rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f32>; 3],
    pub color: Color,
}

/// Which side of the street a building stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A static collection of segments and triangles, built once at startup
/// and immutable for the lifetime of the render loop.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub segments: Vec<Segment>,
    pub triangles: Vec<Triangle>,
}

// Street layout used by the building generator.
const STREET_HALF_WIDTH: f32 = 40.0;
const STREET_LEVEL: f32 = -20.0;
const BUILDING_PITCH: f32 = 50.0;

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, a: Point3<f32>, b: Point3<f32>) {
        self.segments.push(Segment { a, b });
    }

    pub fn add_triangle(&mut self, vertices: [Point3<f32>; 3], color: Color) {
        self.triangles.push(Triangle { vertices, color });
    }

    /// Push the 12 edges of an axis-aligned cuboid centered at `center`.
    pub fn add_cuboid(&mut self, center: Point3<f32>, width: f32, height: f32, depth: f32) {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let hd = depth / 2.0;
        let corners = [
            Point3::new(center.x - hw, center.y - hh, center.z - hd),
            Point3::new(center.x + hw, center.y - hh, center.z - hd),
            Point3::new(center.x + hw, center.y + hh, center.z - hd),
            Point3::new(center.x - hw, center.y + hh, center.z - hd),
            Point3::new(center.x - hw, center.y - hh, center.z + hd),
            Point3::new(center.x + hw, center.y - hh, center.z + hd),
            Point3::new(center.x + hw, center.y + hh, center.z + hd),
            Point3::new(center.x - hw, center.y + hh, center.z + hd),
        ];
        for &(i, j) in CUBOID_EDGES {
            self.add_segment(corners[i], corners[j]);
        }
    }

    /// Push the wireframe of one street building.
    ///
    /// `slot` numbers buildings along the street starting at 1; each slot
    /// advances by the building pitch. The footprint starts at the street
    /// edge and grows away from it, mirrored for the left side.
    pub fn add_building(&mut self, width: f32, height: f32, depth: f32, slot: u32, side: Side) {
        let dir = match side {
            Side::Right => -1.0,
            Side::Left => 1.0,
        };
        let cx = dir * (STREET_HALF_WIDTH / 2.0);
        let cy = STREET_LEVEL;
        let cz = BUILDING_PITCH * (slot.saturating_sub(1)) as f32;
        let corners = [
            Point3::new(cx, cy, cz),
            Point3::new(cx + dir * width, cy, cz),
            Point3::new(cx + dir * width, cy + height, cz),
            Point3::new(cx, cy + height, cz),
            Point3::new(cx, cy, cz + depth),
            Point3::new(cx + dir * width, cy, cz + depth),
            Point3::new(cx + dir * width, cy + height, cz + depth),
            Point3::new(cx, cy + height, cz + depth),
        ];
        for &(i, j) in CUBOID_EDGES {
            self.add_segment(corners[i], corners[j]);
        }
    }

    /// The wireframe demo scene: a street with four buildings per side
    /// and the road edge lines.
    pub fn street_scene() -> Self {
        let mut scene = Self::new();
        for slot in 1..=4 {
            scene.add_building(30.0, 50.0, 30.0, slot, Side::Right);
        }
        scene.add_building(25.0, 20.0, 40.0, 1, Side::Left);
        scene.add_building(25.0, 30.0, 40.0, 2, Side::Left);
        scene.add_building(25.0, 40.0, 40.0, 3, Side::Left);
        scene.add_building(25.0, 60.0, 40.0, 4, Side::Left);
        // Road edges
        scene.add_segment(
            Point3::new(-5.0, STREET_LEVEL, 0.0),
            Point3::new(-5.0, STREET_LEVEL, 200.0),
        );
        scene.add_segment(
            Point3::new(5.0, STREET_LEVEL, 0.0),
            Point3::new(5.0, STREET_LEVEL, 200.0),
        );
        scene
    }

    /// The filled demo scene: three colored triangles at staggered depth.
    pub fn triangle_scene() -> Self {
        let mut scene = Self::new();
        scene.add_triangle(
            [
                Point3::new(-100.0, -100.0, 300.0),
                Point3::new(100.0, -100.0, 300.0),
                Point3::new(0.0, 100.0, 300.0),
            ],
            Color::new(255, 0, 0),
        );
        scene.add_triangle(
            [
                Point3::new(-150.0, -100.0, 500.0),
                Point3::new(-50.0, -100.0, 500.0),
                Point3::new(-100.0, 0.0, 500.0),
            ],
            Color::new(0, 255, 0),
        );
        scene.add_triangle(
            [
                Point3::new(50.0, -100.0, 400.0),
                Point3::new(150.0, -100.0, 400.0),
                Point3::new(100.0, 100.0, 400.0),
            ],
            Color::new(0, 0, 255),
        );
        scene
    }
}

/// Corner index pairs forming a cuboid's edges: front face, back face,
/// then the four connecting edges.
const CUBOID_EDGES: &[(usize, usize)] = &[
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_has_twelve_edges() {
        let mut scene = Scene::new();
        scene.add_cuboid(Point3::new(0.0, 0.0, 100.0), 20.0, 40.0, 30.0);
        assert_eq!(scene.segments.len(), 12);
    }

    #[test]
    fn cuboid_corners_straddle_center() {
        let mut scene = Scene::new();
        scene.add_cuboid(Point3::new(10.0, 0.0, 100.0), 20.0, 40.0, 30.0);
        let xs: Vec<f32> = scene.segments.iter().flat_map(|s| [s.a.x, s.b.x]).collect();
        assert!(xs.iter().all(|&x| x == 0.0 || x == 20.0));
    }

    #[test]
    fn buildings_mirror_across_the_street() {
        let mut scene = Scene::new();
        scene.add_building(30.0, 50.0, 30.0, 1, Side::Right);
        scene.add_building(30.0, 50.0, 30.0, 1, Side::Left);
        let (right, left) = scene.segments.split_at(12);
        assert!(right.iter().all(|s| s.a.x <= -20.0 && s.b.x <= -20.0));
        assert!(left.iter().all(|s| s.a.x >= 20.0 && s.b.x >= 20.0));
    }

    #[test]
    fn building_slots_advance_along_the_street() {
        let mut scene = Scene::new();
        scene.add_building(30.0, 50.0, 30.0, 3, Side::Right);
        assert!(scene.segments.iter().all(|s| s.a.z >= 100.0 && s.b.z >= 100.0));
    }

    #[test]
    fn street_scene_holds_eight_buildings_and_the_road() {
        let scene = Scene::street_scene();
        assert_eq!(scene.segments.len(), 8 * 12 + 2);
        assert!(scene.triangles.is_empty());
    }

    #[test]
    fn triangle_scene_colors() {
        let scene = Scene::triangle_scene();
        assert_eq!(scene.triangles.len(), 3);
        assert_eq!(scene.triangles[0].color, Color::new(255, 0, 0));
    }
}
