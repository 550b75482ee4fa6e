/// cam3d Core Library - camera transformation and visibility-ordering pipeline
///
/// This library provides the geometry core for wireframe and flat-shaded
/// rendering: a movable pinhole camera, world-to-camera view transforms,
/// perspective projection, and a painter's-algorithm depth sorter.

pub mod camera;
pub mod command;
pub mod math;
pub mod painter;
pub mod project;
pub mod render;
pub mod scene;
pub mod scenefile;

// Re-export commonly used types
pub use camera::{Axis, Camera, ViewTransform};
pub use command::CameraCommand;
pub use render::{painter_pass, wireframe_pass, ProjectedTriangle};
pub use scene::{Color, Scene, Segment, Triangle};
