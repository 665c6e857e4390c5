//! A ray caster: nearest-hit search over analytic and polygonal
//! shapes, hard shadows and Phong shading, with perspective, orthographic and
//! oblique cameras.

pub mod camera;
pub mod color;
pub mod light;
pub mod loader;
pub mod material;
pub mod math;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod utils;

/// Intersections closer than this distance along a ray are discarded.
///
/// It keeps a ray leaving a surface from hitting that same surface again.
pub const EPSILON: f32 = 1e-4;

/// Denominators below this magnitude are treated as zero (parallel ray, flat quadratic).
pub const PARALLEL_EPSILON: f32 = 1e-8;

/// Default offset of a shadow ray origin, along the direction to the light.
pub const SHADOW_BIAS: f32 = 1e-3;
