//! Glint Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for small scenes of spheres, triangles,
//! quads and OBJ meshes, lit by point lights.
//!
//! Each camera sample gathers emission, direct light with a shadow test and
//! one recursive bounce per hit, up to `MAX_DEPTH` bounces.

mod camera;
mod colour;
mod hittable;
mod light;
mod material;
mod mesh_triangle;
mod output;
mod plane;
mod renderer;
mod sampler;
mod sphere;
mod surfel;
mod triangle;

pub use camera::Camera;
pub use colour::Colour;
pub use hittable::{Hittable, ObjectList, Primitive, PrimitiveId};
pub use light::Light;
pub use material::Material;
pub use mesh_triangle::MeshTriangle;
pub use output::{save_image, write_ppm, OutputError, OutputResult};
pub use plane::Plane;
pub use renderer::{
    ImageBuffer, ImageConfig, RayTracer, DEFAULT_LIGHT_POSITION, MAX_DEPTH, SHADOW_EPSILON,
};
pub use sampler::{Sampler, DEFAULT_SEED};
pub use sphere::Sphere;
pub use surfel::Surfel;
pub use triangle::Triangle;

/// Re-export the math types the renderer API is written in
pub use glint_math::{Interval, Point3, Ray, Vec3};
