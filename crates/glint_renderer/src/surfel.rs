//! Surfel: the record of a ray/surface intersection and its local shading.

use glint_math::{unit_vector, Dir3, Point3, Vec3};

use crate::{Colour, Material};

/// Record of a ray-object intersection.
///
/// Holds a copy of the hit primitive's material, so later changes to the
/// primitive never reach a surfel that was already produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surfel {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Point3,
    /// Surface normal at the intersection
    pub normal: Dir3,
    /// Material of the hit primitive
    pub material: Material,
}

impl Default for Surfel {
    fn default() -> Self {
        Self {
            t: 0.0,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: Material::default(),
        }
    }
}

impl Surfel {
    /// Lambertian response to light arriving from `in_dir`.
    ///
    /// Expects a unit normal and a unit `in_dir`.
    pub fn diffuse3(&self, in_dir: Dir3) -> Colour {
        self.normal.dot(in_dir).max(0.0) * self.material.diffuse
    }

    /// Blinn-Phong highlight for light from `in_dir` seen along `out_dir`.
    pub fn specular3(&self, out_dir: Dir3, in_dir: Dir3) -> Colour {
        let half = unit_vector(out_dir + in_dir);
        half.dot(self.normal).max(0.0).powf(self.material.exponent) * self.material.specular
    }

    /// Scalar reflectance used to weight a sampled indirect bounce.
    ///
    /// Neither dot product is clamped: a direction below the surface gives a
    /// negative Lambert term, and the glossy base is raised to the exponent as
    /// is. With a non-integer exponent a negative base yields NaN.
    pub fn brdf(&self, out_dir: Dir3, in_dir: Dir3) -> f32 {
        let lambert = self.normal.dot(in_dir);
        let glossy = self
            .normal
            .dot(unit_vector(out_dir + in_dir))
            .powf(self.material.exponent);
        lambert * self.material.lambert_albedo + glossy * self.material.glossy_albedo
    }
}
