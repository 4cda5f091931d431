//! Surface material parameters.
//!
//! A material is plain data: the renderer reads it from the `Surfel` that an
//! intersection produces, never from the primitive itself.

use crate::Colour;

/// Shading parameters carried by every primitive.
///
/// - `emission`: light emitted by the surface
/// - `ambient_albedo`, `lambert_albedo`, `glossy_albedo`: scalar weights of
///   the ambient, diffuse and glossy lobes in the indirect estimate
/// - `exponent`: Blinn-Phong exponent, higher gives a tighter highlight
/// - `impulse`: probability that an indirect bounce is a mirror impulse
/// - `impulse_albedo`: weight applied to an impulse bounce
/// - `ambient`, `diffuse`, `specular`: colours used by direct lighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub emission: Colour,
    pub ambient_albedo: f32,
    pub lambert_albedo: f32,
    pub glossy_albedo: f32,
    pub exponent: f32,
    pub impulse: f32,
    pub impulse_albedo: f32,
    pub ambient: Colour,
    pub diffuse: Colour,
    pub specular: Colour,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            emission: Colour::BLACK,
            ambient_albedo: 0.7,
            lambert_albedo: 0.7,
            glossy_albedo: 0.7,
            exponent: 20.0,
            impulse: 0.1,
            impulse_albedo: 1.0,
            ambient: Colour::splat(0.2),
            diffuse: Colour::splat(0.7),
            specular: Colour::WHITE,
        }
    }
}

impl Material {
    /// Create a material with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// A light-emitting material.
    pub fn emissive(emission: Colour) -> Self {
        Self::new().with_emission(emission)
    }

    /// A matte material with the given ambient and diffuse colours.
    pub fn matte(ambient: Colour, diffuse: Colour) -> Self {
        Self::new().with_ambient(ambient).with_diffuse(diffuse)
    }

    /// A surface that always takes the mirror impulse bounce.
    pub fn mirror() -> Self {
        Self::new().with_impulse(1.1, 1.0)
    }

    pub fn with_emission(mut self, emission: Colour) -> Self {
        self.emission = emission;
        self
    }

    /// Set the ambient, Lambert and glossy albedo weights.
    pub fn with_albedo(mut self, ambient: f32, lambert: f32, glossy: f32) -> Self {
        self.ambient_albedo = ambient;
        self.lambert_albedo = lambert;
        self.glossy_albedo = glossy;
        self
    }

    pub fn with_exponent(mut self, exponent: f32) -> Self {
        self.exponent = exponent;
        self
    }

    /// Set the impulse probability and its albedo.
    ///
    /// A probability above 1 makes every indirect bounce an impulse.
    pub fn with_impulse(mut self, probability: f32, albedo: f32) -> Self {
        self.impulse = probability;
        self.impulse_albedo = albedo;
        self
    }

    pub fn with_ambient(mut self, ambient: Colour) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_diffuse(mut self, diffuse: Colour) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_specular(mut self, specular: Colour) -> Self {
        self.specular = specular;
        self
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        !self.emission.is_black()
    }
}
