//! Point light sources.

use glint_math::Point3;

use crate::Colour;

/// A point light with separate ambient, diffuse and specular colours.
///
/// Typical setup: a dim ambient term, diffuse set to the light's colour and
/// specular at full white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point3,
    pub colour: Colour,
    pub is_at_infinity: bool,
    pub ambient: Colour,
    pub diffuse: Colour,
    pub specular: Colour,
    pub power: f32,
}

impl Light {
    /// Create a light with the default colour terms.
    pub fn new(position: Point3, colour: Colour) -> Self {
        Self {
            position,
            colour,
            is_at_infinity: false,
            ambient: Colour::splat(0.2),
            diffuse: Colour::splat(0.5),
            specular: Colour::WHITE,
            power: 200.0,
        }
    }

    /// A point light whose diffuse term is half its colour and whose ambient
    /// term is a fifth of that.
    pub fn point(position: Point3, colour: Colour) -> Self {
        let diffuse = colour * 0.5;
        Self::new(position, colour)
            .with_diffuse(diffuse)
            .with_ambient(diffuse * 0.2)
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

    pub fn with_power(mut self, power: f32) -> Self {
        self.power = power;
        self
    }

    pub fn at_infinity(mut self) -> Self {
        self.is_at_infinity = true;
        self
    }
}
