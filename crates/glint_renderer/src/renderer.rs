//! Core path tracing renderer.
//!
//! The radiance along a ray is the sum of
//! - the emission of the surface it hits,
//! - direct light from every point light that the surface can see,
//! - one recursive indirect bounce, either a mirror impulse or a sampled
//!   direction weighted by the surface BRDF.
//!
//! Paths end after `MAX_DEPTH` bounces.

use glint_math::{unit_vector, Dir3, Interval, Point3, Ray, Vec3};

use crate::{Camera, Colour, Light, ObjectList, Sampler, Surfel};

/// Bounce budget per camera sample.
pub const MAX_DEPTH: u32 = 10;

/// Distance shadow rays start off the surface, to avoid self-intersection.
pub const SHADOW_EPSILON: f32 = 1e-4;

/// Where `RayTracer::new` places its light: just under the box ceiling.
pub const DEFAULT_LIGHT_POSITION: Point3 = Vec3::new(0.0, 0.95, 0.0);

/// Image size and sampling settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageConfig {
    pub aspect_ratio: f32,
    pub width: u32,
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
}

impl ImageConfig {
    /// Create a configuration whose height follows from width and aspect ratio.
    pub fn new(aspect_ratio: f32, width: u32, samples_per_pixel: u32) -> Self {
        Self {
            aspect_ratio,
            width,
            height: (width as f32 / aspect_ratio) as u32,
            samples_per_pixel,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self::new(16.0 / 9.0, 800, 50)
    }
}

/// Simple image buffer for storing render output.
///
/// Row-major, row 0 is the top of the image.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Colour>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::BLACK; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Colour {
        self.pixels[pixel_index(self.width, x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) {
        self.pixels[pixel_index(self.width, x, y)] = colour;
    }

    /// Convert to RGB bytes, three per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgb8()).collect()
    }
}

/// Row-major offset of (x, y), computed in `usize` so wide images don't wrap.
#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Monte Carlo path tracer over a fixed scene.
#[derive(Debug, Clone)]
pub struct RayTracer {
    world: ObjectList,
    camera: Camera,
    image: ImageConfig,
    lights: Vec<Light>,
}

impl RayTracer {
    /// Create a tracer lit by a single white point light at
    /// `DEFAULT_LIGHT_POSITION`.
    pub fn new(world: ObjectList, camera: Camera, image: ImageConfig) -> Self {
        Self {
            world,
            camera,
            image,
            lights: vec![Light::point(DEFAULT_LIGHT_POSITION, Colour::WHITE)],
        }
    }

    /// Replace the scene lights.
    pub fn with_lights(mut self, lights: Vec<Light>) -> Self {
        self.lights = lights;
        self
    }

    pub fn world(&self) -> &ObjectList {
        &self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn image(&self) -> &ImageConfig {
        &self.image
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Estimate the radiance arriving along `ray`.
    ///
    /// Returns black once `depth` reaches zero or when nothing is hit inside
    /// `ray_t`.
    pub fn trace_ray(&self, ray: &Ray, ray_t: Interval, depth: u32, sampler: &mut Sampler) -> Colour {
        if depth == 0 {
            return Colour::BLACK;
        }

        let Some(surfel) = self.world.first_hit(ray, ray_t) else {
            return Colour::BLACK;
        };

        let out_dir = -ray.direction();
        let mut radiance = surfel.material.emission;

        for light in &self.lights {
            radiance += self.direct_lighting(&surfel, out_dir, light);
        }
        radiance += self.indirect_lighting(&surfel, out_dir, depth, sampler);

        radiance
    }

    /// Light reaching the surfel straight from `light`, reflected towards
    /// `out_dir`.
    ///
    /// No distance falloff is applied, whether or not the light is at
    /// infinity.
    pub fn direct_lighting(&self, surfel: &Surfel, out_dir: Dir3, light: &Light) -> Colour {
        let in_dir = light.position - surfel.point;

        // The un-normalized direction puts the light at t = 1
        let shadow_ray = Ray::new(surfel.point + SHADOW_EPSILON * surfel.normal, in_dir);
        if self.world.first_hit(&shadow_ray, Interval::new(0.0, 1.0)).is_some() {
            return Colour::BLACK;
        }

        let shading = Surfel {
            normal: unit_vector(surfel.normal),
            ..*surfel
        };
        let in_dir = unit_vector(in_dir);
        let out_dir = unit_vector(out_dir);

        light.diffuse * shading.diffuse3(in_dir) + light.specular * shading.specular3(out_dir, in_dir)
    }

    /// Light arriving from one randomly chosen bounce direction.
    pub fn indirect_lighting(&self, surfel: &Surfel, out_dir: Dir3, depth: u32, sampler: &mut Sampler) -> Colour {
        let material = &surfel.material;

        let (in_dir, albedo) = if sampler.random_float() < material.impulse {
            (2.0 * surfel.normal - out_dir, material.impulse_albedo)
        } else {
            let in_dir = sampler.random_vec();
            (in_dir, surfel.brdf(unit_vector(out_dir), unit_vector(in_dir)))
        };

        let bounce = Ray::new(surfel.point, in_dir);
        let incoming = self.trace_ray(&bounce, Interval::POSITIVE, depth - 1, sampler);

        incoming * albedo
    }

    /// Render a single pixel with multi-sampling.
    ///
    /// `(i, j)` counts from the lower-left corner of the image.
    pub fn render_pixel(&self, i: u32, j: u32, sampler: &mut Sampler) -> Colour {
        let u_scale = self.image.width.saturating_sub(1).max(1) as f32;
        let v_scale = self.image.height.saturating_sub(1).max(1) as f32;

        let mut sum = Vec3::ZERO;
        for _ in 0..self.image.samples_per_pixel {
            let u = (i as f32 + sampler.random_float()) / u_scale;
            let v = (j as f32 + sampler.random_float()) / v_scale;
            let ray = self.camera.get_ray(u, v);
            sum += Vec3::from(self.trace_ray(&ray, Interval::UNIVERSE, MAX_DEPTH, sampler));
        }

        // Average the samples
        Colour::from(sum / self.image.samples_per_pixel as f32)
    }

    /// Render the entire scene, top row first.
    pub fn render(&self, sampler: &mut Sampler) -> ImageBuffer {
        let ImageConfig { width, height, .. } = self.image;
        let mut image = ImageBuffer::new(width, height);

        log::info!(
            "Rendering {}x{} @ {} spp, {} objects, {} lights",
            width,
            height,
            self.image.samples_per_pixel,
            self.world.len(),
            self.lights.len()
        );

        for j in (0..height).rev() {
            log::debug!("{} rows remaining", j + 1);
            for i in 0..width {
                let colour = self.render_pixel(i, j, sampler);
                image.set(i, height - 1 - j, colour);
            }
        }

        image
    }
}
