//! Camera for ray generation.

use glint_math::{Dir3, Point3, Ray, Vec3};

/// Eye position.
const EYE: Point3 = Vec3::new(0.0, 0.0, -5.0);
/// Offset of the image plane along z, measured as in `Camera::new`.
const FOCAL_LENGTH: f32 = 1.0;
/// World-space height of the image plane.
const VIEWPORT_HEIGHT: f32 = 3.0;

/// Fixed pinhole camera looking down +z.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Point3,
    horizontal: Dir3,
    vertical: Dir3,
    lower_left_corner: Point3,
}

impl Camera {
    /// Create the camera for an image of the given aspect ratio.
    pub fn new(aspect_ratio: f32) -> Self {
        let viewport_width = aspect_ratio * VIEWPORT_HEIGHT;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, VIEWPORT_HEIGHT, 0.0);
        let lower_left_corner = EYE
            - horizontal / 2.0
            - vertical / 2.0
            - Vec3::new(0.0, 0.0, EYE.z - FOCAL_LENGTH);

        Self {
            origin: EYE,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn lower_left_corner(&self) -> Point3 {
        self.lower_left_corner
    }

    /// Generate the ray through image-plane coordinates `(u, v)`.
    ///
    /// `(0, 0)` is the lower-left corner and `(1, 1)` the upper-right one.
    /// Values outside `[0, 1]` are not rejected; they aim past the image.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let target = self.lower_left_corner + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}
