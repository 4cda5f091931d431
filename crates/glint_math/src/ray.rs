use crate::{unit_vector, Dir3, Point3};

/// A ray in 3D space: a half-line starting at `origin` travelling along
/// `direction`.
///
/// The direction is stored as given. Shading code relies on rays built from
/// un-normalized directions (shadow rays reach the light at `t = 1`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Dir3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Dir3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Dir3 {
        self.direction
    }

    /// Unit-length copy of the direction.
    #[inline]
    pub fn unit_direction(&self) -> Dir3 {
        unit_vector(self.direction)
    }

    /// `origin + t * direction`
    #[inline]
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Point3::ZERO,
            direction: Dir3::ZERO,
        }
    }
}
