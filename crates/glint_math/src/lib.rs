// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// A position in world space.
pub type Point3 = Vec3;
/// A direction; not necessarily unit length.
pub type Dir3 = Vec3;
/// A packed texture coordinate `(u, v, 0)`.
pub type Tex2 = Vec3;

/// Scale `v` to unit length.
///
/// Unlike `Vec3::normalize_or_zero` this does not guard the zero vector:
/// callers must pass a non-degenerate input, a zero vector yields NaN.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}
