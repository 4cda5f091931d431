//! Triangle primitive for ray tracing.
//!
//! Intersects the triangle's supporting plane first, then checks that the
//! plane hit lies on the inner side of all three edges.

use glint_math::{unit_vector, Dir3, Interval, Point3, Ray, Vec3};

use crate::{hittable::Hittable, Material, Surfel};

/// Shared triangle geometry with pre-computed barycentric terms.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TriangleGeometry {
    vertices: [Point3; 3],
    /// Unit normal following the vertex winding
    face_normal: Dir3,
    b0: Vec3,
    b1: Vec3,
    d00: f32,
    d01: f32,
    d11: f32,
}

impl TriangleGeometry {
    pub(crate) fn new(v0: Point3, v1: Point3, v2: Point3) -> Self {
        let b0 = v1 - v0;
        let b1 = v2 - v0;

        Self {
            vertices: [v0, v1, v2],
            face_normal: unit_vector(b0.cross(b1)),
            b0,
            b1,
            d00: b0.dot(b0),
            d01: b0.dot(b1),
            d11: b1.dot(b1),
        }
    }

    pub(crate) fn vertices(&self) -> [Point3; 3] {
        self.vertices
    }

    pub(crate) fn face_normal(&self) -> Dir3 {
        self.face_normal
    }

    /// Intersect the supporting plane and keep the hit only if it falls
    /// inside the triangle. Returns `(t, point)`.
    pub(crate) fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<(f32, Point3)> {
        // Exactly parallel rays never meet the plane
        let denom = self.face_normal.dot(ray.direction());
        if denom == 0.0 {
            return None;
        }

        let d = self.face_normal.dot(self.vertices[0]);
        let t = (d - self.face_normal.dot(ray.origin())) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        let q = ray.at(t);
        self.contains(q).then_some((t, q))
    }

    /// True if the in-plane point `p` lies strictly inside the triangle.
    ///
    /// Points on an edge are outside.
    pub(crate) fn contains(&self, p: Point3) -> bool {
        let [v0, v1, v2] = self.vertices;
        let n = self.face_normal;

        (v1 - v0).cross(p - v0).dot(n) > 0.0
            && (v2 - v1).cross(p - v1).dot(n) > 0.0
            && (v0 - v2).cross(p - v2).dot(n) > 0.0
    }

    /// Barycentric weights `(alpha, beta, gamma)` of `p` for `(v0, v1, v2)`.
    pub(crate) fn barycentric(&self, p: Point3) -> Vec3 {
        let b2 = p - self.vertices[0];
        let d20 = b2.dot(self.b0);
        let d21 = b2.dot(self.b1);
        let denom = self.d00 * self.d11 - self.d01 * self.d01;

        let beta = (self.d11 * d20 - self.d01 * d21) / denom;
        let gamma = (self.d00 * d21 - self.d01 * d20) / denom;
        Vec3::new(1.0 - beta - gamma, beta, gamma)
    }
}

/// A flat triangle that reports one normal over its whole surface.
#[derive(Debug, Clone)]
pub struct Triangle {
    geometry: TriangleGeometry,
    /// Reported normal (unit length)
    normal: Dir3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal follows the winding: `(v1 - v0) x (v2 - v0)`.
    pub fn new(v0: Point3, v1: Point3, v2: Point3, material: Material) -> Self {
        let geometry = TriangleGeometry::new(v0, v1, v2);
        Self {
            normal: geometry.face_normal(),
            geometry,
            material,
        }
    }

    /// Create a triangle that reports a caller-chosen normal.
    ///
    /// The normal is only used for shading; intersection uses the winding.
    pub fn with_normal(v0: Point3, v1: Point3, v2: Point3, normal: Dir3, material: Material) -> Self {
        Self {
            geometry: TriangleGeometry::new(v0, v1, v2),
            normal: unit_vector(normal),
            material,
        }
    }

    pub fn vertices(&self) -> [Point3; 3] {
        self.geometry.vertices()
    }

    pub fn normal(&self) -> Dir3 {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Surfel) -> bool {
        let Some((t, point)) = self.geometry.intersect(ray, ray_t) else {
            return false;
        };

        rec.t = t;
        rec.point = point;
        rec.normal = self.normal;
        rec.material = self.material;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Triangle in XY plane at z=-1
    fn xy_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            Material::default(),
        )
    }

    #[test]
    fn test_triangle_hit_at_centroid() {
        let tri = xy_triangle();
        let [v0, v1, v2] = tri.vertices();
        let centroid = (v0 + v1 + v2) / 3.0;

        let ray = Ray::new(Vec3::ZERO, centroid);
        let mut rec = Surfel::default();

        assert!(tri.hit(&ray, Interval::POSITIVE, &mut rec));
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!((rec.point - centroid).length() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangle_miss() {
        let tri = xy_triangle();
        let mut rec = Surfel::default();

        // Ray pointing away
        let away = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(!tri.hit(&away, Interval::POSITIVE, &mut rec));

        // Plane hit outside the triangle
        let outside = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!tri.hit(&outside, Interval::POSITIVE, &mut rec));
    }

    #[test]
    fn test_parallel_ray_misses() {
        let tri = xy_triangle();
        let mut rec = Surfel::default();

        let parallel = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(!tri.hit(&parallel, Interval::UNIVERSE, &mut rec));
    }

    #[test]
    fn test_hit_must_be_strictly_inside_interval() {
        let tri = xy_triangle();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rec = Surfel::default();

        assert!(!tri.hit(&ray, Interval::new(0.0, 1.0), &mut rec));
        assert!(!tri.hit(&ray, Interval::new(1.0, 2.0), &mut rec));
        assert!(tri.hit(&ray, Interval::new(0.999, 1.001), &mut rec));
    }

    #[test]
    fn test_edge_points_are_outside() {
        let geometry = TriangleGeometry::new(Vec3::ZERO, Vec3::X, Vec3::Y);

        assert!(geometry.contains(Vec3::new(0.25, 0.25, 0.0)));
        assert!(!geometry.contains(Vec3::new(0.5, 0.0, 0.0)));
        assert!(!geometry.contains(Vec3::ZERO));
        assert!(!geometry.contains(Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_barycentric_weights() {
        let geometry = TriangleGeometry::new(Vec3::ZERO, Vec3::X, Vec3::Y);

        let w = geometry.barycentric(Vec3::new(0.25, 0.5, 0.0));
        assert!((w - Vec3::new(0.25, 0.25, 0.5)).length() < 1e-6);

        let at_v1 = geometry.barycentric(Vec3::X);
        assert!((at_v1 - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_with_normal_reports_given_normal() {
        // Winding gives +Z, caller asks for -Z
        let tri = Triangle::with_normal(
            Vec3::new(-1.0, -1.0, 2.0),
            Vec3::new(1.0, -1.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(0.0, 0.0, -3.0),
            Material::default(),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = Surfel::default();

        assert!(tri.hit(&ray, Interval::POSITIVE, &mut rec));
        assert!((rec.t - 2.0).abs() < 1e-5);
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, -1.0));
    }
}
