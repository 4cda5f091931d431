//! Sphere primitive for ray tracing.

use glint_math::{Interval, Point3, Ray};

use crate::{hittable::Hittable, Material, Surfel};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Surfel) -> bool {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.point = ray.at(root);
        rec.normal = (rec.point - self.center) / self.radius;
        rec.material = self.material;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, Material::default())
    }

    #[test]
    fn test_sphere_hit_near_side() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let mut rec = Surfel::default();

        assert!(unit_sphere().hit(&ray, Interval::POSITIVE, &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
        assert!((rec.point - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_far_side_when_near_is_excluded() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let mut rec = Surfel::default();

        assert!(unit_sphere().hit(&ray, Interval::new(4.5, 100.0), &mut rec));
        assert!((rec.t - 6.0).abs() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let mut rec = Surfel::default();

        // Ray pointing away from sphere
        let away = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(!unit_sphere().hit(&away, Interval::POSITIVE, &mut rec));

        // Both roots outside the interval
        let toward = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(!unit_sphere().hit(&toward, Interval::new(0.0, 4.0), &mut rec));
        assert!(!unit_sphere().hit(&toward, Interval::new(6.0, 10.0), &mut rec));
    }

    #[test]
    fn test_sphere_hits_are_strictly_inside_and_unit() {
        let sphere = Sphere::new(Vec3::new(0.3, -0.2, 4.0), 1.5, Material::default());
        let ray_t = Interval::new(0.5, 50.0);

        for i in 0..20 {
            let offset = i as f32 * 0.1 - 1.0;
            let ray = Ray::new(Vec3::new(offset, offset * 0.5, 0.0), Vec3::new(0.0, 0.0, 2.0));
            let mut rec = Surfel::default();
            if sphere.hit(&ray, ray_t, &mut rec) {
                assert!(ray_t.surrounds(rec.t));
                assert!((rec.normal.length() - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_surfel_gets_material_copy() {
        let material = Material::new().with_exponent(7.0);
        let sphere = Sphere::new(Vec3::ZERO, 1.0, material);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let mut rec = Surfel::default();

        assert!(sphere.hit(&ray, Interval::POSITIVE, &mut rec));
        assert_eq!(rec.material, material);
    }
}
