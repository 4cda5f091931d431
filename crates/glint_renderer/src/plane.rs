//! Finite rectangle built from two triangles.

use glint_math::{Dir3, Interval, Point3, Ray};

use crate::{hittable::Hittable, Material, Surfel, Triangle};

/// A planar quad given by its four corners and a shading normal.
#[derive(Debug, Clone)]
pub struct Plane {
    triangles: [Triangle; 2],
    material: Material,
}

impl Plane {
    /// Create a quad from its lower-left, left-upper, right-lower and
    /// right-upper corners.
    ///
    /// Both halves report `normal`, whatever the corner winding.
    pub fn new(ll: Point3, lu: Point3, rl: Point3, ru: Point3, normal: Dir3, material: Material) -> Self {
        Self {
            triangles: [
                Triangle::with_normal(ll, ru, lu, normal, Material::default()),
                Triangle::with_normal(ll, rl, ru, normal, Material::default()),
            ],
            material,
        }
    }

    pub fn normal(&self) -> Dir3 {
        self.triangles[0].normal()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Plane {
    /// The halves are coplanar and disjoint, so the first hit is the only one.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Surfel) -> bool {
        for triangle in &self.triangles {
            if triangle.hit(ray, ray_t, rec) {
                rec.material = self.material;
                return true;
            }
        }
        false
    }
}
