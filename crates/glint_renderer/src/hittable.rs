//! Hittable trait and the scene's primitive list.

use glint_core::Mesh;
use glint_math::{Interval, Ray};

use crate::{Material, MeshTriangle, Plane, Sphere, Surfel, Triangle};

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object strictly inside the given interval.
    ///
    /// Returns true if hit, and fills in the surfel. On a miss the surfel is
    /// left as it was.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Surfel) -> bool;
}

/// Any primitive the renderer can place in a scene.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
    MeshTriangle(MeshTriangle),
    Plane(Plane),
}

impl Primitive {
    /// Material copied into every surfel this primitive produces.
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Triangle(t) => t.material(),
            Primitive::MeshTriangle(t) => t.material(),
            Primitive::Plane(p) => p.material(),
        }
    }
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Surfel) -> bool {
        match self {
            Primitive::Sphere(s) => s.hit(ray, ray_t, rec),
            Primitive::Triangle(t) => t.hit(ray, ray_t, rec),
            Primitive::MeshTriangle(t) => t.hit(ray, ray_t, rec),
            Primitive::Plane(p) => p.hit(ray, ray_t, rec),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

impl From<MeshTriangle> for Primitive {
    fn from(t: MeshTriangle) -> Self {
        Primitive::MeshTriangle(t)
    }
}

impl From<Plane> for Primitive {
    fn from(p: Plane) -> Self {
        Primitive::Plane(p)
    }
}

/// Handle to a primitive stored in an `ObjectList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveId(usize);

impl PrimitiveId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The scene: an ordered list of primitives.
///
/// The list owns its primitives; handles returned by `add` stay valid until
/// `clear` is called.
#[derive(Debug, Clone, Default)]
pub struct ObjectList {
    objects: Vec<Primitive>,
}

impl ObjectList {
    /// Create a new empty object list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Primitive>) -> PrimitiveId {
        self.objects.push(object.into());
        PrimitiveId(self.objects.len() - 1)
    }

    /// Add one triangle per mesh face, all sharing `material`.
    ///
    /// Returns the number of triangles added.
    pub fn add_mesh(&mut self, mesh: &Mesh, material: Material) -> usize {
        let before = self.objects.len();
        for vertices in mesh.triangles() {
            self.add(MeshTriangle::from_vertices(&vertices, material));
        }
        self.objects.len() - before
    }

    /// Look up a primitive by handle.
    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.objects.get(id.0)
    }

    /// Iterate the primitives in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.objects.iter()
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest intersection strictly inside `ray_t`.
    pub fn first_hit(&self, ray: &Ray, ray_t: Interval) -> Option<Surfel> {
        let mut rec = Surfel::default();
        self.hit(ray, ray_t, &mut rec).then_some(rec)
    }
}

impl Hittable for ObjectList {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Surfel) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if object.hit(ray, ray_t.with_max(closest_so_far), rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}
