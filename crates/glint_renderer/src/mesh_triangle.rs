//! Mesh triangle with smooth (per-vertex) normals.

use glint_core::MeshVertex;
use glint_math::{Dir3, Interval, Point3, Ray, Tex2};

use crate::{hittable::Hittable, triangle::TriangleGeometry, Material, Surfel};

/// A triangle from a loaded mesh.
///
/// Reports the barycentric blend of its three vertex normals. The blend is
/// not renormalized, so it is only unit length where the vertex normals agree.
/// Texture coordinates are kept alongside but not used for shading.
#[derive(Debug, Clone)]
pub struct MeshTriangle {
    geometry: TriangleGeometry,
    normals: [Dir3; 3],
    tex_coords: [Tex2; 3],
    material: Material,
}

impl MeshTriangle {
    /// Create a new mesh triangle.
    pub fn new(
        positions: [Point3; 3],
        normals: [Dir3; 3],
        tex_coords: [Tex2; 3],
        material: Material,
    ) -> Self {
        let [v0, v1, v2] = positions;
        Self {
            geometry: TriangleGeometry::new(v0, v1, v2),
            normals,
            tex_coords,
            material,
        }
    }

    /// Build from the resolved corners of a mesh face.
    pub fn from_vertices(vertices: &[MeshVertex; 3], material: Material) -> Self {
        Self::new(
            vertices.map(|v| v.position),
            vertices.map(|v| v.normal),
            vertices.map(|v| v.tex_coord),
            material,
        )
    }

    pub fn vertices(&self) -> [Point3; 3] {
        self.geometry.vertices()
    }

    pub fn normals(&self) -> [Dir3; 3] {
        self.normals
    }

    pub fn tex_coords(&self) -> [Tex2; 3] {
        self.tex_coords
    }

    /// Unit normal of the flat face, following the vertex winding.
    pub fn face_normal(&self) -> Dir3 {
        self.geometry.face_normal()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for MeshTriangle {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Surfel) -> bool {
        let Some((t, point)) = self.geometry.intersect(ray, ray_t) else {
            return false;
        };

        let w = self.geometry.barycentric(point);
        let [n0, n1, n2] = self.normals;

        rec.t = t;
        rec.point = point;
        rec.normal = w.x * n0 + w.y * n1 + w.z * n2;
        rec.material = self.material;

        true
    }
}
