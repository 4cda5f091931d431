//! Triangle mesh data as read from disk.
//!
//! The mesh keeps the three attribute streams separate, the way OBJ stores
//! them, and every face corner indexes each stream on its own.

use glint_math::{Dir3, Point3, Tex2};

/// Zero-based indices of one face corner into the mesh attribute streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceVertex {
    pub position: usize,
    pub tex_coord: usize,
    pub normal: usize,
}

/// Resolved attributes of one face corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: Point3,
    pub normal: Dir3,
    pub tex_coord: Tex2,
}

/// A triangle mesh with per-corner positions, normals and texture coordinates.
///
/// Only the OBJ loader fills a mesh, and it checks every face index against
/// its stream first, so `triangles()` can resolve corners without failing.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex positions
    pub(crate) positions: Vec<Point3>,

    /// Vertex normals (not necessarily unit length)
    pub(crate) normals: Vec<Dir3>,

    /// Texture coordinates, `(u, v, 0)`
    pub(crate) tex_coords: Vec<Tex2>,

    /// Triangles, three corners each
    pub(crate) faces: Vec<[FaceVertex; 3]>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Dir3] {
        &self.normals
    }

    pub fn tex_coords(&self) -> &[Tex2] {
        &self.tex_coords
    }

    /// Face corners as zero-based indices into the three streams.
    pub fn faces(&self) -> &[[FaceVertex; 3]] {
        &self.faces
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of vertex positions in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Check if the mesh has no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Resolve one face corner into its attributes.
    fn resolve(&self, corner: &FaceVertex) -> MeshVertex {
        MeshVertex {
            position: self.positions[corner.position],
            normal: self.normals[corner.normal],
            tex_coord: self.tex_coords[corner.tex_coord],
        }
    }

    /// Iterate the triangles as resolved corner triples, in file order.
    pub fn triangles(&self) -> impl Iterator<Item = [MeshVertex; 3]> + '_ {
        self.faces
            .iter()
            .map(move |face| [self.resolve(&face[0]), self.resolve(&face[1]), self.resolve(&face[2])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;

    fn corner(i: usize) -> FaceVertex {
        FaceVertex {
            position: i,
            tex_coord: i,
            normal: 0,
        }
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = Mesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            normals: vec![Vec3::Z],
            tex_coords: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            faces: vec![[corner(0), corner(1), corner(2)]],
        };

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.is_empty());
        assert!(Mesh::new().is_empty());
    }

    #[test]
    fn test_triangles_resolve_each_stream() {
        let mesh = Mesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            normals: vec![Vec3::Z],
            tex_coords: vec![Vec3::new(0.5, 0.5, 0.0), Vec3::X, Vec3::Y],
            faces: vec![[corner(2), corner(1), corner(0)]],
        };

        let triangles: Vec<_> = mesh.triangles().collect();
        assert_eq!(triangles.len(), 1);

        let [a, b, c] = triangles[0];
        assert_eq!(a.position, Vec3::Y);
        assert_eq!(b.position, Vec3::X);
        assert_eq!(c.position, Vec3::ZERO);
        assert_eq!(c.tex_coord, Vec3::new(0.5, 0.5, 0.0));
        assert!(triangles[0].iter().all(|v| v.normal == Vec3::Z));
    }

    #[test]
    fn test_loaded_faces_index_their_streams() {
        let mesh = crate::parse_obj(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nvn 0 0 1\nvt 0 0\nvt 1 1\n\
             f 1/1/1 2/2/1 3/1/1\nf 2/2/1 4/2/1 3/1/1\n",
        )
        .unwrap();

        assert_eq!(mesh.faces().len(), 2);
        for corner in mesh.faces().iter().flatten() {
            assert!(corner.position < mesh.positions().len());
            assert!(corner.normal < mesh.normals().len());
            assert!(corner.tex_coord < mesh.tex_coords().len());
        }
        assert_eq!(mesh.triangles().count(), 2);
    }
}
