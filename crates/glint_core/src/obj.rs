//! OBJ loading through `tobj`, held to the subset the renderer supports.
//!
//! # Accepted input
//!
//! - `v`, `vn` and `vt` records (a trailing `vt` component is ignored)
//! - `f v/vt/vn v/vt/vn v/vt/vn` faces: triangles only, every corner carrying
//!   all three indices
//! - `o`, `g`, `s`, `mtllib`, `usemtl` and comments are accepted; materials are
//!   not loaded
//!
//! Loading is all-or-nothing: any rejected record or face fails the whole
//! read and no partial mesh is handed back.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glint_math::Vec3;
use thiserror::Error;

use crate::mesh::{FaceVertex, Mesh};

/// Errors that can occur while reading an OBJ file.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed OBJ: {0}")]
    Load(#[from] tobj::LoadError),

    #[error("Object {model:?} has a face with {arity} vertices, only triangles are supported")]
    NonTriangleFace { model: String, arity: u32 },

    #[error("Object {model:?} has faces without {kind} indices")]
    MissingIndices { model: String, kind: &'static str },

    #[error("Object {model:?} uses {kind} index {index}, {count} defined")]
    IndexOutOfRange {
        model: String,
        kind: &'static str,
        index: u32,
        count: usize,
    },
}

/// Result type for OBJ reading.
pub type ObjResult<T> = Result<T, ObjError>;

/// Faces stay as written: no triangulation, separate index streams.
fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: false,
        triangulate: false,
        ..Default::default()
    }
}

/// Read OBJ text from `reader` into a mesh.
fn read_obj<B: BufRead>(reader: &mut B) -> ObjResult<Mesh> {
    let (models, _materials) =
        tobj::load_obj_buf(reader, &load_options(), |_| Err(tobj::LoadError::OpenFileFailed))?;

    let mut mesh = Mesh::new();
    for model in &models {
        log::debug!(
            "OBJ object {:?}: {} indices",
            model.name,
            model.mesh.indices.len()
        );
        append_model(&mut mesh, model)?;
    }
    Ok(mesh)
}

/// Check one `tobj` model against the supported subset and append it.
fn append_model(mesh: &mut Mesh, model: &tobj::Model) -> ObjResult<()> {
    let source = &model.mesh;
    let name = || model.name.clone();

    // Empty arities mean every face is a triangle
    if let Some(&arity) = source.face_arities.iter().find(|&&arity| arity != 3) {
        return Err(ObjError::NonTriangleFace { model: name(), arity });
    }
    if source.indices.len() % 3 != 0 {
        return Err(ObjError::NonTriangleFace {
            model: name(),
            arity: (source.indices.len() % 3) as u32,
        });
    }

    for (kind, indices) in [
        ("texture", &source.texcoord_indices),
        ("normal", &source.normal_indices),
    ] {
        if indices.len() != source.indices.len() {
            return Err(ObjError::MissingIndices { model: name(), kind });
        }
    }

    let position_count = source.positions.len() / 3;
    let tex_coord_count = source.texcoords.len() / 2;
    let normal_count = source.normals.len() / 3;

    let check = |kind: &'static str, index: u32, count: usize| -> ObjResult<usize> {
        let index_usize = index as usize;
        if index_usize >= count {
            return Err(ObjError::IndexOutOfRange {
                model: name(),
                kind,
                index,
                count,
            });
        }
        Ok(index_usize)
    };

    let position_base = mesh.positions.len();
    let tex_coord_base = mesh.tex_coords.len();
    let normal_base = mesh.normals.len();

    let mut corners = Vec::with_capacity(source.indices.len());
    for ((&v, &vt), &vn) in source
        .indices
        .iter()
        .zip(&source.texcoord_indices)
        .zip(&source.normal_indices)
    {
        corners.push(FaceVertex {
            position: position_base + check("vertex", v, position_count)?,
            tex_coord: tex_coord_base + check("texture", vt, tex_coord_count)?,
            normal: normal_base + check("normal", vn, normal_count)?,
        });
    }

    mesh.positions.extend(
        source
            .positions
            .chunks_exact(3)
            .map(Vec3::from_slice),
    );
    mesh.normals
        .extend(source.normals.chunks_exact(3).map(Vec3::from_slice));
    mesh.tex_coords.extend(
        source
            .texcoords
            .chunks_exact(2)
            .map(|uv| Vec3::new(uv[0], uv[1], 0.0)),
    );
    mesh.faces
        .extend(corners.chunks_exact(3).map(|c| [c[0], c[1], c[2]]));

    Ok(())
}

/// Parse OBJ text into a mesh.
pub fn parse_obj(content: &str) -> ObjResult<Mesh> {
    read_obj(&mut content.as_bytes())
}

/// Load an OBJ file from disk.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_obj;
///
/// let mesh = load_obj("bunny.obj")?;
/// println!("{} triangles", mesh.triangle_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<Mesh> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let mesh = read_obj(&mut reader)?;

    log::info!(
        "Loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = r#"
# single triangle
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
vt 0 0
vt 1 0
vt 0 1
f 1/1/1 2/2/1 3/3/1
"#;

    #[test]
    fn test_parse_triangle() {
        let mesh = parse_obj(TRIANGLE).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.normals().len(), 1);
        assert_eq!(mesh.tex_coords().len(), 3);
        assert_eq!(mesh.triangle_count(), 1);

        let [a, b, c] = mesh.triangles().next().unwrap();
        assert_eq!(a.position, Vec3::ZERO);
        assert_eq!(b.position, Vec3::X);
        assert_eq!(c.position, Vec3::Y);
        assert_eq!(c.tex_coord, Vec3::new(0.0, 1.0, 0.0));
        assert!([a, b, c].iter().all(|v| v.normal == Vec3::Z));
    }

    #[test]
    fn test_groups_and_extra_components_are_accepted() {
        let obj = r#"
o Box
g front
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
vt 0 0 0
s off
f 1/1/1 2/1/1 3/1/1
"#;
        let mesh = parse_obj(obj).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.tex_coords()[0], Vec3::ZERO);
    }

    #[test]
    fn test_objects_are_merged() {
        let obj = r#"
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
vn 0 0 1
vt 0 0
o first
f 1/1/1 2/1/1 3/1/1
o second
f 1/1/1 2/1/1 4/1/1
"#;
        let mesh = parse_obj(obj).unwrap();
        assert_eq!(mesh.triangle_count(), 2);

        let corners: Vec<Vec3> = mesh.triangles().flat_map(|t| t.map(|v| v.position)).collect();
        assert_eq!(
            corners,
            vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ZERO, Vec3::X, Vec3::Z]
        );
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_obj("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, ObjError::Load(tobj::LoadError::PositionParseError)));
    }

    #[test]
    fn test_missing_value() {
        let err = parse_obj("v 0 0 0\nvn 0 1\n").unwrap_err();
        assert!(matches!(err, ObjError::Load(tobj::LoadError::NormalParseError)));
    }

    #[test]
    fn test_face_requires_all_indices() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n";
        let err = parse_obj(obj).unwrap_err();
        assert!(matches!(err, ObjError::MissingIndices { kind: "texture", .. }));

        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2/1 3/1\n";
        let err = parse_obj(obj).unwrap_err();
        assert!(matches!(err, ObjError::MissingIndices { kind: "normal", .. }));
    }

    #[test]
    fn test_face_must_be_a_triangle() {
        let quad = TRIANGLE.replace("f 1/1/1 2/2/1 3/3/1", "v 1 1 0\nf 1/1/1 2/2/1 4/3/1 3/3/1");
        assert!(matches!(
            parse_obj(&quad).unwrap_err(),
            ObjError::NonTriangleFace { .. }
        ));

        let line = TRIANGLE.replace("f 1/1/1 2/2/1 3/3/1", "f 1/1/1 2/2/1");
        assert!(matches!(
            parse_obj(&line).unwrap_err(),
            ObjError::NonTriangleFace { .. } | ObjError::Load(_)
        ));
    }

    #[test]
    fn test_index_out_of_range() {
        let obj = TRIANGLE.replace("f 1/1/1 2/2/1 3/3/1", "f 1/1/1 2/2/2 3/3/1");
        assert!(matches!(
            parse_obj(&obj).unwrap_err(),
            ObjError::Load(_) | ObjError::IndexOutOfRange { .. }
        ));

        let zero = TRIANGLE.replace("f 1/1/1 2/2/1 3/3/1", "f 0/1/1 2/2/1 3/3/1");
        assert!(parse_obj(&zero).is_err());
    }

    #[test]
    fn test_non_numeric_index() {
        let obj = TRIANGLE.replace("f 1/1/1 2/2/1 3/3/1", "f a/1/1 2/2/1 3/3/1");
        assert!(matches!(
            parse_obj(&obj).unwrap_err(),
            ObjError::Load(tobj::LoadError::FaceParseError)
        ));
    }

    #[test]
    fn test_no_faces_gives_empty_mesh() {
        let mesh = parse_obj("# nothing here\n").unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_obj("this/file/does/not/exist.obj").unwrap_err();
        assert!(matches!(err, ObjError::Io(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let _ = env_logger::builder().is_test(true).try_init();

        let path = std::env::temp_dir().join(format!("glint_obj_{}.obj", std::process::id()));
        std::fs::write(&path, TRIANGLE).unwrap();

        let mesh = load_obj(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles().count(), 1);
    }
}
