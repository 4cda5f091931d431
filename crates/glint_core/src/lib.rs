//! Glint Core - scene input for the Glint path tracer.
//!
//! This crate provides:
//!
//! - **Mesh data**: `Mesh`, `FaceVertex`, `MeshVertex`
//! - **OBJ support**: `tobj` loading checked against the `v`/`vn`/`vt`/`f` triangle subset
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_obj;
//!
//! let mesh = load_obj("models/cornellBox.obj")?;
//! println!("Loaded {} triangles", mesh.triangle_count());
//! ```

pub mod mesh;
pub mod obj;

// Re-export commonly used types
pub use mesh::{FaceVertex, Mesh, MeshVertex};
pub use obj::{load_obj, parse_obj, ObjError, ObjResult};
