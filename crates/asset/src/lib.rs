//! Asset loading: OBJ parsing, mesh assembly and procedural textures.

use std::path::Path;

pub mod error;
pub mod mesh;
pub mod obj;
pub mod texture;

pub use error::{LoadError, LoadErrorKind, LoadResult};
pub use mesh::{DrawPackage, DrawVertex, MeshSummary, NormalSource};

/// Parse and assemble an OBJ file in one step.
pub fn load_obj(path: impl AsRef<Path>) -> LoadResult<DrawPackage> {
    let path = path.as_ref();
    let package = mesh::assemble(obj::parse(path)?);
    let summary = package.summary();
    log::info!(
        "Loaded OBJ {} | V: {} VT: {} VN: {} | Tris: {}",
        path.display(),
        summary.vertex_count,
        summary.texcoord_count,
        summary.normal_count,
        summary.triangle_count
    );
    Ok(package)
}
