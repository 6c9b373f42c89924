//! Rendering boundary: turns a [`DrawPackage`] into a compiled display list
//! and owns the lifetime of that list.

use asset::{DrawPackage, DrawVertex, LoadError};
use bytemuck::{Pod, Zeroable};
use thiserror::Error;

pub mod backend;
pub mod placeholder;
pub mod slot;

pub use backend::{DisplayListBackend, HeadlessBackend, ListId};
pub use slot::{ModelSlot, SlotContent};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Display list backend error: {0}")]
    Backend(String),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Interleaved vertex: position + normal + uv.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    /// 1 when `uv` came from the file, 0 otherwise.
    pub has_uv: u32,
}

impl GpuVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: Option<[f32; 2]>) -> Self {
        Self {
            position,
            normal,
            uv: uv.unwrap_or([0.0, 0.0]),
            has_uv: u32::from(uv.is_some()),
        }
    }

    pub fn from_draw_vertex(v: &DrawVertex) -> Self {
        Self::new(v.position, v.normal, v.texcoord)
    }
}

/// Interleave the package's stream in replay order.
pub fn vertices_from_package(package: &DrawPackage) -> Vec<GpuVertex> {
    package
        .stream()
        .iter()
        .map(GpuVertex::from_draw_vertex)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 36);
        let v = GpuVertex::new([1.0, 2.0, 3.0], [0.0, 0.0, 1.0], None);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 36);
    }

    #[test]
    fn package_stream_is_interleaved_in_order() {
        let parsed = asset::obj::parse_str(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0.25 0.75\nf 1/1 2 3\n",
        )
        .expect("parse");
        let package = asset::mesh::assemble(parsed);
        let vertices = vertices_from_package(&package);
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0].uv, [0.25, 0.75]);
        assert_eq!(vertices[0].has_uv, 1);
        assert_eq!(vertices[1].has_uv, 0);
        assert_eq!(vertices[2].position, [0.0, 1.0, 0.0]);
    }
}
