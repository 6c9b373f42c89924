//! Display-list backends: where compiled vertex streams live.

use std::collections::HashMap;

use crate::{GpuVertex, RenderError, RenderResult};

/// Compile-once, replay-many draw resource owned by a graphics API.
pub trait DisplayListBackend {
    type Handle;

    /// Upload `vertices` (a triangle list) and return a handle to replay it.
    fn compile(&mut self, vertices: &[GpuVertex]) -> RenderResult<Self::Handle>;

    /// Free the resource behind `handle`. Called exactly once per handle.
    fn release(&mut self, handle: Self::Handle);
}

/// Handle for a [`HeadlessBackend`] list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListId(pub u32);

/// CPU-side backend that keeps compiled lists in memory.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    lists: HashMap<ListId, Vec<GpuVertex>>,
    list_counter: u32,
    released: u32,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of a live list.
    #[cfg(test)]
    pub fn list(&self, id: ListId) -> Option<&[GpuVertex]> {
        self.lists.get(&id).map(Vec::as_slice)
    }

    pub fn live_lists(&self) -> usize {
        self.lists.len()
    }

    pub fn released_lists(&self) -> u32 {
        self.released
    }
}

impl DisplayListBackend for HeadlessBackend {
    type Handle = ListId;

    fn compile(&mut self, vertices: &[GpuVertex]) -> RenderResult<ListId> {
        if vertices.len() % 3 != 0 {
            return Err(RenderError::Backend(format!(
                "triangle list length {} is not a multiple of 3",
                vertices.len()
            )));
        }
        self.list_counter += 1;
        let id = ListId(self.list_counter);
        self.lists.insert(id, vertices.to_vec());
        Ok(id)
    }

    fn release(&mut self, handle: ListId) {
        if self.lists.remove(&handle).is_some() {
            self.released += 1;
        } else {
            log::warn!("Release of unknown display list {:?}", handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_and_release_track_live_lists() {
        let mut backend = HeadlessBackend::new();
        let tri = [GpuVertex::default(); 3];
        let a = backend.compile(&tri).expect("compile a");
        let b = backend.compile(&tri).expect("compile b");
        assert_ne!(a, b);
        assert_eq!(backend.live_lists(), 2);

        backend.release(a);
        assert_eq!(backend.live_lists(), 1);
        assert_eq!(backend.released_lists(), 1);
        assert!(backend.list(a).is_none());
        assert_eq!(backend.list(b).map(<[GpuVertex]>::len), Some(3));
    }

    #[test]
    fn partial_triangle_is_rejected() {
        let mut backend = HeadlessBackend::new();
        let err = backend.compile(&[GpuVertex::default(); 2]).unwrap_err();
        assert!(matches!(err, RenderError::Backend(_)));
        assert_eq!(backend.live_lists(), 0);
    }
}
