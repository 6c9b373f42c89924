//! The currently displayed model and its display list.
//!
//! A new model is compiled into a fresh list before the old list is
//! released, so a failed load never disturbs what is on screen.

use std::path::Path;

use asset::{DrawPackage, MeshSummary};

use crate::{
    DisplayListBackend, GpuVertex, RenderResult, placeholder::placeholder_cube,
    vertices_from_package,
};

/// What a [`ModelSlot`] is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotContent {
    Empty,
    Model(MeshSummary),
    Placeholder,
}

struct Installed<H> {
    handle: H,
    content: SlotContent,
}

pub struct ModelSlot<B: DisplayListBackend> {
    backend: B,
    current: Option<Installed<B::Handle>>,
}

impl<B: DisplayListBackend> ModelSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn content(&self) -> SlotContent {
        self.current
            .as_ref()
            .map_or(SlotContent::Empty, |installed| installed.content)
    }

    /// Handle to replay each frame, if anything is installed.
    pub fn handle(&self) -> Option<&B::Handle> {
        self.current.as_ref().map(|installed| &installed.handle)
    }

    /// Load an OBJ file and make it the displayed model.
    pub fn load(&mut self, path: impl AsRef<Path>) -> RenderResult<MeshSummary> {
        let package = asset::load_obj(path)?;
        self.install_package(&package)
    }

    pub fn install_package(&mut self, package: &DrawPackage) -> RenderResult<MeshSummary> {
        let summary = package.summary();
        let vertices = vertices_from_package(package);
        self.install(&vertices, SlotContent::Model(summary))?;
        Ok(summary)
    }

    /// Swap in the built-in cube.
    pub fn show_placeholder(&mut self) -> RenderResult<()> {
        self.install(&placeholder_cube(), SlotContent::Placeholder)
    }

    /// Release the current list, if any.
    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            log::debug!("Releasing display list ({:?})", old.content);
            self.backend.release(old.handle);
        }
    }

    fn install(&mut self, vertices: &[GpuVertex], content: SlotContent) -> RenderResult<()> {
        let handle = self.backend.compile(vertices)?;
        self.clear();
        log::info!(
            "Display list ready: {} vertices ({:?})",
            vertices.len(),
            content
        );
        self.current = Some(Installed { handle, content });
        Ok(())
    }
}

impl<B: DisplayListBackend> Drop for ModelSlot<B> {
    fn drop(&mut self) {
        self.clear();
    }
}
