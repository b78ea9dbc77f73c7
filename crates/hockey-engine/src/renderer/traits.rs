//! Renderer trait for the GPU backend that draws demo output.
//!
//! The engine never issues draw calls itself. A backend (OpenGL ES on
//! Android, WebGPU, a test recorder) uploads each mesh once and then
//! replays every [`DrawItem`](super::frame::DrawItem) of a frame: bind the
//! mesh, set the matrix and shading, and issue one draw per
//! [`DrawCommand`](crate::mesh::DrawCommand).

use super::frame::{Frame, MeshId};
use crate::mesh::{DrawCommand, GeneratedData, Table};

/// Mesh data as handed to a backend for upload.
#[derive(Debug, Clone, Copy)]
pub enum MeshUpload<'a> {
    /// Position-only geometry (3 floats per vertex).
    Generated(&'a GeneratedData),
    /// Table quad: x, y, s, t per vertex.
    Table {
        bytes: &'a [u8],
        draw: DrawCommand,
    },
}

impl<'a> MeshUpload<'a> {
    pub fn table() -> MeshUpload<'static> {
        MeshUpload::Table {
            bytes: Table::as_bytes(),
            draw: Table::DRAW,
        }
    }

    pub fn draw_list(&self) -> &[DrawCommand] {
        match self {
            MeshUpload::Generated(data) => data.draw_list(),
            MeshUpload::Table { draw, .. } => std::slice::from_ref(draw),
        }
    }
}

/// # Example Implementation
///
/// ```ignore
/// struct GlesRenderer { buffers: HashMap<MeshId, GlBuffer> }
///
/// impl Renderer for GlesRenderer {
///     fn backend(&self) -> &'static str { "gles2" }
///     fn upload_mesh(&mut self, id: MeshId, mesh: MeshUpload<'_>) { /* glBufferData */ }
///     fn draw(&mut self, frame: &Frame) { /* glDrawArrays per command */ }
///     fn resize(&mut self, width: u32, height: u32) { /* glViewport */ }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "gles2", "webgpu").
    fn backend(&self) -> &'static str;

    /// Upload a mesh. Called once per mesh after surface creation.
    fn upload_mesh(&mut self, id: MeshId, mesh: MeshUpload<'_>);

    /// Draw a complete frame.
    fn draw(&mut self, frame: &Frame);

    /// Handle surface resize.
    fn resize(&mut self, width: u32, height: u32);
}
