use glam::Mat4;

use super::camera::MatrixUniform;

/// Identifies a mesh uploaded once at surface creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshId {
    /// The static textured table quad.
    Table,
    Mallet,
    Puck,
}

/// How the renderer should shade a draw item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Sample the table surface texture.
    Textured,
    /// Flat RGB color.
    Color([f32; 3]),
}

/// One placed mesh in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshId,
    pub model_view_projection: MatrixUniform,
    pub shading: Shading,
}

/// Everything the external renderer needs to draw one frame, in draw order.
pub struct Frame {
    pub clear_color: [f32; 4],
    pub items: Vec<DrawItem>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 0.0],
            items: Vec::with_capacity(8),
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, mesh: MeshId, model_view_projection: Mat4, shading: Shading) {
        self.items.push(DrawItem {
            mesh,
            model_view_projection: model_view_projection.into(),
            shading,
        });
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
