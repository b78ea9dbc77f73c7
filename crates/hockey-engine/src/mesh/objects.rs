use bytemuck::{Pod, Zeroable};

use crate::geometry::{Cylinder, Point3};
use super::builder::{create_mallet, create_puck, DrawCommand, GeneratedData, PrimitiveTopology};

/// The puck: a cylinder mesh built around the origin, placed in the world
/// by the model matrix each frame.
#[derive(Debug, Clone)]
pub struct Puck {
    radius: f32,
    height: f32,
    mesh: GeneratedData,
}

impl Puck {
    pub fn new(radius: f32, height: f32, num_points_around: u32) -> Self {
        let cylinder = Cylinder::new(Point3::ORIGIN, radius, height);
        Self {
            radius,
            height,
            mesh: create_puck(cylinder, num_points_around),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn mesh(&self) -> &GeneratedData {
        &self.mesh
    }
}

/// A mallet mesh built around the origin.
#[derive(Debug, Clone)]
pub struct Mallet {
    radius: f32,
    height: f32,
    mesh: GeneratedData,
}

impl Mallet {
    pub fn new(radius: f32, height: f32, num_points_around: u32) -> Self {
        Self {
            radius,
            height,
            mesh: create_mallet(Point3::ORIGIN, radius, height, num_points_around),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn mesh(&self) -> &GeneratedData {
        &self.mesh
    }
}

/// Table vertex: position in the XY plane plus texture coordinates.
/// 4 floats = 16 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct TableVertex {
    pub x: f32,
    pub y: f32,
    pub s: f32,
    pub t: f32,
}

impl TableVertex {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 16

    const fn new(x: f32, y: f32, s: f32, t: f32) -> Self {
        Self { x, y, s, t }
    }
}

/// The textured table surface, authored flat in XY and rotated onto the
/// XZ plane by the camera's table transform.
///
/// A fan around the center; the last vertex repeats the first corner. The
/// texture is cropped 10% top and bottom to fit the 1:1.6 table.
pub struct Table;

impl Table {
    pub const VERTICES: [TableVertex; 6] = [
        TableVertex::new(0.0, 0.0, 0.5, 0.5),
        TableVertex::new(-0.5, -0.8, 0.0, 0.9),
        TableVertex::new(0.5, -0.8, 1.0, 0.9),
        TableVertex::new(0.5, 0.8, 1.0, 0.1),
        TableVertex::new(-0.5, 0.8, 0.0, 0.1),
        TableVertex::new(-0.5, -0.8, 0.0, 0.9),
    ];

    pub const DRAW: DrawCommand = DrawCommand {
        topology: PrimitiveTopology::TriangleFan,
        start_vertex: 0,
        vertex_count: 6,
    };

    pub fn as_bytes() -> &'static [u8] {
        static VERTICES: [TableVertex; 6] = Table::VERTICES;
        bytemuck::cast_slice(&VERTICES)
    }
}
