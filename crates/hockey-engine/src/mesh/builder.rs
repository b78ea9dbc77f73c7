//! Procedural mesh generation for solids of revolution.
//!
//! Produces a flat position-only vertex buffer plus an ordered list of draw
//! commands the external renderer replays (one draw call per command).

use std::f64::consts::PI;

use bytemuck::{Pod, Zeroable};

use crate::geometry::{Circle, Cylinder, Point3};

/// Below this many points around, a fan or strip folds onto itself.
pub const MIN_POINTS_AROUND: u32 = 3;

/// One vertex of generated geometry. 3 floats = 12 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VertexPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl VertexPosition {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 3;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 12

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Primitive topology of a draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Vertex 0 is shared by every triangle. Used for caps.
    TriangleFan,
    /// Each new vertex forms a triangle with the previous two. Used for walls.
    TriangleStrip,
}

/// "Draw `topology` over vertices `[start_vertex, start_vertex + vertex_count)`".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub topology: PrimitiveTopology,
    pub start_vertex: u32,
    pub vertex_count: u32,
}

impl DrawCommand {
    /// Exclusive end of the vertex range.
    pub fn end_vertex(&self) -> u32 {
        self.start_vertex + self.vertex_count
    }
}

/// Immutable result of a [`MeshBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedData {
    vertices: Vec<VertexPosition>,
    draw_list: Vec<DrawCommand>,
    degenerate: bool,
}

impl GeneratedData {
    pub fn vertices(&self) -> &[VertexPosition] {
        &self.vertices
    }

    /// Flat `[x, y, z, x, y, z, ...]` view of the vertex buffer.
    pub fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn draw_list(&self) -> &[DrawCommand] {
        &self.draw_list
    }

    /// True when any shape was built with fewer than [`MIN_POINTS_AROUND`]
    /// points and so can't form a closed surface.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Number of vertices [`MeshBuilder::append_circle`] writes: the center plus
/// `num_points + 1` perimeter samples (the last repeats angle 0 to close the fan).
pub fn size_of_circle_in_vertices(num_points: u32) -> usize {
    1 + (num_points as usize + 1)
}

/// Number of vertices [`MeshBuilder::append_open_cylinder`] writes: a bottom
/// and a top vertex for each of `num_points + 1` angular samples.
pub fn size_of_open_cylinder_in_vertices(num_points: u32) -> usize {
    (num_points as usize + 1) * 2
}

fn angle_in_radians(i: u32, num_points: u32) -> f64 {
    (i as f64 / num_points as f64) * (PI * 2.0)
}

/// Accumulates shapes into one vertex buffer.
///
/// Each append records a draw command over exactly the vertices it wrote;
/// `build` hands back the finished, immutable [`GeneratedData`].
pub struct MeshBuilder {
    vertices: Vec<VertexPosition>,
    draw_list: Vec<DrawCommand>,
    degenerate: bool,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-size the vertex buffer for `size_in_vertices` vertices.
    pub fn with_capacity(size_in_vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(size_in_vertices),
            draw_list: Vec::new(),
            degenerate: false,
        }
    }

    fn check_points(&mut self, num_points: u32) {
        if num_points < MIN_POINTS_AROUND {
            log::warn!(
                "building shape with {} points around (minimum {}), geometry will be degenerate",
                num_points,
                MIN_POINTS_AROUND
            );
            self.degenerate = true;
        }
    }

    fn push_command(&mut self, topology: PrimitiveTopology, start: usize) {
        let count = self.vertices.len() - start;
        self.draw_list.push(DrawCommand {
            topology,
            start_vertex: start as u32,
            vertex_count: count as u32,
        });
    }

    /// Append a flat disc as a triangle fan.
    pub fn append_circle(&mut self, circle: Circle, num_points: u32) -> &mut Self {
        self.check_points(num_points);
        let start = self.vertices.len();
        let c = circle.center;
        let r = circle.radius as f64;

        self.vertices.push(VertexPosition::new(c.x, c.y, c.z));

        // Inclusive range: the last sample lands back on angle 0.
        for i in 0..=num_points {
            let angle = angle_in_radians(i, num_points);
            self.vertices.push(VertexPosition::new(
                (c.x as f64 + r * angle.cos()) as f32,
                c.y,
                (c.z as f64 + r * angle.sin()) as f32,
            ));
        }

        debug_assert_eq!(self.vertices.len() - start, size_of_circle_in_vertices(num_points));
        self.push_command(PrimitiveTopology::TriangleFan, start);
        self
    }

    /// Append the side wall of a cylinder (no caps) as a triangle strip.
    pub fn append_open_cylinder(&mut self, cylinder: Cylinder, num_points: u32) -> &mut Self {
        self.check_points(num_points);
        let start = self.vertices.len();
        let c = cylinder.center;
        let r = cylinder.radius as f64;
        let y_start = cylinder.bottom_y();
        let y_end = cylinder.top_y();

        for i in 0..=num_points {
            let angle = angle_in_radians(i, num_points);
            let x = (c.x as f64 + r * angle.cos()) as f32;
            let z = (c.z as f64 + r * angle.sin()) as f32;

            self.vertices.push(VertexPosition::new(x, y_start, z));
            self.vertices.push(VertexPosition::new(x, y_end, z));
        }

        debug_assert_eq!(
            self.vertices.len() - start,
            size_of_open_cylinder_in_vertices(num_points)
        );
        self.push_command(PrimitiveTopology::TriangleStrip, start);
        self
    }

    pub fn build(self) -> GeneratedData {
        GeneratedData {
            vertices: self.vertices,
            draw_list: self.draw_list,
            degenerate: self.degenerate,
        }
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A puck: a top cap plus the side wall. The bottom is never visible so it
/// isn't generated.
pub fn create_puck(puck: Cylinder, num_points: u32) -> GeneratedData {
    let size = size_of_circle_in_vertices(num_points) + size_of_open_cylinder_in_vertices(num_points);
    let puck_top = Circle::new(puck.center.translate_y(puck.height / 2.0), puck.radius);

    let mut builder = MeshBuilder::with_capacity(size);
    builder
        .append_circle(puck_top, num_points)
        .append_open_cylinder(puck, num_points);
    builder.build()
}

/// A mallet: a short wide base topped by a tall narrow handle, each with a
/// cap. The whole thing is `height` tall, from `center.y - height / 2` to
/// `center.y + height / 2`.
pub fn create_mallet(center: Point3, radius: f32, height: f32, num_points: u32) -> GeneratedData {
    let size = size_of_circle_in_vertices(num_points) * 2
        + size_of_open_cylinder_in_vertices(num_points) * 2;
    let mut builder = MeshBuilder::with_capacity(size);

    let base_height = height * 0.25;
    let base_circle = Circle::new(center.translate_y(-base_height), radius);
    let base_cylinder = Cylinder::new(
        base_circle.center.translate_y(-base_height / 2.0),
        radius,
        base_height,
    );

    builder
        .append_circle(base_circle, num_points)
        .append_open_cylinder(base_cylinder, num_points);

    let handle_height = height * 0.75;
    let handle_radius = radius / 3.0;
    let handle_circle = Circle::new(center.translate_y(height * 0.5), handle_radius);
    let handle_cylinder = Cylinder::new(
        handle_circle.center.translate_y(-handle_height / 2.0),
        handle_radius,
        handle_height,
    );

    builder
        .append_circle(handle_circle, num_points)
        .append_open_cylinder(handle_cylinder, num_points);

    builder.build()
}
