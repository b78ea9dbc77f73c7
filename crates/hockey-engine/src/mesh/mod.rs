pub mod builder;
pub mod objects;

pub use builder::{
    create_mallet, create_puck, size_of_circle_in_vertices, size_of_open_cylinder_in_vertices,
    DrawCommand, GeneratedData, MeshBuilder, PrimitiveTopology, VertexPosition, MIN_POINTS_AROUND,
};
pub use objects::{Mallet, Puck, Table, TableVertex};
