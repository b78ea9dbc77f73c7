pub mod api;
pub mod core;
pub mod demos;
pub mod error;
pub mod geometry;
pub mod input;
pub mod mesh;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::{DemoConfig, HockeyConfig, MalletConfig, PuckConfig};
pub use api::demo::{create_demo, Demo, DemoKind, EmptyDemo};
pub use api::runner::DemoRunner;
pub use crate::core::puck::{PuckSimulation, TableBounds};
pub use demos::air_hockey::AirHockeyTouch;
pub use error::{Error, Result};
pub use geometry::{
    distance_between, intersection_point, intersects, vector_between,
    Circle, Cylinder, Plane, Point3, Ray, Sphere, Vector3,
};
pub use input::queue::{InputQueue, TouchAction, TouchEvent};
pub use mesh::{
    create_mallet, create_puck, size_of_circle_in_vertices, size_of_open_cylinder_in_vertices,
    DrawCommand, GeneratedData, Mallet, MeshBuilder, PrimitiveTopology, Puck, Table,
    VertexPosition,
};
pub use renderer::{Camera3D, CameraConfig, DrawItem, Frame, MatrixUniform, MeshId, MeshUpload, Renderer, Shading};
