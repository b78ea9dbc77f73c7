pub mod camera;
pub mod frame;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{Camera3D, CameraConfig, MatrixUniform};
pub use frame::{DrawItem, Frame, MeshId, Shading};
pub use traits::{MeshUpload, Renderer};
