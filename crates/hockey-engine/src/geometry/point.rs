use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A position in world or model space.
///
/// Kept distinct from [`Vector3`] so positions and directions can't be mixed
/// up: points are translated by vectors, and the difference of two points
/// is a vector (see [`crate::geometry::vector_between`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Return a copy moved `distance` along the Y axis.
    pub fn translate_y(self, distance: f32) -> Self {
        Self::new(self.x, self.y + distance, self.z)
    }

    /// Return a copy offset by `vector`.
    pub fn translate(self, vector: Vector3) -> Self {
        Self::new(self.x + vector.x, self.y + vector.y, self.z + vector.z)
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A displacement or direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length. Zero for the zero vector.
    pub fn length(self) -> f32 {
        self.to_vec3().length()
    }

    pub fn dot(self, other: Vector3) -> f32 {
        self.to_vec3().dot(other.to_vec3())
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Vector3) -> Vector3 {
        self.to_vec3().cross(other.to_vec3()).into()
    }

    pub fn scale(self, f: f32) -> Vector3 {
        Self::new(self.x * f, self.y * f, self.z * f)
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
