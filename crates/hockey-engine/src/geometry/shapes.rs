use super::point::{Point3, Vector3};

/// A flat disc lying in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point3,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Return a circle with the same center and `radius * scale`.
    pub fn scale(self, scale: f32) -> Self {
        Self::new(self.center, self.radius * scale)
    }
}

/// An upright cylinder. `center` sits at mid-height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub center: Point3,
    pub radius: f32,
    pub height: f32,
}

impl Cylinder {
    pub fn new(center: Point3, radius: f32, height: f32) -> Self {
        Self { center, radius, height }
    }

    /// Y coordinate of the bottom ring.
    pub fn bottom_y(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    /// Y coordinate of the top ring.
    pub fn top_y(&self) -> f32 {
        self.center.y + self.height / 2.0
    }
}

/// Bounding volume for picking. Never rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An infinite plane through `point` with the given (not necessarily unit) normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Point3,
    pub normal: Vector3,
}

impl Plane {
    pub fn new(point: Point3, normal: Vector3) -> Self {
        Self { point, normal }
    }
}

/// A ray starting at `point` heading along `vector`.
/// `vector` is not normalized; unprojected rays span near to far plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub point: Point3,
    pub vector: Vector3,
}

impl Ray {
    pub fn new(point: Point3, vector: Vector3) -> Self {
        Self { point, vector }
    }

    /// Point reached after travelling `t` times the ray vector.
    pub fn at(&self, t: f32) -> Point3 {
        self.point.translate(self.vector.scale(t))
    }
}
