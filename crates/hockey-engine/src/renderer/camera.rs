use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Deserializer, Serialize};

use crate::geometry::{vector_between, Point3, Ray};

/// Perspective camera settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (default: 45).
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Eye position; the camera always looks at the origin with +Y up.
    /// Missing coordinates keep the default eye's values.
    #[serde(deserialize_with = "deserialize_eye")]
    pub eye: Point3,
}

fn deserialize_eye<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point3, D::Error> {
    #[derive(Deserialize)]
    struct PartialEye {
        x: Option<f32>,
        y: Option<f32>,
        z: Option<f32>,
    }

    let eye = PartialEye::deserialize(deserializer)?;
    let default = CameraConfig::default().eye;
    Ok(Point3::new(
        eye.x.unwrap_or(default.x),
        eye.y.unwrap_or(default.y),
        eye.z.unwrap_or(default.z),
    ))
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 1.0,
            far: 10.0,
            eye: Point3::new(0.0, 1.5, 2.2),
        }
    }
}

/// GPU-side uniform data for one model-view-projection matrix.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MatrixUniform {
    pub matrix: [[f32; 4]; 4],
}

impl From<Mat4> for MatrixUniform {
    fn from(m: Mat4) -> Self {
        Self { matrix: m.to_cols_array_2d() }
    }
}

/// Perspective camera looking down at the table.
/// Keeps the view-projection matrix and its inverse in sync.
pub struct Camera3D {
    config: CameraConfig,
    aspect: f32,
    projection: Mat4,
    view: Mat4,
    view_projection: Mat4,
    inverted_view_projection: Mat4,
}

impl Camera3D {
    pub fn new(config: CameraConfig) -> Self {
        let mut cam = Self {
            config,
            aspect: 1.0,
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            inverted_view_projection: Mat4::IDENTITY,
        };
        cam.rebuild();
        cam
    }

    /// Recompute the projection for a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("ignoring resize to {}x{}", width, height);
            return;
        }
        self.aspect = width as f32 / height as f32;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let c = &self.config;
        // OpenGL clip space: z in [-1, 1].
        self.projection = Mat4::perspective_rh_gl(
            c.fov_y_degrees.to_radians(),
            self.aspect,
            c.near,
            c.far,
        );
        self.view = Mat4::look_at_rh(c.eye.to_vec3(), Vec3::ZERO, Vec3::Y);
        self.view_projection = self.projection * self.view;
        self.inverted_view_projection = self.view_projection.inverse();
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn view_projection(&self) -> Mat4 {
        self.view_projection
    }

    /// MVP for a mesh built around the origin and placed at `position`.
    pub fn model_view_projection_at(&self, position: Point3) -> Mat4 {
        self.view_projection * Mat4::from_translation(position.to_vec3())
    }

    /// MVP for the table, which is authored in XY and laid flat onto XZ.
    pub fn table_model_view_projection(&self) -> Mat4 {
        self.view_projection * Mat4::from_rotation_x(-90f32.to_radians())
    }

    /// Unproject a normalized device coordinate (x, y in [-1, 1]) into a
    /// world-space ray running from the near plane to the far plane.
    ///
    /// Returns `None` if the view-projection can't be inverted.
    pub fn ray_from_ndc(&self, normalized_x: f32, normalized_y: f32) -> Option<Ray> {
        let near = self.unproject(Vec4::new(normalized_x, normalized_y, -1.0, 1.0))?;
        let far = self.unproject(Vec4::new(normalized_x, normalized_y, 1.0, 1.0))?;
        Some(Ray::new(near, vector_between(near, far)))
    }

    fn unproject(&self, ndc: Vec4) -> Option<Point3> {
        let world = self.inverted_view_projection * ndc;
        if world.w == 0.0 || !world.is_finite() {
            return None;
        }
        // Undo the perspective divide.
        Some(Point3::from(world.truncate() / world.w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{intersection_point, Plane, Vector3};

    fn camera() -> Camera3D {
        let mut cam = Camera3D::new(CameraConfig::default());
        cam.resize(1080, 1920);
        cam
    }

    #[test]
    fn projection_matches_gl_perspective_layout() {
        let cam = camera();
        let m = cam.projection_matrix().to_cols_array();
        let a = 1.0 / (45f32.to_radians() / 2.0).tan();
        assert!((m[0] - a / cam.aspect()).abs() < 1e-5);
        assert!((m[5] - a).abs() < 1e-5);
        assert!((m[10] - -(10.0 + 1.0) / (10.0 - 1.0)).abs() < 1e-5);
        assert_eq!(m[11], -1.0);
        assert!((m[14] - -(2.0 * 10.0 * 1.0) / (10.0 - 1.0)).abs() < 1e-5);
    }

    #[test]
    fn center_ray_points_at_origin() {
        let cam = camera();
        let ray = cam.ray_from_ndc(0.0, 0.0).unwrap();
        let table = Plane::new(Point3::ORIGIN, Vector3::new(0.0, 1.0, 0.0));
        let hit = intersection_point(&ray, &table).unwrap();
        assert!(hit.x.abs() < 1e-4);
        assert!(hit.z.abs() < 1e-4, "z={}", hit.z);
    }

    #[test]
    fn ray_starts_on_near_plane() {
        let cam = camera();
        let ray = cam.ray_from_ndc(0.3, -0.2).unwrap();
        let eye = cam.config.eye;
        let dist = vector_between(eye, ray.point).length();
        // The near-plane point is at least `near` from the eye.
        assert!(dist >= 1.0 - 1e-4);
        assert!(ray.vector.length() > 8.0);
    }

    #[test]
    fn model_matrix_translates_origin() {
        let cam = camera();
        let p = Point3::new(0.2, 0.06, 0.4);
        let clip_a = cam.model_view_projection_at(p) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let clip_b = cam.view_projection() * Vec4::new(0.2, 0.06, 0.4, 1.0);
        assert!((clip_a - clip_b).abs().max_element() < 1e-5);
    }

    #[test]
    fn table_is_laid_on_xz_plane() {
        let cam = camera();
        // Table corner (0.5, 0.8) in XY ends up at (0.5, 0, -0.8) in world.
        let clip_a = cam.table_model_view_projection() * Vec4::new(0.5, 0.8, 0.0, 1.0);
        let clip_b = cam.view_projection() * Vec4::new(0.5, 0.0, -0.8, 1.0);
        assert!((clip_a - clip_b).abs().max_element() < 1e-5);
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut cam = camera();
        let before = cam.aspect();
        cam.resize(0, 100);
        assert_eq!(cam.aspect(), before);
    }

    #[test]
    fn uniform_is_16_floats() {
        assert_eq!(std::mem::size_of::<MatrixUniform>(), 64);
        let u = MatrixUniform::from(Mat4::IDENTITY);
        assert_eq!(u.matrix[3][3], 1.0);
    }
}
