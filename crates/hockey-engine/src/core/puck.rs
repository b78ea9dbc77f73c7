//! Puck simulation: one Euler step per rendered frame, wall bounces with
//! energy loss, constant friction, and mallet pushes.

use serde::{Deserialize, Serialize};

use crate::api::config::HockeyConfig;
use crate::geometry::{vector_between, Point3, Vector3};

/// Axis-aligned play area on the XZ plane. `far` is the -Z end (opponent's
/// side), `near` the +Z end (player's side).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableBounds {
    pub left: f32,
    pub right: f32,
    pub far: f32,
    pub near: f32,
}

impl Default for TableBounds {
    fn default() -> Self {
        Self {
            left: -0.5,
            right: 0.5,
            far: -0.8,
            near: 0.8,
        }
    }
}

impl TableBounds {
    /// Z of the center line splitting the two halves.
    pub fn center_z(&self) -> f32 {
        (self.far + self.near) / 2.0
    }

    /// Whether a disc of `radius` at `x` pokes through the left or right wall.
    fn outside_x(&self, x: f32, radius: f32) -> bool {
        x < self.left + radius || x > self.right - radius
    }

    fn outside_z(&self, z: f32, radius: f32) -> bool {
        z < self.far + radius || z > self.near - radius
    }
}

// Doesn't panic on an inverted range, unlike f32::clamp.
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    max.min(value.max(min))
}

/// State of the puck and the player's mallet.
#[derive(Debug, Clone)]
pub struct PuckSimulation {
    bounds: TableBounds,
    puck_radius: f32,
    puck_height: f32,
    mallet_radius: f32,
    mallet_height: f32,
    bounce_damping: f32,
    friction: f32,
    puck_position: Point3,
    puck_velocity: Vector3,
    mallet_position: Point3,
}

impl PuckSimulation {
    /// Puck resting at the table center, mallet on the player's half.
    pub fn new(config: &HockeyConfig) -> Self {
        Self {
            bounds: config.bounds,
            puck_radius: config.puck.radius,
            puck_height: config.puck.height,
            mallet_radius: config.mallet.radius,
            mallet_height: config.mallet.height,
            bounce_damping: config.bounce_damping,
            friction: config.friction,
            puck_position: Point3::new(0.0, config.puck.height / 2.0, 0.0),
            puck_velocity: Vector3::ZERO,
            mallet_position: Point3::new(0.0, config.mallet.height / 2.0, 0.4),
        }
    }

    pub fn bounds(&self) -> &TableBounds {
        &self.bounds
    }

    pub fn puck_position(&self) -> Point3 {
        self.puck_position
    }

    pub fn puck_velocity(&self) -> Vector3 {
        self.puck_velocity
    }

    pub fn mallet_position(&self) -> Point3 {
        self.mallet_position
    }

    pub fn puck_height(&self) -> f32 {
        self.puck_height
    }

    pub fn mallet_height(&self) -> f32 {
        self.mallet_height
    }

    pub fn set_puck_position(&mut self, position: Point3) {
        self.puck_position = position;
    }

    pub fn set_puck_velocity(&mut self, velocity: Vector3) {
        self.puck_velocity = velocity;
    }

    /// Advance one frame.
    ///
    /// X and Z bounces are checked independently, so a corner hit flips
    /// both components and damps twice. The clamp always runs last, so the
    /// puck never leaves the table even after overshooting on both axes.
    pub fn tick(&mut self) {
        let r = self.puck_radius;
        let b = self.bounds;

        self.puck_position = self.puck_position.translate(self.puck_velocity);

        if b.outside_x(self.puck_position.x, r) {
            let v = self.puck_velocity;
            self.puck_velocity = Vector3::new(-v.x, v.y, v.z).scale(self.bounce_damping);
        }
        if b.outside_z(self.puck_position.z, r) {
            let v = self.puck_velocity;
            self.puck_velocity = Vector3::new(v.x, v.y, -v.z).scale(self.bounce_damping);
        }

        let p = self.puck_position;
        self.puck_position = Point3::new(
            clamp(p.x, b.left + r, b.right - r),
            p.y,
            clamp(p.z, b.far + r, b.near - r),
        );

        self.puck_velocity = self.puck_velocity.scale(self.friction);
    }

    /// Move the player's mallet toward `target` (a point on the table plane).
    ///
    /// The mallet stays on the player's half and rests on the table. If it
    /// ends up overlapping the puck, the puck takes the mallet's displacement
    /// for this move as its new velocity. Returns whether the puck was hit.
    pub fn drag_mallet_to(&mut self, target: Point3) -> bool {
        let r = self.mallet_radius;
        let b = self.bounds;

        let previous = self.mallet_position;
        self.mallet_position = Point3::new(
            clamp(target.x, b.left + r, b.right - r),
            self.mallet_height / 2.0,
            clamp(target.z, b.center_z() + r, b.near - r),
        );

        let distance = vector_between(self.mallet_position, self.puck_position).length();
        if distance < self.puck_radius + self.mallet_radius {
            self.puck_velocity = vector_between(previous, self.mallet_position);
            log::debug!("mallet hit puck, velocity now {:?}", self.puck_velocity);
            true
        } else {
            false
        }
    }
}
