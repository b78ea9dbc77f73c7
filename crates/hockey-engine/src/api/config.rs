use serde::{Deserialize, Serialize};

use crate::api::demo::DemoKind;
use crate::core::puck::TableBounds;
use crate::error::{Error, Result};
#[cfg(test)]
use crate::geometry::Point3;
use crate::mesh::MIN_POINTS_AROUND;
use crate::renderer::camera::CameraConfig;

/// Puck size. Defaults: radius 0.08, height 0.02.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuckConfig {
    pub radius: f32,
    pub height: f32,
}

impl Default for PuckConfig {
    fn default() -> Self {
        Self { radius: 0.08, height: 0.02 }
    }
}

/// Mallet size. Defaults: radius 0.09, height 0.12.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MalletConfig {
    pub radius: f32,
    pub height: f32,
}

impl Default for MalletConfig {
    fn default() -> Self {
        Self { radius: 0.09, height: 0.12 }
    }
}

/// Scene setup for the air hockey demos. Every field has a default, so a
/// config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HockeyConfig {
    pub bounds: TableBounds,
    pub puck: PuckConfig,
    pub mallet: MalletConfig,
    /// Angular samples around pucks and mallets (default: 64).
    pub points_around: u32,
    /// Velocity multiplier on each wall bounce (default: 0.9).
    pub bounce_damping: f32,
    /// Velocity multiplier applied every frame (default: 0.99).
    pub friction: f32,
    pub camera: CameraConfig,
}

impl Default for HockeyConfig {
    fn default() -> Self {
        Self {
            bounds: TableBounds::default(),
            puck: PuckConfig::default(),
            mallet: MalletConfig::default(),
            points_around: 64,
            bounce_damping: 0.9,
            friction: 0.99,
            camera: CameraConfig::default(),
        }
    }
}

impl HockeyConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce a broken scene.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| -> Result<()> { Err(Error::InvalidConfig(reason)) };

        let pieces = [
            ("puck", self.puck.radius, self.puck.height),
            ("mallet", self.mallet.radius, self.mallet.height),
        ];
        for (name, radius, height) in pieces {
            if !(radius > 0.0 && height > 0.0) {
                return invalid(format!("{} radius and height must be positive", name));
            }
        }

        let b = &self.bounds;
        let widest = self.puck.radius.max(self.mallet.radius);
        if b.right - b.left <= 2.0 * widest || b.near - b.far <= 2.0 * widest {
            return invalid(format!(
                "table bounds {:?} leave no room for pieces of radius {}",
                b, widest
            ));
        }

        if self.points_around < MIN_POINTS_AROUND {
            return invalid(format!(
                "points_around must be at least {}, got {}",
                MIN_POINTS_AROUND, self.points_around
            ));
        }

        for (name, factor) in [("bounce_damping", self.bounce_damping), ("friction", self.friction)] {
            if !(factor > 0.0 && factor <= 1.0) {
                return invalid(format!("{} must be in (0, 1], got {}", name, factor));
            }
        }

        let c = &self.camera;
        if !(c.near > 0.0 && c.near < c.far) {
            return invalid(format!("camera needs 0 < near < far, got {} and {}", c.near, c.far));
        }
        if !(c.fov_y_degrees > 0.0 && c.fov_y_degrees < 180.0) {
            return invalid(format!("camera fov must be in (0, 180), got {}", c.fov_y_degrees));
        }

        Ok(())
    }
}

/// Which demo to run and how to set it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    pub kind: DemoKind,
    pub hockey: HockeyConfig,
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.hockey.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(HockeyConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "points_around": 32,
            "bounds": { "near": 1.0 }
        }"#;
        let config = HockeyConfig::from_json(json).unwrap();
        assert_eq!(config.points_around, 32);
        assert_eq!(config.bounds.near, 1.0);
        assert_eq!(config.bounds.far, -0.8);
        assert_eq!(config.puck.radius, 0.08);
        assert_eq!(config.friction, 0.99);
    }

    #[test]
    fn partial_nested_objects_keep_their_defaults() {
        let config = HockeyConfig::from_json(r#"{ "puck": { "radius": 0.1 } }"#).unwrap();
        assert_eq!(config.puck.radius, 0.1);
        assert_eq!(config.puck.height, 0.02);
        assert_eq!(config.mallet, MalletConfig::default());

        let config = HockeyConfig::from_json(r#"{ "mallet": { "height": 0.2 } }"#).unwrap();
        assert_eq!(config.mallet.radius, 0.09);
        assert_eq!(config.mallet.height, 0.2);

        let config = HockeyConfig::from_json(r#"{ "camera": { "eye": { "y": 2.0 } } }"#).unwrap();
        assert_eq!(config.camera.eye, Point3::new(0.0, 2.0, 2.2));
        assert_eq!(config.camera.fov_y_degrees, 45.0);
    }

    #[test]
    fn rejects_too_few_points() {
        let err = HockeyConfig::from_json(r#"{ "points_around": 2 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_damping_above_one() {
        let err = HockeyConfig::from_json(r#"{ "friction": 1.5 }"#).unwrap_err();
        assert!(err.to_string().contains("friction"));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = HockeyConfig::from_json(r#"{ "bounds": { "left": 0.5, "right": -0.5 } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = HockeyConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn demo_kind_by_name() {
        let config = DemoConfig::from_json(r#"{ "kind": "air_hockey_touch" }"#).unwrap();
        assert_eq!(config.kind, DemoKind::AirHockeyTouch);
        let config = DemoConfig::from_json("{}").unwrap();
        assert_eq!(config.kind, DemoKind::default());
    }
}
