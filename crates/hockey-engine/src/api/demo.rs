use serde::{Deserialize, Serialize};

use crate::api::config::HockeyConfig;
use crate::demos::air_hockey::AirHockeyTouch;
use crate::renderer::frame::{Frame, MeshId};
use crate::renderer::traits::MeshUpload;

/// The contract every demo scene fulfills. The host calls these from its
/// render loop; touch handlers run on the same thread, between frames.
pub trait Demo {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Build meshes and initial state. Called once the drawing surface exists.
    fn on_surface_created(&mut self);

    /// The surface was resized.
    fn on_surface_changed(&mut self, width: u32, height: u32);

    /// Advance the scene one frame and write what to draw into `frame`.
    fn on_draw_frame(&mut self, frame: &mut Frame);

    /// Finger down at a normalized device coordinate.
    fn handle_touch_press(&mut self, _normal_x: f32, _normal_y: f32) {}

    /// Finger moved at a normalized device coordinate.
    fn handle_touch_move(&mut self, _normal_x: f32, _normal_y: f32) {}

    /// Meshes the renderer should upload. Empty until the surface exists.
    fn meshes(&self) -> Vec<(MeshId, MeshUpload<'_>)> {
        Vec::new()
    }
}

/// Selects which demo a host runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoKind {
    /// Clears the screen and nothing else.
    Empty,
    /// 3D air hockey table with a draggable mallet and a sliding puck.
    #[default]
    AirHockeyTouch,
}

/// Build the demo selected by `kind`.
pub fn create_demo(kind: DemoKind, config: &HockeyConfig) -> Box<dyn Demo> {
    match kind {
        DemoKind::Empty => Box::new(EmptyDemo),
        DemoKind::AirHockeyTouch => Box::new(AirHockeyTouch::new(config.clone())),
    }
}

/// Draws nothing.
pub struct EmptyDemo;

impl Demo for EmptyDemo {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn on_surface_created(&mut self) {}

    fn on_surface_changed(&mut self, _width: u32, _height: u32) {}

    fn on_draw_frame(&mut self, frame: &mut Frame) {
        frame.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_by_kind() {
        let config = HockeyConfig::default();
        assert_eq!(create_demo(DemoKind::Empty, &config).name(), "empty");
        assert_eq!(create_demo(DemoKind::AirHockeyTouch, &config).name(), "air_hockey_touch");
    }

    #[test]
    fn empty_demo_draws_nothing() {
        let mut demo = EmptyDemo;
        let mut frame = Frame::new();
        demo.on_surface_created();
        demo.on_draw_frame(&mut frame);
        assert_eq!(frame.item_count(), 0);
        assert!(demo.meshes().is_empty());
    }
}
