//! Air hockey with touch: drag the blue mallet on your half of the table to
//! knock the puck around. The red mallet is scenery.

use crate::api::config::HockeyConfig;
use crate::api::demo::Demo;
use crate::core::puck::PuckSimulation;
use crate::geometry::{intersection_point, intersects, Plane, Point3, Sphere, Vector3};
use crate::mesh::{Mallet, Puck};
use crate::renderer::camera::Camera3D;
use crate::renderer::frame::{Frame, MeshId, Shading};
use crate::renderer::traits::MeshUpload;

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const PUCK_COLOR: [f32; 3] = [0.8, 0.8, 1.0];

/// Scene state that only exists once the surface does.
struct Scene {
    camera: Camera3D,
    mallet: Mallet,
    puck: Puck,
    simulation: PuckSimulation,
    mallet_pressed: bool,
}

pub struct AirHockeyTouch {
    config: HockeyConfig,
    scene: Option<Scene>,
}

impl AirHockeyTouch {
    pub fn new(config: HockeyConfig) -> Self {
        Self { config, scene: None }
    }

    pub fn simulation(&self) -> Option<&PuckSimulation> {
        self.scene.as_ref().map(|s| &s.simulation)
    }

    pub fn camera(&self) -> Option<&Camera3D> {
        self.scene.as_ref().map(|s| &s.camera)
    }

    pub fn is_mallet_pressed(&self) -> bool {
        self.scene.as_ref().is_some_and(|s| s.mallet_pressed)
    }
}

impl Demo for AirHockeyTouch {
    fn name(&self) -> &'static str {
        "air_hockey_touch"
    }

    fn on_surface_created(&mut self) {
        let c = &self.config;
        let mallet = Mallet::new(c.mallet.radius, c.mallet.height, c.points_around);
        let puck = Puck::new(c.puck.radius, c.puck.height, c.points_around);
        log::info!(
            "built mallet ({} vertices) and puck ({} vertices)",
            mallet.mesh().vertex_count(),
            puck.mesh().vertex_count()
        );

        self.scene = Some(Scene {
            camera: Camera3D::new(c.camera),
            mallet,
            puck,
            simulation: PuckSimulation::new(c),
            mallet_pressed: false,
        });
    }

    fn on_surface_changed(&mut self, width: u32, height: u32) {
        if let Some(scene) = &mut self.scene {
            scene.camera.resize(width, height);
        }
    }

    fn on_draw_frame(&mut self, frame: &mut Frame) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        scene.simulation.tick();

        // The opponent's mallet never moves.
        let red = Point3::new(0.0, scene.mallet.height() / 2.0, -0.4);
        let blue = scene.simulation.mallet_position();
        let puck = scene.simulation.puck_position();
        let camera = &scene.camera;

        frame.push(MeshId::Table, camera.table_model_view_projection(), Shading::Textured);
        frame.push(MeshId::Mallet, camera.model_view_projection_at(red), Shading::Color(RED));
        frame.push(MeshId::Mallet, camera.model_view_projection_at(blue), Shading::Color(BLUE));
        frame.push(MeshId::Puck, camera.model_view_projection_at(puck), Shading::Color(PUCK_COLOR));
    }

    fn handle_touch_press(&mut self, normal_x: f32, normal_y: f32) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        let Some(ray) = scene.camera.ray_from_ndc(normal_x, normal_y) else {
            scene.mallet_pressed = false;
            return;
        };

        let bounding_sphere = Sphere::new(
            scene.simulation.mallet_position(),
            scene.mallet.height() / 2.0,
        );
        scene.mallet_pressed = intersects(&bounding_sphere, &ray);
    }

    fn handle_touch_move(&mut self, normal_x: f32, normal_y: f32) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        if !scene.mallet_pressed {
            return;
        }
        let Some(ray) = scene.camera.ray_from_ndc(normal_x, normal_y) else {
            return;
        };

        let table = Plane::new(Point3::ORIGIN, Vector3::new(0.0, 1.0, 0.0));
        match intersection_point(&ray, &table) {
            Some(touched) => {
                scene.simulation.drag_mallet_to(touched);
            }
            None => log::warn!("touch at ({}, {}) never reaches the table", normal_x, normal_y),
        }
    }

    fn meshes(&self) -> Vec<(MeshId, MeshUpload<'_>)> {
        match &self.scene {
            Some(scene) => vec![
                (MeshId::Table, MeshUpload::table()),
                (MeshId::Mallet, MeshUpload::Generated(scene.mallet.mesh())),
                (MeshId::Puck, MeshUpload::Generated(scene.puck.mesh())),
            ],
            None => Vec::new(),
        }
    }
}
