//! Runs the air hockey touch demo with no window or GPU.
//!
//! Grabs the blue mallet, drags it through the puck, then lets the puck
//! slide and logs where it goes. Pass a JSON config path to change the
//! table; `RUST_LOG=debug` shows every lifecycle callback.

use glam::Vec4;
use hockey_engine::{
    Camera3D, DemoConfig, DemoRunner, Frame, MeshId, MeshUpload, Point3, Renderer, TouchEvent,
};

const WIDTH: u32 = 1080;
const HEIGHT: u32 = 1920;
const FRAMES: usize = 180;

/// Counts what a real backend would upload and draw.
#[derive(Default)]
struct HeadlessRenderer {
    vertices_uploaded: usize,
    draw_calls: usize,
}

impl Renderer for HeadlessRenderer {
    fn backend(&self) -> &'static str {
        "headless"
    }

    fn upload_mesh(&mut self, id: MeshId, mesh: MeshUpload<'_>) {
        let count: u32 = mesh.draw_list().iter().map(|c| c.vertex_count).sum();
        log::debug!("upload {:?}: {} vertices", id, count);
        self.vertices_uploaded += count as usize;
    }

    fn draw(&mut self, frame: &Frame) {
        self.draw_calls += frame.item_count();
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport {}x{}", width, height);
    }
}

fn load_config() -> anyhow::Result<DemoConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            Ok(DemoConfig::from_json(&json)?)
        }
        None => Ok(DemoConfig::default()),
    }
}

/// Screen position (NDC) of a world point, as a finger would touch it.
fn touch_at(camera: &Camera3D, p: Point3) -> (f32, f32) {
    let clip = camera.view_projection() * Vec4::new(p.x, p.y, p.z, 1.0);
    (clip.x / clip.w, clip.y / clip.w)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = load_config()?;
    let mut camera = Camera3D::new(config.hockey.camera);
    camera.resize(WIDTH, HEIGHT);

    let mut renderer = HeadlessRenderer::default();
    let mut runner = DemoRunner::new(&config);
    runner.surface_created(&mut renderer);
    runner.surface_changed(WIDTH, HEIGHT, &mut renderer);
    log::info!("uploaded {} vertices", renderer.vertices_uploaded);

    let mallet_y = config.hockey.mallet.height / 2.0;
    let (x, y) = touch_at(&camera, Point3::new(0.0, mallet_y, 0.4));
    runner.push_touch(TouchEvent::Press { normal_x: x, normal_y: y });

    // Swipe from the mallet's start, through the puck, a step per frame.
    for step in 1..=5 {
        let z = 0.4 - 0.05 * step as f32;
        let (x, y) = touch_at(&camera, Point3::new(0.02 * step as f32, 0.0, z));
        runner.push_touch(TouchEvent::Move { normal_x: x, normal_y: y });
        runner.draw_frame(&mut renderer);
    }

    for frame in 0..FRAMES {
        runner.draw_frame(&mut renderer);
        if frame % 30 == 0 {
            if let Some(puck) = runner.frame().items.iter().find(|i| i.mesh == MeshId::Puck) {
                // Last MVP column is the puck center in clip space.
                let c = puck.model_view_projection.matrix[3];
                log::info!("frame {:>3}: puck on screen at ({:.3}, {:.3})", frame, c[0] / c[3], c[1] / c[3]);
            }
        }
    }

    log::info!("{} draw calls over {} frames", renderer.draw_calls, FRAMES + 5);
    Ok(())
}
