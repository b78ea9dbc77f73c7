use glam::Vec4;
use hockey_engine::*;

#[derive(Default)]
struct RecordingRenderer {
    uploads: Vec<(MeshId, usize)>,
    frames: Vec<Vec<DrawItem>>,
    size: (u32, u32),
}

impl Renderer for RecordingRenderer {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn upload_mesh(&mut self, id: MeshId, mesh: MeshUpload<'_>) {
        let vertices = mesh.draw_list().last().map(|c| c.end_vertex() as usize).unwrap_or(0);
        self.uploads.push((id, vertices));
    }

    fn draw(&mut self, frame: &Frame) {
        self.frames.push(frame.items.clone());
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }
}

fn touch_at(camera: &Camera3D, p: Point3) -> (f32, f32) {
    let clip = camera.view_projection() * Vec4::new(p.x, p.y, p.z, 1.0);
    (clip.x / clip.w, clip.y / clip.w)
}

fn puck_world_position(item: &DrawItem, camera: &Camera3D) -> Point3 {
    // Recover the model translation: inverse(VP) * MVP column 3.
    let mvp = glam::Mat4::from_cols_array_2d(&item.model_view_projection.matrix);
    let model = camera.view_projection().inverse() * mvp;
    Point3::from(model.w_axis.truncate())
}

#[test]
fn drag_through_puck_and_let_it_slide() {
    let config = DemoConfig::default();
    let mut renderer = RecordingRenderer::default();
    let mut runner = DemoRunner::new(&config);

    runner.surface_created(&mut renderer);
    runner.surface_changed(720, 1280, &mut renderer);
    assert_eq!(renderer.size, (720, 1280));

    let n = config.hockey.points_around;
    let mallet_vertices = 2 * size_of_circle_in_vertices(n) + 2 * size_of_open_cylinder_in_vertices(n);
    let puck_vertices = size_of_circle_in_vertices(n) + size_of_open_cylinder_in_vertices(n);
    assert_eq!(
        renderer.uploads,
        vec![(MeshId::Table, 6), (MeshId::Mallet, mallet_vertices), (MeshId::Puck, puck_vertices)]
    );

    let mut camera = Camera3D::new(config.hockey.camera);
    camera.resize(720, 1280);

    let (x, y) = touch_at(&camera, Point3::new(0.0, 0.06, 0.4));
    runner.push_touch(TouchEvent::Press { normal_x: x, normal_y: y });
    let (x, y) = touch_at(&camera, Point3::new(0.0, 0.0, 0.15));
    runner.push_touch(TouchEvent::Move { normal_x: x, normal_y: y });
    runner.draw_frame(&mut renderer);

    let b = config.hockey.bounds;
    let r = config.hockey.puck.radius;
    let mut min_z = f32::MAX;
    for _ in 0..300 {
        runner.draw_frame(&mut renderer);
        let items = renderer.frames.last().unwrap();
        assert_eq!(items.len(), 4);
        let puck = puck_world_position(&items[3], &camera);
        assert!(puck.x >= b.left + r - 1e-3 && puck.x <= b.right - r + 1e-3);
        assert!(puck.z >= b.far + r - 1e-3 && puck.z <= b.near - r + 1e-3);
        min_z = min_z.min(puck.z);
    }

    // The puck was knocked toward the far wall and bounced off it.
    assert!((min_z - (b.far + r)).abs() < 1e-3, "min_z={}", min_z);
}

#[test]
fn empty_demo_from_json() {
    let config = DemoConfig::from_json(r#"{ "kind": "empty" }"#).unwrap();
    let mut renderer = RecordingRenderer::default();
    let mut runner = DemoRunner::new(&config);
    runner.surface_created(&mut renderer);
    runner.draw_frame(&mut renderer);
    assert!(renderer.uploads.is_empty());
    assert_eq!(renderer.frames, vec![Vec::new()]);
}
