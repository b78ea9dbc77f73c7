use crate::api::config::DemoConfig;
use crate::api::demo::{create_demo, Demo};
use crate::input::queue::{InputQueue, TouchAction, TouchEvent};
use crate::renderer::frame::Frame;
use crate::renderer::traits::Renderer;

/// Wires a [`Demo`] to a host's surface callbacks and a [`Renderer`].
///
/// Touch events may arrive at any time; they are queued and replayed into
/// the demo, in order, at the start of the next frame.
pub struct DemoRunner {
    demo: Box<dyn Demo>,
    input: InputQueue,
    frame: Frame,
    created: bool,
}

impl DemoRunner {
    pub fn new(config: &DemoConfig) -> Self {
        Self::with_demo(create_demo(config.kind, &config.hockey))
    }

    pub fn with_demo(demo: Box<dyn Demo>) -> Self {
        Self {
            demo,
            input: InputQueue::new(),
            frame: Frame::new(),
            created: false,
        }
    }

    /// Build the demo's scene and upload its meshes.
    pub fn surface_created(&mut self, renderer: &mut dyn Renderer) {
        log::debug!("{}: surface created", self.demo.name());
        self.demo.on_surface_created();
        for (id, mesh) in self.demo.meshes() {
            renderer.upload_mesh(id, mesh);
        }
        self.created = true;
        log::info!("{}: initialized on {}", self.demo.name(), renderer.backend());
    }

    pub fn surface_changed(&mut self, width: u32, height: u32, renderer: &mut dyn Renderer) {
        log::debug!("{}: surface changed, w:{}, h:{}", self.demo.name(), width, height);
        renderer.resize(width, height);
        self.input.resize(width, height);
        self.demo.on_surface_changed(width, height);
    }

    /// Queue a touch for the next frame.
    pub fn push_touch(&mut self, event: TouchEvent) {
        self.input.push(event);
    }

    /// Queue a raw touch in surface pixels for the next frame. Returns
    /// whether it produced an event.
    pub fn push_surface_touch(&mut self, action: TouchAction, x: f32, y: f32) -> bool {
        self.input.push_pixels(action, x, y)
    }

    /// Replay queued touches, advance the demo, and hand the frame to `renderer`.
    pub fn draw_frame(&mut self, renderer: &mut dyn Renderer) {
        if !self.created {
            return;
        }

        for event in self.input.drain() {
            match event {
                TouchEvent::Press { normal_x, normal_y } => {
                    log::debug!("touch press, x:{}, y:{}", normal_x, normal_y);
                    self.demo.handle_touch_press(normal_x, normal_y);
                }
                TouchEvent::Move { normal_x, normal_y } => {
                    self.demo.handle_touch_move(normal_x, normal_y);
                }
            }
        }

        self.frame.clear();
        self.demo.on_draw_frame(&mut self.frame);
        renderer.draw(&self.frame);
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn demo(&self) -> &dyn Demo {
        self.demo.as_ref()
    }

    pub fn pending_touches(&self) -> usize {
        self.input.len()
    }
}
