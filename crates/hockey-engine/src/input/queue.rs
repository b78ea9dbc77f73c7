/// A single-finger touch, already converted to normalized device
/// coordinates: x runs -1 (left) to 1 (right), y runs -1 (bottom) to 1 (top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// A finger went down.
    Press { normal_x: f32, normal_y: f32 },
    /// A finger moved while down.
    Move { normal_x: f32, normal_y: f32 },
}

impl TouchEvent {
    /// Convert a touch in surface pixels (origin top-left, y down) to NDC.
    pub fn normalize(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
        let normal_x = x / width * 2.0 - 1.0;
        let normal_y = -(y / height * 2.0 - 1.0);
        (normal_x, normal_y)
    }
}

/// Raw touch action as reported by the host's view, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Move,
    Up,
}

/// Touches waiting for the render loop.
///
/// The host's UI thread reports raw pixel touches; the queue converts them
/// to NDC against the current surface size and keeps them in arrival order
/// until the render loop drains them before drawing a frame. Only one finger
/// is tracked: a move is kept only while that finger is down, and lifting it
/// queues nothing.
pub struct InputQueue {
    events: Vec<TouchEvent>,
    surface: (u32, u32),
    finger_down: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
            surface: (0, 0),
            finger_down: false,
        }
    }

    /// Surface size used to normalize pixel touches.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = (width, height);
    }

    /// Queue an event that is already in NDC.
    pub fn push(&mut self, event: TouchEvent) {
        if matches!(event, TouchEvent::Press { .. }) {
            self.finger_down = true;
        }
        self.events.push(event);
    }

    /// Queue a raw touch at pixel `(x, y)`. Returns whether an event was
    /// queued: nothing is queued before the surface has a size, for a move
    /// with no finger down, or for a lift.
    pub fn push_pixels(&mut self, action: TouchAction, x: f32, y: f32) -> bool {
        let (width, height) = self.surface;
        if width == 0 || height == 0 {
            log::warn!("touch at ({}, {}) before the surface has a size", x, y);
            return false;
        }

        let (normal_x, normal_y) = TouchEvent::normalize(x, y, width as f32, height as f32);
        match action {
            TouchAction::Down => self.push(TouchEvent::Press { normal_x, normal_y }),
            TouchAction::Move if self.finger_down => {
                self.events.push(TouchEvent::Move { normal_x, normal_y })
            }
            TouchAction::Move => return false,
            TouchAction::Up => {
                self.finger_down = false;
                return false;
            }
        }
        true
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<TouchEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_in_order() {
        let mut q = InputQueue::new();
        q.push(TouchEvent::Press { normal_x: 0.1, normal_y: 0.2 });
        q.push(TouchEvent::Move { normal_x: 0.3, normal_y: 0.4 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert!(matches!(events[0], TouchEvent::Press { .. }));
        assert!(matches!(events[1], TouchEvent::Move { .. }));
        assert!(q.is_empty());
    }

    #[test]
    fn normalize_maps_corners() {
        assert_eq!(TouchEvent::normalize(0.0, 0.0, 100.0, 200.0), (-1.0, 1.0));
        assert_eq!(TouchEvent::normalize(100.0, 200.0, 100.0, 200.0), (1.0, -1.0));
        assert_eq!(TouchEvent::normalize(50.0, 100.0, 100.0, 200.0), (0.0, 0.0));
    }

    #[test]
    fn pixel_touches_need_a_surface() {
        let mut q = InputQueue::new();
        assert!(!q.push_pixels(TouchAction::Down, 10.0, 10.0));
        assert!(q.is_empty());

        q.resize(100, 200);
        assert!(q.push_pixels(TouchAction::Down, 0.0, 200.0));
        assert_eq!(q.drain(), vec![TouchEvent::Press { normal_x: -1.0, normal_y: -1.0 }]);
    }

    #[test]
    fn moves_only_count_while_the_finger_is_down() {
        let mut q = InputQueue::new();
        q.resize(100, 200);
        assert!(!q.push_pixels(TouchAction::Move, 50.0, 100.0));

        assert!(q.push_pixels(TouchAction::Down, 50.0, 100.0));
        assert!(q.push_pixels(TouchAction::Move, 100.0, 0.0));
        assert!(!q.push_pixels(TouchAction::Up, 100.0, 0.0));
        assert!(!q.push_pixels(TouchAction::Move, 0.0, 0.0));

        assert_eq!(
            q.drain(),
            vec![
                TouchEvent::Press { normal_x: 0.0, normal_y: 0.0 },
                TouchEvent::Move { normal_x: 1.0, normal_y: 1.0 },
            ]
        );
    }
}
