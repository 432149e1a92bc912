/// Pointer input for the orbit camera.
///
/// Dragging with the primary button rotates the camera by the pointer's
/// pixel delta; the wheel zooms. Events come either from winit
/// (`handle_window_event`) or from any other source through the raw
/// `begin_drag` / `drag_to` / `end_drag` / `scroll` calls.

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use super::camera::Camera;

/// Pixels of a `PixelDelta` wheel event counted as one line of scroll.
pub const PIXELS_PER_LINE: f32 = 100.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitController {
    dragging: bool,
    last_x: f32,
    last_y: f32,
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_x = x;
        self.last_y = y;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Record the pointer position; rotates the camera only while dragging.
    pub fn drag_to(&mut self, camera: &mut Camera, x: f32, y: f32) {
        let (dx, dy) = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;

        if self.dragging {
            camera.rotate(dx, dy);
        }
    }

    /// Zoom by wheel lines (positive scrolls towards the focus).
    pub fn scroll(&mut self, camera: &mut Camera, lines: f32) {
        camera.zoom(lines);
    }

    /// Returns true if the event was consumed by the camera
    pub fn handle_window_event(&mut self, camera: &mut Camera, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                match state {
                    ElementState::Pressed => self.begin_drag(self.last_x, self.last_y),
                    ElementState::Released => self.end_drag(),
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.drag_to(camera, position.x as f32, position.y as f32);
                self.dragging
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.scroll(camera, lines);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "camera_input_tests.rs"]
mod tests;
