use std::f32::consts::FRAC_PI_4;
use winit::dpi::PhysicalPosition;
use winit::event::{DeviceId, TouchPhase};
use crate::math::Vector;
use super::*;

fn create_test_camera() -> Camera {
    Camera::new(Vector::ZERO, 20.0, FRAC_PI_4, 0.0)
}

fn device_id() -> DeviceId {
    // SAFETY: only used to build synthetic events, never passed back to winit
    unsafe { DeviceId::dummy() }
}

fn mouse_button(state: ElementState) -> WindowEvent {
    WindowEvent::MouseInput { device_id: device_id(), state, button: MouseButton::Left }
}

fn cursor_moved(x: f64, y: f64) -> WindowEvent {
    WindowEvent::CursorMoved { device_id: device_id(), position: PhysicalPosition::new(x, y) }
}

fn wheel(delta: MouseScrollDelta) -> WindowEvent {
    WindowEvent::MouseWheel { device_id: device_id(), delta, phase: TouchPhase::Moved }
}

// ============================================================================
// Raw input
// ============================================================================

#[test]
fn test_drag_rotates_by_pixel_delta() {
    let mut camera = create_test_camera();
    let mut controller = OrbitController::new();

    controller.begin_drag(100.0, 100.0);
    controller.drag_to(&mut camera, 110.0, 105.0);

    let mut expected = create_test_camera();
    expected.rotate(10.0, 5.0);
    assert_eq!(camera, expected);
}

#[test]
fn test_move_without_drag_does_not_rotate() {
    let mut camera = create_test_camera();
    let mut controller = OrbitController::new();

    controller.drag_to(&mut camera, 50.0, 50.0);
    assert_eq!(camera, create_test_camera());

    // the position is still tracked, so a later drag starts from here
    controller.begin_drag(50.0, 50.0);
    controller.end_drag();
    controller.drag_to(&mut camera, 80.0, 80.0);
    assert_eq!(camera, create_test_camera());
    assert!(!controller.is_dragging());
}

#[test]
fn test_scroll_zooms() {
    let mut camera = create_test_camera();
    let mut controller = OrbitController::new();

    controller.scroll(&mut camera, 1.0);
    assert!(camera.radius < 20.0);
}

// ============================================================================
// winit events
// ============================================================================

#[test]
fn test_window_events_drive_drag() {
    let mut camera = create_test_camera();
    let mut controller = OrbitController::new();

    assert!(!controller.handle_window_event(&mut camera, &cursor_moved(10.0, 10.0)));
    assert!(controller.handle_window_event(&mut camera, &mouse_button(ElementState::Pressed)));
    assert!(controller.is_dragging());
    assert!(controller.handle_window_event(&mut camera, &cursor_moved(30.0, 10.0)));

    let mut expected = create_test_camera();
    expected.rotate(20.0, 0.0);
    assert_eq!(camera, expected);

    assert!(controller.handle_window_event(&mut camera, &mouse_button(ElementState::Released)));
    assert!(!controller.is_dragging());
}

#[test]
fn test_wheel_line_and_pixel_deltas_agree() {
    let mut by_lines = create_test_camera();
    let mut by_pixels = create_test_camera();
    let mut controller = OrbitController::new();

    controller.handle_window_event(&mut by_lines, &wheel(MouseScrollDelta::LineDelta(0.0, 2.0)));
    controller.handle_window_event(
        &mut by_pixels,
        &wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 2.0 * PIXELS_PER_LINE as f64))),
    );

    assert!(by_lines.radius < 20.0);
    assert!((by_lines.radius - by_pixels.radius).abs() < 1e-5);
}

#[test]
fn test_other_events_are_ignored() {
    let mut camera = create_test_camera();
    let mut controller = OrbitController::new();

    assert!(!controller.handle_window_event(&mut camera, &WindowEvent::Focused(true)));
    assert_eq!(camera, create_test_camera());
}
