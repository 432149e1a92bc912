use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use glam::{Mat4, Vec3};
use super::*;

const EPSILON: f32 = 1e-4;

fn create_test_camera() -> Camera {
    Camera::new(Vector::ZERO, 20.0, FRAC_PI_4, 0.0)
}

fn assert_near(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < EPSILON, "expected {}, got {}", expected, actual);
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_new_stores_arguments_unclamped() {
    let camera = Camera::new(Vector::new(1.0, 2.0, 3.0), 500.0, 0.0, -7.0);

    assert_eq!(camera.focus, Vector::new(1.0, 2.0, 3.0));
    assert_eq!(camera.radius, 500.0);
    assert_eq!(camera.zenith, 0.0);
    assert_eq!(camera.azimuth, -7.0);
}

// ============================================================================
// Zoom
// ============================================================================

#[test]
fn test_zoom_is_quadratic() {
    let mut camera = Camera::new(Vector::ZERO, 16.0, FRAC_PI_4, 0.0);
    camera.zoom(1.0);
    assert_near(camera.radius, (4.0 - ZOOM_SPEED).powi(2));
}

#[test]
fn test_zoom_in_decreases_until_min_radius() {
    let mut camera = create_test_camera();
    let mut previous = camera.radius;

    for _ in 0..100 {
        camera.zoom(1.0);
        assert!(camera.radius <= previous);
        previous = camera.radius;
    }
    assert_eq!(camera.radius, MIN_RADIUS);
}

#[test]
fn test_zoom_out_increases_until_max_radius() {
    let mut camera = create_test_camera();
    let mut previous = camera.radius;

    for _ in 0..100 {
        camera.zoom(-1.0);
        assert!(camera.radius >= previous);
        previous = camera.radius;
    }
    assert_eq!(camera.radius, MAX_RADIUS);
}

#[test]
fn test_zoom_clamps_an_out_of_range_radius() {
    let mut camera = Camera::new(Vector::ZERO, 400.0, FRAC_PI_4, 0.0);
    camera.zoom(0.0);
    assert_eq!(camera.radius, MAX_RADIUS);
}

// ============================================================================
// Rotate
// ============================================================================

#[test]
fn test_rotate_moves_both_angles() {
    let mut camera = create_test_camera();
    camera.rotate(10.0, 5.0);

    assert_near(camera.azimuth, -0.1);
    assert_near(camera.zenith, FRAC_PI_4 - 0.05);
}

#[test]
fn test_rotate_keeps_zenith_in_range() {
    let mut camera = create_test_camera();

    for dy in [500.0, -10_000.0, 3.0, 10_000.0, -1.0, f32::MAX / 2.0] {
        camera.rotate(0.0, dy);
        assert!(
            (MIN_ZENITH..=MAX_ZENITH).contains(&camera.zenith),
            "zenith {} escaped after dy = {}",
            camera.zenith,
            dy
        );
    }
}

#[test]
fn test_rotate_azimuth_is_unbounded() {
    let mut camera = create_test_camera();
    for _ in 0..10 {
        camera.rotate(-1000.0, 0.0);
    }
    assert_near(camera.azimuth, 100.0);
}

// ============================================================================
// Position / matrix
// ============================================================================

#[test]
fn test_position_on_horizon() {
    let camera = Camera::new(Vector::ZERO, 10.0, FRAC_PI_2, 0.0);
    let p = camera.position();

    assert_near(p.x, 10.0);
    assert_near(p.y, 0.0);
    assert_near(p.z, 0.0);
}

#[test]
fn test_position_is_offset_by_focus() {
    let focus = Vector::new(1.0, -2.0, 0.5);
    let camera = Camera::new(focus, 10.0, PI / 3.0, 1.2);
    let relative = camera.position().subtract(focus);

    assert_near(relative.length(), 10.0);
    assert_near(relative.z, 10.0 * (PI / 3.0).cos());
}

#[test]
fn test_matrix_maps_focus_onto_view_axis() {
    let camera = Camera::new(Vector::new(3.0, 1.0, 0.0), 12.0, 0.3 * PI, 2.0);
    let focus_in_view = camera.matrix().transform_point(camera.focus);

    assert_near(focus_in_view.x, 0.0);
    assert_near(focus_in_view.y, 0.0);
    assert_near(focus_in_view.z, -12.0);
}

#[test]
fn test_matrix_matches_z_up_look_at() {
    let camera = Camera::new(Vector::new(-1.0, 2.0, 0.0), 15.0, 0.2 * PI, 0.75);
    let eye: Vec3 = camera.position().into();

    let expected = Mat4::look_at_rh(eye, camera.focus.into(), Vec3::Z);
    let actual: Mat4 = camera.matrix().into();

    assert!(
        actual.abs_diff_eq(expected, EPSILON),
        "camera matrix {:?} differs from look_at {:?}",
        actual,
        expected
    );
}
