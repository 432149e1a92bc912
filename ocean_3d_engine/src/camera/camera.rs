/// Camera - orbit camera looking at a focus point.
///
/// The eye position is kept in spherical coordinates around `focus`:
/// `radius`, `zenith` (angle from the +Z axis) and `azimuth` (angle around
/// +Z, measured from +X). World space is z-up.
///
/// `zoom` and `rotate` clamp silently; the constructor stores its arguments
/// as given.

use std::f32::consts::{FRAC_PI_2, PI};
use crate::math::{Matrix, Vector};

/// Closest allowed distance to the focus.
pub const MIN_RADIUS: f32 = 5.0;
/// Farthest allowed distance to the focus.
pub const MAX_RADIUS: f32 = 50.0;
/// Lowest zenith angle (keeps the camera away from the pole).
pub const MIN_ZENITH: f32 = 0.1 * PI;
/// Highest zenith angle (keeps the camera above the horizon).
pub const MAX_ZENITH: f32 = 0.45 * PI;
/// Radians per unit of rotate delta.
pub const ROTATE_SPEED: f32 = 0.01;
/// sqrt(radius) units per unit of zoom delta.
pub const ZOOM_SPEED: f32 = 0.33;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub focus: Vector,
    pub radius: f32,
    pub zenith: f32,
    pub azimuth: f32,
}

impl Camera {
    pub fn new(focus: Vector, radius: f32, zenith: f32, azimuth: f32) -> Self {
        Self { focus, radius, zenith, azimuth }
    }

    /// Move the camera in (positive delta) or out (negative delta).
    ///
    /// The step is taken on `sqrt(radius)`, so the response is quadratic:
    /// far away the camera moves faster than close up.
    pub fn zoom(&mut self, delta: f32) {
        let r = (self.radius.sqrt() - ZOOM_SPEED * delta).powi(2);
        self.radius = r.clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Orbit around the focus. `dx` turns the azimuth (unbounded), `dy`
    /// tilts the zenith within [MIN_ZENITH, MAX_ZENITH].
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let z = self.zenith - ROTATE_SPEED * dy;
        self.zenith = z.clamp(MIN_ZENITH, MAX_ZENITH);
        self.azimuth -= ROTATE_SPEED * dx;
    }

    /// Eye position in world space.
    pub fn position(&self) -> Vector {
        let (sin_zenith, cos_zenith) = self.zenith.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        Vector::new(
            self.radius * cos_azimuth * sin_zenith,
            self.radius * sin_azimuth * sin_zenith,
            self.radius * cos_zenith,
        ) + self.focus
    }

    /// View matrix for the current configuration.
    ///
    /// The side axis is derived from the azimuth rather than from a cross
    /// product, so it stays horizontal for every zenith.
    pub fn matrix(&self) -> Matrix {
        let eye = self.position();
        let f = self.focus.subtract(eye).normal();

        let side_angle = self.azimuth + FRAC_PI_2;
        let s = Vector::new(side_angle.cos(), side_angle.sin(), 0.0);
        let u = s.cross(f);

        Matrix::new([
            s.x,  s.y,  s.z,  0.0,
            u.x,  u.y,  u.z,  0.0,
            -f.x, -f.y, -f.z, 0.0,
            0.0,  0.0,  0.0,  1.0,
        ])
        .translate(-eye.x, -eye.y, -eye.z)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
