//! Camera module - orbit camera and its pointer input controller.
//!
//! The engine does NOT store or manage cameras. They are owned and driven
//! by the caller, which feeds `Camera::matrix()` into its mesh uniforms.

mod camera;
mod camera_input;

pub use camera::{
    Camera,
    MIN_RADIUS, MAX_RADIUS, MIN_ZENITH, MAX_ZENITH, ROTATE_SPEED, ZOOM_SPEED,
};
pub use camera_input::{OrbitController, PIXELS_PER_LINE};
