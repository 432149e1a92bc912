/// AnimationLoop - `requestAnimationFrame` driver

use std::cell::RefCell;
use std::rc::Rc;

use ocean_3d_engine::ocean3d::{Error, Result};
use ocean_3d_engine::{engine_debug, engine_error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Calls a frame callback once per display refresh
pub struct AnimationLoop;

impl AnimationLoop {
    /// Schedule `frame` on every animation frame until it returns `false`
    ///
    /// The callback receives the frame timestamp in seconds.
    pub fn start<F>(mut frame: F) -> Result<()>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        // The closure reschedules itself, so it has to own a handle to itself
        let handle: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
        let next = handle.clone();

        *handle.borrow_mut() = Some(Closure::new(move |timestamp_ms: f64| {
            if !frame(timestamp_ms / 1000.0) {
                engine_debug!("ocean3d::webgl", "Animation loop stopped");
                // drops the closure once this call returns
                let _ = next.borrow_mut().take();
                return;
            }
            if let Some(closure) = next.borrow().as_ref() {
                if let Err(e) = request_animation_frame(closure) {
                    engine_error!("ocean3d::webgl", "Animation loop aborted: {}", e);
                }
            }
        }));

        let first = handle.borrow();
        let closure = first
            .as_ref()
            .ok_or_else(|| Error::InitializationFailed("animation closure missing".to_string()))?;
        request_animation_frame(closure)
    }
}

fn request_animation_frame(closure: &FrameClosure) -> Result<()> {
    let window = web_sys::window()
        .ok_or_else(|| Error::InitializationFailed("no window".to_string()))?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| Error::BackendError(format!("requestAnimationFrame failed: {:?}", e)))?;
    Ok(())
}
