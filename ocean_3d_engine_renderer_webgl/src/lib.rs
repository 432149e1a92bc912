/*!
# Ocean 3D Engine - WebGL Backend

WebGL 1 implementation of the Ocean3D engine traits, on top of `web-sys`.

- [`WebGlDevice`]: [`GraphicsDevice`](ocean_3d_engine::ocean3d::GraphicsDevice) over a canvas context
- [`HtmlShaderSource`]: shader sources read from `<script>` elements
- [`HtmlImageLoader`]: asynchronous image loading through `<img>`
- [`ConsoleLogger`]: engine logs in the devtools console
- [`AnimationLoop`]: `requestAnimationFrame` driver

# Example

```no_run
use ocean_3d_engine::ocean3d::Engine;
use ocean_3d_engine::ocean3d::render::{Config, Shader};
use ocean_3d_engine_renderer_webgl::{ConsoleLogger, HtmlShaderSource, WebGlDevice};
# fn run(canvas: web_sys::HtmlCanvasElement) -> ocean_3d_engine::ocean3d::Result<()> {
Engine::set_logger(ConsoleLogger);
let mut device = WebGlDevice::from_canvas(&canvas, &Config::default())?;
let document = HtmlShaderSource::from_window()?;
let shader = Shader::from_ids(&mut device, &document, "water-vertex-shader", "water-fragment-shader")?;
# Ok(())
# }
```
*/

mod webgl_format;
mod webgl_device;
mod html_document;
mod html_image_loader;
mod console_logger;
mod animation_loop;

pub use webgl_device::WebGlDevice;
pub use html_document::HtmlShaderSource;
pub use html_image_loader::HtmlImageLoader;
pub use console_logger::ConsoleLogger;
pub use animation_loop::AnimationLoop;
