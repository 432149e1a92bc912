/*!
# Ocean3D Demo

Animated water plane rendered with the WebGL backend, viewed through an
orbit camera (drag to rotate, wheel to zoom).

Build with `wasm-pack build ocean3d_demo --target web --out-dir www/pkg`
and serve `ocean3d_demo/www/`.
*/

mod water_plane;

pub use water_plane::WaterPlane;

use std::cell::RefCell;
use std::f32::consts::PI;
use std::rc::Rc;

use ocean_3d_engine::ocean3d::{Engine, Error, Result};
use ocean_3d_engine::ocean3d::camera::{Camera, OrbitController, PIXELS_PER_LINE};
use ocean_3d_engine::ocean3d::math::{Matrix, Vector};
use ocean_3d_engine::ocean3d::render::{
    ClearFlags, Config, GraphicsDevice, IndexBuffer, Mesh, MeshDesc, Primitive, Shader, Texture,
    VertexBuffer,
};
use ocean_3d_engine::{engine_error, engine_info};
use ocean_3d_engine_renderer_webgl::{
    AnimationLoop, ConsoleLogger, HtmlImageLoader, HtmlShaderSource, WebGlDevice,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, WheelEvent};

const CANVAS_ID: &str = "ocean";
const VERTEX_SHADER_ID: &str = "water-vertex-shader";
const FRAGMENT_SHADER_ID: &str = "water-fragment-shader";
const WATER_TEXTURE_URL: &str = "textures/water.png";

const PLANE_SIZE: f32 = 80.0;
const PLANE_DIVISIONS: u32 = 128;
const FIELD_OF_VIEW: f32 = PI / 4.0;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    Engine::set_logger(ConsoleLogger);

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            engine_error!("ocean3d::demo", "Demo failed: {}", e);
        }
    });
}

async fn run() -> Result<()> {
    let canvas = find_canvas()?;
    canvas.set_width(canvas.client_width().max(1) as u32);
    canvas.set_height(canvas.client_height().max(1) as u32);

    let config = Config::default();
    let mut device = WebGlDevice::from_canvas(&canvas, &config)?;

    let shader = Shader::from_ids(
        &mut device,
        &HtmlShaderSource::from_window()?,
        VERTEX_SHADER_ID,
        FRAGMENT_SHADER_ID,
    )?;
    let water = Texture::from_url(&mut device, &HtmlImageLoader::from_window()?, WATER_TEXTURE_URL).await?;

    let plane = WaterPlane::generate(PLANE_SIZE, PLANE_DIVISIONS);
    let positions = VertexBuffer::new(&mut device, &plane.positions, 3)?;
    let uvs = VertexBuffer::new(&mut device, &plane.uvs, 2)?;
    let indices = IndexBuffer::new(&mut device, &plane.indices)?;

    let camera = Rc::new(RefCell::new(Camera::new(Vector::ZERO, 30.0, 0.3 * PI, 0.25 * PI)));
    let mut mesh = Mesh::indexed(
        indices,
        MeshDesc::new(&shader)
            .uniform("u_projection", Matrix::IDENTITY)
            .uniform("u_view", camera.borrow().matrix())
            .uniform("u_time", 0.0f32)
            .uniform("u_eye", camera.borrow().position())
            .attribute("a_position", positions)
            .attribute("a_uv", uvs)
            .texture("u_water", water)
            .primitive(Primitive::Triangles),
    )?;

    install_input(&canvas, camera.clone())?;

    engine_info!(
        "ocean3d::demo",
        "Water plane ready: {} vertices, {} indices",
        plane.vertex_count(),
        plane.indices.len()
    );

    let clear_color = device.clear_color();
    AnimationLoop::start(move |seconds| {
        let camera = camera.borrow();
        let frame = render_frame(&mut device, &canvas, &mut mesh, &camera, seconds as f32, clear_color);
        match frame {
            Ok(()) => true,
            Err(e) => {
                engine_error!("ocean3d::demo", "Frame failed: {}", e);
                false
            }
        }
    })
}

fn render_frame(
    device: &mut dyn GraphicsDevice,
    canvas: &HtmlCanvasElement,
    mesh: &mut Mesh,
    camera: &Camera,
    seconds: f32,
    clear_color: [f32; 4],
) -> Result<()> {
    let (width, height) = (canvas.width(), canvas.height());
    let projection = Matrix::IDENTITY.perspective(
        FIELD_OF_VIEW,
        width as f32 / height.max(1) as f32,
        0.1,
        500.0,
    );

    mesh.set_uniform("u_projection", projection)?;
    mesh.set_uniform("u_view", camera.matrix())?;
    mesh.set_uniform("u_time", seconds)?;
    mesh.set_uniform("u_eye", camera.position())?;

    device.set_viewport(width, height);
    device.clear(ClearFlags::COLOR | ClearFlags::DEPTH, clear_color);
    mesh.prepare(device)?;
    mesh.draw(device)
}

fn find_canvas() -> Result<HtmlCanvasElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CANVAS_ID))
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| Error::InitializationFailed(format!("no <canvas id=\"{}\">", CANVAS_ID)))
}

// ===== INPUT =====

/// Mouse drag rotates the camera, the wheel zooms it
fn install_input(canvas: &HtmlCanvasElement, camera: Rc<RefCell<Camera>>) -> Result<()> {
    let controller = Rc::new(RefCell::new(OrbitController::new()));

    let on_down = {
        let controller = controller.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if event.button() == 0 {
                controller
                    .borrow_mut()
                    .begin_drag(event.client_x() as f32, event.client_y() as f32);
            }
        })
    };
    let on_up = {
        let controller = controller.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if event.button() == 0 {
                controller.borrow_mut().end_drag();
            }
        })
    };
    let on_move = {
        let controller = controller.clone();
        let camera = camera.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            controller.borrow_mut().drag_to(
                &mut camera.borrow_mut(),
                event.client_x() as f32,
                event.client_y() as f32,
            );
        })
    };
    let on_wheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
        event.prevent_default();
        // DOM wheel deltas grow downward, lines zoom in when positive
        let lines = match event.delta_mode() {
            WheelEvent::DOM_DELTA_LINE => -event.delta_y() as f32,
            _ => -event.delta_y() as f32 / PIXELS_PER_LINE,
        };
        controller.borrow_mut().scroll(&mut camera.borrow_mut(), lines);
    });

    listen(canvas, "mousedown", on_down.as_ref())?;
    listen(canvas, "mouseup", on_up.as_ref())?;
    listen(canvas, "mousemove", on_move.as_ref())?;
    listen(canvas, "wheel", on_wheel.as_ref())?;

    // handlers live as long as the page
    on_down.forget();
    on_up.forget();
    on_move.forget();
    on_wheel.forget();
    Ok(())
}

fn listen(canvas: &HtmlCanvasElement, event: &str, handler: &JsValue) -> Result<()> {
    canvas
        .add_event_listener_with_callback(event, handler.unchecked_ref())
        .map_err(|e| Error::InitializationFailed(format!("addEventListener({}) failed: {:?}", event, e)))
}
