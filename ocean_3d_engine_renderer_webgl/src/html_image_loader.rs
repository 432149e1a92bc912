/// HtmlImageLoader - decode images through `<img>` and a 2D canvas

use ocean_3d_engine::ocean3d::{Error, Result};
use ocean_3d_engine::ocean3d::render::{Image, ImageLoader};
use ocean_3d_engine::engine_debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

/// Image loader backed by the browser's image decoder
///
/// The image is fetched with `crossOrigin = "anonymous"` so its pixels can
/// be read back from a canvas.
#[derive(Debug, Clone)]
pub struct HtmlImageLoader {
    document: Document,
}

impl HtmlImageLoader {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::InitializationFailed("no window document".to_string()))?;
        Ok(Self::new(document))
    }

    /// Resolves once the `<img>` fires `load`, rejects on `error`
    async fn fetch(&self, url: &str) -> std::result::Result<HtmlImageElement, JsValue> {
        let image = HtmlImageElement::new()?;

        let pending = image.clone();
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            pending.set_onload(Some(&resolve));
            pending.set_onerror(Some(&reject));
        });

        image.set_cross_origin(Some("anonymous"));
        image.set_src(url);
        JsFuture::from(promise).await?;

        image.set_onload(None);
        image.set_onerror(None);
        Ok(image)
    }

    fn read_pixels(&self, image: &HtmlImageElement) -> std::result::Result<(u32, u32, Vec<u8>), JsValue> {
        let width = image.natural_width();
        let height = image.natural_height();

        let canvas: HtmlCanvasElement = self.document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(width);
        canvas.set_height(height);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        context.draw_image_with_html_image_element(image, 0.0, 0.0)?;

        let data = context.get_image_data(0.0, 0.0, width as f64, height as f64)?;
        Ok((width, height, data.data().0))
    }
}

impl ImageLoader for HtmlImageLoader {
    async fn load(&self, url: &str) -> Result<Image> {
        let to_error = |e: JsValue| Error::ImageLoad {
            url: url.to_string(),
            reason: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
        };

        let image = self.fetch(url).await.map_err(to_error)?;
        let (width, height, pixels) = self.read_pixels(&image).map_err(to_error)?;

        engine_debug!("ocean3d::webgl", "Loaded image '{}' ({}x{})", url, width, height);
        Image::new(width, height, pixels)
    }
}
