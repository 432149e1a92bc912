/// Texture - mipmapped 2D texture uploaded from an RGBA8 image
///
/// GL samples with (0, 0) at the bottom left, images are stored top row
/// first, so pixels are flipped vertically before upload.

use crate::error::{Error, Result};
use crate::{engine_debug, engine_warn};
use super::graphics_device::{Filter, GraphicsDevice, TextureKey, Wrap};

// ============================================================================
// Image
// ============================================================================

/// Decoded RGBA8 image, top row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Fails with `InvalidImage` unless `pixels` holds exactly
    /// `width * height` RGBA8 texels.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::InvalidImage(format!(
                "{}x{} RGBA image needs {} bytes, got {}",
                width, height, expected, pixels.len()
            )));
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Copy of the image with its rows in reverse order
    pub fn flipped_vertically(&self) -> Image {
        let row_len = self.width as usize * 4;
        let pixels = if row_len == 0 {
            Vec::new()
        } else {
            self.pixels.chunks_exact(row_len).rev().flatten().copied().collect()
        };
        Image { width: self.width, height: self.height, pixels }
    }
}

/// Asynchronous image source (browser `<img>`, file system, test fixture...)
#[allow(async_fn_in_trait)]
pub trait ImageLoader {
    /// Fetch and decode `url`; failures are reported as `Error::ImageLoad`
    async fn load(&self, url: &str) -> Result<Image>;
}

// ============================================================================
// TextureParams
// ============================================================================

/// Sampler state applied right after upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    pub mag_filter: Filter,
    pub min_filter: Filter,
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
    pub generate_mipmaps: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            mag_filter: Filter::Linear,
            min_filter: Filter::LinearMipmapLinear,
            wrap_s: Wrap::Repeat,
            wrap_t: Wrap::Repeat,
            generate_mipmaps: true,
        }
    }
}

// ============================================================================
// Texture
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    key: TextureKey,
    width: u32,
    height: u32,
}

impl Texture {
    /// Flip, upload and configure `image`
    pub fn from_image(
        device: &mut dyn GraphicsDevice,
        image: &Image,
        params: &TextureParams,
    ) -> Result<Self> {
        let flipped = image.flipped_vertically();
        let key = device.create_texture(image.width, image.height, flipped.pixels())?;
        device.set_texture_filter(key, params.mag_filter, params.min_filter)?;
        device.set_texture_wrap(key, params.wrap_s, params.wrap_t)?;

        if params.generate_mipmaps {
            // WebGL 1 only builds mip chains for power-of-two sizes
            if !image.width.is_power_of_two() || !image.height.is_power_of_two() {
                engine_warn!(
                    "ocean3d::Texture",
                    "Generating mipmaps for non power-of-two texture {}x{}",
                    image.width, image.height
                );
            }
            device.generate_mipmap(key)?;
        }

        engine_debug!("ocean3d::Texture", "Uploaded texture {}x{}", image.width, image.height);
        Ok(Self { key, width: image.width, height: image.height })
    }

    /// Load `url` with `loader`, then upload it with default sampler state
    ///
    /// The texture handle only exists once the pixels have arrived.
    pub async fn from_url<L: ImageLoader>(
        device: &mut dyn GraphicsDevice,
        loader: &L,
        url: &str,
    ) -> Result<Self> {
        Self::from_url_with_params(device, loader, url, &TextureParams::default()).await
    }

    pub async fn from_url_with_params<L: ImageLoader>(
        device: &mut dyn GraphicsDevice,
        loader: &L,
        url: &str,
        params: &TextureParams,
    ) -> Result<Self> {
        let image = loader.load(url).await?;
        Self::from_image(device, &image, params)
    }

    pub fn key(&self) -> TextureKey {
        self.key
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
