/// Renderer module - GPU resource wrappers over the GraphicsDevice trait

// Module declarations
pub mod graphics_device;
pub mod buffer;
pub mod shader;
pub mod texture;
pub mod mesh;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use buffer::*;
pub use shader::*;
pub use texture::*;
pub use mesh::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
