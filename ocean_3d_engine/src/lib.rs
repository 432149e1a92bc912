/*!
# Ocean 3D Engine

Core math, camera and GPU resource wrappers for the Ocean3D water demo.

This crate is platform-agnostic: every GPU call goes through the
[`GraphicsDevice`](renderer::GraphicsDevice) trait, and the browser-side
collaborators (shader source lookup, image loading) are traits as well.
Backend implementations (WebGL, ...) live in their own plugin crates.

## Architecture

- **Vector / Matrix**: 3-component vector and 4x4 column-major matrix
- **Camera**: orbit camera around a focus point, plus an input controller
- **GraphicsDevice**: graphics API trait (buffers, programs, textures, draws)
- **VertexBuffer / IndexBuffer**: typed GPU buffers
- **Shader**: linked program with name-to-location maps
- **Texture**: mipmapped 2D texture uploaded from an [`Image`](renderer::Image)
- **Mesh**: everything needed for one draw call (arrays or indexed)
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod camera;
pub mod renderer;

// Main ocean3d namespace module
pub mod ocean3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logging)
    pub use crate::engine::Engine;

    // Graphics device trait
    pub use crate::renderer::GraphicsDevice;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }
}

// Re-export math library at crate root
pub use glam;
