//! Error types for the Ocean3D engine
//!
//! Every fallible operation in the engine returns [`Result`]. Nothing is
//! retried: an error aborts the current operation and is expected to bubble
//! up to the application's top-level handler.

use std::fmt;
use crate::renderer::ShaderStage;

/// Result type for Ocean3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ocean3D engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Buffer data length is not a multiple of the component count
    InvalidBufferSize {
        /// Number of elements in the source slice
        len: usize,
        /// Components per vertex
        components: u32,
    },

    /// Vector built from a slice that does not hold exactly 3 values
    InvalidVectorLength(usize),

    /// Matrix built from a slice that does not hold exactly 16 values
    InvalidMatrixLength(usize),

    /// Pixel buffer does not match the declared image size
    InvalidImage(String),

    /// Shader compilation failed (carries the driver's info log)
    ShaderCompile {
        /// Stage that failed to compile
        stage: ShaderStage,
        /// Driver diagnostic
        log: String,
    },

    /// Program link failed (carries the driver's info log)
    ShaderLink(String),

    /// No document element with this id
    ShaderSourceMissing(String),

    /// Document element exists but holds no text
    ShaderSourceEmpty(String),

    /// Uniform name unknown to the shader or the mesh
    UnknownUniform(String),

    /// Attribute name unknown to the shader
    UnknownAttribute(String),

    /// Attribute buffers bound to one mesh hold different element counts
    AttributeCountMismatch {
        /// Attribute whose buffer disagrees
        name: String,
        /// Count established by the first attribute
        expected: u32,
        /// Count of the offending buffer
        found: u32,
    },

    /// Image could not be fetched or decoded
    ImageLoad {
        /// Requested URL
        url: String,
        /// Loader-provided reason
        reason: String,
    },

    /// Backend-specific error (WebGL, ...)
    BackendError(String),

    /// Initialization failed (context creation, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBufferSize { len, components } => write!(
                f,
                "Invalid buffer size: {} elements is not a multiple of {} components",
                len, components
            ),
            Error::InvalidVectorLength(len) => write!(f, "Invalid vector length: {} (expected 3)", len),
            Error::InvalidMatrixLength(len) => write!(f, "Invalid elements length: {} (expected 16)", len),
            Error::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            Error::ShaderCompile { stage, log } => write!(f, "{:?} shader compilation failed: {}", stage, log),
            Error::ShaderLink(log) => write!(f, "Error linking shader: {}", log),
            Error::ShaderSourceMissing(id) => write!(f, "Could not locate script: {}", id),
            Error::ShaderSourceEmpty(id) => write!(f, "Shader is empty: {}", id),
            Error::UnknownUniform(name) => write!(f, "Invalid uniform name: {}", name),
            Error::UnknownAttribute(name) => write!(f, "Invalid attribute name: {}", name),
            Error::AttributeCountMismatch { name, expected, found } => write!(
                f,
                "Attribute buffers are different sizes: '{}' has {} elements, expected {}",
                name, found, expected
            ),
            Error::ImageLoad { url, reason } => write!(f, "Failed to load image '{}': {}", url, reason),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR (with file:line) and build an `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// # use ocean_3d_engine::engine_err;
/// let err = engine_err!("ocean3d::webgl", "createBuffer returned null");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::ocean3d::Error::BackendError(message)
    }};
}

/// Log an ERROR (with file:line) and return `Err(Error::BackendError)`
///
/// # Example
///
/// ```no_run
/// # use ocean_3d_engine::engine_bail;
/// # fn check(ok: bool) -> ocean_3d_engine::ocean3d::Result<()> {
/// if !ok {
///     engine_bail!("ocean3d::webgl", "Unknown texture handle");
/// }
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
