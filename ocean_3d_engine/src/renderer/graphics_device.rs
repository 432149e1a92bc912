/// GraphicsDevice trait - the graphics API seen by the resource wrappers
///
/// One method per GPU primitive the wrappers need (WebGL 1 feature level).
/// GPU objects are owned by the device and referred to by slotmap keys;
/// they live for the whole session, there is no destruction API.

use bitflags::bitflags;
use slotmap::new_key_type;

use crate::error::Result;
use crate::math::{Matrix, Vector};

// ============================================================================
// Handles
// ============================================================================

new_key_type! {
    /// GPU buffer (vertex or index data)
    pub struct BufferKey;
    /// Compiled shader stage
    pub struct ShaderKey;
    /// Linked shader program
    pub struct ProgramKey;
    /// Uniform location inside a linked program
    pub struct UniformKey;
    /// 2D texture
    pub struct TextureKey;
}

// ============================================================================
// Enums
// ============================================================================

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Buffer binding target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    /// Vertex attribute data (ARRAY_BUFFER)
    Array,
    /// Index data (ELEMENT_ARRAY_BUFFER)
    ElementArray,
}

/// Scalar type of the elements stored in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    U8,
    U16,
    U32,
    I8,
    I16,
    I32,
    F32,
}

impl ElementType {
    /// Size of one element in bytes
    pub fn size_in_bytes(self) -> u32 {
        match self {
            ElementType::U8 | ElementType::I8 => 1,
            ElementType::U16 | ElementType::I16 => 2,
            ElementType::U32 | ElementType::I32 | ElementType::F32 => 4,
        }
    }
}

/// Primitive assembly mode for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Primitive {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

/// Texture sampling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl Filter {
    /// Whether this filter samples the mip chain (minification only)
    pub fn uses_mipmaps(self) -> bool {
        !matches!(self, Filter::Nearest | Filter::Linear)
    }
}

/// Texture coordinate wrap mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Repeat,
    ClampToEdge,
    MirroredRepeat,
}

bitflags! {
    /// Buffers reset by `GraphicsDevice::clear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
    }
}

// ============================================================================
// Uniform values
// ============================================================================

/// Value uploaded to a uniform location
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    /// Integers and sampler units
    Int(i32),
    /// Column-major 4x4 matrix
    Mat4(Matrix),
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        UniformValue::Float(v)
    }
}

impl From<i32> for UniformValue {
    fn from(v: i32) -> Self {
        UniformValue::Int(v)
    }
}

impl From<[f32; 2]> for UniformValue {
    fn from(v: [f32; 2]) -> Self {
        UniformValue::Vec2(v)
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(v: [f32; 3]) -> Self {
        UniformValue::Vec3(v)
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(v: [f32; 4]) -> Self {
        UniformValue::Vec4(v)
    }
}

impl From<Vector> for UniformValue {
    fn from(v: Vector) -> Self {
        UniformValue::Vec3(v.to_array())
    }
}

impl From<Matrix> for UniformValue {
    fn from(m: Matrix) -> Self {
        UniformValue::Mat4(m)
    }
}

// ============================================================================
// Program reflection
// ============================================================================

/// Active vertex attribute reported after linking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAttribute {
    pub name: String,
    pub location: u32,
}

/// Active uniform reported after linking
///
/// Array uniforms are reported by the driver with a `[0]` suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveUniform {
    pub name: String,
    pub location: UniformKey,
}

// ============================================================================
// Configuration
// ============================================================================

/// Context creation and default frame state
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Request a multisampled drawing buffer
    pub antialias: bool,
    /// Drawing buffer has an alpha channel
    pub alpha: bool,
    /// Drawing buffer has a depth buffer
    pub depth: bool,
    /// Page compositor treats colors as premultiplied by alpha
    pub premultiplied_alpha: bool,
    /// Keep the drawing buffer between frames
    pub preserve_drawing_buffer: bool,
    /// Enable depth testing once the context exists
    pub depth_test: bool,
    /// Clear color for the frame loop
    pub clear_color: [f32; 4],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            antialias: true,
            alpha: false,
            depth: true,
            premultiplied_alpha: true,
            preserve_drawing_buffer: false,
            depth_test: true,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// Graphics API used by buffers, shaders, textures and meshes
///
/// Implementations: the WebGL plugin crate, and a recording mock in tests.
pub trait GraphicsDevice {
    // ===== BUFFERS =====

    /// Create a buffer on `target` and fill it with `data` (static draw)
    fn create_buffer(&mut self, target: BufferTarget, data: &[u8]) -> Result<BufferKey>;

    /// Bind `buffer` to `target`
    fn bind_buffer(&mut self, target: BufferTarget, buffer: BufferKey) -> Result<()>;

    // ===== SHADERS =====

    /// Create a shader object for `stage` and compile `source`
    ///
    /// Returns a handle even when compilation fails; query
    /// `shader_compile_status` / `shader_info_log` afterwards.
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderKey>;

    fn shader_compile_status(&self, shader: ShaderKey) -> bool;

    fn shader_info_log(&self, shader: ShaderKey) -> String;

    /// Create a program, attach both stages and link it
    ///
    /// Returns a handle even when linking fails; query
    /// `program_link_status` / `program_info_log` afterwards.
    fn link_program(&mut self, vertex: ShaderKey, fragment: ShaderKey) -> Result<ProgramKey>;

    fn program_link_status(&self, program: ProgramKey) -> bool;

    fn program_info_log(&self, program: ProgramKey) -> String;

    /// Active vertex attributes of a linked program
    fn active_attributes(&mut self, program: ProgramKey) -> Result<Vec<ActiveAttribute>>;

    /// Active uniforms of a linked program, with their locations
    fn active_uniforms(&mut self, program: ProgramKey) -> Result<Vec<ActiveUniform>>;

    fn use_program(&mut self, program: ProgramKey) -> Result<()>;

    /// Upload `value` to a uniform of the current program
    fn set_uniform(&mut self, location: UniformKey, value: &UniformValue) -> Result<()>;

    /// Enable attribute `location` and source it from `buffer`
    ///
    /// Tightly packed, not normalized, starting at offset 0.
    fn vertex_attrib_pointer(
        &mut self,
        location: u32,
        buffer: BufferKey,
        components: u32,
        element_type: ElementType,
    ) -> Result<()>;

    // ===== TEXTURES =====

    /// Create a 2D texture and upload RGBA8 pixels, first row at the bottom
    fn create_texture(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<TextureKey>;

    fn set_texture_filter(&mut self, texture: TextureKey, mag: Filter, min: Filter) -> Result<()>;

    fn set_texture_wrap(&mut self, texture: TextureKey, wrap_s: Wrap, wrap_t: Wrap) -> Result<()>;

    fn generate_mipmap(&mut self, texture: TextureKey) -> Result<()>;

    /// Make `unit` active and bind `texture` to it
    fn bind_texture(&mut self, unit: u32, texture: TextureKey) -> Result<()>;

    // ===== FRAME =====

    fn set_viewport(&mut self, width: u32, height: u32);

    fn clear(&mut self, flags: ClearFlags, color: [f32; 4]);

    fn draw_arrays(&mut self, primitive: Primitive, first: u32, count: u32) -> Result<()>;

    /// Draw from the bound index buffer, starting at offset 0
    fn draw_elements(&mut self, primitive: Primitive, count: u32, element_type: ElementType) -> Result<()>;
}
