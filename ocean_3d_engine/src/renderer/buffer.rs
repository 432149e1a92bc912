/// Vertex and index buffers
///
/// The element type of a buffer is taken from the Rust type of the source
/// slice at compile time (`BufferElement`), so a buffer can never be built
/// from data the GPU has no type for.

use crate::error::{Error, Result};
use crate::engine_trace;
use super::graphics_device::{BufferKey, BufferTarget, ElementType, GraphicsDevice};

// ============================================================================
// Element types
// ============================================================================

/// Scalar type that can be stored in a GPU buffer
pub trait BufferElement: bytemuck::Pod {
    const ELEMENT_TYPE: ElementType;
}

/// Scalar type usable as an index in `draw_elements`
pub trait IndexElement: BufferElement {}

macro_rules! impl_buffer_element {
    ($($ty:ty => $element:ident),* $(,)?) => {
        $(
            impl BufferElement for $ty {
                const ELEMENT_TYPE: ElementType = ElementType::$element;
            }
        )*
    };
}

impl_buffer_element! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    f32 => F32,
}

impl IndexElement for u8 {}
impl IndexElement for u16 {}
impl IndexElement for u32 {}

// ============================================================================
// VertexBuffer
// ============================================================================

/// Vertex attribute data: `count` elements of `components` scalars each
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexBuffer {
    key: BufferKey,
    count: u32,
    components: u32,
    element_type: ElementType,
}

impl VertexBuffer {
    /// Upload `data` as `data.len() / components` elements
    ///
    /// Fails with `InvalidBufferSize` when `components` is 0 or does not
    /// divide the slice length.
    pub fn new<T: BufferElement>(
        device: &mut dyn GraphicsDevice,
        data: &[T],
        components: u32,
    ) -> Result<Self> {
        if components == 0 || data.len() % components as usize != 0 {
            return Err(Error::InvalidBufferSize { len: data.len(), components });
        }
        let count = (data.len() / components as usize) as u32;

        let key = device.create_buffer(BufferTarget::Array, bytemuck::cast_slice(data))?;
        engine_trace!(
            "ocean3d::VertexBuffer",
            "Created vertex buffer: {} x {} {:?}",
            count, components, T::ELEMENT_TYPE
        );

        Ok(Self { key, count, components, element_type: T::ELEMENT_TYPE })
    }

    pub fn key(&self) -> BufferKey {
        self.key
    }

    /// Number of elements (vertices)
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn components(&self) -> u32 {
        self.components
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }
}

// ============================================================================
// IndexBuffer
// ============================================================================

/// Index data for `draw_elements`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexBuffer {
    key: BufferKey,
    count: u32,
    element_type: ElementType,
}

impl IndexBuffer {
    pub fn new<T: IndexElement>(device: &mut dyn GraphicsDevice, data: &[T]) -> Result<Self> {
        let key = device.create_buffer(BufferTarget::ElementArray, bytemuck::cast_slice(data))?;
        engine_trace!(
            "ocean3d::IndexBuffer",
            "Created index buffer: {} {:?} indices",
            data.len(), T::ELEMENT_TYPE
        );

        Ok(Self { key, count: data.len() as u32, element_type: T::ELEMENT_TYPE })
    }

    pub fn key(&self) -> BufferKey {
        self.key
    }

    /// Number of indices
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
