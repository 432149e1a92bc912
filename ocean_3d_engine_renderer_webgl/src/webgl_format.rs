/// Conversions from engine enums to WebGL 1 constants

use ocean_3d_engine::ocean3d::render::{
    BufferTarget, ClearFlags, ElementType, Filter, Primitive, ShaderStage, Wrap,
};
use web_sys::WebGlRenderingContext as Gl;

pub(crate) fn buffer_target_to_gl(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Array => Gl::ARRAY_BUFFER,
        BufferTarget::ElementArray => Gl::ELEMENT_ARRAY_BUFFER,
    }
}

pub(crate) fn shader_stage_to_gl(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => Gl::VERTEX_SHADER,
        ShaderStage::Fragment => Gl::FRAGMENT_SHADER,
    }
}

pub(crate) fn element_type_to_gl(element_type: ElementType) -> u32 {
    match element_type {
        ElementType::U8 => Gl::UNSIGNED_BYTE,
        ElementType::U16 => Gl::UNSIGNED_SHORT,
        ElementType::U32 => Gl::UNSIGNED_INT,
        ElementType::I8 => Gl::BYTE,
        ElementType::I16 => Gl::SHORT,
        ElementType::I32 => Gl::INT,
        ElementType::F32 => Gl::FLOAT,
    }
}

pub(crate) fn primitive_to_gl(primitive: Primitive) -> u32 {
    match primitive {
        Primitive::Points => Gl::POINTS,
        Primitive::Lines => Gl::LINES,
        Primitive::LineStrip => Gl::LINE_STRIP,
        Primitive::LineLoop => Gl::LINE_LOOP,
        Primitive::Triangles => Gl::TRIANGLES,
        Primitive::TriangleStrip => Gl::TRIANGLE_STRIP,
        Primitive::TriangleFan => Gl::TRIANGLE_FAN,
    }
}

pub(crate) fn filter_to_gl(filter: Filter) -> u32 {
    match filter {
        Filter::Nearest => Gl::NEAREST,
        Filter::Linear => Gl::LINEAR,
        Filter::NearestMipmapNearest => Gl::NEAREST_MIPMAP_NEAREST,
        Filter::LinearMipmapNearest => Gl::LINEAR_MIPMAP_NEAREST,
        Filter::NearestMipmapLinear => Gl::NEAREST_MIPMAP_LINEAR,
        Filter::LinearMipmapLinear => Gl::LINEAR_MIPMAP_LINEAR,
    }
}

pub(crate) fn wrap_to_gl(wrap: Wrap) -> u32 {
    match wrap {
        Wrap::Repeat => Gl::REPEAT,
        Wrap::ClampToEdge => Gl::CLAMP_TO_EDGE,
        Wrap::MirroredRepeat => Gl::MIRRORED_REPEAT,
    }
}

pub(crate) fn clear_flags_to_gl(flags: ClearFlags) -> u32 {
    let mut mask = 0;
    if flags.contains(ClearFlags::COLOR) {
        mask |= Gl::COLOR_BUFFER_BIT;
    }
    if flags.contains(ClearFlags::DEPTH) {
        mask |= Gl::DEPTH_BUFFER_BIT;
    }
    mask
}

#[cfg(test)]
#[path = "webgl_format_tests.rs"]
mod tests;
