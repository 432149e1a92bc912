/// Mesh - everything needed for one draw call
///
/// A mesh binds a shader, uniform values, vertex attribute buffers and
/// textures. Every name is resolved against the shader when the mesh is
/// built, so `prepare()` / `draw()` never look anything up.
///
/// Usage per frame:
///
/// ```no_run
/// # use ocean_3d_engine::ocean3d::{GraphicsDevice, Result};
/// # use ocean_3d_engine::ocean3d::render::Mesh;
/// # use ocean_3d_engine::ocean3d::math::Matrix;
/// # fn frame(device: &mut dyn GraphicsDevice, mesh: &mut Mesh, view: Matrix) -> Result<()> {
/// mesh.set_uniform("u_view", view)?;
/// mesh.prepare(device)?;
/// mesh.draw(device)?;
/// # Ok(())
/// # }
/// ```

use crate::error::{Error, Result};
use super::buffer::{IndexBuffer, VertexBuffer};
use super::graphics_device::{
    BufferTarget, GraphicsDevice, Primitive, ProgramKey, UniformKey, UniformValue,
};
use super::shader::Shader;
use super::texture::Texture;

/// Mesh contents, in declaration order
///
/// Textures are bound to units 0, 1, ... in the order given here, and the
/// sampler uniform named by each entry is set to its unit.
#[derive(Debug, Clone)]
pub struct MeshDesc<'a> {
    pub shader: &'a Shader,
    pub uniforms: Vec<(String, UniformValue)>,
    pub attributes: Vec<(String, VertexBuffer)>,
    pub textures: Vec<(String, Texture)>,
    pub primitive: Primitive,
}

impl<'a> MeshDesc<'a> {
    /// Empty description drawing triangles with `shader`
    pub fn new(shader: &'a Shader) -> Self {
        Self {
            shader,
            uniforms: Vec::new(),
            attributes: Vec::new(),
            textures: Vec::new(),
            primitive: Primitive::Triangles,
        }
    }

    pub fn uniform(mut self, name: &str, value: impl Into<UniformValue>) -> Self {
        self.uniforms.push((name.to_string(), value.into()));
        self
    }

    pub fn attribute(mut self, name: &str, buffer: VertexBuffer) -> Self {
        self.attributes.push((name.to_string(), buffer));
        self
    }

    pub fn texture(mut self, sampler: &str, texture: Texture) -> Self {
        self.textures.push((sampler.to_string(), texture));
        self
    }

    pub fn primitive(mut self, primitive: Primitive) -> Self {
        self.primitive = primitive;
        self
    }
}

/// How a mesh is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshKind {
    /// `draw_arrays` over `vertex_count` vertices
    Arrays,
    /// `draw_elements` over an index buffer
    Indexed(IndexBuffer),
}

#[derive(Debug, Clone)]
struct MeshUniform {
    name: String,
    location: UniformKey,
    value: UniformValue,
}

#[derive(Debug, Clone)]
pub struct Mesh {
    program: ProgramKey,
    uniforms: Vec<MeshUniform>,
    attributes: Vec<(u32, VertexBuffer)>,
    textures: Vec<(UniformKey, Texture)>,
    primitive: Primitive,
    vertex_count: u32,
    kind: MeshKind,
}

impl Mesh {
    /// Mesh drawn with `draw_arrays`
    ///
    /// Fails with `UnknownUniform` / `UnknownAttribute` when a name is not
    /// active in the shader, and with `AttributeCountMismatch` when the
    /// attribute buffers hold different element counts.
    pub fn new(desc: MeshDesc<'_>) -> Result<Self> {
        Self::build(desc, MeshKind::Arrays)
    }

    /// Mesh drawn with `draw_elements` over `indices`
    pub fn indexed(indices: IndexBuffer, desc: MeshDesc<'_>) -> Result<Self> {
        Self::build(desc, MeshKind::Indexed(indices))
    }

    fn build(desc: MeshDesc<'_>, kind: MeshKind) -> Result<Self> {
        let shader = desc.shader;

        let uniforms = desc
            .uniforms
            .into_iter()
            .map(|(name, value)| {
                let location = shader.uniform(&name)?;
                Ok(MeshUniform { name, location, value })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut vertex_count: Option<u32> = None;
        let mut attributes = Vec::with_capacity(desc.attributes.len());
        for (name, buffer) in desc.attributes {
            let location = shader.attribute(&name)?;
            match vertex_count {
                None => vertex_count = Some(buffer.count()),
                Some(expected) if expected != buffer.count() => {
                    return Err(Error::AttributeCountMismatch {
                        name,
                        expected,
                        found: buffer.count(),
                    });
                }
                Some(_) => {}
            }
            attributes.push((location, buffer));
        }

        let textures = desc
            .textures
            .into_iter()
            .map(|(sampler, texture)| Ok((shader.uniform(&sampler)?, texture)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            program: shader.program(),
            uniforms,
            attributes,
            textures,
            primitive: desc.primitive,
            vertex_count: vertex_count.unwrap_or(0),
            kind,
        })
    }

    /// Update a uniform value; the GPU sees it at the next `prepare()`
    pub fn set_uniform(&mut self, name: &str, value: impl Into<UniformValue>) -> Result<()> {
        let uniform = self
            .uniforms
            .iter_mut()
            .find(|u| u.name == name)
            .ok_or_else(|| Error::UnknownUniform(name.to_string()))?;
        uniform.value = value.into();
        Ok(())
    }

    pub fn uniform_value(&self, name: &str) -> Option<&UniformValue> {
        self.uniforms.iter().find(|u| u.name == name).map(|u| &u.value)
    }

    /// Bind program, uniforms, attributes and textures (and the index
    /// buffer for indexed meshes)
    pub fn prepare(&self, device: &mut dyn GraphicsDevice) -> Result<()> {
        device.use_program(self.program)?;

        for uniform in &self.uniforms {
            device.set_uniform(uniform.location, &uniform.value)?;
        }

        for (location, buffer) in &self.attributes {
            device.vertex_attrib_pointer(
                *location,
                buffer.key(),
                buffer.components(),
                buffer.element_type(),
            )?;
        }

        for (unit, (sampler, texture)) in self.textures.iter().enumerate() {
            device.bind_texture(unit as u32, texture.key())?;
            device.set_uniform(*sampler, &UniformValue::Int(unit as i32))?;
        }

        if let MeshKind::Indexed(indices) = &self.kind {
            device.bind_buffer(BufferTarget::ElementArray, indices.key())?;
        }
        Ok(())
    }

    /// Issue the draw call; `prepare()` must have been called first
    pub fn draw(&self, device: &mut dyn GraphicsDevice) -> Result<()> {
        match &self.kind {
            MeshKind::Arrays => device.draw_arrays(self.primitive, 0, self.vertex_count),
            MeshKind::Indexed(indices) => {
                device.draw_elements(self.primitive, indices.count(), indices.element_type())
            }
        }
    }

    pub fn kind(&self) -> &MeshKind {
        &self.kind
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    /// Element count shared by all attribute buffers (0 without attributes)
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
