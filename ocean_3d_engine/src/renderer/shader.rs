/// Shader - linked GPU program with its attribute and uniform locations
///
/// Locations are enumerated once, right after linking, and owned by the
/// `Shader`. Lookups never go back to the driver.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::{engine_debug, engine_error};
use super::graphics_device::{GraphicsDevice, ProgramKey, ShaderKey, ShaderStage, UniformKey};

/// Access to shader sources embedded in a document
///
/// Returns the concatenated text of the element `id`, or `None` when no
/// such element exists.
pub trait ShaderSourceProvider {
    fn element_text(&self, id: &str) -> Option<String>;
}

#[derive(Debug, Clone)]
pub struct Shader {
    program: ProgramKey,
    attributes: FxHashMap<String, u32>,
    uniforms: FxHashMap<String, UniformKey>,
}

impl Shader {
    /// Compile both stages, link them and collect active locations
    pub fn from_source(
        device: &mut dyn GraphicsDevice,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self> {
        let vertex = compile(device, ShaderStage::Vertex, vertex_source)?;
        let fragment = compile(device, ShaderStage::Fragment, fragment_source)?;

        let program = device.link_program(vertex, fragment)?;
        if !device.program_link_status(program) {
            let log = device.program_info_log(program);
            engine_error!("ocean3d::Shader", "Error linking shader: {}", log);
            return Err(Error::ShaderLink(log));
        }

        let attributes: FxHashMap<String, u32> = device
            .active_attributes(program)?
            .into_iter()
            .map(|a| (a.name, a.location))
            .collect();

        let mut uniforms = FxHashMap::default();
        for uniform in device.active_uniforms(program)? {
            // "lights[0]" is also reachable as "lights"
            if let Some(base) = uniform.name.strip_suffix("[0]") {
                uniforms.insert(base.to_string(), uniform.location);
            }
            uniforms.insert(uniform.name, uniform.location);
        }

        engine_debug!(
            "ocean3d::Shader",
            "Linked shader program: {} attributes, {} uniforms",
            attributes.len(), uniforms.len()
        );

        Ok(Self { program, attributes, uniforms })
    }

    /// Build a shader from sources embedded in a document
    pub fn from_ids(
        device: &mut dyn GraphicsDevice,
        document: &dyn ShaderSourceProvider,
        vertex_id: &str,
        fragment_id: &str,
    ) -> Result<Self> {
        let vertex_source = source_from_id(document, vertex_id)?;
        let fragment_source = source_from_id(document, fragment_id)?;
        Self::from_source(device, &vertex_source, &fragment_source)
    }

    pub fn program(&self) -> ProgramKey {
        self.program
    }

    /// Location of an active vertex attribute
    pub fn attribute(&self, name: &str) -> Result<u32> {
        self.attributes
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownAttribute(name.to_string()))
    }

    /// Location of an active uniform (sampler uniforms included)
    pub fn uniform(&self, name: &str) -> Result<UniformKey> {
        self.uniforms
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownUniform(name.to_string()))
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn uniform_count(&self) -> usize {
        self.uniforms.len()
    }
}

/// Fetch a shader source by element id
///
/// Fails with `ShaderSourceMissing` when the element does not exist and
/// with `ShaderSourceEmpty` when it holds no text.
pub fn source_from_id(document: &dyn ShaderSourceProvider, id: &str) -> Result<String> {
    let source = document
        .element_text(id)
        .ok_or_else(|| Error::ShaderSourceMissing(id.to_string()))?;
    if source.is_empty() {
        return Err(Error::ShaderSourceEmpty(id.to_string()));
    }
    Ok(source)
}

fn compile(device: &mut dyn GraphicsDevice, stage: ShaderStage, source: &str) -> Result<ShaderKey> {
    let shader = device.compile_shader(stage, source)?;
    if !device.shader_compile_status(shader) {
        let log = device.shader_info_log(shader);
        engine_error!("ocean3d::Shader", "{:?} shader compilation failed: {}", stage, log);
        return Err(Error::ShaderCompile { stage, log });
    }
    Ok(shader)
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
