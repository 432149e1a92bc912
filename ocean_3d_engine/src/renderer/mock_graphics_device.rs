/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Every call is recorded as a readable string in `commands`, and created
/// objects are kept in slotmaps so tests can inspect what was uploaded.
/// The reflection tables returned after linking are configured by the test.

use slotmap::SlotMap;

use crate::engine_bail;
use crate::error::Result;
use crate::renderer::{
    GraphicsDevice, BufferKey, ShaderKey, ProgramKey, UniformKey, TextureKey,
    BufferTarget, ShaderStage, ElementType, Primitive, Filter, Wrap, ClearFlags,
    UniformValue, ActiveAttribute, ActiveUniform,
};

// ============================================================================
// Mock objects
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockBuffer {
    pub target: BufferTarget,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct MockShader {
    pub stage: ShaderStage,
    pub source: String,
    pub compiled: bool,
    pub info_log: String,
}

#[derive(Debug, Clone)]
pub struct MockProgram {
    pub vertex: ShaderKey,
    pub fragment: ShaderKey,
    pub linked: bool,
    pub info_log: String,
}

#[derive(Debug, Clone)]
pub struct MockTexture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub filter: Option<(Filter, Filter)>,
    pub wrap: Option<(Wrap, Wrap)>,
    pub mipmapped: bool,
}

// ============================================================================
// MockGraphicsDevice
// ============================================================================

#[derive(Debug, Default)]
pub struct MockGraphicsDevice {
    pub commands: Vec<String>,
    pub buffers: SlotMap<BufferKey, MockBuffer>,
    pub shaders: SlotMap<ShaderKey, MockShader>,
    pub programs: SlotMap<ProgramKey, MockProgram>,
    pub textures: SlotMap<TextureKey, MockTexture>,
    /// Uniform locations handed out by `active_uniforms`, keyed to their name
    pub uniform_locations: SlotMap<UniformKey, String>,

    active_attributes: Vec<ActiveAttribute>,
    active_uniform_names: Vec<String>,
    compile_failure: Option<(ShaderStage, String)>,
    link_failure: Option<String>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes reported for every linked program, located in order 0, 1, ...
    pub fn with_attributes(mut self, names: &[&str]) -> Self {
        self.active_attributes = names
            .iter()
            .enumerate()
            .map(|(location, name)| ActiveAttribute {
                name: name.to_string(),
                location: location as u32,
            })
            .collect();
        self
    }

    /// Uniform names reported for every linked program (driver spelling,
    /// e.g. `u_lights[0]` for arrays)
    pub fn with_uniforms(mut self, names: &[&str]) -> Self {
        self.active_uniform_names = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Make compilation of `stage` fail with `log`
    pub fn with_compile_failure(mut self, stage: ShaderStage, log: &str) -> Self {
        self.compile_failure = Some((stage, log.to_string()));
        self
    }

    /// Make every link fail with `log`
    pub fn with_link_failure(mut self, log: &str) -> Self {
        self.link_failure = Some(log.to_string());
        self
    }

    /// Name behind a uniform location handed out by this device
    pub fn uniform_name(&self, location: UniformKey) -> &str {
        self.uniform_locations.get(location).map(String::as_str).unwrap_or("<unknown>")
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    // ===== BUFFERS =====

    fn create_buffer(&mut self, target: BufferTarget, data: &[u8]) -> Result<BufferKey> {
        self.commands.push(format!("create_buffer({:?}, {} bytes)", target, data.len()));
        Ok(self.buffers.insert(MockBuffer { target, data: data.to_vec() }))
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: BufferKey) -> Result<()> {
        if !self.buffers.contains_key(buffer) {
            engine_bail!("ocean3d::mock", "bind_buffer: unknown buffer {:?}", buffer);
        }
        self.commands.push(format!("bind_buffer({:?})", target));
        Ok(())
    }

    // ===== SHADERS =====

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderKey> {
        self.commands.push(format!("compile_shader({:?})", stage));
        let (compiled, info_log) = match &self.compile_failure {
            Some((failing, log)) if *failing == stage => (false, log.clone()),
            _ => (true, String::new()),
        };
        Ok(self.shaders.insert(MockShader {
            stage,
            source: source.to_string(),
            compiled,
            info_log,
        }))
    }

    fn shader_compile_status(&self, shader: ShaderKey) -> bool {
        self.shaders.get(shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: ShaderKey) -> String {
        self.shaders.get(shader).map(|s| s.info_log.clone()).unwrap_or_default()
    }

    fn link_program(&mut self, vertex: ShaderKey, fragment: ShaderKey) -> Result<ProgramKey> {
        self.commands.push("link_program".to_string());
        let (linked, info_log) = match &self.link_failure {
            Some(log) => (false, log.clone()),
            None => (true, String::new()),
        };
        Ok(self.programs.insert(MockProgram { vertex, fragment, linked, info_log }))
    }

    fn program_link_status(&self, program: ProgramKey) -> bool {
        self.programs.get(program).is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: ProgramKey) -> String {
        self.programs.get(program).map(|p| p.info_log.clone()).unwrap_or_default()
    }

    fn active_attributes(&mut self, _program: ProgramKey) -> Result<Vec<ActiveAttribute>> {
        Ok(self.active_attributes.clone())
    }

    fn active_uniforms(&mut self, _program: ProgramKey) -> Result<Vec<ActiveUniform>> {
        let names = self.active_uniform_names.clone();
        Ok(names
            .into_iter()
            .map(|name| ActiveUniform {
                location: self.uniform_locations.insert(name.clone()),
                name,
            })
            .collect())
    }

    fn use_program(&mut self, program: ProgramKey) -> Result<()> {
        if !self.programs.contains_key(program) {
            engine_bail!("ocean3d::mock", "use_program: unknown program {:?}", program);
        }
        self.commands.push("use_program".to_string());
        Ok(())
    }

    fn set_uniform(&mut self, location: UniformKey, value: &UniformValue) -> Result<()> {
        let command = match value {
            UniformValue::Float(v) => format!("uniform1f({}, {})", self.uniform_name(location), v),
            UniformValue::Int(v) => format!("uniform1i({}, {})", self.uniform_name(location), v),
            UniformValue::Vec2(_) => format!("uniform2fv({})", self.uniform_name(location)),
            UniformValue::Vec3(_) => format!("uniform3fv({})", self.uniform_name(location)),
            UniformValue::Vec4(_) => format!("uniform4fv({})", self.uniform_name(location)),
            UniformValue::Mat4(_) => format!("uniform_matrix4fv({})", self.uniform_name(location)),
        };
        self.commands.push(command);
        Ok(())
    }

    fn vertex_attrib_pointer(
        &mut self,
        location: u32,
        buffer: BufferKey,
        components: u32,
        element_type: ElementType,
    ) -> Result<()> {
        if !self.buffers.contains_key(buffer) {
            engine_bail!("ocean3d::mock", "vertex_attrib_pointer: unknown buffer {:?}", buffer);
        }
        self.commands.push(format!(
            "vertex_attrib_pointer({}, {}, {:?})",
            location, components, element_type
        ));
        Ok(())
    }

    // ===== TEXTURES =====

    fn create_texture(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<TextureKey> {
        self.commands.push(format!("create_texture({}x{})", width, height));
        Ok(self.textures.insert(MockTexture {
            width,
            height,
            pixels: pixels.to_vec(),
            filter: None,
            wrap: None,
            mipmapped: false,
        }))
    }

    fn set_texture_filter(&mut self, texture: TextureKey, mag: Filter, min: Filter) -> Result<()> {
        let Some(t) = self.textures.get_mut(texture) else {
            engine_bail!("ocean3d::mock", "set_texture_filter: unknown texture {:?}", texture);
        };
        t.filter = Some((mag, min));
        self.commands.push(format!("set_texture_filter({:?}, {:?})", mag, min));
        Ok(())
    }

    fn set_texture_wrap(&mut self, texture: TextureKey, wrap_s: Wrap, wrap_t: Wrap) -> Result<()> {
        let Some(t) = self.textures.get_mut(texture) else {
            engine_bail!("ocean3d::mock", "set_texture_wrap: unknown texture {:?}", texture);
        };
        t.wrap = Some((wrap_s, wrap_t));
        self.commands.push(format!("set_texture_wrap({:?}, {:?})", wrap_s, wrap_t));
        Ok(())
    }

    fn generate_mipmap(&mut self, texture: TextureKey) -> Result<()> {
        let Some(t) = self.textures.get_mut(texture) else {
            engine_bail!("ocean3d::mock", "generate_mipmap: unknown texture {:?}", texture);
        };
        t.mipmapped = true;
        self.commands.push("generate_mipmap".to_string());
        Ok(())
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureKey) -> Result<()> {
        if !self.textures.contains_key(texture) {
            engine_bail!("ocean3d::mock", "bind_texture: unknown texture {:?}", texture);
        }
        self.commands.push(format!("bind_texture({})", unit));
        Ok(())
    }

    // ===== FRAME =====

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.commands.push(format!("set_viewport({}, {})", width, height));
    }

    fn clear(&mut self, flags: ClearFlags, _color: [f32; 4]) {
        self.commands.push(format!(
            "clear(color: {}, depth: {})",
            flags.contains(ClearFlags::COLOR),
            flags.contains(ClearFlags::DEPTH)
        ));
    }

    fn draw_arrays(&mut self, primitive: Primitive, first: u32, count: u32) -> Result<()> {
        self.commands.push(format!("draw_arrays({:?}, {}, {})", primitive, first, count));
        Ok(())
    }

    fn draw_elements(&mut self, primitive: Primitive, count: u32, element_type: ElementType) -> Result<()> {
        self.commands.push(format!("draw_elements({:?}, {}, {:?})", primitive, count, element_type));
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
