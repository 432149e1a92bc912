/// WebGlDevice - WebGL 1 implementation of the GraphicsDevice trait

use ocean_3d_engine::ocean3d::{Error, Result};
use ocean_3d_engine::ocean3d::render::{
    GraphicsDevice, BufferKey, ShaderKey, ProgramKey, UniformKey, TextureKey,
    BufferTarget, ShaderStage, ElementType, Primitive, Filter, Wrap, ClearFlags,
    UniformValue, ActiveAttribute, ActiveUniform, Config,
};
use ocean_3d_engine::{engine_bail, engine_err, engine_info, engine_trace, engine_warn};
use slotmap::SlotMap;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlContextAttributes, WebGlProgram,
    WebGlRenderingContext as Gl, WebGlShader, WebGlTexture, WebGlUniformLocation,
};

use crate::webgl_format::{
    buffer_target_to_gl, clear_flags_to_gl, element_type_to_gl, filter_to_gl,
    primitive_to_gl, shader_stage_to_gl, wrap_to_gl,
};

/// Needed for `u32` index buffers
const ELEMENT_INDEX_UINT: &str = "OES_element_index_uint";

/// WebGL device
///
/// Owns every GL object it creates; engine code only sees slotmap keys.
pub struct WebGlDevice {
    gl: Gl,
    buffers: SlotMap<BufferKey, WebGlBuffer>,
    shaders: SlotMap<ShaderKey, WebGlShader>,
    programs: SlotMap<ProgramKey, WebGlProgram>,
    uniforms: SlotMap<UniformKey, WebGlUniformLocation>,
    textures: SlotMap<TextureKey, WebGlTexture>,
    element_index_uint: bool,
    clear_color: [f32; 4],
}

impl WebGlDevice {
    /// Create a `webgl` context on `canvas` with the attributes from `config`
    pub fn from_canvas(canvas: &HtmlCanvasElement, config: &Config) -> Result<Self> {
        let attributes = WebGlContextAttributes::new();
        attributes.set_antialias(config.antialias);
        attributes.set_alpha(config.alpha);
        attributes.set_depth(config.depth);
        attributes.set_premultiplied_alpha(config.premultiplied_alpha);
        attributes.set_preserve_drawing_buffer(config.preserve_drawing_buffer);

        let gl: Gl = canvas
            .get_context_with_context_options("webgl", &attributes)
            .map_err(|e| Error::InitializationFailed(format!("getContext failed: {:?}", e)))?
            .ok_or_else(|| Error::InitializationFailed("WebGL is not supported".to_string()))?
            .dyn_into()
            .map_err(|_| Error::InitializationFailed("context is not a WebGLRenderingContext".to_string()))?;

        Ok(Self::from_context(gl, config))
    }

    /// Wrap an existing context
    pub fn from_context(gl: Gl, config: &Config) -> Self {
        if config.depth_test {
            gl.enable(Gl::DEPTH_TEST);
        }

        let element_index_uint = matches!(gl.get_extension(ELEMENT_INDEX_UINT), Ok(Some(_)));
        if !element_index_uint {
            engine_warn!(
                "ocean3d::webgl",
                "{} not available: u32 index buffers cannot be drawn",
                ELEMENT_INDEX_UINT
            );
        }

        engine_info!(
            "ocean3d::webgl",
            "WebGL context created ({}x{}, antialias: {}, depth test: {})",
            gl.drawing_buffer_width(),
            gl.drawing_buffer_height(),
            config.antialias,
            config.depth_test
        );

        Self {
            gl,
            buffers: SlotMap::with_key(),
            shaders: SlotMap::with_key(),
            programs: SlotMap::with_key(),
            uniforms: SlotMap::with_key(),
            textures: SlotMap::with_key(),
            element_index_uint,
            clear_color: config.clear_color,
        }
    }

    /// Underlying context, for calls the trait does not cover
    pub fn context(&self) -> &Gl {
        &self.gl
    }

    /// Clear color from the creation config
    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn supports_u32_indices(&self) -> bool {
        self.element_index_uint
    }

    // ===== HANDLE LOOKUPS =====

    fn buffer(&self, key: BufferKey) -> Result<&WebGlBuffer> {
        self.buffers
            .get(key)
            .ok_or_else(|| engine_err!("ocean3d::webgl", "Unknown buffer handle {:?}", key))
    }

    fn shader(&self, key: ShaderKey) -> Result<&WebGlShader> {
        self.shaders
            .get(key)
            .ok_or_else(|| engine_err!("ocean3d::webgl", "Unknown shader handle {:?}", key))
    }

    fn program(&self, key: ProgramKey) -> Result<&WebGlProgram> {
        self.programs
            .get(key)
            .ok_or_else(|| engine_err!("ocean3d::webgl", "Unknown program handle {:?}", key))
    }

    fn texture(&self, key: TextureKey) -> Result<&WebGlTexture> {
        self.textures
            .get(key)
            .ok_or_else(|| engine_err!("ocean3d::webgl", "Unknown texture handle {:?}", key))
    }

    fn bind_texture_2d(&self, key: TextureKey) -> Result<()> {
        self.gl.bind_texture(Gl::TEXTURE_2D, Some(self.texture(key)?));
        Ok(())
    }

    fn program_parameter_count(&self, program: &WebGlProgram, pname: u32) -> u32 {
        self.gl.get_program_parameter(program, pname).as_f64().unwrap_or(0.0) as u32
    }
}

impl GraphicsDevice for WebGlDevice {
    // ===== BUFFERS =====

    fn create_buffer(&mut self, target: BufferTarget, data: &[u8]) -> Result<BufferKey> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or_else(|| engine_err!("ocean3d::webgl", "createBuffer returned null"))?;

        let gl_target = buffer_target_to_gl(target);
        self.gl.bind_buffer(gl_target, Some(&buffer));
        self.gl.buffer_data_with_u8_array(gl_target, data, Gl::STATIC_DRAW);

        engine_trace!("ocean3d::webgl", "bufferData {:?}: {} bytes", target, data.len());
        Ok(self.buffers.insert(buffer))
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: BufferKey) -> Result<()> {
        self.gl.bind_buffer(buffer_target_to_gl(target), Some(self.buffer(buffer)?));
        Ok(())
    }

    // ===== SHADERS =====

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderKey> {
        let shader = self
            .gl
            .create_shader(shader_stage_to_gl(stage))
            .ok_or_else(|| engine_err!("ocean3d::webgl", "createShader({:?}) returned null", stage))?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);
        Ok(self.shaders.insert(shader))
    }

    fn shader_compile_status(&self, shader: ShaderKey) -> bool {
        self.shaders.get(shader).is_some_and(|s| {
            self.gl
                .get_shader_parameter(s, Gl::COMPILE_STATUS)
                .as_bool()
                .unwrap_or(false)
        })
    }

    fn shader_info_log(&self, shader: ShaderKey) -> String {
        self.shaders
            .get(shader)
            .and_then(|s| self.gl.get_shader_info_log(s))
            .unwrap_or_default()
    }

    fn link_program(&mut self, vertex: ShaderKey, fragment: ShaderKey) -> Result<ProgramKey> {
        let program = self
            .gl
            .create_program()
            .ok_or_else(|| engine_err!("ocean3d::webgl", "createProgram returned null"))?;
        self.gl.attach_shader(&program, self.shader(vertex)?);
        self.gl.attach_shader(&program, self.shader(fragment)?);
        self.gl.link_program(&program);
        Ok(self.programs.insert(program))
    }

    fn program_link_status(&self, program: ProgramKey) -> bool {
        self.programs.get(program).is_some_and(|p| {
            self.gl
                .get_program_parameter(p, Gl::LINK_STATUS)
                .as_bool()
                .unwrap_or(false)
        })
    }

    fn program_info_log(&self, program: ProgramKey) -> String {
        self.programs
            .get(program)
            .and_then(|p| self.gl.get_program_info_log(p))
            .unwrap_or_default()
    }

    fn active_attributes(&mut self, program: ProgramKey) -> Result<Vec<ActiveAttribute>> {
        let program = self.program(program)?;
        let count = self.program_parameter_count(program, Gl::ACTIVE_ATTRIBUTES);

        let mut attributes = Vec::with_capacity(count as usize);
        for index in 0..count {
            let Some(info) = self.gl.get_active_attrib(program, index) else {
                continue;
            };
            let name = info.name();
            // built-ins (gl_VertexID, ...) report -1
            let location = self.gl.get_attrib_location(program, &name);
            if location >= 0 {
                attributes.push(ActiveAttribute { name, location: location as u32 });
            }
        }
        Ok(attributes)
    }

    fn active_uniforms(&mut self, program: ProgramKey) -> Result<Vec<ActiveUniform>> {
        let program = self.program(program)?.clone();
        let count = self.program_parameter_count(&program, Gl::ACTIVE_UNIFORMS);

        let mut uniforms = Vec::with_capacity(count as usize);
        for index in 0..count {
            let Some(info) = self.gl.get_active_uniform(&program, index) else {
                continue;
            };
            let name = info.name();
            if let Some(location) = self.gl.get_uniform_location(&program, &name) {
                uniforms.push(ActiveUniform { name, location: self.uniforms.insert(location) });
            }
        }
        Ok(uniforms)
    }

    fn use_program(&mut self, program: ProgramKey) -> Result<()> {
        self.gl.use_program(Some(self.program(program)?));
        Ok(())
    }

    fn set_uniform(&mut self, location: UniformKey, value: &UniformValue) -> Result<()> {
        let Some(location) = self.uniforms.get(location) else {
            engine_bail!("ocean3d::webgl", "Unknown uniform location {:?}", location);
        };
        let location = Some(location);

        match value {
            UniformValue::Float(v) => self.gl.uniform1f(location, *v),
            UniformValue::Vec2(v) => self.gl.uniform2fv_with_f32_array(location, v),
            UniformValue::Vec3(v) => self.gl.uniform3fv_with_f32_array(location, v),
            UniformValue::Vec4(v) => self.gl.uniform4fv_with_f32_array(location, v),
            UniformValue::Int(v) => self.gl.uniform1i(location, *v),
            UniformValue::Mat4(m) => self.gl.uniform_matrix4fv_with_f32_array(location, false, m.as_slice()),
        }
        Ok(())
    }

    fn vertex_attrib_pointer(
        &mut self,
        location: u32,
        buffer: BufferKey,
        components: u32,
        element_type: ElementType,
    ) -> Result<()> {
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(self.buffer(buffer)?));
        self.gl.enable_vertex_attrib_array(location);
        self.gl.vertex_attrib_pointer_with_i32(
            location,
            components as i32,
            element_type_to_gl(element_type),
            false,
            0,
            0,
        );
        Ok(())
    }

    // ===== TEXTURES =====

    fn create_texture(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<TextureKey> {
        let texture = self
            .gl
            .create_texture()
            .ok_or_else(|| engine_err!("ocean3d::webgl", "createTexture returned null"))?;

        self.gl.bind_texture(Gl::TEXTURE_2D, Some(&texture));
        self.gl
            .tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
                Gl::TEXTURE_2D,
                0,
                Gl::RGBA as i32,
                width as i32,
                height as i32,
                0,
                Gl::RGBA,
                Gl::UNSIGNED_BYTE,
                Some(pixels),
            )
            .map_err(|e| engine_err!("ocean3d::webgl", "texImage2D {}x{} failed: {:?}", width, height, e))?;

        Ok(self.textures.insert(texture))
    }

    fn set_texture_filter(&mut self, texture: TextureKey, mag: Filter, min: Filter) -> Result<()> {
        self.bind_texture_2d(texture)?;
        self.gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MAG_FILTER, filter_to_gl(mag) as i32);
        self.gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MIN_FILTER, filter_to_gl(min) as i32);
        Ok(())
    }

    fn set_texture_wrap(&mut self, texture: TextureKey, wrap_s: Wrap, wrap_t: Wrap) -> Result<()> {
        self.bind_texture_2d(texture)?;
        self.gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_S, wrap_to_gl(wrap_s) as i32);
        self.gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_T, wrap_to_gl(wrap_t) as i32);
        Ok(())
    }

    fn generate_mipmap(&mut self, texture: TextureKey) -> Result<()> {
        self.bind_texture_2d(texture)?;
        self.gl.generate_mipmap(Gl::TEXTURE_2D);
        Ok(())
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureKey) -> Result<()> {
        self.gl.active_texture(Gl::TEXTURE0 + unit);
        self.bind_texture_2d(texture)
    }

    // ===== FRAME =====

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn clear(&mut self, flags: ClearFlags, color: [f32; 4]) {
        self.gl.clear_color(color[0], color[1], color[2], color[3]);
        self.gl.clear(clear_flags_to_gl(flags));
    }

    fn draw_arrays(&mut self, primitive: Primitive, first: u32, count: u32) -> Result<()> {
        self.gl.draw_arrays(primitive_to_gl(primitive), first as i32, count as i32);
        Ok(())
    }

    fn draw_elements(&mut self, primitive: Primitive, count: u32, element_type: ElementType) -> Result<()> {
        if element_type == ElementType::U32 && !self.element_index_uint {
            engine_bail!("ocean3d::webgl", "u32 indices need {}", ELEMENT_INDEX_UINT);
        }
        self.gl.draw_elements_with_i32(
            primitive_to_gl(primitive),
            count as i32,
            element_type_to_gl(element_type),
            0,
        );
        Ok(())
    }
}
