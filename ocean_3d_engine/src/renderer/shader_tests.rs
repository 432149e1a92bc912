use std::collections::HashMap;
use crate::renderer::mock_graphics_device::MockGraphicsDevice;
use super::*;

const VERTEX_SOURCE: &str = "attribute vec3 a_position; void main() {}";
const FRAGMENT_SOURCE: &str = "void main() {}";

/// Document stand-in: element id -> text
struct TestDocument(HashMap<&'static str, &'static str>);

impl ShaderSourceProvider for TestDocument {
    fn element_text(&self, id: &str) -> Option<String> {
        self.0.get(id).map(|s| s.to_string())
    }
}

fn create_test_document() -> TestDocument {
    TestDocument(HashMap::from([
        ("vs", VERTEX_SOURCE),
        ("fs", FRAGMENT_SOURCE),
        ("blank", ""),
    ]))
}

fn create_test_device() -> MockGraphicsDevice {
    MockGraphicsDevice::new()
        .with_attributes(&["a_position", "a_uv"])
        .with_uniforms(&["u_view", "u_time", "u_lights[0]"])
}

// ============================================================================
// Compile / link
// ============================================================================

#[test]
fn test_from_source_links_program() {
    let mut device = create_test_device();
    let shader = Shader::from_source(&mut device, VERTEX_SOURCE, FRAGMENT_SOURCE).unwrap();

    assert!(device.program_link_status(shader.program()));
    assert_eq!(
        device.commands,
        vec!["compile_shader(Vertex)", "compile_shader(Fragment)", "link_program"]
    );
}

#[test]
fn test_compile_failure_carries_info_log() {
    let mut device = create_test_device()
        .with_compile_failure(ShaderStage::Vertex, "ERROR: 0:1: 'foo' : undeclared identifier");

    let result = Shader::from_source(&mut device, VERTEX_SOURCE, FRAGMENT_SOURCE);

    assert_eq!(
        result.unwrap_err(),
        Error::ShaderCompile {
            stage: ShaderStage::Vertex,
            log: "ERROR: 0:1: 'foo' : undeclared identifier".to_string(),
        }
    );
    // fragment stage is never reached
    assert_eq!(device.commands, vec!["compile_shader(Vertex)"]);
}

#[test]
fn test_fragment_compile_failure() {
    let mut device = create_test_device().with_compile_failure(ShaderStage::Fragment, "bad");

    let err = Shader::from_source(&mut device, VERTEX_SOURCE, FRAGMENT_SOURCE).unwrap_err();
    assert!(matches!(err, Error::ShaderCompile { stage: ShaderStage::Fragment, .. }));
}

#[test]
fn test_link_failure() {
    let mut device = create_test_device().with_link_failure("Varyings do not match");

    let result = Shader::from_source(&mut device, VERTEX_SOURCE, FRAGMENT_SOURCE);
    assert_eq!(result.unwrap_err(), Error::ShaderLink("Varyings do not match".to_string()));
}

// ============================================================================
// Locations
// ============================================================================

#[test]
fn test_attribute_locations() {
    let mut device = create_test_device();
    let shader = Shader::from_source(&mut device, VERTEX_SOURCE, FRAGMENT_SOURCE).unwrap();

    assert_eq!(shader.attribute("a_position"), Ok(0));
    assert_eq!(shader.attribute("a_uv"), Ok(1));
    assert_eq!(shader.attribute_count(), 2);
    assert_eq!(shader.attribute("a_normal"), Err(Error::UnknownAttribute("a_normal".to_string())));
}

#[test]
fn test_uniform_locations() {
    let mut device = create_test_device();
    let shader = Shader::from_source(&mut device, VERTEX_SOURCE, FRAGMENT_SOURCE).unwrap();

    let time = shader.uniform("u_time").unwrap();
    assert_eq!(device.uniform_name(time), "u_time");
    assert_eq!(shader.uniform("u_eye"), Err(Error::UnknownUniform("u_eye".to_string())));
}

#[test]
fn test_array_uniform_reachable_without_suffix() {
    let mut device = create_test_device();
    let shader = Shader::from_source(&mut device, VERTEX_SOURCE, FRAGMENT_SOURCE).unwrap();

    assert_eq!(shader.uniform("u_lights"), shader.uniform("u_lights[0]"));
    assert_eq!(shader.uniform_count(), 4);
}

#[test]
fn test_lookups_do_not_touch_the_device() {
    let mut device = create_test_device();
    let shader = Shader::from_source(&mut device, VERTEX_SOURCE, FRAGMENT_SOURCE).unwrap();
    device.clear_commands();

    let _ = shader.uniform("u_view");
    let _ = shader.attribute("a_position");

    assert!(device.commands.is_empty());
}

// ============================================================================
// Document sources
// ============================================================================

#[test]
fn test_from_ids() {
    let mut device = create_test_device();
    let document = create_test_document();

    let shader = Shader::from_ids(&mut device, &document, "vs", "fs").unwrap();

    let vertex = device.programs[shader.program()].vertex;
    assert_eq!(device.shaders[vertex].source, VERTEX_SOURCE);
}

#[test]
fn test_from_ids_missing_element() {
    let mut device = create_test_device();
    let document = create_test_document();

    let result = Shader::from_ids(&mut device, &document, "vs", "nope");

    assert_eq!(result.unwrap_err(), Error::ShaderSourceMissing("nope".to_string()));
    assert!(device.commands.is_empty());
}

#[test]
fn test_from_ids_empty_element() {
    let document = create_test_document();
    assert_eq!(source_from_id(&document, "blank"), Err(Error::ShaderSourceEmpty("blank".to_string())));
}
