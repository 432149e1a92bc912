/// HtmlShaderSource - shader sources stored in `<script>` elements

use ocean_3d_engine::ocean3d::{Error, Result};
use ocean_3d_engine::ocean3d::render::ShaderSourceProvider;
use web_sys::{Document, Node};

/// Reads shader text from the page
///
/// ```html
/// <script id="water-vertex-shader" type="x-shader/x-vertex"> ... </script>
/// ```
#[derive(Debug, Clone)]
pub struct HtmlShaderSource {
    document: Document,
}

impl HtmlShaderSource {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Use the document of the current window
    pub fn from_window() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::InitializationFailed("no window document".to_string()))?;
        Ok(Self::new(document))
    }
}

impl ShaderSourceProvider for HtmlShaderSource {
    /// Concatenation of the element's direct text nodes
    fn element_text(&self, id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(id)?;
        let children = element.child_nodes();

        let mut text = String::new();
        for index in 0..children.length() {
            let Some(child) = children.item(index) else {
                continue;
            };
            if child.node_type() == Node::TEXT_NODE {
                if let Some(value) = child.text_content() {
                    text.push_str(&value);
                }
            }
        }
        Some(text)
    }
}
