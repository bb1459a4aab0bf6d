//! Rendering exports
//!
//! `createElement(node, svg?)`, `render(tag, container, options?)` and
//! `renderJson(json, container)`.

use wasm_bindgen::prelude::*;
use web_sys::{Element, Node};

use crate::api::helpers::{deserialize_or_default, to_js_error};
use crate::config::RenderOptions;
use crate::dom::create_element;
use crate::node::json::from_json_str;
use crate::node::VNode;
use crate::render::{render_with, Container};

/// Materialize a node description into a detached DOM node
#[wasm_bindgen(js_name = createElement)]
pub fn create_element_js(node: JsValue, svg: Option<bool>) -> Result<Node, JsValue> {
    let node = VNode::try_from(&node).map_err(|e| to_js_error(e, "Invalid node description"))?;
    create_element(&node, svg.unwrap_or(false)).map_err(|e| to_js_error(e, "createElement failed"))
}

/// Replace the content of `container` with the rendered description
///
/// `container` is an `Element` or a selector string.
#[wasm_bindgen(js_name = render)]
pub fn render_js(tag: JsValue, container: JsValue, options: JsValue) -> Result<(), JsValue> {
    let tag = VNode::try_from(&tag).map_err(|e| to_js_error(e, "Invalid node description"))?;
    let container = container_from_js(container)?;
    let options: RenderOptions = deserialize_or_default(options, "Invalid render options")?;

    render_with(&tag, container, &options).map_err(|e| to_js_error(e, "render failed"))
}

/// [`render_js`] for a description given as JSON text
#[wasm_bindgen(js_name = renderJson)]
pub fn render_json_js(json: &str, container: JsValue) -> Result<(), JsValue> {
    let tag = from_json_str(json).map_err(|e| to_js_error(e, "Invalid JSON description"))?;
    let container = container_from_js(container)?;

    render_with(&tag, container, &RenderOptions::default())
        .map_err(|e| to_js_error(e, "renderJson failed"))
}

fn container_from_js(value: JsValue) -> Result<Container, JsValue> {
    if let Some(selector) = value.as_string() {
        return Ok(Container::Selector(selector));
    }
    value
        .dyn_into::<Element>()
        .map(Container::Element)
        .map_err(|_| to_js_error("expected an Element or a selector string", "Invalid container"))
}
