//! Node materializer
//!
//! Turns a [`VNode`] tree into live DOM nodes. The SVG flag is threaded
//! through the recursion: once an `<svg>` element is seen, it and all of its
//! descendants are created in the SVG namespace.

use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, Node};

use crate::config::RenderOptions;
use crate::error::{describe_js, MaterializeError, PropError};
use crate::node::{ElementNode, PropValue, StyleMap, VNode};
use crate::props::{
    is_dashed_css_name, plan_style, property_value, reflection, AttributeAction, Reflection,
    XLINK_NS,
};

/// SVG namespace
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// The global `document`
pub fn document() -> Result<Document, MaterializeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MaterializeError::NoDocument)
}

/// Materialize a description with default options
///
/// `svg` forces the SVG namespace for the whole subtree; it is also switched
/// on by any `svg` tag inside the description.
pub fn create_element(node: &VNode, svg: bool) -> Result<Node, MaterializeError> {
    Materializer::new(&RenderOptions::default())?.materialize(node, svg)
}

// ============================================================================
// Materializer
// ============================================================================

pub struct Materializer<'a> {
    document: Document,
    options: &'a RenderOptions,
}

impl<'a> Materializer<'a> {
    pub fn new(options: &'a RenderOptions) -> Result<Self, MaterializeError> {
        Ok(Self::with_document(document()?, options))
    }

    pub fn with_document(document: Document, options: &'a RenderOptions) -> Self {
        Self { document, options }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn materialize(&self, node: &VNode, svg: bool) -> Result<Node, MaterializeError> {
        match node {
            VNode::Text(s) => Ok(self.document.create_text_node(s).into()),
            VNode::Element(el) => self.materialize_element(el, svg).map(Into::into),
        }
    }

    fn materialize_element(&self, el: &ElementNode, svg: bool) -> Result<Element, MaterializeError> {
        let svg = svg || el.tag == "svg";
        log::trace!("materialize <{}> svg={} props={}", el.tag, svg, el.props.len());

        let created = if svg {
            self.document.create_element_ns(Some(SVG_NS), &el.tag)
        } else {
            self.document.create_element(&el.tag)
        };
        let element = created.map_err(|e| MaterializeError::CreateElement {
            tag: el.tag.clone(),
            reason: describe_js(&e),
        })?;

        for (name, value) in el.props.iter() {
            match apply_prop(&element, name, value, None) {
                Ok(()) => {}
                Err(err) if err.is_property_write() && !self.options.strict_props => {
                    log::debug!("<{}>: ignoring prop `{}`: {}", el.tag, name, err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        for child in &el.children {
            let child = self.materialize(child, svg)?;
            element
                .append_child(&child)
                .map_err(|e| MaterializeError::Append {
                    tag: el.tag.clone(),
                    reason: describe_js(&e),
                })?;
        }

        Ok(element)
    }
}

// ============================================================================
// Props
// ============================================================================

/// Reflect one prop onto an element
///
/// `previous` is only consulted for `style`, whose update merges the keys of
/// both values. For the property-plus-attribute case the attribute step runs
/// even when the property write fails; an attribute error takes precedence.
pub fn apply_prop(
    element: &Element,
    name: &str,
    value: &PropValue,
    previous: Option<&PropValue>,
) -> Result<(), PropError> {
    match reflection(name, value) {
        Reflection::Ignore => Ok(()),
        Reflection::Style => apply_style(element, value, previous),
        Reflection::Property => set_property(element, name, value),
        Reflection::PropertyAndAttribute(action) => {
            let property = set_property(element, name, &property_value(value));
            apply_attribute(element, name, &action)?;
            property
        }
    }
}

fn set_property(element: &Element, name: &str, value: &PropValue) -> Result<(), PropError> {
    let js = to_js_value(value);
    match Reflect::set(element, &JsValue::from_str(name), &js) {
        Ok(true) => Ok(()),
        Ok(false) => Err(PropError::ReadOnly(name.to_string())),
        Err(e) => Err(rejected(name, &e)),
    }
}

fn apply_attribute(element: &Element, name: &str, action: &AttributeAction) -> Result<(), PropError> {
    let result = match action {
        AttributeAction::Set(value) => element.set_attribute(name, value),
        AttributeAction::SetXlink(value) => element
            .set_attribute_ns(Some(XLINK_NS), "xlink:href", value)
            .and_then(|_| element.set_attribute("href", value)),
        AttributeAction::Remove => element.remove_attribute(name),
    };
    result.map_err(|e| PropError::Attribute {
        name: name.to_string(),
        reason: describe_js(&e),
    })
}

/// Merge a style object into the element's inline style
pub fn apply_style(
    element: &Element,
    value: &PropValue,
    previous: Option<&PropValue>,
) -> Result<(), PropError> {
    let empty = StyleMap::new();
    let next = match value {
        PropValue::Style(style) => style,
        v if !v.is_truthy() => &empty,
        _ => {
            return Err(PropError::Style {
                name: "style".to_string(),
                reason: "expected a style object".to_string(),
            })
        }
    };
    let previous = match previous {
        Some(PropValue::Style(style)) => Some(style),
        _ => None,
    };

    let plan = plan_style(next, previous);
    if plan.is_empty() {
        return Ok(());
    }

    let decl: CssStyleDeclaration = Reflect::get(element, &JsValue::from_str("style"))
        .ok()
        .and_then(|s| s.dyn_into().ok())
        .ok_or_else(|| PropError::Style {
            name: "style".to_string(),
            reason: "element has no inline style".to_string(),
        })?;

    for (css_name, css_value) in plan {
        if is_dashed_css_name(&css_name) {
            decl.set_property(&css_name, &css_value)
                .map_err(|e| style_failed(&css_name, &e))?;
        } else {
            Reflect::set(&decl, &JsValue::from_str(&css_name), &JsValue::from_str(&css_value))
                .map_err(|e| style_failed(&css_name, &e))?;
        }
    }
    Ok(())
}

fn to_js_value(value: &PropValue) -> JsValue {
    match value {
        PropValue::Str(s) => JsValue::from_str(s),
        PropValue::Number(n) => JsValue::from_f64(*n),
        PropValue::Bool(b) => JsValue::from_bool(*b),
        PropValue::Null => JsValue::NULL,
        PropValue::Handler(f) => f.clone().into(),
        PropValue::Style(style) => {
            let obj = Object::new();
            for (k, v) in style.iter() {
                // Reflect.set on a fresh plain object cannot fail
                let _ = Reflect::set(&obj, &JsValue::from_str(k), &JsValue::from_str(&v.to_css_string()));
            }
            obj.into()
        }
    }
}

fn rejected(name: &str, err: &JsValue) -> PropError {
    PropError::Rejected {
        name: name.to_string(),
        reason: describe_js(err),
    }
}

fn style_failed(css_name: &str, err: &JsValue) -> PropError {
    PropError::Style {
        name: css_name.to_string(),
        reason: describe_js(err),
    }
}
