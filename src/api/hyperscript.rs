//! `h(type, props?, children?)`
//!
//! Builds the plain-object description accepted by `createElement` and
//! `render`. Children may be a single value or (nested) arrays; nested
//! arrays are flattened, `null` / `undefined` / booleans are dropped and
//! numbers become strings.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::node::js_number_string;

#[wasm_bindgen(js_name = h)]
pub fn h_js(tag: String, props: JsValue, children: JsValue) -> Result<JsValue, JsValue> {
    let node = Object::new();
    let props = if props.is_null() || props.is_undefined() {
        Object::new().into()
    } else {
        props
    };

    let flat = Array::new();
    flatten_children(&children, &flat);

    Reflect::set(&node, &"type".into(), &tag.into())?;
    Reflect::set(&node, &"props".into(), &props)?;
    Reflect::set(&node, &"children".into(), &flat)?;
    Ok(node.into())
}

fn flatten_children(value: &JsValue, out: &Array) {
    if Array::is_array(value) {
        for child in value.unchecked_ref::<Array>().iter() {
            flatten_children(&child, out);
        }
    } else if value.is_null() || value.is_undefined() || value.as_bool().is_some() {
        // dropped
    } else if let Some(n) = value.as_f64() {
        out.push(&JsValue::from_str(&js_number_string(n)));
    } else {
        out.push(value);
    }
}
