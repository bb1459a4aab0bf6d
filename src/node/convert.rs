//! Reading node descriptions out of JavaScript values
//!
//! Accepts the plain-object shape produced by `h()` or written by hand.
//! Prop order follows `Object.entries`, i.e. JavaScript enumeration order.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::{js_number_string, ElementNode, PropValue, Props, StyleMap, StyleValue, VNode};
use crate::error::ConvertError;

impl TryFrom<&JsValue> for VNode {
    type Error = ConvertError;

    fn try_from(value: &JsValue) -> Result<Self, Self::Error> {
        if let Some(s) = value.as_string() {
            return Ok(VNode::Text(s));
        }
        if let Some(n) = value.as_f64() {
            return Ok(VNode::Text(js_number_string(n)));
        }
        if !value.is_object() || Array::is_array(value) {
            return Err(ConvertError::InvalidNode(js_kind(value)));
        }

        let tag = get(value, "type")
            .as_string()
            .ok_or(ConvertError::MissingType)?;
        let props = props_from_js(&get(value, "props"))?;
        let children = children_from_js(&get(value, "children"))?;

        Ok(VNode::Element(ElementNode { tag, props, children }))
    }
}

impl TryFrom<JsValue> for VNode {
    type Error = ConvertError;

    fn try_from(value: JsValue) -> Result<Self, Self::Error> {
        VNode::try_from(&value)
    }
}

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn props_from_js(value: &JsValue) -> Result<Props, ConvertError> {
    let mut props = Props::new();
    if value.is_null() || value.is_undefined() {
        return Ok(props);
    }
    let obj = value.dyn_ref::<Object>().ok_or(ConvertError::InvalidProps)?;

    for (name, value) in entries(obj) {
        let prop = prop_value_from_js(&name, &value)?;
        props.insert(name, prop);
    }
    Ok(props)
}

fn prop_value_from_js(name: &str, value: &JsValue) -> Result<PropValue, ConvertError> {
    if name == "style" {
        return if value.is_falsy() {
            Ok(PropValue::Null)
        } else {
            style_from_js(value).map(PropValue::Style)
        };
    }

    if let Some(s) = value.as_string() {
        Ok(PropValue::Str(s))
    } else if let Some(n) = value.as_f64() {
        Ok(PropValue::Number(n))
    } else if let Some(b) = value.as_bool() {
        Ok(PropValue::Bool(b))
    } else if value.is_null() || value.is_undefined() {
        Ok(PropValue::Null)
    } else if value.is_function() {
        Ok(PropValue::Handler(value.clone().unchecked_into()))
    } else {
        Err(ConvertError::UnsupportedProp(name.to_string()))
    }
}

fn style_from_js(value: &JsValue) -> Result<StyleMap, ConvertError> {
    let obj = value.dyn_ref::<Object>().ok_or(ConvertError::InvalidStyle)?;
    if Array::is_array(value) || value.is_function() {
        return Err(ConvertError::InvalidStyle);
    }

    let mut style = StyleMap::new();
    for (name, value) in entries(obj) {
        let decl = if let Some(s) = value.as_string() {
            StyleValue::Str(s)
        } else if let Some(n) = value.as_f64() {
            StyleValue::Number(n)
        } else if let Some(b) = value.as_bool() {
            StyleValue::Bool(b)
        } else if value.is_null() || value.is_undefined() {
            StyleValue::Null
        } else {
            return Err(ConvertError::UnsupportedStyle(name));
        };
        style.insert(name, decl);
    }
    Ok(style)
}

fn children_from_js(value: &JsValue) -> Result<Vec<VNode>, ConvertError> {
    if value.is_null() || value.is_undefined() {
        return Ok(Vec::new());
    }
    if !Array::is_array(value) {
        return Err(ConvertError::InvalidChildren);
    }
    let children: &Array = value.unchecked_ref();
    children.iter().map(|child| VNode::try_from(&child)).collect()
}

/// `Object.entries(obj)` as owned `(key, value)` pairs
fn entries(obj: &Object) -> Vec<(String, JsValue)> {
    Object::entries(obj)
        .iter()
        .filter_map(|pair| {
            let pair: Array = pair.dyn_into().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1)))
        })
        .collect()
}

fn js_kind(value: &JsValue) -> String {
    if value.is_null() {
        "null".to_string()
    } else if Array::is_array(value) {
        "array".to_string()
    } else {
        value.js_typeof().as_string().unwrap_or_default()
    }
}
