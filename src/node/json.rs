//! JSON form of node descriptions
//!
//! `"text"` or `{ "type": "div", "props": {...}, "children": [...] }`.
//! Handlers have no JSON form; everything else round-trips through
//! `serde_json::Value` so key order is kept.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::{js_number_string, ElementNode, PropValue, Props, StyleMap, StyleValue, VNode};
use crate::error::ConvertError;

impl TryFrom<Value> for VNode {
    type Error = ConvertError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(VNode::Text(s)),
            Value::Number(n) => Ok(VNode::Text(js_number_string(n.as_f64().unwrap_or(f64::NAN)))),
            Value::Object(mut obj) => {
                let tag = match obj.remove("type") {
                    Some(Value::String(tag)) => tag,
                    _ => return Err(ConvertError::MissingType),
                };
                let props = match obj.remove("props") {
                    None | Some(Value::Null) => Props::new(),
                    Some(Value::Object(props)) => props_from_json(props)?,
                    Some(_) => return Err(ConvertError::InvalidProps),
                };
                let children = match obj.remove("children") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(children)) => children
                        .into_iter()
                        .map(VNode::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    Some(_) => return Err(ConvertError::InvalidChildren),
                };
                Ok(VNode::Element(ElementNode { tag, props, children }))
            }
            other => Err(ConvertError::InvalidNode(json_kind(&other).to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for VNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        VNode::try_from(value).map_err(de::Error::custom)
    }
}

/// Parse a description from JSON text
pub fn from_json_str(json: &str) -> Result<VNode, serde_json::Error> {
    serde_json::from_str(json)
}

fn props_from_json(obj: Map<String, Value>) -> Result<Props, ConvertError> {
    let mut props = Props::new();
    for (name, value) in obj {
        if name == "style" {
            props.insert(name, style_prop_from_json(value)?);
            continue;
        }
        let value = match value {
            Value::String(s) => PropValue::Str(s),
            Value::Number(n) => PropValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::Bool(b) => PropValue::Bool(b),
            Value::Null => PropValue::Null,
            Value::Object(_) | Value::Array(_) => return Err(ConvertError::UnsupportedProp(name)),
        };
        props.insert(name, value);
    }
    Ok(props)
}

/// `style` must be an object; falsy values mean no style
fn style_prop_from_json(value: Value) -> Result<PropValue, ConvertError> {
    match value {
        Value::Object(style) => style_from_json(style).map(PropValue::Style),
        Value::Null | Value::Bool(false) => Ok(PropValue::Null),
        Value::String(s) if s.is_empty() => Ok(PropValue::Null),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(PropValue::Null),
        _ => Err(ConvertError::InvalidStyle),
    }
}

fn style_from_json(obj: Map<String, Value>) -> Result<StyleMap, ConvertError> {
    let mut style = StyleMap::new();
    for (name, value) in obj {
        let value = match value {
            Value::String(s) => StyleValue::Str(s),
            Value::Number(n) => StyleValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::Bool(b) => StyleValue::Bool(b),
            Value::Null => StyleValue::Null,
            Value::Object(_) | Value::Array(_) => return Err(ConvertError::UnsupportedStyle(name)),
        };
        style.insert(name, value);
    }
    Ok(style)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
