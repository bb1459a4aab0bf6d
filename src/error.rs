//! Error types for conversion, materialization and rendering
//!
//! Property write failures are kept apart from the fatal errors so the
//! materializer can decide whether to log them and carry on or abort.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// A JavaScript value could not be read as a node description
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("node description must be a string or an object, got {0}")]
    InvalidNode(String),

    #[error("node description is missing a string `type`")]
    MissingType,

    #[error("`props` must be an object")]
    InvalidProps,

    #[error("`children` must be an array")]
    InvalidChildren,

    #[error("unsupported value for prop `{0}`")]
    UnsupportedProp(String),

    #[error("`style` must be an object")]
    InvalidStyle,

    #[error("unsupported value for style `{0}`")]
    UnsupportedStyle(String),
}

/// Failure to reflect a single prop onto an element
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropError {
    /// `Reflect.set` returned false, e.g. a getter-only property
    #[error("property `{0}` is read-only")]
    ReadOnly(String),

    /// The host threw while assigning the property
    #[error("setting `{name}` failed: {reason}")]
    Rejected { name: String, reason: String },

    /// `setAttribute` / `removeAttribute` threw
    #[error("attribute `{name}` failed: {reason}")]
    Attribute { name: String, reason: String },

    /// The inline style could not be updated
    #[error("style `{name}` failed: {reason}")]
    Style { name: String, reason: String },
}

impl PropError {
    /// Only property writes may be skipped; attribute and style failures
    /// always end the render.
    pub fn is_property_write(&self) -> bool {
        matches!(self, PropError::ReadOnly(_) | PropError::Rejected { .. })
    }
}

/// Failure to build a DOM node from a description
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterializeError {
    #[error("no global document available")]
    NoDocument,

    #[error("cannot create element <{tag}>: {reason}")]
    CreateElement { tag: String, reason: String },

    #[error("cannot append child to <{tag}>: {reason}")]
    Append { tag: String, reason: String },

    #[error("cannot set attribute `{name}`: {reason}")]
    Attribute { name: String, reason: String },

    #[error("cannot set style `{name}`: {reason}")]
    Style { name: String, reason: String },

    /// A property write failed while `strict_props` is on
    #[error(transparent)]
    Prop(PropError),
}

impl From<PropError> for MaterializeError {
    fn from(err: PropError) -> Self {
        match err {
            PropError::Attribute { name, reason } => MaterializeError::Attribute { name, reason },
            PropError::Style { name, reason } => MaterializeError::Style { name, reason },
            other => MaterializeError::Prop(other),
        }
    }
}

/// Failure of a whole render call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("no element matches selector `{0}`")]
    ContainerNotFound(String),

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("cannot attach rendered tree: {0}")]
    Attach(String),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),
}

/// Best-effort text of a thrown JavaScript value
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
