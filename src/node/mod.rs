//! Node descriptions
//!
//! A description is either plain text or an element record with a tag name,
//! an ordered set of props and a list of child descriptions. Descriptions are
//! built fresh for every render and dropped once materialized.
//!
//! # Module Structure
//!
//! - `convert`: reading descriptions out of arbitrary JavaScript values
//! - `json`: reading descriptions out of JSON (serde)

pub mod convert;
pub mod json;

use indexmap::IndexMap;

// ============================================================================
// Tree
// ============================================================================

/// One node of a description tree
#[derive(Clone, Debug, PartialEq)]
pub enum VNode {
    /// Becomes a DOM text node holding the string verbatim
    Text(String),
    /// Becomes a DOM element
    Element(ElementNode),
}

/// An element description
#[derive(Clone, Debug, PartialEq)]
pub struct ElementNode {
    pub tag: String,
    pub props: Props,
    pub children: Vec<VNode>,
}

impl VNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Text(_) => None,
            VNode::Element(el) => Some(el.tag.as_str()),
        }
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            VNode::Element(el) => Some(el),
            VNode::Text(_) => None,
        }
    }
}

impl From<&str> for VNode {
    fn from(s: &str) -> Self {
        VNode::Text(s.to_string())
    }
}

impl From<String> for VNode {
    fn from(s: String) -> Self {
        VNode::Text(s)
    }
}

impl From<ElementNode> for VNode {
    fn from(el: ElementNode) -> Self {
        VNode::Element(el)
    }
}

/// Hyperscript builder for an element description
///
/// ```
/// use hyperdom_wasm::node::{h, prop_map, text};
///
/// let node = h("div", prop_map([("id", "x")]), [text("hi")]);
/// assert_eq!(node.tag(), Some("div"));
/// ```
pub fn h<C>(tag: impl Into<String>, props: Props, children: C) -> VNode
where
    C: IntoIterator<Item = VNode>,
{
    VNode::Element(ElementNode {
        tag: tag.into(),
        props,
        children: children.into_iter().collect(),
    })
}

/// Text node description
pub fn text(s: impl Into<String>) -> VNode {
    VNode::Text(s.into())
}

// ============================================================================
// Ordered maps (props and styles)
// ============================================================================

/// Props in JavaScript key order; re-inserting a key keeps its position
pub type Props = IndexMap<String, PropValue>;

/// Inline style declarations in JavaScript key order
pub type StyleMap = IndexMap<String, StyleValue>;

/// Build [`Props`] from `(name, value)` pairs
pub fn prop_map<K, V, I>(entries: I) -> Props
where
    K: Into<String>,
    V: Into<PropValue>,
    I: IntoIterator<Item = (K, V)>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// Build a [`StyleMap`] from `(css name, value)` pairs
pub fn style_map<K, V, I>(entries: I) -> StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
    I: IntoIterator<Item = (K, V)>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

// ============================================================================
// Values
// ============================================================================

/// Value of a single prop
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Str(String),
    Number(f64),
    Bool(bool),
    Null,
    /// Only meaningful under the `style` key
    Style(StyleMap),
    /// Event handler or any other callable; assigned as a property only
    Handler(js_sys::Function),
}

impl PropValue {
    /// JavaScript truthiness
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Bool(b) => *b,
            PropValue::Null => false,
            PropValue::Style(_) | PropValue::Handler(_) => true,
        }
    }

    pub fn is_handler(&self) -> bool {
        matches!(self, PropValue::Handler(_))
    }

    /// `String(value)` for the scalar variants
    pub fn to_js_string(&self) -> Option<String> {
        match self {
            PropValue::Str(s) => Some(s.clone()),
            PropValue::Number(n) => Some(js_number_string(*n)),
            PropValue::Bool(b) => Some(b.to_string()),
            PropValue::Null => Some("null".to_string()),
            PropValue::Style(_) | PropValue::Handler(_) => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(n.into())
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<StyleMap> for PropValue {
    fn from(style: StyleMap) -> Self {
        PropValue::Style(style)
    }
}

impl From<js_sys::Function> for PropValue {
    fn from(f: js_sys::Function) -> Self {
        PropValue::Handler(f)
    }
}

/// Value of a single inline style declaration
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Str(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl StyleValue {
    /// `String(value) || ''`
    pub fn to_css_string(&self) -> String {
        match self {
            StyleValue::Str(s) => s.clone(),
            StyleValue::Number(n) => js_number_string(*n),
            StyleValue::Bool(b) => b.to_string(),
            StyleValue::Null => "null".to_string(),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n.into())
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

/// `String(n)` for a JavaScript number
pub fn js_number_string(n: f64) -> String {
    ryu_js::Buffer::new().format(n).to_string()
}
