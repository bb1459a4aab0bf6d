//! Render entry point
//!
//! Every call replaces the container's content wholesale with a freshly
//! materialized tree. Nothing is kept between calls; there is no diffing.

use web_sys::{Document, Element};

use crate::config::RenderOptions;
use crate::dom::Materializer;
use crate::error::{describe_js, RenderError};
use crate::node::VNode;

/// Where to render: an element, or a CSS selector resolved against `document`
#[derive(Clone, Debug)]
pub enum Container {
    Element(Element),
    Selector(String),
}

impl Container {
    /// Look the container up; the first match of a selector wins
    pub fn resolve(&self, document: &Document) -> Result<Element, RenderError> {
        match self {
            Container::Element(el) => Ok(el.clone()),
            Container::Selector(selector) => match document.query_selector(selector) {
                Ok(Some(el)) => Ok(el),
                Ok(None) => Err(RenderError::ContainerNotFound(selector.clone())),
                Err(e) => Err(RenderError::InvalidSelector {
                    selector: selector.clone(),
                    reason: describe_js(&e),
                }),
            },
        }
    }
}

impl From<Element> for Container {
    fn from(el: Element) -> Self {
        Container::Element(el)
    }
}

impl From<&Element> for Container {
    fn from(el: &Element) -> Self {
        Container::Element(el.clone())
    }
}

impl From<&str> for Container {
    fn from(selector: &str) -> Self {
        Container::Selector(selector.to_string())
    }
}

impl From<String> for Container {
    fn from(selector: String) -> Self {
        Container::Selector(selector)
    }
}

/// Replace the container's content with `tag`
pub fn render(tag: &VNode, container: impl Into<Container>) -> Result<(), RenderError> {
    render_with(tag, container, &RenderOptions::default())
}

/// [`render`] with explicit options
///
/// The tree is built off-document first, so a materialization error leaves
/// the container untouched.
pub fn render_with(
    tag: &VNode,
    container: impl Into<Container>,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let materializer = Materializer::new(options)?;
    let document = materializer.document();
    let container = container.into().resolve(document)?;

    let fragment = document.create_document_fragment();
    let node = materializer.materialize(tag, false)?;
    fragment
        .append_child(&node)
        .map_err(|e| RenderError::Attach(describe_js(&e)))?;

    container.set_text_content(Some(""));
    container
        .append_child(&fragment)
        .map_err(|e| RenderError::Attach(describe_js(&e)))?;

    log::trace!("rendered <{}> into container", tag.tag().unwrap_or("#text"));
    Ok(())
}
