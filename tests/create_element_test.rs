//! Materializer tests
//!
//! Run in a browser: `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use hyperdom_wasm::dom::{apply_prop, create_element, document, SVG_NS};
use hyperdom_wasm::props::XLINK_NS;
use hyperdom_wasm::{h, prop_map, style_map, text, MaterializeError, PropError, PropValue, Props};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, Node};

wasm_bindgen_test_configure!(run_in_browser);

const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

fn element(node: Node) -> Element {
    node.dyn_into::<Element>().expect("element node")
}

#[wasm_bindgen_test]
fn test_text_nodes_are_verbatim() {
    for s in ["", "hello", "42", "  spaced  ", "<b>not markup</b>"] {
        let node = create_element(&text(s), false).unwrap();
        assert_eq!(node.node_type(), Node::TEXT_NODE);
        assert_eq!(node.text_content().as_deref(), Some(s));
    }
}

#[wasm_bindgen_test]
fn test_element_with_attribute_and_text() {
    let node = h("div", prop_map([("id", "x")]), [text("hi")]);
    let el = element(create_element(&node, false).unwrap());

    assert_eq!(el.tag_name(), "DIV");
    assert_eq!(el.namespace_uri().as_deref(), Some(XHTML_NS));
    assert_eq!(el.get_attribute("id").as_deref(), Some("x"));
    assert_eq!(el.child_nodes().length(), 1);
    assert_eq!(el.text_content().as_deref(), Some("hi"));
}

#[wasm_bindgen_test]
fn test_children_keep_order() {
    let node = h(
        "ul",
        Props::new(),
        [
            h("li", Props::new(), [text("a")]),
            h("li", Props::new(), [text("b")]),
            text("c"),
        ],
    );
    let el = element(create_element(&node, false).unwrap());

    let nodes = el.child_nodes();
    assert_eq!(nodes.length(), 3);
    assert_eq!(nodes.get(0).unwrap().text_content().as_deref(), Some("a"));
    assert_eq!(nodes.get(1).unwrap().text_content().as_deref(), Some("b"));
    assert_eq!(nodes.get(2).unwrap().node_type(), Node::TEXT_NODE);
}

#[wasm_bindgen_test]
fn test_svg_namespace_propagates_to_descendants() {
    let node = h(
        "svg",
        Props::new(),
        [h("g", Props::new(), [h("circle", prop_map([("r", 4)]), [])])],
    );
    let svg = element(create_element(&node, false).unwrap());
    let g = svg.first_element_child().unwrap();
    let circle = g.first_element_child().unwrap();

    assert_eq!(svg.namespace_uri().as_deref(), Some(SVG_NS));
    assert_eq!(g.namespace_uri().as_deref(), Some(SVG_NS));
    assert_eq!(circle.namespace_uri().as_deref(), Some(SVG_NS));
    assert_eq!(circle.get_attribute("r").as_deref(), Some("4"));
}

#[wasm_bindgen_test]
fn test_svg_flag_forces_namespace() {
    let el = element(create_element(&h("path", Props::new(), []), true).unwrap());
    assert_eq!(el.namespace_uri().as_deref(), Some(SVG_NS));

    let el = element(create_element(&h("path", Props::new(), []), false).unwrap());
    assert_eq!(el.namespace_uri().as_deref(), Some(XHTML_NS));
}

#[wasm_bindgen_test]
fn test_key_is_never_reflected() {
    let node = h("li", prop_map([("key", "k1")]), []);
    let el = element(create_element(&node, false).unwrap());

    assert!(!el.has_attribute("key"));
    assert!(!Reflect::has(&el, &JsValue::from_str("key")).unwrap());
}

#[wasm_bindgen_test]
fn test_falsy_value_removes_attribute() {
    let node = h("input", prop_map([("checked", false)]), []);
    let el = element(create_element(&node, false).unwrap());
    assert!(!el.has_attribute("checked"));

    let el = document().unwrap().create_element("input").unwrap();
    el.set_attribute("checked", "").unwrap();
    el.set_attribute("title", "tip").unwrap();
    apply_prop(&el, "checked", &false.into(), None).unwrap();
    apply_prop(&el, "title", &PropValue::Null, None).unwrap();
    assert!(!el.has_attribute("checked"));
    assert!(!el.has_attribute("title"));
}

#[wasm_bindgen_test]
fn test_truthy_values_set_property_and_attribute() {
    let node = h(
        "input",
        prop_map([
            ("value", PropValue::from("abc")),
            ("disabled", PropValue::from(true)),
            ("tabindex", PropValue::from(3)),
        ]),
        [],
    );
    let el = element(create_element(&node, false).unwrap());

    assert_eq!(el.get_attribute("value").as_deref(), Some("abc"));
    assert_eq!(el.get_attribute("disabled").as_deref(), Some("true"));
    assert_eq!(el.get_attribute("tabindex").as_deref(), Some("3"));
    let disabled = Reflect::get(&el, &JsValue::from_str("disabled")).unwrap();
    assert_eq!(disabled.as_bool(), Some(true));
}

#[wasm_bindgen_test]
fn test_numeric_zero_is_kept() {
    let node = h("input", prop_map([("value", 0)]), []);
    let el = element(create_element(&node, false).unwrap());

    assert_eq!(el.get_attribute("value").as_deref(), Some("0"));
    let value = Reflect::get(&el, &JsValue::from_str("value")).unwrap();
    assert_eq!(value.as_string().as_deref(), Some("0"));
}

#[wasm_bindgen_test]
fn test_xlink_href_sets_both_attributes() {
    let node = h("svg", prop_map([("xlink-href", "#icon")]), []);
    let el = element(create_element(&node, false).unwrap());

    assert_eq!(el.get_attribute_ns(Some(XLINK_NS), "href").as_deref(), Some("#icon"));
    assert_eq!(el.get_attribute_ns(None, "href").as_deref(), Some("#icon"));
    assert!(!el.has_attribute("xlink-href"));
}

#[wasm_bindgen_test]
fn test_handler_is_property_only() {
    let handler = js_sys::Function::new_no_args("return 42");
    let node = h("button", prop_map([("onclick", handler.clone())]), []);
    let el = element(create_element(&node, false).unwrap());

    assert!(!el.has_attribute("onclick"));
    let assigned = Reflect::get(&el, &JsValue::from_str("onclick")).unwrap();
    assert_eq!(assigned, JsValue::from(handler));
}

#[wasm_bindgen_test]
fn test_inline_style() {
    let style = style_map([("color", "red"), ("background-color", "blue")]);
    let node = h("p", prop_map([("style", style)]), []);
    let el = element(create_element(&node, false).unwrap())
        .dyn_into::<HtmlElement>()
        .unwrap();

    assert_eq!(el.style().get_property_value("color").unwrap(), "red");
    assert_eq!(el.style().get_property_value("background-color").unwrap(), "blue");
}

#[wasm_bindgen_test]
fn test_style_merge_with_previous_value() {
    let el = document().unwrap().create_element("p").unwrap();
    let first: PropValue = style_map([("color", "red"), ("margin", "1px")]).into();
    apply_prop(&el, "style", &first, None).unwrap();

    let second: PropValue = style_map([("margin", "2px")]).into();
    apply_prop(&el, "style", &second, Some(&first)).unwrap();

    let style = el.dyn_into::<HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("margin").unwrap(), "2px");
    assert_eq!(style.get_property_value("color").unwrap(), "");
}

#[wasm_bindgen_test]
fn test_read_only_property_is_reported() {
    let el = document().unwrap().create_element("div").unwrap();
    let err = apply_prop(&el, "tagName", &"span".into(), None).unwrap_err();
    assert_eq!(err, PropError::ReadOnly("tagName".to_string()));
    // the attribute side still runs
    assert_eq!(el.get_attribute("tagname").as_deref(), Some("span"));
    assert_eq!(el.tag_name(), "DIV");
}

#[wasm_bindgen_test]
fn test_read_only_property_is_skipped_by_default() {
    let node = h("div", prop_map([("tagName", "span"), ("id", "ok")]), []);
    let el = element(create_element(&node, false).unwrap());
    assert_eq!(el.get_attribute("id").as_deref(), Some("ok"));
}

#[wasm_bindgen_test]
fn test_invalid_tag_fails() {
    let result = create_element(&h("1bad", Props::new(), []), false);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_invalid_attribute_name_is_fatal() {
    let el = document().unwrap().create_element("div").unwrap();
    let err = apply_prop(&el, "bad name", &"x".into(), None).unwrap_err();
    assert!(matches!(err, PropError::Attribute { ref name, .. } if name == "bad name"));
    assert!(!err.is_property_write());

    let node = h("div", prop_map([("bad name", "x")]), []);
    let err = create_element(&node, false).unwrap_err();
    assert!(matches!(err, MaterializeError::Attribute { ref name, .. } if name == "bad name"));
}
