//! Prop reflection rules
//!
//! Decides, per prop, whether it becomes a DOM property, an attribute, both,
//! an inline style update, or nothing. The special keys live in one table so
//! the policy can be read and tested without a browser.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::node::{PropValue, StyleMap};

/// XLink namespace used for `xlink:href`
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

// ============================================================================
// PROP RULE TABLE
// ============================================================================

/// How a prop key is treated before looking at its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropRule {
    /// Never reaches the DOM
    Reserved,
    /// Merged into the element's inline style
    Style,
    /// Mirrored as `xlink:href` (XLink namespace) plus plain `href`
    XlinkHref,
    /// Assigned as a property and mirrored as an attribute of the same name
    Default,
}

/// Definition of a prop key with non-default handling
#[derive(Debug, Clone)]
pub struct SpecialProp {
    pub name: &'static str,
    pub rule: PropRule,
    pub description: &'static str,
}

/// All keys that do not follow the default rule
pub static SPECIAL_PROPS: &[SpecialProp] = &[
    SpecialProp {
        name: "key",
        rule: PropRule::Reserved,
        description: "Reconciliation key, never rendered",
    },
    SpecialProp {
        name: "style",
        rule: PropRule::Style,
        description: "Inline style object",
    },
    SpecialProp {
        name: "xlink-href",
        rule: PropRule::XlinkHref,
        description: "SVG link target (xlink:href and href)",
    },
];

static RULES_BY_NAME: Lazy<HashMap<&'static str, PropRule>> =
    Lazy::new(|| SPECIAL_PROPS.iter().map(|p| (p.name, p.rule)).collect());

/// Rule for a prop key
pub fn rule_for(name: &str) -> PropRule {
    RULES_BY_NAME.get(name).copied().unwrap_or(PropRule::Default)
}

// ============================================================================
// Reflection
// ============================================================================

/// What to do with the attribute side of a prop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeAction {
    /// `setAttribute(name, value)`
    Set(String),
    /// `setAttributeNS(XLINK_NS, "href", value)` and `setAttribute("href", value)`
    SetXlink(String),
    /// `removeAttribute(name)`
    Remove,
}

/// Resolved handling of one `(name, value)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reflection {
    Ignore,
    Style,
    /// Assign the property only (handlers and other callables)
    Property,
    /// Assign the property, then apply the attribute action
    PropertyAndAttribute(AttributeAction),
}

/// Resolve how a prop is reflected onto an element
pub fn reflection(name: &str, value: &PropValue) -> Reflection {
    match rule_for(name) {
        PropRule::Reserved => Reflection::Ignore,
        PropRule::Style => Reflection::Style,
        _ if value.is_handler() => Reflection::Property,
        rule => {
            let value = property_value(value);
            let action = match (rule, value.is_truthy(), value.to_js_string()) {
                (PropRule::XlinkHref, true, Some(s)) => AttributeAction::SetXlink(s),
                (_, true, Some(s)) => AttributeAction::Set(s),
                _ => AttributeAction::Remove,
            };
            Reflection::PropertyAndAttribute(action)
        }
    }
}

/// Value actually assigned as a property: numeric zero becomes `"0"`
pub fn property_value(value: &PropValue) -> PropValue {
    match value {
        PropValue::Number(n) if *n == 0.0 => PropValue::Str("0".to_string()),
        other => other.clone(),
    }
}

// ============================================================================
// Style merge
// ============================================================================

/// Ordered inline style assignments for a style update
///
/// Keys from `previous` come first, then new keys. Keys only in `previous`
/// are cleared with `""`. Falsy strings also become `""`.
pub fn plan_style(next: &StyleMap, previous: Option<&StyleMap>) -> Vec<(String, String)> {
    let mut names: Vec<&str> = previous
        .map(|p| p.keys().map(String::as_str).collect())
        .unwrap_or_default();
    for name in next.keys().map(String::as_str) {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    names
        .into_iter()
        .map(|name| {
            let value = next.get(name).map(|v| v.to_css_string()).unwrap_or_default();
            (name.to_string(), value)
        })
        .collect()
}

/// Whether a CSS name must go through `setProperty` rather than property assignment
pub fn is_dashed_css_name(name: &str) -> bool {
    name.contains('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{style_map, StyleValue};

    #[test]
    fn test_rule_table() {
        assert_eq!(rule_for("key"), PropRule::Reserved);
        assert_eq!(rule_for("style"), PropRule::Style);
        assert_eq!(rule_for("xlink-href"), PropRule::XlinkHref);
        assert_eq!(rule_for("id"), PropRule::Default);
        assert_eq!(rule_for("xlink:href"), PropRule::Default);
    }

    #[test]
    fn test_key_is_ignored_for_any_value() {
        assert_eq!(reflection("key", &"k1".into()), Reflection::Ignore);
        assert_eq!(reflection("key", &PropValue::Null), Reflection::Ignore);
    }

    #[test]
    fn test_truthy_value_sets_attribute() {
        assert_eq!(
            reflection("id", &"x".into()),
            Reflection::PropertyAndAttribute(AttributeAction::Set("x".to_string()))
        );
        assert_eq!(
            reflection("checked", &true.into()),
            Reflection::PropertyAndAttribute(AttributeAction::Set("true".to_string()))
        );
        assert_eq!(
            reflection("tabindex", &2.into()),
            Reflection::PropertyAndAttribute(AttributeAction::Set("2".to_string()))
        );
    }

    #[test]
    fn test_falsy_value_removes_attribute() {
        for value in [PropValue::from(false), PropValue::from(""), PropValue::Null] {
            assert_eq!(
                reflection("checked", &value),
                Reflection::PropertyAndAttribute(AttributeAction::Remove)
            );
        }
    }

    #[test]
    fn test_zero_is_kept_as_string() {
        assert_eq!(property_value(&0.into()), PropValue::from("0"));
        assert_eq!(property_value(&1.into()), PropValue::from(1));
        assert_eq!(
            reflection("value", &0.into()),
            Reflection::PropertyAndAttribute(AttributeAction::Set("0".to_string()))
        );
    }

    #[test]
    fn test_xlink_href() {
        assert_eq!(
            reflection("xlink-href", &"#icon".into()),
            Reflection::PropertyAndAttribute(AttributeAction::SetXlink("#icon".to_string()))
        );
        assert_eq!(
            reflection("xlink-href", &"".into()),
            Reflection::PropertyAndAttribute(AttributeAction::Remove)
        );
    }

    #[test]
    fn test_style_plan_merges_previous_keys() {
        let previous: StyleMap = style_map([("color", "red"), ("margin", "0")]);
        let next: StyleMap = style_map([
            ("margin", StyleValue::from(4)),
            ("display", StyleValue::from("block")),
        ]);

        let plan = plan_style(&next, Some(&previous));
        assert_eq!(
            plan,
            vec![
                ("color".to_string(), "".to_string()),
                ("margin".to_string(), "4".to_string()),
                ("display".to_string(), "block".to_string()),
            ]
        );
    }

    #[test]
    fn test_style_plan_without_previous() {
        let next: StyleMap = style_map([("color", "red"), ("font-weight", "")]);
        let plan = plan_style(&next, None);
        assert_eq!(
            plan,
            vec![
                ("color".to_string(), "red".to_string()),
                ("font-weight".to_string(), "".to_string()),
            ]
        );
        assert!(plan_style(&StyleMap::new(), None).is_empty());
    }

    #[test]
    fn test_dashed_css_names() {
        assert!(is_dashed_css_name("background-color"));
        assert!(is_dashed_css_name("--accent"));
        assert!(!is_dashed_css_name("backgroundColor"));
    }
}
