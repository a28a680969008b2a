//! Native (host) element classification.
//!
//! `<div>` and `<input>` are host elements, `<Button>` is a component. Only the
//! case of the first character of the tag name is consulted.

use crate::ast::{NodeId, NodeKind, SyntaxTree};

/// Tag name of the element enclosing `attribute`, when it is a plain
/// identifier. Namespaced (`svg:rect`) and member (`Foo.Bar`) tags yield None.
pub fn element_tag_name(tree: &SyntaxTree, attribute: NodeId) -> Option<&str> {
    let opening = tree.parent(attribute)?;
    let NodeKind::JsxOpeningElement { name, .. } = tree.kind(opening) else {
        return None;
    };
    match tree.kind(*name) {
        NodeKind::JsxIdentifier { name } => Some(name.as_str()),
        _ => None,
    }
}

pub fn is_native_tag(tag: &str) -> bool {
    match tag.chars().next() {
        Some(first) => {
            let mut lower = first.to_lowercase();
            lower.next() == Some(first) && lower.next().is_none()
        }
        None => false,
    }
}

/// Whether the element carrying `attribute` is a host element. Fails closed
/// for anything but a simple identifier tag.
pub fn is_native_element(tree: &SyntaxTree, attribute: NodeId) -> bool {
    element_tag_name(tree, attribute).is_some_and(is_native_tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use crate::parse::parse_source;

    fn first_attribute(source: &str) -> (crate::parse::SourceUnit, NodeId) {
        let unit = parse_source("test.jsx", source).unwrap();
        let attr = unit
            .tree
            .ids()
            .find(|id| matches!(unit.tree.kind(*id), NodeKind::JsxAttribute { .. }))
            .unwrap();
        (unit, attr)
    }

    #[test]
    fn test_is_native_tag() {
        assert!(is_native_tag("div"));
        assert!(is_native_tag("input"));
        assert!(is_native_tag("my-element"));
        assert!(!is_native_tag("Button"));
        assert!(!is_native_tag("Input"));
        assert!(!is_native_tag(""));
    }

    #[test]
    fn test_lowercase_element_is_native() {
        let (unit, attr) = first_attribute("<input value={x} />;");
        assert_eq!(element_tag_name(&unit.tree, attr), Some("input"));
        assert!(is_native_element(&unit.tree, attr));
    }

    #[test]
    fn test_component_is_not_native() {
        let (unit, attr) = first_attribute("<Input value={x} />;");
        assert_eq!(element_tag_name(&unit.tree, attr), Some("Input"));
        assert!(!is_native_element(&unit.tree, attr));
    }

    #[test]
    fn test_member_tag_fails_closed() {
        let (unit, attr) = first_attribute("<ui.input value={x} />;");
        assert_eq!(element_tag_name(&unit.tree, attr), None);
        assert!(!is_native_element(&unit.tree, attr));
    }

    #[test]
    fn test_namespaced_tag_fails_closed() {
        let (unit, attr) = first_attribute("<svg:rect width={x} />;");
        assert!(!is_native_element(&unit.tree, attr));
    }
}
