use crate::ast::{NodeId, NodeKind, SyntaxTree};

/// The SyntaxVisitor trait defines the single traversal mechanism over a lowered tree.
///
/// Rules:
/// 1. Traversal is depth-first, children in source order.
/// 2. Implementers override `visit_*` methods to add behavior.
/// 3. Implementers MUST call `walk_*` functions to continue traversal unless pruning is intended.
pub trait SyntaxVisitor {
    fn visit_node(&mut self, tree: &SyntaxTree, id: NodeId) {
        walk_node(self, tree, id);
    }

    fn visit_jsx_element(&mut self, tree: &SyntaxTree, id: NodeId) {
        walk_children(self, tree, id);
    }

    fn visit_jsx_attribute(&mut self, tree: &SyntaxTree, id: NodeId) {
        walk_children(self, tree, id);
    }
}

pub fn walk_root<V: SyntaxVisitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree) {
    if let Some(root) = tree.root() {
        visitor.visit_node(tree, root);
    }
}

pub fn walk_node<V: SyntaxVisitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree, id: NodeId) {
    match tree.kind(id) {
        NodeKind::JsxElement { .. } => visitor.visit_jsx_element(tree, id),
        NodeKind::JsxAttribute { .. } => visitor.visit_jsx_attribute(tree, id),
        _ => walk_children(visitor, tree, id),
    }
}

pub fn walk_children<V: SyntaxVisitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree, id: NodeId) {
    for child in tree.kind(id).children() {
        visitor.visit_node(tree, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_source;

    #[derive(Default)]
    struct AttributeNames {
        names: Vec<String>,
        elements: usize,
    }

    impl SyntaxVisitor for AttributeNames {
        fn visit_jsx_element(&mut self, tree: &SyntaxTree, id: NodeId) {
            self.elements += 1;
            walk_children(self, tree, id);
        }

        fn visit_jsx_attribute(&mut self, tree: &SyntaxTree, id: NodeId) {
            if let NodeKind::JsxAttribute { name, .. } = tree.kind(id) {
                self.names.push(name.clone());
            }
            walk_children(self, tree, id);
        }
    }

    #[test]
    fn test_attributes_visited_in_source_order() {
        let unit = parse_source(
            "t.jsx",
            "function App() { return <div a={1} b=\"2\"><Item c={() => <i d={x} />} /></div>; }",
        )
        .unwrap();
        let mut visitor = AttributeNames::default();
        walk_root(&mut visitor, &unit.tree);
        assert_eq!(visitor.names, vec!["a", "b", "c", "d"]);
        assert_eq!(visitor.elements, 3);
    }
}
