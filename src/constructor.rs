use crate::ast::{NodeId, NodeKind, SyntaxTree};

/// True when `node` calls or instantiates the identifier `type_name` directly:
/// `Object()`, `new Array(3)`. Member callees (`window.Object()`) never match,
/// and no scope information is consulted.
pub fn matches_constructor(tree: &SyntaxTree, node: NodeId, type_name: &str) -> bool {
    let callee = match tree.kind(node) {
        NodeKind::Call { callee, .. } | NodeKind::New { callee, .. } => *callee,
        _ => return false,
    };
    matches!(tree.kind(callee), NodeKind::Identifier { name } if name == type_name)
}
