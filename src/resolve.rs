//! Expression Origin Resolution
//!
//! Expands an expression into the terminal expressions its value may come
//! from. The analysis is flow-insensitive:
//!
//! - literals contribute nothing,
//! - identifiers are followed through every assignment, initialized
//!   declaration and default-value pattern that writes them,
//! - both operands of `&&`, `||`, `??` and both branches of `?:` are followed
//!   regardless of what the test could evaluate to,
//! - every other expression is itself a terminal candidate.
//!
//! Identifiers with no visible declaration contribute nothing. A variable that
//! is already being expanded higher up the current path contributes nothing on
//! re-entry, which terminates chains like `x = x` or `x = x || y`.

use crate::ast::{NodeId, NodeKind, SyntaxTree};
use crate::parse::SourceUnit;
use crate::scope::VariableId;

/// Terminal candidates for `expression`, in traversal order.
pub fn resolve(unit: &SourceUnit, expression: NodeId) -> Vec<NodeId> {
    let mut expanding = Vec::new();
    resolve_node(unit, expression, &mut expanding)
}

fn resolve_node(unit: &SourceUnit, node: NodeId, expanding: &mut Vec<VariableId>) -> Vec<NodeId> {
    match unit.tree.kind(node) {
        NodeKind::Literal(_) => vec![],
        NodeKind::Identifier { name } => resolve_identifier(unit, node, name, expanding),
        NodeKind::Logical { left, right, .. } => {
            let mut out = resolve_node(unit, *left, expanding);
            out.extend(resolve_node(unit, *right, expanding));
            out
        }
        NodeKind::Conditional {
            consequent,
            alternate,
            ..
        } => {
            let mut out = resolve_node(unit, *consequent, expanding);
            out.extend(resolve_node(unit, *alternate, expanding));
            out
        }
        NodeKind::Program { .. }
        | NodeKind::Call { .. }
        | NodeKind::New { .. }
        | NodeKind::Member { .. }
        | NodeKind::Assignment { .. }
        | NodeKind::VariableDeclarator { .. }
        | NodeKind::AssignmentPattern { .. }
        | NodeKind::Object { .. }
        | NodeKind::Array { .. }
        | NodeKind::Function { .. }
        | NodeKind::JsxElement { .. }
        | NodeKind::JsxFragment { .. }
        | NodeKind::JsxOpeningElement { .. }
        | NodeKind::JsxIdentifier { .. }
        | NodeKind::JsxNamespacedName { .. }
        | NodeKind::JsxMemberExpression { .. }
        | NodeKind::JsxAttribute { .. }
        | NodeKind::JsxExpressionContainer { .. }
        | NodeKind::Other { .. } => vec![node],
    }
}

fn resolve_identifier(
    unit: &SourceUnit,
    node: NodeId,
    name: &str,
    expanding: &mut Vec<VariableId>,
) -> Vec<NodeId> {
    let Some(variable) = unit.lookup(node, name) else {
        tracing::trace!("`{}` has no visible declaration, treating as safe", name);
        return vec![];
    };
    if expanding.contains(&variable) {
        return vec![];
    }

    expanding.push(variable);
    let mut out = Vec::new();
    for reference in &unit.scopes.variable(variable).references {
        if let Some(value) = assigned_value(&unit.tree, reference.identifier) {
            out.extend(resolve_node(unit, value, expanding));
        }
    }
    expanding.pop();
    out
}

/// Expression written to `identifier` by its parent, if the parent is a write
/// with a value: `id = value`, `let id = value`, `(id = value) => ..`.
fn assigned_value(tree: &SyntaxTree, identifier: NodeId) -> Option<NodeId> {
    let parent = tree.parent(identifier)?;
    match tree.kind(parent) {
        NodeKind::Assignment { left, right, .. } if *left == identifier => Some(*right),
        NodeKind::VariableDeclarator {
            id,
            init: Some(init),
        } if *id == identifier => Some(*init),
        NodeKind::AssignmentPattern { left, right } if *left == identifier => Some(*right),
        _ => None,
    }
}
