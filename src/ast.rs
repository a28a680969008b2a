//! Syntax Tree for JSX Origin Lint
//!
//! A closed, arena-allocated rendition of the parsed module. Every node carries
//! its parent link and the lexical scope it occurs in. Kinds the rules do not
//! distinguish are lowered to [`NodeKind::Other`] with their children kept, so
//! traversal still reaches nested JSX.

use oxc_span::Span;
use oxc_syntax::operator::{AssignmentOperator, LogicalOperator};

use crate::scope::ScopeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    BigInt(String),
    Boolean(bool),
    Null,
    RegExp(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberProperty {
    /// `object.name`
    Static(String),
    /// `object[expression]`
    Computed(NodeId),
    /// `object.#name`
    Private(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Declaration,
    Expression,
    Arrow,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Program {
        body: Vec<NodeId>,
    },
    Literal(LiteralValue),
    Identifier {
        name: String,
    },
    Logical {
        operator: LogicalOperator,
        left: NodeId,
        right: NodeId,
    },
    Conditional {
        test: NodeId,
        consequent: NodeId,
        alternate: NodeId,
    },
    Call {
        callee: NodeId,
        arguments: Vec<NodeId>,
    },
    New {
        callee: NodeId,
        arguments: Vec<NodeId>,
    },
    Member {
        object: NodeId,
        property: MemberProperty,
    },
    Assignment {
        operator: AssignmentOperator,
        left: NodeId,
        right: NodeId,
    },
    VariableDeclarator {
        id: NodeId,
        init: Option<NodeId>,
    },
    AssignmentPattern {
        left: NodeId,
        right: NodeId,
    },
    Object {
        properties: Vec<NodeId>,
    },
    Array {
        elements: Vec<NodeId>,
    },
    Function {
        kind: FunctionKind,
        id: Option<NodeId>,
        params: Vec<NodeId>,
        body: Vec<NodeId>,
    },
    JsxElement {
        opening: NodeId,
        children: Vec<NodeId>,
    },
    JsxFragment {
        children: Vec<NodeId>,
    },
    JsxOpeningElement {
        name: NodeId,
        attributes: Vec<NodeId>,
    },
    /// Plain tag name: `div`, `Button`.
    JsxIdentifier {
        name: String,
    },
    /// `svg:rect`
    JsxNamespacedName {
        namespace: String,
        name: String,
    },
    /// `Foo.Bar`, kept as its dotted text.
    JsxMemberExpression {
        path: String,
    },
    JsxAttribute {
        name: String,
        value: Option<NodeId>,
    },
    JsxExpressionContainer {
        expression: NodeId,
    },
    Other {
        label: &'static str,
        children: Vec<NodeId>,
    },
}

impl NodeKind {
    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Program { body } => body.clone(),
            NodeKind::Literal(_)
            | NodeKind::Identifier { .. }
            | NodeKind::JsxIdentifier { .. }
            | NodeKind::JsxNamespacedName { .. }
            | NodeKind::JsxMemberExpression { .. } => vec![],
            NodeKind::Logical { left, right, .. }
            | NodeKind::Assignment { left, right, .. }
            | NodeKind::AssignmentPattern { left, right } => vec![*left, *right],
            NodeKind::Conditional {
                test,
                consequent,
                alternate,
            } => vec![*test, *consequent, *alternate],
            NodeKind::Call { callee, arguments } | NodeKind::New { callee, arguments } => {
                let mut out = vec![*callee];
                out.extend(arguments.iter().copied());
                out
            }
            NodeKind::Member { object, property } => match property {
                MemberProperty::Computed(expr) => vec![*object, *expr],
                _ => vec![*object],
            },
            NodeKind::VariableDeclarator { id, init } => {
                let mut out = vec![*id];
                out.extend(init.iter().copied());
                out
            }
            NodeKind::Object { properties } => properties.clone(),
            NodeKind::Array { elements } => elements.clone(),
            NodeKind::Function {
                id, params, body, ..
            } => {
                let mut out: Vec<NodeId> = id.iter().copied().collect();
                out.extend(params.iter().copied());
                out.extend(body.iter().copied());
                out
            }
            NodeKind::JsxElement { opening, children } => {
                let mut out = vec![*opening];
                out.extend(children.iter().copied());
                out
            }
            NodeKind::JsxFragment { children } => children.clone(),
            NodeKind::JsxOpeningElement { name, attributes } => {
                let mut out = vec![*name];
                out.extend(attributes.iter().copied());
                out
            }
            NodeKind::JsxAttribute { value, .. } => value.iter().copied().collect(),
            NodeKind::JsxExpressionContainer { expression } => vec![*expression],
            NodeKind::Other { children, .. } => children.clone(),
        }
    }

    /// ESTree-style type name, used in logs and test assertions.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Program { .. } => "Program",
            NodeKind::Literal(_) => "Literal",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::Logical { .. } => "LogicalExpression",
            NodeKind::Conditional { .. } => "ConditionalExpression",
            NodeKind::Call { .. } => "CallExpression",
            NodeKind::New { .. } => "NewExpression",
            NodeKind::Member { .. } => "MemberExpression",
            NodeKind::Assignment { .. } => "AssignmentExpression",
            NodeKind::VariableDeclarator { .. } => "VariableDeclarator",
            NodeKind::AssignmentPattern { .. } => "AssignmentPattern",
            NodeKind::Object { .. } => "ObjectExpression",
            NodeKind::Array { .. } => "ArrayExpression",
            NodeKind::Function { kind, .. } => match kind {
                FunctionKind::Declaration => "FunctionDeclaration",
                FunctionKind::Expression => "FunctionExpression",
                FunctionKind::Arrow => "ArrowFunctionExpression",
            },
            NodeKind::JsxElement { .. } => "JSXElement",
            NodeKind::JsxFragment { .. } => "JSXFragment",
            NodeKind::JsxOpeningElement { .. } => "JSXOpeningElement",
            NodeKind::JsxIdentifier { .. } => "JSXIdentifier",
            NodeKind::JsxNamespacedName { .. } => "JSXNamespacedName",
            NodeKind::JsxMemberExpression { .. } => "JSXMemberExpression",
            NodeKind::JsxAttribute { .. } => "JSXAttribute",
            NodeKind::JsxExpressionContainer { .. } => "JSXExpressionContainer",
            NodeKind::Other { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub scope: ScopeId,
}

/// Arena of lowered nodes. Children are pushed before their parent, so a
/// node's id is always greater than the ids of everything beneath it.
#[derive(Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and adopt its children.
    pub fn push(&mut self, kind: NodeKind, span: Span, scope: ScopeId) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        for child in kind.children() {
            self.nodes[child.index()].parent = Some(id);
        }
        self.nodes.push(Node {
            kind,
            span,
            parent: None,
            scope,
        });
        id
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Source text covered by a node.
    pub fn text<'s>(&self, source: &'s str, id: NodeId) -> &'s str {
        let span = self.span(id);
        source
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ScopeTree;

    #[test]
    fn test_push_adopts_children() {
        let scopes = ScopeTree::new();
        let root_scope = scopes.root();
        let mut tree = SyntaxTree::new();

        let left = tree.push(
            NodeKind::Identifier { name: "a".into() },
            Span::new(0, 1),
            root_scope,
        );
        let right = tree.push(
            NodeKind::Literal(LiteralValue::Number(1.0)),
            Span::new(5, 6),
            root_scope,
        );
        let logical = tree.push(
            NodeKind::Logical {
                operator: LogicalOperator::Or,
                left,
                right,
            },
            Span::new(0, 6),
            root_scope,
        );

        assert_eq!(tree.parent(left), Some(logical));
        assert_eq!(tree.parent(right), Some(logical));
        assert_eq!(tree.parent(logical), None);
        assert_eq!(tree.kind(logical).children(), vec![left, right]);
        assert_eq!(tree.kind(logical).type_name(), "LogicalExpression");
    }

    #[test]
    fn test_text_slices_source() {
        let scopes = ScopeTree::new();
        let mut tree = SyntaxTree::new();
        let id = tree.push(
            NodeKind::Identifier { name: "foo".into() },
            Span::new(4, 7),
            scopes.root(),
        );
        assert_eq!(tree.text("let foo = 1;", id), "foo");
    }
}
