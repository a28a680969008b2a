//! Oxc AST Lowering for JSX Origin Lint
//!
//! Lowers an oxc `Program` into the owned [`SyntaxTree`] arena and builds the
//! [`ScopeTree`] on the way down. Binding identifiers are attached to their
//! variable immediately; identifier references are resolved once the whole
//! module has been lowered, so hoisted and later declarations are visible.
//!
//! Parentheses and TS-only wrappers (`as`, `satisfies`, `!`, `<T>x`) are transparent,
//! matching the ESTree shape the rules were written against.

use oxc_ast::ast::*;
use oxc_ecmascript::BoundNames;
use oxc_span::{GetSpan, Span};

use crate::ast::{FunctionKind, LiteralValue, MemberProperty, NodeId, NodeKind, SyntaxTree};
use crate::scope::{ScopeId, ScopeKind, ScopeTree};

pub struct Lowerer<'s> {
    source: &'s str,
    tree: SyntaxTree,
    scopes: ScopeTree,
    scope: ScopeId,
    /// Identifier references awaiting resolution, with the scope they occur in.
    pending: Vec<(NodeId, ScopeId)>,
}

impl<'s> Lowerer<'s> {
    pub fn new(source: &'s str) -> Self {
        let scopes = ScopeTree::new();
        let scope = scopes.root();
        Self {
            source,
            tree: SyntaxTree::new(),
            scopes,
            scope,
            pending: Vec::new(),
        }
    }

    /// Lowers the program and resolves every pending reference.
    pub fn lower(mut self, program: &Program<'_>) -> (SyntaxTree, ScopeTree) {
        let mut body = Vec::with_capacity(program.body.len());
        for stmt in &program.body {
            body.push(self.lower_statement(stmt));
        }
        let root = self.push(NodeKind::Program { body }, program.span);
        self.tree.set_root(root);

        for (node, scope) in std::mem::take(&mut self.pending) {
            let name = match self.tree.kind(node) {
                NodeKind::Identifier { name } => name.as_str(),
                _ => continue,
            };
            match self.scopes.lookup(scope, name) {
                Some(variable) => self.scopes.add_reference(variable, node),
                None => self.scopes.add_unresolved(node),
            }
        }
        self.scopes.sort_references(&self.tree);

        (self.tree, self.scopes)
    }

    fn push(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.tree.push(kind, span, self.scope)
    }

    fn other(&mut self, label: &'static str, children: Vec<NodeId>, span: Span) -> NodeId {
        self.push(NodeKind::Other { label, children }, span)
    }

    fn enter_scope(&mut self, kind: ScopeKind) -> ScopeId {
        let outer = self.scope;
        self.scope = self.scopes.create_scope(kind, outer);
        outer
    }

    fn leave_scope(&mut self, outer: ScopeId) {
        self.scope = outer;
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // IDENTIFIERS & BINDINGS
    // ═══════════════════════════════════════════════════════════════════════════

    fn reference(&mut self, name: &str, span: Span) -> NodeId {
        let id = self.push(
            NodeKind::Identifier {
                name: name.to_string(),
            },
            span,
        );
        self.pending.push((id, self.scope));
        id
    }

    fn binding_identifier(&mut self, ident: &BindingIdentifier<'_>, target: ScopeId) -> NodeId {
        let name = ident.name.to_string();
        let variable = self.scopes.declare(target, &name);
        let id = self.push(NodeKind::Identifier { name }, ident.span);
        self.scopes.add_reference(variable, id);
        id
    }

    fn lower_binding(&mut self, pattern: &BindingPattern<'_>, target: ScopeId) -> NodeId {
        match pattern {
            BindingPattern::BindingIdentifier(ident) => self.binding_identifier(ident, target),
            BindingPattern::ObjectPattern(obj) => {
                let mut children = Vec::new();
                for prop in &obj.properties {
                    if prop.computed {
                        if let Some(key) = prop.key.as_expression() {
                            children.push(self.lower_expression(key));
                        }
                    }
                    children.push(self.lower_binding(&prop.value, target));
                }
                if let Some(rest) = &obj.rest {
                    children.push(self.lower_binding(&rest.argument, target));
                }
                self.other("ObjectPattern", children, obj.span)
            }
            BindingPattern::ArrayPattern(arr) => {
                let mut children = Vec::new();
                for elem in arr.elements.iter().flatten() {
                    children.push(self.lower_binding(elem, target));
                }
                if let Some(rest) = &arr.rest {
                    children.push(self.lower_binding(&rest.argument, target));
                }
                self.other("ArrayPattern", children, arr.span)
            }
            BindingPattern::AssignmentPattern(assign) => {
                let left = self.lower_binding(&assign.left, target);
                let right = self.lower_expression(&assign.right);
                self.push(NodeKind::AssignmentPattern { left, right }, assign.span)
            }
        }
    }

    fn lower_assignment_target(&mut self, target: &AssignmentTarget<'_>) -> NodeId {
        match target {
            AssignmentTarget::AssignmentTargetIdentifier(ident) => {
                self.reference(&ident.name, ident.span)
            }
            AssignmentTarget::StaticMemberExpression(member) => self.lower_static_member(member),
            AssignmentTarget::ComputedMemberExpression(member) => {
                self.lower_computed_member(member)
            }
            AssignmentTarget::ArrayAssignmentTarget(arr) => {
                let mut children = Vec::new();
                for elem in arr.elements.iter().flatten() {
                    children.push(self.lower_assignment_target_maybe_default(elem));
                }
                if let Some(rest) = &arr.rest {
                    children.push(self.lower_assignment_target(&rest.target));
                }
                self.other("ArrayPattern", children, arr.span)
            }
            AssignmentTarget::ObjectAssignmentTarget(obj) => {
                let mut children = Vec::new();
                for prop in &obj.properties {
                    children.push(self.lower_assignment_target_property(prop));
                }
                if let Some(rest) = &obj.rest {
                    children.push(self.lower_assignment_target(&rest.target));
                }
                self.other("ObjectPattern", children, obj.span)
            }
            other => self.other("AssignmentTargetPattern", vec![], other.span()),
        }
    }

    /// `[a = x] = ..` and `{ k: a = x } = ..` lower to `AssignmentPattern`.
    fn lower_assignment_target_maybe_default(
        &mut self,
        target: &AssignmentTargetMaybeDefault<'_>,
    ) -> NodeId {
        match target {
            AssignmentTargetMaybeDefault::AssignmentTargetWithDefault(with_default) => {
                let left = self.lower_assignment_target(&with_default.binding);
                let right = self.lower_expression(&with_default.init);
                self.push(NodeKind::AssignmentPattern { left, right }, with_default.span)
            }
            other => match other.as_assignment_target() {
                Some(inner) => self.lower_assignment_target(inner),
                None => self.other("AssignmentTargetPattern", vec![], other.span()),
            },
        }
    }

    fn lower_assignment_target_property(&mut self, prop: &AssignmentTargetProperty<'_>) -> NodeId {
        match prop {
            AssignmentTargetProperty::AssignmentTargetPropertyIdentifier(shorthand) => {
                let left = self.reference(&shorthand.binding.name, shorthand.binding.span);
                match &shorthand.init {
                    Some(init) => {
                        let right = self.lower_expression(init);
                        self.push(NodeKind::AssignmentPattern { left, right }, shorthand.span)
                    }
                    None => left,
                }
            }
            AssignmentTargetProperty::AssignmentTargetPropertyProperty(property) => {
                let mut children = Vec::new();
                if let Some(key) = property.name.as_expression() {
                    children.push(self.lower_expression(key));
                }
                children.push(self.lower_assignment_target_maybe_default(&property.binding));
                self.other("Property", children, property.span)
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STATEMENTS
    // ═══════════════════════════════════════════════════════════════════════════

    fn lower_statements(&mut self, stmts: &[Statement<'_>]) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(stmts.len());
        for stmt in stmts {
            out.push(self.lower_statement(stmt));
        }
        out
    }

    fn lower_block(&mut self, block: &BlockStatement<'_>) -> NodeId {
        let outer = self.enter_scope(ScopeKind::Block);
        let body = self.lower_statements(&block.body);
        self.leave_scope(outer);
        self.other("BlockStatement", body, block.span)
    }

    fn lower_statement(&mut self, stmt: &Statement<'_>) -> NodeId {
        match stmt {
            Statement::VariableDeclaration(decl) => self.lower_variable_declaration(decl),
            Statement::FunctionDeclaration(func) => {
                self.lower_function(func, FunctionKind::Declaration)
            }
            Statement::ClassDeclaration(class) => self.lower_class(class, true),
            Statement::ExpressionStatement(expr_stmt) => {
                let expr = self.lower_expression(&expr_stmt.expression);
                self.other("ExpressionStatement", vec![expr], expr_stmt.span)
            }
            Statement::ReturnStatement(ret) => {
                let children = match &ret.argument {
                    Some(arg) => vec![self.lower_expression(arg)],
                    None => vec![],
                };
                self.other("ReturnStatement", children, ret.span)
            }
            Statement::ThrowStatement(throw) => {
                let arg = self.lower_expression(&throw.argument);
                self.other("ThrowStatement", vec![arg], throw.span)
            }
            Statement::BlockStatement(block) => self.lower_block(block),
            Statement::IfStatement(if_stmt) => {
                let mut children = vec![
                    self.lower_expression(&if_stmt.test),
                    self.lower_statement(&if_stmt.consequent),
                ];
                if let Some(alt) = &if_stmt.alternate {
                    children.push(self.lower_statement(alt));
                }
                self.other("IfStatement", children, if_stmt.span)
            }
            Statement::ForStatement(for_stmt) => {
                let outer = self.enter_scope(ScopeKind::Block);
                let mut children = Vec::new();
                match &for_stmt.init {
                    Some(ForStatementInit::VariableDeclaration(decl)) => {
                        children.push(self.lower_variable_declaration(decl));
                    }
                    Some(init) => {
                        if let Some(expr) = init.as_expression() {
                            children.push(self.lower_expression(expr));
                        }
                    }
                    None => {}
                }
                if let Some(test) = &for_stmt.test {
                    children.push(self.lower_expression(test));
                }
                if let Some(update) = &for_stmt.update {
                    children.push(self.lower_expression(update));
                }
                children.push(self.lower_statement(&for_stmt.body));
                self.leave_scope(outer);
                self.other("ForStatement", children, for_stmt.span)
            }
            Statement::ForInStatement(for_in) => {
                let outer = self.enter_scope(ScopeKind::Block);
                let mut children = Vec::new();
                if let ForStatementLeft::VariableDeclaration(decl) = &for_in.left {
                    children.push(self.lower_variable_declaration(decl));
                }
                children.push(self.lower_expression(&for_in.right));
                children.push(self.lower_statement(&for_in.body));
                self.leave_scope(outer);
                self.other("ForInStatement", children, for_in.span)
            }
            Statement::ForOfStatement(for_of) => {
                let outer = self.enter_scope(ScopeKind::Block);
                let mut children = Vec::new();
                if let ForStatementLeft::VariableDeclaration(decl) = &for_of.left {
                    children.push(self.lower_variable_declaration(decl));
                }
                children.push(self.lower_expression(&for_of.right));
                children.push(self.lower_statement(&for_of.body));
                self.leave_scope(outer);
                self.other("ForOfStatement", children, for_of.span)
            }
            Statement::WhileStatement(while_stmt) => {
                let test = self.lower_expression(&while_stmt.test);
                let body = self.lower_statement(&while_stmt.body);
                self.other("WhileStatement", vec![test, body], while_stmt.span)
            }
            Statement::DoWhileStatement(do_while) => {
                let body = self.lower_statement(&do_while.body);
                let test = self.lower_expression(&do_while.test);
                self.other("DoWhileStatement", vec![body, test], do_while.span)
            }
            Statement::LabeledStatement(labeled) => {
                let body = self.lower_statement(&labeled.body);
                self.other("LabeledStatement", vec![body], labeled.span)
            }
            Statement::SwitchStatement(switch) => {
                let mut children = vec![self.lower_expression(&switch.discriminant)];
                let outer = self.enter_scope(ScopeKind::Block);
                for case in &switch.cases {
                    let mut case_children = Vec::new();
                    if let Some(test) = &case.test {
                        case_children.push(self.lower_expression(test));
                    }
                    case_children.extend(self.lower_statements(&case.consequent));
                    children.push(self.other("SwitchCase", case_children, case.span));
                }
                self.leave_scope(outer);
                self.other("SwitchStatement", children, switch.span)
            }
            Statement::TryStatement(try_stmt) => {
                let mut children = vec![self.lower_block(&try_stmt.block)];
                if let Some(handler) = &try_stmt.handler {
                    let outer = self.enter_scope(ScopeKind::Block);
                    let mut clause = Vec::new();
                    if let Some(param) = &handler.param {
                        let target = self.scope;
                        clause.push(self.lower_binding(&param.pattern, target));
                    }
                    clause.push(self.lower_block(&handler.body));
                    self.leave_scope(outer);
                    children.push(self.other("CatchClause", clause, handler.span));
                }
                if let Some(finalizer) = &try_stmt.finalizer {
                    children.push(self.lower_block(finalizer));
                }
                self.other("TryStatement", children, try_stmt.span)
            }
            Statement::ExportNamedDeclaration(export) => {
                let children = match &export.declaration {
                    Some(Declaration::VariableDeclaration(decl)) => {
                        vec![self.lower_variable_declaration(decl)]
                    }
                    Some(Declaration::FunctionDeclaration(func)) => {
                        vec![self.lower_function(func, FunctionKind::Declaration)]
                    }
                    Some(Declaration::ClassDeclaration(class)) => {
                        vec![self.lower_class(class, true)]
                    }
                    _ => vec![],
                };
                self.other("ExportNamedDeclaration", children, export.span)
            }
            Statement::ExportDefaultDeclaration(export) => {
                let child = match &export.declaration {
                    ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                        Some(self.lower_function(func, FunctionKind::Declaration))
                    }
                    ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                        Some(self.lower_class(class, true))
                    }
                    kind => kind.as_expression().map(|expr| self.lower_expression(expr)),
                };
                self.other(
                    "ExportDefaultDeclaration",
                    child.into_iter().collect(),
                    export.span,
                )
            }
            Statement::TSModuleDeclaration(module) => {
                let outer = self.enter_scope(ScopeKind::Function);
                let body = match &module.body {
                    Some(TSModuleDeclarationBody::TSModuleBlock(block)) => {
                        self.lower_statements(&block.body)
                    }
                    _ => vec![],
                };
                self.leave_scope(outer);
                self.other("TSModuleDeclaration", body, module.span)
            }
            Statement::WithStatement(with) => {
                let object = self.lower_expression(&with.object);
                let body = self.lower_statement(&with.body);
                self.other("WithStatement", vec![object, body], with.span)
            }
            other => self.other("Statement", vec![], other.span()),
        }
    }

    fn lower_variable_declaration(&mut self, decl: &VariableDeclaration<'_>) -> NodeId {
        let target = if decl.kind == VariableDeclarationKind::Var {
            self.scopes.hoist_target(self.scope)
        } else {
            self.scope
        };
        let mut declarators = Vec::with_capacity(decl.declarations.len());
        for declarator in &decl.declarations {
            let id = self.lower_binding(&declarator.id, target);
            let init = match &declarator.init {
                Some(init) => Some(self.lower_expression(init)),
                None => None,
            };
            declarators.push(
                self.push(NodeKind::VariableDeclarator { id, init }, declarator.span),
            );
        }
        self.other("VariableDeclaration", declarators, decl.span)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // FUNCTIONS & CLASSES
    // ═══════════════════════════════════════════════════════════════════════════

    fn lower_function(&mut self, func: &Function<'_>, kind: FunctionKind) -> NodeId {
        let declared_outside = match (kind, &func.id) {
            (FunctionKind::Declaration, Some(ident)) => {
                let target = self.scope;
                Some(self.binding_identifier(ident, target))
            }
            _ => None,
        };

        let outer = self.enter_scope(ScopeKind::Function);
        let id = match (kind, &func.id) {
            (FunctionKind::Declaration, _) => declared_outside,
            (_, Some(ident)) => {
                let target = self.scope;
                Some(self.binding_identifier(ident, target))
            }
            (_, None) => None,
        };
        let params = self.lower_params(&func.params);
        let body = match &func.body {
            Some(body) => self.lower_statements(&body.statements),
            None => vec![],
        };
        self.leave_scope(outer);

        self.push(
            NodeKind::Function {
                kind,
                id,
                params,
                body,
            },
            func.span,
        )
    }

    fn lower_arrow(&mut self, arrow: &ArrowFunctionExpression<'_>) -> NodeId {
        let outer = self.enter_scope(ScopeKind::Function);
        let params = self.lower_params(&arrow.params);
        let body = self.lower_statements(&arrow.body.statements);
        self.leave_scope(outer);

        self.push(
            NodeKind::Function {
                kind: FunctionKind::Arrow,
                id: None,
                params,
                body,
            },
            arrow.span,
        )
    }

    /// Parameters with a default lower to `AssignmentPattern { binding, default }`.
    fn lower_params(&mut self, params: &FormalParameters<'_>) -> Vec<NodeId> {
        let target = self.scope;
        let mut out = Vec::with_capacity(params.items.len() + 1);
        for param in &params.items {
            let binding = self.lower_binding(&param.pattern, target);
            let lowered = match &param.initializer {
                Some(init) => {
                    let right = self.lower_expression(init);
                    self.push(
                        NodeKind::AssignmentPattern {
                            left: binding,
                            right,
                        },
                        param.span,
                    )
                }
                None => binding,
            };
            out.push(lowered);
        }

        // Names bound by the items are declared already; what is left is the rest parameter.
        let mut rest_names = Vec::new();
        params.bound_names(&mut |ident| {
            if self.scopes.scope(target).get(&ident.name).is_none() {
                rest_names.push((ident.name.to_string(), ident.span));
            }
        });
        if !rest_names.is_empty() {
            let mut children = Vec::with_capacity(rest_names.len());
            for (name, span) in rest_names {
                let variable = self.scopes.declare(target, &name);
                let id = self.push(NodeKind::Identifier { name }, span);
                self.scopes.add_reference(variable, id);
                children.push(id);
            }
            let span = params.rest.as_ref().map_or(params.span, |rest| rest.span());
            out.push(self.other("RestElement", children, span));
        }
        out
    }

    fn lower_class(&mut self, class: &Class<'_>, is_declaration: bool) -> NodeId {
        let mut children = Vec::new();
        if is_declaration {
            if let Some(ident) = &class.id {
                let target = self.scope;
                children.push(self.binding_identifier(ident, target));
            }
        }
        if let Some(super_class) = &class.super_class {
            children.push(self.lower_expression(super_class));
        }
        for element in &class.body.body {
            match element {
                ClassElement::MethodDefinition(method) => {
                    children.push(self.lower_function(&method.value, FunctionKind::Expression));
                }
                ClassElement::PropertyDefinition(prop) => {
                    if let Some(value) = &prop.value {
                        children.push(self.lower_expression(value));
                    }
                }
                ClassElement::StaticBlock(block) => {
                    let outer = self.enter_scope(ScopeKind::Function);
                    let body = self.lower_statements(&block.body);
                    self.leave_scope(outer);
                    children.push(self.other("StaticBlock", body, block.span));
                }
                _ => {}
            }
        }
        let label = if is_declaration {
            "ClassDeclaration"
        } else {
            "ClassExpression"
        };
        self.other(label, children, class.span)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // EXPRESSIONS
    // ═══════════════════════════════════════════════════════════════════════════

    fn lower_expression(&mut self, expr: &Expression<'_>) -> NodeId {
        match expr {
            Expression::BooleanLiteral(lit) => {
                self.push(NodeKind::Literal(LiteralValue::Boolean(lit.value)), lit.span)
            }
            Expression::NullLiteral(lit) => {
                self.push(NodeKind::Literal(LiteralValue::Null), lit.span)
            }
            Expression::NumericLiteral(lit) => {
                self.push(NodeKind::Literal(LiteralValue::Number(lit.value)), lit.span)
            }
            Expression::StringLiteral(lit) => self.push(
                NodeKind::Literal(LiteralValue::String(lit.value.to_string())),
                lit.span,
            ),
            Expression::BigIntLiteral(lit) => {
                let raw = self.slice(lit.span);
                self.push(NodeKind::Literal(LiteralValue::BigInt(raw)), lit.span)
            }
            Expression::RegExpLiteral(lit) => {
                let raw = self.slice(lit.span);
                self.push(NodeKind::Literal(LiteralValue::RegExp(raw)), lit.span)
            }
            Expression::TemplateLiteral(tpl) => {
                let mut children = Vec::with_capacity(tpl.expressions.len());
                for e in &tpl.expressions {
                    children.push(self.lower_expression(e));
                }
                self.other("TemplateLiteral", children, tpl.span)
            }
            Expression::TaggedTemplateExpression(tagged) => {
                let mut children = vec![self.lower_expression(&tagged.tag)];
                for e in &tagged.quasi.expressions {
                    children.push(self.lower_expression(e));
                }
                self.other("TaggedTemplateExpression", children, tagged.span)
            }
            Expression::Identifier(ident) => self.reference(&ident.name, ident.span),
            Expression::LogicalExpression(logical) => {
                let left = self.lower_expression(&logical.left);
                let right = self.lower_expression(&logical.right);
                self.push(
                    NodeKind::Logical {
                        operator: logical.operator,
                        left,
                        right,
                    },
                    logical.span,
                )
            }
            Expression::ConditionalExpression(cond) => {
                let test = self.lower_expression(&cond.test);
                let consequent = self.lower_expression(&cond.consequent);
                let alternate = self.lower_expression(&cond.alternate);
                self.push(
                    NodeKind::Conditional {
                        test,
                        consequent,
                        alternate,
                    },
                    cond.span,
                )
            }
            Expression::CallExpression(call) => self.lower_call(call),
            Expression::NewExpression(new_expr) => {
                let callee = self.lower_expression(&new_expr.callee);
                let arguments = self.lower_arguments(&new_expr.arguments);
                self.push(NodeKind::New { callee, arguments }, new_expr.span)
            }
            Expression::StaticMemberExpression(member) => self.lower_static_member(member),
            Expression::ComputedMemberExpression(member) => self.lower_computed_member(member),
            Expression::PrivateFieldExpression(member) => {
                let object = self.lower_expression(&member.object);
                self.push(
                    NodeKind::Member {
                        object,
                        property: MemberProperty::Private(member.field.name.to_string()),
                    },
                    member.span,
                )
            }
            Expression::ChainExpression(chain) => {
                let inner = match &chain.expression {
                    ChainElement::CallExpression(call) => vec![self.lower_call(call)],
                    ChainElement::StaticMemberExpression(member) => {
                        vec![self.lower_static_member(member)]
                    }
                    ChainElement::ComputedMemberExpression(member) => {
                        vec![self.lower_computed_member(member)]
                    }
                    _ => vec![],
                };
                self.other("ChainExpression", inner, chain.span)
            }
            Expression::AssignmentExpression(assign) => {
                let left = self.lower_assignment_target(&assign.left);
                let right = self.lower_expression(&assign.right);
                self.push(
                    NodeKind::Assignment {
                        operator: assign.operator,
                        left,
                        right,
                    },
                    assign.span,
                )
            }
            Expression::ArrowFunctionExpression(arrow) => self.lower_arrow(arrow),
            Expression::FunctionExpression(func) => {
                self.lower_function(func, FunctionKind::Expression)
            }
            Expression::ClassExpression(class) => self.lower_class(class, false),
            Expression::ObjectExpression(obj) => {
                let mut properties = Vec::with_capacity(obj.properties.len());
                for prop in &obj.properties {
                    let id = match prop {
                        ObjectPropertyKind::ObjectProperty(p) => {
                            let mut children = Vec::new();
                            if p.computed {
                                if let Some(key) = p.key.as_expression() {
                                    children.push(self.lower_expression(key));
                                }
                            }
                            children.push(self.lower_expression(&p.value));
                            self.other("Property", children, p.span)
                        }
                        ObjectPropertyKind::SpreadProperty(spread) => {
                            let arg = self.lower_expression(&spread.argument);
                            self.other("SpreadElement", vec![arg], spread.span)
                        }
                    };
                    properties.push(id);
                }
                self.push(NodeKind::Object { properties }, obj.span)
            }
            Expression::ArrayExpression(arr) => {
                let mut elements = Vec::with_capacity(arr.elements.len());
                for elem in &arr.elements {
                    match elem {
                        ArrayExpressionElement::SpreadElement(spread) => {
                            let arg = self.lower_expression(&spread.argument);
                            elements.push(self.other("SpreadElement", vec![arg], spread.span));
                        }
                        ArrayExpressionElement::Elision(_) => {}
                        _ => {
                            if let Some(e) = elem.as_expression() {
                                elements.push(self.lower_expression(e));
                            }
                        }
                    }
                }
                self.push(NodeKind::Array { elements }, arr.span)
            }
            Expression::JSXElement(element) => self.lower_jsx_element(element),
            Expression::JSXFragment(fragment) => self.lower_jsx_fragment(fragment),
            Expression::ParenthesizedExpression(paren) => self.lower_expression(&paren.expression),
            Expression::TSAsExpression(as_expr) => self.lower_expression(&as_expr.expression),
            Expression::TSSatisfiesExpression(sat) => self.lower_expression(&sat.expression),
            Expression::TSNonNullExpression(nn) => self.lower_expression(&nn.expression),
            Expression::SequenceExpression(seq) => {
                let mut children = Vec::with_capacity(seq.expressions.len());
                for e in &seq.expressions {
                    children.push(self.lower_expression(e));
                }
                self.other("SequenceExpression", children, seq.span)
            }
            Expression::UnaryExpression(unary) => {
                let arg = self.lower_expression(&unary.argument);
                self.other("UnaryExpression", vec![arg], unary.span)
            }
            Expression::BinaryExpression(bin) => {
                let left = self.lower_expression(&bin.left);
                let right = self.lower_expression(&bin.right);
                self.other("BinaryExpression", vec![left, right], bin.span)
            }
            Expression::UpdateExpression(update) => {
                let children = match &update.argument {
                    SimpleAssignmentTarget::AssignmentTargetIdentifier(ident) => {
                        vec![self.reference(&ident.name, ident.span)]
                    }
                    _ => vec![],
                };
                self.other("UpdateExpression", children, update.span)
            }
            Expression::AwaitExpression(await_expr) => {
                let arg = self.lower_expression(&await_expr.argument);
                self.other("AwaitExpression", vec![arg], await_expr.span)
            }
            Expression::YieldExpression(yield_expr) => {
                let children = match &yield_expr.argument {
                    Some(arg) => vec![self.lower_expression(arg)],
                    None => vec![],
                };
                self.other("YieldExpression", children, yield_expr.span)
            }
            Expression::ThisExpression(this) => self.other("ThisExpression", vec![], this.span),
            Expression::TSTypeAssertion(assertion) => self.lower_expression(&assertion.expression),
            Expression::TSInstantiationExpression(inst) => self.lower_expression(&inst.expression),
            Expression::ImportExpression(import) => {
                let source = self.lower_expression(&import.source);
                self.other("ImportExpression", vec![source], import.span)
            }
            other => self.other("Expression", vec![], other.span()),
        }
    }

    fn lower_call(&mut self, call: &CallExpression<'_>) -> NodeId {
        let callee = self.lower_expression(&call.callee);
        let arguments = self.lower_arguments(&call.arguments);
        self.push(NodeKind::Call { callee, arguments }, call.span)
    }

    fn lower_arguments(&mut self, arguments: &[Argument<'_>]) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(arguments.len());
        for arg in arguments {
            if let Argument::SpreadElement(spread) = arg {
                let inner = self.lower_expression(&spread.argument);
                out.push(self.other("SpreadElement", vec![inner], spread.span));
            } else if let Some(e) = arg.as_expression() {
                out.push(self.lower_expression(e));
            }
        }
        out
    }

    fn lower_static_member(&mut self, member: &StaticMemberExpression<'_>) -> NodeId {
        let object = self.lower_expression(&member.object);
        self.push(
            NodeKind::Member {
                object,
                property: MemberProperty::Static(member.property.name.to_string()),
            },
            member.span,
        )
    }

    fn lower_computed_member(&mut self, member: &ComputedMemberExpression<'_>) -> NodeId {
        let object = self.lower_expression(&member.object);
        let property = self.lower_expression(&member.expression);
        self.push(
            NodeKind::Member {
                object,
                property: MemberProperty::Computed(property),
            },
            member.span,
        )
    }

    fn slice(&self, span: Span) -> String {
        self.source
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
            .to_string()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // JSX
    // ═══════════════════════════════════════════════════════════════════════════

    fn lower_jsx_element(&mut self, element: &JSXElement<'_>) -> NodeId {
        let opening = self.lower_jsx_opening_element(&element.opening_element);
        let children = self.lower_jsx_children(&element.children);
        self.push(NodeKind::JsxElement { opening, children }, element.span)
    }

    fn lower_jsx_fragment(&mut self, fragment: &JSXFragment<'_>) -> NodeId {
        let children = self.lower_jsx_children(&fragment.children);
        self.push(NodeKind::JsxFragment { children }, fragment.span)
    }

    fn lower_jsx_opening_element(&mut self, opening: &JSXOpeningElement<'_>) -> NodeId {
        let name = self.lower_jsx_element_name(&opening.name);
        let mut attributes = Vec::with_capacity(opening.attributes.len());
        for item in &opening.attributes {
            match item {
                JSXAttributeItem::Attribute(attr) => {
                    attributes.push(self.lower_jsx_attribute(attr));
                }
                JSXAttributeItem::SpreadAttribute(spread) => {
                    let arg = self.lower_expression(&spread.argument);
                    attributes.push(self.other("JSXSpreadAttribute", vec![arg], spread.span));
                }
            }
        }
        self.push(NodeKind::JsxOpeningElement { name, attributes }, opening.span)
    }

    fn lower_jsx_element_name(&mut self, name: &JSXElementName<'_>) -> NodeId {
        match name {
            JSXElementName::Identifier(id) => self.push(
                NodeKind::JsxIdentifier {
                    name: id.name.to_string(),
                },
                id.span,
            ),
            JSXElementName::IdentifierReference(id) => self.push(
                NodeKind::JsxIdentifier {
                    name: id.name.to_string(),
                },
                id.span,
            ),
            JSXElementName::NamespacedName(ns) => self.push(
                NodeKind::JsxNamespacedName {
                    namespace: ns.namespace.name.to_string(),
                    name: ns.name.name.to_string(),
                },
                ns.span,
            ),
            JSXElementName::MemberExpression(member) => {
                let path = self.slice(member.span);
                self.push(NodeKind::JsxMemberExpression { path }, member.span)
            }
            JSXElementName::ThisExpression(this) => self.push(
                NodeKind::JsxIdentifier {
                    name: "this".to_string(),
                },
                this.span,
            ),
        }
    }

    fn lower_jsx_attribute(&mut self, attr: &JSXAttribute<'_>) -> NodeId {
        let name = match &attr.name {
            JSXAttributeName::Identifier(id) => id.name.to_string(),
            JSXAttributeName::NamespacedName(ns) => {
                format!("{}:{}", ns.namespace.name, ns.name.name)
            }
        };
        let value = match &attr.value {
            Some(JSXAttributeValue::StringLiteral(lit)) => Some(self.push(
                NodeKind::Literal(LiteralValue::String(lit.value.to_string())),
                lit.span,
            )),
            Some(JSXAttributeValue::ExpressionContainer(container)) => {
                Some(self.lower_jsx_expression_container(container))
            }
            Some(JSXAttributeValue::Element(element)) => Some(self.lower_jsx_element(element)),
            Some(JSXAttributeValue::Fragment(fragment)) => {
                Some(self.lower_jsx_fragment(fragment))
            }
            None => None,
        };
        self.push(NodeKind::JsxAttribute { name, value }, attr.span)
    }

    fn lower_jsx_expression_container(
        &mut self,
        container: &JSXExpressionContainer<'_>,
    ) -> NodeId {
        let expression = match container.expression.as_expression() {
            Some(expr) => self.lower_expression(expr),
            None => self.other("JSXEmptyExpression", vec![], container.span),
        };
        self.push(NodeKind::JsxExpressionContainer { expression }, container.span)
    }

    fn lower_jsx_children(&mut self, children: &[JSXChild<'_>]) -> Vec<NodeId> {
        let mut out = Vec::new();
        for child in children {
            match child {
                JSXChild::Element(element) => out.push(self.lower_jsx_element(element)),
                JSXChild::Fragment(fragment) => out.push(self.lower_jsx_fragment(fragment)),
                JSXChild::ExpressionContainer(container) => {
                    out.push(self.lower_jsx_expression_container(container));
                }
                JSXChild::Spread(spread) => {
                    let expr = self.lower_expression(&spread.expression);
                    out.push(self.other("JSXSpreadChild", vec![expr], spread.span));
                }
                JSXChild::Text(_) => {}
            }
        }
        out
    }
}
