//! Scope Tree
//!
//! Static binding information for one source unit: which declaration a name
//! resolves to, and every occurrence of that name. Mirrors the model of
//! ESLint's scope manager closely enough for origin resolution: declarations,
//! parameter bindings and assignment targets are references too.

use std::collections::HashMap;

use crate::ast::{NodeId, SyntaxTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Module,
    Function,
    Block,
}

#[derive(Debug)]
pub struct Scope {
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    variables: HashMap<String, VariableId>,
}

impl Scope {
    pub fn get(&self, name: &str) -> Option<VariableId> {
        self.variables.get(name).copied()
    }
}

/// One syntactic occurrence of a variable's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub identifier: NodeId,
}

#[derive(Debug)]
pub struct Variable {
    pub name: String,
    pub scope: ScopeId,
    /// Occurrences in source order.
    pub references: Vec<Reference>,
}

#[derive(Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    variables: Vec<Variable>,
    unresolved: Vec<NodeId>,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTree {
    /// Creates a tree holding only the module scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope {
                kind: ScopeKind::Module,
                parent: None,
                variables: HashMap::new(),
            }],
            variables: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    pub fn create_scope(&mut self, kind: ScopeKind, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            kind,
            parent: Some(parent),
            variables: HashMap::new(),
        });
        id
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0 as usize]
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.0 as usize]
    }

    /// Declares `name` in `scope`. Redeclaring returns the existing variable.
    pub fn declare(&mut self, scope: ScopeId, name: &str) -> VariableId {
        if let Some(existing) = self.scopes[scope.0 as usize].get(name) {
            return existing;
        }
        let id = VariableId(self.variables.len() as u32);
        self.variables.push(Variable {
            name: name.to_string(),
            scope,
            references: Vec::new(),
        });
        self.scopes[scope.0 as usize]
            .variables
            .insert(name.to_string(), id);
        id
    }

    /// Walks the scope chain outward from `scope`.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<VariableId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.scope(id);
            if let Some(var) = scope.get(name) {
                return Some(var);
            }
            current = scope.parent;
        }
        None
    }

    /// Nearest enclosing function (or module) scope; `var` and function
    /// declarations hoist there.
    pub fn hoist_target(&self, scope: ScopeId) -> ScopeId {
        let mut current = scope;
        loop {
            let s = self.scope(current);
            match (s.kind, s.parent) {
                (ScopeKind::Block, Some(parent)) => current = parent,
                _ => return current,
            }
        }
    }

    pub fn add_reference(&mut self, variable: VariableId, identifier: NodeId) {
        self.variables[variable.0 as usize]
            .references
            .push(Reference { identifier });
    }

    pub fn add_unresolved(&mut self, identifier: NodeId) {
        self.unresolved.push(identifier);
    }

    /// Identifiers whose name matched no declaration in their scope chain.
    pub fn unresolved(&self) -> &[NodeId] {
        &self.unresolved
    }

    pub fn variables(&self) -> impl Iterator<Item = (VariableId, &Variable)> {
        self.variables
            .iter()
            .enumerate()
            .map(|(i, v)| (VariableId(i as u32), v))
    }

    /// Puts every variable's references into source order.
    pub fn sort_references(&mut self, tree: &SyntaxTree) {
        for variable in &mut self.variables {
            variable
                .references
                .sort_by_key(|r| tree.span(r.identifier).start);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_walks_scope_chain() {
        let mut scopes = ScopeTree::new();
        let module = scopes.root();
        let func = scopes.create_scope(ScopeKind::Function, module);
        let block = scopes.create_scope(ScopeKind::Block, func);

        let outer = scopes.declare(module, "x");
        let inner = scopes.declare(block, "x");

        assert_eq!(scopes.lookup(block, "x"), Some(inner));
        assert_eq!(scopes.lookup(func, "x"), Some(outer));
        assert_eq!(scopes.lookup(block, "y"), None);
    }

    #[test]
    fn test_declare_is_idempotent_per_scope() {
        let mut scopes = ScopeTree::new();
        let module = scopes.root();
        let a = scopes.declare(module, "a");
        let b = scopes.declare(module, "a");
        assert_eq!(a, b);
        assert_eq!(scopes.variables().count(), 1);
    }

    #[test]
    fn test_hoist_target_skips_blocks() {
        let mut scopes = ScopeTree::new();
        let module = scopes.root();
        let func = scopes.create_scope(ScopeKind::Function, module);
        let block = scopes.create_scope(ScopeKind::Block, func);
        let nested = scopes.create_scope(ScopeKind::Block, block);

        assert_eq!(scopes.hoist_target(nested), func);
        assert_eq!(scopes.hoist_target(module), module);
    }
}
