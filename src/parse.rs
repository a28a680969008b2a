//! Source unit parsing.
//!
//! Parses JSX/TSX source with oxc and lowers it into the owned tree and scope
//! information the rules query.

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::ast::{NodeId, SyntaxTree};
use crate::error::{LintError, Result};
use crate::lowerer::Lowerer;
use crate::scope::{ScopeTree, VariableId};

/// One parsed file: its text, syntax tree and static binding information.
#[derive(Debug)]
pub struct SourceUnit {
    pub file: String,
    pub source: String,
    pub tree: SyntaxTree,
    pub scopes: ScopeTree,
}

impl SourceUnit {
    /// First textual line of the unit, used by directive gating. Lines break
    /// on `\n`, `\r`, U+2028 and U+2029.
    pub fn first_line(&self) -> &str {
        self.source
            .split(['\n', '\r', '\u{2028}', '\u{2029}'])
            .next()
            .unwrap_or("")
    }

    pub fn text(&self, id: NodeId) -> &str {
        self.tree.text(&self.source, id)
    }

    /// Variable named `name` visible from the scope `node` occurs in.
    pub fn lookup(&self, node: NodeId, name: &str) -> Option<VariableId> {
        self.scopes.lookup(self.tree.node(node).scope, name)
    }
}

pub fn parse_source(file: &str, source: &str) -> Result<SourceUnit> {
    let allocator = Allocator::default();
    let source_type = SourceType::default()
        .with_module(true)
        .with_typescript(true)
        .with_jsx(true);
    let ret = Parser::new(&allocator, source, source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(LintError::Parse {
            file: file.to_string(),
            message,
        });
    }

    let (tree, scopes) = Lowerer::new(source).lower(&ret.program);
    Ok(SourceUnit {
        file: file.to_string(),
        source: source.to_string(),
        tree,
        scopes,
    })
}
