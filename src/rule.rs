//! Rule Factory
//!
//! Builds attribute rules from a description, a message and a violation
//! predicate. Every rule produced here shares the same handler: directive
//! gating, value-shape gating, native element exemption, then origin
//! resolution with the predicate applied to each terminal candidate.

use serde::Serialize;
use serde_json::Value;

use crate::ast::{NodeId, NodeKind, SyntaxTree};
use crate::config::{RuleOptions, Settings, OPTIONS_SCHEMA};
use crate::diagnostic::Diagnostic;
use crate::native::{element_tag_name, is_native_tag};
use crate::parse::SourceUnit;
use crate::resolve::resolve;

pub const USE_CLIENT_DIRECTIVE: &str = "use client";

type ViolationPredicate = dyn Fn(&SyntaxTree, NodeId) -> bool + Send + Sync;

// ═══════════════════════════════════════════════════════════════════════════════
// METADATA
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDocs {
    pub description: String,
    pub category: String,
    pub recommended: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMeta {
    pub docs: RuleDocs,
    pub schema: Value,
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONTEXT
// ═══════════════════════════════════════════════════════════════════════════════

/// What a handler sees while checking one unit: the unit itself, the rule's
/// options, the ambient settings, and the report sink.
pub struct RuleContext<'u> {
    pub rule: &'u str,
    pub unit: &'u SourceUnit,
    pub options: &'u RuleOptions,
    pub settings: &'u Settings,
    diagnostics: Vec<Diagnostic>,
}

impl<'u> RuleContext<'u> {
    pub fn new(
        rule: &'u str,
        unit: &'u SourceUnit,
        options: &'u RuleOptions,
        settings: &'u Settings,
    ) -> Self {
        Self {
            rule,
            unit,
            options,
            settings,
            diagnostics: Vec::new(),
        }
    }

    pub fn report(&mut self, node: NodeId, message: &str) {
        let unit = self.unit;
        self.diagnostics.push(Diagnostic::new(
            self.rule,
            message,
            &unit.file,
            &unit.source,
            unit.tree.span(node),
        ));
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// False when `next` is enabled and the unit does not open with a
    /// `"use client"` directive; no attribute of the unit is checked then.
    pub fn directive_gate_open(&self) -> bool {
        !self.options.next_enabled(self.settings)
            || self.unit.first_line().trim().contains(USE_CLIENT_DIRECTIVE)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RULE DEFINITION
// ═══════════════════════════════════════════════════════════════════════════════

pub struct RuleDefinition {
    pub meta: RuleMeta,
    message: String,
    is_violation: Box<ViolationPredicate>,
}

impl std::fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("meta", &self.meta)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Composes a complete rule. `is_violation` classifies one terminal candidate.
pub fn create_rule<F>(description: &str, message: &str, is_violation: F) -> RuleDefinition
where
    F: Fn(&SyntaxTree, NodeId) -> bool + Send + Sync + 'static,
{
    RuleDefinition {
        meta: RuleMeta {
            docs: RuleDocs {
                description: description.to_string(),
                category: String::new(),
                recommended: true,
            },
            schema: OPTIONS_SCHEMA.clone(),
        },
        message: message.to_string(),
        is_violation: Box::new(is_violation),
    }
}

impl RuleDefinition {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_violation(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        (self.is_violation)(tree, node)
    }

    /// Handler for one JSX attribute. Returns whether anything was reported.
    pub fn check_attribute(&self, ctx: &mut RuleContext<'_>, attribute: NodeId) -> bool {
        if !ctx.directive_gate_open() {
            return false;
        }

        let unit = ctx.unit;
        let tree = &unit.tree;

        let NodeKind::JsxAttribute {
            value: Some(value), ..
        } = tree.kind(attribute)
        else {
            return false;
        };
        let NodeKind::JsxExpressionContainer { expression } = tree.kind(*value) else {
            return false;
        };

        if let Some(allow_list) = &ctx.options.native_allow_list {
            if let Some(tag) = element_tag_name(tree, attribute) {
                if is_native_tag(tag) && allow_list.exempts(tag) {
                    return false;
                }
            }
        }

        let mut found = false;
        for candidate in resolve(unit, *expression) {
            if self.is_violation(tree, candidate) {
                found = true;
                ctx.report(candidate, &self.message);
            }
        }
        found
    }
}
