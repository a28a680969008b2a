//! Linter host: registers rules and dispatches their attribute handler for
//! every JSX attribute of a unit.

use crate::ast::{NodeId, SyntaxTree};
use crate::config::{LintConfig, RuleOptions, Settings};
use crate::diagnostic::Diagnostic;
use crate::error::{LintError, Result};
use crate::parse::{parse_source, SourceUnit};
use crate::rule::{RuleContext, RuleDefinition};
use crate::rules;
use crate::visitor::{walk_children, walk_root, SyntaxVisitor};

#[derive(Debug)]
struct RegisteredRule {
    name: String,
    definition: RuleDefinition,
    options: RuleOptions,
}

#[derive(Debug, Default)]
pub struct Linter {
    rules: Vec<RegisteredRule>,
    settings: Settings,
}

impl Linter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in rule with default options.
    pub fn recommended() -> Self {
        let mut linter = Self::new();
        for name in rules::BUILTIN_RULES {
            if let Some(definition) = rules::builtin(name) {
                linter = linter.with_rule(name, definition, RuleOptions::default());
            }
        }
        linter
    }

    pub fn from_config(config: &LintConfig) -> Result<Self> {
        let mut linter = Self::new().with_settings(config.settings.clone());
        for (name, value) in &config.rules {
            if matches!(value, serde_json::Value::Bool(false)) {
                continue;
            }
            let definition =
                rules::builtin(name).ok_or_else(|| LintError::UnknownRule(name.clone()))?;
            let options = RuleOptions::from_value(name, value)?;
            linter = linter.with_rule(name, definition, options);
        }
        Ok(linter)
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_rule(mut self, name: &str, definition: RuleDefinition, options: RuleOptions) -> Self {
        self.rules.push(RegisteredRule {
            name: name.to_string(),
            definition,
            options,
        });
        self
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn lint_source(&self, file: &str, source: &str) -> Result<Vec<Diagnostic>> {
        let unit = parse_source(file, source)?;
        Ok(self.lint_unit(&unit))
    }

    pub fn lint_unit(&self, unit: &SourceUnit) -> Vec<Diagnostic> {
        let contexts = self
            .rules
            .iter()
            .map(|rule| RuleContext::new(&rule.name, unit, &rule.options, &self.settings))
            .collect::<Vec<_>>();

        for ctx in &contexts {
            if !ctx.directive_gate_open() {
                tracing::debug!(
                    "{}: `{}` requires a \"use client\" directive, skipping unit",
                    unit.file, ctx.rule
                );
            }
        }

        let mut dispatcher = Dispatcher {
            rules: &self.rules,
            contexts,
        };
        walk_root(&mut dispatcher, &unit.tree);

        let mut diagnostics: Vec<Diagnostic> = dispatcher
            .contexts
            .into_iter()
            .flat_map(RuleContext::into_diagnostics)
            .collect();
        diagnostics.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.rule.cmp(&b.rule)));
        diagnostics
    }
}

/// Invokes each registered rule's handler on every attribute it walks past.
struct Dispatcher<'l, 'u> {
    rules: &'l [RegisteredRule],
    contexts: Vec<RuleContext<'u>>,
}

impl SyntaxVisitor for Dispatcher<'_, '_> {
    fn visit_jsx_attribute(&mut self, tree: &SyntaxTree, id: NodeId) {
        for (rule, ctx) in self.rules.iter().zip(self.contexts.iter_mut()) {
            rule.definition.check_attribute(ctx, id);
        }
        walk_children(self, tree, id);
    }
}
