//! # JSX Origin Lint
//!
//! Lint rules for JSX attribute values that trace each value back to the
//! expressions it may originate from.
//!
//! ## Resolution Invariants
//!
//! 1. **Literals are safe**: a literal never yields a candidate.
//! 2. **Both branches**: `a || b`, `a && b`, `a ?? b` and `t ? a : b` yield the
//!    candidates of both value operands; the ternary test is never a value.
//! 3. **Writes are followed**: an identifier yields the candidates of every
//!    value written to its variable (assignment, initialized declaration,
//!    default-value pattern), in source order.
//! 4. **Unresolved is safe**: an identifier with no visible declaration yields
//!    nothing.
//! 5. **Termination**: a variable already being expanded on the current path
//!    yields nothing on re-entry.
//!
//! ## Attribute Handler
//!
//! A rule skips the attribute when the `next` gate is closed (no
//! `"use client"` on the first line), when the value is not an expression
//! container, or when the element is native and allow-listed. Every other
//! candidate the rule's predicate accepts is reported.

#[cfg(feature = "napi")]
use napi_derive::napi;

pub mod ast;
pub mod config;
pub mod constructor;
pub mod diagnostic;
pub mod discovery;
pub mod error;
pub mod linter;
mod lowerer;
pub mod native;
pub mod parse;
pub mod resolve;
pub mod rule;
pub mod rules;
pub mod scope;
pub mod visitor;

#[cfg(test)]
mod rule_tests;

pub use config::{LintConfig, NativeAllowList, RuleOptions, Settings};
pub use constructor::matches_constructor;
pub use diagnostic::{Diagnostic, SourceLocation};
pub use discovery::{lint_directory, FileReport};
pub use error::{LintError, Result};
pub use linter::Linter;
pub use native::is_native_element;
pub use parse::{parse_source, SourceUnit};
pub use resolve::resolve;
pub use rule::{create_rule, RuleContext, RuleDefinition, RuleMeta};

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI EXPORTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Lints one source file. Without a config every built-in rule runs with
/// default options.
#[cfg(feature = "napi")]
#[napi]
pub fn lint_jsx_native(
    source: String,
    file_path: String,
    config_json: Option<String>,
) -> napi::Result<Vec<Diagnostic>> {
    let to_napi = |e: LintError| napi::Error::from_reason(e.to_string());
    let linter = match config_json {
        Some(json) => {
            let config = LintConfig::from_json_str(&json).map_err(to_napi)?;
            Linter::from_config(&config).map_err(to_napi)?
        }
        None => Linter::recommended(),
    };
    linter.lint_source(&file_path, &source).map_err(to_napi)
}

#[cfg(feature = "napi")]
#[napi]
pub fn builtin_rules_native() -> Vec<String> {
    rules::BUILTIN_RULES.iter().map(|s| s.to_string()).collect()
}
