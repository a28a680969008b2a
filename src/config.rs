//! Rule options, ambient settings and lint configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{LintError, Result};

lazy_static::lazy_static! {
    /// Accepted options, in the JSON-schema form hosts validate against.
    pub static ref OPTIONS_SCHEMA: Value = json!([
        {
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "nativeAllowList": {
                    "oneOf": [
                        { "enum": ["all"] },
                        { "type": "array", "items": { "type": "string" } }
                    ]
                },
                "next": { "type": "boolean" }
            }
        }
    ]);
}

// ═══════════════════════════════════════════════════════════════════════════════
// RULE OPTIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllKeyword {
    #[serde(rename = "all")]
    All,
}

/// Native elements exempt from checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NativeAllowList {
    /// `"all"`: every native element.
    All(AllKeyword),
    /// Tag names, compared case-insensitively.
    Tags(Vec<String>),
}

impl NativeAllowList {
    pub fn all() -> Self {
        NativeAllowList::All(AllKeyword::All)
    }

    pub fn exempts(&self, tag: &str) -> bool {
        match self {
            NativeAllowList::All(_) => true,
            NativeAllowList::Tags(tags) => {
                let tag = tag.to_lowercase();
                tags.iter().any(|t| t.to_lowercase() == tag)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleOptions {
    #[serde(default)]
    pub native_allow_list: Option<NativeAllowList>,
    /// Only lint units whose first line is a `"use client"` directive.
    #[serde(default)]
    pub next: Option<bool>,
}

impl RuleOptions {
    /// Accepts `null`, an options object, or an ESLint-style options array
    /// whose first element is the object.
    pub fn from_value(rule: &str, value: &Value) -> Result<Self> {
        let object = match value {
            Value::Null | Value::Bool(true) => return Ok(Self::default()),
            Value::Array(items) => match items.first() {
                Some(first) => first.clone(),
                None => return Ok(Self::default()),
            },
            other => other.clone(),
        };
        serde_json::from_value(object).map_err(|source| LintError::InvalidOptions {
            rule: rule.to_string(),
            source,
        })
    }

    /// Effective directive gate: the option wins over the ambient setting.
    pub fn next_enabled(&self, settings: &Settings) -> bool {
        self.next.or(settings.next).unwrap_or(false)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SETTINGS & CONFIG
// ═══════════════════════════════════════════════════════════════════════════════

/// Ambient per-project settings shared by every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub next: Option<bool>,
}

/// `{ "rules": { "<name>": <options> | true | false }, "settings": { .. } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    #[serde(default)]
    pub rules: BTreeMap<String, Value>,
    #[serde(default)]
    pub settings: Settings,
}

impl LintConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
