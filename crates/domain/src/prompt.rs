//! Prompt payload shapes
//!
//! Data contract for the sibling prompt-assembly subsystem: the payload
//! `{sections, toolOverrides, disabledTools, toolDefinitions}` handed to
//! the LLM-calling service. These shapes share the "section with
//! overrides" pattern with the session JSON but have no dependency on the
//! reference resolver.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One ordered section of an assembled prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSection {
    /// Stable section identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Section body.
    pub content: String,
    /// Whether the section is included in the assembled prompt.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Sort order, ascending.
    #[serde(default)]
    pub order: i32,
}

const fn default_enabled() -> bool {
    true
}

impl PromptSection {
    /// Creates an enabled section with the given order.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            enabled: true,
            order,
        }
    }
}

/// A user override applied to one section before assembly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOverride {
    /// Which section the override targets.
    pub section_id: String,
    /// Replacement body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Enable/disable toggle, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Replacement sort order, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// A tool definition forwarded to the LLM-calling service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON schema for the tool's parameters.
    pub parameters: Value,
}

/// The payload sent to the LLM-calling service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPayload {
    /// Sections in final order, disabled ones already removed.
    pub sections: Vec<PromptSection>,
    /// Per-tool configuration overrides, keyed by tool name.
    pub tool_overrides: BTreeMap<String, Value>,
    /// Tools the user has disabled for this session.
    pub disabled_tools: Vec<String>,
    /// Definitions of the tools that remain available.
    pub tool_definitions: Vec<ToolDefinition>,
}

impl PromptPayload {
    /// Assembles a payload from base sections plus user overrides.
    ///
    /// Overrides are applied per section id, disabled sections are dropped,
    /// the rest are sorted by order, and definitions of disabled tools are
    /// filtered out.
    #[must_use]
    pub fn assemble(
        base: &[PromptSection],
        overrides: &[PromptOverride],
        tool_overrides: BTreeMap<String, Value>,
        disabled_tools: Vec<String>,
        tool_definitions: Vec<ToolDefinition>,
    ) -> Self {
        let mut sections: Vec<PromptSection> = base
            .iter()
            .cloned()
            .map(|mut section| {
                if let Some(o) = overrides.iter().find(|o| o.section_id == section.id) {
                    if let Some(content) = &o.content {
                        section.content.clone_from(content);
                    }
                    if let Some(enabled) = o.enabled {
                        section.enabled = enabled;
                    }
                    if let Some(order) = o.order {
                        section.order = order;
                    }
                }
                section
            })
            .filter(|section| section.enabled)
            .collect();
        sections.sort_by_key(|section| section.order);

        let tool_definitions = tool_definitions
            .into_iter()
            .filter(|tool| !disabled_tools.contains(&tool.name))
            .collect();

        Self {
            sections,
            tool_overrides,
            disabled_tools,
            tool_definitions,
        }
    }
}
