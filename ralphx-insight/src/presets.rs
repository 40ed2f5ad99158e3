//! Tool-permission and processing-mode presets
//!
//! Small closed-set classifiers over step configuration: the tool list a
//! step's agent may call, and the processing archetype the step editor
//! shows for it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{LoopRole, Step};

/// Named tool-permission presets recognized by the step editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolsPreset {
    None,
    WebOnly,
    All,
    Custom,
}

/// Tools granted by the `web-only` preset
pub const WEB_TOOLS: &[&str] = &["WebSearch", "WebFetch"];

/// Tools granted by the `all` preset
pub const ALL_TOOLS: &[&str] = &[
    "Bash",
    "Edit",
    "Glob",
    "Grep",
    "Read",
    "Task",
    "WebFetch",
    "WebSearch",
    "Write",
];

/// Classify a tool list against the named presets.
///
/// Comparison is set-based: ordering and duplicates in the input do not
/// matter. Anything that is not an exact preset match is `Custom`.
pub fn tools_preset(tools: &[String]) -> ToolsPreset {
    if tools.is_empty() {
        return ToolsPreset::None;
    }
    let tools: BTreeSet<&str> = tools.iter().map(String::as_str).collect();
    let web: BTreeSet<&str> = WEB_TOOLS.iter().copied().collect();
    if tools == web {
        return ToolsPreset::WebOnly;
    }
    let all: BTreeSet<&str> = ALL_TOOLS.iter().copied().collect();
    if tools == all {
        return ToolsPreset::All;
    }
    ToolsPreset::Custom
}

/// Processing archetype of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    RequirementsExtraction,
    Generation,
    Consumption,
    OneShot,
}

/// Current template id for requirements-extraction steps
const REQUIREMENTS_TEMPLATE: &str = "extractgen_requirements";

/// Deprecated alias still emitted by older backends
const LEGACY_RESEARCH_TEMPLATE: &str = "research";

/// Classify a step's processing archetype from its configuration.
///
/// Precedence: a recognized template id, then an explicit single-shot
/// `step_type`, then the loop role. Untagged steps are one-shot.
pub fn processing_mode(step: &Step) -> ProcessingMode {
    if let Some(template) = step.config.template.as_deref() {
        if template == REQUIREMENTS_TEMPLATE || template == LEGACY_RESEARCH_TEMPLATE {
            return ProcessingMode::RequirementsExtraction;
        }
    }
    if matches!(
        step.config.step_type.as_deref(),
        Some("single") | Some("oneshot")
    ) {
        return ProcessingMode::OneShot;
    }
    match step.config.loop_type {
        Some(LoopRole::Generator) => ProcessingMode::Generation,
        Some(LoopRole::Consumer) => ProcessingMode::Consumption,
        None => ProcessingMode::OneShot,
    }
}
