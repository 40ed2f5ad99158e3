//! Workflow snapshot data structures
//!
//! These types mirror the snapshot payload the RalphX backend exports for
//! its console. Optional counters default to zero and optional flags to
//! false at deserialization, so the analysis code never re-checks for
//! missing data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

/// Execution status of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
    Skipped,
}

/// Role of a step in the generate/consume pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopRole {
    Generator,
    Consumer,
}

/// Step configuration as stored by the backend
///
/// Steps without a loop role are one-shot steps; they contribute to
/// iteration totals but to neither pipeline partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_type: Option<LoopRole>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Prompt template identifier, if the step was created from one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_type: Option<String>,

    /// Tools the step's agent is allowed to call
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_tools: Vec<String>,
}

/// Progress counters for a consumer step's input queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProgress {
    #[serde(default)]
    pub completed: u64,

    #[serde(default)]
    pub total: u64,
}

/// A single workflow step as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub status: StepStatus,

    #[serde(default)]
    pub config: StepConfig,

    /// Items produced so far, if this step is a generator
    #[serde(default)]
    pub items_generated: u64,

    /// Input queue progress, if this step is a consumer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_items: Option<ItemProgress>,

    #[serde(default)]
    pub iterations_completed: u64,

    /// Live execution state from the backend's run controller
    #[serde(default)]
    pub has_active_run: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Step {
    pub fn is_generator(&self) -> bool {
        self.config.loop_type == Some(LoopRole::Generator)
    }

    pub fn is_consumer(&self) -> bool {
        self.config.loop_type == Some(LoopRole::Consumer)
    }

    /// Most recent activity timestamp: completion time, falling back to
    /// start time for steps still underway.
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.completed_at.or(self.started_at)
    }
}

/// A workflow snapshot: metadata plus its steps in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    pub status: WorkflowStatus,

    #[serde(default)]
    pub steps: Vec<Step>,
}
