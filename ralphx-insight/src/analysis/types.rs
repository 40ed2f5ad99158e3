//! Analysis output types
//!
//! `WorkflowAnalysis` is a derived view: constructed fresh on every call,
//! never mutated, safe to recompute on every render or poll tick. The
//! color fields are frontend utility-class tokens consumed verbatim by
//! rendering code.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::Step;

use super::kind::WorkflowKind;

/// Five-state progress label for a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Discovery,
    Ready,
    InProgress,
    Finishing,
    Complete,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Discovery => "discovery",
            Stage::Ready => "ready",
            Stage::InProgress => "in progress",
            Stage::Finishing => "finishing",
            Stage::Complete => "complete",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkflowKind::NewProduct => "new product",
            WorkflowKind::Feature => "feature",
            WorkflowKind::BugFix => "bug fix",
            WorkflowKind::Maintenance => "maintenance",
            WorkflowKind::Support => "support",
            WorkflowKind::Generic => "generic",
        };
        write!(f, "{}", label)
    }
}

/// Accent color of the status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Emerald,
    Blue,
    Cyan,
    Amber,
    Gray,
}

impl Tone {
    /// Text utility class for the status message
    pub const fn text_class(self) -> &'static str {
        match self {
            Tone::Emerald => "text-emerald-400",
            Tone::Blue => "text-blue-400",
            Tone::Cyan => "text-cyan-400",
            Tone::Amber => "text-amber-400",
            Tone::Gray => "text-gray-400",
        }
    }

    /// Dot utility class; pulsing while a run is live
    pub const fn dot_class(self, pulse: bool) -> &'static str {
        match (self, pulse) {
            (Tone::Emerald, true) => "bg-emerald-400 animate-pulse",
            (Tone::Emerald, false) => "bg-emerald-400",
            (Tone::Blue, true) => "bg-blue-400 animate-pulse",
            (Tone::Blue, false) => "bg-blue-400",
            (Tone::Cyan, true) => "bg-cyan-400 animate-pulse",
            (Tone::Cyan, false) => "bg-cyan-400",
            (Tone::Amber, true) => "bg-amber-400 animate-pulse",
            (Tone::Amber, false) => "bg-amber-400",
            (Tone::Gray, true) => "bg-gray-400 animate-pulse",
            (Tone::Gray, false) => "bg-gray-400",
        }
    }
}

/// Value of a dashboard metric: a bare count or a done/total pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(u64),
    Ratio { done: u64, total: u64 },
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(count) => write!(f, "{}", count),
            MetricValue::Ratio { done, total } => write!(f, "{}/{}", done, total),
        }
    }
}

/// A labeled dashboard metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

/// Display-ready summary derived from a workflow snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowAnalysis {
    pub kind: WorkflowKind,
    pub stage: Stage,

    /// Steps tagged as generators, in display order
    pub generators: Vec<Step>,
    /// Steps tagged as consumers, in display order
    pub consumers: Vec<Step>,

    pub total_generated: u64,
    pub total_processed: u64,
    pub total_to_process: u64,
    pub total_iterations: u64,

    pub is_running: bool,
    /// First step with an active run, in display order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_step: Option<Step>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,

    pub primary_metric: Metric,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_metric: Option<Metric>,

    pub status_message: String,
    pub status_detail: String,
    pub status_color: &'static str,
    pub dot_class: &'static str,
}
