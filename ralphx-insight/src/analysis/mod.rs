//! Workflow classification and status analysis
//!
//! This module turns a workflow snapshot into a display-ready summary:
//! a domain archetype, a five-state progress stage, status message and
//! color tokens, and primary/secondary dashboard metrics. Everything
//! here is pure and synchronous; callers recompute on every poll tick.

pub mod engine;
pub mod kind;
pub mod types;
pub mod vocab;

// Re-export commonly used items
pub use engine::analyze_workflow;
pub use kind::{detect_workflow_kind, WorkflowKind};
pub use types::{Metric, MetricValue, Stage, Tone, WorkflowAnalysis};
pub use vocab::{consumer_verb, generator_verb, item_noun, vocabulary, Vocabulary};
