// Workflow snapshot data model
pub mod model;

// Classification and status analysis
pub mod analysis;

// Tool-permission and processing-mode presets
pub mod presets;

// Snapshot file loading
pub mod snapshot;

// Re-export commonly used items
pub use analysis::{
    analyze_workflow, consumer_verb, detect_workflow_kind, generator_verb, item_noun, Metric,
    MetricValue, Stage, WorkflowAnalysis, WorkflowKind,
};
pub use model::{ItemProgress, LoopRole, Step, StepConfig, StepStatus, Workflow, WorkflowStatus};
pub use presets::{processing_mode, tools_preset, ProcessingMode, ToolsPreset};
pub use snapshot::{load_snapshot, parse_snapshot_json, parse_snapshot_yaml};
