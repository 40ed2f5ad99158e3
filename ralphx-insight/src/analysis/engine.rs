//! Workflow analysis engine
//!
//! Aggregates a snapshot's step counters, resolves the progress stage,
//! and selects the status summary and dashboard metrics. Later phases
//! depend on earlier aggregates, so the computation order here is fixed.

use crate::model::{LoopRole, Step, StepStatus, Workflow, WorkflowStatus};

use super::kind::{detect_workflow_kind, WorkflowKind};
use super::types::{Metric, MetricValue, Stage, Tone, WorkflowAnalysis};
use super::vocab::{vocabulary, Vocabulary};

/// Completion fraction above which a workflow counts as finishing
const FINISHING_THRESHOLD: f64 = 0.8;

/// Analyze a workflow snapshot into a display-ready summary
pub fn analyze_workflow(workflow: &Workflow) -> WorkflowAnalysis {
    let kind = detect_workflow_kind(workflow);
    let vocab = vocabulary(kind);

    let generators: Vec<Step> = workflow
        .steps
        .iter()
        .filter(|step| step.is_generator())
        .cloned()
        .collect();
    let consumers: Vec<Step> = workflow
        .steps
        .iter()
        .filter(|step| step.is_consumer())
        .cloned()
        .collect();

    let total_generated: u64 = generators.iter().map(|step| step.items_generated).sum();
    let total_processed: u64 = consumers
        .iter()
        .filter_map(|step| step.input_items)
        .map(|progress| progress.completed)
        .sum();
    let total_to_process: u64 = consumers
        .iter()
        .filter_map(|step| step.input_items)
        .map(|progress| progress.total)
        .sum();
    let total_iterations: u64 = workflow
        .steps
        .iter()
        .map(|step| step.iterations_completed)
        .sum();

    // First step with an active run wins; display order, no timestamp
    // tie-break.
    let running_step = workflow
        .steps
        .iter()
        .find(|step| step.has_active_run)
        .cloned();
    let is_running = running_step.is_some();

    let last_activity = workflow
        .steps
        .iter()
        .filter_map(|step| step.last_activity())
        .max();

    let stage = resolve_stage(
        workflow,
        &generators,
        total_generated,
        total_processed,
        total_to_process,
    );

    let (status_message, status_detail, tone, pulse) = status_summary(
        workflow,
        stage,
        vocab,
        running_step.as_ref(),
        total_generated,
        total_processed,
        total_to_process,
    );

    let (primary_metric, secondary_metric) = select_metrics(
        kind,
        vocab,
        total_generated,
        total_processed,
        total_to_process,
        total_iterations,
    );

    WorkflowAnalysis {
        kind,
        stage,
        generators,
        consumers,
        total_generated,
        total_processed,
        total_to_process,
        total_iterations,
        is_running,
        running_step,
        last_activity,
        primary_metric,
        secondary_metric,
        status_message,
        status_detail,
        status_color: tone.text_class(),
        dot_class: tone.dot_class(pulse),
    }
}

/// Resolve the five-state progress stage, terminal state first
fn resolve_stage(
    workflow: &Workflow,
    generators: &[Step],
    total_generated: u64,
    total_processed: u64,
    total_to_process: u64,
) -> Stage {
    if workflow.status == WorkflowStatus::Completed {
        return Stage::Complete;
    }
    if total_generated == 0 {
        return Stage::Discovery;
    }
    if total_processed == 0 && total_to_process > 0 {
        return Stage::Ready;
    }
    if total_processed < total_to_process {
        // total_to_process > 0 holds here, so the division is safe
        let progress = total_processed as f64 / total_to_process as f64;
        return if progress > FINISHING_THRESHOLD {
            Stage::Finishing
        } else {
            Stage::InProgress
        };
    }
    // Prior batch fully consumed but generation hasn't settled: back to
    // discovery until every generator reports completed.
    if generators
        .iter()
        .any(|step| step.status != StepStatus::Completed)
    {
        return Stage::Discovery;
    }
    Stage::Complete
}

/// Select the status message, detail, tone, and dot pulse.
///
/// A live run always wins; otherwise the workflow status decides, and
/// paused/idle workflows fall through to a per-stage summary.
fn status_summary(
    workflow: &Workflow,
    stage: Stage,
    vocab: &Vocabulary,
    running_step: Option<&Step>,
    total_generated: u64,
    total_processed: u64,
    total_to_process: u64,
) -> (String, String, Tone, bool) {
    if let Some(step) = running_step {
        let message = match step.config.loop_type {
            Some(LoopRole::Generator) => vocab.generating,
            Some(LoopRole::Consumer) => vocab.consuming,
            None => "Running",
        };
        return (message.to_string(), step.name.clone(), Tone::Emerald, true);
    }

    match workflow.status {
        WorkflowStatus::Completed => (
            "Complete".to_string(),
            format!("All {} {}", vocab.noun, vocab.consumed),
            Tone::Blue,
            false,
        ),
        WorkflowStatus::Draft => (
            "Ready".to_string(),
            "Workflow not started".to_string(),
            Tone::Gray,
            false,
        ),
        WorkflowStatus::Active | WorkflowStatus::Paused => match stage {
            Stage::Discovery => {
                let detail = if total_generated > 0 {
                    format!("{} {} {} so far", total_generated, vocab.noun, vocab.generated)
                } else {
                    format!("No {} {} yet", vocab.noun, vocab.generated)
                };
                ("Paused".to_string(), detail, Tone::Amber, false)
            }
            Stage::Ready => (
                "Ready to build".to_string(),
                format!("{} {} queued", total_to_process, vocab.noun),
                Tone::Cyan,
                false,
            ),
            Stage::InProgress | Stage::Finishing => {
                let remaining = total_to_process.saturating_sub(total_processed);
                let detail = if total_to_process > 0 {
                    let pct = (100.0 * total_processed as f64 / total_to_process as f64).round();
                    format!(
                        "{} {} remaining ({}% complete)",
                        remaining, vocab.noun, pct as u64
                    )
                } else {
                    format!("{} {} remaining", remaining, vocab.noun)
                };
                ("Paused".to_string(), detail, Tone::Amber, false)
            }
            Stage::Complete => (
                "Idle".to_string(),
                "Nothing left to process".to_string(),
                Tone::Gray,
                false,
            ),
        },
    }
}

/// Select the primary and secondary dashboard metrics by workflow kind
fn select_metrics(
    kind: WorkflowKind,
    vocab: &Vocabulary,
    total_generated: u64,
    total_processed: u64,
    total_to_process: u64,
    total_iterations: u64,
) -> (Metric, Option<Metric>) {
    let remaining = total_to_process.saturating_sub(total_processed);

    // Shared shape: once processing has started, show done/total under
    // the consumer verb; before that, show the generated count.
    let progress_metric = |subtext: Option<String>| {
        if total_to_process > 0 {
            Metric {
                label: format!("{} {}", vocab.noun, vocab.consumed),
                value: MetricValue::Ratio {
                    done: total_processed,
                    total: total_to_process,
                },
                subtext,
            }
        } else {
            Metric {
                label: format!("{} {}", vocab.noun, vocab.generated),
                value: MetricValue::Count(total_generated),
                subtext: None,
            }
        }
    };

    let remaining_metric = || {
        (remaining > 0).then(|| Metric {
            label: "remaining".to_string(),
            value: MetricValue::Count(remaining),
            subtext: None,
        })
    };

    let iterations_metric = || {
        (total_iterations > 0).then(|| Metric {
            label: "iterations".to_string(),
            value: MetricValue::Count(total_iterations),
            subtext: None,
        })
    };

    match kind {
        WorkflowKind::NewProduct | WorkflowKind::Feature => {
            (progress_metric(None), remaining_metric())
        }
        WorkflowKind::BugFix => {
            let subtext = (total_to_process > 0).then(|| {
                let pct = (100.0 * total_processed as f64 / total_to_process as f64).round();
                format!("{}% complete", pct as u64)
            });
            (progress_metric(subtext), remaining_metric())
        }
        WorkflowKind::Maintenance => (progress_metric(None), iterations_metric()),
        WorkflowKind::Support => (progress_metric(None), remaining_metric()),
        WorkflowKind::Generic => (progress_metric(None), iterations_metric()),
    }
}
