//! Text rendering of workflow analyses

use ralphx_insight::{Step, StepStatus, Workflow, WorkflowAnalysis};

/// Print a banner-style report for one workflow
pub fn print_report(workflow: &Workflow, analysis: &WorkflowAnalysis, show_steps: bool) {
    println!("\n{}", "=".repeat(80));
    println!("Workflow: {}", workflow.name);
    println!("{}", "=".repeat(80));

    println!("Type:     {}", analysis.kind);
    println!("Stage:    {}", analysis.stage);
    println!(
        "Status:   {} - {}",
        analysis.status_message, analysis.status_detail
    );

    let primary = &analysis.primary_metric;
    match &primary.subtext {
        Some(subtext) => println!("{}:  {} ({})", primary.label, primary.value, subtext),
        None => println!("{}:  {}", primary.label, primary.value),
    }
    if let Some(secondary) = &analysis.secondary_metric {
        println!("{}:  {}", secondary.label, secondary.value);
    }

    if let Some(last_activity) = analysis.last_activity {
        println!("Last activity: {}", last_activity.to_rfc3339());
    }

    if show_steps {
        println!();
        for step in &workflow.steps {
            println!("  {} {}", step_marker(step), step.name);
        }
    }
}

/// One-character progress marker for a step line
fn step_marker(step: &Step) -> char {
    if step.has_active_run {
        return '>';
    }
    match step.status {
        StepStatus::Pending => '.',
        StepStatus::Active => '>',
        StepStatus::Completed => '*',
        StepStatus::Skipped => '-',
    }
}
