//! Tests for workflow archetype detection
//!
//! Exercises every rule in the table, the fixed priority order, and the
//! word-boundary matching semantics.

use super::common::*;
use ralphx_insight::{detect_workflow_kind, WorkflowKind, WorkflowStatus};

fn kind_of(names: &[&str]) -> WorkflowKind {
    let steps = names.iter().map(|name| step(name)).collect();
    detect_workflow_kind(&workflow(WorkflowStatus::Draft, steps))
}

// ============================================================================
// Individual rules
// ============================================================================

#[test]
fn test_new_product_keywords() {
    assert_eq!(kind_of(&["Write the PRD"]), WorkflowKind::NewProduct);
    assert_eq!(kind_of(&["Draft user stories"]), WorkflowKind::NewProduct);
    assert_eq!(
        kind_of(&["Gather requirements"]),
        WorkflowKind::NewProduct
    );
}

#[test]
fn test_feature_requires_feature_and_action() {
    assert_eq!(
        kind_of(&["Implement the feature"]),
        WorkflowKind::Feature
    );
    assert_eq!(
        kind_of(&["Plan feature", "Build it"]),
        WorkflowKind::Feature
    );
    // "feature" alone is not enough
    assert_eq!(kind_of(&["Review the feature"]), WorkflowKind::Generic);
}

#[test]
fn test_bug_fix_keywords() {
    assert_eq!(kind_of(&["Triage the backlog"]), WorkflowKind::BugFix);
    assert_eq!(kind_of(&["Fix defect reports"]), WorkflowKind::BugFix);
    assert_eq!(kind_of(&["Bugfix sweep"]), WorkflowKind::BugFix);
}

#[test]
fn test_maintenance_keywords() {
    assert_eq!(kind_of(&["Upgrade dependency tree"]), WorkflowKind::Maintenance);
    assert_eq!(kind_of(&["Pay down tech debt"]), WorkflowKind::Maintenance);
}

#[test]
fn test_support_keywords() {
    assert_eq!(kind_of(&["Resolve customer escalations"]), WorkflowKind::Support);
    assert_eq!(kind_of(&["Work the ticket queue"]), WorkflowKind::Support);
}

#[test]
fn test_generic_fallback() {
    assert_eq!(kind_of(&["Run the loop", "Collect output"]), WorkflowKind::Generic);
    assert_eq!(kind_of(&[]), WorkflowKind::Generic);
}

// ============================================================================
// Priority order
// ============================================================================

#[test]
fn test_earlier_rule_beats_later_rule() {
    // "prd" (rule 1) wins over "bugs" (rule 3)
    assert_eq!(kind_of(&["Fix the PRD bugs"]), WorkflowKind::NewProduct);
}

#[test]
fn test_bug_beats_maintenance() {
    assert_eq!(
        kind_of(&["Triage the dependency upgrade"]),
        WorkflowKind::BugFix
    );
}

// ============================================================================
// Word boundaries
// ============================================================================

#[test]
fn test_keyword_inside_word_does_not_match() {
    assert_eq!(kind_of(&["Debug the build system"]), WorkflowKind::Generic);
    assert_eq!(kind_of(&["Add a prefix to names"]), WorkflowKind::Generic);
}

#[test]
fn test_keyword_next_to_punctuation_matches() {
    assert_eq!(kind_of(&["Ship it (bug #42)"]), WorkflowKind::BugFix);
}

// ============================================================================
// Text sources
// ============================================================================

#[test]
fn test_description_text_counts() {
    let mut described = step("Stage one");
    described.config.description = Some("Triage incoming bug reports".to_string());

    let wf = workflow(WorkflowStatus::Draft, vec![described]);
    assert_eq!(detect_workflow_kind(&wf), WorkflowKind::BugFix);
}

#[test]
fn test_single_step_flips_whole_workflow() {
    // One bug-ish step classifies the workflow even when the rest is
    // implementation-only
    assert_eq!(
        kind_of(&["Set up repo", "Write code", "Close out bugs"]),
        WorkflowKind::BugFix
    );
}

#[test]
fn test_matching_is_case_insensitive() {
    assert_eq!(kind_of(&["TRIAGE THE BACKLOG"]), WorkflowKind::BugFix);
}
