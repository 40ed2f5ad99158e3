//! Workflow archetype detection
//!
//! Classifies a workflow into one of six domain archetypes by scanning
//! the concatenated text of all step names and descriptions against an
//! ordered keyword rule table. A single step mentioning "bug" is enough
//! to classify the whole workflow; ties go to the earlier rule.

use serde::{Deserialize, Serialize};

use crate::model::Workflow;

/// Six-way domain classification of a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowKind {
    NewProduct,
    Feature,
    BugFix,
    Maintenance,
    Support,
    Generic,
}

/// A detection rule: matches when every keyword group has at least one
/// keyword present as a whole word.
struct KindRule {
    kind: WorkflowKind,
    groups: &'static [&'static [&'static str]],
}

/// Ordered rule table; the first matching rule wins.
const KIND_RULES: &[KindRule] = &[
    KindRule {
        kind: WorkflowKind::NewProduct,
        groups: &[&["story", "stories", "prd", "user stories", "requirements"]],
    },
    KindRule {
        kind: WorkflowKind::Feature,
        groups: &[&["feature"], &["implement", "build"]],
    },
    KindRule {
        kind: WorkflowKind::BugFix,
        groups: &[&["bug", "bugs", "defect", "bugfix", "triage"]],
    },
    KindRule {
        kind: WorkflowKind::Maintenance,
        groups: &[&["dependency", "tech debt", "maintenance", "upgrade"]],
    },
    KindRule {
        kind: WorkflowKind::Support,
        groups: &[&["ticket", "support", "customer", "resolution"]],
    },
];

/// Detect the workflow's archetype from its step names and descriptions
pub fn detect_workflow_kind(workflow: &Workflow) -> WorkflowKind {
    let mut text = String::new();
    for step in &workflow.steps {
        text.push_str(&step.name.to_lowercase());
        text.push(' ');
        if let Some(description) = &step.config.description {
            text.push_str(&description.to_lowercase());
            text.push(' ');
        }
    }
    classify_text(&text)
}

/// Classify pre-lowercased text against the rule table
pub(crate) fn classify_text(text: &str) -> WorkflowKind {
    for rule in KIND_RULES {
        let matched = rule
            .groups
            .iter()
            .all(|group| group.iter().any(|keyword| contains_word(text, keyword)));
        if matched {
            return rule.kind;
        }
    }
    WorkflowKind::Generic
}

/// Whole-word containment check, so "fix" never matches inside "prefix"
/// and "bug" never matches inside "debug". Multi-word keywords are
/// matched as phrases with word boundaries at both ends.
fn contains_word(text: &str, word: &str) -> bool {
    let mut search = 0;
    while let Some(offset) = text[search..].find(word) {
        let begin = search + offset;
        let end = begin + word.len();
        let left_bounded = !text[..begin]
            .chars()
            .next_back()
            .map_or(false, |c| c.is_alphanumeric());
        let right_bounded = !text[end..]
            .chars()
            .next()
            .map_or(false, |c| c.is_alphanumeric());
        if left_bounded && right_bounded {
            return true;
        }
        search = begin + 1;
    }
    false
}
