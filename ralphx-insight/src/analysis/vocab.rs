//! Domain vocabulary tables
//!
//! Maps each workflow archetype to the noun and verbs used when building
//! status sentences ("12 bugs triaged", "Fixing", "All stories
//! implemented"). The generic entry is the safety default.

use super::kind::WorkflowKind;

/// Vocabulary for one workflow archetype
///
/// `generating`/`consuming` are the present-progressive forms shown
/// while a step of that role has an active run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    pub noun: &'static str,
    pub generated: &'static str,
    pub generating: &'static str,
    pub consumed: &'static str,
    pub consuming: &'static str,
}

/// Look up the vocabulary for a workflow kind
pub const fn vocabulary(kind: WorkflowKind) -> &'static Vocabulary {
    match kind {
        WorkflowKind::NewProduct => &Vocabulary {
            noun: "stories",
            generated: "discovered",
            generating: "Discovering",
            consumed: "implemented",
            consuming: "Implementing",
        },
        WorkflowKind::Feature => &Vocabulary {
            noun: "tasks",
            generated: "planned",
            generating: "Planning",
            consumed: "built",
            consuming: "Building",
        },
        WorkflowKind::BugFix => &Vocabulary {
            noun: "bugs",
            generated: "triaged",
            generating: "Triaging",
            consumed: "fixed",
            consuming: "Fixing",
        },
        WorkflowKind::Maintenance => &Vocabulary {
            noun: "upgrades",
            generated: "identified",
            generating: "Identifying",
            consumed: "applied",
            consuming: "Applying",
        },
        WorkflowKind::Support => &Vocabulary {
            noun: "tickets",
            generated: "gathered",
            generating: "Gathering",
            consumed: "resolved",
            consuming: "Resolving",
        },
        WorkflowKind::Generic => &Vocabulary {
            noun: "items",
            generated: "generated",
            generating: "Generating",
            consumed: "processed",
            consuming: "Processing",
        },
    }
}

/// Noun for the work items of this workflow kind
pub const fn item_noun(kind: WorkflowKind) -> &'static str {
    vocabulary(kind).noun
}

/// Past-tense verb for items produced by a generator step
pub const fn generator_verb(kind: WorkflowKind) -> &'static str {
    vocabulary(kind).generated
}

/// Past-tense verb for items processed by a consumer step
pub const fn consumer_verb(kind: WorkflowKind) -> &'static str {
    vocabulary(kind).consumed
}
