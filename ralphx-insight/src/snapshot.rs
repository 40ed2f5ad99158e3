//! Workflow snapshot loading
//!
//! Snapshots are JSON or YAML exports of a workflow and its steps. The
//! format is chosen by file extension; parse errors carry the offending
//! file path as context.

use anyhow::{Context, Result};
use std::path::Path;

use crate::model::Workflow;

/// Parse a workflow snapshot from a JSON string
pub fn parse_snapshot_json(content: &str) -> Result<Workflow> {
    serde_json::from_str(content).context("Failed to parse JSON workflow snapshot")
}

/// Parse a workflow snapshot from a YAML string
pub fn parse_snapshot_yaml(content: &str) -> Result<Workflow> {
    serde_yaml::from_str(content).context("Failed to parse YAML workflow snapshot")
}

/// Load a workflow snapshot from disk.
///
/// `.yaml`/`.yml` files parse as YAML, everything else as JSON.
pub fn load_snapshot(path: &Path) -> Result<Workflow> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => parse_snapshot_yaml(&content)
            .with_context(|| format!("Invalid snapshot: {}", path.display())),
        _ => parse_snapshot_json(&content)
            .with_context(|| format!("Invalid snapshot: {}", path.display())),
    }
}
