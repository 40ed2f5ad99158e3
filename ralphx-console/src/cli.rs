//! CLI argument definitions for the status console.

use clap::Parser;
use std::path::PathBuf;

/// Workflow status console for the RalphX platform
///
/// Reads workflow snapshots exported by the backend (JSON or YAML) and
/// prints a display-ready status summary for each one: domain archetype,
/// progress stage, status line, and dashboard metrics.
#[derive(Parser, Debug, Clone)]
#[command(name = "ralphx-console")]
#[command(about = "Workflow status console for RalphX")]
#[command(version)]
pub struct Args {
    /// Path(s) to workflow snapshot files (JSON or YAML)
    #[arg(value_name = "SNAPSHOT", required = true)]
    pub snapshots: Vec<PathBuf>,

    /// Emit the full analysis as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Include per-step lines in the text report
    #[arg(long)]
    pub steps: bool,
}
