//! RalphX status console entrypoint.

use anyhow::Result;
use clap::Parser;
use serde_json::json;

mod cli;
mod report;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    for path in &args.snapshots {
        let workflow = ralphx_insight::load_snapshot(path)?;
        let analysis = ralphx_insight::analyze_workflow(&workflow);

        if args.json {
            let payload = json!({
                "workflow": workflow.name,
                "analysis": analysis,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            report::print_report(&workflow, &analysis, args.steps);
        }
    }

    Ok(())
}
