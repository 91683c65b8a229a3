//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! The `format_*` functions return plain strings and are what the tests check;
//! the `display_*` functions add colour and print.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::BumpOutcome;
use crate::cli::setup::{SetupReport, WorkflowStatus};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One-line summary of a bump outcome
pub fn format_outcome(outcome: &BumpOutcome) -> String {
    match outcome {
        BumpOutcome::Skipped { token } => {
            format!("Skipping version update: commit contains '{}'", token)
        }
        BumpOutcome::Bumped {
            from,
            to,
            marker,
            dry_run,
            ..
        } => {
            let verb = if *dry_run { "Would bump" } else { "Bumped" };
            format!("{} version {} -> {} ({})", verb, from, to, marker)
        }
    }
}

/// Display the outcome of a bump run.
///
/// # Arguments
/// * `outcome` - Result of the workflow
/// * `summary` - Shortened commit message the decision was based on
pub fn display_outcome(outcome: &BumpOutcome, summary: &str) {
    println!("{} {}", style("Commit:").bold(), summary);
    match outcome {
        BumpOutcome::Skipped { .. } => display_status(&format_outcome(outcome)),
        BumpOutcome::Bumped { from, to, .. } => {
            println!("  From: {}", style(from).red());
            println!("  To:   {}", style(to).green());
            display_success(&format_outcome(outcome));
        }
    }
}

/// Lines describing what setup did, in display order
pub fn format_setup_report(report: &SetupReport) -> Vec<String> {
    let workflow = match report.workflow {
        WorkflowStatus::Installed => {
            format!("Installed workflow to {}", report.workflow_path.display())
        }
        WorkflowStatus::Overwritten => {
            format!("Overwrote workflow at {}", report.workflow_path.display())
        }
        WorkflowStatus::Kept => {
            format!("Kept existing workflow at {}", report.workflow_path.display())
        }
    };
    let version = if report.version_created {
        format!(
            "Created version file {} with version 0.0.0",
            report.version_file.display()
        )
    } else {
        format!("Version file {} already exists", report.version_file.display())
    };
    vec![workflow, version]
}

/// Display the setup report and the commands to commit it.
pub fn display_setup_report(report: &SetupReport) {
    for line in format_setup_report(report) {
        display_success(&line);
    }
    println!("\n{}", style("Next steps:").bold());
    println!("  1. Commit the changes:");
    println!(
        "     {}",
        style(format!(
            "git add {} {}",
            report.workflow_path.display(),
            report.version_file.display()
        ))
        .cyan()
    );
    println!(
        "     {}",
        style("git commit -m 'Add auto-versioning setup [patch]'").cyan()
    );
    println!("  2. Push to trigger the workflow");
}
