//! Bump workflow orchestration
//!
//! One linear pass: read the latest commit message, apply the skip guard,
//! load the version file, bump, write it back. Kept apart from `main.rs` so
//! the workflow can be driven without clap.

use std::path::PathBuf;

use crate::analyzer::{bump, Decision, IncrementAnalyzer};
use crate::boundary::BoundaryWarning;
use crate::domain::{Marker, Version};
use crate::error::Result;
use crate::git::CommitSource;
use crate::store::VersionStore;

/// Exit code for a run that changed the version
pub const EXIT_CHANGED: u8 = 0;
/// Exit code for a run that left the version alone
pub const EXIT_UNCHANGED: u8 = 1;
/// Exit code for a failed run
pub const EXIT_FAILURE: u8 = 2;

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Resolved path of the version file
    pub version_file: PathBuf,

    /// Compute the next version without writing it
    pub dry_run: bool,
}

/// How a bump run ended
#[derive(Debug, Clone, PartialEq)]
pub enum BumpOutcome {
    /// Skip guard matched; the version file was not touched
    Skipped { token: String },

    /// The version moved from `from` to `to`
    Bumped {
        from: Version,
        to: Version,
        marker: Marker,
        /// The version file did not exist before this run
        created: bool,
        /// Nothing was written
        dry_run: bool,
    },
}

impl BumpOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, BumpOutcome::Bumped { .. })
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        if self.changed() {
            EXIT_CHANGED
        } else {
            EXIT_UNCHANGED
        }
    }
}

/// Result of a bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub outcome: BumpOutcome,

    /// The message the decision was based on
    pub commit_message: String,

    pub warnings: Vec<BoundaryWarning>,
}

/// Main bump workflow
///
/// The skip guard is checked before the version file is even read, so a
/// skipped run never touches it, not even a malformed one.
///
/// # Errors
/// Fails on git errors from `source`, a malformed version file, a bump that
/// would overflow, or I/O errors while reading or writing the file.
pub fn run_bump_workflow<S: CommitSource>(
    args: &BumpWorkflowArgs,
    analyzer: &IncrementAnalyzer,
    source: &S,
) -> Result<WorkflowResult> {
    let (message, decision) = analyzer.decide_latest(source)?;
    let mut warnings = Vec::new();

    let marker = match decision {
        Decision::Skip { token } => {
            tracing::info!(%token, "skip guard matched, leaving version unchanged");
            return Ok(WorkflowResult {
                outcome: BumpOutcome::Skipped { token },
                commit_message: message.as_str().to_string(),
                warnings,
            });
        }
        Decision::Bump(marker) => marker,
    };

    if message.is_blank() {
        warnings.push(BoundaryWarning::EmptyCommitMessage);
    }

    let store = VersionStore::new(&args.version_file);
    let loaded = store.load()?;
    if !loaded.exists {
        warnings.push(BoundaryWarning::MissingVersionFile {
            path: args.version_file.clone(),
        });
    }

    let next = bump(loaded.version, marker)?;
    tracing::info!(from = %loaded.version, to = %next, %marker, "computed next version");

    if !args.dry_run {
        store.save(next)?;
    }

    Ok(WorkflowResult {
        outcome: BumpOutcome::Bumped {
            from: loaded.version,
            to: next,
            marker,
            created: !loaded.exists,
            dry_run: args.dry_run,
        },
        commit_message: message.as_str().to_string(),
        warnings,
    })
}
