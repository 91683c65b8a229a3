use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met while bumping or installing.
/// These should be reported to the user but never stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No version file yet; the run starts from 0.0.0
    MissingVersionFile { path: PathBuf },
    /// The workflow file already exists and was left untouched
    WorkflowExists { path: PathBuf },
    /// The latest commit has an empty message
    EmptyCommitMessage,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MissingVersionFile { path } => {
                write!(
                    f,
                    "Version file '{}' not found, starting from 0.0.0",
                    path.display()
                )
            }
            BoundaryWarning::WorkflowExists { path } => {
                write!(
                    f,
                    "Workflow '{}' already exists, keeping it (use --force to overwrite)",
                    path.display()
                )
            }
            BoundaryWarning::EmptyCommitMessage => {
                write!(f, "Latest commit message is empty, applying a patch bump")
            }
        }
    }
}
