//! Installs auto-versioning into a repository: the CI workflow that runs
//! `auto-version bump` on every push, and an initial version file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Version;
use crate::error::{AutoVersionError, Result};
use crate::store::VersionStore;

/// Workflow shipped with the binary
pub const BUNDLED_WORKFLOW: &str = include_str!("../../templates/auto-version.yml");

/// Placeholder replaced by the version file path when rendering a template
pub const VERSION_FILE_PLACEHOLDER: &str = "{{version_file}}";

/// Arguments for the setup workflow
#[derive(Debug, Clone, PartialEq)]
pub struct SetupArgs {
    /// Repository root the paths below are relative to
    pub root: PathBuf,

    /// Version file, relative to `root` unless absolute
    pub version_file: PathBuf,

    /// Workflow destination, relative to `root` unless absolute
    pub workflow_path: PathBuf,

    /// Custom template instead of the bundled workflow
    pub template: Option<PathBuf>,

    /// Overwrite an existing workflow without asking
    pub force: bool,
}

/// What happened to the workflow file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Installed,
    Overwritten,
    /// It already existed and the overwrite was declined
    Kept,
}

/// Result of a setup run
#[derive(Debug, Clone, PartialEq)]
pub struct SetupReport {
    pub workflow_path: PathBuf,
    pub workflow: WorkflowStatus,
    pub version_file: PathBuf,
    /// False when a version file was already present
    pub version_created: bool,
}

/// Runs setup.
///
/// `confirm_overwrite` is consulted only when the workflow already exists
/// and `force` is off.
pub fn run_setup<F>(args: &SetupArgs, mut confirm_overwrite: F) -> Result<SetupReport>
where
    F: FnMut(&Path) -> Result<bool>,
{
    let template = load_template(args.template.as_deref())?;
    let rendered = render_template(&template, &args.version_file);

    let workflow_path = args.root.join(&args.workflow_path);
    let workflow = if workflow_path.exists() {
        if args.force || confirm_overwrite(&workflow_path)? {
            write_file(&workflow_path, &rendered)?;
            WorkflowStatus::Overwritten
        } else {
            tracing::info!(path = %workflow_path.display(), "keeping existing workflow");
            WorkflowStatus::Kept
        }
    } else {
        write_file(&workflow_path, &rendered)?;
        WorkflowStatus::Installed
    };

    let version_file = args.root.join(&args.version_file);
    let version_created = VersionStore::new(&version_file).create_if_missing(Version::initial())?;
    tracing::info!(
        workflow = ?workflow,
        version_created,
        "setup finished"
    );

    Ok(SetupReport {
        workflow_path,
        workflow,
        version_file,
        version_created,
    })
}

/// Reads a custom template, or returns the bundled one
pub fn load_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AutoVersionError::template(format!("cannot read {}: {}", path.display(), e))
        }),
        None => Ok(BUNDLED_WORKFLOW.to_string()),
    }
}

/// Substitutes the version file path into a workflow template
pub fn render_template(template: &str, version_file: &Path) -> String {
    let path = version_file.to_string_lossy().replace('\\', "/");
    template.replace(VERSION_FILE_PLACEHOLDER, &path)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), "wrote workflow");
    Ok(())
}
