use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use auto_version::analyzer::IncrementAnalyzer;
use auto_version::boundary::BoundaryWarning;
use auto_version::cli::orchestration::{self, BumpWorkflowArgs, EXIT_FAILURE};
use auto_version::cli::setup::{self, SetupArgs};
use auto_version::config::{self, Config};
use auto_version::domain::CommitMessage;
use auto_version::git::{CommitSource, FixedMessage, Git2Repository};
use auto_version::store::VersionStore;
use auto_version::ui;

/// Environment variable holding the log filter
const LOG_ENV: &str = "AUTO_VERSION_LOG";

/// Exit code for commands other than `bump` that completed
const EXIT_SUCCESS: u8 = 0;

#[derive(clap::Parser)]
#[command(
    name = "auto-version",
    version,
    about = "Bump a semantic version file from [major]/[minor]/[patch] commit markers"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bump the version according to the latest commit message
    ///
    /// Exits 0 when the version changed, 1 when the commit was skipped.
    Bump {
        #[arg(short, long, help = "Version file (overrides VERSION_FILE)")]
        file: Option<PathBuf>,

        #[arg(
            short,
            long,
            env = "COMMIT_MESSAGE",
            help = "Use this commit message instead of reading HEAD"
        )]
        message: Option<String>,

        #[arg(long, default_value = ".", help = "Repository to read HEAD from")]
        repo: PathBuf,

        #[arg(long, help = "Preview the new version without writing it")]
        dry_run: bool,
    },

    /// Install the CI workflow and create the version file
    Setup {
        #[arg(long, default_value = ".", help = "Repository root")]
        root: PathBuf,

        #[arg(short, long, help = "Version file (overrides VERSION_FILE)")]
        file: Option<PathBuf>,

        #[arg(long, help = "Custom workflow template")]
        template: Option<PathBuf>,

        #[arg(long, help = "Overwrite an existing workflow without asking")]
        force: bool,
    },

    /// Print the current version
    Current {
        #[arg(short, long, help = "Version file (overrides VERSION_FILE)")]
        file: Option<PathBuf>,

        #[arg(short, long, help = "Print only the version number")]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: Args) -> Result<u8> {
    let config = config::load_config(args.config.as_deref())?;

    match args.command {
        Command::Bump {
            file,
            message,
            repo,
            dry_run,
        } => {
            let workflow_args = BumpWorkflowArgs {
                version_file: config.version_file_from_env(file.as_deref()),
                dry_run,
            };
            let source = commit_source(message, &repo)?;
            bump(&config, &workflow_args, source.as_ref())
        }
        Command::Setup {
            root,
            file,
            template,
            force,
        } => {
            let setup_args = SetupArgs {
                root,
                version_file: config.version_file_from_env(file.as_deref()),
                workflow_path: config.setup.workflow_path.clone(),
                template,
                force,
            };
            let report = setup::run_setup(&setup_args, |path| {
                let prompt = format!("Workflow {} already exists. Overwrite?", path.display());
                Ok(ui::confirm_action(&prompt)?)
            })?;
            if report.workflow == setup::WorkflowStatus::Kept {
                ui::display_boundary_warning(&BoundaryWarning::WorkflowExists {
                    path: report.workflow_path.clone(),
                });
            }
            ui::display_setup_report(&report);
            Ok(EXIT_SUCCESS)
        }
        Command::Current { file, quiet } => {
            let path = config.version_file_from_env(file.as_deref());
            current(&path, quiet)
        }
    }
}

fn commit_source(message: Option<String>, repo: &Path) -> Result<Box<dyn CommitSource>> {
    match message {
        Some(message) => Ok(Box::new(FixedMessage::new(message))),
        None => {
            let repository = Git2Repository::discover(repo)
                .with_context(|| format!("cannot open git repository at {}", repo.display()))?;
            Ok(Box::new(repository))
        }
    }
}

fn bump(config: &Config, args: &BumpWorkflowArgs, source: &dyn CommitSource) -> Result<u8> {
    let analyzer = IncrementAnalyzer::new(&config.markers);
    let result = orchestration::run_bump_workflow(args, &analyzer, &source)?;

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }
    let summary = CommitMessage::new(result.commit_message.as_str()).summary(50);
    ui::display_outcome(&result.outcome, &summary);

    Ok(result.outcome.exit_code())
}

fn current(path: &Path, quiet: bool) -> Result<u8> {
    let loaded = VersionStore::new(path).load()?;
    if quiet {
        println!("{}", loaded.version);
        return Ok(EXIT_SUCCESS);
    }

    if !loaded.exists {
        ui::display_boundary_warning(&BoundaryWarning::MissingVersionFile {
            path: path.to_path_buf(),
        });
    }
    println!("{}", loaded.version);
    Ok(EXIT_SUCCESS)
}
