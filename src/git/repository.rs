use crate::error::Result;
use crate::git::CommitSource;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository containing `path`, searching parent directories
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        tracing::debug!(git_dir = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl CommitSource for Git2Repository {
    fn latest_message(&self) -> Result<String> {
        let commit = self.repo.head()?.peel_to_commit()?;
        let message = String::from_utf8_lossy(commit.message_bytes())
            .trim_end()
            .to_string();
        tracing::debug!(commit = %commit.id(), "read HEAD commit message");
        Ok(message)
    }
}
