use crate::error::{AutoVersionError, Result};
use crate::git::CommitSource;

/// Mock repository for testing without actual git operations
///
/// Holds commit messages oldest first; HEAD is the last one.
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    messages: Vec<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository::default()
    }

    /// Add a commit on top of the current HEAD
    pub fn add_commit(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Builder-style variant of [`MockRepository::add_commit`]
    pub fn with_commit(mut self, message: impl Into<String>) -> Self {
        self.add_commit(message);
        self
    }

    pub fn commit_count(&self) -> usize {
        self.messages.len()
    }
}

impl CommitSource for MockRepository {
    fn latest_message(&self) -> Result<String> {
        self.messages
            .last()
            .map(|m| m.trim_end().to_string())
            .ok_or_else(|| {
                AutoVersionError::Git(git2::Error::from_str(
                    "reference 'refs/heads/main' not found",
                ))
            })
    }
}
