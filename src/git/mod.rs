//! Commit message sources
//!
//! The bump workflow only needs one thing from source control: the message
//! of the latest commit. [CommitSource] abstracts that so the workflow can
//! run against a real repository, a message given on the command line, or a
//! mock in tests.
//!
//! - [repository::Git2Repository]: reads HEAD through the `git2` crate
//! - [FixedMessage]: an explicit message (`--message` / `COMMIT_MESSAGE`)
//! - [mock::MockRepository]: in-memory history for tests

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Supplies the message of the latest commit.
///
/// Implementations must not modify history; the message is read-only input.
pub trait CommitSource {
    /// Full message of the most recent commit, without trailing whitespace
    fn latest_message(&self) -> Result<String>;
}

/// A commit message provided up front instead of read from a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMessage(pub String);

impl FixedMessage {
    pub fn new(message: impl Into<String>) -> Self {
        FixedMessage(message.into())
    }
}

impl CommitSource for FixedMessage {
    fn latest_message(&self) -> Result<String> {
        Ok(self.0.trim_end().to_string())
    }
}

impl<T: CommitSource + ?Sized> CommitSource for &T {
    fn latest_message(&self) -> Result<String> {
        (**self).latest_message()
    }
}

impl<T: CommitSource + ?Sized> CommitSource for Box<T> {
    fn latest_message(&self) -> Result<String> {
        (**self).latest_message()
    }
}
