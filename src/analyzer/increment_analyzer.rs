use crate::config::MarkersConfig;
use crate::domain::{CommitMessage, Marker, Version};
use crate::error::{AutoVersionError, Result};
use crate::git::CommitSource;

/// Decides whether and how a commit bumps the version
#[derive(Debug, Clone)]
pub struct IncrementAnalyzer {
    skip_markers: Vec<String>,
}

/// What the analyzer concluded about one commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The commit carries a skip-guard token
    Skip { token: String },
    /// The commit bumps the given component
    Bump(Marker),
}

impl IncrementAnalyzer {
    /// Create a new analyzer
    pub fn new(config: &MarkersConfig) -> Self {
        IncrementAnalyzer {
            skip_markers: config.skip.clone(),
        }
    }

    /// Marker selected by the message; Patch when no marker is present
    pub fn classify(&self, message: &CommitMessage) -> Marker {
        message.marker()
    }

    /// True if the message was produced by a previous automated version
    /// update and must not trigger another one
    pub fn should_skip(&self, message: &CommitMessage) -> bool {
        message.find_token(&self.skip_markers).is_some()
    }

    /// Skip guard first, then classification
    pub fn decide(&self, message: &CommitMessage) -> Decision {
        match message.find_token(&self.skip_markers) {
            Some(token) => Decision::Skip {
                token: token.to_string(),
            },
            None => Decision::Bump(self.classify(message)),
        }
    }

    /// Reads the latest message from `source` and decides on it
    pub fn decide_latest<S: CommitSource>(&self, source: &S) -> Result<(CommitMessage, Decision)> {
        let message = CommitMessage::new(source.latest_message()?);
        let decision = self.decide(&message);
        Ok((message, decision))
    }
}

impl Default for IncrementAnalyzer {
    fn default() -> Self {
        IncrementAnalyzer::new(&MarkersConfig::default())
    }
}

/// Next version for `current` under `marker`
///
/// # Errors
/// `VersionOverflow` when the bumped component does not fit in a `u64`.
pub fn bump(current: Version, marker: Marker) -> Result<Version> {
    current
        .bump(marker)
        .ok_or(AutoVersionError::VersionOverflow {
            version: current,
            marker,
        })
}
