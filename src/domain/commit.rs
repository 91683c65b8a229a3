use super::version::Marker;

/// The latest commit message, as supplied by source control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    pub fn new(message: impl Into<String>) -> Self {
        CommitMessage(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Find the increment marker carried by this message.
    ///
    /// Matching is literal and case-sensitive. When several markers appear the
    /// highest one wins (`[major]` > `[minor]` > `[patch]`); a message without
    /// any marker is a patch.
    pub fn marker(&self) -> Marker {
        Marker::PRECEDENCE
            .into_iter()
            .find(|marker| self.0.contains(marker.token()))
            .unwrap_or(Marker::Patch)
    }

    /// Returns the first of `tokens` found in the message, if any
    pub fn find_token<'a>(&self, tokens: &'a [String]) -> Option<&'a str> {
        tokens
            .iter()
            .filter(|token| !token.is_empty())
            .find(|token| self.0.contains(token.as_str()))
            .map(String::as_str)
    }

    /// First line of the message, shortened for display
    pub fn summary(&self, max_chars: usize) -> String {
        let first_line = self.0.lines().next().unwrap_or("");
        if first_line.chars().count() > max_chars {
            let short: String = first_line.chars().take(max_chars).collect();
            format!("{}...", short)
        } else {
            first_line.to_string()
        }
    }
}

impl From<&str> for CommitMessage {
    fn from(message: &str) -> Self {
        CommitMessage::new(message)
    }
}

impl From<String> for CommitMessage {
    fn from(message: String) -> Self {
        CommitMessage(message)
    }
}
