//! Ghost text state for a single field session
//!
//! A session is either idle or showing a suggestion. There is no stale state:
//! every edit replaces the previous state wholesale.

/// Represents the state of the suggestion overlay
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GhostTextState {
    /// No suggestion is displayed
    #[default]
    Idle,
    /// A non-empty suggestion is displayed and can be accepted
    Suggesting(String),
}

impl GhostTextState {
    /// State for a freshly computed suggestion; empty text means idle.
    pub fn from_suggestion(suggestion: &str) -> Self {
        if suggestion.is_empty() {
            GhostTextState::Idle
        } else {
            GhostTextState::Suggesting(suggestion.to_string())
        }
    }

    /// The displayed suggestion, or `""` when idle
    pub fn suggestion(&self) -> &str {
        match self {
            GhostTextState::Idle => "",
            GhostTextState::Suggesting(text) => text,
        }
    }

    pub fn is_suggesting(&self) -> bool {
        matches!(self, GhostTextState::Suggesting(_))
    }

    /// Leave the state idle and return what was suggested, if anything.
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            GhostTextState::Idle => None,
            GhostTextState::Suggesting(text) => Some(text),
        }
    }
}
