//! Core data types shared by the session controller, registry and host adapters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CompletionError;

/// Identity of a bound input field.
///
/// Hosts pick the identifier (a DOM node id, a widget index, ...); the
/// registry only requires it to be stable for the field's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldId(u64);

impl FieldId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

/// Box metrics of a field, in the host's length unit (pixels, cells, ...)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldLayout {
    /// Width including padding, border and margin
    pub outer_width: f32,
    /// Width of the content box
    pub inner_width: f32,
    /// Height including padding, border and margin
    pub outer_height: f32,
    /// Height of the content box
    pub inner_height: f32,
}

impl FieldLayout {
    pub fn new(outer_width: f32, inner_width: f32, outer_height: f32, inner_height: f32) -> Self {
        Self {
            outer_width,
            inner_width,
            outer_height,
            inner_height,
        }
    }

    /// Distance between the field's outer left edge and where its text starts.
    ///
    /// Assumes the horizontal chrome is split evenly between both sides.
    pub fn horizontal_inset(&self) -> f32 {
        ((self.outer_width - self.inner_width) / 2.0).max(0.0)
    }

    /// Padding above (and below) the text line.
    pub fn vertical_padding(&self) -> f32 {
        ((self.outer_height - self.inner_height) / 2.0).max(0.0)
    }
}

/// Font properties the overlay copies from the field so the ghost text joins seamlessly.
///
/// Values are opaque host strings (CSS values for a browser host, empty for a terminal).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FontStyle {
    pub family: String,
    pub weight: String,
    pub letter_spacing: String,
    pub line_height: String,
}

impl FontStyle {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..Self::default()
        }
    }
}

/// Logical key reported by the host on key-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Tab,
    Left,
    Right,
    End,
    Other,
}

/// Keys that commit the active suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcceptKey {
    Right,
    Tab,
    Enter,
    End,
}

impl AcceptKey {
    /// Forward arrow and tab
    pub fn defaults() -> Vec<AcceptKey> {
        vec![AcceptKey::Right, AcceptKey::Tab]
    }

    pub fn matches(self, key: Key) -> bool {
        matches!(
            (self, key),
            (AcceptKey::Right, Key::Right)
                | (AcceptKey::Tab, Key::Tab)
                | (AcceptKey::Enter, Key::Enter)
                | (AcceptKey::End, Key::End)
        )
    }
}

impl fmt::Display for AcceptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcceptKey::Right => write!(f, "right"),
            AcceptKey::Tab => write!(f, "tab"),
            AcceptKey::Enter => write!(f, "enter"),
            AcceptKey::End => write!(f, "end"),
        }
    }
}

impl FromStr for AcceptKey {
    type Err = CompletionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "right" | "arrowright" => Ok(AcceptKey::Right),
            "tab" => Ok(AcceptKey::Tab),
            "enter" | "return" => Ok(AcceptKey::Enter),
            "end" => Ok(AcceptKey::End),
            _ => Err(CompletionError::ConfigError(format!(
                "Unknown accept key: {}",
                s
            ))),
        }
    }
}

/// Events a host forwards for one bound field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// A key was released; the field value may have changed
    KeyUp,
    /// A key was pressed, before the field applies it
    KeyDown(Key),
    /// The field lost focus
    Blur,
    /// Pointer or touch activation on the suggestion overlay
    OverlayPressed,
}

/// What the host should do after an event was handled
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// Suppress the host's default handling for this event
    pub prevent_default: bool,
    /// Final field value when the event committed a suggestion
    pub committed: Option<String>,
}

impl EventOutcome {
    pub fn passthrough() -> Self {
        Self::default()
    }

    pub fn committed(value: String) -> Self {
        Self {
            prevent_default: false,
            committed: Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_inset_is_half_of_chrome() {
        let layout = FieldLayout::new(220.0, 200.0, 40.0, 20.0);
        assert_eq!(layout.horizontal_inset(), 10.0);
        assert_eq!(layout.vertical_padding(), 10.0);
    }

    #[test]
    fn test_inset_never_negative() {
        let layout = FieldLayout::new(10.0, 20.0, 1.0, 1.0);
        assert_eq!(layout.horizontal_inset(), 0.0);
    }

    #[test]
    fn test_accept_key_matching() {
        assert!(AcceptKey::Right.matches(Key::Right));
        assert!(AcceptKey::Tab.matches(Key::Tab));
        assert!(!AcceptKey::Tab.matches(Key::Right));
        assert!(!AcceptKey::Enter.matches(Key::Char('\n')));
    }

    #[test]
    fn test_accept_key_from_str() {
        assert_eq!("Right".parse::<AcceptKey>().unwrap(), AcceptKey::Right);
        assert_eq!("ArrowRight".parse::<AcceptKey>().unwrap(), AcceptKey::Right);
        assert_eq!("return".parse::<AcceptKey>().unwrap(), AcceptKey::Enter);
        assert!("space".parse::<AcceptKey>().is_err());
    }

    #[test]
    fn test_accept_key_display_round_trips() {
        for key in [AcceptKey::Right, AcceptKey::Tab, AcceptKey::Enter, AcceptKey::End] {
            assert_eq!(key.to_string().parse::<AcceptKey>().unwrap(), key);
        }
    }
}
