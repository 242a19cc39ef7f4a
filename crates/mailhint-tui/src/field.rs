//! Terminal-backed text field

use mailhint_completion::{FieldLayout, TextField};
use unicode_width::UnicodeWidthStr;

/// Single-line field drawn in a terminal, one unit per column.
///
/// The cursor always sits at the end of the value. `padding` is the number of
/// columns (and rows) of chrome on each side, 1 for a bordered box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalField {
    value: String,
    width: u16,
    padding: u16,
}

impl TerminalField {
    pub fn new(width: u16) -> Self {
        Self {
            value: String::new(),
            width,
            padding: 1,
        }
    }

    pub fn with_padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.value.pop()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn padding(&self) -> u16 {
        self.padding
    }

    /// Columns available for text inside the chrome
    pub fn inner_width(&self) -> u16 {
        self.width.saturating_sub(self.padding * 2)
    }

    /// Rows taken by the field, text line included
    pub fn height(&self) -> u16 {
        1 + self.padding * 2
    }

    /// Display width of the current value
    pub fn text_width(&self) -> u16 {
        u16::try_from(self.value.width()).unwrap_or(u16::MAX)
    }
}

impl TextField for TerminalField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn layout(&self) -> FieldLayout {
        FieldLayout::new(
            f32::from(self.width),
            f32::from(self.inner_width()),
            f32::from(self.height()),
            1.0,
        )
    }

    fn measure_text(&self, text: &str) -> f32 {
        text.width() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_of_bordered_field() {
        let field = TerminalField::new(30);
        let layout = field.layout();

        assert_eq!(layout.outer_width, 30.0);
        assert_eq!(layout.inner_width, 28.0);
        assert_eq!(layout.horizontal_inset(), 1.0);
        assert_eq!(layout.vertical_padding(), 1.0);
    }

    #[test]
    fn test_borderless_field() {
        let field = TerminalField::new(30).with_padding(0);
        assert_eq!(field.layout().horizontal_inset(), 0.0);
        assert_eq!(field.height(), 1);
    }

    #[test]
    fn test_measure_uses_display_width() {
        let field = TerminalField::new(30);
        assert_eq!(field.measure_text("ab@"), 3.0);
        assert_eq!(field.measure_text("山田@"), 5.0);
    }

    #[test]
    fn test_push_pop() {
        let mut field = TerminalField::new(10);
        field.push('a');
        field.push('@');
        assert_eq!(field.as_str(), "a@");
        assert_eq!(field.pop(), Some('@'));
        assert_eq!(field.text_width(), 1);

        field.clear();
        assert_eq!(field.pop(), None);
    }

    #[test]
    fn test_tiny_width_saturates() {
        let field = TerminalField::new(1);
        assert_eq!(field.inner_width(), 0);
    }
}
