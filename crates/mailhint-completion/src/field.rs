//! Host-side text field capability

use crate::types::{FieldLayout, FontStyle};

/// The editable input a session is bound to.
///
/// Implemented by host adapters. The session reads the value after each key
/// release, writes the committed value on acceptance, and measures text in the
/// field's font to position the overlay.
pub trait TextField: Send {
    /// Current content of the field
    fn value(&self) -> String;

    /// Replace the content of the field
    fn set_value(&mut self, value: &str);

    /// Box metrics used to locate the start of the text
    fn layout(&self) -> FieldLayout;

    /// Font the overlay must copy
    fn font(&self) -> FontStyle {
        FontStyle::default()
    }

    /// Rendered width of `text` in the field's font
    fn measure_text(&self, text: &str) -> f32;
}

impl<T: TextField + ?Sized> TextField for Box<T> {
    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&mut self, value: &str) {
        (**self).set_value(value)
    }

    fn layout(&self) -> FieldLayout {
        (**self).layout()
    }

    fn font(&self) -> FontStyle {
        (**self).font()
    }

    fn measure_text(&self, text: &str) -> f32 {
        (**self).measure_text(text)
    }
}

/// In-memory field with a fixed advance per character.
///
/// Useful for headless hosts and tests.
#[derive(Debug, Clone)]
pub struct MemoryField {
    value: String,
    layout: FieldLayout,
    font: FontStyle,
    char_width: f32,
}

impl MemoryField {
    pub fn new(layout: FieldLayout, char_width: f32) -> Self {
        Self {
            value: String::new(),
            layout,
            font: FontStyle::default(),
            char_width,
        }
    }

    pub fn with_font(mut self, font: FontStyle) -> Self {
        self.font = font;
        self
    }

    /// Simulate the user typing; does not notify any session.
    pub fn type_str(&mut self, text: &str) {
        self.value.push_str(text);
    }

    pub fn backspace(&mut self) -> Option<char> {
        self.value.pop()
    }

    pub fn set_layout(&mut self, layout: FieldLayout) {
        self.layout = layout;
    }
}

impl Default for MemoryField {
    fn default() -> Self {
        Self::new(FieldLayout::new(220.0, 200.0, 32.0, 20.0), 8.0)
    }
}

impl TextField for MemoryField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn layout(&self) -> FieldLayout {
        self.layout
    }

    fn font(&self) -> FontStyle {
        self.font.clone()
    }

    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}
