//! Widget tests for the email input
//!
//! Renders into an in-memory buffer and checks where the typed text and the
//! ghost suggestion land.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mailhint_completion::{CompletionConfig, SessionOptions, TextField};
use mailhint_tui::{EmailInput, TerminalField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

fn type_text(input: &mut EmailInput, text: &str) {
    for c in text.chars() {
        input.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

fn render(input: &EmailInput, width: u16) -> Buffer {
    let area = Rect::new(0, 0, width, 3);
    let mut buffer = Buffer::empty(area);
    input.widget().render(area, &mut buffer);
    buffer
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[test]
fn test_ghost_text_follows_typed_text() {
    let mut input = EmailInput::from_config(24, &CompletionConfig::default());
    type_text(&mut input, "jo@gm");

    let buffer = render(&input, 24);
    let line = row(&buffer, 1);
    assert!(line.contains("jo@gmail.com"));

    // typed text keeps the default style, the suffix is faded
    assert_eq!(buffer[(1, 1)].symbol(), "j");
    assert_eq!(buffer[(1, 1)].fg, Color::Reset);
    assert_eq!(buffer[(6, 1)].symbol(), "a");
    assert_eq!(buffer[(6, 1)].fg, Color::DarkGray);
}

#[test]
fn test_border_is_drawn() {
    let input = EmailInput::from_config(10, &CompletionConfig::default());
    let buffer = render(&input, 10);

    assert_eq!(buffer[(0, 0)].symbol(), "┌");
    assert_eq!(buffer[(9, 2)].symbol(), "┘");
}

#[test]
fn test_no_ghost_without_suggestion() {
    let mut input = EmailInput::from_config(24, &CompletionConfig::default());
    type_text(&mut input, "jo@example");

    let buffer = render(&input, 24);
    assert!(row(&buffer, 1).contains("jo@example "));
    assert!((1..23).all(|x| buffer[(x, 1)].fg != Color::DarkGray));
}

#[test]
fn test_ghost_text_is_clipped_at_border() {
    let mut input = EmailInput::from_config(10, &CompletionConfig::default());
    type_text(&mut input, "ab@do");

    let buffer = render(&input, 10);
    assert_eq!(row(&buffer, 1), "│ab@docom│");
}

#[test]
fn test_accepted_value_renders_plain() {
    let mut input = EmailInput::from_config(24, &CompletionConfig::default());
    type_text(&mut input, "jo@gm");
    input.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));

    let buffer = render(&input, 24);
    assert!(row(&buffer, 1).contains("jo@gmail.com"));
    assert_eq!(buffer[(6, 1)].fg, Color::Reset);
}

#[test]
fn test_wide_characters_shift_ghost_text() {
    let config = CompletionConfig::new().with_domains(["例え.jp"], false);
    let mut input = EmailInput::from_config(24, &config);
    type_text(&mut input, "山@例");

    let buffer = render(&input, 24);
    // border, 山 (2 columns), @, 例 (2 columns)
    assert_eq!(buffer[(6, 1)].symbol(), "え");
    assert_eq!(buffer[(6, 1)].fg, Color::DarkGray);
}

#[test]
fn test_prefilled_overflowing_value_keeps_ghost_off_the_text() {
    let mut field = TerminalField::new(12);
    field.set_value("abcdefghijkl@g");
    let mut input = EmailInput::new(field, Default::default(), SessionOptions::new());
    type_text(&mut input, "m");
    assert_eq!(input.suggestion(), "ail.com");

    let buffer = render(&input, 12);
    assert_eq!(row(&buffer, 1), "│abcdefghij│");
    assert!((0..12).all(|x| buffer[(x, 1)].fg != Color::DarkGray));
}
