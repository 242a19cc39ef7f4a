//! Email input with inline domain suggestions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mailhint_completion::{
    BufferedGhostTextRenderer, CandidateList, CompletionConfig, EmailSession, EventOutcome,
    FieldEvent, Key, OverlayFrame, SessionOptions,
};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::field::TerminalField;
use crate::widget::EmailInputWidget;

type TerminalSession = EmailSession<TerminalField, BufferedGhostTextRenderer>;

/// A terminal email field wired to a suggestion session
pub struct EmailInput {
    session: TerminalSession,
}

impl EmailInput {
    pub fn new(field: TerminalField, candidates: CandidateList, options: SessionOptions) -> Self {
        Self {
            session: EmailSession::new(field, BufferedGhostTextRenderer::new(), candidates, options),
        }
    }

    pub fn from_config(width: u16, config: &CompletionConfig) -> Self {
        Self::new(
            TerminalField::new(width),
            config.candidates(),
            SessionOptions::from_config(config),
        )
    }

    /// Feed a key event.
    ///
    /// Replays what a browser does for one keystroke: key down, the edit
    /// itself, then key up. Releases are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> EventOutcome {
        if key.kind == KeyEventKind::Release {
            return EventOutcome::passthrough();
        }

        let down = self.session.handle(FieldEvent::KeyDown(map_key(key.code)));

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.session.field_mut().push(c);
            }
            KeyCode::Backspace => {
                self.session.field_mut().pop();
            }
            _ => {}
        }

        let up = self.session.handle(FieldEvent::KeyUp);

        EventOutcome {
            prevent_default: down.prevent_default || up.prevent_default,
            committed: down.committed,
        }
    }

    pub fn handle_focus_lost(&mut self) -> EventOutcome {
        self.session.handle(FieldEvent::Blur)
    }

    /// Mouse press at `column`, relative to the field's left edge.
    pub fn handle_click(&mut self, column: u16) -> EventOutcome {
        if !self.ghost_span().is_some_and(|(start, end)| (start..end).contains(&column)) {
            return EventOutcome::passthrough();
        }
        self.session.handle(FieldEvent::OverlayPressed)
    }

    /// Track a new field width. The text inset is measured again on the next edit.
    pub fn resize(&mut self, width: u16) {
        if self.session.field().width() == width {
            return;
        }
        debug!(width, "Resizing email input");
        self.session.field_mut().set_width(width);
        self.session.invalidate_layout();
    }

    pub fn value(&self) -> &str {
        self.session.field().as_str()
    }

    pub fn suggestion(&self) -> &str {
        self.session.suggestion()
    }

    pub fn field(&self) -> &TerminalField {
        self.session.field()
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    /// Column of the cursor, relative to the field's left edge
    pub fn cursor_column(&self) -> u16 {
        let field = self.session.field();
        field.padding() + field.text_width().min(field.inner_width())
    }

    pub fn widget(&self) -> EmailInputWidget<'_> {
        let renderer = self.session.renderer();
        EmailInputWidget::new(self.session.field(), renderer.frame())
            .ghost_style(renderer.style().map(|s| s.style).unwrap_or_default())
    }

    fn frame(&self) -> Option<&OverlayFrame> {
        self.session.renderer().frame()
    }

    /// Columns covered by the visible ghost text
    fn ghost_span(&self) -> Option<(u16, u16)> {
        let frame = self.frame().filter(|frame| !frame.is_empty())?;
        let start = frame.left.round() as u16;
        let width = u16::try_from(frame.text.width()).unwrap_or(u16::MAX);
        Some((start, start.saturating_add(width)))
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::End => Key::End,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(input: &mut EmailInput, text: &str) {
        for c in text.chars() {
            input.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::Right), Key::Right);
        assert_eq!(map_key(KeyCode::Char('x')), Key::Char('x'));
        assert_eq!(map_key(KeyCode::Esc), Key::Other);
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut input = EmailInput::from_config(30, &CompletionConfig::default());
        input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_release_is_ignored() {
        let mut input = EmailInput::from_config(30, &CompletionConfig::default());
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        input.handle_key(key);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_ghost_span_follows_text() {
        let mut input = EmailInput::from_config(30, &CompletionConfig::default());
        type_text(&mut input, "a@gm");
        // border column plus four typed columns
        assert_eq!(input.ghost_span(), Some((5, 12)));
        assert_eq!(input.cursor_column(), 5);
    }

    #[test]
    fn test_resize_remeasures_inset() {
        let mut input = EmailInput::from_config(30, &CompletionConfig::default());
        type_text(&mut input, "a");
        assert_eq!(input.session().cached_left_offset(), Some(1.0));

        input.resize(30);
        assert_eq!(input.session().cached_left_offset(), Some(1.0));

        input.resize(40);
        assert_eq!(input.session().cached_left_offset(), None);
        type_text(&mut input, "@");
        assert_eq!(input.session().cached_left_offset(), Some(1.0));
    }
}
