use mailhint_completion::{GhostTextStyle, OverlayFrame};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Widget},
};

use crate::field::TerminalField;

/// Paints an email field and its ghost suggestion
pub struct EmailInputWidget<'a> {
    field: &'a TerminalField,
    frame: Option<&'a OverlayFrame>,
    text_style: Style,
    ghost_style: Style,
}

impl<'a> EmailInputWidget<'a> {
    pub fn new(field: &'a TerminalField, frame: Option<&'a OverlayFrame>) -> Self {
        Self {
            field,
            frame,
            text_style: Style::default(),
            ghost_style: ghost_style_for(GhostTextStyle::default()),
        }
    }

    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    pub fn ghost_style(mut self, style: GhostTextStyle) -> Self {
        self.ghost_style = ghost_style_for(style);
        self
    }
}

/// Terminal rendition of the overlay style
pub fn ghost_style_for(style: GhostTextStyle) -> Style {
    match style {
        GhostTextStyle::Faded => Style::default().fg(Color::DarkGray),
        GhostTextStyle::Dimmed => Style::default().add_modifier(Modifier::DIM),
        GhostTextStyle::Italic => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    }
}

impl Widget for EmailInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let padding = self.field.padding();
        if padding > 0 {
            Block::bordered().render(area, buf);
        }

        let y = area.y + padding;
        let text_x = area.x + padding;
        let text_end = area.right().saturating_sub(padding);
        if y >= area.bottom() || text_x >= text_end {
            return;
        }

        buf.set_stringn(
            text_x,
            y,
            self.field.as_str(),
            usize::from(text_end - text_x),
            self.text_style,
        );

        // overlay positions are relative to the field's outer left edge
        if let Some(frame) = self.frame.filter(|frame| !frame.is_empty()) {
            let ghost_x = area.x.saturating_add(frame.left.round() as u16);
            if ghost_x < text_end {
                buf.set_stringn(
                    ghost_x,
                    y,
                    &frame.text,
                    usize::from(text_end - ghost_x),
                    self.ghost_style,
                );
            }
        }
    }
}
