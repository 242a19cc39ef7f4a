/// Ghost text overlay contract
///
/// The overlay is a layer drawn on top of the field that shows the suggestion
/// right where the typed text ends. Renderers only project the values they are
/// given; they never read or change session state.
use crate::types::{FieldLayout, FontStyle};

/// Default style identifier applied to the overlay
pub const DEFAULT_SUGGESTION_CLASS: &str = "eac-sugg";

/// Ghost text styling information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GhostTextStyle {
    /// Lighter color (typical ghost text)
    #[default]
    Faded,
    /// Dimmed
    Dimmed,
    /// Italicized
    Italic,
}

/// Static overlay setup, handed to the renderer once when a field is bound
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Identifier for external styling; no behavioral effect
    pub class_name: String,
    /// Copied from the field so the join with the typed text is seamless
    pub font: FontStyle,
    /// Padding above and below the text line, aligning the overlay baseline with the field's
    pub vertical_padding: f32,
    pub style: GhostTextStyle,
}

impl OverlayStyle {
    pub fn for_field(class_name: impl Into<String>, font: FontStyle, layout: &FieldLayout) -> Self {
        Self {
            class_name: class_name.into(),
            font,
            vertical_padding: layout.vertical_padding(),
            style: GhostTextStyle::default(),
        }
    }
}

/// One repaint of the overlay
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayFrame {
    /// Suggestion text; empty renders nothing
    pub text: String,
    /// Distance from the field's left edge where the text starts
    pub left: f32,
}

impl OverlayFrame {
    pub fn new(text: impl Into<String>, left: f32) -> Self {
        Self {
            text: text.into(),
            left,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Ghost text renderer trait for UI integration
pub trait GhostTextRenderer: Send {
    /// Create the overlay layer. Called once per bound field.
    fn mount(&mut self, _style: &OverlayStyle) {}

    /// Repaint the overlay with the given frame
    fn render(&mut self, frame: &OverlayFrame);

    /// Remove any displayed text
    fn clear(&mut self);
}

impl<T: GhostTextRenderer + ?Sized> GhostTextRenderer for Box<T> {
    fn mount(&mut self, style: &OverlayStyle) {
        (**self).mount(style)
    }

    fn render(&mut self, frame: &OverlayFrame) {
        (**self).render(frame)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// Headless renderer that keeps the latest frame.
///
/// Hosts that paint in their own render pass (immediate-mode UIs, terminals)
/// read the frame back from here.
#[derive(Debug, Clone, Default)]
pub struct BufferedGhostTextRenderer {
    style: Option<OverlayStyle>,
    frame: Option<OverlayFrame>,
    mounts: usize,
    renders: usize,
}

impl BufferedGhostTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> Option<&OverlayStyle> {
        self.style.as_ref()
    }

    /// Latest frame, `None` before the first render
    pub fn frame(&self) -> Option<&OverlayFrame> {
        self.frame.as_ref()
    }

    /// Text currently visible on the overlay
    pub fn visible_text(&self) -> &str {
        self.frame.as_ref().map(|f| f.text.as_str()).unwrap_or("")
    }

    pub fn mount_count(&self) -> usize {
        self.mounts
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl GhostTextRenderer for BufferedGhostTextRenderer {
    fn mount(&mut self, style: &OverlayStyle) {
        self.style = Some(style.clone());
        self.mounts += 1;
    }

    fn render(&mut self, frame: &OverlayFrame) {
        self.frame = Some(frame.clone());
        self.renders += 1;
    }

    fn clear(&mut self) {
        // position is kept, only the text goes
        if let Some(frame) = self.frame.as_mut() {
            frame.text.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_style_for_field() {
        let layout = FieldLayout::new(120.0, 100.0, 30.0, 18.0);
        let style = OverlayStyle::for_field("eac-sugg", FontStyle::new("Helvetica"), &layout);
        assert_eq!(style.class_name, "eac-sugg");
        assert_eq!(style.font.family, "Helvetica");
        assert_eq!(style.vertical_padding, 6.0);
        assert_eq!(style.style, GhostTextStyle::Faded);
    }

    #[test]
    fn test_buffered_renderer_keeps_latest_frame() {
        let mut renderer = BufferedGhostTextRenderer::new();
        assert!(renderer.frame().is_none());

        renderer.render(&OverlayFrame::new("ail.com", 42.0));
        renderer.render(&OverlayFrame::new("il.com", 50.0));

        assert_eq!(renderer.visible_text(), "il.com");
        assert_eq!(renderer.frame().unwrap().left, 50.0);
        assert_eq!(renderer.render_count(), 2);
    }

    #[test]
    fn test_buffered_renderer_clear() {
        let mut renderer = BufferedGhostTextRenderer::new();
        renderer.render(&OverlayFrame::new("ail.com", 42.0));
        renderer.clear();

        assert_eq!(renderer.visible_text(), "");
        assert_eq!(renderer.frame().unwrap().left, 42.0);
    }

    #[test]
    fn test_boxed_renderer_forwards() {
        let mut boxed: Box<dyn GhostTextRenderer> = Box::new(BufferedGhostTextRenderer::new());
        boxed.render(&OverlayFrame::new("x", 1.0));
        boxed.clear();
    }
}
