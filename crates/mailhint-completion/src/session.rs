//! Per-field editing session
//!
//! `EmailSession` mediates between field events, the matcher and the overlay.
//! It owns the field's last seen value and the current suggestion, and is the
//! only place either changes.

use std::fmt;

use tracing::{debug, info};

use crate::candidates::CandidateList;
use crate::config::CompletionConfig;
use crate::field::TextField;
use crate::ghost_text::{GhostTextRenderer, OverlayFrame, OverlayStyle};
use crate::ghost_text_state::GhostTextState;
use crate::matcher::DomainMatcher;
use crate::types::{AcceptKey, EventOutcome, FieldEvent, Key};

/// Called with the final field value after a suggestion is committed
pub type AcceptedCallback = Box<dyn FnMut(&str) + Send>;

/// Per-session options that are not candidate related
pub struct SessionOptions {
    pub suggestion_class: String,
    pub accept_keys: Vec<AcceptKey>,
    pub on_accepted: Option<AcceptedCallback>,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::from_config(&CompletionConfig::default())
    }

    pub fn from_config(config: &CompletionConfig) -> Self {
        Self {
            suggestion_class: config.suggestion_class.clone(),
            accept_keys: config.accept_keys.clone(),
            on_accepted: None,
        }
    }

    pub fn on_accepted<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.on_accepted = Some(Box::new(callback));
        self
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionOptions")
            .field("suggestion_class", &self.suggestion_class)
            .field("accept_keys", &self.accept_keys)
            .field("on_accepted", &self.on_accepted.is_some())
            .finish()
    }
}

/// Editing session for one bound field
pub struct EmailSession<F, R> {
    field: F,
    renderer: R,
    matcher: DomainMatcher,
    accept_keys: Vec<AcceptKey>,
    on_accepted: Option<AcceptedCallback>,
    raw_value: String,
    state: GhostTextState,
    /// Inset of the text start within the field box; computed on first edit
    left_offset: Option<f32>,
    /// Where the overlay was last placed; `None` until the first edit
    overlay_left: Option<f32>,
    typed_width: f32,
}

impl<F, R> EmailSession<F, R>
where
    F: TextField,
    R: GhostTextRenderer,
{
    /// Bind a session to `field`, mounting the overlay on `renderer`.
    pub fn new(field: F, mut renderer: R, candidates: CandidateList, options: SessionOptions) -> Self {
        let style = OverlayStyle::for_field(options.suggestion_class, field.font(), &field.layout());
        renderer.mount(&style);

        let raw_value = field.value();

        Self {
            field,
            renderer,
            matcher: DomainMatcher::new(candidates),
            accept_keys: options.accept_keys,
            on_accepted: options.on_accepted,
            raw_value,
            state: GhostTextState::Idle,
            left_offset: None,
            overlay_left: None,
            typed_width: 0.0,
        }
    }

    /// Dispatch a host event.
    pub fn handle(&mut self, event: FieldEvent) -> EventOutcome {
        match event {
            FieldEvent::KeyUp => {
                let text = self.field.value();
                self.on_edit(&text)
            }
            FieldEvent::KeyDown(key) => self.on_key_down(key),
            FieldEvent::Blur => self.accept_outcome(),
            FieldEvent::OverlayPressed => match self.on_accept_gesture() {
                Some(value) => EventOutcome::committed(value),
                None => EventOutcome::passthrough(),
            },
        }
    }

    /// Record the field's new text and recompute the suggestion.
    ///
    /// The outcome asks the host to suppress its default handling whenever a
    /// suggestion is showing.
    pub fn on_edit(&mut self, current_text: &str) -> EventOutcome {
        self.raw_value = current_text.to_string();
        self.state = GhostTextState::from_suggestion(self.matcher.suggest(&self.raw_value));

        let left_offset = self.left_offset();
        self.typed_width = self.field.measure_text(&self.raw_value);

        // once the text overflows the field the overlay stays where it was
        let overlay_left = match self.overlay_left {
            Some(left) if self.field.layout().outer_width <= self.typed_width => left,
            _ => left_offset + self.typed_width,
        };
        self.overlay_left = Some(overlay_left);

        self.renderer
            .render(&OverlayFrame::new(self.state.suggestion(), overlay_left));

        debug!(
            value = %self.raw_value,
            suggestion = %self.state.suggestion(),
            left = overlay_left,
            "Recomputed email suggestion"
        );

        EventOutcome {
            prevent_default: self.state.is_suggesting(),
            committed: None,
        }
    }

    /// Commit the displayed suggestion into the field.
    ///
    /// Returns the committed value, or `None` (and changes nothing) when no
    /// suggestion is displayed.
    pub fn on_accept_trigger(&mut self) -> Option<String> {
        let suggestion = self.state.take()?;

        let value = format!("{}{}", self.raw_value, suggestion);
        self.field.set_value(&value);
        self.raw_value.clone_from(&value);
        self.typed_width = 0.0;
        self.renderer.clear();

        info!(value = %value, "Accepted email suggestion");

        if let Some(callback) = self.on_accepted.as_mut() {
            callback(&value);
        }

        Some(value)
    }

    /// Pointer or touch activation on the overlay; same as an accept trigger.
    pub fn on_accept_gesture(&mut self) -> Option<String> {
        self.on_accept_trigger()
    }

    /// Forget the cached text inset; it is measured again on the next edit.
    pub fn invalidate_layout(&mut self) {
        self.left_offset = None;
    }

    fn on_key_down(&mut self, key: Key) -> EventOutcome {
        if self.accept_keys.iter().any(|accept| accept.matches(key)) {
            self.accept_outcome()
        } else {
            EventOutcome::passthrough()
        }
    }

    fn accept_outcome(&mut self) -> EventOutcome {
        match self.on_accept_trigger() {
            Some(value) => EventOutcome::committed(value),
            None => EventOutcome::passthrough(),
        }
    }

    fn left_offset(&mut self) -> f32 {
        match self.left_offset {
            Some(offset) => offset,
            None => {
                let offset = self.field.layout().horizontal_inset();
                debug!(offset, "Measured field text inset");
                self.left_offset = Some(offset);
                offset
            }
        }
    }

    /// Field text as of the last edit or commit
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Displayed suggestion, `""` when none
    pub fn suggestion(&self) -> &str {
        self.state.suggestion()
    }

    pub fn state(&self) -> &GhostTextState {
        &self.state
    }

    /// Cached text inset, if measured
    pub fn cached_left_offset(&self) -> Option<f32> {
        self.left_offset
    }

    /// Where the overlay was last placed, `None` before the first edit
    pub fn overlay_left(&self) -> Option<f32> {
        self.overlay_left
    }

    /// Width of the typed text at the last edit
    pub fn typed_width(&self) -> f32 {
        self.typed_width
    }

    pub fn candidates(&self) -> &CandidateList {
        self.matcher.candidates()
    }

    pub fn accept_keys(&self) -> &[AcceptKey] {
        &self.accept_keys
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Mutable access for hosts that apply keystrokes to the field themselves
    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<F, R> fmt::Debug for EmailSession<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailSession")
            .field("raw_value", &self.raw_value)
            .field("state", &self.state)
            .field("left_offset", &self.left_offset)
            .field("overlay_left", &self.overlay_left)
            .finish_non_exhaustive()
    }
}
