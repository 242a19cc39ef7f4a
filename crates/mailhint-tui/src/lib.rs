//! Terminal host for mailhint email suggestions
//!
//! Provides a [`TerminalField`] measured in terminal columns, an [`EmailInput`]
//! that turns crossterm events into session events, and a ratatui widget that
//! paints the typed text with the dimmed suggestion right after it.

pub mod app;
pub mod error;
pub mod field;
pub mod input;
pub mod logging;
pub mod widget;

pub use app::DemoApp;
pub use error::{TuiError, TuiResult};
pub use field::TerminalField;
pub use input::EmailInput;
pub use widget::{ghost_style_for, EmailInputWidget};
