//! Mailhint Completion Engine
//!
//! Inline ghost-text completion for the domain part of an email address. As
//! the user types, the engine predicts the rest of the domain from an ordered
//! candidate list and keeps a dimmed overlay aligned right after the typed
//! text. A designated key, focus loss or a press on the overlay commits it.
//!
//! # Architecture
//!
//! 1. **Matcher**: pure prefix scan over the candidate list ([`suggest`])
//! 2. **Candidates**: built-in domains merged with caller domains ([`CandidateList`])
//! 3. **Session**: per-field controller reacting to host events ([`EmailSession`])
//! 4. **Overlay**: renderer contract the session drives ([`GhostTextRenderer`])
//! 5. **Registry**: idempotent binding of fields to sessions ([`SessionRegistry`])
//!
//! Hosts provide two capabilities: a [`TextField`] (value, box metrics, text
//! measurement) and a [`GhostTextRenderer`]. The session never touches
//! presentation primitives directly.
//!
//! # Example
//!
//! ```
//! use mailhint_completion::{
//!     BufferedGhostTextRenderer, CandidateList, EmailSession, FieldEvent, MemoryField,
//!     SessionOptions,
//! };
//!
//! let mut session = EmailSession::new(
//!     MemoryField::default(),
//!     BufferedGhostTextRenderer::new(),
//!     CandidateList::defaults(),
//!     SessionOptions::new(),
//! );
//!
//! session.field_mut().type_str("jo@gm");
//! session.handle(FieldEvent::KeyUp);
//! assert_eq!(session.suggestion(), "ail.com");
//!
//! let outcome = session.handle(FieldEvent::Blur);
//! assert_eq!(outcome.committed.as_deref(), Some("jo@gmail.com"));
//! ```

pub mod candidates;
pub mod config;
pub mod error;
pub mod field;
pub mod ghost_text;
pub mod ghost_text_state;
pub mod matcher;
pub mod registry;
pub mod session;
pub mod types;

pub use candidates::{CandidateList, DEFAULT_DOMAINS};
pub use config::{CompletionConfig, ConfigFormat, ConfigLoader};
pub use error::{CompletionError, CompletionResult};
pub use field::{MemoryField, TextField};
pub use ghost_text::{
    BufferedGhostTextRenderer, GhostTextRenderer, GhostTextStyle, OverlayFrame, OverlayStyle,
    DEFAULT_SUGGESTION_CLASS,
};
pub use ghost_text_state::GhostTextState;
pub use matcher::{partial_domain, suggest, DomainMatcher};
pub use registry::{BoxedSession, SessionHandle, SessionRegistry};
pub use session::{AcceptedCallback, EmailSession, SessionOptions};
pub use types::{AcceptKey, EventOutcome, FieldEvent, FieldId, FieldLayout, FontStyle, Key};
