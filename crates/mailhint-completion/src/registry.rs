//! Session registry keyed by field identity

use std::collections::HashMap;

use tracing::{debug, info};

use crate::candidates::CandidateList;
use crate::config::CompletionConfig;
use crate::error::{CompletionError, CompletionResult};
use crate::field::TextField;
use crate::ghost_text::GhostTextRenderer;
use crate::session::{EmailSession, SessionOptions};
use crate::types::{EventOutcome, FieldEvent, FieldId};

/// Session over host-provided trait objects
pub type BoxedSession = EmailSession<Box<dyn TextField>, Box<dyn GhostTextRenderer>>;

/// Handle returned by [`SessionRegistry::bind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle {
    field_id: FieldId,
}

impl SessionHandle {
    pub fn field_id(&self) -> FieldId {
        self.field_id
    }
}

/// Owns one session per bound field.
///
/// Every session shares the registry's candidate list.
pub struct SessionRegistry {
    candidates: CandidateList,
    sessions: HashMap<FieldId, BoxedSession>,
}

impl SessionRegistry {
    pub fn new(candidates: CandidateList) -> Self {
        Self {
            candidates,
            sessions: HashMap::new(),
        }
    }

    pub fn from_config(config: &CompletionConfig) -> Self {
        Self::new(config.candidates())
    }

    /// Bind a field. Binding an already bound field is a no-op that returns
    /// the existing handle; `field` and `renderer` are dropped unused.
    pub fn bind(
        &mut self,
        field_id: FieldId,
        field: Box<dyn TextField>,
        renderer: Box<dyn GhostTextRenderer>,
        options: SessionOptions,
    ) -> SessionHandle {
        let handle = SessionHandle { field_id };
        if self.sessions.contains_key(&field_id) {
            debug!("{} is already bound, keeping existing session", field_id);
            return handle;
        }

        let session = EmailSession::new(field, renderer, self.candidates.clone(), options);
        self.sessions.insert(field_id, session);
        info!("Bound email suggestions to {}", field_id);
        handle
    }

    /// Release a field's session. Returns false when it was not bound.
    pub fn unbind(&mut self, field_id: FieldId) -> bool {
        let removed = self.sessions.remove(&field_id).is_some();
        if removed {
            debug!("Unbound {}", field_id);
        }
        removed
    }

    /// Forward an event to the field's session
    pub fn dispatch(&mut self, field_id: FieldId, event: FieldEvent) -> CompletionResult<EventOutcome> {
        self.sessions
            .get_mut(&field_id)
            .map(|session| session.handle(event))
            .ok_or(CompletionError::SessionNotFound(field_id))
    }

    pub fn is_bound(&self, field_id: FieldId) -> bool {
        self.sessions.contains_key(&field_id)
    }

    pub fn session(&self, handle: SessionHandle) -> Option<&BoxedSession> {
        self.sessions.get(&handle.field_id)
    }

    pub fn session_mut(&mut self, handle: SessionHandle) -> Option<&mut BoxedSession> {
        self.sessions.get_mut(&handle.field_id)
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(CandidateList::defaults())
    }
}
