//! Shared fixtures for the cross-crate integration tests

use std::sync::{Arc, Mutex};

use mailhint_completion::SessionOptions;

/// Records every value passed to a session's accepted callback
#[derive(Debug, Clone, Default)]
pub struct AcceptLog {
    values: Arc<Mutex<Vec<String>>>,
}

impl AcceptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach this log as the accepted callback of `options`
    pub fn attach(&self, options: SessionOptions) -> SessionOptions {
        let values = Arc::clone(&self.values);
        options.on_accepted(move |value| {
            if let Ok(mut values) = values.lock() {
                values.push(value.to_string());
            }
        })
    }

    pub fn values(&self) -> Vec<String> {
        self.values.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.values().len()
    }
}
