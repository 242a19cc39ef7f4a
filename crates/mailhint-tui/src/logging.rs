//! Log output for the interactive demo
//!
//! The terminal is in raw mode on the alternate screen while the demo runs,
//! so log lines never go to stdout or stderr. They go to a file when one is
//! given and are discarded otherwise.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::error::TuiResult;

/// Writer for the fmt subscriber: the given file (truncated), or a sink
pub fn log_writer(path: Option<&Path>) -> TuiResult<BoxMakeWriter> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            Ok(BoxMakeWriter::new(Arc::new(file)))
        }
        None => Ok(BoxMakeWriter::new(io::sink)),
    }
}

/// Install the global subscriber at WARN
pub fn init(path: Option<&Path>) -> TuiResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(log_writer(path)?)
        .init();
    Ok(())
}
