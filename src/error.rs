//! Error types for a line coding run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type LineCodeResult<T> = Result<T, LineCodeError>;

#[derive(Error, Debug)]
pub enum LineCodeError {
    /// The scheme selector is not one of 1-4 or a known scheme name.
    #[error("Invalid input: unknown encoding scheme '{0}' (expected 1-4)")]
    InvalidScheme(String),

    /// The waveform sink could not be opened or written.
    #[error("Couldn't open file: {}: {source}", path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Interactive prompt failed (closed stdin, no terminal, ...).
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Reading piped input failed.
    #[error("Reading stdin failed: {0}")]
    Stdin(#[source] io::Error),

    /// Writing an auxiliary artifact (script, WAV, JSON dump) failed.
    #[error("Export to {} failed: {reason}", path.display())]
    Export { path: PathBuf, reason: String },
}

impl LineCodeError {
    pub fn export(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Export {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
