//! Error type shared by both generators

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A stack layer dipped below zero, which would draw a band upside down
    #[error("layer {layer} is negative at sample {index}: {value}")]
    NegativeLayer {
        layer: usize,
        index: usize,
        value: f64,
    },

    #[error("compound total {value:.2} exceeds the value axis maximum {max:.2}")]
    ValueAxisOverflow { value: f64, max: f64 },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chart rendering failed: {0}")]
    Render(String),
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
