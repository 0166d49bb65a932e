use thiserror::Error;

/// Errors raised while building a mask or tracing it
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    /// A row of the input grid does not match the width of the first row
    #[error("mask row {row} has {found} cells, expected {expected}")]
    RaggedMask {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Text mask contained a character other than the on/off markers
    #[error("invalid mask cell {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },

    /// The seed scan found no edge pixel anywhere
    #[error("no traceable contour in {height}x{width} mask")]
    NoContour { height: usize, width: usize },

    #[error("invalid trace configuration: {0}")]
    InvalidConfig(String),
}

/// Failure reported by a pointer device during replay
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("pointer device failed during {action}: {message}")]
pub struct DeviceError {
    pub action: &'static str,
    pub message: String,
}

impl DeviceError {
    pub fn new(action: &'static str, message: impl Into<String>) -> Self {
        Self {
            action,
            message: message.into(),
        }
    }
}
