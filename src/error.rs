//! Error type shared by every part of the crate.

pub type SequenceResult<T> = Result<T, SequenceError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    /// Invalid construction parameters or configuration document
    #[error("configuration error: {0}")]
    Config(String),

    /// A single frame could not be decoded
    #[error("frame {frame} failed to load from {path}: {reason}")]
    FrameLoad {
        /// 1-based frame number, as substituted into the path template
        frame: usize,
        path: String,
        reason: String,
    },

    #[error("frame set incomplete: {loaded} of {expected} frames loaded")]
    IncompleteFrames { loaded: usize, expected: usize },

    #[error("first frame has unusable dimensions {width}x{height}")]
    InvalidFrameSize { width: f64, height: f64 },

    /// Browser API failure (web binding only)
    #[error("host error: {0}")]
    Host(String),
}

impl SequenceError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }
}
