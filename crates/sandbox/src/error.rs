use quantum::QuantumError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SandboxError>;

#[derive(Error, Debug)]
pub enum SandboxError {
    #[error(transparent)]
    Quantum(#[from] QuantumError),

    #[error("state has collapsed to {0}; undo or reset before applying gates")]
    Collapsed(&'static str),

    #[error("state already measured as {0}")]
    AlreadyMeasured(&'static str),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("level is not in play (status: {0})")]
    NotPlaying(&'static str),

    #[error("level not solved yet")]
    NotWon,

    #[error("level index {index} out of range ({count} levels)")]
    NoSuchLevel { index: usize, count: usize },

    #[error("invalid level '{name}': {reason}")]
    InvalidLevel { name: String, reason: String },

    #[error("level pack is empty")]
    EmptyLevelPack,

    #[error("failed to parse level pack: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SandboxError {
    pub fn invalid_level(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLevel {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
