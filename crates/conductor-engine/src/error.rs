use thiserror::Error;

/// Opaque failure from the execution engine.
///
/// Callers surface these without interpreting them further; the
/// variants exist for logs, not for branching.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not be reached.
    #[error("engine unreachable: {0}")]
    Transport(String),

    /// The engine refused the requested transition.
    #[error("engine rejected transition: {0}")]
    Rejected(String),

    /// The engine answered with something unintelligible.
    #[error("unexpected engine response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
