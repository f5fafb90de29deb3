//! Error types for the sevens engine.

use thiserror::Error;

/// Result type for sevens operations.
pub type SevensResult<T> = Result<T, SevensError>;

/// Errors that can occur while configuring or driving a dice session.
#[derive(Debug, Error)]
pub enum SevensError {
    /// A suppression setting is out of range or could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A die face outside 1-6.
    #[error("invalid die face: {0} (expected 1-6)")]
    InvalidDie(u8),

    /// A scripted dice source was given no faces to replay.
    #[error("scripted dice need at least one face")]
    EmptyScript,

    /// Unknown interactive command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command argument could not be understood.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
