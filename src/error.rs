//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when parsing a typed command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The text is not a known command.
    #[error("unknown command `{0}`")]
    Unknown(String),
}

/// Errors that can occur when validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The message log would hold no lines.
    #[error("message capacity must be at least one line")]
    ZeroMessageCapacity,
    /// The dealer would act with no pause between draws.
    #[error("dealer delay must be greater than zero")]
    ZeroDealerDelay,
}
