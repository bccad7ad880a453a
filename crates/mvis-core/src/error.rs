#![forbid(unsafe_code)]

//! Error types.
//!
//! The engine has exactly one failure mode: an invalid configuration,
//! rejected before any phase starts. Pause and cancellation are cooperative
//! control paths, not errors, and empty or singleton inputs short-circuit
//! successfully.

use std::fmt;

/// Errors produced when validating a sort configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The run size was not a positive integer.
    InvalidRunSize(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRunSize(size) => {
                write!(f, "run size must be a positive integer, got {size}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
