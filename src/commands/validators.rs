//! Command argument validation utilities
//!
//! Checks that go beyond what clap enforces. Arguments end up as URL path
//! segments: the client percent-encodes them, but a `/` or a `.`/`..`
//! segment would still name a different endpoint, so those are rejected here.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Argument was empty or whitespace
    Empty { argument: String },
    /// Argument value cannot be used as a path segment
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::Empty { argument } => {
                write!(f, "{} cannot be empty", argument)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Ensure `value` names exactly one URL path segment
pub fn validate_path_segment(argument: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!(CommandValidationError::Empty {
            argument: argument.to_string(),
        }));
    }
    if value.contains('/') {
        return Err(anyhow!(CommandValidationError::InvalidValue {
            argument: argument.to_string(),
            value: value.to_string(),
            reason: "must not contain '/'".to_string(),
        }));
    }
    if value == "." || value == ".." {
        return Err(anyhow!(CommandValidationError::InvalidValue {
            argument: argument.to_string(),
            value: value.to_string(),
            reason: "must not be a relative path segment".to_string(),
        }));
    }
    Ok(())
}
