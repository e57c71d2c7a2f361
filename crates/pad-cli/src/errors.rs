//! CLI error types for structured error handling.
//!
//! Core errors travel through handlers as `anyhow::Error` and are classified
//! here once, at the top of `main`, into a message, an optional hint and an
//! exit code.

use std::fmt;

use pad_core::PadError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Resource not found (key file, conflict files)
    NotFound {
        message: String,
        hint: Option<String>,
    },

    /// Authentication failed (wrong key or corrupted payload)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// Anything else
    Other(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. }
            | CliError::AuthFailed { message, .. }
            | CliError::InvalidInput { message, .. } => message,
            CliError::Other(message) => message,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. }
            | CliError::AuthFailed { hint, .. }
            | CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::Other(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Other(_) => exit_codes::FAILURE,
        }
    }

    /// Classify an error returned by a command handler.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(cli) = err.downcast_ref::<CliError>() {
            return cli.clone();
        }
        if let Some(pad) = err.downcast_ref::<PadError>() {
            return Self::from_pad(pad);
        }
        CliError::Other(format!("{:#}", err))
    }

    fn from_pad(err: &PadError) -> Self {
        let message = err.to_string();
        match err {
            PadError::NoKey { .. } => CliError::NotFound {
                message,
                hint: Some(
                    "Copy the key file from a machine that already has it; a new key cannot open existing entries."
                        .to_string(),
                ),
            },
            PadError::NoConflictFiles { .. } => CliError::NotFound {
                message,
                hint: None,
            },
            PadError::DecryptFailed => CliError::AuthFailed {
                message,
                hint: Some("Check that the key file matches the one that wrote this scratchpad.".to_string()),
            },
            PadError::EntryRange { .. } => CliError::InvalidInput {
                message,
                hint: Some("Run `pad` to list entries.".to_string()),
            },
            PadError::InvalidInput(_)
            | PadError::NotABlob(_)
            | PadError::BlobTooLarge { .. }
            | PadError::NotEncrypted => CliError::InvalidInput {
                message,
                hint: None,
            },
            _ => CliError::Other(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_no_key_is_not_found() {
        let err: anyhow::Error = PadError::NoKey {
            path: PathBuf::from(".context/.scratchpad.key"),
        }
        .into();
        let cli = CliError::from_anyhow(&err);
        assert_eq!(cli.exit_code(), exit_codes::NOT_FOUND);
        assert!(cli.message().starts_with("Encrypted scratchpad found but no key."));
        assert!(cli.hint().is_some());
    }

    #[test]
    fn test_decrypt_failure_is_auth_failed() {
        let err: anyhow::Error = PadError::DecryptFailed.into();
        let cli = CliError::from_anyhow(&err);
        assert_eq!(cli.exit_code(), exit_codes::AUTH_FAILED);
        assert_eq!(cli.message(), "Decryption failed. Wrong key?");
    }

    #[test]
    fn test_range_is_invalid_input() {
        let err: anyhow::Error = PadError::EntryRange { n: 7, total: 2 }.into();
        let cli = CliError::from_anyhow(&err);
        assert_eq!(cli.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_cli_error_passes_through() {
        let err: anyhow::Error = CliError::invalid_input("bad flags").into();
        let cli = CliError::from_anyhow(&err);
        assert_eq!(cli.exit_code(), exit_codes::INVALID_INPUT);
        assert_eq!(cli.message(), "bad flags");
    }

    #[test]
    fn test_unknown_error_keeps_context_chain() {
        let err = anyhow::anyhow!("disk full").context("write scratchpad");
        let cli = CliError::from_anyhow(&err);
        assert_eq!(cli.exit_code(), exit_codes::FAILURE);
        assert_eq!(cli.message(), "write scratchpad: disk full");
    }
}
