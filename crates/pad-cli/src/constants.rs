//! Constants used throughout the CLI.

/// Project configuration file, looked up at the project root.
pub const PROJECT_CONFIG_FILE: &str = ".padrc";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PAD_LOG";

/// Log filter used when `PAD_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (I/O, unparsable config).
    pub const FAILURE: i32 = 1;

    /// Resource not found (key file, conflict files).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong key, tampered payload).
    pub const AUTH_FAILED: i32 = 5;
}
