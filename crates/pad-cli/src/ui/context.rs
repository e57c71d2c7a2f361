//! UI context for environment detection and configuration.

use super::mode::{OutputMode, Terminal};

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Suppress confirmations
    pub quiet: bool,
    /// Resolved output mode
    pub mode: OutputMode,
    /// Color turned off by `--no-color` or `NO_COLOR`
    pub no_color: bool,
}

impl UiContext {
    /// Create the stdout context from environment and CLI flags.
    pub fn from_env(json_flag: bool, no_color_flag: bool, quiet: bool) -> Self {
        let no_color = no_color_flag || std::env::var("NO_COLOR").is_ok();
        Self::for_terminal(Terminal::stdout(), json_flag, no_color, quiet)
    }

    fn for_terminal(term: Terminal, json_flag: bool, no_color: bool, quiet: bool) -> Self {
        Self {
            color: term.is_rich() && !no_color,
            quiet,
            mode: OutputMode::for_stdout(json_flag, term),
            no_color,
        }
    }

    /// Context for stderr diagnostics, routed on stderr's own terminal state.
    pub fn for_stderr(&self) -> Self {
        let term = Terminal::stderr();
        Self {
            color: term.is_rich() && !self.no_color,
            quiet: self.quiet,
            mode: OutputMode::for_diagnostics(term),
            no_color: self.no_color,
        }
    }
}
