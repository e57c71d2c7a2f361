//! Per-stream output mode.
//!
//! stdout and stderr are routed independently: `pad show 1 | xclip` keeps
//! stdout plain while an error on the terminal still gets the `[ERR]` tag.

use std::io::IsTerminal;

/// What we know about one output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Terminal {
    pub is_tty: bool,
    pub dumb: bool,
}

impl Terminal {
    pub fn stdout() -> Self {
        Self::detect(std::io::stdout().is_terminal())
    }

    pub fn stderr() -> Self {
        Self::detect(std::io::stderr().is_terminal())
    }

    fn detect(is_tty: bool) -> Self {
        let dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        Self { is_tty, dumb }
    }

    /// A terminal that can take styling.
    pub fn is_rich(&self) -> bool {
        self.is_tty && !self.dumb
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Listings and conflicts as JSON; confirmations suppressed
    Json,
    #[default]
    Plain,
    /// Styled text for an interactive terminal
    Pretty,
}

impl OutputMode {
    /// Mode for requested data. `--json` wins over the terminal.
    pub fn for_stdout(json_flag: bool, term: Terminal) -> Self {
        if json_flag {
            Self::Json
        } else {
            Self::for_diagnostics(term)
        }
    }

    /// Mode for notices and errors. These stay text even under `--json`.
    pub fn for_diagnostics(term: Terminal) -> Self {
        if term.is_rich() {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
