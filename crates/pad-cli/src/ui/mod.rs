//! UI primitives for the Pad CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, quiet)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Named styles
//! - **Render**: Entry lines, section headings, confirmations, errors

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use render::{confirm, entry_line, notice, print, print_error, section};
