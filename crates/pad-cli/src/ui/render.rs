//! Rendering primitives for CLI output.
//!
//! Text on stdout is identical in plain and pretty mode apart from color, so
//! scripts see the same lines whether or not a terminal is attached.

use super::context::UiContext;
use super::theme::{styled, styles};

/// Render one numbered entry line: `  N. text`.
pub fn entry_line(ctx: &UiContext, index: usize, text: &str) -> String {
    let number = format!("{}.", index);
    format!("  {} {}", styled(&number, styles::dim(), ctx.color), text)
}

/// Render a section heading such as `=== OURS ===`.
pub fn section(ctx: &UiContext, title: &str) -> String {
    let heading = format!("=== {} ===", title);
    styled(&heading, styles::bold(), ctx.color)
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let label = styled("Hint:", styles::dim(), ctx.color);
    format!("{} {}", label, text)
}

/// Print a message to stdout with proper mode handling.
///
/// In JSON mode, this does nothing (JSON output is handled separately).
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print a confirmation such as `Added entry 3.`; silent with `--quiet`.
pub fn confirm(ctx: &UiContext, message: &str) {
    if ctx.quiet || ctx.mode.is_json() {
        return;
    }
    if ctx.mode.is_pretty() {
        println!("{}", styled(message, styles::success(), ctx.color));
    } else {
        println!("{}", message);
    }
}

/// Print a notice to stderr. Notices are never suppressed.
pub fn notice(ctx: &UiContext, message: &str) {
    eprintln!("{}", styled(message, styles::warning(), ctx.color));
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "Error: message" with optional "Hint: ..."
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        let tag = styled("[ERR]", styles::error(), ctx.color);
        lines.push(format!("{} {}", tag, message));
    } else {
        lines.push(format!("Error: {}", message));
    }
    if let Some(h) = error_hint {
        lines.push(hint(ctx, h));
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
