//! Output formatting helpers for the CLI.
//!
//! Text rendering lives in `ui`; this module holds the `--json` shapes.

mod json;

pub use json::{conflict_json, entries_json, print_json};
