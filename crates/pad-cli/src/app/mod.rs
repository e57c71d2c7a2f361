//! Application-level utilities for the Pad CLI.
//!
//! This module provides:
//! - Project root and context directory resolution
//! - The per-invocation application context

mod context;
mod resolver;

pub use context::AppContext;
