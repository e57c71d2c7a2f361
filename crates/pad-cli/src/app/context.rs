//! Application context for the Pad CLI.
//!
//! Provides a unified context that combines CLI arguments with a
//! lazily-resolved store.

use once_cell::unsync::OnceCell;

use pad_core::{SaveOutcome, Store};

use crate::cli::Cli;
use crate::ui::{self, UiContext};

use super::resolver::resolve_store_config;

/// Application context that bundles CLI args with the resolved store.
///
/// Commands that never touch the store (completions) never read `.padrc`.
pub struct AppContext<'a> {
    cli: &'a Cli,
    ui: UiContext,
    store: OnceCell<Store>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            ui: UiContext::from_env(cli.json, cli.no_color, cli.quiet),
            store: OnceCell::new(),
        }
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Get the store, resolving its configuration on first use.
    pub fn store(&self) -> anyhow::Result<&Store> {
        self.store
            .get_or_try_init(|| resolve_store_config(self.cli).map(Store::new))
    }

    /// Tell the user about side effects of a save.
    pub fn report_save(&self, outcome: &SaveOutcome) {
        if let Some(path) = &outcome.key_created {
            let stderr = self.ui.for_stderr();
            ui::notice(
                &stderr,
                &format!("Scratchpad key created at {}", path.display()),
            );
            ui::notice(
                &stderr,
                "Copy this file to your other machines at the same path.",
            );
        }
    }
}
