use pad_core::codec::display_entry;

use crate::app::AppContext;
use crate::output::{entries_json, print_json};
use crate::ui;

const MSG_EMPTY: &str = "Scratchpad is empty.";

pub fn handle_list(ctx: &AppContext) -> anyhow::Result<()> {
    let entries = ctx.store()?.read_entries()?;
    let ui_ctx = ctx.ui();

    if ui_ctx.mode.is_json() {
        return print_json(&entries_json(&entries));
    }

    if entries.is_empty() {
        ui::print(ui_ctx, MSG_EMPTY);
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        ui::print(ui_ctx, &ui::entry_line(ui_ctx, i + 1, &display_entry(entry)));
    }
    Ok(())
}
