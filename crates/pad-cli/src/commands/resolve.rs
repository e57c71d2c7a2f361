use pad_core::codec::display_entry;

use crate::app::AppContext;
use crate::output::{conflict_json, print_json};
use crate::ui;

pub fn handle_resolve(ctx: &AppContext) -> anyhow::Result<()> {
    let conflict = ctx.store()?.resolve_conflict()?;
    let ui_ctx = ctx.ui();

    if ui_ctx.mode.is_json() {
        return print_json(&conflict_json(&conflict));
    }

    for (title, side) in [("OURS", &conflict.ours), ("THEIRS", &conflict.theirs)] {
        // A side that failed to decrypt is left out
        let Some(entries) = side else {
            continue;
        };
        ui::print(ui_ctx, &ui::section(ui_ctx, title));
        for (i, entry) in entries.iter().enumerate() {
            ui::print(ui_ctx, &ui::entry_line(ui_ctx, i + 1, &display_entry(entry)));
        }
    }
    Ok(())
}
