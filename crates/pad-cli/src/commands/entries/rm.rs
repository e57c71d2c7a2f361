use crate::app::AppContext;
use crate::cli::RmArgs;
use crate::ui;

pub fn handle_rm(ctx: &AppContext, args: &RmArgs) -> anyhow::Result<()> {
    let (_removed, outcome) = ctx.store()?.update(|pad| pad.remove(args.n))?;

    ctx.report_save(&outcome);
    ui::confirm(ctx.ui(), &format!("Removed entry {}.", args.n));
    Ok(())
}
