use crate::app::AppContext;
use crate::cli::MvArgs;
use crate::ui;

pub fn handle_mv(ctx: &AppContext, args: &MvArgs) -> anyhow::Result<()> {
    let ((), outcome) = ctx
        .store()?
        .update(|pad| pad.move_entry(args.from, args.to))?;

    ctx.report_save(&outcome);
    ui::confirm(
        ctx.ui(),
        &format!("Moved entry {} to {}.", args.from, args.to),
    );
    Ok(())
}
