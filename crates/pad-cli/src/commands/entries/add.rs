use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::ui;

use super::read_blob_file;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;

    let (n, outcome) = match &args.file {
        Some(path) => {
            let data = read_blob_file(path)?;
            store.update(|pad| pad.add_blob(&args.text, &data))?
        }
        None => store.update(|pad| pad.add(&args.text))?,
    };

    ctx.report_save(&outcome);
    ui::confirm(ctx.ui(), &format!("Added entry {}.", n));
    Ok(())
}
