use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::ui;

use super::read_blob_file;

/// Replace, append to, prepend to, or rewrite a blob entry.
///
/// clap already rejects conflicting modes; only the "nothing given" case is
/// checked here.
pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let n = args.n;

    let ((), outcome) = if args.file.is_some() || args.label.is_some() {
        let data = args.file.as_deref().map(read_blob_file).transpose()?;
        store.update(|pad| pad.edit_blob(n, args.label.as_deref(), data.as_deref()))?
    } else if let Some(text) = &args.append {
        store.update(|pad| pad.append(n, text))?
    } else if let Some(text) = &args.prepend {
        store.update(|pad| pad.prepend(n, text))?
    } else if let Some(text) = &args.text {
        store.update(|pad| pad.edit(n, text))?
    } else {
        return Err(CliError::invalid_input("provide replacement text, --append, or --prepend").into());
    };

    ctx.report_save(&outcome);
    ui::confirm(ctx.ui(), &format!("Updated entry {}.", n));
    Ok(())
}
