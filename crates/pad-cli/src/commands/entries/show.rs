use std::io::Write;

use anyhow::Context;
use pad_core::codec::split_blob;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;

/// Print one entry with no numbering so it can be piped. Blob entries print
/// their decoded bytes, or write them to `--out`.
pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let pad = ctx.store()?.load()?;
    let entry = pad.get(args.n)?;

    match (split_blob(entry), &args.out) {
        (Some(blob), Some(out)) => {
            pad_core::fs::write_atomic_private(out, &blob.data)
                .with_context(|| format!("write file {}", out.display()))?;
            println!("Wrote {} bytes to {}", blob.data.len(), out.display());
        }
        (Some(blob), None) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&blob.data)?;
            stdout.flush()?;
        }
        (None, Some(_)) => {
            return Err(CliError::invalid_input("--out can only be used with blob entries").into());
        }
        (None, None) => println!("{}", entry),
    }
    Ok(())
}
