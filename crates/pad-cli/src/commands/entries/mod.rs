//! Handlers for the entry commands. Each one is a single load, mutate,
//! save cycle against the store.

mod add;
mod edit;
mod list;
mod mv;
mod rm;
mod show;

use std::path::Path;

use anyhow::Context;
use pad_core::codec::MAX_BLOB_SIZE;
use pad_core::PadError;

pub use add::handle_add;
pub use edit::handle_edit;
pub use list::handle_list;
pub use mv::handle_mv;
pub use rm::handle_rm;
pub use show::handle_show;

/// Read a file destined for a blob entry, refusing oversized files before
/// loading them.
fn read_blob_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("read file {}", path.display()))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    if size > MAX_BLOB_SIZE {
        return Err(PadError::BlobTooLarge {
            size,
            max: MAX_BLOB_SIZE,
        }
        .into());
    }
    std::fs::read(path).with_context(|| format!("read file {}", path.display()))
}
