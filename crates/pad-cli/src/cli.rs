use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use pad_core::VERSION;

/// Pad - an encrypted scratchpad for sensitive one-liners
///
/// Entries live in <root>/.context/scratchpad.enc, sealed with the key at
/// .context/.scratchpad.key (kept out of version control). With no
/// subcommand, lists all entries.
#[derive(Parser)]
#[command(name = "pad")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, env = "PAD_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Context directory, relative to the project root
    #[arg(long, global = true, env = "PAD_CONTEXT_DIR", value_name = "DIR")]
    pub context_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (no confirmations)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry text, or the blob label with --file
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Ingest a file as a blob entry
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `rm` command
#[derive(Args)]
pub struct RmArgs {
    /// Entry number
    #[arg(value_name = "N")]
    pub n: usize,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry number
    #[arg(value_name = "N")]
    pub n: usize,

    /// Replacement text
    #[arg(value_name = "TEXT", conflicts_with_all = ["append", "prepend"])]
    pub text: Option<String>,

    /// Append text to the end of the entry
    #[arg(long, value_name = "TEXT", conflicts_with = "prepend")]
    pub append: Option<String>,

    /// Prepend text to the beginning of the entry
    #[arg(long, value_name = "TEXT")]
    pub prepend: Option<String>,

    /// Replace blob file content
    #[arg(
        short,
        long,
        value_name = "PATH",
        conflicts_with_all = ["text", "append", "prepend"]
    )]
    pub file: Option<PathBuf>,

    /// Replace blob label
    #[arg(long, value_name = "LABEL", conflicts_with_all = ["text", "append", "prepend"])]
    pub label: Option<String>,
}

/// Arguments for the `mv` command
#[derive(Args)]
pub struct MvArgs {
    /// Entry to move
    #[arg(value_name = "N")]
    pub from: usize,

    /// Destination position
    #[arg(value_name = "M")]
    pub to: usize,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry number
    #[arg(value_name = "N")]
    pub n: usize,

    /// Write blob content to a file
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append a new entry
    Add(AddArgs),

    /// Remove an entry by number
    Rm(RmArgs),

    /// Replace, append to, or prepend to an entry by number
    Edit(EditArgs),

    /// Move an entry to a different position
    Mv(MvArgs),

    /// Output the raw text of an entry
    Show(ShowArgs),

    /// Show both sides of a merge conflict
    Resolve,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
