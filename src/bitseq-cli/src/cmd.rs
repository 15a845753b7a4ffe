use std::io::Write;

use crate::cli::Output;

pub mod align;
pub mod extract;
pub mod reorder;
pub mod splice;

/// Common behavior shared by all subcommands.
pub trait Command {
    /// Executes the command and writes its results to `w`.
    fn handle<W: Write>(self, out: Output, w: &mut W) -> eyre::Result<()>;
}
