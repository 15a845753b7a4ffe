use std::io::Write;

use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;
pub use args::Output;

/// The CLI interface for the bitseq application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: BitSeqCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,

    #[clap(flatten)]
    pub output: Output,
}

/// The top-level commands supported by bitseq.
///
/// Every bit sequence argument is given as a string of `0` and `1`
/// digits. Underscores may be used to group digits for readability.
#[derive(Debug, Subcommand)]
pub enum BitSeqCommand {
    Endian(reorder::Endian),
    Reverse(reorder::Reverse),
    Compare(splice::Compare),
    Combine(splice::Combine),
    Overwrite(splice::Overwrite),
    Take(extract::Take),
    Sub(extract::Sub),
    Align(align::Align),
}

impl Command for BitSeqCommand {
    fn handle<W: Write>(self, out: Output, w: &mut W) -> eyre::Result<()> {
        match self {
            Self::Endian(endian) => endian.handle(out, w),
            Self::Reverse(reverse) => reverse.handle(out, w),
            Self::Compare(compare) => compare.handle(out, w),
            Self::Combine(combine) => combine.handle(out, w),
            Self::Overwrite(overwrite) => overwrite.handle(out, w),
            Self::Take(take) => take.handle(out, w),
            Self::Sub(sub) => sub.handle(out, w),
            Self::Align(align) => align.handle(out, w),
        }
    }
}
