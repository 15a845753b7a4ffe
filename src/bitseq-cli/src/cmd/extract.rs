use std::io::Write;

use bitseq::BitSeq;
use clap::Args;
use eyre::Context;

use super::Command;
use crate::cli::Output;

/// Cuts bits off the end of a sequence.
///
/// Prints the extracted bits, which are in reverse order, followed
/// by what remains of the input.
#[derive(Debug, Args)]
pub struct Take {
    /// The sequence to cut.
    pub bits: BitSeq,

    /// How many bits to take from the end.
    pub length: usize,
}

impl Command for Take {
    fn handle<W: Write>(mut self, out: Output, w: &mut W) -> eyre::Result<()> {
        let tail = self
            .bits
            .take_from_end(self.length)
            .context("failed to take bits from the end")?;

        out.seq(w, &tail)?;
        out.seq(w, &self.bits)?;
        Ok(())
    }
}

/// Reads bits backwards from the end of a sequence.
#[derive(Debug, Args)]
pub struct Sub {
    /// The sequence to read from.
    pub bits: BitSeq,

    /// How many bits to read.
    pub length: usize,

    /// How many bits before the last one reading starts.
    #[clap(short, long, default_value_t = 0)]
    pub displacement: usize,
}

impl Command for Sub {
    fn handle<W: Write>(self, out: Output, w: &mut W) -> eyre::Result<()> {
        let sub = self
            .bits
            .sub_from_end(self.displacement, self.length)
            .context("failed to read bits from the end")?;

        out.seq(w, &sub)?;
        Ok(())
    }
}
