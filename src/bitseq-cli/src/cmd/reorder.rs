use std::io::Write;

use bitseq::BitSeq;
use clap::Args;
use eyre::Context;

use super::Command;
use crate::cli::Output;

/// Flips the bit order inside every byte of a sequence.
#[derive(Debug, Args)]
pub struct Endian {
    /// The sequence to transform; its length must be a multiple of 8.
    pub bits: BitSeq,
}

impl Command for Endian {
    fn handle<W: Write>(mut self, out: Output, w: &mut W) -> eyre::Result<()> {
        let seq = self
            .bits
            .change_endian()
            .context("failed to change endianness")?;

        out.seq(w, seq)?;
        Ok(())
    }
}

/// Reverses a whole sequence.
#[derive(Debug, Args)]
pub struct Reverse {
    /// The sequence to reverse.
    pub bits: BitSeq,
}

impl Command for Reverse {
    fn handle<W: Write>(mut self, out: Output, w: &mut W) -> eyre::Result<()> {
        out.seq(w, self.bits.reverse())?;
        Ok(())
    }
}
