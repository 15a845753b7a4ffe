use std::io::Write;

use bitseq::{BitSeq, Rounding};
use clap::Args;
use eyre::Context;

use super::Command;
use crate::cli::Output;

/// Truncates or pads a sequence to a multiple of a divisor.
#[derive(Debug, Args)]
pub struct Align {
    /// The sequence to align.
    pub bits: BitSeq,

    /// The length of the sequence will be a multiple of this.
    pub divisor: usize,

    /// Pads with zero bits instead of dropping trailing bits.
    #[clap(short = 'u', long, default_value_t = false)]
    pub round_up: bool,
}

impl Command for Align {
    fn handle<W: Write>(mut self, out: Output, w: &mut W) -> eyre::Result<()> {
        let before = self.bits.len();
        self.bits
            .make_divisible(self.divisor, Rounding::from(self.round_up))
            .with_context(|| format!("failed to align to a multiple of {}", self.divisor))?;

        log::debug!("Aligned {before} bits to {}", self.bits.len());

        out.seq(w, &self.bits)?;
        Ok(())
    }
}
