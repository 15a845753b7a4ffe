use std::io::Write;

use bitseq::BitSeq;
use clap::Args;
use eyre::Context;

use super::Command;
use crate::cli::Output;

/// Checks two sequences for bitwise equality.
///
/// Prints `true` or `false`.
#[derive(Debug, Args)]
pub struct Compare {
    /// The first sequence.
    pub a: BitSeq,

    /// The second sequence.
    pub b: BitSeq,
}

impl Command for Compare {
    fn handle<W: Write>(self, out: Output, w: &mut W) -> eyre::Result<()> {
        out.value(w, self.a.compare(&self.b))?;
        Ok(())
    }
}

/// Concatenates two sequences.
#[derive(Debug, Args)]
pub struct Combine {
    /// The prefix of the result.
    pub a: BitSeq,

    /// The suffix of the result.
    pub b: BitSeq,
}

impl Command for Combine {
    fn handle<W: Write>(self, out: Output, w: &mut W) -> eyre::Result<()> {
        out.seq(w, &BitSeq::combine(self.a, self.b))?;
        Ok(())
    }
}

/// Overwrites part of a sequence with a replacement.
#[derive(Debug, Args)]
pub struct Overwrite {
    /// The sequence to overwrite.
    pub target: BitSeq,

    /// The bits to place into the target.
    pub replacement: BitSeq,

    /// The index in the target where the replacement starts.
    #[clap(short, long, default_value_t = 0)]
    pub start: usize,
}

impl Command for Overwrite {
    fn handle<W: Write>(mut self, out: Output, w: &mut W) -> eyre::Result<()> {
        self.target
            .overwrite_at(&self.replacement, self.start)
            .with_context(|| format!("failed to overwrite at index {}", self.start))?;

        out.seq(w, &self.target)?;
        Ok(())
    }
}
