use std::{fmt::Display, io::Write};

use bitseq::BitSeq;
use clap::{builder::FalseyValueParser, ArgAction, Args};

/// Configures the verbosity of the builtin logger.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Logs the individual steps of an operation.
    ///
    /// `-v` also reports truncations and extractions, `-vv` reports
    /// every padding or dropping of bits.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Verbosity {
    /// Installs `simple_logger` at the requested level.
    pub fn setup(self) -> eyre::Result<()> {
        simple_logger::init_with_level(self.log_level())?;
        Ok(())
    }

    fn log_level(self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

/// Configures how resulting values are printed.
#[derive(Clone, Copy, Debug, Args)]
pub struct Output {
    /// Separates every byte group of printed sequences with `_`.
    ///
    /// The `BITSEQ_GROUPED` environment variable enables this too,
    /// unless it is empty, `0`, `false`, `no` or `off`.
    #[clap(
        short,
        long,
        global = true,
        env = "BITSEQ_GROUPED",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub grouped: bool,
}

impl Output {
    /// Writes a bit sequence as one line to `w`.
    pub fn seq<W: Write>(self, w: &mut W, seq: &BitSeq) -> eyre::Result<()> {
        if self.grouped {
            writeln!(w, "{seq:#}")?;
        } else {
            writeln!(w, "{seq}")?;
        }

        Ok(())
    }

    /// Writes any other value as one line to `w`.
    pub fn value<W: Write, T: Display>(self, w: &mut W, value: T) -> eyre::Result<()> {
        writeln!(w, "{value}")?;
        Ok(())
    }
}
