//! Textual representation of bit sequences as binary digits.

use std::{
    fmt::{self, Write},
    str::FromStr,
};

use bitseq_utils::hints::cold_path;

use crate::{BitSeq, Error};

const GROUP_SEPARATOR: char = '_';

impl FromStr for BitSeq {
    type Err = Error;

    /// Parses a sequence from `0` and `1` digits.
    ///
    /// Underscores may be used to visually group digits and are
    /// skipped. An empty string yields an empty sequence.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut seq = BitSeq::new();
        for (position, digit) in s.chars().enumerate() {
            match digit {
                '0' => seq.push(false),
                '1' => seq.push(true),
                GROUP_SEPARATOR => {}
                _ => {
                    cold_path();
                    return Err(Error::InvalidDigit { digit, position });
                }
            }
        }

        Ok(seq)
    }
}

impl fmt::Display for BitSeq {
    /// Writes the sequence as binary digits.
    ///
    /// The alternate form (`{:#}`) separates every byte group
    /// with an underscore.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.iter().enumerate() {
            if f.alternate() && i != 0 && i % 8 == 0 {
                f.write_char(GROUP_SEPARATOR)?;
            }
            f.write_char(if bit { '1' } else { '0' })?;
        }

        Ok(())
    }
}

impl fmt::Debug for BitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSeq({self:#})")
    }
}
