use bitseq_utils::{align, hints::cold_path};
use bitvec::prelude::*;

use crate::{BitSeq, Error, Result};

/// The direction in which [`BitSeq::make_divisible`] adjusts a length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Drop trailing bits down to the previous multiple.
    Down,
    /// Pad with unset bits up to the next multiple.
    Up,
}

impl From<bool> for Rounding {
    /// Maps `true` to [`Rounding::Up`].
    fn from(round_up: bool) -> Self {
        if round_up {
            Self::Up
        } else {
            Self::Down
        }
    }
}

impl BitSeq {
    /// Truncates or pads the sequence so that its length becomes a
    /// multiple of `divisor`.
    ///
    /// Padding bits are always unset. Nothing changes when the length
    /// already is a multiple. Fails with [`Error::ZeroDivisor`] for a
    /// zero `divisor`.
    pub fn make_divisible(&mut self, divisor: usize, rounding: Rounding) -> Result<()> {
        if divisor == 0 {
            cold_path();
            return Err(Error::ZeroDivisor);
        }

        let len = self.len();
        if align::excess(len, divisor) == 0 {
            return Ok(());
        }

        match rounding {
            Rounding::Down => {
                let target = align::round_down(len, divisor);
                log::trace!("Dropping {} bits to align to {divisor}", len - target);

                self.bits.truncate(target);
            }

            Rounding::Up => {
                let target = align::checked_round_up(len, divisor)
                    .filter(|&target| target <= BitSlice::<u8, Msb0>::MAX_BITS);
                let Some(target) = target else {
                    cold_path();
                    return Err(Error::CapacityExceeded {
                        requested: len.saturating_add(divisor - align::excess(len, divisor)),
                    });
                };
                log::trace!("Padding {} bits to align to {divisor}", target - len);

                self.bits.resize(target, false);
            }
        }

        Ok(())
    }
}
