use bitseq_utils::hints::cold_path;
use bitvec::vec::BitVec;

use crate::{BitSeq, Error, Result};

impl BitSeq {
    /// Removes the last `length` bits and returns them in reverse order.
    ///
    /// Element `k` of the result is the bit that was stored at
    /// `len() - 1 - k`. Fails with [`Error::LengthOutOfRange`] when the
    /// sequence holds fewer than `length` bits.
    pub fn take_from_end(&mut self, length: usize) -> Result<BitSeq> {
        let tail = self.sub_from_end(0, length)?;
        let remaining = self.len() - length;
        self.bits.truncate(remaining);

        log::debug!("Took {length} bits off the end, {remaining} remaining");
        Ok(tail)
    }

    /// Reads `length` bits backwards, starting `displacement` bits
    /// before the last one.
    ///
    /// The result holds the bit at `len() - 1 - displacement` first and
    /// walks towards the front of the sequence from there. A zero
    /// `displacement` selects the same bits as [`BitSeq::take_from_end`]
    /// without shortening the sequence.
    pub fn sub_from_end(&self, displacement: usize, length: usize) -> Result<BitSeq> {
        let available = self.len();
        if length > available {
            cold_path();
            return Err(Error::LengthOutOfRange {
                requested: length,
                available,
            });
        }

        // Nothing is read for an empty window, so its offset is irrelevant.
        if length == 0 {
            return Ok(BitSeq::new());
        }

        let end = match available.checked_sub(displacement) {
            Some(end) if end >= length => end,
            _ => {
                cold_path();
                return Err(Error::DisplacementOutOfRange {
                    displacement,
                    length,
                    available,
                });
            }
        };

        let mut bits = BitVec::from_bitslice(&self.bits[end - length..end]);
        bits.reverse();

        Ok(BitSeq { bits })
    }
}
