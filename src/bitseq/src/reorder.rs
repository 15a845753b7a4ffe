use bitseq_utils::{align::excess, hints::cold_path};

use crate::{BitSeq, Error, Result};

impl BitSeq {
    /// Flips the endianness of every byte group in place.
    ///
    /// The sequence is split into consecutive groups of 8 bits and
    /// the order of bits inside each group is reversed. Groups keep
    /// their position relative to each other.
    ///
    /// Fails with [`Error::NotByteAligned`] when the length is not a
    /// multiple of 8.
    pub fn change_endian(&mut self) -> Result<&mut Self> {
        let len = self.len();
        if excess(len, u8::BITS as usize) != 0 {
            cold_path();
            return Err(Error::NotByteAligned { len });
        }

        for byte in self.bits.chunks_exact_mut(u8::BITS as usize) {
            byte.reverse();
        }

        Ok(self)
    }

    /// Reverses the whole sequence in place.
    ///
    /// For odd lengths, the middle bit stays where it is.
    pub fn reverse(&mut self) -> &mut Self {
        self.bits.reverse();
        self
    }
}
