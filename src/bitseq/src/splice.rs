use bitseq_utils::hints::cold_path;

use crate::{BitSeq, Error, Result};

impl BitSeq {
    /// Concatenates two sequences into one.
    ///
    /// Both operands are consumed. When either of them is empty, the
    /// other one is handed back as-is; otherwise the bits of `b` are
    /// appended to the storage of `a`.
    pub fn combine(mut a: BitSeq, b: BitSeq) -> BitSeq {
        if a.is_empty() {
            return b;
        }
        if b.is_empty() {
            return a;
        }

        a.append(&b);
        a
    }

    /// Appends a copy of `other` to the end of this sequence.
    #[inline]
    pub fn append(&mut self, other: &BitSeq) {
        self.bits.extend_from_bitslice(&other.bits);
    }

    /// Copies `replacement` into this sequence, starting at `start`.
    ///
    /// Bits outside of `start..start + replacement.len()` are left
    /// untouched. Fails with [`Error::IndexOutOfRange`] when the
    /// replacement does not fully fit.
    pub fn overwrite_at(&mut self, replacement: &BitSeq, start: usize) -> Result<()> {
        let available = self.len();
        let end = match start.checked_add(replacement.len()) {
            Some(end) if end <= available => end,
            _ => {
                cold_path();
                return Err(Error::IndexOutOfRange {
                    start,
                    len: replacement.len(),
                    available,
                });
            }
        };

        self.bits[start..end].copy_from_bitslice(&replacement.bits);
        Ok(())
    }
}
