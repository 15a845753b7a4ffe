use std::ops::Index;

use bitvec::prelude::*;

/// An ordered, resizable sequence of bits.
///
/// Elements are addressed from index 0 up to [`BitSeq::len`] (exclusive).
/// Two sequences are equal when they have the same length and agree
/// on the value at every index.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSeq {
    pub(crate) bits: BitVec<u8, Msb0>,
}

impl BitSeq {
    /// Creates an empty [`BitSeq`].
    pub const fn new() -> Self {
        Self {
            bits: BitVec::EMPTY,
        }
    }

    /// Creates a [`BitSeq`] of `len` bits which are all unset.
    pub fn zeroed(len: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, len),
        }
    }

    /// Creates a [`BitSeq`] holding a copy of the given values.
    pub fn from_bools(values: &[bool]) -> Self {
        values.iter().copied().collect()
    }

    /// Gets the number of bits in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Indicates whether the sequence holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Gets the bit at `index`, if it is in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits.set(index, value);
    }

    /// Appends a single bit to the end of the sequence.
    #[inline]
    pub fn push(&mut self, value: bool) {
        self.bits.push(value);
    }

    /// Shortens the sequence to `len` bits.
    ///
    /// Has no effect when the sequence is already shorter.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    /// Resizes the sequence to `len` bits, filling new positions
    /// with `fill`.
    #[inline]
    pub fn resize(&mut self, len: usize, fill: bool) {
        self.bits.resize(len, fill);
    }

    /// Gets an iterator over the bit values in order.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.bits.iter().by_vals()
    }

    /// Gets a view of the underlying packed storage.
    #[inline]
    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Consumes the [`BitSeq`] and returns the underlying storage.
    #[inline]
    pub fn into_bitvec(self) -> BitVec<u8, Msb0> {
        self.bits
    }

    /// Compares two sequences bit by bit.
    ///
    /// Sequences of different lengths are never equal. Otherwise the
    /// comparison stops at the first mismatching index.
    pub fn compare(&self, other: &BitSeq) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl Index<usize> for BitSeq {
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}

impl FromIterator<bool> for BitSeq {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for BitSeq {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl From<Vec<bool>> for BitSeq {
    fn from(values: Vec<bool>) -> Self {
        values.into_iter().collect()
    }
}

impl From<BitVec<u8, Msb0>> for BitSeq {
    fn from(bits: BitVec<u8, Msb0>) -> Self {
        Self { bits }
    }
}
