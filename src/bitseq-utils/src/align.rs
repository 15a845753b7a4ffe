//! Rounding of lengths to multiples of arbitrary divisors.
//!
//! Unlike the usual power-of-two alignment helpers, these work with
//! any non-zero `multiple`. Passing zero is a caller bug and panics
//! with a division by zero.

/// Gets how far `value` is past the previous multiple of `multiple`.
#[inline]
pub const fn excess(value: usize, multiple: usize) -> usize {
    value % multiple
}

/// Rounds `value` down to the nearest multiple of `multiple`.
#[inline]
pub const fn round_down(value: usize, multiple: usize) -> usize {
    value - excess(value, multiple)
}

/// Rounds `value` up to the nearest multiple of `multiple`.
///
/// Returns [`None`] when the result does not fit in a [`usize`].
#[inline]
pub const fn checked_round_up(value: usize, multiple: usize) -> Option<usize> {
    match excess(value, multiple) {
        0 => Some(value),
        rem => value.checked_add(multiple - rem),
    }
}
