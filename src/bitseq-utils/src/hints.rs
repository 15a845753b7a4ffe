//! Hints for the compiler that affect code optimization.

/// Marks the calling branch as unlikely to be taken.
///
/// Call this at the top of error paths so validation failures
/// stay out of the hot loop of an operation.
#[cold]
#[inline(always)]
pub fn cold_path() {}
