use thiserror::Error;

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument is malformed regardless of the sequence it is
    /// applied to.
    InvalidArgument,
    /// A numeric argument does not fit the bounds of the sequence.
    OutOfRange,
}

/// Errors that may occur when operating on a [`BitSeq`][crate::BitSeq].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The sequence length cannot be split into whole bytes.
    #[error("bit length {len} is not a multiple of 8")]
    NotByteAligned { len: usize },

    /// A replacement does not fit into the target at the requested offset.
    #[error("cannot place {len} bits at index {start} of a {available}-bit sequence")]
    IndexOutOfRange {
        start: usize,
        len: usize,
        available: usize,
    },

    /// More bits were requested than the sequence holds.
    #[error("requested {requested} bits from a {available}-bit sequence")]
    LengthOutOfRange { requested: usize, available: usize },

    /// The displaced read would walk past the start of the sequence.
    #[error(
        "cannot read {length} bits displaced by {displacement} from the end of a {available}-bit sequence"
    )]
    DisplacementOutOfRange {
        displacement: usize,
        length: usize,
        available: usize,
    },

    /// Alignment to a divisor of zero was requested.
    #[error("divisor must not be zero")]
    ZeroDivisor,

    /// The resulting sequence would be too large to represent.
    #[error("a sequence of {requested} bits exceeds the maximum capacity")]
    CapacityExceeded { requested: usize },

    /// Textual input contained a character other than `0`, `1` or `_`.
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

impl Error {
    /// Gets the [`ErrorKind`] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotByteAligned { .. } | Self::InvalidDigit { .. } => ErrorKind::InvalidArgument,
            Self::IndexOutOfRange { .. }
            | Self::LengthOutOfRange { .. }
            | Self::DisplacementOutOfRange { .. }
            | Self::ZeroDivisor
            | Self::CapacityExceeded { .. } => ErrorKind::OutOfRange,
        }
    }
}

/// Result type for operations on bit sequences.
pub type Result<T> = std::result::Result<T, Error>;
