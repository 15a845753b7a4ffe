//! Provides manipulation of fixed-length bit sequences at sub-byte
//! granularity.
//!
//! Binary wire formats frequently place field boundaries in the
//! middle of bytes. This crate offers a [`BitSeq`] container and a
//! small set of transformations over it which are useful when such
//! fields need to be cut out, reordered or padded.
//!
//! # Ordering
//!
//! Index 0 is the first element of a sequence. Storage is packed
//! into bytes with the first element in the MSB, but no operation
//! depends on that layout.
//!
//! # Validation
//!
//! Every fallible operation validates its arguments before touching
//! any data. When an [`Error`] is returned, the involved sequences
//! are left exactly as they were.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod align;
pub use align::Rounding;

mod error;
pub use error::*;

mod extract;

mod reorder;

mod seq;
pub use seq::BitSeq;

mod splice;

mod text;
