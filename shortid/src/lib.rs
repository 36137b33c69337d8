//! Short-id encoding.
//!
//! Turns an ever-increasing sequence counter (a database sequence value, for
//! example) into a short, URL-safe token by writing it as a positional numeral
//! whose digits are the symbols of an [`Alphabet`]. The default alphabet has 20
//! consonants, so tokens stay short and readable without exposing the raw
//! counter.
//!
//! The scheme is a deterministic bijection for a fixed alphabet, but tokens
//! are not fixed-length: comparing two tokens as strings says nothing about
//! the order of the counters they encode. It is not a secret: anyone who knows
//! the alphabet can decode a token.

pub mod alphabet;
pub mod encoder;
pub mod error;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use encoder::{encode_short_id, encode_short_id_with, ShortIdEncoder};
pub use error::DecodeError;
pub use shorthand_types::PreconditionViolation;
