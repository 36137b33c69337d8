//! Token decoding errors.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("token is empty")]
    Empty,

    #[error("no alphabet symbol matches at byte offset {position}")]
    UnknownSymbol { position: usize },

    #[error("decoded value does not fit in 128 bits")]
    Overflow,

    #[error("alphabet has duplicate or prefix-overlapping symbols, tokens cannot be decoded")]
    AmbiguousAlphabet,
}
