//! Precondition error shared by the encoder and the formatter.

use thiserror::Error;

/// An input did not satisfy a documented precondition.
///
/// Returned immediately at function entry; no partial output is ever produced
/// alongside it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PreconditionViolation {
    #[error("counter value must be non-negative, got {0}")]
    NegativeValue(i128),

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// Base-1 positional conversion never terminates for values above zero.
    #[error("alphabet must contain at least two symbols, got one")]
    UnaryAlphabet,

    #[error("elapsed seconds must be non-negative, got {0}")]
    NegativeSeconds(i128),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            PreconditionViolation::NegativeValue(-3).to_string(),
            "counter value must be non-negative, got -3"
        );
        assert_eq!(
            PreconditionViolation::NegativeSeconds(-1).to_string(),
            "elapsed seconds must be non-negative, got -1"
        );
        assert_eq!(
            PreconditionViolation::EmptyAlphabet.to_string(),
            "alphabet must contain at least one symbol"
        );
    }
}
