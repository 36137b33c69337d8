//! Digit alphabets for short-id tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

use shorthand_types::PreconditionViolation;

/// The default 20-symbol alphabet.
///
/// The order fixes the digit-to-symbol mapping: changing it changes every
/// token ever issued.
pub const DEFAULT_ALPHABET: [&str; 20] = [
    "m", "b", "z", "f", "t", "c", "p", "j", "r", "l", "s", "d", "n", "x", "q", "w", "k", "g", "h",
    "v",
];

/// An ordered list of symbols used as the digits of a positional numeral.
///
/// Symbol `i` stands for digit `i`, and the number of symbols is the base.
/// An alphabet always has at least two symbols. Symbol uniqueness is not
/// enforced for encoding, but decoding needs every token to split into
/// symbols in exactly one way, see [`Alphabet::is_decodable`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Alphabet {
    symbols: Vec<String>,
    decodable: bool,
}

impl Alphabet {
    /// Build an alphabet from its symbols, in digit order.
    pub fn new<I, S>(symbols: I) -> Result<Self, PreconditionViolation>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        check_base(symbols.len())?;
        let decodable = is_prefix_free(&symbols);
        Ok(Self { symbols, decodable })
    }

    /// Number of symbols, i.e. the base of the numeral system.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol for digit `index`, if it is below the base.
    pub fn symbol(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Whether every token over this alphabet splits into symbols one way only.
    ///
    /// True when no symbol is empty, duplicated, or a prefix of another.
    pub fn is_decodable(&self) -> bool {
        self.decodable
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.iter().map(|s| s.to_string()).collect(),
            decodable: true,
        }
    }
}

impl TryFrom<Vec<String>> for Alphabet {
    type Error = PreconditionViolation;

    fn try_from(symbols: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<String> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols.join(","))
    }
}

/// Reject bases the positional conversion cannot work with.
pub(crate) fn check_base(len: usize) -> Result<(), PreconditionViolation> {
    match len {
        0 => Err(PreconditionViolation::EmptyAlphabet),
        1 => Err(PreconditionViolation::UnaryAlphabet),
        _ => Ok(()),
    }
}

fn is_prefix_free(symbols: &[String]) -> bool {
    symbols.iter().enumerate().all(|(i, a)| {
        !a.is_empty()
            && symbols
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a.as_str()))
    })
}
