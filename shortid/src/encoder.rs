//! Positional numeral conversion between counters and tokens.

use shorthand_types::PreconditionViolation;

use crate::alphabet::{check_base, Alphabet, DEFAULT_ALPHABET};
use crate::error::DecodeError;

/// Encode `value` over the default 20-symbol alphabet.
///
/// `encode_short_id(0)` is `"m"`, `encode_short_id(1_234_567_890)` is
/// `"vckmvqs"`. Negative values are rejected.
pub fn encode_short_id(value: i128) -> Result<String, PreconditionViolation> {
    encode_short_id_with(value, &DEFAULT_ALPHABET)
}

/// Encode `value` over a caller-supplied alphabet, symbol `i` being digit `i`.
///
/// Smaller alphabets produce longer tokens for the same value. The alphabet
/// needs at least two symbols: a single-symbol alphabet is rejected for every
/// value, zero included, since base-1 positional conversion never terminates.
pub fn encode_short_id_with<S: AsRef<str>>(
    value: i128,
    alphabet: &[S],
) -> Result<String, PreconditionViolation> {
    let value = check_value(value)?;
    check_base(alphabet.len())?;
    Ok(write_digits(value, alphabet))
}

/// Encoder bound to a validated [`Alphabet`].
///
/// Cheap to clone and safe to share between threads; every method is a pure
/// function of its arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortIdEncoder {
    alphabet: Alphabet,
}

impl ShortIdEncoder {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Build an encoder straight from a list of symbols.
    pub fn from_symbols<I, S>(symbols: I) -> Result<Self, PreconditionViolation>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(Alphabet::new(symbols)?))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn base(&self) -> usize {
        self.alphabet.len()
    }

    /// Encode a counter, rejecting negative values.
    pub fn encode(&self, value: i128) -> Result<String, PreconditionViolation> {
        Ok(self.encode_u128(check_value(value)?))
    }

    pub fn encode_u128(&self, value: u128) -> String {
        write_digits(value, self.alphabet.symbols())
    }

    /// Recover the counter a token was encoded from.
    ///
    /// Leading zero symbols are accepted, so `decode` inverts `encode` but
    /// more than one token can decode to the same value.
    pub fn decode(&self, token: &str) -> Result<u128, DecodeError> {
        if !self.alphabet.is_decodable() {
            return Err(DecodeError::AmbiguousAlphabet);
        }
        if token.is_empty() {
            return Err(DecodeError::Empty);
        }

        let base = self.alphabet.len() as u128;
        let mut value: u128 = 0;
        let mut rest = token;
        while !rest.is_empty() {
            let position = token.len() - rest.len();
            // At most one symbol matches: the alphabet is prefix-free.
            let (digit, symbol) = self
                .alphabet
                .iter()
                .enumerate()
                .find(|(_, symbol)| rest.starts_with(symbol))
                .ok_or(DecodeError::UnknownSymbol { position })?;
            value = value
                .checked_mul(base)
                .and_then(|v| v.checked_add(digit as u128))
                .ok_or(DecodeError::Overflow)?;
            rest = &rest[symbol.len()..];
        }
        Ok(value)
    }
}

fn check_value(value: i128) -> Result<u128, PreconditionViolation> {
    u128::try_from(value).map_err(|_| PreconditionViolation::NegativeValue(value))
}

/// Most-significant digit first. Caller guarantees a base of at least two.
fn write_digits<S: AsRef<str>>(mut value: u128, alphabet: &[S]) -> String {
    let base = alphabet.len() as u128;
    let mut digits = Vec::new();
    while value >= base {
        digits.push((value % base) as usize);
        value /= base;
    }
    digits.push(value as usize);
    digits
        .iter()
        .rev()
        .map(|&digit| alphabet[digit].as_ref())
        .collect()
}
