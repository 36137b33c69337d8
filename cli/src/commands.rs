//! The three conversions the tool exposes, as plain functions over parsed input.

use serde::Serialize;

use shorthand_humanize::RelativeTimeFormatter;
use shorthand_shortid::{DecodeError, ShortIdEncoder};
use shorthand_types::PreconditionViolation;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Encoded {
    pub value: i128,
    pub token: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub token: String,
    pub value: u128,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Described {
    pub seconds: i128,
    pub phrase: String,
}

/// One result line in plain-text output.
pub trait Line {
    fn line(&self) -> String;
}

impl Line for Encoded {
    fn line(&self) -> String {
        self.token.clone()
    }
}

impl Line for Decoded {
    fn line(&self) -> String {
        self.value.to_string()
    }
}

impl Line for Described {
    fn line(&self) -> String {
        self.phrase.clone()
    }
}

/// Encode every value, stopping at the first negative one.
pub fn encode(
    encoder: &ShortIdEncoder,
    values: &[i128],
) -> Result<Vec<Encoded>, PreconditionViolation> {
    values
        .iter()
        .map(|&value| {
            let token = encoder.encode(value)?;
            tracing::debug!(value = %value, token = %token, "encoded counter");
            Ok(Encoded { value, token })
        })
        .collect()
}

/// Decode every token, stopping at the first malformed one.
pub fn decode(
    encoder: &ShortIdEncoder,
    tokens: &[String],
) -> Result<Vec<Decoded>, (String, DecodeError)> {
    tokens
        .iter()
        .map(|token| {
            let value = encoder.decode(token).map_err(|e| (token.clone(), e))?;
            tracing::debug!(token = %token, value = %value, "decoded token");
            Ok(Decoded {
                token: token.clone(),
                value,
            })
        })
        .collect()
}

/// Describe every elapsed-seconds value, stopping at the first negative one.
pub fn ago(
    formatter: &RelativeTimeFormatter,
    seconds: &[i128],
) -> Result<Vec<Described>, PreconditionViolation> {
    seconds
        .iter()
        .map(|&seconds| {
            let phrase = formatter.format(seconds)?;
            tracing::debug!(seconds = %seconds, phrase = %phrase, "described elapsed time");
            Ok(Described { seconds, phrase })
        })
        .collect()
}
