//! Conversion of lexed tokens into octet values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("'{0}' is not numeric")]
    NotNumeric(String),
    #[error("{0} overflows a byte")]
    Overflow(String),
}

/// Converts a decimal token into a byte.
///
/// Only ASCII digits are accepted; the empty string, signs and any other
/// character make the token [`TokenError::NotNumeric`]. Tokens may be
/// arbitrarily long, leading zeros included, and anything above 255 is a
/// [`TokenError::Overflow`] regardless of how many digits it has.
pub fn parse_octet(token: &str) -> Result<u8, TokenError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TokenError::NotNumeric(token.to_owned()));
    }

    // Bails out as soon as the running value leaves the byte range.
    let value = token.bytes().try_fold(0u16, |acc, digit| {
        let next = acc * 10 + u16::from(digit - b'0');
        (next <= u16::from(u8::MAX)).then_some(next)
    });

    value
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| TokenError::Overflow(token.to_owned()))
}
