use thiserror::Error;

use crate::dashed::token::TokenError;

/// Failure of a dashed range expression. Parsing never yields a partial result.
///
/// Every variant carries the byte index in the input where the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that is not allowed in the current parser state.
    #[error("unexpected '{found}' at index {index}")]
    Syntax { found: char, index: usize },

    /// The expression ends with a `.` that has no octet after it.
    #[error("unexpected end of input after '.' at index {index}")]
    DanglingDot { index: usize },

    /// A numeric token above 255.
    #[error("{value} at index {index} overflows a byte")]
    Overflow { value: String, index: usize },

    /// A token made of numeric characters that are not decimal digits.
    #[error("'{token}' at index {index} is not numeric")]
    NotNumeric { token: String, index: usize },

    /// Fewer than four octet groups were supplied, or the input was empty.
    #[error("unexpected end of input at index {index}")]
    Truncated { index: usize },

    /// A fifth octet group was started.
    #[error("more than four octet groups, extra input at index {index}")]
    ExcessInput { found: Option<char>, index: usize },
}

impl ParseError {
    pub(crate) fn from_token(err: TokenError, index: usize) -> Self {
        match err {
            TokenError::NotNumeric(token) => Self::NotNumeric { token, index },
            TokenError::Overflow(value) => Self::Overflow { value, index },
        }
    }

    /// Byte index of the offending input.
    pub fn index(&self) -> usize {
        match self {
            Self::Syntax { index, .. }
            | Self::DanglingDot { index }
            | Self::Overflow { index, .. }
            | Self::NotNumeric { index, .. }
            | Self::Truncated { index }
            | Self::ExcessInput { index, .. } => *index,
        }
    }

    /// The offending character, if the error points at one.
    pub fn found(&self) -> Option<char> {
        match self {
            Self::Syntax { found, .. } => Some(*found),
            Self::DanglingDot { .. } => Some('.'),
            Self::ExcessInput { found, .. } => *found,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ParseError::Syntax { found: 'f', index: 1 };
        assert_eq!(err.to_string(), "unexpected 'f' at index 1");
        assert_eq!(err.found(), Some('f'));
        assert_eq!(err.index(), 1);

        let err = ParseError::Overflow { value: "270".into(), index: 7 };
        assert_eq!(err.to_string(), "270 at index 7 overflows a byte");
        assert_eq!(err.found(), None);
    }

    #[test]
    fn test_from_token() {
        let err = ParseError::from_token(TokenError::Overflow("300".into()), 4);
        assert_eq!(err, ParseError::Overflow { value: "300".into(), index: 4 });

        let err = ParseError::from_token(TokenError::NotNumeric("٣".into()), 0);
        assert_eq!(err, ParseError::NotNumeric { token: "٣".into(), index: 0 });
    }
}
