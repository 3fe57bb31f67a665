//! Comma-separated sequence parsing for transform front ends.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

/// Errors reported while parsing a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A token was empty or not a valid integer.
    InvalidToken,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::InvalidToken => write!(f, "token is not a valid integer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Parse a comma-separated list of integers, tolerating whitespace around
/// each token. Any malformed token fails the whole parse; no partial
/// sequence is returned.
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidToken)
        })
        .collect()
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_sequence("1, 2,  -3,4").unwrap(), vec![1, 2, -3, 4]);
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        assert_eq!(
            parse_sequence("1,two,3").unwrap_err(),
            ParseError::InvalidToken
        );
        assert_eq!(parse_sequence("").unwrap_err(), ParseError::InvalidToken);
        assert_eq!(parse_sequence("1,,2").unwrap_err(), ParseError::InvalidToken);
    }
}
