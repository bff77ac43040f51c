use thiserror::Error;

/// Reason an 81-character puzzle string was rejected.
///
/// Both reasons are one `InvalidFormat` failure to the engine, but the
/// caller phrases them differently, so they stay distinguishable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The string is not exactly 81 characters long.
    #[error("expected puzzle to be 81 characters long, got {0}")]
    WrongLength(usize),
    /// The string contains a character outside `0-9` and `.`.
    #[error("invalid character {0:?} in puzzle")]
    InvalidCharacter(char),
}

/// Everything the engine can fail with.
///
/// All failures are ordinary values; malformed input is an expected,
/// recoverable case. The engine classifies, the caller decides the
/// user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The puzzle string has the wrong length or an invalid character.
    #[error("invalid puzzle: {0}")]
    InvalidFormat(#[from] FormatError),
    /// The row letter is outside `A`-`I`, or the column is outside 1-9.
    #[error("invalid coordinate")]
    InvalidCoordinate,
    /// The candidate value is outside 1-9.
    #[error("invalid value {0}")]
    InvalidValue(u8),
    /// The search exhausted every assignment without completing the grid.
    #[error("puzzle cannot be solved")]
    Unsolvable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_convert_into_invalid_format() {
        let err: Error = FormatError::WrongLength(84).into();
        assert_eq!(err, Error::InvalidFormat(FormatError::WrongLength(84)));

        let err: Error = FormatError::InvalidCharacter('A').into();
        assert_eq!(err, Error::InvalidFormat(FormatError::InvalidCharacter('A')));
    }

    #[test]
    fn display_is_stable() {
        assert_eq!(Error::Unsolvable.to_string(), "puzzle cannot be solved");
        assert_eq!(
            Error::InvalidFormat(FormatError::WrongLength(82)).to_string(),
            "invalid puzzle: expected puzzle to be 81 characters long, got 82"
        );
    }
}
