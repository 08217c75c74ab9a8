//! Pattern validation errors.

use std::fmt;
use thiserror::Error;

/// What exactly made a pattern malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// A `(` without a matching `)`, or vice versa.
    UnbalancedParenthesis,
    /// The pattern contains no characters at all.
    EmptyPattern,
    /// A group with nothing inside: `()`.
    EmptyGroup,
    /// An alternation with nothing on one side of the `|`.
    EmptyBranch,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MalformedKind::UnbalancedParenthesis => "unbalanced parenthesis",
            MalformedKind::EmptyPattern => "empty pattern",
            MalformedKind::EmptyGroup => "empty group",
            MalformedKind::EmptyBranch => "empty alternative branch",
        };
        f.write_str(msg)
    }
}

/// Rejection of a pattern before construction. Positions are counted
/// in characters, starting at 0.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    #[error("malformed pattern: {kind} at position {position}")]
    Malformed {
        kind: MalformedKind,
        position: usize,
    },

    #[error("operator '{operator}' has nothing to repeat at position {position}")]
    DanglingOperator { operator: char, position: usize },
}

impl PatternError {
    pub(crate) fn malformed(kind: MalformedKind, position: usize) -> Self {
        Self::Malformed { kind, position }
    }

    /// Character position of the offending input.
    pub fn position(&self) -> usize {
        match *self {
            PatternError::Malformed { position, .. }
            | PatternError::DanglingOperator { position, .. } => position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PatternError::malformed(MalformedKind::EmptyGroup, 3);
        assert_eq!(err.to_string(), "malformed pattern: empty group at position 3");

        let err = PatternError::DanglingOperator {
            operator: '*',
            position: 0,
        };
        assert_eq!(
            err.to_string(),
            "operator '*' has nothing to repeat at position 0"
        );
    }

    #[test]
    fn test_position() {
        assert_eq!(
            PatternError::malformed(MalformedKind::EmptyBranch, 7).position(),
            7
        );
        assert_eq!(
            PatternError::DanglingOperator {
                operator: '+',
                position: 2
            }
            .position(),
            2
        );
    }
}
