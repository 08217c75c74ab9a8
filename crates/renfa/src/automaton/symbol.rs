//! Transition symbols.

use std::fmt;

/// A transition label: either a literal character or the epsilon
/// marker. Epsilon is a dedicated variant rather than a reserved
/// character so it can never collide with pattern input — every
/// `char` is a legal literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A literal character, consumed from the input.
    Literal(char),
    /// The epsilon marker; traversed without consuming input.
    Epsilon,
}

impl Symbol {
    /// Check whether this symbol is the epsilon marker.
    #[inline]
    pub fn is_epsilon(self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Literal(c) => write!(f, "{c}"),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}
