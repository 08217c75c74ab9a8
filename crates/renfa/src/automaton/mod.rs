//! Epsilon-NFA construction from a restricted regex grammar.
//!
//! This module provides:
//! - the automaton model (states, symbols, transition relation),
//! - the Thompson-style construction engine with up-front pattern
//!   validation,
//! - epsilon-closure and symbol-move primitives used to check
//!   acceptance in tests.

mod nfa;
mod state;
mod symbol;
mod thompson;

pub use nfa::Nfa;
pub use state::{StateId, StateSet};
pub use symbol::Symbol;
pub use thompson::compile;
