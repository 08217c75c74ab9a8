//! renfa — compile a restricted regular-expression grammar into an
//! epsilon-NFA and render it with Graphviz.
//!
//! The grammar supports literals over an unrestricted alphabet plus
//! five reserved operators: `(` `)` grouping, `|` alternation, and
//! postfix `*` / `+` repetition. [`compile`] validates the pattern
//! and builds the automaton; [`to_dot`] renders the result as
//! Graphviz DOT source.
//!
//! ```
//! let nfa = renfa::compile("(ab)*c")?;
//! let dot = renfa::to_dot(&nfa);
//! assert!(dot.starts_with("digraph"));
//! # Ok::<(), renfa::PatternError>(())
//! ```

pub mod automaton;
mod dot;
mod error;

pub use automaton::{Nfa, StateId, StateSet, Symbol, compile};
pub use dot::{Dot, to_dot};
pub use error::{MalformedKind, PatternError};
