//! Graphviz DOT rendering of a finished automaton.
//!
//! The automaton core is agnostic to layout and image format; this
//! module only classifies states (start / accept / plain) and labels
//! edges, leaving the drawing to Graphviz.

use crate::automaton::Nfa;
use std::fmt;

/// Displayable DOT view of an automaton.
pub struct Dot<'a>(pub &'a Nfa);

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nfa = self.0;
        writeln!(f, "digraph nfa {{")?;
        writeln!(f, "    rankdir=LR;")?;

        for state in 0..nfa.num_states() {
            if state == nfa.start() {
                writeln!(
                    f,
                    "    q{state} [shape=circle, style=filled, color=green];"
                )?;
            } else if nfa.is_accepting(state) {
                writeln!(
                    f,
                    "    q{state} [shape=doublecircle, style=filled, color=red];"
                )?;
            } else {
                writeln!(f, "    q{state} [shape=circle];")?;
            }
        }

        for (src, sym, dst) in nfa.transitions() {
            writeln!(f, "    q{src} -> q{dst} [label=\"{sym}\"];")?;
        }

        writeln!(f, "}}")
    }
}

/// Render the automaton as DOT source.
pub fn to_dot(nfa: &Nfa) -> String {
    Dot(nfa).to_string()
}
