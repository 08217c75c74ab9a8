//! Thompson-style construction of an ε-NFA from a restricted
//! regular-expression grammar.
//!
//! The grammar knows five operators: `(` `)` grouping (arbitrary
//! nesting), `|` alternation, and postfix `*`/`+` repetition. Any
//! other character is a literal. Repetition applies to a single
//! literal or a fully-closed group only, which is what makes the
//! self-loop encoding below valid; it must not be generalized to
//! multi-symbol operands.

use crate::automaton::nfa::Nfa;
use crate::automaton::state::StateId;
use crate::automaton::symbol::Symbol;
use crate::error::{MalformedKind, PatternError};

/// Compile a pattern into an ε-NFA.
///
/// The pattern is validated up front; construction itself cannot
/// fail, so a rejected pattern never leaves a partially-built
/// automaton behind.
pub fn compile(pattern: &str) -> Result<Nfa, PatternError> {
    let chars: Vec<char> = pattern.chars().collect();
    validate(&chars)?;

    let mut nfa = Nfa::new();
    let start = nfa.start();
    Builder { nfa: &mut nfa }.expression(&chars, start);
    Ok(nfa)
}

/// Single validation pass over the pattern. Reports the first
/// failure, with positions counted in characters.
fn validate(chars: &[char]) -> Result<(), PatternError> {
    if chars.is_empty() {
        return Err(PatternError::malformed(MalformedKind::EmptyPattern, 0));
    }

    // Positions of currently-unmatched opening parentheses.
    let mut open_parens: Vec<usize> = Vec::new();
    let mut prev: Option<char> = None;

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '(' => open_parens.push(i),
            ')' => {
                let open = open_parens.pop().ok_or_else(|| {
                    PatternError::malformed(MalformedKind::UnbalancedParenthesis, i)
                })?;
                if prev == Some('(') {
                    return Err(PatternError::malformed(MalformedKind::EmptyGroup, open));
                }
                if prev == Some('|') {
                    return Err(PatternError::malformed(MalformedKind::EmptyBranch, i - 1));
                }
            }
            '|' => {
                if matches!(prev, None | Some('(') | Some('|')) {
                    return Err(PatternError::malformed(MalformedKind::EmptyBranch, i));
                }
            }
            '*' | '+' => {
                // Only a literal or a just-closed group is repeatable.
                if matches!(prev, None | Some('(') | Some('|') | Some('*') | Some('+')) {
                    return Err(PatternError::DanglingOperator {
                        operator: c,
                        position: i,
                    });
                }
            }
            _ => {}
        }
        prev = Some(c);
    }

    if prev == Some('|') {
        return Err(PatternError::malformed(
            MalformedKind::EmptyBranch,
            chars.len() - 1,
        ));
    }
    if let Some(open) = open_parens.pop() {
        return Err(PatternError::malformed(
            MalformedKind::UnbalancedParenthesis,
            open,
        ));
    }

    Ok(())
}

/// The recursive construction engine. One invocation consumes one
/// expression (the full pattern, a group body, or the tail after an
/// alternation operator), threading a cursor state left to right and
/// returning the expression's exit state.
struct Builder<'a> {
    nfa: &'a mut Nfa,
}

impl Builder<'_> {
    fn expression(&mut self, expr: &[char], entry: StateId) -> StateId {
        let mut current = entry;
        // Exit states of alternation branches, reconverged at the end.
        let mut branch_exits: Vec<StateId> = Vec::new();
        let mut i = 0;

        while i < expr.len() {
            match expr[i] {
                '(' => {
                    let close = matching_paren(expr, i);
                    let group_entry = self.nfa.fresh_state();
                    self.nfa.add_epsilon(current, group_entry);
                    current = self.expression(&expr[i + 1..close], group_entry);
                    i = close + 1;

                    if let Some(op @ ('*' | '+')) = expr.get(i).copied() {
                        let repeat = self.nfa.fresh_state();
                        self.nfa.add_epsilon(current, repeat);
                        if op == '*' {
                            // Zero iterations skip the body entirely;
                            // the exit can also re-enter it.
                            self.nfa.add_epsilon(group_entry, repeat);
                            self.nfa.add_epsilon(current, group_entry);
                        }
                        self.nfa.add_epsilon(repeat, group_entry);
                        current = repeat;
                        i += 1;
                    }
                }
                '|' => {
                    // Branch from this invocation's entry, not from
                    // the live cursor: alternatives are siblings.
                    let branch = self.nfa.fresh_state();
                    self.nfa.add_epsilon(entry, branch);
                    branch_exits.push(self.expression(&expr[i + 1..], branch));
                    break;
                }
                literal => {
                    // One-character lookahead so `literal op` is
                    // wired as a unit.
                    match expr.get(i + 1).copied() {
                        Some('*') => {
                            let out = self.nfa.fresh_state();
                            self.nfa
                                .add_transition(current, Symbol::Literal(literal), current);
                            self.nfa.add_epsilon(current, out);
                            current = out;
                            i += 2;
                        }
                        Some('+') => {
                            let out = self.nfa.fresh_state();
                            self.nfa
                                .add_transition(current, Symbol::Literal(literal), out);
                            self.nfa.add_epsilon(out, current);
                            current = out;
                            i += 2;
                        }
                        _ => {
                            let next = self.nfa.fresh_state();
                            self.nfa
                                .add_transition(current, Symbol::Literal(literal), next);
                            current = next;
                            i += 1;
                        }
                    }
                }
            }
        }

        for exit in branch_exits {
            self.nfa.add_epsilon(exit, current);
        }
        self.nfa.mark_accept(current);
        current
    }
}

/// Index of the `)` matching the `(` at `open`. Balanced depth scan,
/// no escaping in this grammar.
fn matching_paren(expr: &[char], open: usize) -> usize {
    let mut depth = 0usize;
    for (j, &c) in expr.iter().enumerate().skip(open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return j;
                }
            }
            _ => {}
        }
    }
    unreachable!("parentheses balanced by validation")
}
