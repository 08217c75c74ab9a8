//! Epsilon Non-deterministic Finite Automaton (ε-NFA) model.

use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::Symbol;
use indexmap::IndexMap;

/// An epsilon-NFA together with its state registry.
///
/// The graph is append-only: states are never destroyed and edges are
/// never removed. There is exactly one start state, allocated by
/// [`Nfa::new`]; every other state is created by [`Nfa::fresh_state`]
/// while wiring an edge from an already-reachable state, so the whole
/// state set stays reachable from the start by construction.
#[derive(Debug, Clone)]
pub struct Nfa {
    /// Number of states issued so far; states are numbered
    /// 0..num_states in discovery order.
    num_states: StateId,
    /// The start state.
    start: StateId,
    /// Accepting states.
    accept_states: StateSet,
    /// Transitions: (source, symbol) -> set of destination states.
    /// Insertion order is construction order, which keeps rendering
    /// and debugging output deterministic.
    transitions: IndexMap<(StateId, Symbol), StateSet>,
}

impl Nfa {
    /// Create an automaton holding only its start state.
    pub fn new() -> Self {
        let mut nfa = Self {
            num_states: 0,
            start: 0,
            accept_states: StateSet::with_capacity(16),
            transitions: IndexMap::new(),
        };
        nfa.start = nfa.fresh_state();
        nfa
    }

    /// Issue a never-before-seen state identifier.
    pub fn fresh_state(&mut self) -> StateId {
        let id = self.num_states;
        self.num_states += 1;
        id
    }

    /// Add a transition from `source` to `destination` on `symbol`.
    /// Idempotent: destinations form a set, so duplicate edges
    /// collapse; no edge is ever dropped.
    pub fn add_transition(&mut self, source: StateId, symbol: Symbol, destination: StateId) {
        let capacity = self.num_states as usize;
        self.transitions
            .entry((source, symbol))
            .or_insert_with(|| StateSet::with_capacity(capacity))
            .insert(destination);
    }

    /// Add an epsilon transition from `source` to `destination`.
    pub fn add_epsilon(&mut self, source: StateId, destination: StateId) {
        self.add_transition(source, Symbol::Epsilon, destination);
    }

    /// Mark a state as accepting. Additive only.
    pub fn mark_accept(&mut self, state: StateId) {
        self.accept_states.insert(state);
    }

    /// The start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Number of states.
    pub fn num_states(&self) -> StateId {
        self.num_states
    }

    /// The accepting states.
    pub fn accept_states(&self) -> &StateSet {
        &self.accept_states
    }

    /// Check whether a state is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accept_states.contains(state)
    }

    /// Compute the epsilon closure of a set of states using DFS.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.num_states as usize);
        let mut stack: Vec<StateId> = states.iter().collect();

        while let Some(s) = stack.pop() {
            if closure.contains(s) {
                continue;
            }
            closure.insert(s);

            if let Some(destinations) = self.transitions.get(&(s, Symbol::Epsilon)) {
                for dest in destinations.iter() {
                    if !closure.contains(dest) {
                        stack.push(dest);
                    }
                }
            }
        }

        closure
    }

    /// The states reachable from `states` by consuming one literal
    /// character, returned as an epsilon closure.
    pub fn move_on_symbol(&self, states: &StateSet, literal: char) -> StateSet {
        let mut reached = StateSet::with_capacity(self.num_states as usize);

        for state in states.iter() {
            if let Some(destinations) = self.transitions.get(&(state, Symbol::Literal(literal))) {
                reached.union_with(destinations);
            }
        }

        self.epsilon_closure(&reached)
    }

    /// Iterate over all edges as (source, symbol, destination)
    /// triples, in construction order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&(src, sym), dests)| dests.iter().map(move |dst| (src, sym, dst)))
    }
}

impl Default for Nfa {
    fn default() -> Self {
        Self::new()
    }
}
