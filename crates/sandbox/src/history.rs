use quantum::{BasisState, Gate, StateVector};

/// Append-only record of a session: every state reached, starting at `|00⟩`,
/// and the gate names that produced them.
///
/// `circuit` holds one label per gate application; a measurement adds a state
/// without a label, so after a collapse `states` is longer by two.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    states: Vec<StateVector>,
    circuit: Vec<&'static str>,
    collapsed: bool,
}

impl History {
    pub fn new() -> Self {
        Self {
            states: vec![StateVector::INITIAL],
            circuit: Vec::new(),
            collapsed: false,
        }
    }

    pub fn current(&self) -> &StateVector {
        // never empty: constructed with the initial state and never popped past it
        &self.states[self.states.len() - 1]
    }

    pub fn states(&self) -> &[StateVector] {
        &self.states
    }

    pub fn circuit(&self) -> &[&'static str] {
        &self.circuit
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Only the initial state is present.
    pub fn is_initial(&self) -> bool {
        self.states.len() == 1
    }

    /// The last entry came from a measurement.
    pub fn ends_in_collapse(&self) -> bool {
        self.collapsed
    }

    pub fn push_gate(&mut self, gate: &'static Gate, next: StateVector) {
        self.states.push(next);
        self.circuit.push(gate.name);
        self.collapsed = false;
    }

    pub fn push_collapse(&mut self, outcome: BasisState) {
        self.states.push(StateVector::basis(outcome));
        self.collapsed = true;
    }

    /// Drop the newest entry and its gate label, if it had one. Returns
    /// `false` when only the initial state is left.
    pub fn pop(&mut self) -> bool {
        if self.is_initial() {
            return false;
        }
        self.states.pop();
        if self.collapsed {
            self.collapsed = false;
        } else {
            self.circuit.pop();
        }
        true
    }

    pub fn reset(&mut self) {
        self.states.truncate(1);
        self.circuit.clear();
        self.collapsed = false;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
