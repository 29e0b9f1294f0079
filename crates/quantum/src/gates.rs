use crate::algebra::Matrix4;
use std::fmt;

pub const ONE_OVER_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

const S: f64 = ONE_OVER_SQRT2;

/// Named constant operator on the two-qubit space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gate {
    pub name: &'static str,
    pub matrix: Matrix4,
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// X ⊗ I: |00>↔|10>, |01>↔|11>
pub const X0: Gate = Gate {
    name: "X0",
    matrix: [
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
    ],
};

/// I ⊗ X: |00>↔|01>, |10>↔|11>
pub const X1: Gate = Gate {
    name: "X1",
    matrix: [
        [0.0, 1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 0.0],
    ],
};

/// H ⊗ I
pub const H0: Gate = Gate {
    name: "H0",
    matrix: [
        [S, 0.0, S, 0.0],
        [0.0, S, 0.0, S],
        [S, 0.0, -S, 0.0],
        [0.0, S, 0.0, -S],
    ],
};

/// I ⊗ H
pub const H1: Gate = Gate {
    name: "H1",
    matrix: [
        [S, S, 0.0, 0.0],
        [S, -S, 0.0, 0.0],
        [0.0, 0.0, S, S],
        [0.0, 0.0, S, -S],
    ],
};

/// Control qubit 0, target qubit 1: |10>↔|11>
pub const CNOT: Gate = Gate {
    name: "CNOT",
    matrix: [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 0.0],
    ],
};

pub static CATALOG: [Gate; 5] = [H0, H1, X0, X1, CNOT];

/// Resolve a gate by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static Gate> {
    let name = name.trim();
    CATALOG.iter().find(|g| g.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|g| g.name)
}
