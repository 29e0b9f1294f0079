use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Number of amplitudes in a two-qubit register.
pub const DIM: usize = 4;

/// Computational basis state `|q0 q1⟩`, qubit 0 being the most significant bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BasisState {
    S00,
    S01,
    S10,
    S11,
}

impl BasisState {
    pub const ALL: [BasisState; DIM] = [
        BasisState::S00,
        BasisState::S01,
        BasisState::S10,
        BasisState::S11,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            BasisState::S00 => "|00⟩",
            BasisState::S01 => "|01⟩",
            BasisState::S10 => "|10⟩",
            BasisState::S11 => "|11⟩",
        }
    }

    /// Bit string `q0 q1`, e.g. `"10"`.
    pub fn bits(self) -> &'static str {
        match self {
            BasisState::S00 => "00",
            BasisState::S01 => "01",
            BasisState::S10 => "10",
            BasisState::S11 => "11",
        }
    }
}

impl fmt::Display for BasisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Real amplitudes of a two-qubit state, ordered `|00⟩, |01⟩, |10⟩, |11⟩`.
///
/// Values are never mutated in place: evolution and collapse always build a
/// fresh vector. Normalization is expected but not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateVector([f64; DIM]);

impl StateVector {
    /// `|00⟩`
    pub const INITIAL: StateVector = StateVector([1.0, 0.0, 0.0, 0.0]);

    pub const fn new(amps: [f64; DIM]) -> Self {
        Self(amps)
    }

    /// All probability mass on one basis state.
    pub fn basis(b: BasisState) -> Self {
        let mut amps = [0.0; DIM];
        amps[b.index()] = 1.0;
        Self(amps)
    }

    pub fn amplitudes(&self) -> &[f64; DIM] {
        &self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn probabilities(&self) -> [f64; DIM] {
        self.0.map(|a| a * a)
    }

    pub fn norm_sqr(&self) -> f64 {
        self.probabilities().iter().sum()
    }

    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|a| a.is_finite())
    }

    /// Largest elementwise amplitude difference.
    pub fn max_abs_diff(&self, other: &StateVector) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Default for StateVector {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<[f64; DIM]> for StateVector {
    fn from(amps: [f64; DIM]) -> Self {
        Self(amps)
    }
}

impl Index<usize> for StateVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl Index<BasisState> for StateVector {
    type Output = f64;

    fn index(&self, b: BasisState) -> &f64 {
        &self.0[b.index()]
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, a) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", a)?;
        }
        write!(f, "]")
    }
}
