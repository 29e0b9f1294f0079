use crate::error::{Result, SandboxError};
use quantum::{gates::ONE_OVER_SQRT2, StateVector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tolerance on a target's squared norm when a pack is loaded.
pub const TARGET_NORM_TOLERANCE: f64 = 1e-6;

/// One puzzle: reach `target` within `max_moves` gate applications.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    #[serde(rename = "targetVector", alias = "target")]
    pub target: StateVector,
    #[serde(rename = "maxMoves", alias = "max_moves")]
    pub max_moves: usize,
    #[serde(default)]
    pub description: String,
}

impl Level {
    pub fn new(
        name: impl Into<String>,
        target: [f64; 4],
        max_moves: usize,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            max_moves,
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_moves == 0 {
            return Err(SandboxError::invalid_level(&self.name, "maxMoves must be at least 1"));
        }
        if !self.target.is_finite() {
            return Err(SandboxError::invalid_level(&self.name, "target has non-finite amplitudes"));
        }
        if !self.target.is_normalized(TARGET_NORM_TOLERANCE) {
            return Err(SandboxError::invalid_level(
                &self.name,
                format!("target is not normalized (norm² = {})", self.target.norm_sqr()),
            ));
        }
        Ok(())
    }
}

/// The four stock puzzles, easiest first.
pub fn builtin_levels() -> Vec<Level> {
    let s = ONE_OVER_SQRT2;
    vec![
        Level::new(
            "Classical Flip",
            [0.0, 0.0, 1.0, 0.0],
            3,
            "Your goal is to flip the first qubit (Q0) from |0> to |1>. Find the single gate that \
             accomplishes this, using 3 moves or less.",
        ),
        Level::new(
            "First Superposition",
            [s, 0.0, s, 0.0],
            2,
            "Create an equal superposition state on Qubit 0. The probability of measuring |0> \
             or |1> should be 50%.",
        ),
        Level::new(
            "Entangled Bell State",
            [s, 0.0, 0.0, s],
            4,
            "Create the famous Bell State where the two qubits are perfectly correlated. Only \
             the |00> and |11> outcomes should have probability.",
        ),
        Level::new(
            "The Anti-Bell State",
            [0.0, s, s, 0.0],
            5,
            "Create the Bell State where the qubits are anti-correlated. If Qubit 0 is |0>, \
             Qubit 1 must be |1>, and vice versa. Hint: You will need to use a new gate!",
        ),
    ]
}

/// Parse and validate a JSON array of levels.
pub fn levels_from_json(src: &str) -> Result<Vec<Level>> {
    let levels: Vec<Level> = serde_json::from_str(src)?;
    if levels.is_empty() {
        return Err(SandboxError::EmptyLevelPack);
    }
    for level in &levels {
        level.validate()?;
    }
    Ok(levels)
}

pub fn load_levels(path: impl AsRef<Path>) -> Result<Vec<Level>> {
    let src = fs::read_to_string(path)?;
    levels_from_json(&src)
}
