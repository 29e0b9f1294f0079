//! Two-qubit real-amplitude state engine: gates, evolution, measurement and
//! target comparison.

pub mod algebra;
pub mod error;
pub mod evolve;
pub mod gates;
pub mod goal;
pub mod measurement;
pub mod state;

pub use error::{QuantumError, Result};
pub use gates::Gate;
pub use measurement::{measure, Measurement};
pub use state::{BasisState, StateVector};
