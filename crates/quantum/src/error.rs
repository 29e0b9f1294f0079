use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuantumError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantumError {
    #[error("unknown gate '{0}' (expected one of H0, H1, X0, X1, CNOT)")]
    UnknownGate(String),
}
