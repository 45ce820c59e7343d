//! Quantum register simulation: amplitude vectors, gates, measurement.

mod gates;
mod register;

pub use gates::{Gate, HADAMARD, PAULI_X, PAULI_Z};
pub use register::{
    QubitClass, Register, CLASSIFY_EPSILON, GROUND_THRESHOLD,
};
