//! Single-qubit gate matrices.
//!
//! All card effects reduce to real-valued 2x2 matrices (the standard set here
//! has no complex phases), so a gate is just `[[f64; 2]; 2]` acting on the
//! amplitude pair selected by one bit of the basis index.

use serde::{Deserialize, Serialize};

/// A real-valued 2x2 single-qubit gate matrix, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gate(pub [[f64; 2]; 2]);

impl Gate {
    /// Apply this gate to an amplitude pair `(a0, a1)`.
    #[must_use]
    pub fn apply(&self, a0: f64, a1: f64) -> (f64, f64) {
        (
            self.0[0][0] * a0 + self.0[0][1] * a1,
            self.0[1][0] * a0 + self.0[1][1] * a1,
        )
    }
}

const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Hadamard: sends |0> and |1> to equal superpositions.
pub const HADAMARD: Gate = Gate([
    [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
]);

/// Pauli-X: bit flip.
pub const PAULI_X: Gate = Gate([[0.0, 1.0], [1.0, 0.0]]);

/// Pauli-Z: phase flip.
pub const PAULI_Z: Gate = Gate([[1.0, 0.0], [0.0, -1.0]]);
