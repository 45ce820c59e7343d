//! One player's quantum register: a normalized real amplitude vector of
//! length 2^N.
//!
//! ## Bit convention
//!
//! Qubit `i` occupies bit `N - 1 - i` of the basis index (big-endian): for
//! N=2, basis index `0b10` means qubit 0 is |1> and qubit 1 is |0>.
//!
//! ## Invariant
//!
//! The sum of squared amplitudes stays ~= 1 through every operation. All
//! gates here are orthogonal matrices; `measure` renormalizes the surviving
//! amplitude mass explicitly.

use serde::{Deserialize, Serialize};

use super::gates::{Gate, PAULI_X};
use crate::core::GameRng;

/// Classification threshold: P(|1>) below this reads as definite |0>,
/// above `1 - CLASSIFY_EPSILON` as definite |1>.
pub const CLASSIFY_EPSILON: f64 = 0.01;

/// Squared amplitude of the all-zero basis state above which the register
/// counts as being in the ground state (the win condition).
pub const GROUND_THRESHOLD: f64 = 0.999;

/// Display classification of a single qubit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QubitClass {
    /// P(|1>) < 0.01.
    Zero,
    /// P(|1>) > 0.99.
    One,
    /// Anything in between.
    Superposition,
}

/// A register of N qubits as a real amplitude vector of length 2^N.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Register {
    amplitudes: Vec<f64>,
    qubit_count: usize,
}

impl Register {
    /// Create a register of `qubit_count` qubits in the all-|0> state.
    #[must_use]
    pub fn ground(qubit_count: usize) -> Self {
        assert!(qubit_count > 0, "register needs at least one qubit");
        let mut amplitudes = vec![0.0; 1 << qubit_count];
        amplitudes[0] = 1.0;
        Self {
            amplitudes,
            qubit_count,
        }
    }

    /// Create a register from raw amplitudes. Length must be a power of two.
    ///
    /// The caller is responsible for normalization; tests use this to build
    /// specific states.
    #[must_use]
    pub fn from_amplitudes(amplitudes: Vec<f64>) -> Self {
        let len = amplitudes.len();
        assert!(len.is_power_of_two() && len >= 2, "length must be 2^N");
        Self {
            amplitudes,
            qubit_count: len.trailing_zeros() as usize,
        }
    }

    /// Number of qubits.
    #[must_use]
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Read-only view of the amplitude vector.
    #[must_use]
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    /// Basis-index bit mask for qubit `qubit`.
    fn bit(&self, qubit: usize) -> usize {
        debug_assert!(qubit < self.qubit_count);
        1 << (self.qubit_count - 1 - qubit)
    }

    /// Sum of squared amplitudes. ~= 1 for any reachable state.
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a * a).sum()
    }

    /// Apply a single-qubit gate to `qubit`.
    ///
    /// Pairs each basis index with its `qubit`-bit-set partner and replaces
    /// the pair with the matrix applied to it (a two-level rotation).
    pub fn apply_gate(&mut self, gate: &Gate, qubit: usize) {
        let bit = self.bit(qubit);
        for i in 0..self.amplitudes.len() {
            if i & bit == 0 {
                let j = i | bit;
                let (a0, a1) = gate.apply(self.amplitudes[i], self.amplitudes[j]);
                self.amplitudes[i] = a0;
                self.amplitudes[j] = a1;
            }
        }
    }

    /// Controlled-NOT: wherever the control bit is set, swap the amplitude
    /// with its target-bit-flipped partner.
    pub fn apply_cnot(&mut self, control: usize, target: usize) {
        debug_assert_ne!(control, target);
        let control_bit = self.bit(control);
        let target_bit = self.bit(target);
        for i in 0..self.amplitudes.len() {
            if i & control_bit != 0 {
                let j = i ^ target_bit;
                // Each pair swaps once.
                if i < j {
                    self.amplitudes.swap(i, j);
                }
            }
        }
    }

    /// SWAP two qubits as the canonical three-CNOT composition.
    ///
    /// Deliberately not a direct index permutation: the composition is the
    /// identity the cross-player approximation is calibrated against.
    pub fn apply_swap(&mut self, a: usize, b: usize) {
        self.apply_cnot(a, b);
        self.apply_cnot(b, a);
        self.apply_cnot(a, b);
    }

    /// Toffoli: swap amplitude pairs across the target bit wherever both
    /// control bits are set.
    pub fn apply_toffoli(&mut self, control1: usize, control2: usize, target: usize) {
        let c1_bit = self.bit(control1);
        let c2_bit = self.bit(control2);
        let target_bit = self.bit(target);
        for i in 0..self.amplitudes.len() {
            if i & c1_bit != 0 && i & c2_bit != 0 {
                let j = i ^ target_bit;
                if i < j {
                    self.amplitudes.swap(i, j);
                }
            }
        }
    }

    /// Probability that measuring `qubit` yields |1>.
    #[must_use]
    pub fn prob_one(&self, qubit: usize) -> f64 {
        let bit = self.bit(qubit);
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & bit != 0)
            .map(|(_, a)| a * a)
            .sum()
    }

    /// Projectively measure `qubit`, collapsing the register.
    ///
    /// Samples the outcome against P(|1>), zeroes inconsistent amplitudes,
    /// and renormalizes the survivors. If the surviving probability mass is
    /// zero (caller bypassed the sampling), the vector is left untouched
    /// rather than divided by zero.
    pub fn measure(&mut self, qubit: usize, rng: &mut GameRng) -> u8 {
        let bit = self.bit(qubit);
        let outcome: u8 = u8::from(rng.gen_bool(self.prob_one(qubit)));

        let mut retained = 0.0;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            let bit_value = u8::from(i & bit != 0);
            if bit_value == outcome {
                retained += *amp * *amp;
            } else {
                *amp = 0.0;
            }
        }

        let norm = retained.sqrt();
        if norm > 0.0 {
            for amp in &mut self.amplitudes {
                *amp /= norm;
            }
        }

        outcome
    }

    /// Classify `qubit` for display and for the classical SWAP fallback.
    #[must_use]
    pub fn classify(&self, qubit: usize) -> QubitClass {
        let p = self.prob_one(qubit);
        if p < CLASSIFY_EPSILON {
            QubitClass::Zero
        } else if p > 1.0 - CLASSIFY_EPSILON {
            QubitClass::One
        } else {
            QubitClass::Superposition
        }
    }

    /// True iff the all-zero basis state holds more than `GROUND_THRESHOLD`
    /// of the probability mass.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        self.amplitudes[0] * self.amplitudes[0] > GROUND_THRESHOLD
    }

    /// Count of qubits classified as definite |1>.
    #[must_use]
    pub fn count_definite_ones(&self) -> usize {
        (0..self.qubit_count)
            .filter(|&q| self.classify(q) == QubitClass::One)
            .count()
    }

    /// Classical-exchange fallback for a SWAP across two independent
    /// registers: exchange only if both qubits are classical and differ,
    /// otherwise a no-op. There is no joint state vector, so a true
    /// entangling SWAP is undefined here; this limitation is intentional.
    pub fn classical_swap(a: &mut Register, qubit_a: usize, b: &mut Register, qubit_b: usize) {
        let class_a = a.classify(qubit_a);
        let class_b = b.classify(qubit_b);

        if class_a != QubitClass::Superposition
            && class_b != QubitClass::Superposition
            && class_a != class_b
        {
            a.apply_gate(&PAULI_X, qubit_a);
            b.apply_gate(&PAULI_X, qubit_b);
        }
    }
}
