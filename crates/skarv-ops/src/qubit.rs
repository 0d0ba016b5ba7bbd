//! Sparse qubit operators: complex-weighted sums of Pauli strings.
//!
//!   Q = Σ_k  c_k · P_k,   c_k ∈ ℂ
//!
//! Terms are kept in a hash map keyed by Pauli string, so addition merges
//! equal strings and multiplication distributes over terms with the phase
//! bookkeeping delegated to [`PauliString::product`]. Terms whose
//! coefficient cancels to (numerically) zero are removed on the spot, so an
//! operator never carries dead terms.

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

use crate::pauli::PauliString;

/// Coefficients with complex norm at or below this are treated as zero and
/// dropped from the term map.
pub const ZERO_TOLERANCE: f64 = 1e-12;

/// A complex-weighted sum of Pauli strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QubitOperator {
    terms: FxHashMap<PauliString, Complex64>,
}

impl QubitOperator {
    /// The zero operator (no terms).
    pub fn zero() -> Self {
        Self::default()
    }

    /// A scalar multiple of the identity: `coeff · I`.
    pub fn identity(coeff: Complex64) -> Self {
        Self::from_term(PauliString::identity(), coeff)
    }

    /// A single-term operator `coeff · string`.
    pub fn from_term(string: PauliString, coeff: Complex64) -> Self {
        let mut op = Self::zero();
        op.add_term(string, coeff);
        op
    }

    /// Add `coeff · string` into this operator, merging with an existing
    /// equal string and dropping the term if the sum cancels.
    pub fn add_term(&mut self, string: PauliString, coeff: Complex64) {
        match self.terms.entry(string) {
            Entry::Occupied(mut entry) => {
                let updated = *entry.get() + coeff;
                if updated.norm() <= ZERO_TOLERANCE {
                    entry.remove();
                } else {
                    *entry.get_mut() = updated;
                }
            }
            Entry::Vacant(entry) => {
                if coeff.norm() > ZERO_TOLERANCE {
                    entry.insert(coeff);
                }
            }
        }
    }

    /// Term-wise accumulation: `self ← self + other`.
    pub fn sum_with(&mut self, other: &QubitOperator) {
        for (string, coeff) in &other.terms {
            self.add_term(string.clone(), *coeff);
        }
    }

    /// Operator product `self · other`, distributing over terms.
    pub fn product(&self, other: &QubitOperator) -> QubitOperator {
        let mut result = QubitOperator::zero();
        for (lhs, &c_lhs) in &self.terms {
            for (rhs, &c_rhs) in &other.terms {
                let (phase, string) = lhs.product(rhs);
                result.add_term(string, c_lhs * c_rhs * phase);
            }
        }
        result
    }

    /// Scalar multiple `factor · self`.
    pub fn scale(&self, factor: Complex64) -> QubitOperator {
        let mut result = QubitOperator::zero();
        for (string, &coeff) in &self.terms {
            result.add_term(string.clone(), coeff * factor);
        }
        result
    }

    /// Iterate over `(string, coefficient)` pairs.
    pub fn terms(&self) -> impl Iterator<Item = (&PauliString, &Complex64)> {
        self.terms.iter()
    }

    /// The coefficient of `string`, or zero if absent.
    pub fn coefficient(&self, string: &PauliString) -> Complex64 {
        self.terms
            .get(string)
            .copied()
            .unwrap_or_else(|| Complex64::new(0.0, 0.0))
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if the operator has no terms.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The minimum number of qubits required to represent this operator.
    ///
    /// Returns 0 if the operator is zero or purely identity.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .keys()
            .filter_map(PauliString::max_qubit)
            .max()
            .map_or(0, |q| q + 1)
    }

    /// Float-tolerant comparison over the union of both term sets.
    pub fn isclose(&self, other: &QubitOperator, tol: f64) -> bool {
        self.terms
            .keys()
            .chain(other.terms.keys())
            .all(|string| (self.coefficient(string) - other.coefficient(string)).norm() <= tol)
    }
}

impl std::fmt::Display for QubitOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        // Sort for stable output; the map itself is unordered.
        let mut lines: Vec<String> = self
            .terms
            .iter()
            .map(|(string, coeff)| format!("({:+.6}{:+.6}i) [{string}]", coeff.re, coeff.im))
            .collect();
        lines.sort();
        write!(f, "{}", lines.join(" + "))
    }
}
