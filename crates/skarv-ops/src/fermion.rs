//! Second-quantised fermionic operators.
//!
//! A fermionic operator is a complex-weighted sum of products of ladder
//! operators:
//!
//!   F = Σ_k  c_k · a†_{i₁} a_{i₂} … a†_{iₘ}
//!
//! Each product is stored as an **ordered** sequence of
//! `(mode, raise | lower)` pairs. Ladder operators on overlapping modes do
//! not commute, so the sequence order is part of the operator's identity
//! and is never reordered.

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

use crate::qubit::ZERO_TOLERANCE;

/// Raising (creation) or lowering (annihilation) action on one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LadderKind {
    /// Creation operator a†.
    Raise,
    /// Annihilation operator a.
    Lower,
}

impl LadderKind {
    /// The adjoint action: raise ↔ lower.
    pub fn adjoint(self) -> LadderKind {
        match self {
            LadderKind::Raise => LadderKind::Lower,
            LadderKind::Lower => LadderKind::Raise,
        }
    }
}

/// An ordered product of ladder operators.
///
/// The empty product is the identity. Unlike a Pauli string this is a
/// *sequence*, not a set: `a†₀ a₁` and `a₁ a†₀` are different terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FermionTerm {
    ops: Vec<(u32, LadderKind)>,
}

impl FermionTerm {
    /// Construct a term from `(mode, kind)` pairs, preserving order.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, LadderKind)>) -> Self {
        Self {
            ops: ops.into_iter().collect(),
        }
    }

    /// The identity term (empty product).
    pub fn identity() -> Self {
        Self { ops: Vec::new() }
    }

    /// The ladder operators in application order (leftmost first).
    pub fn ops(&self) -> &[(u32, LadderKind)] {
        &self.ops
    }

    /// True for the empty product.
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest mode index referenced, or `None` for the identity.
    pub fn max_mode(&self) -> Option<u32> {
        self.ops.iter().map(|(m, _)| *m).max()
    }

    /// The hermitian adjoint: reversed order, each action flipped.
    pub fn adjoint(&self) -> FermionTerm {
        Self {
            ops: self
                .ops
                .iter()
                .rev()
                .map(|&(m, k)| (m, k.adjoint()))
                .collect(),
        }
    }

    /// Concatenate two products: `self · rhs`.
    pub fn concat(&self, rhs: &FermionTerm) -> FermionTerm {
        let mut ops = self.ops.clone();
        ops.extend_from_slice(&rhs.ops);
        Self { ops }
    }
}

impl std::fmt::Display for FermionTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        for (i, (mode, kind)) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match kind {
                LadderKind::Raise => write!(f, "{mode}^")?,
                LadderKind::Lower => write!(f, "{mode}")?,
            }
        }
        Ok(())
    }
}

/// A complex-weighted sum of ladder-operator products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FermionOperator {
    terms: FxHashMap<FermionTerm, Complex64>,
}

impl FermionOperator {
    /// The zero operator (no terms).
    pub fn zero() -> Self {
        Self::default()
    }

    /// A scalar multiple of the identity: `coeff · I`.
    pub fn identity(coeff: Complex64) -> Self {
        Self::from_term(FermionTerm::identity(), coeff)
    }

    /// A single-term operator `coeff · term`.
    pub fn from_term(term: FermionTerm, coeff: Complex64) -> Self {
        let mut op = Self::zero();
        op.add_term(term, coeff);
        op
    }

    /// The creation operator a†_mode.
    pub fn raising(mode: u32) -> Self {
        Self::from_term(
            FermionTerm::from_ops([(mode, LadderKind::Raise)]),
            Complex64::new(1.0, 0.0),
        )
    }

    /// The annihilation operator a_mode.
    pub fn lowering(mode: u32) -> Self {
        Self::from_term(
            FermionTerm::from_ops([(mode, LadderKind::Lower)]),
            Complex64::new(1.0, 0.0),
        )
    }

    /// The number operator n_mode = a†_mode a_mode.
    pub fn number(mode: u32) -> Self {
        Self::from_term(
            FermionTerm::from_ops([(mode, LadderKind::Raise), (mode, LadderKind::Lower)]),
            Complex64::new(1.0, 0.0),
        )
    }

    /// Add `coeff · term` into this operator, merging with an existing
    /// equal term and dropping it if the sum cancels.
    pub fn add_term(&mut self, term: FermionTerm, coeff: Complex64) {
        match self.terms.entry(term) {
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
    pub fn sum_with(&mut self, other: &FermionOperator) {
        for (term, coeff) in &other.terms {
            self.add_term(term.clone(), *coeff);
        }
    }

    /// Operator product `self · other`.
    ///
    /// Products concatenate ladder sequences; no canonical reordering is
    /// attempted (ladder operators anticommute, so reordering would change
    /// signs and is out of scope here).
    pub fn product(&self, other: &FermionOperator) -> FermionOperator {
        let mut result = FermionOperator::zero();
        for (lhs, &c_lhs) in &self.terms {
            for (rhs, &c_rhs) in &other.terms {
                result.add_term(lhs.concat(rhs), c_lhs * c_rhs);
            }
        }
        result
    }

    /// Scalar multiple `factor · self`.
    pub fn scale(&self, factor: Complex64) -> FermionOperator {
        let mut result = FermionOperator::zero();
        for (term, &coeff) in &self.terms {
            result.add_term(term.clone(), coeff * factor);
        }
        result
    }

    /// The hermitian adjoint: each term adjointed, coefficients conjugated.
    pub fn adjoint(&self) -> FermionOperator {
        let mut result = FermionOperator::zero();
        for (term, &coeff) in &self.terms {
            result.add_term(term.adjoint(), coeff.conj());
        }
        result
    }

    /// Iterate over `(term, coefficient)` pairs.
    pub fn terms(&self) -> impl Iterator<Item = (&FermionTerm, &Complex64)> {
        self.terms.iter()
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if the operator has no terms.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The minimum number of qubits needed to encode this operator: the
    /// highest referenced mode index plus one, or 0 for a scalar operator.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .keys()
            .filter_map(FermionTerm::max_mode)
            .max()
            .map_or(0, |m| m + 1)
    }
}

impl std::fmt::Display for FermionOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        let mut lines: Vec<String> = self
            .terms
            .iter()
            .map(|(term, coeff)| format!("({:+.6}{:+.6}i) [{term}]", coeff.re, coeff.im))
            .collect();
        lines.sort();
        write!(f, "{}", lines.join(" + "))
    }
}
