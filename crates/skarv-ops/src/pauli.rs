//! Single-qubit Pauli algebra and sparse Pauli strings.
//!
//! A Pauli string is a tensor product of single-qubit Pauli operators
//! (I, X, Y, Z) on distinct qubits. Products of strings stay within the
//! Pauli group up to a phase in {±1, ±i}, which is tracked explicitly:
//!
//!   X·Y = iZ,  Y·Z = iX,  Z·X = iY   (and conjugates with -i)
//!   X·X = Y·Y = Z·Z = I

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity — omitted from sparse strings.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Get the name of this Pauli operator.
    pub fn name(&self) -> &'static str {
        match self {
            PauliOp::I => "I",
            PauliOp::X => "X",
            PauliOp::Y => "Y",
            PauliOp::Z => "Z",
        }
    }

    /// Single-qubit product `self · rhs`, returned as `(phase, result)`.
    ///
    /// The phase is one of ±1, ±i.
    pub fn product(self, rhs: PauliOp) -> (Complex64, PauliOp) {
        use PauliOp::{I, X, Y, Z};
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        match (self, rhs) {
            (I, p) | (p, I) => (one, p),
            (X, X) | (Y, Y) | (Z, Z) => (one, I),
            (X, Y) => (i, Z),
            (Y, X) => (-i, Z),
            (Y, Z) => (i, X),
            (Z, Y) => (-i, X),
            (Z, X) => (i, Y),
            (X, Z) => (-i, Y),
        }
    }
}

impl std::fmt::Display for PauliOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A tensor product of Pauli operators on distinct qubits.
///
/// Stored as a sorted `Vec<(qubit_index, PauliOp)>` with identity factors
/// omitted. Qubits not listed are implicitly I. The empty string is the
/// identity operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliString {
    /// Non-identity factors, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// Construct a PauliString from an iterator of (qubit, op) pairs.
    ///
    /// Identity operators are dropped; the remaining ops are sorted by
    /// qubit. Each qubit index must appear at most once — combining
    /// colliding factors is [`PauliString::product`]'s job.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> Self {
        let mut v: Vec<(u32, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        v.sort_by_key(|(q, _)| *q);
        debug_assert!(
            v.windows(2).all(|w| w[0].0 != w[1].0),
            "duplicate qubit index in Pauli string"
        );
        Self { ops: v }
    }

    /// The identity string (no non-identity factors).
    pub fn identity() -> Self {
        Self { ops: Vec::new() }
    }

    /// Return the non-identity (qubit, op) pairs, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// True if there are no non-identity operators.
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for the identity.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// Multiply two Pauli strings, returning `(phase, product)`.
    ///
    /// Factors on distinct qubits pass through unchanged; factors on the
    /// same qubit are combined with [`PauliOp::product`], accumulating the
    /// phase and dropping identity results.
    pub fn product(&self, rhs: &PauliString) -> (Complex64, PauliString) {
        let mut phase = Complex64::new(1.0, 0.0);
        let mut ops = Vec::with_capacity(self.ops.len() + rhs.ops.len());

        let mut a = self.ops.iter().peekable();
        let mut b = rhs.ops.iter().peekable();
        loop {
            match (a.peek(), b.peek()) {
                (Some(&&(qa, pa)), Some(&&(qb, pb))) => {
                    if qa < qb {
                        ops.push((qa, pa));
                        a.next();
                    } else if qb < qa {
                        ops.push((qb, pb));
                        b.next();
                    } else {
                        let (f, p) = pa.product(pb);
                        phase *= f;
                        if p != PauliOp::I {
                            ops.push((qa, p));
                        }
                        a.next();
                        b.next();
                    }
                }
                (Some(&&(qa, pa)), None) => {
                    ops.push((qa, pa));
                    a.next();
                }
                (None, Some(&&(qb, pb))) => {
                    ops.push((qb, pb));
                    b.next();
                }
                (None, None) => break,
            }
        }

        (phase, Self { ops })
    }
}

impl std::fmt::Display for PauliString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        for (i, (q, op)) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{op}{q}")?;
        }
        Ok(())
    }
}
