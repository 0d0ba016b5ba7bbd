//! Bravyi-Kitaev fermion-to-qubit encoding.
//!
//! Maps each ladder operator to its two majorana components, encoded as
//! Pauli strings over the Fenwick-tree index sets:
//!
//!   c_j = X_j · Z_{P(j)} · X_{U(j)}
//!   d_j = Y_j · Z_{C(j)} · X_{U(j)}
//!
//! with a_j = (c_j + i·d_j)/2 and a†_j = (c_j − i·d_j)/2. Each term of the
//! input operator becomes the ordered product of its per-ladder-operator
//! expressions, and the output is the coefficient-weighted sum over terms.
//!
//! Occupation parities are spread across O(log n) qubits, so the encoded
//! strings have O(log n) weight rather than the linear Z-strings of
//! Jordan-Wigner.
//!
//! # Reference
//! J. T. Seeley, M. J. Richard, P. J. Love, "The Bravyi-Kitaev
//! transformation for quantum computation of electronic structure",
//! JCP 137, 224109 (2012). <https://arxiv.org/abs/1208.5986>

use num_complex::Complex64;
use tracing::debug;

use skarv_ops::{FermionOperator, FermionTerm, LadderKind, PauliOp, PauliString, QubitOperator};

use crate::error::{TransformError, TransformResult};
use crate::fenwick::FenwickTree;

/// Apply the Bravyi-Kitaev encoding to a fermionic operator.
///
/// `n_qubits` can force a register wider than the operator references
/// (padding changes the tree, and with it the encoded strings). If `None`,
/// the width is the operator's own minimum.
///
/// # Errors
/// [`TransformError::InvalidQubitCount`] if `n_qubits` is below the
/// operator's minimum; nothing is built in that case.
pub fn bravyi_kitaev(
    operator: &FermionOperator,
    n_qubits: Option<u32>,
) -> TransformResult<QubitOperator> {
    let required = operator.min_qubits();
    let n_qubits = match n_qubits {
        Some(n) if n < required => {
            return Err(TransformError::InvalidQubitCount {
                specified: n,
                required,
            });
        }
        Some(n) => n,
        None => required,
    };

    let tree = FenwickTree::new(n_qubits);
    debug!(
        n_terms = operator.n_terms(),
        n_qubits, "applying Bravyi-Kitaev encoding"
    );

    let mut encoded = QubitOperator::zero();
    for (term, coefficient) in operator.terms() {
        encoded.sum_with(&encode_term(term, *coefficient, &tree)?);
    }
    Ok(encoded)
}

/// Encode one ladder-operator product, folding the per-operator
/// expressions in left-to-right order (they do not commute).
fn encode_term(
    term: &FermionTerm,
    coefficient: Complex64,
    tree: &FenwickTree,
) -> TransformResult<QubitOperator> {
    let mut product = QubitOperator::identity(coefficient);
    for &(mode, kind) in term.ops() {
        product = product.product(&encode_ladder_op(mode, kind, tree)?);
    }
    Ok(product)
}

/// Encode a single ladder operator as its two majorana components.
fn encode_ladder_op(
    mode: u32,
    kind: LadderKind,
    tree: &FenwickTree,
) -> TransformResult<QubitOperator> {
    let parity_set = tree.parity_set(mode)?;
    let update_set = tree.update_set(mode)?;
    let remainder_set = tree.remainder_set(mode)?;

    // c majorana: X on the mode, Z across the parity set, X up the
    // update path. The tree never places the mode in its own sets, so the
    // factors are collision-free.
    let c_string = PauliString::from_ops(
        std::iter::once((mode, PauliOp::X))
            .chain(parity_set.iter().map(|&q| (q, PauliOp::Z)))
            .chain(update_set.iter().map(|&q| (q, PauliOp::X))),
    );

    // d majorana: Y on the mode, Z across C(j) only.
    let d_string = PauliString::from_ops(
        std::iter::once((mode, PauliOp::Y))
            .chain(remainder_set.iter().map(|&q| (q, PauliOp::Z)))
            .chain(update_set.iter().map(|&q| (q, PauliOp::X))),
    );

    let d_coefficient = match kind {
        LadderKind::Lower => Complex64::new(0.0, 0.5),
        LadderKind::Raise => Complex64::new(0.0, -0.5),
    };

    let mut encoded = QubitOperator::from_term(c_string, Complex64::new(0.5, 0.0));
    encoded.add_term(d_string, d_coefficient);
    Ok(encoded)
}
