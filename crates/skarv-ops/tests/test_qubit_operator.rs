//! Tests for the sparse qubit-operator algebra.

use num_complex::Complex64;
use skarv_ops::{PauliOp, PauliString, QubitOperator};

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn x0() -> PauliString {
    PauliString::from_ops([(0, PauliOp::X)])
}

fn y0() -> PauliString {
    PauliString::from_ops([(0, PauliOp::Y)])
}

fn z0() -> PauliString {
    PauliString::from_ops([(0, PauliOp::Z)])
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn zero_has_no_terms() {
    let op = QubitOperator::zero();
    assert!(op.is_zero());
    assert_eq!(op.n_terms(), 0);
    assert_eq!(op.min_qubits(), 0);
}

#[test]
fn identity_is_one_empty_term() {
    let op = QubitOperator::identity(c(2.0, -1.0));
    assert_eq!(op.n_terms(), 1);
    assert_eq!(op.coefficient(&PauliString::identity()), c(2.0, -1.0));
    assert_eq!(op.min_qubits(), 0);
}

#[test]
fn from_term_with_zero_coefficient_is_zero() {
    let op = QubitOperator::from_term(x0(), c(0.0, 0.0));
    assert!(op.is_zero());
}

// ---------------------------------------------------------------------------
// Addition
// ---------------------------------------------------------------------------

#[test]
fn add_term_merges_equal_strings() {
    let mut op = QubitOperator::from_term(x0(), c(0.5, 0.0));
    op.add_term(x0(), c(0.25, 0.5));
    assert_eq!(op.n_terms(), 1);
    assert_eq!(op.coefficient(&x0()), c(0.75, 0.5));
}

#[test]
fn add_term_drops_cancelled_terms() {
    let mut op = QubitOperator::from_term(x0(), c(0.5, 0.0));
    op.add_term(x0(), c(-0.5, 0.0));
    assert!(op.is_zero());
}

#[test]
fn sum_with_accumulates_both_operands() {
    let mut op = QubitOperator::from_term(x0(), c(1.0, 0.0));
    let mut other = QubitOperator::from_term(x0(), c(1.0, 0.0));
    other.add_term(z0(), c(-2.0, 0.0));
    op.sum_with(&other);
    assert_eq!(op.n_terms(), 2);
    assert_eq!(op.coefficient(&x0()), c(2.0, 0.0));
    assert_eq!(op.coefficient(&z0()), c(-2.0, 0.0));
}

// ---------------------------------------------------------------------------
// Multiplication
// ---------------------------------------------------------------------------

#[test]
fn product_applies_pauli_algebra() {
    // X₀ · Y₀ = iZ₀
    let x = QubitOperator::from_term(x0(), c(1.0, 0.0));
    let y = QubitOperator::from_term(y0(), c(1.0, 0.0));
    let xy = x.product(&y);
    assert_eq!(xy.n_terms(), 1);
    assert_eq!(xy.coefficient(&z0()), c(0.0, 1.0));
}

#[test]
fn product_distributes_over_terms() {
    // (X₀ + Y₀) · Z₀ = -iY₀ + iX₀
    let mut sum = QubitOperator::from_term(x0(), c(1.0, 0.0));
    sum.add_term(y0(), c(1.0, 0.0));
    let z = QubitOperator::from_term(z0(), c(1.0, 0.0));
    let result = sum.product(&z);
    assert_eq!(result.n_terms(), 2);
    assert_eq!(result.coefficient(&y0()), c(0.0, -1.0));
    assert_eq!(result.coefficient(&x0()), c(0.0, 1.0));
}

#[test]
fn product_merges_cancelling_cross_terms() {
    // (X₀ + Y₀)·(X₀ + Y₀) = 2I + (XY + YX)₀ = 2I
    let mut sum = QubitOperator::from_term(x0(), c(1.0, 0.0));
    sum.add_term(y0(), c(1.0, 0.0));
    let squared = sum.product(&sum);
    assert_eq!(squared.n_terms(), 1);
    assert_eq!(squared.coefficient(&PauliString::identity()), c(2.0, 0.0));
}

#[test]
fn product_multiplies_coefficients() {
    let a = QubitOperator::from_term(x0(), c(0.0, 2.0));
    let b = QubitOperator::from_term(z0(), c(3.0, 0.0));
    // (2i·X₀)(3·Z₀) = 6i·(XZ)₀ = 6i·(-i)Y₀ = 6·Y₀
    let ab = a.product(&b);
    assert_eq!(ab.coefficient(&y0()), c(6.0, 0.0));
}

// ---------------------------------------------------------------------------
// Scaling and comparison
// ---------------------------------------------------------------------------

#[test]
fn scale_multiplies_every_coefficient() {
    let mut op = QubitOperator::from_term(x0(), c(1.0, 0.0));
    op.add_term(z0(), c(0.0, -1.0));
    let scaled = op.scale(c(0.0, 2.0));
    assert_eq!(scaled.coefficient(&x0()), c(0.0, 2.0));
    assert_eq!(scaled.coefficient(&z0()), c(2.0, 0.0));
}

#[test]
fn scale_by_zero_gives_zero() {
    let op = QubitOperator::from_term(x0(), c(1.0, 0.0));
    assert!(op.scale(c(0.0, 0.0)).is_zero());
}

#[test]
fn isclose_tolerates_small_differences() {
    let a = QubitOperator::from_term(x0(), c(0.5, 0.0));
    let b = QubitOperator::from_term(x0(), c(0.5 + 1e-13, 0.0));
    assert!(a.isclose(&b, 1e-9));
    assert!(!a.isclose(&QubitOperator::zero(), 1e-9));
}

#[test]
fn min_qubits_spans_all_terms() {
    let mut op = QubitOperator::from_term(x0(), c(1.0, 0.0));
    op.add_term(
        PauliString::from_ops([(2, PauliOp::Z), (4, PauliOp::Z)]),
        c(0.5, 0.0),
    );
    assert_eq!(op.min_qubits(), 5);
}
