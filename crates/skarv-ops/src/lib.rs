//! `skarv-ops` — second-quantised fermionic and qubit operator algebra.
//!
//! Two sparse operator types and the algebra the Skarv encodings consume:
//!
//! - [`FermionOperator`]: complex-weighted sums of **ordered** ladder
//!   operator products `a†_i … a_j` ([`FermionTerm`]).
//! - [`QubitOperator`]: complex-weighted sums of Pauli strings
//!   ([`PauliString`]), with phase-tracked multiplication per the Pauli
//!   group algebra.
//!
//! Both merge equal terms on addition and drop terms whose coefficient
//! cancels to zero, so every operator is held in a canonical sparse form.
//!
//! # Quick start
//!
//! ```rust
//! use num_complex::Complex64;
//! use skarv_ops::{FermionOperator, PauliOp, PauliString, QubitOperator};
//!
//! // Fermionic hopping term: a†₀ a₁ + a†₁ a₀
//! let mut hop = FermionOperator::raising(0).product(&FermionOperator::lowering(1));
//! let conjugate = hop.adjoint();
//! hop.sum_with(&conjugate);
//! assert_eq!(hop.n_terms(), 2);
//! assert_eq!(hop.min_qubits(), 2);
//!
//! // Qubit-side algebra: X₀ · Y₀ = iZ₀
//! let x = QubitOperator::from_term(
//!     PauliString::from_ops([(0, PauliOp::X)]),
//!     Complex64::new(1.0, 0.0),
//! );
//! let y = QubitOperator::from_term(
//!     PauliString::from_ops([(0, PauliOp::Y)]),
//!     Complex64::new(1.0, 0.0),
//! );
//! let z = PauliString::from_ops([(0, PauliOp::Z)]);
//! assert_eq!(x.product(&y).coefficient(&z), Complex64::new(0.0, 1.0));
//! ```

pub mod fermion;
pub mod pauli;
pub mod qubit;

pub use fermion::{FermionOperator, FermionTerm, LadderKind};
pub use pauli::{PauliOp, PauliString};
pub use qubit::{QubitOperator, ZERO_TOLERANCE};
