//! Second-quantised model Hamiltonians for the encoding demos.

use num_complex::Complex64;
use skarv_ops::FermionOperator;

/// Nearest-neighbour tight-binding chain:
///
///   H = -t · Σ_i (a†_i a_{i+1} + a†_{i+1} a_i)
///
/// Hermitian by construction; `n_sites < 2` yields the zero operator.
pub fn tight_binding_chain(n_sites: u32, t: f64) -> FermionOperator {
    let mut hamiltonian = FermionOperator::zero();
    let amplitude = Complex64::new(-t, 0.0);
    for i in 0..n_sites.saturating_sub(1) {
        let hop = FermionOperator::raising(i).product(&FermionOperator::lowering(i + 1));
        hamiltonian.sum_with(&hop.scale(amplitude));
        hamiltonian.sum_with(&hop.adjoint().scale(amplitude));
    }
    hamiltonian
}

/// Spinless Fermi-Hubbard chain: the tight-binding kinetic term plus a
/// nearest-neighbour density-density interaction:
///
///   H = -t · Σ_i (a†_i a_{i+1} + h.c.)  +  U · Σ_i n_i n_{i+1}
pub fn hubbard_chain(n_sites: u32, t: f64, u: f64) -> FermionOperator {
    let mut hamiltonian = tight_binding_chain(n_sites, t);
    let interaction = Complex64::new(u, 0.0);
    for i in 0..n_sites.saturating_sub(1) {
        let density_pair = FermionOperator::number(i).product(&FermionOperator::number(i + 1));
        hamiltonian.sum_with(&density_pair.scale(interaction));
    }
    hamiltonian
}
