//! Fenwick-tree index structure for the Bravyi-Kitaev encoding.
//!
//! The encoding stores partial occupation sums in a binary-indexed layout
//! over the qubit register. For each mode `j` the tree answers three set
//! queries:
//!
//! - **U(j)** (update set): strict ancestors of `j` — the qubits whose
//!   stored partial sums change when mode `j`'s occupation flips.
//! - **C(j)** (remainder set): children of `j`'s ancestors with index
//!   below `j`.
//! - **P(j)** (parity set): C(j) together with `j`'s own children — the
//!   qubits whose combined Z-parity equals the occupation parity of modes
//!   `0..j`.
//!
//! The tree is built once per encoding call and never mutated; nodes live
//! in a flat arena with parent/child links stored as indices.
//!
//! # Reference
//! S. Bravyi and A. Kitaev, "Fermionic quantum computation",
//! Ann. Phys. 298, 210 (2002); set definitions as in
//! V. Havlíček et al., PRA 95, 032332 (2017). <https://arxiv.org/abs/1701.07072>

use crate::error::{TransformError, TransformResult};

/// One node of the arena. `u32` links; a missing parent marks a root.
#[derive(Debug, Clone, Default)]
struct FenwickNode {
    parent: Option<u32>,
    children: Vec<u32>,
}

/// A Fenwick tree over qubit indices `0..n_qubits`.
#[derive(Debug, Clone)]
pub struct FenwickTree {
    nodes: Vec<FenwickNode>,
}

impl FenwickTree {
    /// Build the tree for an `n_qubits`-wide register.
    ///
    /// The register root is qubit `n_qubits - 1`; construction recursively
    /// bipartitions the index range below it. `n_qubits = 0` yields an
    /// empty tree whose queries all fail with
    /// [`TransformError::IndexOutOfRange`].
    pub fn new(n_qubits: u32) -> Self {
        let n = n_qubits as usize;
        let mut nodes = vec![FenwickNode::default(); n];
        if n > 0 {
            build(&mut nodes, 0, n - 1, n - 1);
        }
        Self { nodes }
    }

    /// The register width this tree was built for.
    pub fn n_qubits(&self) -> u32 {
        self.nodes.len() as u32
    }

    /// U(j): strict ancestors of `j`, nearest first (strictly ascending,
    /// since every parent index exceeds its child's).
    pub fn update_set(&self, index: u32) -> TransformResult<Vec<u32>> {
        let mut node = self.check_index(index)?;
        let mut ancestors = Vec::new();
        while let Some(parent) = self.nodes[node].parent {
            ancestors.push(parent);
            node = parent as usize;
        }
        Ok(ancestors)
    }

    /// F(j): direct children of `j`.
    pub fn children_set(&self, index: u32) -> TransformResult<Vec<u32>> {
        let node = self.check_index(index)?;
        Ok(self.nodes[node].children.clone())
    }

    /// C(j): children of `j`'s ancestors whose index is below `j`.
    pub fn remainder_set(&self, index: u32) -> TransformResult<Vec<u32>> {
        let mut result = Vec::new();
        for ancestor in self.update_set(index)? {
            for &child in &self.nodes[ancestor as usize].children {
                if child < index {
                    result.push(child);
                }
            }
        }
        Ok(result)
    }

    /// P(j) = C(j) ∪ F(j): the qubits whose combined Z-parity gives the
    /// occupation parity of modes `0..j`.
    pub fn parity_set(&self, index: u32) -> TransformResult<Vec<u32>> {
        let mut result = self.remainder_set(index)?;
        result.extend(self.nodes[index as usize].children.iter().copied());
        Ok(result)
    }

    fn check_index(&self, index: u32) -> TransformResult<usize> {
        if (index as usize) < self.nodes.len() {
            Ok(index as usize)
        } else {
            Err(TransformError::IndexOutOfRange {
                index,
                n_qubits: self.n_qubits(),
            })
        }
    }
}

/// Attach the midpoint of `[left, right]` below `parent`, then recurse:
/// the left half hangs off the midpoint, the right half stays with
/// `parent`. This reproduces the canonical Bravyi-Kitaev tree exactly.
fn build(nodes: &mut [FenwickNode], left: usize, right: usize, parent: usize) {
    if left >= right {
        return;
    }
    let pivot = (left + right) >> 1;
    nodes[pivot].parent = Some(parent as u32);
    nodes[parent].children.push(pivot as u32);
    build(nodes, left, pivot, pivot);
    build(nodes, pivot + 1, right, parent);
}
