//! Fixed-depth Merkle membership tree over voter leaves
//!
//! Level 0 holds `hash1(secret)` for every enrolled voter, right-padded with
//! the zero sentinel to `2^depth`. Each level above pairs adjacent nodes with
//! `hash2`. Enrollment order is load-bearing: it fixes each voter's leaf
//! index and must match the snapshot the ledger's published root was built
//! from.
//!
//! The tree is immutable once built and safe to share across every voter's
//! path generation for the election.

use ff::Field;
use halo2curves::bn256::Fr;
use tracing::debug;

use crate::error::{BallotError, Result};
use crate::poseidon::{hash1, hash2};

/// Zero sentinel used for padding slots at every level
///
/// The circuit's padding constant must be this same value; the two are a
/// single cross-component invariant.
pub const ZERO_SENTINEL: Fr = Fr::ZERO;

/// Deepest tree this builder will construct (2^32 leaves)
pub const MAX_TREE_DEPTH: usize = 32;

/// Immutable membership tree for one enrollment snapshot
#[derive(Debug, Clone)]
pub struct MembershipTree {
    depth: usize,
    num_enrolled: usize,
    /// levels[0] = padded leaves, levels[depth] = [root]
    levels: Vec<Vec<Fr>>,
}

/// Inclusion proof for one leaf: sibling per level plus left/right bits
///
/// `indices[d] == 1` iff the node on the path is a right child at level `d`.
/// Both vectors run from the leaf level up to just below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipPath {
    pub elements: Vec<Fr>,
    pub indices: Vec<u8>,
}

impl MembershipTree {
    /// Build the tree over the enrolled voters' secrets
    ///
    /// Leaves are derived with `hash1` in enrollment order, then padded with
    /// the zero sentinel to `2^depth`.
    pub fn build(secrets: &[Fr], depth: usize) -> Result<Self> {
        let leaves: Vec<Fr> = secrets.iter().map(|s| hash1(*s)).collect();
        Self::from_leaves(leaves, depth)
    }

    /// Build from already-derived leaves (enrollment registries publish
    /// leaves, not secrets)
    pub fn from_leaves(leaves: Vec<Fr>, depth: usize) -> Result<Self> {
        if depth == 0 || depth > MAX_TREE_DEPTH {
            return Err(BallotError::configuration(format!(
                "tree depth {} outside supported range 1..={}",
                depth, MAX_TREE_DEPTH
            )));
        }
        if leaves.is_empty() {
            return Err(BallotError::configuration(
                "membership tree requires at least one enrolled voter",
            ));
        }
        let capacity = 1usize << depth;
        if leaves.len() > capacity {
            return Err(BallotError::configuration(format!(
                "depth {} holds {} leaves but {} voters are enrolled",
                depth,
                capacity,
                leaves.len()
            )));
        }

        let num_enrolled = leaves.len();
        let mut current = leaves;
        current.resize(capacity, ZERO_SENTINEL);

        let mut levels = Vec::with_capacity(depth + 1);
        for _ in 0..depth {
            let next: Vec<Fr> = current
                .chunks(2)
                .map(|pair| hash2(pair[0], *pair.get(1).unwrap_or(&ZERO_SENTINEL)))
                .collect();
            levels.push(current);
            current = next;
        }
        levels.push(current);

        let tree = Self {
            depth,
            num_enrolled,
            levels,
        };
        debug!(
            depth,
            enrolled = num_enrolled,
            capacity,
            "built membership tree"
        );
        Ok(tree)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of enrolled voters (excludes padding slots)
    pub fn num_enrolled(&self) -> usize {
        self.num_enrolled
    }

    /// Total leaf slots, padding included
    pub fn num_leaves(&self) -> usize {
        1 << self.depth
    }

    /// Leaf value at `index`, zero sentinel for padding slots
    pub fn leaf(&self, index: usize) -> Option<Fr> {
        self.levels[0].get(index).copied()
    }

    /// The published Merkle root for this snapshot
    pub fn root(&self) -> Fr {
        self.levels[self.depth][0]
    }

    /// Extract the inclusion proof for the leaf at `index`
    ///
    /// Walks leaf-to-root: the sibling at each level is `index ^ 1`, the
    /// indicator bit is the parity of the running index.
    pub fn prove(&self, index: usize) -> Result<MembershipPath> {
        if index >= self.num_leaves() {
            return Err(BallotError::configuration(format!(
                "leaf index {} out of range for depth-{} tree",
                index, self.depth
            )));
        }

        let mut elements = Vec::with_capacity(self.depth);
        let mut indices = Vec::with_capacity(self.depth);
        let mut cursor = index;
        for level in 0..self.depth {
            let sibling = cursor ^ 1;
            // Padding guarantees the sibling exists; the sentinel fallback is
            // the same zero the padding uses
            elements.push(
                self.levels[level]
                    .get(sibling)
                    .copied()
                    .unwrap_or(ZERO_SENTINEL),
            );
            indices.push((cursor & 1) as u8);
            cursor >>= 1;
        }

        Ok(MembershipPath { elements, indices })
    }
}

impl MembershipPath {
    pub fn depth(&self) -> usize {
        self.elements.len()
    }

    /// Re-hash `leaf` up through the path and compare against `root`
    ///
    /// This is the same computation the circuit performs over its
    /// constrained witnesses; off-chain it doubles as the correctness check
    /// for tree construction and path extraction.
    pub fn verify(&self, leaf: Fr, root: Fr) -> bool {
        let mut current = leaf;
        for (sibling, bit) in self.elements.iter().zip(self.indices.iter()) {
            current = if *bit == 0 {
                hash2(current, *sibling)
            } else {
                hash2(*sibling, current)
            };
        }
        current == root
    }
}
