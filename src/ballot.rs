//! Vote encoding, commitment, and nullifier derivation
//!
//! The one-hot invariant is enforced at `VoteVector` construction; the
//! derivation functions below trust their inputs, matching the circuit,
//! which re-proves the invariant in constraints rather than here.

use ff::Field;
use halo2curves::bn256::Fr;
use rand::{CryptoRng, RngCore};

use crate::error::{BallotError, Result};
use crate::poseidon::{hash2, hash_many, MAX_HASH_ARITY};

/// One-hot vote over `num_candidates` positions
///
/// Constructors validate the invariant (exactly one 1, rest 0), so a held
/// `VoteVector` is always well-formed. A malformed ballot never reaches the
/// witness assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteVector {
    bits: Vec<u8>,
}

impl VoteVector {
    /// Vote for a 1-indexed candidate: candidate `c` sets position `c - 1`
    pub fn for_candidate(candidate: usize, num_candidates: usize) -> Result<Self> {
        if num_candidates == 0 || num_candidates >= MAX_HASH_ARITY {
            return Err(BallotError::configuration(format!(
                "candidate count {} outside supported range 1..={}",
                num_candidates,
                MAX_HASH_ARITY - 1
            )));
        }
        if candidate == 0 || candidate > num_candidates {
            return Err(BallotError::witness_validation(format!(
                "candidate {} out of range 1..={}",
                candidate, num_candidates
            )));
        }
        let mut bits = vec![0u8; num_candidates];
        bits[candidate - 1] = 1;
        Ok(Self { bits })
    }

    /// Wrap raw bits, rejecting anything that is not exactly one-hot
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if bits.is_empty() || bits.len() >= MAX_HASH_ARITY {
            return Err(BallotError::configuration(format!(
                "vote vector length {} outside supported range 1..={}",
                bits.len(),
                MAX_HASH_ARITY - 1
            )));
        }
        if bits.iter().any(|b| *b > 1) {
            return Err(BallotError::witness_validation(
                "vote vector entries must be 0 or 1",
            ));
        }
        let ones = bits.iter().filter(|b| **b == 1).count();
        if ones != 1 {
            return Err(BallotError::witness_validation(format!(
                "vote vector must be one-hot, found {} set positions",
                ones
            )));
        }
        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// 0-indexed position of the chosen candidate
    pub fn hot_position(&self) -> usize {
        // Invariant: exactly one bit is set
        self.bits.iter().position(|b| *b == 1).unwrap_or(0)
    }

    pub fn as_field_elements(&self) -> Vec<Fr> {
        self.bits.iter().map(|b| Fr::from(*b as u64)).collect()
    }
}

/// Commit to a vote: `hash_many(vote bits..., randomness)`
///
/// Hiding comes from the randomness, binding from the hash. Randomness must
/// be fresh and uniform per vote; see [`sample_randomness`].
pub fn derive_commitment(vote: &VoteVector, randomness: Fr) -> Result<Fr> {
    let mut inputs = vote.as_field_elements();
    inputs.push(randomness);
    hash_many(&inputs)
}

/// Derive the per-election nullifier: `hash2(trapdoor, election_id)`
///
/// Deterministic per (voter, election) pair. The ledger uses equality on
/// this value to reject a second ballot without learning who voted.
pub fn derive_nullifier(nullifier_trapdoor: Fr, election_id: Fr) -> Fr {
    hash2(nullifier_trapdoor, election_id)
}

/// Sample uniform nonzero commitment randomness
///
/// Zero randomness would make the commitment a bare hash of the public vote
/// layout, so it is excluded outright (and rejected again at witness
/// assembly).
pub fn sample_randomness(rng: &mut (impl RngCore + CryptoRng)) -> Fr {
    loop {
        let r = Fr::random(&mut *rng);
        if r != Fr::ZERO {
            return r;
        }
    }
}
