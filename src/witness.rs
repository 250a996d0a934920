//! Witness assembly for the external prover
//!
//! The assembler's single job is to fail before the prover does: every
//! structural invariant is checked here, because prover failures on
//! malformed input maps are uninformative. A `Witness` is transient: built
//! per vote, handed to the prover, dropped. It contains the voter's secret
//! and must never be persisted or logged.

use std::fmt;

use ff::Field;
use halo2curves::bn256::Fr;
use serde::{Deserialize, Serialize};

use crate::ballot::{derive_commitment, VoteVector};
use crate::error::{BallotError, Result};
use crate::field::field_to_decimal;
use crate::identity::VoterIdentity;
use crate::tree::MembershipPath;

/// Election parameters published by the ledger, trusted read-only input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElectionParameters {
    pub election_id: u64,
    pub merkle_root: Fr,
    pub num_candidates: usize,
}

impl ElectionParameters {
    pub fn election_id_field(&self) -> Fr {
        Fr::from(self.election_id)
    }
}

/// Fully assembled private + public inputs for one proof
#[derive(Clone)]
pub struct Witness {
    pub secret: Fr,
    pub nullifier_trapdoor: Fr,
    pub vote: VoteVector,
    pub randomness: Fr,
    pub commitment: Fr,
    pub path: MembershipPath,
    pub election_id: Fr,
    pub merkle_root: Fr,
}

/// The exact named-field map the external prover consumes
///
/// Every value is a decimal string; sequences are sequences of decimal
/// strings. Field names are part of the prover interface and must not
/// change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProverInput {
    pub secret: String,
    pub nullifier_trapdoor: String,
    pub vote: Vec<String>,
    pub randomness: String,
    pub commitment: String,
    pub path_elements: Vec<String>,
    pub path_indices: Vec<String>,
    pub election_id: String,
    pub merkle_root: String,
}

impl Witness {
    /// Validate structural invariants and package the witness
    ///
    /// The commitment is derived here rather than accepted from the caller,
    /// so witness and commitment can never disagree.
    pub fn assemble(
        identity: &VoterIdentity,
        vote: &VoteVector,
        randomness: Fr,
        path: &MembershipPath,
        params: &ElectionParameters,
        tree_depth: usize,
    ) -> Result<Self> {
        if vote.len() != params.num_candidates {
            return Err(BallotError::witness_validation(format!(
                "vote vector has {} entries, election has {} candidates",
                vote.len(),
                params.num_candidates
            )));
        }
        if path.elements.len() != tree_depth || path.indices.len() != tree_depth {
            return Err(BallotError::witness_validation(format!(
                "membership path has {} elements / {} indices, tree depth is {}",
                path.elements.len(),
                path.indices.len(),
                tree_depth
            )));
        }
        if path.indices.iter().any(|bit| *bit > 1) {
            return Err(BallotError::witness_validation(
                "path indices must be 0 or 1",
            ));
        }
        if randomness == Fr::ZERO {
            return Err(BallotError::witness_validation(
                "commitment randomness must be nonzero",
            ));
        }

        let commitment = derive_commitment(vote, randomness)?;

        Ok(Self {
            secret: identity.secret,
            nullifier_trapdoor: identity.nullifier_trapdoor,
            vote: vote.clone(),
            randomness,
            commitment,
            path: path.clone(),
            election_id: params.election_id_field(),
            merkle_root: params.merkle_root,
        })
    }

    /// Serialize into the prover's decimal-string input map
    pub fn to_prover_input(&self) -> ProverInput {
        ProverInput {
            secret: field_to_decimal(self.secret),
            nullifier_trapdoor: field_to_decimal(self.nullifier_trapdoor),
            vote: self
                .vote
                .as_field_elements()
                .iter()
                .map(|v| field_to_decimal(*v))
                .collect(),
            randomness: field_to_decimal(self.randomness),
            commitment: field_to_decimal(self.commitment),
            path_elements: self
                .path
                .elements
                .iter()
                .map(|e| field_to_decimal(*e))
                .collect(),
            path_indices: self.path.indices.iter().map(|b| b.to_string()).collect(),
            election_id: field_to_decimal(self.election_id),
            merkle_root: field_to_decimal(self.merkle_root),
        }
    }
}

// The secret and trapdoor must not leak through logging
impl fmt::Debug for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Witness")
            .field("secret", &"<redacted>")
            .field("nullifier_trapdoor", &"<redacted>")
            .field("vote", &"<redacted>")
            .field("randomness", &"<redacted>")
            .field("commitment", &self.commitment)
            .field("election_id", &self.election_id)
            .field("merkle_root", &self.merkle_root)
            .finish()
    }
}
