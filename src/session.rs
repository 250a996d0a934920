//! Election session: external seams and the cast-vote pipeline
//!
//! A session is an explicit configuration value (prover handle, ledger
//! handle, voter identity, shared membership tree) with no ambient global
//! state. The pipeline is strictly sequential; its only suspension points
//! are the prover call and the two ledger calls. Cancelling mid-flight
//! simply drops the in-memory witness.

use std::sync::Arc;

use async_trait::async_trait;
use halo2curves::bn256::Fr;
use rand::rngs::OsRng;
use tracing::{debug, info};

use crate::ballot::{derive_nullifier, sample_randomness, VoteVector};
use crate::encoder::{encode_proof, EncodedProof, ProverOutput};
use crate::error::{BallotError, Result};
use crate::identity::VoterIdentity;
use crate::tree::MembershipTree;
use crate::witness::{ElectionParameters, ProverInput, Witness};

/// External zero-knowledge prover, consumed as a black box
///
/// Implementations surface failures as `ProofGeneration`; the pipeline
/// propagates them without retrying.
#[async_trait]
pub trait VoteProver: Send + Sync {
    async fn prove(&self, input: &ProverInput) -> Result<ProverOutput>;
}

/// External ledger: election parameters out, encoded proofs in
///
/// The nullifier-spent check is the ledger's responsibility and must be
/// atomic there; this side only surfaces the revert reason verbatim.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn election_parameters(&self) -> Result<ElectionParameters>;

    async fn submit_vote(&self, proof: &EncodedProof) -> Result<SubmissionReceipt>;
}

/// Outcome of a confirmed ledger write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub transaction_id: String,
    pub gas_used: u64,
    pub confirmed: bool,
}

/// One voter's view of one election
///
/// The tree is the election-wide enrollment snapshot, shared read-only
/// across all voters' sessions.
pub struct ElectionSession<P, L> {
    prover: P,
    ledger: L,
    identity: VoterIdentity,
    tree: Arc<MembershipTree>,
}

impl<P: VoteProver, L: LedgerClient> ElectionSession<P, L> {
    pub fn new(prover: P, ledger: L, identity: VoterIdentity, tree: Arc<MembershipTree>) -> Self {
        Self {
            prover,
            ledger,
            identity,
            tree,
        }
    }

    pub fn tree(&self) -> &MembershipTree {
        &self.tree
    }

    /// This voter's nullifier for the given election
    pub fn nullifier(&self, election_id: Fr) -> Fr {
        derive_nullifier(self.identity.nullifier_trapdoor, election_id)
    }

    /// Prove membership, commit to a ballot, and submit it
    ///
    /// `leaf_index` is the voter's enrollment position; `candidate` is
    /// 1-indexed. Stages run strictly in order: read parameters, extract
    /// path, assemble witness, prove, encode, submit. Every stage fails
    /// fast and leaves the shared tree untouched.
    pub async fn cast_vote(&self, leaf_index: usize, candidate: usize) -> Result<SubmissionReceipt> {
        let params = self.ledger.election_parameters().await?;
        debug!(
            election_id = params.election_id,
            num_candidates = params.num_candidates,
            "fetched election parameters"
        );

        // The off-chain snapshot and the published root must agree, or the
        // proof cannot verify against the on-chain root
        if self.tree.root() != params.merkle_root {
            return Err(BallotError::configuration(
                "enrollment snapshot root does not match the root published by the ledger",
            ));
        }

        // The claimed index must actually hold this voter's commitment
        let expected_leaf = self.identity.leaf();
        if self.tree.leaf(leaf_index) != Some(expected_leaf) {
            return Err(BallotError::configuration(format!(
                "leaf index {} does not hold this voter's identity commitment",
                leaf_index
            )));
        }

        let path = self.tree.prove(leaf_index)?;
        let vote = VoteVector::for_candidate(candidate, params.num_candidates)?;
        let randomness = sample_randomness(&mut OsRng);
        let witness = Witness::assemble(
            &self.identity,
            &vote,
            randomness,
            &path,
            &params,
            self.tree.depth(),
        )?;

        let prover_input = witness.to_prover_input();
        debug!("invoking external prover");
        let output = self.prover.prove(&prover_input).await?;

        let encoded = encode_proof(&output, witness.commitment)?;
        let receipt = self.ledger.submit_vote(&encoded).await?;
        info!(
            transaction_id = %receipt.transaction_id,
            gas_used = receipt.gas_used,
            confirmed = receipt.confirmed,
            "vote submitted"
        );
        Ok(receipt)
    }
}
