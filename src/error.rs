//! Error taxonomy for the witness pipeline
//!
//! Every error is fail-fast: it aborts the current voter's proof attempt and
//! never mutates the shared membership tree. External failures (prover,
//! ledger) are propagated with their original message verbatim; retry
//! semantics belong to the caller.

use thiserror::Error;

/// Result type alias for witness-pipeline operations
pub type Result<T> = std::result::Result<T, BallotError>;

/// Main error type for witness-pipeline operations
#[derive(Debug, Error)]
pub enum BallotError {
    /// Election setup cannot hold the enrolled voters (e.g. 2^depth < N)
    /// or a component was driven outside its structural contract
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Witness structural invariant violated before the prover was invoked
    /// (malformed vote vector, mismatched path length, zero randomness)
    #[error("witness validation failed: {0}")]
    WitnessValidation(String),

    /// External prover failure, propagated without local retry
    #[error("proof generation failed: {0}")]
    ProofGeneration(String),

    /// Prover output could not be normalized into the verifier layout
    #[error("proof encoding failed: {0}")]
    Encoding(String),

    /// Ledger submission reverted or failed; carries the revert reason
    #[error("submission failed: {0}")]
    Submission(String),
}

impl BallotError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn witness_validation(msg: impl Into<String>) -> Self {
        Self::WitnessValidation(msg.into())
    }

    pub fn proof_generation(msg: impl Into<String>) -> Self {
        Self::ProofGeneration(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }
}
