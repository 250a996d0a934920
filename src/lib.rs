//! Off-chain witness construction and proof packaging for anonymous,
//! verifiable ballots.
//!
//! A voter proves membership in the enrolled-voter set and casts an encoded
//! vote without revealing identity. This crate covers everything between the
//! voter's secret and the verifying contract call: identity commitments, the
//! fixed-depth Poseidon Merkle tree, membership paths, vote commitments and
//! nullifiers, witness assembly for the external prover, and calldata-exact
//! proof encoding. The circuit and the ledger are black boxes behind the
//! [`session::VoteProver`] and [`session::LedgerClient`] traits.

pub mod ballot;
pub mod encoder;
pub mod error;
pub mod field;
pub mod identity;
pub mod poseidon;
pub mod poseidon_constants; // pre-computed BN254 round constants / MDS
pub mod session;
pub mod tree;
pub mod witness;

pub use ballot::{derive_commitment, derive_nullifier, sample_randomness, VoteVector};
pub use encoder::{encode_commitment, encode_proof, EncodedProof, ProofPoints, ProverOutput};
pub use error::{BallotError, Result};
pub use identity::VoterIdentity;
pub use poseidon::{hash1, hash2, hash_many};
pub use session::{ElectionSession, LedgerClient, SubmissionReceipt, VoteProver};
pub use tree::{MembershipPath, MembershipTree, ZERO_SENTINEL};
pub use witness::{ElectionParameters, ProverInput, Witness};
