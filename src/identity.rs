//! Voter identity material
//!
//! Each voter is issued one `VoterIdentity` before the election. The secret
//! is never revealed; the trapdoor is consumed only to derive a nullifier.
//! Only the derived leaf hash is ever published.

use std::fmt;

use ff::Field;
use halo2curves::bn256::Fr;
use rand::{CryptoRng, RngCore};

use crate::poseidon::hash1;

/// A voter's private identity: membership secret plus nullifier trapdoor
///
/// Both values stay private. The public leaf in the membership tree is
/// `hash1(secret)`; the per-election nullifier is derived from the trapdoor.
#[derive(Clone, PartialEq, Eq)]
pub struct VoterIdentity {
    pub secret: Fr,
    pub nullifier_trapdoor: Fr,
}

impl VoterIdentity {
    pub fn new(secret: Fr, nullifier_trapdoor: Fr) -> Self {
        Self {
            secret,
            nullifier_trapdoor,
        }
    }

    /// Issue a fresh identity from a cryptographic RNG
    pub fn random(rng: &mut (impl RngCore + CryptoRng)) -> Self {
        Self {
            secret: Fr::random(&mut *rng),
            nullifier_trapdoor: Fr::random(rng),
        }
    }

    /// Public tree leaf for this identity
    pub fn leaf(&self) -> Fr {
        hash1(self.secret)
    }
}

// Identities end up inside witnesses and session structs that get logged;
// the secret and trapdoor must never leak through a Debug rendering.
impl fmt::Debug for VoterIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoterIdentity")
            .field("secret", &"<redacted>")
            .field("nullifier_trapdoor", &"<redacted>")
            .finish()
    }
}
