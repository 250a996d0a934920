//! Native Poseidon hash over the BN254 scalar field
//!
//! This is the off-chain twin of the in-circuit hash: same sponge (WIDTH=3,
//! RATE=2), same round counts, same constants. The input arity is part of
//! the sponge domain, so `hash1`, `hash2` and every `hash_many` arity are
//! mutually domain-separated, which is the property the membership tree and
//! the commitment/nullifier derivations rely on.

use ff::Field;
use halo2_gadgets::poseidon::primitives::{ConstantLength, Hash, Mds, Spec};
use halo2curves::bn256::Fr;

use crate::error::{BallotError, Result};
use crate::poseidon_constants::{mds_inv_matrix, mds_matrix, round_constants};

/// State size
pub const T: usize = 3;
/// Absorption rate (inputs per permutation)
pub const RATE: usize = 2;
/// Full rounds
pub const R_F: usize = 8;
/// Partial rounds
pub const R_P: usize = 56;

/// Largest input list `hash_many` accepts. Bounds the commitment arity to
/// `MAX_HASH_ARITY - 1` candidates (the final slot is the randomness).
pub const MAX_HASH_ARITY: usize = 16;

/// Poseidon specification for BN254 (WIDTH=3, RATE=2, x^5 S-box)
///
/// Round constants and MDS matrices come pre-computed from
/// `poseidon_constants`; regenerating them at runtime would cost tens of
/// milliseconds per hash for no benefit.
#[derive(Debug, Clone, Copy)]
pub struct BallotPoseidonSpec;

impl Spec<Fr, 3, 2> for BallotPoseidonSpec {
    fn full_rounds() -> usize {
        R_F
    }

    fn partial_rounds() -> usize {
        R_P
    }

    fn sbox(val: Fr) -> Fr {
        val.pow_vartime([5])
    }

    fn secure_mds() -> usize {
        0
    }

    fn constants() -> (Vec<[Fr; 3]>, Mds<Fr, 3>, Mds<Fr, 3>) {
        (round_constants(), mds_matrix(), mds_inv_matrix())
    }
}

fn hash_fixed<const L: usize>(inputs: &[Fr]) -> Fr {
    let mut message = [Fr::ZERO; L];
    message.copy_from_slice(inputs);
    Hash::<Fr, BallotPoseidonSpec, ConstantLength<L>, 3, 2>::init().hash(message)
}

/// Hash a single field element (identity commitment → leaf)
pub fn hash1(value: Fr) -> Fr {
    hash_fixed::<1>(&[value])
}

/// Hash two field elements (Merkle parent nodes, nullifiers)
///
/// Non-commutative: `hash2(a, b) != hash2(b, a)`, which is what pins
/// sibling order in the membership tree.
pub fn hash2(left: Fr, right: Fr) -> Fr {
    hash_fixed::<2>(&[left, right])
}

/// Hash an ordered input list (vote commitments)
///
/// Arity 1 and 2 agree with `hash1`/`hash2`. Arities outside
/// `1..=MAX_HASH_ARITY` are a `Configuration` error; there is no silent
/// truncation or chunking fallback.
pub fn hash_many(inputs: &[Fr]) -> Result<Fr> {
    macro_rules! dispatch_arity {
        ($($len:literal)*) => {
            match inputs.len() {
                $($len => Ok(hash_fixed::<$len>(inputs)),)*
                n => Err(BallotError::configuration(format!(
                    "unsupported hash arity {} (supported: 1..={})",
                    n, MAX_HASH_ARITY
                ))),
            }
        };
    }
    dispatch_arity!(1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::field_to_hex;

    #[test]
    fn test_known_digests_pin_the_constant_table() {
        // Reference digests computed once with the PSE sponge over the
        // round constants and MDS matrix in poseidon_constants.rs. Any
        // drift in that table changes these values, so the suite cannot
        // pass against a corrupted copy.
        assert_eq!(
            field_to_hex(hash1(Fr::from(1u64))),
            "0x088072e69a5d47b32642f7bbf9b675b3e6481e8fee30e0953409fa1cdbb0cd84"
        );
        assert_eq!(
            field_to_hex(hash2(Fr::from(1u64), Fr::from(2u64))),
            "0x130ff6b1d75ee0cda6f05f243f0e670aa1b8429b9d3826efd10bf28ca17996f1"
        );
    }

    #[test]
    fn test_hash2_deterministic() {
        let a = Fr::from(12345u64);
        let b = Fr::from(67890u64);
        assert_eq!(hash2(a, b), hash2(a, b));
    }

    #[test]
    fn test_hash1_deterministic() {
        assert_eq!(hash1(Fr::from(42u64)), hash1(Fr::from(42u64)));
    }

    #[test]
    fn test_hash2_noncommutative() {
        let a = Fr::from(12345u64);
        let b = Fr::from(67890u64);
        assert_ne!(
            hash2(a, b),
            hash2(b, a),
            "sibling order must be pinned by the hash"
        );
    }

    #[test]
    fn test_hash_of_zero_is_nonzero() {
        assert_ne!(hash1(Fr::ZERO), Fr::ZERO);
        assert_ne!(hash2(Fr::ZERO, Fr::ZERO), Fr::ZERO);
    }

    #[test]
    fn test_hash_many_agrees_with_fixed_arity() {
        let a = Fr::from(7u64);
        let b = Fr::from(11u64);
        assert_eq!(hash_many(&[a]).unwrap(), hash1(a));
        assert_eq!(hash_many(&[a, b]).unwrap(), hash2(a, b));
    }

    #[test]
    fn test_arity_domain_separation() {
        // Appending an explicit zero must not collide with the shorter input
        let x = Fr::from(99u64);
        assert_ne!(hash1(x), hash2(x, Fr::ZERO));
        assert_ne!(
            hash_many(&[x, Fr::ZERO]).unwrap(),
            hash_many(&[x, Fr::ZERO, Fr::ZERO]).unwrap()
        );
    }

    #[test]
    fn test_hash_many_rejects_unsupported_arity() {
        assert!(hash_many(&[]).is_err());
        let too_many = vec![Fr::ZERO; MAX_HASH_ARITY + 1];
        assert!(hash_many(&too_many).is_err());
    }

    #[test]
    fn test_hash_many_max_arity() {
        let inputs: Vec<Fr> = (0..MAX_HASH_ARITY as u64).map(Fr::from).collect();
        assert!(hash_many(&inputs).is_ok());
    }

    #[test]
    fn test_different_inputs_different_digests() {
        assert_ne!(
            hash2(Fr::from(1u64), Fr::from(2u64)),
            hash2(Fr::from(3u64), Fr::from(4u64))
        );
    }
}
