//! Normalization of prover output into the verifying contract's layout
//!
//! The prover hands back either a structured proof object (`pi_a`/`pi_b`/
//! `pi_c` plus public signals) or a single pre-serialized calldata string.
//! Both collapse into the same `EncodedProof`: `a[2]`, `b[2][2]`, `c[2]`,
//! the ordered public signals, and the commitment as fixed-width hex.
//!
//! Proof coordinates live in the BN254 base field, which is wider than the
//! scalar field, so normalization works on `BigUint` rather than `Fr`.

use halo2curves::bn256::Fr;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BallotError, Result};
use crate::field::field_to_hex;

/// Number of coordinates in a serialized Groth16-style proof (a: 2, b: 4, c: 2)
const PROOF_ELEMENT_COUNT: usize = 8;

/// Structured proof object as emitted by the prover
///
/// `pi_a`/`pi_c` are G1 points (two coordinates used; provers often append a
/// projective `1`), `pi_b` is a G2 point as two coordinate pairs in the
/// prover's native ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofPoints {
    pub pi_a: Vec<String>,
    pub pi_b: Vec<Vec<String>>,
    pub pi_c: Vec<String>,
}

/// The two shapes the external prover can hand back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProverOutput {
    /// Proof object plus ordered public signals
    Structured {
        proof: ProofPoints,
        public_signals: Vec<String>,
    },
    /// Pre-serialized bracket/quote-delimited comma list
    Calldata(String),
}

/// Proof in the exact shape the verifying contract call expects
///
/// All values are canonical unsigned integers; the full public-signal
/// sequence is preserved in order; any verifier-specific slicing belongs to
/// the submission layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedProof {
    pub a: [BigUint; 2],
    pub b: [[BigUint; 2]; 2],
    pub c: [BigUint; 2],
    pub public_signals: Vec<BigUint>,
    /// 0x-prefixed, zero-left-padded 64-hex-digit vote commitment
    pub commitment: String,
}

/// Encode the vote commitment for the contract: 0x + 64 hex digits
pub fn encode_commitment(commitment: Fr) -> String {
    field_to_hex(commitment)
}

/// Normalize prover output into the verifier's argument layout
pub fn encode_proof(output: &ProverOutput, commitment: Fr) -> Result<EncodedProof> {
    let (a, b, c, public_signals) = match output {
        ProverOutput::Structured {
            proof,
            public_signals,
        } => encode_structured(proof, public_signals)?,
        ProverOutput::Calldata(text) => encode_calldata(text)?,
    };
    debug!(
        signals = public_signals.len(),
        "encoded proof for verifier submission"
    );
    Ok(EncodedProof {
        a,
        b,
        c,
        public_signals,
        commitment: encode_commitment(commitment),
    })
}

type ProofParts = ([BigUint; 2], [[BigUint; 2]; 2], [BigUint; 2], Vec<BigUint>);

fn encode_structured(proof: &ProofPoints, signals: &[String]) -> Result<ProofParts> {
    if proof.pi_a.len() < 2 || proof.pi_c.len() < 2 {
        return Err(BallotError::encoding(format!(
            "G1 points need at least 2 coordinates, got pi_a: {}, pi_c: {}",
            proof.pi_a.len(),
            proof.pi_c.len()
        )));
    }
    if proof.pi_b.len() < 2 || proof.pi_b[0].len() < 2 || proof.pi_b[1].len() < 2 {
        return Err(BallotError::encoding(
            "pi_b must hold two coordinate pairs",
        ));
    }

    let a = [parse_uint(&proof.pi_a[0])?, parse_uint(&proof.pi_a[1])?];
    // The contract's pairing convention swaps each Fq2 coordinate pair
    // relative to the prover's native output. Getting this wrong verifies
    // nothing and reverts nothing: the proof just silently fails.
    let b = [
        [parse_uint(&proof.pi_b[0][1])?, parse_uint(&proof.pi_b[0][0])?],
        [parse_uint(&proof.pi_b[1][1])?, parse_uint(&proof.pi_b[1][0])?],
    ];
    let c = [parse_uint(&proof.pi_c[0])?, parse_uint(&proof.pi_c[1])?];
    let public_signals = signals
        .iter()
        .map(|s| parse_uint(s))
        .collect::<Result<Vec<_>>>()?;

    Ok((a, b, c, public_signals))
}

fn encode_calldata(text: &str) -> Result<ProofParts> {
    let tokens = tokenize_calldata(text);
    if tokens.len() < PROOF_ELEMENT_COUNT {
        return Err(BallotError::encoding(format!(
            "calldata holds {} elements, need at least {} proof coordinates",
            tokens.len(),
            PROOF_ELEMENT_COUNT
        )));
    }

    let values = tokens
        .iter()
        .map(|t| parse_uint(t))
        .collect::<Result<Vec<_>>>()?;

    // Pre-serialized calldata already carries the contract's coordinate
    // order, b rows included, so consume positionally
    let a = [values[0].clone(), values[1].clone()];
    let b = [
        [values[2].clone(), values[3].clone()],
        [values[4].clone(), values[5].clone()],
    ];
    let c = [values[6].clone(), values[7].clone()];
    let public_signals = values[PROOF_ELEMENT_COUNT..].to_vec();

    Ok((a, b, c, public_signals))
}

/// Split a bracket/quote-delimited comma list into bare numeric tokens
fn tokenize_calldata(text: &str) -> Vec<String> {
    text.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '\'') && !c.is_whitespace())
        .collect::<String>()
        .split(',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a decimal or 0x-hex token into a canonical unsigned integer
fn parse_uint(token: &str) -> Result<BigUint> {
    let trimmed = token.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex_digits) => BigUint::parse_bytes(hex_digits.as_bytes(), 16),
        None => BigUint::parse_bytes(trimmed.as_bytes(), 10),
    };
    parsed.ok_or_else(|| {
        BallotError::encoding(format!("unparseable numeric element {:?}", token))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_calldata_roundtrip_positional() {
        let calldata = r#"["0x1","0x2"],[["0x3","0x4"],["0x5","0x6"]],["0x7","0x8"],["9","10","11"]"#;
        let encoded =
            encode_proof(&ProverOutput::Calldata(calldata.into()), Fr::from(5u64)).unwrap();

        assert_eq!(encoded.a, [big(1), big(2)]);
        assert_eq!(encoded.b, [[big(3), big(4)], [big(5), big(6)]]);
        assert_eq!(encoded.c, [big(7), big(8)]);
        assert_eq!(encoded.public_signals, vec![big(9), big(10), big(11)]);
    }

    #[test]
    fn test_calldata_without_public_signals() {
        let calldata = r#"["1","2"],[["3","4"],["5","6"]],["7","8"]"#;
        let encoded =
            encode_proof(&ProverOutput::Calldata(calldata.into()), Fr::from(5u64)).unwrap();
        assert!(encoded.public_signals.is_empty());
    }

    #[test]
    fn test_calldata_too_short_rejected() {
        let calldata = r#"["0x1","0x2"],[["0x3","0x4"]]"#;
        let err =
            encode_proof(&ProverOutput::Calldata(calldata.into()), Fr::from(5u64)).unwrap_err();
        assert!(matches!(err, BallotError::Encoding(_)));
    }

    #[test]
    fn test_calldata_garbage_token_rejected() {
        let calldata = r#"["0x1","pepper"],[["3","4"],["5","6"]],["7","8"]"#;
        assert!(encode_proof(&ProverOutput::Calldata(calldata.into()), Fr::from(5u64)).is_err());
    }

    #[test]
    fn test_structured_swaps_b_coordinates() {
        let output = ProverOutput::Structured {
            proof: ProofPoints {
                pi_a: vec!["1".into(), "2".into(), "1".into()],
                pi_b: vec![
                    vec!["3".into(), "4".into()],
                    vec!["5".into(), "6".into()],
                    vec!["1".into(), "0".into()],
                ],
                pi_c: vec!["7".into(), "8".into(), "1".into()],
            },
            public_signals: vec!["42".into()],
        };
        let encoded = encode_proof(&output, Fr::from(5u64)).unwrap();

        // Projective tails on pi_a/pi_c are dropped; each pi_b pair is swapped
        assert_eq!(encoded.a, [big(1), big(2)]);
        assert_eq!(encoded.b, [[big(4), big(3)], [big(6), big(5)]]);
        assert_eq!(encoded.c, [big(7), big(8)]);
        assert_eq!(encoded.public_signals, vec![big(42)]);
    }

    #[test]
    fn test_structured_bad_shape_rejected() {
        let output = ProverOutput::Structured {
            proof: ProofPoints {
                pi_a: vec!["1".into(), "2".into()],
                pi_b: vec![vec!["3".into()], vec!["5".into(), "6".into()]],
                pi_c: vec!["7".into(), "8".into()],
            },
            public_signals: vec![],
        };
        assert!(encode_proof(&output, Fr::from(5u64)).is_err());
    }

    #[test]
    fn test_hex_tokens_become_canonical_decimal() {
        let calldata = r#"["0x0a","0xff"],[["3","4"],["5","6"]],["7","8"]"#;
        let encoded =
            encode_proof(&ProverOutput::Calldata(calldata.into()), Fr::from(5u64)).unwrap();
        assert_eq!(encoded.a[0].to_string(), "10");
        assert_eq!(encoded.a[1].to_string(), "255");
    }

    #[test]
    fn test_commitment_is_fixed_width_hex() {
        let commitment = encode_commitment(Fr::from(0xabcdu64));
        assert_eq!(commitment.len(), 66);
        assert!(commitment.starts_with("0x"));
        assert!(commitment.ends_with("abcd"));
        assert_eq!(&commitment[2..6], "0000");
    }

    #[test]
    fn test_scientific_notation_rejected() {
        assert!(parse_uint("1e5").is_err());
        assert!(parse_uint("-3").is_err());
    }
}
