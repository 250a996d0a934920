//! Field-element conversions
//!
//! Everything the circuit consumes is a BN254 scalar. The prover side of the
//! interface wants decimal strings; the contract side wants 0x-prefixed
//! big-endian hex. Both directions live here so every call site agrees on
//! byte order.

use ff::PrimeField;
use halo2curves::bn256::Fr;
use num_bigint::BigUint;

use crate::error::{BallotError, Result};

/// Convert a hex string to a field element
///
/// Accepts strings with or without "0x" prefix, big-endian digit order,
/// at most 32 bytes. Rejects values outside the scalar field rather than
/// reducing them silently.
pub fn hex_to_field(hex: &str) -> Result<Fr> {
    let hex = hex.trim_start_matches("0x");

    // Odd-length inputs get an implicit leading zero nibble
    let padded_hex = if hex.len() % 2 == 1 {
        format!("0{}", hex)
    } else {
        hex.to_string()
    };

    let bytes = hex::decode(&padded_hex)
        .map_err(|e| BallotError::encoding(format!("invalid hex: {}", e)))?;
    if bytes.len() > 32 {
        return Err(BallotError::encoding(format!(
            "hex value is {} bytes, field elements hold at most 32",
            bytes.len()
        )));
    }

    // Left-pad to 32 big-endian bytes, then flip to the little-endian repr
    let mut repr = [0u8; 32];
    let start = 32 - bytes.len();
    repr[start..].copy_from_slice(&bytes);
    repr.reverse();

    Option::from(Fr::from_repr(repr.into()))
        .ok_or_else(|| BallotError::encoding("field element out of range"))
}

/// Convert a field element to a 0x-prefixed big-endian hex string
///
/// Always 64 hex digits, zero-left-padded, which is the width the verifying
/// contract expects for the commitment argument.
pub fn field_to_hex(field: Fr) -> String {
    let mut bytes: [u8; 32] = field.to_repr().into();
    bytes.reverse();
    format!("0x{}", hex::encode(bytes))
}

/// Parse a decimal string into a field element, reduced into the field
pub fn decimal_to_field(decimal: &str) -> Result<Fr> {
    Fr::from_str_vartime(decimal)
        .ok_or_else(|| BallotError::encoding(format!("invalid decimal string: {:?}", decimal)))
}

/// Render a field element as a canonical decimal string
///
/// This is the serialization the external prover's witness map uses.
pub fn field_to_decimal(field: Fr) -> String {
    BigUint::from_bytes_le(field.to_repr().as_ref()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip_with_prefix() {
        let hex = "0x24fbb8669f430c88a6fefa469d5966e88bf38858927b8c3d2629d555a3bc5212";
        let field = hex_to_field(hex).unwrap();
        assert_eq!(field_to_hex(field), hex);
    }

    #[test]
    fn test_hex_without_prefix() {
        let field = hex_to_field("2a").unwrap();
        assert_eq!(field, Fr::from(42u64));
    }

    #[test]
    fn test_hex_is_big_endian() {
        // 0x010203 = 66051
        let field = hex_to_field("0x010203").unwrap();
        assert_eq!(field, Fr::from(66051u64));
    }

    #[test]
    fn test_hex_pads_to_64_digits() {
        let hex = field_to_hex(Fr::from(1u64));
        assert_eq!(hex.len(), 66); // 0x + 64 hex chars
        assert!(hex.starts_with("0x000000"));
        assert!(hex.ends_with("01"));
    }

    #[test]
    fn test_hex_rejects_oversized_value() {
        // One byte past 32 cannot be a field element
        let too_long = format!("0x01{}", "00".repeat(32));
        assert!(hex_to_field(&too_long).is_err());
    }

    #[test]
    fn test_hex_rejects_non_canonical_value() {
        // The scalar field modulus itself is not a canonical element
        let modulus = "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";
        assert!(hex_to_field(modulus).is_err());
    }

    #[test]
    fn test_decimal_roundtrip() {
        let field = decimal_to_field("123456789123456789").unwrap();
        assert_eq!(field_to_decimal(field), "123456789123456789");
    }

    #[test]
    fn test_decimal_rejects_garbage() {
        assert!(decimal_to_field("0x2a").is_err());
        assert!(decimal_to_field("not a number").is_err());
    }

    #[test]
    fn test_decimal_of_zero() {
        use ff::Field;
        assert_eq!(field_to_decimal(Fr::ZERO), "0");
    }
}
