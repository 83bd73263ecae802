//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use crypto_multiprecision::{BigUint as Uint, Limb};
use num_bigint::BigUint;

/// `Uint` to `num_bigint::BigUint`
pub fn to_biguint<const BITS: u32, const LIMBS: usize>(uint: &Uint<BITS, LIMBS>) -> BigUint {
    let mut bytes = Vec::with_capacity(LIMBS * Limb::BYTES);

    for limb in uint.as_limbs() {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }

    BigUint::from_bytes_le(&bytes)
}

/// `num_bigint::BigUint` to `Uint`, panicking if the value does not fit.
pub fn to_uint<const BITS: u32, const LIMBS: usize>(big: &BigUint) -> Uint<BITS, LIMBS> {
    Uint::from_le_slice(&big.to_bytes_le()).expect("value fits")
}

/// `2^bits` as a `num_bigint::BigUint`.
pub fn pow2(bits: u32) -> BigUint {
    BigUint::from(1u8) << bits
}
