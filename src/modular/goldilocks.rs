//! The Goldilocks prime field `p = 2^64 - 2^32 + 1`.

use super::ModularOps;
use crate::{Error, Result};

/// The Goldilocks prime.
pub const GOLDILOCKS_MODULUS: u64 = 0xFFFF_FFFF_0000_0001;

/// `2^64 mod p = 2^32 - 1`.
const EPSILON: u64 = 0xFFFF_FFFF;

/// Engine for the Goldilocks field with canonical `u64` residues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GoldilocksOps;

impl GoldilocksOps {
    /// Reduce a 128-bit value using `2^64 = 2^32 - 1` and `2^96 = -1 (mod p)`.
    #[inline]
    pub const fn reduce128(x: u128) -> u64 {
        let x_lo = x as u64;
        let x_hi = (x >> 64) as u64;
        let x_hi_hi = x_hi >> 32;
        let x_hi_lo = x_hi & EPSILON;

        let (mut t0, borrow) = x_lo.overflowing_sub(x_hi_hi);
        if borrow {
            // Cannot underflow: a borrow means t0 >= 2^64 - 2^32.
            t0 = t0.wrapping_sub(EPSILON);
        }
        let t1 = x_hi_lo * EPSILON;

        let (sum, carry) = t0.overflowing_add(t1);
        let t2 = sum.wrapping_add(EPSILON * carry as u64);
        Self::canonicalize(t2)
    }

    #[inline(always)]
    const fn canonicalize(x: u64) -> u64 {
        if x >= GOLDILOCKS_MODULUS {
            x - GOLDILOCKS_MODULUS
        } else {
            x
        }
    }
}

impl ModularOps for GoldilocksOps {
    type Integer = u64;

    #[inline]
    fn modulus(&self) -> u64 {
        GOLDILOCKS_MODULUS
    }

    #[inline]
    fn one(&self) -> u64 {
        1
    }

    #[inline]
    fn add(&self, a: &u64, b: &u64) -> u64 {
        let (sum, overflow) = a.overflowing_add(*b);
        if overflow || sum >= GOLDILOCKS_MODULUS {
            sum.wrapping_sub(GOLDILOCKS_MODULUS)
        } else {
            sum
        }
    }

    #[inline]
    fn sub(&self, a: &u64, b: &u64) -> u64 {
        let (diff, borrow) = a.overflowing_sub(*b);
        if borrow {
            diff.wrapping_add(GOLDILOCKS_MODULUS)
        } else {
            diff
        }
    }

    #[inline]
    fn mul(&self, a: &u64, b: &u64) -> u64 {
        Self::reduce128(u128::from(*a) * u128::from(*b))
    }

    #[inline]
    fn neg(&self, a: &u64) -> u64 {
        if *a == 0 { 0 } else { GOLDILOCKS_MODULUS - a }
    }

    #[inline]
    fn to_montgomery(&self, x: &u64) -> u64 {
        Self::canonicalize(*x)
    }

    #[inline]
    fn from_montgomery(&self, a: &u64) -> u64 {
        *a
    }

    #[inline]
    fn from_u64(&self, x: u64) -> u64 {
        Self::canonicalize(x)
    }

    fn inverse(&self, a: &u64) -> Result<u64> {
        if *a == 0 {
            return Err(Error::NotInvertible);
        }
        Ok(self.pow_unsigned(a, &(GOLDILOCKS_MODULUS - 2)))
    }
}
