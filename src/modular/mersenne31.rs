//! The Mersenne prime field `p = 2^31 - 1`.

use super::ModularOps;
use crate::{Error, Result};

/// The Mersenne31 prime.
pub const MERSENNE31_MODULUS: u32 = 0x7FFF_FFFF;

/// Engine for the Mersenne31 field with canonical `u32` residues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mersenne31Ops;

impl Mersenne31Ops {
    /// `2^31 = 1 (mod p)`, so the high bits fold onto the low ones.
    #[inline(always)]
    const fn fold(x: u64) -> u64 {
        (x & MERSENNE31_MODULUS as u64) + (x >> 31)
    }

    /// Canonicalize `x <= 2p`.
    #[inline(always)]
    const fn canonicalize(x: u64) -> u32 {
        let p = MERSENNE31_MODULUS as u64;
        (if x >= p { x - p } else { x }) as u32
    }

    /// Reduce an arbitrary `u64`.
    #[inline]
    pub const fn reduce64(x: u64) -> u32 {
        Self::canonicalize(Self::fold(Self::fold(x)))
    }
}

impl ModularOps for Mersenne31Ops {
    type Integer = u32;

    #[inline]
    fn modulus(&self) -> u32 {
        MERSENNE31_MODULUS
    }

    #[inline]
    fn one(&self) -> u32 {
        1
    }

    #[inline]
    fn add(&self, a: &u32, b: &u32) -> u32 {
        // Both below 2^31, so the sum fits.
        let sum = a + b;
        if sum >= MERSENNE31_MODULUS {
            sum - MERSENNE31_MODULUS
        } else {
            sum
        }
    }

    #[inline]
    fn sub(&self, a: &u32, b: &u32) -> u32 {
        let (diff, borrow) = a.overflowing_sub(*b);
        if borrow {
            diff.wrapping_add(MERSENNE31_MODULUS)
        } else {
            diff
        }
    }

    #[inline]
    fn mul(&self, a: &u32, b: &u32) -> u32 {
        // A product below p^2 folds to at most 2p - 1.
        Self::canonicalize(Self::fold(u64::from(*a) * u64::from(*b)))
    }

    #[inline]
    fn neg(&self, a: &u32) -> u32 {
        if *a == 0 { 0 } else { MERSENNE31_MODULUS - a }
    }

    #[inline]
    fn to_montgomery(&self, x: &u32) -> u32 {
        Self::reduce64(u64::from(*x))
    }

    #[inline]
    fn from_montgomery(&self, a: &u32) -> u32 {
        *a
    }

    #[inline]
    fn from_u64(&self, x: u64) -> u32 {
        Self::reduce64(x)
    }

    fn inverse(&self, a: &u32) -> Result<u32> {
        if *a == 0 {
            return Err(Error::NotInvertible);
        }
        Ok(self.pow_unsigned(a, &(MERSENNE31_MODULUS - 2)))
    }
}
