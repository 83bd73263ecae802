//! The BabyBear prime field `p = 15 * 2^27 + 1`, kept in Montgomery form with `R = 2^32`.

mod simd;

pub use simd::{babybear_add8, babybear_fp4_vec_mul, babybear_mul8, fp4_mul};

use super::ModularOps;
use crate::{Error, Result};

/// The BabyBear prime.
pub const BABYBEAR_MODULUS: u32 = 0x7800_0001;

/// `p^-1 mod 2^32`.
pub(crate) const MU: u32 = 0x8800_0001;

/// `R mod p`, the Montgomery form of one.
const R: u32 = 0x0FFF_FFFE;

/// `R^2 mod p`.
const R2: u32 = 0x45DD_DDE3;

/// Engine for the BabyBear field. Raw bases are Montgomery residues `x * 2^32 mod p` in `[0, p)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BabyBearOps;

impl BabyBearOps {
    /// Montgomery reduction of `x < 2^32 * p` to a value in `(-p, p)` congruent to `x / 2^32`.
    #[inline(always)]
    pub const fn monty_reduce_signed(x: u64) -> i32 {
        let t = (x as u32).wrapping_mul(MU);
        let u = t as u64 * BABYBEAR_MODULUS as u64;
        // The low 32 bits of the difference cancel; the high half is the signed result.
        ((x.wrapping_sub(u) as i64) >> 32) as i32
    }

    /// Montgomery reduction of `x < 2^32 * p` to `[0, p)`.
    #[inline(always)]
    pub const fn monty_reduce(x: u64) -> u32 {
        let r = Self::monty_reduce_signed(x);
        if r < 0 {
            (r + BABYBEAR_MODULUS as i32) as u32
        } else {
            r as u32
        }
    }

    /// Montgomery form of an arbitrary `u32`.
    #[inline]
    pub const fn to_monty(x: u32) -> u32 {
        Self::monty_reduce(x as u64 * R2 as u64)
    }
}

impl ModularOps for BabyBearOps {
    type Integer = u32;

    #[inline]
    fn modulus(&self) -> u32 {
        BABYBEAR_MODULUS
    }

    #[inline]
    fn one(&self) -> u32 {
        R
    }

    #[inline]
    fn add(&self, a: &u32, b: &u32) -> u32 {
        let sum = a + b;
        if sum >= BABYBEAR_MODULUS {
            sum - BABYBEAR_MODULUS
        } else {
            sum
        }
    }

    #[inline]
    fn sub(&self, a: &u32, b: &u32) -> u32 {
        let (diff, borrow) = a.overflowing_sub(*b);
        if borrow {
            diff.wrapping_add(BABYBEAR_MODULUS)
        } else {
            diff
        }
    }

    #[inline]
    fn mul(&self, a: &u32, b: &u32) -> u32 {
        Self::monty_reduce(u64::from(*a) * u64::from(*b))
    }

    #[inline]
    fn neg(&self, a: &u32) -> u32 {
        if *a == 0 { 0 } else { BABYBEAR_MODULUS - a }
    }

    #[inline]
    fn to_montgomery(&self, x: &u32) -> u32 {
        Self::to_monty(*x)
    }

    #[inline]
    fn from_montgomery(&self, a: &u32) -> u32 {
        Self::monty_reduce(u64::from(*a))
    }

    #[inline]
    fn from_u64(&self, x: u64) -> u32 {
        Self::to_monty((x % u64::from(BABYBEAR_MODULUS)) as u32)
    }

    fn inverse(&self, a: &u32) -> Result<u32> {
        if *a == 0 {
            return Err(Error::NotInvertible);
        }
        Ok(self.pow_unsigned(a, &(BABYBEAR_MODULUS - 2)))
    }
}
