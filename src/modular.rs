//! Modular arithmetic over fixed moduli.
//!
//! A *reduction engine* implementing [`ModularOps`] owns everything needed to compute modulo one
//! fixed modulus. Five engines are provided:
//!
//! - [`BarrettOps`]: any non-zero modulus, canonical residues, Barrett reduction of double-width
//!   products.
//! - [`MontgomeryOps`]: odd moduli `>= 3`, residues kept in Montgomery form, reduced with REDC.
//! - [`GoldilocksOps`], [`Mersenne31Ops`] and [`BabyBearOps`]: the fixed primes `2^64 - 2^32 + 1`,
//!   `2^31 - 1` and `15 * 2^27 + 1` on native integers.
//!
//! [`BigMod`] pairs a residue with the [`OpsStorage`] through which its engine is reached: a
//! zero-sized [`ConstOps`] for moduli declared with [`montgomery_modulus!`] or
//! [`barrett_modulus!`], or an engine value / reference / `Arc` for moduli known at runtime.
//!
//! [`montgomery_modulus!`]: crate::montgomery_modulus
//! [`barrett_modulus!`]: crate::barrett_modulus

mod macros;

mod babybear;
mod barrett;
mod big_mod;
mod goldilocks;
mod mersenne31;
mod montgomery;
mod ops;
mod reduction;
mod storage;

pub use self::{
    babybear::{
        BABYBEAR_MODULUS, BabyBearOps, babybear_add8, babybear_fp4_vec_mul, babybear_mul8, fp4_mul,
    },
    barrett::BarrettOps,
    big_mod::{
        BabyBear, BarrettBigModRt, BigMod, BigModCt, BigModInteger, Goldilocks, Mersenne31,
        MontgomeryBigModRt,
    },
    goldilocks::{GOLDILOCKS_MODULUS, GoldilocksOps},
    mersenne31::{MERSENNE31_MODULUS, Mersenne31Ops},
    montgomery::MontgomeryOps,
    ops::ModularOps,
    storage::{ConstModulus, ConstOps, OpsStorage},
};

use crate::{BigUint, PowExponent, Result};

/// Computes `x^-1 mod m` for a raw base `x` of `ops`.
///
/// Fails with [`Error::NotInvertible`][`crate::Error::NotInvertible`] for zero and for values
/// sharing a factor with the modulus.
pub fn inverse<O: ModularOps>(x: &O::Integer, ops: &O) -> Result<O::Integer> {
    ops.inverse(x)
}

/// Computes `base^exp mod m` for a raw base `base` of `ops`.
///
/// Left-to-right square-and-multiply over the bits of `exp`; runs in time variable in `exp`.
pub fn pow_unsigned<O, E>(base: &O::Integer, exp: &E, ops: &O) -> O::Integer
where
    O: ModularOps,
    E: PowExponent + ?Sized,
{
    ops.pow_unsigned(base, exp)
}

/// Computes a square root of `a` modulo the prime `p`.
///
/// Returns `r` with `r^2 = a (mod p)`, choosing whichever root Tonelli-Shanks lands on.
///
/// # Errors
///
/// - [`Error::InvalidModulus`] if `p` is zero or an even number other than `2`,
/// - [`Error::NoSquareRoot`] if `a` is not a quadratic residue modulo `p` (a composite `p` is
///   usually caught here as well).
///
/// [`Error::InvalidModulus`]: crate::Error::InvalidModulus
/// [`Error::NoSquareRoot`]: crate::Error::NoSquareRoot
pub fn ressol<const BITS: u32, const LIMBS: usize>(
    a: &BigUint<BITS, LIMBS>,
    p: &BigUint<BITS, LIMBS>,
) -> Result<BigUint<BITS, LIMBS>> {
    let ops = BarrettOps::new(*p)?;
    Ok(BigMod::new(a, &ops).sqrt()?.retrieve())
}
