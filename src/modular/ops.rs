//! The [`ModularOps`] contract shared by every reduction engine.

use crate::{Limb, PowExponent, Result, Unsigned};
use core::{
    fmt::{Debug, Display, LowerHex, UpperHex},
    hash::Hash,
};

/// A reduction engine for one fixed modulus `m`.
///
/// Values handled by an engine are *raw bases*: residues in `[0, m)` kept in whichever internal
/// representation the engine uses (the canonical residue for Barrett, Goldilocks and Mersenne31,
/// Montgomery form `x * R mod m` for Montgomery and BabyBear). Every method takes and returns
/// raw bases unless stated otherwise, and every raw base it returns is below `m`.
///
/// Engines are immutable once constructed.
pub trait ModularOps: Debug + PartialEq + Send + Sync {
    /// Integer type holding both raw bases and the modulus.
    type Integer: Unsigned + Default + Hash + Display + LowerHex + UpperHex + Send + Sync;

    /// The modulus `m`.
    fn modulus(&self) -> Self::Integer;

    /// Raw base of `0`.
    fn zero(&self) -> Self::Integer {
        Self::Integer::default()
    }

    /// Raw base of `1`.
    fn one(&self) -> Self::Integer;

    /// Computes `a + b mod m`.
    fn add(&self, a: &Self::Integer, b: &Self::Integer) -> Self::Integer;

    /// Computes `a - b mod m`.
    fn sub(&self, a: &Self::Integer, b: &Self::Integer) -> Self::Integer;

    /// Computes `a * b mod m`.
    fn mul(&self, a: &Self::Integer, b: &Self::Integer) -> Self::Integer;

    /// Computes `a * a mod m`.
    fn square(&self, a: &Self::Integer) -> Self::Integer {
        self.mul(a, a)
    }

    /// Computes `-a mod m`.
    fn neg(&self, a: &Self::Integer) -> Self::Integer;

    /// Computes `a + a mod m`.
    fn double(&self, a: &Self::Integer) -> Self::Integer {
        self.add(a, a)
    }

    /// Is `a` the raw base of zero?
    fn is_zero(&self, a: &Self::Integer) -> bool {
        a.is_zero_vartime()
    }

    /// Convert an arbitrary integer (not necessarily below `m`) into a raw base.
    fn to_montgomery(&self, x: &Self::Integer) -> Self::Integer;

    /// Convert a raw base back into its canonical residue in `[0, m)`.
    fn from_montgomery(&self, a: &Self::Integer) -> Self::Integer;

    /// Convert an arbitrary `u64` into a raw base.
    fn from_u64(&self, x: u64) -> Self::Integer;

    /// Computes `a^-1 mod m`, failing with [`Error::NotInvertible`][`crate::Error::NotInvertible`]
    /// for zero and for values sharing a factor with `m`.
    fn inverse(&self, a: &Self::Integer) -> Result<Self::Integer>;

    /// Computes `base^exp mod m` by left-to-right square-and-multiply.
    ///
    /// Runs in time variable in `exp`. `exp = 0` yields one.
    fn pow_unsigned<E: PowExponent + ?Sized>(&self, base: &Self::Integer, exp: &E) -> Self::Integer {
        let mut acc = self.one();
        for i in (0..exp.exponent_bits()).rev() {
            acc = self.square(&acc);
            if exp.exponent_bit(i) {
                acc = self.mul(&acc, base);
            }
        }
        acc
    }

    /// Convert an arbitrary little-endian limb slice into a raw base.
    fn from_limbs(&self, limbs: &[Limb]) -> Self::Integer {
        // Horner in base 2^W, with the radix built from two half-limb factors so it fits a `u64`.
        let half = self.from_u64(1 << (Limb::BITS / 2));
        let radix = self.square(&half);

        let mut acc = self.zero();
        for limb in limbs.iter().rev() {
            acc = self.mul(&acc, &radix);
            acc = self.add(&acc, &self.from_u64(u64::from(limb.0)));
        }
        acc
    }
}
