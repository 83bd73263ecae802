//! [`BigUint`] division operations.

use super::slice;
use crate::{BigUint, Error, Limb, Result, primitives::div_wide};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes `self / rhs` and `self % rhs`, returning [`Error::DivByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }

        let mut buf = [[Limb::ZERO; LIMBS]; 2];
        let u = buf.as_flattened_mut();
        u[..LIMBS].copy_from_slice(&self.limbs);

        let mut v = rhs.limbs;
        let mut q = [Limb::ZERO; LIMBS];
        slice::div_rem(u, &mut v, &mut q);

        let mut r = [Limb::ZERO; LIMBS];
        r.copy_from_slice(&u[..LIMBS]);
        Ok((Self::from_limbs(q), Self::from_limbs(r)))
    }

    /// Perform checked division, returning [`Error::DivByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// Perform checked reduction, returning [`Error::DivByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Divides by a single non-zero limb, returning the quotient and remainder.
    pub(crate) const fn div_rem_limb(&self, rhs: Limb) -> (Self, Limb) {
        debug_assert!(!rhs.is_zero());
        let mut q = [Limb::ZERO; LIMBS];
        let mut rem = 0;

        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            let (qi, ri) = div_wide(rem, self.limbs[i].0, rhs.0);
            q[i] = Limb(qi);
            rem = ri;
        }

        (Self { limbs: q }, Limb(rem))
    }

    /// Reduces the raw double-width value `(lo, hi)` modulo the non-zero `modulus`.
    pub(crate) fn rem_wide(lo: &[Limb; LIMBS], hi: &[Limb; LIMBS], modulus: &Self) -> Self {
        debug_assert!(!modulus.is_zero());
        let mut buf = [[Limb::ZERO; LIMBS]; 3];
        let u = buf.as_flattened_mut();
        u[..LIMBS].copy_from_slice(lo);
        u[LIMBS..2 * LIMBS].copy_from_slice(hi);

        let mut v = modulus.limbs;
        let mut q = [[Limb::ZERO; LIMBS]; 2];
        slice::div_rem(u, &mut v, q.as_flattened_mut());

        let mut r = [Limb::ZERO; LIMBS];
        r.copy_from_slice(&u[..LIMBS]);
        Self::from_limbs(r)
    }

    /// Reduces an arbitrary-length little-endian limb slice modulo the non-zero `modulus`.
    pub(crate) fn rem_limbs(value: &[Limb], modulus: &Self) -> Self {
        debug_assert!(!modulus.is_zero());
        // Horner over `LIMBS`-limb chunks, most significant (possibly short) chunk first:
        // acc = (acc * 2^(LIMBS * W) + chunk) mod m
        let (body, top) = value.split_at(value.len() - value.len() % LIMBS);
        let mut hi = [Limb::ZERO; LIMBS];
        hi[..top.len()].copy_from_slice(top);
        let mut acc = Self::rem_wide(&hi, &[Limb::ZERO; LIMBS], modulus);

        let mut lo = [Limb::ZERO; LIMBS];
        for chunk in body.rchunks_exact(LIMBS) {
            lo.copy_from_slice(chunk);
            acc = Self::rem_wide(&lo, &acc.limbs, modulus);
        }

        acc
    }
}

impl_checked_binop!(
    Div,
    div,
    DivAssign,
    div_assign,
    checked_div,
    "attempted to divide by zero"
);

impl_checked_binop!(
    Rem,
    rem,
    RemAssign,
    rem_assign,
    checked_rem,
    "attempted to calculate the remainder with a divisor of zero"
);
