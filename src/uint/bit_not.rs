//! [`BigUint`] bitwise NOT operations.

use crate::{BigUint, Limb};
use core::ops::Not;

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes bitwise `!a` within the `BITS`-bit width.
    #[inline(always)]
    #[must_use]
    pub const fn not(&self) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(!self.limbs[i].0);
            i += 1;
        }

        Self::from_limbs(limbs)
    }
}

impl<const BITS: u32, const LIMBS: usize> Not for BigUint<BITS, LIMBS> {
    type Output = Self;

    fn not(self) -> Self {
        BigUint::not(&self)
    }
}

impl<const BITS: u32, const LIMBS: usize> Not for &BigUint<BITS, LIMBS> {
    type Output = BigUint<BITS, LIMBS>;

    fn not(self) -> BigUint<BITS, LIMBS> {
        BigUint::not(self)
    }
}
