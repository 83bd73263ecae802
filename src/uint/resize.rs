use crate::{BigUint, Error, Limb, Result};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Construct a [`BigUint<B, L>`] from this value, zero-extending when widening and discarding
    /// the bits at positions `>= B` when narrowing.
    #[inline]
    #[must_use]
    pub const fn resize<const B: u32, const L: usize>(&self) -> BigUint<B, L> {
        let mut limbs = [Limb::ZERO; L];
        let mut i = 0;
        while i < L && i < LIMBS {
            limbs[i] = self.limbs[i];
            i += 1;
        }
        BigUint::<B, L>::from_limbs(limbs)
    }

    /// Construct a [`BigUint<B, L>`] holding exactly this value, returning [`Error::Overflow`] if
    /// it needs more than `B` bits.
    #[inline]
    pub const fn checked_resize<const B: u32, const L: usize>(&self) -> Result<BigUint<B, L>> {
        if self.bits() > B {
            Err(Error::Overflow)
        } else {
            Ok(self.resize())
        }
    }
}
