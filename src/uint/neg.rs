//! [`BigUint`] negation.

use crate::BigUint;

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Perform wrapping negation: `2^BITS - self`, and zero for zero.
    #[inline]
    #[must_use]
    pub const fn wrapping_neg(&self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }

    /// Computes `-self mod p` for `self < p`.
    #[inline]
    #[must_use]
    pub const fn neg_mod(&self, p: &Self) -> Self {
        if self.is_zero() {
            Self::ZERO
        } else {
            p.wrapping_sub(self)
        }
    }
}
