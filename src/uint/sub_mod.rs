//! [`BigUint`] modular subtraction operations.

use crate::{BigUint, Limb};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes `self - rhs mod p`.
    ///
    /// Assumes `self - rhs` as unbounded signed integer is in `[-p, p)`.
    #[inline]
    #[must_use]
    pub const fn sub_mod(&self, rhs: &Self, p: &Self) -> Self {
        let (diff, borrow) = Self::sbb_arrays(&self.limbs, &rhs.limbs, Limb::ZERO);
        if borrow.is_zero() {
            Self { limbs: diff }
        } else {
            // Adding `p` brings the wrapped difference back into `[0, p)`.
            let (limbs, _) = Self::adc_arrays(&diff, &p.limbs, Limb::ZERO);
            Self { limbs }
        }
    }
}
