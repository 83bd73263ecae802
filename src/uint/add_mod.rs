//! [`BigUint`] modular addition operations.

use crate::{BigUint, Limb};
use core::cmp::Ordering;

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes `self + rhs mod p`.
    ///
    /// Assumes `self + rhs` as unbounded integer is `< 2p`.
    #[inline]
    #[must_use]
    pub const fn add_mod(&self, rhs: &Self, p: &Self) -> Self {
        let (sum, carry) = Self::adc_arrays(&self.limbs, &rhs.limbs, Limb::ZERO);
        Self::sub_mod_with_carry(sum, carry, p)
    }

    /// Computes `self + self mod p`.
    ///
    /// Assumes `self < p`.
    #[inline]
    #[must_use]
    pub const fn double_mod(&self, p: &Self) -> Self {
        let (doubled, carry) = Self::shl1_raw(&self.limbs);
        Self::sub_mod_with_carry(doubled, carry, p)
    }

    /// Reduces the raw value `carry:limbs < 2p` to `[0, p)` with at most one subtraction.
    #[inline(always)]
    pub(crate) const fn sub_mod_with_carry(limbs: [Limb; LIMBS], carry: Limb, p: &Self) -> Self {
        let reduce = !carry.is_zero()
            || !matches!(Self::cmp_arrays(&limbs, &p.limbs), Ordering::Less);
        if reduce {
            // The true difference is below `p`, so any borrow cancels the carry.
            let (diff, _) = Self::sbb_arrays(&limbs, &p.limbs, Limb::ZERO);
            Self { limbs: diff }
        } else {
            Self { limbs }
        }
    }
}
