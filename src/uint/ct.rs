//! [`subtle`] trait impls for [`BigUint`].

use crate::{BigUint, Limb};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

impl<const BITS: u32, const LIMBS: usize> ConstantTimeEq for BigUint<BITS, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs.ct_eq(&other.limbs)
    }
}

impl<const BITS: u32, const LIMBS: usize> ConditionallySelectable for BigUint<BITS, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = Limb::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self { limbs }
    }
}
