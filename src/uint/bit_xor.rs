//! [`BigUint`] bitwise XOR operations.

use crate::{BigUint, Limb};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes bitwise `a ^ b`.
    #[inline(always)]
    #[must_use]
    pub const fn bitxor(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(self.limbs[i].0 ^ rhs.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }
}

impl_infallible_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor);
