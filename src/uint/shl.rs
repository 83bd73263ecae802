//! [`BigUint`] bitwise left shift operations.

use crate::{BigUint, Limb};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes `self << shift`, discarding the bits shifted past `BITS`.
    ///
    /// Shifting by `BITS` or more yields zero.
    #[inline]
    #[must_use]
    pub const fn shl_vartime(&self, shift: u32) -> Self {
        if shift >= BITS {
            return Self::ZERO;
        }

        let limb_shift = (shift / Limb::BITS) as usize;
        let bit_shift = shift % Limb::BITS;
        let mut limbs = [Limb::ZERO; LIMBS];

        let mut i = LIMBS;
        while i > limb_shift {
            i -= 1;
            let src = i - limb_shift;
            let mut w = self.limbs[src].0 << bit_shift;
            if bit_shift > 0 && src > 0 {
                w |= self.limbs[src - 1].0 >> (Limb::BITS - bit_shift);
            }
            limbs[i] = Limb(w);
        }

        Self::from_limbs(limbs)
    }

    /// Computes `self << 1` over the raw limbs, returning the bit shifted out of the top limb.
    ///
    /// The result may carry a bit at position `BITS` when the top limb is partial.
    #[inline(always)]
    pub(crate) const fn shl1_raw(limbs: &[Limb; LIMBS]) -> ([Limb; LIMBS], Limb) {
        let mut out = [Limb::ZERO; LIMBS];
        let mut carry = 0;
        let mut i = 0;
        while i < LIMBS {
            out[i] = Limb((limbs[i].0 << 1) | carry);
            carry = limbs[i].0 >> Limb::HI_BIT;
            i += 1;
        }
        (out, Limb(carry))
    }
}

impl_shift_op!(Shl, shl, ShlAssign, shl_assign, shl_vartime, u32, usize);

#[cfg(test)]
mod tests {
    use crate::{BigUint, Limb, U256, nlimbs};

    type U7 = BigUint<7, { nlimbs(7) }>;

    const N: U256 = U256::from_hex_literal(
        "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    );

    const TWO_N: U256 = U256::from_hex_literal(
        "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD755DB9CD5E9140777FA4BD19A06C8282",
    );

    const SIXTY_FIVE: U256 = U256::from_hex_literal(
        "0xFFFFFFFFFFFFFFFD755DB9CD5E9140777FA4BD19A06C82820000000000000000",
    );

    #[test]
    fn shl_simple() {
        let t = U256::from_u64(1);
        assert_eq!(t << 1u32, U256::from_u64(2));
        assert_eq!(t << 64u32, U256::ONE.shl_vartime(64));
        assert_eq!(U256::ONE << 255u32, U256::ZERO.set_bit(255, true));
    }

    #[test]
    fn shl1() {
        assert_eq!(N << 1u32, TWO_N);
    }

    #[test]
    fn shl65() {
        assert_eq!(N << 65u32, SIXTY_FIVE);
    }

    #[test]
    fn shl_past_width() {
        assert_eq!(N << 256u32, U256::ZERO);
        assert_eq!(N << 1000usize, U256::ZERO);
    }

    #[test]
    fn shl_small_width() {
        let x = U7::from_u64(21);
        assert_eq!(x << 1u32, U7::from_u64(42));
        assert_eq!(x << 3u32, U7::from_u64(40));
        assert_eq!(x << 5u32, U7::from_u64(32));
        assert_eq!(x << 7u32, U7::ZERO);
    }

    #[test]
    fn shl_assign() {
        let mut x = U256::ONE;
        x <<= 10u32;
        assert_eq!(x, U256::from_u64(1024));
    }

    #[test]
    fn shl1_raw_carry() {
        let (limbs, carry) = U256::shl1_raw(U256::MAX.as_limbs());
        assert_eq!(carry, Limb::ONE);
        assert_eq!(U256::from_limbs(limbs), U256::MAX.wrapping_sub(&U256::ONE));
    }
}
