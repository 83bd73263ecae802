//! [`BigUint`] bitwise right shift operations.

use crate::{BigUint, Limb};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes `self >> shift`. Shifting by `BITS` or more yields zero.
    #[inline]
    #[must_use]
    pub const fn shr_vartime(&self, shift: u32) -> Self {
        if shift >= BITS {
            return Self::ZERO;
        }

        let limb_shift = (shift / Limb::BITS) as usize;
        let bit_shift = shift % Limb::BITS;
        let mut limbs = [Limb::ZERO; LIMBS];

        let mut i = 0;
        while i + limb_shift < LIMBS {
            let src = i + limb_shift;
            let mut w = self.limbs[src].0 >> bit_shift;
            if bit_shift > 0 && src + 1 < LIMBS {
                w |= self.limbs[src + 1].0 << (Limb::BITS - bit_shift);
            }
            limbs[i] = Limb(w);
            i += 1;
        }

        Self { limbs }
    }

    /// Computes `self >> 1`.
    #[inline(always)]
    #[must_use]
    pub const fn shr1(&self) -> Self {
        self.shr_vartime(1)
    }
}

impl_shift_op!(Shr, shr, ShrAssign, shr_assign, shr_vartime, u32, usize);

#[cfg(test)]
mod tests {
    use crate::{BigUint, U128, U256, nlimbs};

    type U7 = BigUint<7, { nlimbs(7) }>;

    const N: U256 = U256::from_hex_literal(
        "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    );

    const N_2: U256 = U256::from_hex_literal(
        "0x7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF5D576E7357A4501DDFE92F46681B20A0",
    );

    #[test]
    fn shr1() {
        assert_eq!(N.shr1(), N_2);
        assert_eq!(N >> 1u32, N_2);
    }

    #[test]
    fn shr_across_limbs() {
        let x = U128::from_u128(0x0123_4567_89ab_cdef_fedc_ba98_7654_3210);
        assert_eq!(x >> 68u32, U128::from_u128(0x0123_4567_89ab_cdef_fedc_ba98_7654_3210 >> 68));
        assert_eq!(x >> 128u32, U128::ZERO);
    }

    #[test]
    fn shr_small_width() {
        let x = U7::from_u64(21);
        assert_eq!(x >> 1u32, U7::from_u64(10));
        assert_eq!(x >> 3u32, U7::from_u64(2));
    }

    #[test]
    fn shr_assign() {
        let mut x = U256::from_u64(1024);
        x >>= 10usize;
        assert_eq!(x, U256::ONE);
    }
}
