use crate::{BigUint, Limb};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Calculate the number of bits needed to represent this number, i.e. the index of the most
    /// significant set bit plus one. Returns `0` for zero.
    #[inline]
    #[must_use]
    pub const fn bits(&self) -> u32 {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if !self.limbs[i].is_zero() {
                return i as u32 * Limb::BITS + self.limbs[i].bits();
            }
        }
        0
    }

    /// Calculate the number of leading zeros within the `BITS`-bit width.
    #[inline]
    #[must_use]
    pub const fn leading_zeros(&self) -> u32 {
        BITS - self.bits()
    }

    /// Calculate the number of trailing zeros. Returns `BITS` for zero.
    #[inline]
    #[must_use]
    pub const fn trailing_zeros(&self) -> u32 {
        let mut i = 0;
        while i < LIMBS {
            if !self.limbs[i].is_zero() {
                return i as u32 * Limb::BITS + self.limbs[i].trailing_zeros();
            }
            i += 1;
        }
        BITS
    }

    /// Get the value of the bit at position `index`. Bits at positions `>= BITS` read as `false`.
    #[inline]
    #[must_use]
    pub const fn bit(&self, index: u32) -> bool {
        if index >= BITS {
            return false;
        }
        let limb = (index / Limb::BITS) as usize;
        (self.limbs[limb].0 >> (index % Limb::BITS)) & 1 == 1
    }

    /// Returns `self` with the bit at position `index` set to `value`.
    ///
    /// Positions `>= BITS` are outside the value and leave it unchanged.
    #[inline]
    #[must_use]
    pub const fn set_bit(mut self, index: u32, value: bool) -> Self {
        if index >= BITS {
            return self;
        }
        let limb = (index / Limb::BITS) as usize;
        let mask = 1 << (index % Limb::BITS);
        if value {
            self.limbs[limb].0 |= mask;
        } else {
            self.limbs[limb].0 &= !mask;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigUint, U256, nlimbs};

    type U7 = BigUint<7, { nlimbs(7) }>;

    fn uint_with_bits_at(positions: &[u32]) -> U256 {
        positions
            .iter()
            .fold(U256::ZERO, |acc, &pos| acc.set_bit(pos, true))
    }

    #[test]
    fn bits() {
        assert_eq!(U256::ZERO.bits(), 0);
        assert_eq!(U256::ONE.bits(), 1);
        assert_eq!(uint_with_bits_at(&[0, 3, 170]).bits(), 171);
        assert_eq!(U256::MAX.bits(), 256);
    }

    #[test]
    fn bit_and_set_bit() {
        let x = uint_with_bits_at(&[16, 79, 150]);
        assert!(x.bit(16));
        assert!(x.bit(79));
        assert!(!x.bit(80));
        assert!(!x.bit(256));
        assert_eq!(x.set_bit(79, false), uint_with_bits_at(&[16, 150]));
    }

    #[test]
    fn set_bit_out_of_range_is_ignored() {
        assert_eq!(U7::ZERO.set_bit(7, true), U7::ZERO);
        assert_eq!(U7::ZERO.set_bit(6, true), U7::from_u64(64));
    }

    #[test]
    fn leading_and_trailing_zeros() {
        assert_eq!(U256::ZERO.leading_zeros(), 256);
        assert_eq!(U256::ZERO.trailing_zeros(), 256);
        assert_eq!(U7::from_u64(21).leading_zeros(), 2);
        assert_eq!(U7::from_u64(32).trailing_zeros(), 5);
        assert_eq!(uint_with_bits_at(&[100, 200]).trailing_zeros(), 100);
    }

    #[test]
    fn msb_of_small_width() {
        assert_eq!(U7::from_u64(21).bits() - 1, 4);
    }
}
